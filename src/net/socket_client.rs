//! WebSocket pump for `SocketTransport`.
//!
//! Opens one connection and forwards emitted envelopes onto it. The
//! transport is only marked open between the socket reaching the open state
//! and the connection ending; outside that window emits fail immediately.
//! There is no reconnect: once the socket drops, the transport stays closed.
//! Incoming frames are logged and otherwise ignored.
//!
//! All WebSocket logic is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment.

#[cfg(feature = "hydrate")]
use super::transport::SocketTransport;

/// Build a WebSocket URL for `path` on the page's own host.
#[cfg(feature = "hydrate")]
pub fn socket_url(path: &str) -> String {
    let location = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();
    let ws_proto = if location.starts_with("https") { "wss" } else { "ws" };
    let host = web_sys::window()
        .and_then(|w| w.location().host().ok())
        .unwrap_or_else(|| "localhost:3000".to_owned());
    format!("{ws_proto}://{host}{path}")
}

/// Spawn the socket pump as a local async task and return its transport.
///
/// The transport starts closed and opens once the connection is up.
#[cfg(feature = "hydrate")]
pub fn spawn_socket_client(url: String) -> SocketTransport {
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<String>();
    let transport = SocketTransport::new(tx);
    let status = transport.clone();

    leptos::task::spawn_local(async move {
        match connect_and_run(&url, &status, rx).await {
            Ok(()) => log::info!("socket disconnected"),
            Err(e) => log::warn!("socket error: {e}"),
        }
        status.set_open(false);
    });

    transport
}

/// Connect and forward emitted envelopes until the socket drops.
#[cfg(feature = "hydrate")]
async fn connect_and_run(
    url: &str,
    status: &SocketTransport,
    mut rx: futures::channel::mpsc::UnboundedReceiver<String>,
) -> Result<(), String> {
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    // Resolves once the handshake completes, or errors if it fails.
    futures::future::poll_fn(|cx| ws_write.poll_ready_unpin(cx))
        .await
        .map_err(|e| e.to_string())?;
    status.set_open(true);
    log::info!("socket connected to {url}");

    let send_task = async {
        while let Some(msg) = rx.next().await {
            if let Err(e) = ws_write.send(Message::Text(msg)).await {
                log::warn!("socket send error: {e}");
                break;
            }
        }
    };

    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => log::debug!("socket recv: {text}"),
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    log::warn!("socket recv error: {e}");
                    break;
                }
            }
        }
    };

    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;
    status.set_open(false);
    Ok(())
}
