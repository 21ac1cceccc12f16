use super::*;
use std::sync::Mutex;

use crate::net::types::MessageKind;

/// Records every emit instead of sending it anywhere.
#[derive(Default)]
struct RecordingTransport {
    emitted: Mutex<Vec<(String, Value)>>,
}

impl Transport for RecordingTransport {
    fn emit(&self, event: &str, payload: &Value) -> Result<(), ComposerError> {
        self.emitted.lock().unwrap().push((event.to_owned(), payload.clone()));
        Ok(())
    }
}

fn participants() -> Participants {
    Participants::new("u-1", "u-2")
}

// =============================================================
// SocketTransport
// =============================================================

#[test]
fn socket_transport_starts_closed() {
    let (tx, mut rx) = futures::channel::mpsc::unbounded::<String>();
    let transport = SocketTransport::new(tx);

    assert!(!transport.is_open());
    let err = transport.emit("chat_message", &serde_json::json!({})).unwrap_err();
    assert!(matches!(err, ComposerError::TransportClosed));
    assert!(rx.try_recv().is_err());
}

#[test]
fn socket_transport_queues_json_envelope_when_open() {
    let (tx, mut rx) = futures::channel::mpsc::unbounded::<String>();
    let transport = SocketTransport::new(tx);
    transport.set_open(true);

    transport.emit("chat_message", &serde_json::json!({"message": "hi"})).unwrap();

    let raw = rx.try_recv().expect("queued envelope");
    let envelope: Envelope = serde_json::from_str(&raw).unwrap();
    assert_eq!(envelope.event, "chat_message");
    assert_eq!(envelope.payload, serde_json::json!({"message": "hi"}));
    assert!(uuid::Uuid::parse_str(&envelope.id).is_ok());
}

#[test]
fn socket_transport_refuses_after_connection_ends() {
    let (tx, mut rx) = futures::channel::mpsc::unbounded::<String>();
    let transport = SocketTransport::new(tx);
    transport.set_open(true);
    transport.emit("chat_message", &serde_json::json!({})).unwrap();

    transport.set_open(false);

    assert!(transport.emit("chat_message", &serde_json::json!({})).is_err());
    assert!(rx.try_recv().is_ok());
    assert!(rx.try_recv().is_err());
}

#[test]
fn clones_share_connection_state() {
    let (tx, _rx) = futures::channel::mpsc::unbounded::<String>();
    let transport = SocketTransport::new(tx);
    let status = transport.clone();

    status.set_open(true);
    assert!(transport.is_open());
}

#[test]
fn socket_transport_reports_closed_channel() {
    let (tx, rx) = futures::channel::mpsc::unbounded::<String>();
    drop(rx);
    let transport = SocketTransport::new(tx);
    transport.set_open(true);

    let err = transport.emit("chat_message", &serde_json::json!({})).unwrap_err();
    assert!(matches!(err, ComposerError::TransportClosed));
}

// =============================================================
// ChatChannel
// =============================================================

#[test]
fn channel_without_transport_is_local_only() {
    let channel = ChatChannel::new(participants(), None, &ComposerConfig::default());
    assert!(!channel.has_transport());
    assert_eq!(channel.send_text("hello".to_owned()), SendOutcome::LocalOnly);
}

#[test]
fn channel_emits_one_chat_message_event() {
    let recorder = Arc::new(RecordingTransport::default());
    let channel = ChatChannel::new(participants(), Some(recorder.clone()), &ComposerConfig::default());

    assert_eq!(channel.send_text("hello".to_owned()), SendOutcome::Emitted);

    let emitted = recorder.emitted.lock().unwrap();
    assert_eq!(emitted.len(), 1);
    let (event, payload) = &emitted[0];
    assert_eq!(event, "chat_message");

    let payload: ChatMessagePayload = serde_json::from_value(payload.clone()).unwrap();
    assert_eq!(payload.from, "u-1");
    assert_eq!(payload.to, "u-2");
    assert_eq!(payload.message, "hello");
    assert_eq!(payload.data, serde_json::json!({}));
    assert_eq!(payload.message_type, MessageKind::Message);
}

#[test]
fn channel_stamps_given_datetime() {
    let recorder = Arc::new(RecordingTransport::default());
    let channel = ChatChannel::new(participants(), Some(recorder.clone()), &ComposerConfig::default());
    let at = DateTime::parse_from_rfc3339("2025-01-02T03:04:05Z").unwrap().with_timezone(&Utc);

    channel.send_text_at("x".to_owned(), at);

    let emitted = recorder.emitted.lock().unwrap();
    assert_eq!(emitted[0].1["datetime"], "2025-01-02T03:04:05Z");
}

#[test]
fn channel_uses_configured_event_name() {
    let recorder = Arc::new(RecordingTransport::default());
    let config = ComposerConfig { event_name: "dm".to_owned(), ..ComposerConfig::default() };
    let channel = ChatChannel::new(participants(), Some(recorder.clone()), &config);

    channel.send_text("x".to_owned());

    assert_eq!(recorder.emitted.lock().unwrap()[0].0, "dm");
}

#[test]
fn channel_reports_dropped_on_closed_socket() {
    let (tx, rx) = futures::channel::mpsc::unbounded::<String>();
    drop(rx);
    let socket = SocketTransport::new(tx);
    socket.set_open(true);
    let channel = ChatChannel::new(participants(), Some(Arc::new(socket)), &ComposerConfig::default());

    assert_eq!(channel.send_text("x".to_owned()), SendOutcome::Dropped);
}

#[test]
fn sends_while_disconnected_are_dropped_not_queued() {
    let (tx, mut rx) = futures::channel::mpsc::unbounded::<String>();
    let channel = ChatChannel::new(
        participants(),
        Some(Arc::new(SocketTransport::new(tx))),
        &ComposerConfig::default(),
    );

    for i in 0..1000 {
        assert_eq!(channel.send_text(format!("msg {i}")), SendOutcome::Dropped);
    }
    assert!(rx.try_recv().is_err());
}
