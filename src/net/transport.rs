//! Transport seam and the participant-bound chat channel.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use futures::channel::mpsc::UnboundedSender;
use serde_json::Value;

use super::types::{ChatMessagePayload, Envelope, Participants};
use crate::config::ComposerConfig;
use crate::error::ComposerError;

/// Real-time channel that can emit named events. Emits are fire-and-forget.
pub trait Transport: Send + Sync {
    /// Emit `event` with `payload`.
    ///
    /// # Errors
    ///
    /// Returns an error if the event could not be queued.
    fn emit(&self, event: &str, payload: &Value) -> Result<(), ComposerError>;
}

/// Shared handle to a transport, as passed into the composer.
pub type SharedTransport = Arc<dyn Transport>;

/// Transport that hands JSON envelopes to a live socket connection.
///
/// Emits are refused with [`ComposerError::TransportClosed`] unless the
/// socket client has marked the connection open, so nothing accumulates
/// while disconnected.
#[derive(Clone, Debug)]
pub struct SocketTransport {
    tx: UnboundedSender<String>,
    open: Arc<AtomicBool>,
}

impl SocketTransport {
    /// Transport over `tx`. Starts closed.
    pub fn new(tx: UnboundedSender<String>) -> Self {
        Self { tx, open: Arc::new(AtomicBool::new(false)) }
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Acquire)
    }

    pub fn set_open(&self, open: bool) {
        self.open.store(open, Ordering::Release);
    }
}

impl Transport for SocketTransport {
    fn emit(&self, event: &str, payload: &Value) -> Result<(), ComposerError> {
        if !self.is_open() {
            return Err(ComposerError::TransportClosed);
        }
        let envelope = Envelope {
            id: uuid::Uuid::new_v4().to_string(),
            event: event.to_owned(),
            payload: payload.clone(),
        };
        let json = serde_json::to_string(&envelope).map_err(ComposerError::Encode)?;
        self.tx.unbounded_send(json).map_err(|_| ComposerError::TransportClosed)
    }
}

/// Result of a send attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank draft; nothing happened.
    Skipped,
    /// One event was handed to the transport.
    Emitted,
    /// No transport is attached; the draft was only cleared.
    LocalOnly,
    /// The transport rejected the event; the draft was still cleared.
    Dropped,
}

/// Outbound side of one conversation: who writes to whom, and over what.
#[derive(Clone)]
pub struct ChatChannel {
    participants: Participants,
    transport: Option<SharedTransport>,
    event_name: String,
}

impl ChatChannel {
    pub fn new(participants: Participants, transport: Option<SharedTransport>, config: &ComposerConfig) -> Self {
        Self { participants, transport, event_name: config.event_name.clone() }
    }

    pub fn participants(&self) -> &Participants {
        &self.participants
    }

    pub fn has_transport(&self) -> bool {
        self.transport.is_some()
    }

    /// Emit `message` stamped with the current time.
    pub fn send_text(&self, message: String) -> SendOutcome {
        self.send_text_at(message, Utc::now())
    }

    /// Emit `message` stamped with `datetime`.
    pub fn send_text_at(&self, message: String, datetime: DateTime<Utc>) -> SendOutcome {
        let Some(transport) = self.transport.as_ref() else {
            log::debug!("no transport attached; message to {} kept local", self.participants.partner_id);
            return SendOutcome::LocalOnly;
        };

        let payload = ChatMessagePayload::text(&self.participants, message, datetime);
        let result = serde_json::to_value(&payload)
            .map_err(ComposerError::Encode)
            .and_then(|value| transport.emit(&self.event_name, &value));

        match result {
            Ok(()) => {
                log::debug!("{} emitted to {}", self.event_name, self.participants.partner_id);
                SendOutcome::Emitted
            }
            Err(e) => {
                log::warn!("{} to {} dropped: {e}", self.event_name, self.participants.partner_id);
                SendOutcome::Dropped
            }
        }
    }
}

impl std::fmt::Debug for ChatChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatChannel")
            .field("participants", &self.participants)
            .field("has_transport", &self.transport.is_some())
            .field("event_name", &self.event_name)
            .finish()
    }
}
