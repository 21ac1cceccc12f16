//! Wire types for outbound chat events.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The two ends of the conversation the composer writes into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participants {
    /// Authenticated user sending the message.
    pub user_id: String,
    /// Conversation peer receiving it.
    pub partner_id: String,
}

impl Participants {
    pub fn new(user_id: impl Into<String>, partner_id: impl Into<String>) -> Self {
        Self { user_id: user_id.into(), partner_id: partner_id.into() }
    }
}

/// Message kind tag carried in every payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    #[default]
    Message,
}

/// Payload of the outbound `chat_message` event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessagePayload {
    pub from: String,
    pub to: String,
    pub message: String,
    /// Auxiliary data; always an empty object from this composer.
    pub data: Value,
    pub datetime: DateTime<Utc>,
    pub message_type: MessageKind,
}

impl ChatMessagePayload {
    pub fn text(participants: &Participants, message: String, datetime: DateTime<Utc>) -> Self {
        Self {
            from: participants.user_id.clone(),
            to: participants.partner_id.clone(),
            message,
            data: Value::Object(Map::new()),
            datetime,
            message_type: MessageKind::Message,
        }
    }
}

/// A named event as queued on the socket channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Unique identifier for this emit (UUID string).
    pub id: String,
    pub event: String,
    pub payload: Value,
}
