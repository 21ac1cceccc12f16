//! Crate error type.
//!
//! ERROR HANDLING
//! ==============
//! Only the transport and the JSON loaders return errors. UI event handlers
//! never propagate them; they log and degrade, so a failed emit still clears
//! the draft.

/// Errors produced by the composer's transport and loaders.
#[derive(Debug, thiserror::Error)]
pub enum ComposerError {
    /// The transport has no open connection to hand the event to.
    #[error("transport is not connected")]
    TransportClosed,
    /// An outbound payload could not be serialized.
    #[error("failed to encode outbound event: {0}")]
    Encode(#[source] serde_json::Error),
    /// A composer config document could not be parsed.
    #[error("invalid composer config: {0}")]
    Config(#[source] serde_json::Error),
    /// A translation bundle could not be parsed.
    #[error("invalid translation bundle: {0}")]
    Translations(#[source] serde_json::Error),
}
