//! # chat-composer
//!
//! Leptos + WASM message composer for a one-to-one chat panel: a text area,
//! an emoji picker, and a single staged file/image attachment.
//!
//! The composer's behavior lives in plain state types (`state`) that are
//! tested natively; the `components` module renders them and wires browser
//! events. Outbound messages go through the `net` transport as
//! `chat_message` events.

pub mod app;
pub mod components;
pub mod config;
pub mod emoji;
pub mod error;
pub mod i18n;
pub mod net;
pub mod state;
pub mod util;
