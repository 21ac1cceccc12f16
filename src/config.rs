//! Composer configuration.
//!
//! Every field has a default, so a host page can pass a partial JSON document
//! (or nothing at all) and only override what it needs.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ComposerError;

pub const DEFAULT_EVENT_NAME: &str = "chat_message";
pub const DEFAULT_IMAGE_ACCEPT: &str = ".gif,.jpg,.jpeg,.png";
pub const DEFAULT_FILE_ACCEPT: &str = "*";
pub const DEFAULT_NAME_DISPLAY_LIMIT: usize = 10;
pub const DEFAULT_SEND_KEY: &str = "Enter";
pub const DEFAULT_TEXTAREA_ROWS: u32 = 2;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    /// Event name passed to `Transport::emit` for outbound messages.
    pub event_name: String,
    /// `accept` filter for the image picker.
    pub image_accept: String,
    /// `accept` filter for the generic file picker.
    pub file_accept: String,
    /// Characters of the staged file name shown before the ellipsis.
    pub name_display_limit: usize,
    /// `KeyboardEvent.key` value that sends when pressed without Shift.
    pub send_key: String,
    pub textarea_rows: u32,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            event_name: DEFAULT_EVENT_NAME.to_owned(),
            image_accept: DEFAULT_IMAGE_ACCEPT.to_owned(),
            file_accept: DEFAULT_FILE_ACCEPT.to_owned(),
            name_display_limit: DEFAULT_NAME_DISPLAY_LIMIT,
            send_key: DEFAULT_SEND_KEY.to_owned(),
            textarea_rows: DEFAULT_TEXTAREA_ROWS,
        }
    }
}

impl ComposerConfig {
    /// Parse a config document, filling absent fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ComposerError::Config`] if `raw` is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self, ComposerError> {
        serde_json::from_str(raw).map_err(ComposerError::Config)
    }

    /// `accept` filter for the given picker.
    pub fn accept_for(&self, picker: PickerKind) -> &str {
        match picker {
            PickerKind::Image => &self.image_accept,
            PickerKind::File => &self.file_accept,
        }
    }
}

/// The two hidden file inputs behind the attach toolbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickerKind {
    Image,
    File,
}
