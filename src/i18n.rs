//! Translated strings used by the composer.
//!
//! A bundle is a flat key/value map. Missing keys render as the key itself so
//! a partial bundle never leaves a blank label.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use std::collections::HashMap;

use crate::error::ComposerError;

/// Text-area placeholder.
pub const SEND_A_MESSAGE: &str = "sendAMessage";
/// Send-button label.
pub const SEND: &str = "send";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Translations {
    entries: HashMap<String, String>,
}

impl Default for Translations {
    fn default() -> Self {
        Self::english()
    }
}

impl Translations {
    /// Built-in English bundle.
    pub fn english() -> Self {
        let entries = [(SEND_A_MESSAGE, "Send a message"), (SEND, "Send")]
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Self { entries }
    }

    /// Parse a bundle from a flat JSON object of strings.
    ///
    /// # Errors
    ///
    /// Returns [`ComposerError::Translations`] if `raw` is not such an object.
    pub fn from_json(raw: &str) -> Result<Self, ComposerError> {
        let entries = serde_json::from_str(raw).map_err(ComposerError::Translations)?;
        Ok(Self { entries })
    }

    /// Translated text for `key`, or `key` itself when absent.
    pub fn text<'a>(&'a self, key: &'a str) -> &'a str {
        self.entries.get(key).map_or(key, String::as_str)
    }
}
