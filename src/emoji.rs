//! Emoji data backing the composer's picker.
//!
//! The set comes from the `emojis` crate (Unicode emoji with names and
//! GitHub shortcodes). The picker filters it by a free-text query and reports
//! the chosen glyph as an [`EmojiSelection`].

#[cfg(test)]
#[path = "emoji_test.rs"]
mod emoji_test;

pub use emojis::Emoji;

/// Payload delivered by the picker when a glyph is chosen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmojiSelection {
    pub native: String,
}

impl From<&Emoji> for EmojiSelection {
    fn from(emoji: &Emoji) -> Self {
        Self { native: emoji.as_str().to_owned() }
    }
}

/// Every emoji in Unicode order.
pub fn catalog() -> impl Iterator<Item = &'static Emoji> {
    emojis::iter()
}

/// Emoji whose name or one of whose shortcodes contains `query`, ignoring
/// case. A blank query returns the whole catalog.
pub fn search(query: &str) -> Vec<&'static Emoji> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return catalog().collect();
    }
    catalog().filter(|e| matches(e, &query)).collect()
}

/// `query` must already be lowercase.
fn matches(emoji: &Emoji, query: &str) -> bool {
    emoji.name().to_lowercase().contains(query) || emoji.shortcodes().any(|code| code.contains(query))
}
