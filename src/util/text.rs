//! Text helpers for caret arithmetic and display truncation.
//!
//! The DOM reports text-area caret positions in UTF-16 code units, so caret
//! offsets are kept in those units and converted to byte indices only when
//! the draft is spliced.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// Length of `s` in UTF-16 code units.
pub fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Byte index in `s` for a UTF-16 caret offset.
///
/// Offsets past the end clamp to `s.len()`. An offset that lands inside a
/// surrogate pair snaps back to the start of that character.
pub fn byte_index_for_utf16(s: &str, offset: usize) -> usize {
    let mut units = 0;
    for (idx, ch) in s.char_indices() {
        let next = units + ch.len_utf16();
        if next > offset {
            return idx;
        }
        units = next;
    }
    s.len()
}

/// Keep the first `limit` characters of `text`, appending `...` if anything
/// was cut.
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_owned(),
    }
}
