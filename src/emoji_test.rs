use std::collections::HashSet;

use super::*;

fn natives(hits: Vec<&'static Emoji>) -> Vec<&'static str> {
    hits.into_iter().map(Emoji::as_str).collect()
}

// =============================================================
// Catalog
// =============================================================

#[test]
fn catalog_covers_full_unicode_set() {
    let all: Vec<_> = catalog().collect();
    assert!(all.len() > 1000, "catalog size = {}", all.len());

    let unique: HashSet<&str> = all.iter().map(|e| e.as_str()).collect();
    assert_eq!(unique.len(), all.len());
}

// =============================================================
// search
// =============================================================

#[test]
fn blank_query_returns_everything() {
    let total = catalog().count();
    assert_eq!(search("").len(), total);
    assert_eq!(search("   ").len(), total);
}

#[test]
fn common_queries_find_emoji() {
    for query in ["dog", "cat", "flag", "car", "tree", "skull"] {
        assert!(!search(query).is_empty(), "no hits for {query:?}");
    }
}

#[test]
fn search_matches_name() {
    assert!(natives(search("pizza")).contains(&"🍕"));
    assert!(natives(search("grinning")).contains(&"😀"));
}

#[test]
fn search_matches_shortcodes() {
    // 👍 is named "thumbs up" but its shortcodes include "+1".
    assert!(natives(search("+1")).contains(&"👍"));
}

#[test]
fn search_is_case_insensitive() {
    assert_eq!(search("DOG").len(), search("dog").len());
}

#[test]
fn search_with_no_hits_is_empty() {
    assert!(search("zzzz-not-an-emoji").is_empty());
}

// =============================================================
// EmojiSelection
// =============================================================

#[test]
fn selection_carries_native_glyph() {
    let emoji = emojis::get("😀").expect("grinning face");
    assert_eq!(EmojiSelection::from(emoji).native, "😀");
}
