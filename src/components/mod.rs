//! Leptos components rendering the composer.

pub mod attachment_chip;
pub mod composer;
pub mod emoji_picker;
