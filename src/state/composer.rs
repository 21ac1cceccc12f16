#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

use super::attachment::{Attachment, AttachmentIcon, AttachmentKind};
use crate::net::transport::{ChatChannel, SendOutcome};
use crate::util::outside_click::RegionHit;
use crate::util::text::{byte_index_for_utf16, utf16_len};

/// Local UI state of the message composer.
///
/// Lives exactly as long as the mounted component; nothing here is persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposerState {
    /// Unsent text.
    pub draft: String,
    /// Attach toolbar (image / file / close) visible.
    pub toolbar_open: bool,
    /// Emoji picker visible.
    pub emoji_open: bool,
    /// UTF-16 caret offset where the next emoji lands. `0` means the current
    /// picker session has not anchored yet.
    pub remembered_cursor: usize,
    pub attachment: Option<Attachment>,
    pub attachment_hovered: bool,
}

/// Which button row the composer shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToolRow {
    /// Open-toolbar and open-emoji buttons.
    #[default]
    Collapsed,
    /// Attach-image, attach-file and close buttons.
    Attach,
    /// Emoji picker and its close button.
    Emoji,
}

/// What a key press in the text area should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyIntent {
    /// Suppress the newline and send.
    Send,
    /// Let the text area handle it.
    Passthrough,
}

impl KeyIntent {
    pub fn classify(key: &str, shift: bool, send_key: &str) -> Self {
        if key == send_key && !shift { Self::Send } else { Self::Passthrough }
    }
}

impl ComposerState {
    /// Button row to render. The attach toolbar wins when both flags are set.
    pub fn tool_row(&self) -> ToolRow {
        if self.toolbar_open {
            ToolRow::Attach
        } else if self.emoji_open {
            ToolRow::Emoji
        } else {
            ToolRow::Collapsed
        }
    }

    pub fn set_toolbar_open(&mut self, open: bool) {
        self.toolbar_open = open;
    }

    /// Show or hide the emoji picker. Hiding it drops the insertion anchor.
    pub fn set_emoji_open(&mut self, open: bool) {
        self.emoji_open = open;
        if !open {
            self.remembered_cursor = 0;
        }
    }

    /// Close every region the pointer-down landed outside of.
    pub fn dismiss_outside(&mut self, toolbar: RegionHit, emoji: RegionHit) {
        if toolbar == RegionHit::Outside {
            self.set_toolbar_open(false);
        }
        if emoji == RegionHit::Outside {
            self.set_emoji_open(false);
        }
    }

    pub fn set_draft(&mut self, draft: String) {
        self.draft = draft;
    }

    /// Splice `glyph` into the draft and return the advanced anchor.
    ///
    /// The first pick of a picker session anchors at `live_caret`; later picks
    /// reuse the anchor so consecutive glyphs land side by side. The anchor is
    /// not refreshed if the user moves the caret between picks.
    pub fn insert_emoji(&mut self, glyph: &str, live_caret: usize) -> usize {
        let caret = if self.remembered_cursor == 0 { live_caret } else { self.remembered_cursor };
        let caret = caret.min(utf16_len(&self.draft));

        let at = byte_index_for_utf16(&self.draft, caret);
        self.draft.insert_str(at, glyph);

        self.remembered_cursor = utf16_len(&self.draft[..at]) + utf16_len(glyph);
        self.remembered_cursor
    }

    /// Stage `attachment`, replacing any staged file. `None` clears it.
    pub fn stage_attachment(&mut self, attachment: Option<Attachment>) {
        self.attachment = attachment;
    }

    pub fn remove_attachment(&mut self) {
        self.attachment = None;
        self.attachment_hovered = false;
    }

    pub fn set_attachment_hovered(&mut self, hovered: bool) {
        self.attachment_hovered = hovered;
    }

    /// Icon for the attachment chip, if a file is staged.
    pub fn attachment_icon(&self) -> Option<AttachmentIcon> {
        let attachment = self.attachment.as_ref()?;
        if self.attachment_hovered {
            return Some(AttachmentIcon::Remove);
        }
        Some(match attachment.kind() {
            AttachmentKind::Image => AttachmentIcon::Image,
            AttachmentKind::File => AttachmentIcon::Clip,
        })
    }

    pub fn can_send(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    /// Send the draft over `channel` and clear it.
    ///
    /// A blank draft is left as is and nothing is emitted. The staged
    /// attachment is not part of the message and stays staged.
    pub fn send(&mut self, channel: &ChatChannel) -> SendOutcome {
        if !self.can_send() {
            return SendOutcome::Skipped;
        }
        let message = std::mem::take(&mut self.draft);
        channel.send_text(message)
    }
}
