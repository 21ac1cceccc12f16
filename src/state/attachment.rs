#[cfg(test)]
#[path = "attachment_test.rs"]
mod attachment_test;

use crate::util::text::truncate_chars;

/// A single file staged in the composer but not yet sent.
///
/// Holds the metadata of the browser `File`; the bytes are never read here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attachment {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
}

impl Attachment {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self { name: name.into(), mime_type: mime_type.into(), size }
    }

    pub fn kind(&self) -> AttachmentKind {
        if self.mime_type.starts_with("image/") {
            AttachmentKind::Image
        } else {
            AttachmentKind::File
        }
    }

    /// File name cut to `limit` characters with a trailing `...`.
    pub fn display_name(&self, limit: usize) -> String {
        truncate_chars(&self.name, limit)
    }
}

impl From<&web_sys::File> for Attachment {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from(file: &web_sys::File) -> Self {
        Self { name: file.name(), mime_type: file.type_(), size: file.size() as u64 }
    }
}

/// Attachment classification by MIME type prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttachmentKind {
    Image,
    File,
}

/// Icon shown in the attachment chip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttachmentIcon {
    Image,
    Clip,
    /// Hover affordance that removes the staged file on click.
    Remove,
}

impl AttachmentIcon {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Image => "icon ni ni-img-fill",
            Self::Clip => "icon ni ni-clip",
            Self::Remove => "icon ni ni-cross-sm remove-file",
        }
    }
}
