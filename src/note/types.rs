//! Note types for notedrive.

/// MIME type used for note files at the provider.
pub const NOTE_MIME_TYPE: &str = "text/plain";

/// A note backed by a file in the drive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Provider-assigned ID of the backing file.
    pub id: String,
    /// Display name of the backing file.
    pub title: String,
    /// UTF-8 text body. Populated on single-note fetches, never on lists.
    pub content: Option<String>,
}

/// Input for creating a note.
#[derive(Debug, Clone)]
pub struct NewNote {
    /// Requested title. The provider renames on collision, so the
    /// created note's title may differ.
    pub title: String,
    /// Text body.
    pub content: String,
}

impl NewNote {
    /// Create a new note input.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Partial note update. Only set fields are applied.
#[derive(Debug, Clone, Default)]
pub struct NoteUpdate {
    /// New title.
    pub title: Option<String>,
    /// New text body.
    pub content: Option<String>,
}

impl NoteUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a new title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set new content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Check whether the update changes anything.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}
