//! Response DTOs for the notedrive API.

use serde::Serialize;
use utoipa::ToSchema;

use crate::note::Note;

/// Note as returned by list endpoints. Content is intentionally absent.
#[derive(Debug, Serialize, ToSchema)]
pub struct NoteSummaryResponse {
    /// Note ID.
    pub id: String,
    /// Note title.
    pub title: String,
}

impl From<Note> for NoteSummaryResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
        }
    }
}

/// Note as returned by single-note endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct NoteResponse {
    /// Note ID.
    pub id: String,
    /// Note title.
    pub title: String,
    /// Plain-text body. Absent when the operation did not touch content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
        }
    }
}
