//! Note module for notedrive.
//!
//! This module provides the note domain model and the repository that
//! maps notes onto files in the configured drive folder:
//! - Listing and fetching notes
//! - Creating notes with provider-side rename on name collision
//! - Partial updates (title and/or content)
//! - Deletion

mod repository;
mod types;

pub use repository::NoteRepository;
pub use types::{NewNote, Note, NoteUpdate, NOTE_MIME_TYPE};
