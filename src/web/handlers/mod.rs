//! API handlers for the notedrive HTTP surface.

pub mod note;

pub use note::*;

use crate::note::NoteRepository;

/// Shared application state for request handlers.
///
/// The repository inside is stateless; the whole struct is shared
/// behind an `Arc` and never mutated after startup.
pub struct AppState {
    /// Note repository bound to the configured drive.
    pub repo: NoteRepository,
}

impl AppState {
    /// Create a new application state.
    pub fn new(repo: NoteRepository) -> Self {
        Self { repo }
    }
}
