//! Request DTOs for the notedrive API.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use super::validation::note_title;

/// Create note request.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateNoteRequest {
    /// Title; becomes the file name at the provider.
    #[validate(
        custom(function = note_title),
        length(max = 255, message = "Title is too long")
    )]
    pub title: String,
    /// Plain-text body.
    #[serde(default)]
    pub content: String,
}

/// Update note request. At least one field must be present.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateNoteRequest {
    /// New title.
    #[validate(
        custom(function = note_title),
        length(max = 255, message = "Title is too long")
    )]
    pub title: Option<String>,
    /// New plain-text body.
    pub content: Option<String>,
}

impl UpdateNoteRequest {
    /// Check whether the request changes anything.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}
