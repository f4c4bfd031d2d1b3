//! Validation utilities for API DTOs.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::web::error::ApiError;

/// A JSON extractor that validates the request body.
///
/// Deserializes the body as JSON and runs `validator` checks on the
/// result. Validation failures become a 400 response carrying
/// field-level error details.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("Invalid JSON: {}", e)))?;

        value.validate().map_err(ApiError::from_validation_errors)?;

        Ok(ValidatedJson(value))
    }
}

// ============================================================================
// Custom Validators
// ============================================================================

/// Characters the provider rejects in file names.
const RESERVED_NAME_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Validate a note title.
///
/// The title becomes a file name at the provider, so it must be
/// non-blank and free of reserved and control characters.
pub fn note_title(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("note_title")
            .with_message("Must not be empty".into()));
    }
    if value.chars().any(|c| c.is_control()) {
        return Err(validator::ValidationError::new("note_title")
            .with_message("Must not contain control characters".into()));
    }
    if value.chars().any(|c| RESERVED_NAME_CHARS.contains(&c)) {
        return Err(validator::ValidationError::new("note_title")
            .with_message(r#"Must not contain any of / \ : * ? " < > |"#.into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_title_valid() {
        assert!(note_title("groceries").is_ok());
        assert!(note_title("meeting notes 2025").is_ok());
        assert!(note_title("draft.txt").is_ok());
    }

    #[test]
    fn test_note_title_blank() {
        assert!(note_title("").is_err());
        assert!(note_title("   ").is_err());
        assert!(note_title("\t").is_err());
    }

    #[test]
    fn test_note_title_reserved_characters() {
        assert!(note_title("a/b").is_err());
        assert!(note_title("a\\b").is_err());
        assert!(note_title("a:b").is_err());
        assert!(note_title("a?b").is_err());
        assert!(note_title("a|b").is_err());
    }

    #[test]
    fn test_note_title_control_characters() {
        assert!(note_title("a\x00b").is_err());
        assert!(note_title("a\nb").is_err());
    }
}
