//! Microsoft Graph drive access.
//!
//! This module holds everything that talks to the storage provider:
//! wire types, the confidential-client token flow, and the HTTP client.
//! The rest of the crate only sees the [`DriveStore`] trait.

pub mod auth;
pub mod client;
pub mod types;

use async_trait::async_trait;

use crate::Result;
use types::{DriveItem, DriveItemPatch};

pub use auth::TokenProvider;
pub use client::GraphClient;

/// Unified drive access trait.
///
/// Implemented by [`GraphClient`] for the real provider and by in-memory
/// fakes in tests. All methods correspond one-to-one to drive API calls;
/// implementations map the provider's "item not found" response to
/// [`crate::NoteDriveError::NotFound`] and every other failure to
/// [`crate::NoteDriveError::Upstream`].
#[async_trait]
pub trait DriveStore: Send + Sync {
    /// List the children of a folder directly under the drive root.
    async fn list_children(&self, folder: &str) -> Result<Vec<DriveItem>>;

    /// Get an item's metadata by ID.
    async fn get_item(&self, item_id: &str) -> Result<DriveItem>;

    /// Download an item's content by ID.
    async fn get_item_content(&self, item_id: &str) -> Result<Vec<u8>>;

    /// Create a new empty file item in a folder under the drive root.
    ///
    /// The provider renames on name collision rather than overwriting.
    async fn create_item(&self, folder: &str, name: &str, mime_type: &str) -> Result<DriveItem>;

    /// Replace an item's content.
    async fn upload_content(&self, item_id: &str, content: &[u8]) -> Result<DriveItem>;

    /// Patch an item's metadata.
    async fn update_item(&self, item_id: &str, patch: &DriveItemPatch) -> Result<DriveItem>;

    /// Delete an item by ID.
    async fn delete_item(&self, item_id: &str) -> Result<()>;
}
