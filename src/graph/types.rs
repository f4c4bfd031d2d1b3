//! Wire types for the Microsoft Graph drive API.

use serde::{Deserialize, Serialize};

/// Conflict policy applied when creating an item whose name already exists.
pub const CONFLICT_BEHAVIOR_RENAME: &str = "rename";

/// A drive item (file or folder) as returned by the provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveItem {
    /// Provider-assigned item ID. Opaque and stable for the item's lifetime.
    pub id: String,
    /// Display name within the parent folder.
    pub name: String,
    /// Reference to the containing drive and folder.
    #[serde(default)]
    pub parent_reference: Option<ParentReference>,
    /// File facet; present when the item is a file.
    #[serde(default)]
    pub file: Option<FileFacet>,
    /// Item size in bytes.
    #[serde(default)]
    pub size: Option<u64>,
}

/// Parent reference of a drive item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentReference {
    /// ID of the containing drive.
    #[serde(default)]
    pub drive_id: Option<String>,
    /// ID of the containing folder item.
    #[serde(default)]
    pub id: Option<String>,
    /// Path of the containing folder.
    #[serde(default)]
    pub path: Option<String>,
}

/// File facet of a drive item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileFacet {
    /// MIME type reported by the provider.
    #[serde(default)]
    pub mime_type: Option<String>,
}

/// One page of children returned by a folder listing.
///
/// Paging is not followed; the first page is what callers get.
#[derive(Debug, Deserialize)]
pub struct DriveItemList {
    /// Items on this page.
    pub value: Vec<DriveItem>,
}

/// Request body for creating a new file item.
#[derive(Debug, Serialize)]
pub struct NewDriveItem<'a> {
    /// Requested file name. The provider may rename on collision.
    pub name: &'a str,
    /// File facet carrying the MIME type.
    pub file: NewFileFacet<'a>,
    /// Conflict policy; always [`CONFLICT_BEHAVIOR_RENAME`] here.
    #[serde(rename = "@microsoft.graph.conflictBehavior")]
    pub conflict_behavior: &'a str,
}

/// File facet for item creation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFileFacet<'a> {
    /// MIME type of the new file.
    pub mime_type: &'a str,
}

/// Metadata patch for an existing item. Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DriveItemPatch {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl DriveItemPatch {
    /// Create a patch that renames the item.
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// Token response from the identity endpoint.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    /// Bearer access token.
    pub access_token: String,
    /// Token type; "Bearer" for this flow.
    #[serde(default)]
    pub token_type: String,
    /// Token lifetime in seconds.
    pub expires_in: u64,
}
