//! HTTP client for the Microsoft Graph drive API.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::config::GraphConfig;
use crate::error::NoteDriveError;
use crate::graph::auth::TokenProvider;
use crate::graph::types::{
    DriveItem, DriveItemList, DriveItemPatch, NewDriveItem, NewFileFacet, CONFLICT_BEHAVIOR_RENAME,
};
use crate::graph::DriveStore;
use crate::Result;

/// User agent string for Graph requests.
const USER_AGENT: &str = "notedrive/0.1";

/// Authenticated client for one drive.
///
/// Holds no request state; safe to share behind an `Arc` across
/// concurrent requests.
pub struct GraphClient {
    http: Client,
    tokens: TokenProvider,
    endpoint: String,
    drive_path: String,
}

impl GraphClient {
    /// Create a client for the drive selected by the configuration.
    pub fn new(config: &GraphConfig) -> Result<Self> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .read_timeout(Duration::from_secs(config.read_timeout_secs))
            .timeout(Duration::from_secs(config.total_timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| NoteDriveError::Upstream(format!("failed to create HTTP client: {e}")))?;

        let drive_path = match (&config.drive_id, &config.user_id) {
            (Some(drive_id), _) => format!("drives/{drive_id}"),
            (None, Some(user_id)) => format!("users/{user_id}/drive"),
            (None, None) => {
                return Err(NoteDriveError::Config(
                    "either graph.drive_id or graph.user_id must be set".to_string(),
                ))
            }
        };

        Ok(Self {
            tokens: TokenProvider::new(http.clone(), config),
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            drive_path,
        })
    }

    fn children_url(&self, folder: &str) -> String {
        format!(
            "{}/{}/root:/{}:/children",
            self.endpoint, self.drive_path, folder
        )
    }

    fn item_url(&self, item_id: &str) -> String {
        format!("{}/{}/items/{}", self.endpoint, self.drive_path, item_id)
    }

    fn content_url(&self, item_id: &str) -> String {
        format!("{}/content", self.item_url(item_id))
    }
}

fn transport_error(what: &str, e: reqwest::Error) -> NoteDriveError {
    NoteDriveError::Upstream(format!("{what} failed: {e}"))
}

fn malformed_response(what: &str, e: reqwest::Error) -> NoteDriveError {
    NoteDriveError::Upstream(format!("malformed {what} response: {e}"))
}

/// Check a response where 404 means the addressed item is gone.
fn ensure_item_found(response: reqwest::Response, what: &str) -> Result<reqwest::Response> {
    if response.status() == StatusCode::NOT_FOUND {
        return Err(NoteDriveError::NotFound("drive item".to_string()));
    }
    ensure_success(response, what)
}

/// Check a response where any failure, 404 included, is an upstream fault.
fn ensure_success(response: reqwest::Response, what: &str) -> Result<reqwest::Response> {
    let status = response.status();
    if !status.is_success() {
        return Err(NoteDriveError::Upstream(format!(
            "{what} returned HTTP {status}"
        )));
    }
    Ok(response)
}

#[async_trait]
impl DriveStore for GraphClient {
    async fn list_children(&self, folder: &str) -> Result<Vec<DriveItem>> {
        let token = self.tokens.bearer_token().await?;
        let response = self
            .http
            .get(self.children_url(folder))
            .bearer_auth(&token)
            .query(&[("$select", "id,name")])
            .send()
            .await
            .map_err(|e| transport_error("folder listing", e))?;

        // A missing notes folder is a deployment fault, not a missing note
        let response = ensure_success(response, "folder listing")?;

        let list: DriveItemList = response
            .json()
            .await
            .map_err(|e| malformed_response("folder listing", e))?;
        Ok(list.value)
    }

    async fn get_item(&self, item_id: &str) -> Result<DriveItem> {
        let token = self.tokens.bearer_token().await?;
        let response = self
            .http
            .get(self.item_url(item_id))
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| transport_error("item fetch", e))?;

        let response = ensure_item_found(response, "item fetch")?;
        response
            .json()
            .await
            .map_err(|e| malformed_response("item fetch", e))
    }

    async fn get_item_content(&self, item_id: &str) -> Result<Vec<u8>> {
        let token = self.tokens.bearer_token().await?;
        let response = self
            .http
            .get(self.content_url(item_id))
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| transport_error("content download", e))?;

        let response = ensure_item_found(response, "content download")?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| transport_error("content download", e))?;
        Ok(bytes.to_vec())
    }

    async fn create_item(&self, folder: &str, name: &str, mime_type: &str) -> Result<DriveItem> {
        let token = self.tokens.bearer_token().await?;
        let body = NewDriveItem {
            name,
            file: NewFileFacet { mime_type },
            conflict_behavior: CONFLICT_BEHAVIOR_RENAME,
        };

        let response = self
            .http
            .post(self.children_url(folder))
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error("item creation", e))?;

        let response = ensure_success(response, "item creation")?;
        response
            .json()
            .await
            .map_err(|e| malformed_response("item creation", e))
    }

    async fn upload_content(&self, item_id: &str, content: &[u8]) -> Result<DriveItem> {
        let token = self.tokens.bearer_token().await?;
        let response = self
            .http
            .put(self.content_url(item_id))
            .bearer_auth(&token)
            .header(CONTENT_TYPE, "text/plain")
            .body(content.to_vec())
            .send()
            .await
            .map_err(|e| transport_error("content upload", e))?;

        let response = ensure_item_found(response, "content upload")?;
        response
            .json()
            .await
            .map_err(|e| malformed_response("content upload", e))
    }

    async fn update_item(&self, item_id: &str, patch: &DriveItemPatch) -> Result<DriveItem> {
        let token = self.tokens.bearer_token().await?;
        let response = self
            .http
            .patch(self.item_url(item_id))
            .bearer_auth(&token)
            .json(patch)
            .send()
            .await
            .map_err(|e| transport_error("item update", e))?;

        let response = ensure_item_found(response, "item update")?;
        response
            .json()
            .await
            .map_err(|e| malformed_response("item update", e))
    }

    async fn delete_item(&self, item_id: &str) -> Result<()> {
        let token = self.tokens.bearer_token().await?;
        let response = self
            .http
            .delete(self.item_url(item_id))
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| transport_error("item deletion", e))?;

        ensure_item_found(response, "item deletion")?;
        Ok(())
    }
}
