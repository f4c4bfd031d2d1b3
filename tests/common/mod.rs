//! Test helpers for API tests.
//!
//! Provides an in-memory drive fake and a TestServer factory.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;

use notedrive::graph::types::{DriveItem, DriveItemPatch};
use notedrive::web::handlers::AppState;
use notedrive::web::router::{create_health_router, create_router};
use notedrive::{DriveStore, NoteDriveError, NoteRepository, Result};

/// In-memory drive standing in for the storage provider.
///
/// Preserves insertion order for listings, renames on name collision
/// like the real provider, and can be switched into failure modes to
/// simulate outages.
#[derive(Default)]
pub struct FakeDrive {
    files: Mutex<Vec<FakeFile>>,
    next_id: AtomicU64,
    /// Fail every operation (full outage).
    pub fail_all: AtomicBool,
    /// Fail only content uploads (partial create failure).
    pub fail_upload: AtomicBool,
}

struct FakeFile {
    id: String,
    name: String,
    content: Vec<u8>,
}

impl FakeDrive {
    fn check_outage(&self) -> Result<()> {
        if self.fail_all.load(Ordering::SeqCst) {
            return Err(NoteDriveError::Upstream(
                "provider outage (simulated)".to_string(),
            ));
        }
        Ok(())
    }

    fn item(id: &str, name: &str) -> DriveItem {
        serde_json::from_value(serde_json::json!({ "id": id, "name": name })).unwrap()
    }

    /// Pick a free name, appending a counter on collision like the
    /// provider's rename conflict behavior.
    fn free_name(files: &[FakeFile], requested: &str) -> String {
        if !files.iter().any(|f| f.name == requested) {
            return requested.to_string();
        }
        let mut n = 1;
        loop {
            let candidate = format!("{requested} {n}");
            if !files.iter().any(|f| f.name == candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

#[async_trait]
impl DriveStore for FakeDrive {
    async fn list_children(&self, _folder: &str) -> Result<Vec<DriveItem>> {
        self.check_outage()?;
        let files = self.files.lock().unwrap();
        Ok(files.iter().map(|f| Self::item(&f.id, &f.name)).collect())
    }

    async fn get_item(&self, item_id: &str) -> Result<DriveItem> {
        self.check_outage()?;
        let files = self.files.lock().unwrap();
        files
            .iter()
            .find(|f| f.id == item_id)
            .map(|f| Self::item(&f.id, &f.name))
            .ok_or_else(|| NoteDriveError::NotFound("drive item".to_string()))
    }

    async fn get_item_content(&self, item_id: &str) -> Result<Vec<u8>> {
        self.check_outage()?;
        let files = self.files.lock().unwrap();
        files
            .iter()
            .find(|f| f.id == item_id)
            .map(|f| f.content.clone())
            .ok_or_else(|| NoteDriveError::NotFound("drive item".to_string()))
    }

    async fn create_item(&self, _folder: &str, name: &str, _mime_type: &str) -> Result<DriveItem> {
        self.check_outage()?;
        let mut files = self.files.lock().unwrap();
        let id = format!("item-{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let name = Self::free_name(&files, name);
        files.push(FakeFile {
            id: id.clone(),
            name: name.clone(),
            content: Vec::new(),
        });
        Ok(Self::item(&id, &name))
    }

    async fn upload_content(&self, item_id: &str, content: &[u8]) -> Result<DriveItem> {
        self.check_outage()?;
        if self.fail_upload.load(Ordering::SeqCst) {
            return Err(NoteDriveError::Upstream(
                "content upload refused (simulated)".to_string(),
            ));
        }
        let mut files = self.files.lock().unwrap();
        let file = files
            .iter_mut()
            .find(|f| f.id == item_id)
            .ok_or_else(|| NoteDriveError::NotFound("drive item".to_string()))?;
        file.content = content.to_vec();
        Ok(Self::item(&file.id, &file.name))
    }

    async fn update_item(&self, item_id: &str, patch: &DriveItemPatch) -> Result<DriveItem> {
        self.check_outage()?;
        let mut files = self.files.lock().unwrap();
        let file = files
            .iter_mut()
            .find(|f| f.id == item_id)
            .ok_or_else(|| NoteDriveError::NotFound("drive item".to_string()))?;
        if let Some(name) = &patch.name {
            file.name = name.clone();
        }
        Ok(Self::item(&file.id, &file.name))
    }

    async fn delete_item(&self, item_id: &str) -> Result<()> {
        self.check_outage()?;
        let mut files = self.files.lock().unwrap();
        let index = files
            .iter()
            .position(|f| f.id == item_id)
            .ok_or_else(|| NoteDriveError::NotFound("drive item".to_string()))?;
        files.remove(index);
        Ok(())
    }
}

/// Create a test server over a fresh in-memory drive.
pub fn create_test_server() -> (TestServer, Arc<FakeDrive>) {
    let drive = Arc::new(FakeDrive::default());
    let repo = NoteRepository::new(drive.clone(), "Notes");
    let app_state = Arc::new(AppState::new(repo));

    let router = create_router(app_state, &[]).merge(create_health_router());
    let server = TestServer::new(router).expect("Failed to create test server");

    (server, drive)
}

/// Collect the `details` map of a validation error body.
pub fn validation_details(body: &serde_json::Value) -> HashMap<String, Vec<String>> {
    body["error"]["details"]
        .as_object()
        .map(|m| {
            m.iter()
                .map(|(k, v)| {
                    (
                        k.clone(),
                        v.as_array()
                            .unwrap()
                            .iter()
                            .map(|s| s.as_str().unwrap().to_string())
                            .collect(),
                    )
                })
                .collect()
        })
        .unwrap_or_default()
}
