//! Note repository backed by a drive folder.

use std::sync::Arc;

use crate::graph::types::DriveItemPatch;
use crate::graph::DriveStore;
use crate::note::types::{NewNote, Note, NoteUpdate, NOTE_MIME_TYPE};
use crate::Result;

/// Maps notes onto files in one folder of the configured drive.
///
/// Holds no state between calls; every operation round-trips to the
/// provider. Cheap to clone and safe to share across request tasks.
#[derive(Clone)]
pub struct NoteRepository {
    drive: Arc<dyn DriveStore>,
    folder: String,
}

impl NoteRepository {
    /// Create a repository over the given drive and notes folder.
    pub fn new(drive: Arc<dyn DriveStore>, folder: impl Into<String>) -> Self {
        Self {
            drive,
            folder: folder.into(),
        }
    }

    /// List all notes. Content is never populated here.
    pub async fn list(&self) -> Result<Vec<Note>> {
        let items = self.drive.list_children(&self.folder).await.map_err(|e| {
            tracing::error!("Failed to list notes: {}", e);
            e
        })?;

        Ok(items
            .into_iter()
            .map(|item| Note {
                id: item.id,
                title: item.name,
                content: None,
            })
            .collect())
    }

    /// Fetch a single note with its content.
    pub async fn get(&self, id: &str) -> Result<Note> {
        let item = self.drive.get_item(id).await.map_err(|e| {
            tracing::error!("Failed to get note {}: {}", id, e);
            e
        })?;

        let bytes = self.drive.get_item_content(id).await.map_err(|e| {
            tracing::error!("Failed to get note {} content: {}", id, e);
            e
        })?;

        Ok(Note {
            id: item.id,
            title: item.name,
            content: Some(String::from_utf8_lossy(&bytes).into_owned()),
        })
    }

    /// Create a note, then upload its content.
    ///
    /// If the content upload fails the just-created file is deleted
    /// again so no empty file lingers at the provider; the caller sees
    /// the upload error either way.
    pub async fn create(&self, new_note: NewNote) -> Result<Note> {
        let created = self
            .drive
            .create_item(&self.folder, &new_note.title, NOTE_MIME_TYPE)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create note: {}", e);
                e
            })?;

        if let Err(e) = self
            .drive
            .upload_content(&created.id, new_note.content.as_bytes())
            .await
        {
            tracing::error!("Failed to upload content for new note {}: {}", created.id, e);
            if let Err(cleanup) = self.drive.delete_item(&created.id).await {
                tracing::warn!(
                    "Could not remove incomplete note {} after upload failure: {}",
                    created.id,
                    cleanup
                );
            }
            return Err(e);
        }

        // The provider may have renamed on collision; keep its title.
        Ok(Note {
            id: created.id,
            title: created.name,
            content: Some(new_note.content),
        })
    }

    /// Apply a partial update to a note.
    ///
    /// Patches the title when one is given and re-uploads content when
    /// given; an empty update degenerates to a metadata fetch.
    pub async fn update(&self, id: &str, update: NoteUpdate) -> Result<Note> {
        let item = match &update.title {
            Some(title) => self
                .drive
                .update_item(id, &DriveItemPatch::rename(title.clone()))
                .await
                .map_err(|e| {
                    tracing::error!("Failed to update note {}: {}", id, e);
                    e
                })?,
            None => self.drive.get_item(id).await.map_err(|e| {
                tracing::error!("Failed to update note {}: {}", id, e);
                e
            })?,
        };

        if let Some(content) = &update.content {
            self.drive
                .upload_content(id, content.as_bytes())
                .await
                .map_err(|e| {
                    tracing::error!("Failed to upload content for note {}: {}", id, e);
                    e
                })?;
        }

        Ok(Note {
            id: item.id,
            title: item.name,
            content: update.content,
        })
    }

    /// Delete a note. Deleting an already-deleted note reports not found.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.drive.delete_item(id).await.map_err(|e| {
            tracing::error!("Failed to delete note {}: {}", id, e);
            e
        })
    }
}
