//! notedrive - Notes over a cloud drive
//!
//! An HTTP backend that persists each note as a plain-text file in
//! OneDrive, reached through the Microsoft Graph API with a
//! confidential-client identity.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod note;
pub mod web;

pub use config::Config;
pub use error::{NoteDriveError, Result};
pub use graph::{DriveStore, GraphClient, TokenProvider};
pub use note::{NewNote, Note, NoteRepository, NoteUpdate};
pub use web::{ApiError, WebServer};
