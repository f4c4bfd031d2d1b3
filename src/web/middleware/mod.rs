//! Middleware for the notedrive API.

pub mod cors;

pub use cors::create_cors_layer;
