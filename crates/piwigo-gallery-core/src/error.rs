//! Error types for the render pipeline.
//!
//! None of these reach the embedding page: [`crate::Gallery::render`] turns
//! every variant into an alert fragment or an empty gallery.

use crate::client::FetchError;

/// The category list body could not be decoded into albums.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing `result` object")]
    MissingResult,
    #[error("missing `result.categories`")]
    MissingCategories,
    #[error("`result.categories` is not an array")]
    CategoriesNotArray,
}

/// Why a gallery request produced an alert instead of albums.
#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    /// Detected before any network call.
    #[error("invalid parameters (url valid: {url_valid}, limit valid: {limit_valid})")]
    InvalidParameters { url_valid: bool, limit_valid: bool },
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
}
