pub mod config;
pub mod logging;

pub mod assets;
pub mod client;
pub mod error;
pub mod gallery;
pub mod render;
pub mod sanitize;

pub use client::{CurlFetcher, Fetch, FetchError, HttpResponse};
pub use error::{GalleryError, PayloadError};
pub use gallery::{Gallery, GalleryOptions};
pub use sanitize::{GalleryRequest, SanitizedRequest};
