//! Piwigo web-service client: endpoint construction and the category list GET.
//!
//! The transport is abstracted behind [`Fetch`] so hosts can inject their own
//! HTTP layer; [`CurlFetcher`] is the default.

mod error;
mod transport;

pub use error::FetchError;
pub use transport::{CurlFetcher, HttpOptions};

/// Path and query of the category list call, appended to the gallery root.
pub const CATEGORY_LIST_PATH: &str =
    "/ws.php?format=json&method=pwg.categories.getList&public=true&thumbnail_size=xlarge";

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u32,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// `fetch(url) -> (status, body) | error`.
///
/// Implementations own connection handling (TLS, redirects, timeouts). A
/// non-2xx status is a response, not an error.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        (**self).get(url)
    }
}

impl<F: Fetch + ?Sized> Fetch for Box<F> {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        (**self).get(url)
    }
}

/// Web-service URL for a gallery root.
///
/// Plain concatenation: a trailing `/` on `base_url` produces `//ws.php`.
pub fn endpoint_url(base_url: &str) -> String {
    format!("{}{}", base_url, CATEGORY_LIST_PATH)
}

/// Fetches the raw category list body for `base_url` with a single GET.
pub fn fetch_categories<F: Fetch + ?Sized>(fetcher: &F, base_url: &str) -> Result<String, FetchError> {
    let url = endpoint_url(base_url);
    tracing::debug!("fetching category list from {}", url);

    let response = fetcher.get(&url).map_err(|e| {
        tracing::warn!("category list request to {} failed: {}", url, e);
        e
    })?;

    if !response.is_success() {
        tracing::warn!("GET {} returned HTTP {}", url, response.status);
    }
    Ok(response.body)
}
