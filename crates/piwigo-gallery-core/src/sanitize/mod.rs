//! Input sanitizing for the gallery attributes (`url`, `limit`).
//!
//! Raw attribute values are normalized into a [`SanitizedRequest`] that always
//! carries both fields. Validation is separate and read-only: see
//! [`is_valid_url`] and [`is_valid_limit`].

mod number;
mod url_filter;
mod validate;

pub use number::{coerce_int, filter_number_int, sanitize_limit};
pub use url_filter::filter_url;
pub use validate::{is_valid_limit, is_valid_url};

/// Album count used when the `limit` attribute is absent.
pub const DEFAULT_LIMIT: i64 = 20;

/// Raw, user-supplied gallery attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryRequest {
    /// Gallery root URL, if the attribute was given.
    pub url: Option<String>,
    /// Unparsed album limit, if the attribute was given.
    pub limit: Option<String>,
}

impl GalleryRequest {
    pub fn new(url: impl Into<String>, limit: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            limit: Some(limit.into()),
        }
    }

    /// Builds a request from a key/value attribute set.
    ///
    /// Keys are matched case-insensitively (`URL`, `Limit`, ...); when a key
    /// repeats, the last value wins. Unknown keys are ignored.
    pub fn from_attributes<I, K, V>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut request = Self::default();
        for (key, value) in attributes {
            let key = key.as_ref().to_ascii_lowercase();
            match key.as_str() {
                "url" => request.url = Some(value.into()),
                "limit" => request.limit = Some(value.into()),
                other => tracing::debug!("ignoring unknown gallery attribute {:?}", other),
            }
        }
        request
    }
}

/// Request after defaults and filtering. `limit` may still be `<= 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedRequest {
    pub base_url: String,
    pub limit: i64,
}

impl SanitizedRequest {
    pub fn url_is_valid(&self) -> bool {
        is_valid_url(&self.base_url)
    }

    pub fn limit_is_valid(&self) -> bool {
        is_valid_limit(self.limit)
    }

    pub fn is_valid(&self) -> bool {
        self.url_is_valid() && self.limit_is_valid()
    }
}

/// Applies defaults ([`DEFAULT_LIMIT`], empty URL) and filters both fields.
pub fn sanitize(raw: &GalleryRequest) -> SanitizedRequest {
    sanitize_with_default(raw, DEFAULT_LIMIT)
}

/// Like [`sanitize`] with a host-chosen default limit.
pub fn sanitize_with_default(raw: &GalleryRequest, default_limit: i64) -> SanitizedRequest {
    let base_url = raw.url.as_deref().map(filter_url).unwrap_or_default();
    let limit = raw
        .limit
        .as_deref()
        .map(sanitize_limit)
        .unwrap_or(default_limit);
    SanitizedRequest { base_url, limit }
}
