//! The render entry point: sanitize, validate, fetch, render.
//!
//! [`Gallery::render`] never fails; every error becomes an alert fragment
//! and a malformed payload becomes an empty gallery.

use crate::assets;
use crate::client::{self, CurlFetcher, Fetch};
use crate::config::{GalleryConfig, Labels};
use crate::error::GalleryError;
use crate::render::{self, RenderOptions};
use crate::sanitize::{self, GalleryRequest, SanitizedRequest, DEFAULT_LIMIT};

/// Per-host settings injected into the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryOptions {
    pub render: RenderOptions,
    pub labels: Labels,
    /// Persisted on/off flag for the bundled stylesheet, supplied by the host.
    pub stylesheet_enabled: bool,
    pub default_limit: i64,
}

impl Default for GalleryOptions {
    fn default() -> Self {
        Self {
            render: RenderOptions::default(),
            labels: Labels::default(),
            stylesheet_enabled: true,
            default_limit: DEFAULT_LIMIT,
        }
    }
}

impl From<&GalleryConfig> for GalleryOptions {
    fn from(cfg: &GalleryConfig) -> Self {
        Self {
            render: cfg.render_options(),
            labels: cfg.labels.clone(),
            stylesheet_enabled: cfg.stylesheet_enabled,
            default_limit: cfg.default_limit,
        }
    }
}

/// Stateless renderer over an injected transport.
#[derive(Debug, Clone)]
pub struct Gallery<F> {
    fetcher: F,
    options: GalleryOptions,
}

impl Gallery<CurlFetcher> {
    /// Gallery using libcurl with transport settings from `cfg`.
    pub fn from_config(cfg: &GalleryConfig) -> Self {
        Self::new(CurlFetcher::new(cfg.http_options()), GalleryOptions::from(cfg))
    }
}

impl<F: Fetch> Gallery<F> {
    pub fn new(fetcher: F, options: GalleryOptions) -> Self {
        Self { fetcher, options }
    }

    pub fn options(&self) -> &GalleryOptions {
        &self.options
    }

    pub fn sanitize(&self, request: &GalleryRequest) -> SanitizedRequest {
        sanitize::sanitize_with_default(request, self.options.default_limit)
    }

    /// Renders the gallery fragment or an alert fragment.
    pub fn render(&self, request: &GalleryRequest) -> String {
        match self.try_render(request) {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!("gallery render failed: {}", e);
                self.error_fragment(&e)
            }
        }
    }

    /// Renders from a raw key/value attribute set (case-insensitive keys).
    pub fn render_attributes<I, K, V>(&self, attributes: I) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        self.render(&GalleryRequest::from_attributes(attributes))
    }

    /// [`Self::render`] preceded by the bundled stylesheet when it is enabled.
    pub fn render_page_fragment(&self, request: &GalleryRequest) -> String {
        let html = self.render(request);
        if self.options.stylesheet_enabled {
            format!("{}{}", assets::stylesheet_tag(), html)
        } else {
            html
        }
    }

    /// The pipeline with errors surfaced. A malformed payload is not an error.
    pub fn try_render(&self, request: &GalleryRequest) -> Result<String, GalleryError> {
        let sanitized = self.sanitize(request);
        let url_valid = sanitized.url_is_valid();
        let limit_valid = sanitized.limit_is_valid();
        if !(url_valid && limit_valid) {
            return Err(GalleryError::InvalidParameters {
                url_valid,
                limit_valid,
            });
        }

        let body = client::fetch_categories(&self.fetcher, &sanitized.base_url)?;
        Ok(render::render_with(&body, sanitized.limit, &self.options.render))
    }

    fn error_fragment(&self, err: &GalleryError) -> String {
        let labels = &self.options.labels;
        let detail = match err {
            GalleryError::InvalidParameters { .. } => labels.invalid_parameters.clone(),
            GalleryError::Fetch(e) => e.to_string(),
        };
        render::render_error_with(&labels.alert, &detail, &self.options.render)
    }
}
