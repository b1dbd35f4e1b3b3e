//! HTML fragment rendering for album galleries and alerts.
//!
//! Markup relies on the classes `piwigogallery` (container), `card` (anchor),
//! `caption` and `caption-title`; stylesheets must target exactly these.

mod escape;
mod payload;

pub use escape::escape_html;
pub use payload::{Album, CategoryListResponse};

use serde::{Deserialize, Serialize};

use crate::sanitize::filter_url;

const CONTAINER_OPEN: &str = r#"<div class="piwigogallery">"#;
const CONTAINER_CLOSE: &str = "</div>";

/// How `limit` caps the number of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LimitMode {
    /// Emits `limit + 1` cards. Existing pages depend on this count.
    #[default]
    Legacy,
    /// Emits at most `limit` cards. Changes output for existing pages.
    Strict,
}

impl LimitMode {
    /// Number of cards allowed for `limit`. Negative limits allow none.
    pub fn max_cards(self, limit: i64) -> usize {
        if limit < 0 {
            return 0;
        }
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        match self {
            LimitMode::Legacy => limit.saturating_add(1),
            LimitMode::Strict => limit,
        }
    }
}

/// Rendering switches. The default is legacy limits with hardened escaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub limit_mode: LimitMode,
    /// HTML-escape `href`/`src` values after URL filtering.
    pub escape_url_attributes: bool,
    /// HTML-escape the detail text of alert fragments.
    pub escape_error_detail: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            limit_mode: LimitMode::Legacy,
            escape_url_attributes: true,
            escape_error_detail: true,
        }
    }
}

/// Renders a raw category list body with default options.
pub fn render(raw_body: &str, limit: i64) -> String {
    render_with(raw_body, limit, &RenderOptions::default())
}

/// Renders a raw category list body. A malformed body yields an empty container.
pub fn render_with(raw_body: &str, limit: i64, opts: &RenderOptions) -> String {
    let list = CategoryListResponse::decode_lenient(raw_body);
    render_albums(&list.categories, limit, opts)
}

/// Renders already-decoded albums, in order, capped per `opts.limit_mode`.
pub fn render_albums(albums: &[Album], limit: i64, opts: &RenderOptions) -> String {
    let max = opts.limit_mode.max_cards(limit);
    tracing::debug!(
        "rendering {} of {} albums (limit={}, mode={:?})",
        max.min(albums.len()),
        albums.len(),
        limit,
        opts.limit_mode
    );

    let mut html = String::from(CONTAINER_OPEN);
    for album in albums.iter().take(max) {
        push_card(&mut html, album, opts);
    }
    html.push_str(CONTAINER_CLOSE);
    html
}

fn push_card(html: &mut String, album: &Album, opts: &RenderOptions) {
    let title = escape_html(&album.name);
    let comment = escape_html(&album.comment);
    let thumbnail_url = url_attribute(&album.thumbnail_url, opts);
    let url = url_attribute(&album.url, opts);

    html.push_str(&format!(r#"<a target="_blank" href="{}" class="card">"#, url));
    html.push_str(&format!(r#" <img src="{}" alt="{}">"#, thumbnail_url, title));
    html.push_str(&format!(r#"<div class="caption caption-title">{}</div>"#, title));
    html.push_str(&format!(r#"<div class="caption">{}</div>"#, comment));
    html.push_str("</a>");
}

fn url_attribute(raw: &str, opts: &RenderOptions) -> String {
    let filtered = filter_url(raw);
    if opts.escape_url_attributes {
        escape_html(&filtered)
    } else {
        filtered
    }
}

/// Single-line red alert: `{label}: {detail}` with `detail` escaped.
pub fn render_error(label: &str, detail: &str) -> String {
    render_error_with(label, detail, &RenderOptions::default())
}

pub fn render_error_with(label: &str, detail: &str, opts: &RenderOptions) -> String {
    let detail = if opts.escape_error_detail {
        escape_html(detail)
    } else {
        detail.to_string()
    };
    format!(r#"<div style="color: red">{}: {}</div>"#, label, detail)
}
