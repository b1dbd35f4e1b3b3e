//! Bundled default stylesheet for the gallery markup.

/// Default CSS targeting `piwigogallery`, `card`, `caption` and `caption-title`.
pub const STYLESHEET: &str = r#".piwigogallery{display:flex;flex-wrap:wrap;gap:1rem;margin:1rem 0}
.piwigogallery .card{position:relative;display:block;flex:1 1 220px;max-width:320px;overflow:hidden;border-radius:6px;background:#111;color:#fff;text-decoration:none}
.piwigogallery .card img{display:block;width:100%;height:200px;object-fit:cover;transition:opacity .2s}
.piwigogallery .card:hover img{opacity:.8}
.piwigogallery .caption{padding:.25rem .75rem;font-size:.9rem;line-height:1.4;overflow:hidden;text-overflow:ellipsis}
.piwigogallery .caption-title{padding-top:.5rem;font-weight:600;font-size:1rem}
"#;

/// `id` of the inline style element, so hosts can detect a duplicate.
pub const STYLESHEET_ID: &str = "piwigogallery-css";

/// Inline `<style>` element carrying [`STYLESHEET`].
pub fn stylesheet_tag() -> String {
    format!(r#"<style id="{}">{}</style>"#, STYLESHEET_ID, STYLESHEET)
}
