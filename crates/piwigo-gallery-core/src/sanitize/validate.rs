//! Read-only validity checks on a sanitized request.

/// Substring identifying the web-service endpoint itself.
const WS_MARKER: &str = "/ws.php";

/// True iff `url` is an absolute URL with a host and is not the web-service
/// endpoint (a gallery root is expected, not `.../ws.php`).
pub fn is_valid_url(url: &str) -> bool {
    let well_formed = url::Url::parse(url)
        .map(|parsed| parsed.has_host())
        .unwrap_or(false);
    well_formed && !url.contains(WS_MARKER)
}

/// True iff `limit` is strictly positive.
pub fn is_valid_limit(limit: i64) -> bool {
    limit > 0
}
