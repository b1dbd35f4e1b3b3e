//! `piwigo-gallery validate` – show the sanitized request and its validity.

use anyhow::Result;
use piwigo_gallery_core::config::GalleryConfig;
use piwigo_gallery_core::{sanitize, GalleryRequest};

pub fn run_validate(cfg: &GalleryConfig, url: Option<String>, limit: Option<String>) -> Result<()> {
    let request = GalleryRequest { url, limit };
    let sanitized = sanitize::sanitize_with_default(&request, cfg.default_limit);

    println!(
        "url:   {:<50} {}",
        format!("{:?}", sanitized.base_url),
        verdict(sanitized.url_is_valid())
    );
    println!(
        "limit: {:<50} {}",
        sanitized.limit,
        verdict(sanitized.limit_is_valid())
    );

    if !sanitized.is_valid() {
        anyhow::bail!("{}", cfg.labels.invalid_parameters);
    }
    Ok(())
}

fn verdict(ok: bool) -> &'static str {
    if ok {
        "ok"
    } else {
        "INVALID"
    }
}
