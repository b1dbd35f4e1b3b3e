//! `piwigo-gallery endpoint <url>` – print the category list endpoint.

use anyhow::Result;
use piwigo_gallery_core::client;
use piwigo_gallery_core::sanitize;

pub fn run_endpoint(url: &str) -> Result<()> {
    let base_url = sanitize::filter_url(url);
    if !sanitize::is_valid_url(&base_url) {
        tracing::warn!("{:?} is not a valid gallery root", base_url);
    }
    println!("{}", client::endpoint_url(&base_url));
    Ok(())
}
