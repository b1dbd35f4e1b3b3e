//! `piwigo-gallery render-file <path>` – render a saved category list body.

use anyhow::{Context, Result};
use piwigo_gallery_core::assets;
use piwigo_gallery_core::config::GalleryConfig;
use piwigo_gallery_core::render::{self, LimitMode};
use piwigo_gallery_core::sanitize;
use std::fs;
use std::path::Path;

pub fn run_render_file(
    cfg: &GalleryConfig,
    path: &Path,
    limit: Option<&str>,
    strict_limit: bool,
) -> Result<()> {
    let body = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let limit = limit.map(sanitize::sanitize_limit).unwrap_or(cfg.default_limit);
    if !sanitize::is_valid_limit(limit) {
        anyhow::bail!("limit must be a positive integer, got {}", limit);
    }

    let mut opts = cfg.render_options();
    if strict_limit {
        opts.limit_mode = LimitMode::Strict;
    }

    let html = render::render_with(&body, limit, &opts);
    if cfg.stylesheet_enabled {
        println!("{}{}", assets::stylesheet_tag(), html);
    } else {
        println!("{}", html);
    }
    Ok(())
}
