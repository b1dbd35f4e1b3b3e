//! `piwigo-gallery render --url <URL>` – fetch and print a gallery fragment.

use anyhow::{Context, Result};
use clap::Args;
use piwigo_gallery_core::config::GalleryConfig;
use piwigo_gallery_core::render::LimitMode;
use piwigo_gallery_core::{Gallery, GalleryRequest};

/// Gallery attributes, as a host page would pass them.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Gallery root URL (not the ws.php endpoint).
    #[arg(long)]
    pub url: Option<String>,

    /// Maximum number of albums (raw value; default from config).
    #[arg(long, allow_hyphen_values = true)]
    pub limit: Option<String>,

    /// Extra attribute as KEY=VALUE (keys are case-insensitive). `--url` and `--limit` take precedence.
    #[arg(long = "attr", value_name = "KEY=VALUE", value_parser = parse_attribute)]
    pub attrs: Vec<(String, String)>,

    /// Emit at most `limit` cards instead of `limit + 1`.
    #[arg(long)]
    pub strict_limit: bool,
}

impl RenderArgs {
    /// Attribute list in precedence order (later entries win).
    pub fn into_request(self) -> GalleryRequest {
        let mut attrs = self.attrs;
        if let Some(url) = self.url {
            attrs.push(("url".to_string(), url));
        }
        if let Some(limit) = self.limit {
            attrs.push(("limit".to_string(), limit));
        }
        GalleryRequest::from_attributes(attrs)
    }
}

pub(crate) fn parse_attribute(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got {:?}", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty attribute name in {:?}", s));
    }
    Ok((key.to_string(), value.to_string()))
}

pub async fn run_render(cfg: &GalleryConfig, args: RenderArgs, with_stylesheet: bool) -> Result<()> {
    let mut cfg = cfg.clone();
    if args.strict_limit {
        cfg.limit_mode = LimitMode::Strict;
    }
    if with_stylesheet {
        cfg.stylesheet_enabled = true;
    }

    let request = args.into_request();
    let gallery = Gallery::from_config(&cfg);
    let html = tokio::task::spawn_blocking(move || gallery.render_page_fragment(&request))
        .await
        .context("render task join")?;
    println!("{}", html);
    Ok(())
}
