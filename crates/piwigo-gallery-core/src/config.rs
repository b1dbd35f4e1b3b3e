use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::client::HttpOptions;
use crate::render::{LimitMode, RenderOptions};
use crate::sanitize::DEFAULT_LIMIT;

/// Host-supplied (translated) strings used in alert fragments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Prefix of every alert, e.g. "Piwigo Gallery Alert".
    pub alert: String,
    /// Detail shown when `url` or `limit` fails validation.
    pub invalid_parameters: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            alert: "Piwigo Gallery Alert".to_string(),
            invalid_parameters: "URL or LIMIT is invalid please check parameters !".to_string(),
        }
    }
}

/// HTTP transport settings (optional `[http]` section). Absent values keep libcurl defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

/// Global configuration loaded from `~/.config/piwigo-gallery/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Attach the bundled stylesheet to rendered fragments.
    pub stylesheet_enabled: bool,
    /// "legacy" (limit + 1 cards) or "strict" (at most limit cards).
    pub limit_mode: LimitMode,
    /// HTML-escape album link and thumbnail URLs after filtering them.
    pub escape_url_attributes: bool,
    /// HTML-escape the detail text of alert fragments.
    pub escape_error_detail: bool,
    /// Album limit used when the `limit` attribute is absent.
    pub default_limit: i64,
    pub labels: Labels,
    pub http: HttpConfig,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            stylesheet_enabled: true,
            limit_mode: LimitMode::Legacy,
            escape_url_attributes: true,
            escape_error_detail: true,
            default_limit: DEFAULT_LIMIT,
            labels: Labels::default(),
            http: HttpConfig::default(),
        }
    }
}

impl GalleryConfig {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            limit_mode: self.limit_mode,
            escape_url_attributes: self.escape_url_attributes,
            escape_error_detail: self.escape_error_detail,
        }
    }

    pub fn http_options(&self) -> HttpOptions {
        HttpOptions {
            connect_timeout: self.http.connect_timeout_secs.map(Duration::from_secs),
            timeout: self.http.timeout_secs.map(Duration::from_secs),
            user_agent: self.http.user_agent.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("piwigo-gallery")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GalleryConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = GalleryConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path. Missing keys take defaults.
pub fn load_from(path: &Path) -> Result<GalleryConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: GalleryConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = GalleryConfig::default();
        assert!(cfg.stylesheet_enabled);
        assert_eq!(cfg.limit_mode, LimitMode::Legacy);
        assert!(cfg.escape_url_attributes);
        assert_eq!(cfg.default_limit, 20);
        assert_eq!(cfg.labels.alert, "Piwigo Gallery Alert");
        assert!(cfg.http.timeout_secs.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = GalleryConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: GalleryConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_partial_file_uses_defaults() {
        let toml = r#"
            stylesheet_enabled = false
            limit_mode = "strict"

            [labels]
            alert = "Alerte Galerie Piwigo"
        "#;
        let cfg: GalleryConfig = toml::from_str(toml).unwrap();
        assert!(!cfg.stylesheet_enabled);
        assert_eq!(cfg.limit_mode, LimitMode::Strict);
        assert_eq!(cfg.labels.alert, "Alerte Galerie Piwigo");
        assert_eq!(
            cfg.labels.invalid_parameters,
            Labels::default().invalid_parameters
        );
        assert_eq!(cfg.default_limit, 20);
    }

    #[test]
    fn config_toml_http_section() {
        let toml = r#"
            [http]
            connect_timeout_secs = 5
            timeout_secs = 20
            user_agent = "piwigo-gallery/0.1"
        "#;
        let cfg: GalleryConfig = toml::from_str(toml).unwrap();
        let http = cfg.http_options();
        assert_eq!(http.connect_timeout, Some(Duration::from_secs(5)));
        assert_eq!(http.timeout, Some(Duration::from_secs(20)));
        assert_eq!(http.user_agent.as_deref(), Some("piwigo-gallery/0.1"));
    }

    #[test]
    fn render_options_follow_config() {
        let cfg = GalleryConfig {
            limit_mode: LimitMode::Strict,
            escape_url_attributes: false,
            ..GalleryConfig::default()
        };
        let opts = cfg.render_options();
        assert_eq!(opts.limit_mode, LimitMode::Strict);
        assert!(!opts.escape_url_attributes);
        assert!(opts.escape_error_detail);
    }

    #[test]
    fn load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"default_limit = 8\n").unwrap();
        f.flush().unwrap();
        let cfg = load_from(f.path()).unwrap();
        assert_eq!(cfg.default_limit, 8);
        assert!(cfg.stylesheet_enabled);
    }

    #[test]
    fn load_from_rejects_bad_toml() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"limit_mode = \"sideways\"\n").unwrap();
        f.flush().unwrap();
        assert!(load_from(f.path()).is_err());
    }
}
