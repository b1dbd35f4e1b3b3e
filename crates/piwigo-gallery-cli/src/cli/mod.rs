//! CLI for the Piwigo gallery renderer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use piwigo_gallery_core::config::{self, GalleryConfig};
use std::path::{Path, PathBuf};

use commands::{
    run_completions, run_endpoint, run_render, run_render_file, run_stylesheet, run_validate,
    RenderArgs,
};

/// Top-level CLI for the Piwigo gallery renderer.
#[derive(Debug, Parser)]
#[command(name = "piwigo-gallery")]
#[command(about = "Render Piwigo album galleries as embeddable HTML fragments", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of the XDG config path.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch a gallery's category list and print the HTML fragment.
    Render {
        #[command(flatten)]
        args: RenderArgs,

        /// Prepend the bundled stylesheet regardless of the configured flag.
        #[arg(long)]
        with_stylesheet: bool,
    },

    /// Render a saved category list JSON body without network access.
    RenderFile {
        /// Path to the JSON body.
        path: PathBuf,

        /// Maximum number of albums (raw value, sanitized like the `limit` attribute).
        #[arg(long, allow_hyphen_values = true)]
        limit: Option<String>,

        /// Emit at most `limit` cards instead of `limit + 1`.
        #[arg(long)]
        strict_limit: bool,
    },

    /// Show the sanitized request and whether it would be rendered.
    Validate {
        /// Gallery root URL.
        #[arg(long)]
        url: Option<String>,

        /// Maximum number of albums (raw value).
        #[arg(long, allow_hyphen_values = true)]
        limit: Option<String>,
    },

    /// Print the web-service endpoint for a gallery root.
    Endpoint {
        /// Gallery root URL.
        url: String,
    },

    /// Print the bundled stylesheet.
    Stylesheet,

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

fn load_config(path: Option<&Path>) -> Result<GalleryConfig> {
    match path {
        Some(p) => config::load_from(p),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        let cfg = load_config(cli.config.as_deref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Render {
                args,
                with_stylesheet,
            } => run_render(&cfg, args, with_stylesheet).await?,
            CliCommand::RenderFile {
                path,
                limit,
                strict_limit,
            } => run_render_file(&cfg, &path, limit.as_deref(), strict_limit)?,
            CliCommand::Validate { url, limit } => run_validate(&cfg, url, limit)?,
            CliCommand::Endpoint { url } => run_endpoint(&url)?,
            CliCommand::Stylesheet => run_stylesheet()?,
            CliCommand::Completions { shell } => run_completions(shell)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
