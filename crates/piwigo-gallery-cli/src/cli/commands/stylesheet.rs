//! `piwigo-gallery stylesheet` – print the bundled CSS.

use anyhow::Result;
use piwigo_gallery_core::assets;

pub fn run_stylesheet() -> Result<()> {
    print!("{}", assets::STYLESHEET);
    Ok(())
}
