//! Application service — generated configuration artifacts.

use std::path::Path;

use anyhow::Result;
use rand::Rng;

use crate::application::ports::LocalFs;
use crate::domain::templates::{ROUTER_SCRIPT, render_config};
use crate::domain::{BootstrapError, GeneratedSecrets, SiteLayout};

/// Write `wp-config.php` with freshly generated secrets.
///
/// # Errors
///
/// Returns [`BootstrapError::ConfigWrite`] if the file cannot be written.
pub fn generate_config(fs: &impl LocalFs, layout: &SiteLayout, rng: &mut impl Rng) -> Result<()> {
    let secrets = GeneratedSecrets::generate(rng);
    write_artifact(fs, &layout.config_file(), &render_config(&secrets))
}

/// Write the static `router.php` used by `php -S`.
///
/// # Errors
///
/// Returns [`BootstrapError::ConfigWrite`] if the file cannot be written.
pub fn generate_router(fs: &impl LocalFs, layout: &SiteLayout) -> Result<()> {
    write_artifact(fs, &layout.router_file(), ROUTER_SCRIPT)
}

fn write_artifact(fs: &impl LocalFs, path: &Path, content: &str) -> Result<()> {
    fs.write(path, content).map_err(|e| BootstrapError::ConfigWrite {
        path: path.display().to_string(),
        reason: format!("{e:#}"),
    })?;
    tracing::debug!(path = %path.display(), "wrote generated file");
    Ok(())
}
