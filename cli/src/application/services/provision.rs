//! Application service — one-time provisioning of an installation.
//!
//! Everything is built inside a staging directory next to the install path
//! and renamed into place at the end, so an existing install path always
//! holds a complete tree.

use std::path::Path;

use anyhow::{Context, Result};
use rand::Rng;

use crate::application::ports::{
    ArchiveExtractor, ExtractionSummary, Fetcher, LocalFs, ProgressReporter,
};
use crate::application::services::configure::{generate_config, generate_router};
use crate::application::services::download::download;
use crate::domain::layout::ADDON_ENTRY_POINT;
use crate::domain::{InstallationSettings, SiteLayout};

/// Name of the tree inside the staging directory.
const STAGED_SITE: &str = "site";
/// Core archive name inside the staging directory.
const CORE_ARCHIVE: &str = "wordpress.zip";
/// Add-on archive name inside the plugins directory.
const ADDON_ARCHIVE: &str = "plugin.zip";

/// Outcome of the `provision` use-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionOutcome {
    /// The install path already existed; nothing was touched.
    AlreadyProvisioned,
    /// A fresh tree was built and moved into place.
    Provisioned {
        core: ExtractionSummary,
        addon: ExtractionSummary,
    },
}

/// Ports used by provisioning.
pub struct ProvisionPorts<'a, F, X, L> {
    pub fetcher: &'a F,
    pub extractor: &'a X,
    pub fs: &'a L,
}

/// Provision the installation unless its directory already exists.
///
/// # Errors
///
/// Returns an error labelled with the failing phase (download, extraction
/// or configuration). The staging directory is removed on failure and the
/// install path is left untouched.
pub fn provision<F, X, L>(
    ports: &ProvisionPorts<'_, F, X, L>,
    reporter: &impl ProgressReporter,
    settings: &InstallationSettings,
    rng: &mut impl Rng,
) -> Result<ProvisionOutcome>
where
    F: Fetcher,
    X: ArchiveExtractor,
    L: LocalFs,
{
    let target = settings.install_path.as_path();
    if ports.fs.exists(target) {
        tracing::debug!(path = %target.display(), "install path exists, skipping provisioning");
        return Ok(ProvisionOutcome::AlreadyProvisioned);
    }

    let staging = ports
        .fs
        .staging_dir(target)
        .context("could not prepare staging directory")?;
    tracing::debug!(staging = %staging.display(), "provisioning into staging directory");

    let result = build_site(ports, reporter, settings, &staging, rng).and_then(|outcome| {
        ports
            .fs
            .rename(&staging.join(STAGED_SITE), target)
            .with_context(|| format!("could not move WordPress into {}", target.display()))?;
        Ok(outcome)
    });

    if let Err(e) = ports.fs.remove_dir_all(&staging) {
        tracing::warn!(staging = %staging.display(), error = %format!("{e:#}"), "could not remove staging directory");
    }
    result
}

fn build_site<F, X, L>(
    ports: &ProvisionPorts<'_, F, X, L>,
    reporter: &impl ProgressReporter,
    settings: &InstallationSettings,
    staging: &Path,
    rng: &mut impl Rng,
) -> Result<ProvisionOutcome>
where
    F: Fetcher,
    X: ArchiveExtractor,
    L: LocalFs,
{
    let ProvisionPorts {
        fetcher,
        extractor,
        fs,
    } = *ports;
    let sources = &settings.sources;
    let site = SiteLayout::new(staging.join(STAGED_SITE));

    // Core.
    let core_zip = staging.join(CORE_ARCHIVE);
    let phase = reporter.phase("Downloading WordPress core...");
    let fetched =
        download(fetcher, fs, &sources.wordpress, &core_zip).context("could not download WordPress")?;
    phase.complete(&format!("Downloaded WordPress core ({})", fetched.summary()));

    let phase = reporter.phase("Extracting WordPress...");
    let core = extractor
        .extract(&core_zip, site.root())
        .context("could not extract WordPress")?;
    phase.complete("Extracted WordPress");

    // SQLite add-on.
    let plugins = site.plugins_dir();
    fs.create_dir_all(&plugins)
        .context("could not download SQLite plugin")?;
    let addon_zip = plugins.join(ADDON_ARCHIVE);
    let phase = reporter.phase("Downloading SQLite Integration plugin...");
    let fetched = download(fetcher, fs, &sources.sqlite_plugin, &addon_zip)
        .context("could not download SQLite plugin")?;
    phase.complete(&format!(
        "Downloaded SQLite Integration plugin ({})",
        fetched.summary()
    ));

    let phase = reporter.phase("Extracting SQLite Integration plugin...");
    let addon_dir = site.addon_dir(&sources.plugin_slug);
    let addon = extractor
        .extract(&addon_zip, &addon_dir)
        .context("could not extract SQLite plugin")?;
    fs.rename(&addon_dir.join(ADDON_ENTRY_POINT), &site.addon_entry_point())
        .with_context(|| format!("could not extract SQLite plugin: {ADDON_ENTRY_POINT} not installed"))?;
    phase.complete("Installed SQLite drop-in");

    // Generated files.
    generate_config(fs, &site, rng).context("could not create WordPress config")?;
    generate_router(fs, &site).context("could not create router file")?;
    reporter.success("Generated wp-config.php and router.php");

    Ok(ProvisionOutcome::Provisioned { core, addon })
}
