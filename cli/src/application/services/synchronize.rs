//! Application service — keep the persisted site URL in step with the
//! negotiated endpoint.

use anyhow::Result;

use crate::application::ports::{LocalFs, ProgressReporter, SiteStore, SiteStoreOpener, SiteUrlUpdate};
use crate::domain::{SiteEndpoint, SiteLayout};

/// Outcome of the `synchronize` use-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// No database file yet; the WordPress installer has not run.
    NoStore,
    /// The database exists but has no readable `home` option.
    NotInstalled,
    /// The persisted URL already matches; nothing was written.
    UpToDate { url: String },
    /// The persisted URLs were rewritten.
    Updated {
        from: String,
        to: String,
        update: SiteUrlUpdate,
    },
}

/// Rewrite `home` and `siteurl` when the endpoint changed since last run.
///
/// A store that is missing, unreadable or not yet installed is not an
/// error: the installer will record the right URL itself on first visit.
///
/// # Errors
///
/// Returns an error only when the update itself fails.
pub fn synchronize<O: SiteStoreOpener>(
    fs: &impl LocalFs,
    opener: &O,
    reporter: &impl ProgressReporter,
    layout: &SiteLayout,
    endpoint: &SiteEndpoint,
    rewrite_content: bool,
) -> Result<SyncOutcome> {
    let store_file = layout.store_file();
    if !fs.exists(&store_file) {
        tracing::debug!(path = %store_file.display(), "no site database yet");
        return Ok(SyncOutcome::NoStore);
    }

    let store = match opener.open(&store_file) {
        Ok(store) => store,
        Err(e) => {
            tracing::debug!(error = %format!("{e:#}"), "could not open site database");
            return Ok(SyncOutcome::NotInstalled);
        }
    };

    let current = match store.home_url() {
        Ok(Some(url)) => url,
        Ok(None) => {
            tracing::debug!("home option not set");
            return Ok(SyncOutcome::NotInstalled);
        }
        Err(e) => {
            tracing::debug!(error = %format!("{e:#}"), "could not read home option");
            return Ok(SyncOutcome::NotInstalled);
        }
    };

    let wanted = endpoint.url();
    if current == wanted {
        tracing::debug!(url = %wanted, "site URL up to date");
        return Ok(SyncOutcome::UpToDate { url: wanted });
    }

    let update = store.update_site_urls(&current, &wanted, rewrite_content)?;
    tracing::info!(from = %current, to = %wanted, rows = update.option_rows, "site URL updated");
    reporter.step(&format!("Updating site URL from {current} to {wanted}"));
    if let Some(content) = update.content {
        tracing::debug!(
            guids = content.guids,
            posts = content.post_bodies,
            meta = content.meta_values,
            "rewrote embedded URLs"
        );
    }
    Ok(SyncOutcome::Updated {
        from: current,
        to: wanted,
        update,
    })
}
