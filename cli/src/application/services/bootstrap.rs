//! Application service — the per-run bootstrap sequence up to serving.

use anyhow::Result;
use rand::Rng;

use crate::application::ports::{
    ArchiveExtractor, Fetcher, LocalFs, PortProbe, ProgressReporter, SiteStoreOpener,
};
use crate::application::services::negotiate::negotiate_endpoint;
use crate::application::services::provision::{ProvisionOutcome, ProvisionPorts, provision};
use crate::application::services::synchronize::{SyncOutcome, synchronize};
use crate::domain::{InstallationSettings, SiteEndpoint, SiteLayout};

/// Everything `bootstrap` needs from the outside world.
pub struct BootstrapPorts<'a, P, F, X, L, O> {
    pub probe: &'a P,
    pub fetcher: &'a F,
    pub extractor: &'a X,
    pub fs: &'a L,
    pub store: &'a O,
}

/// What a bootstrap run did before handing over to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapReport {
    pub endpoint: SiteEndpoint,
    pub provision: ProvisionOutcome,
    pub sync: SyncOutcome,
}

/// Negotiate the endpoint, provision if needed, then bring the stored
/// site URL in line with the endpoint.
///
/// # Errors
///
/// Propagates negotiation, provisioning and URL update failures.
pub fn bootstrap<P, F, X, L, O>(
    ports: &BootstrapPorts<'_, P, F, X, L, O>,
    reporter: &impl ProgressReporter,
    settings: &InstallationSettings,
    rng: &mut impl Rng,
) -> Result<BootstrapReport>
where
    P: PortProbe,
    F: Fetcher,
    X: ArchiveExtractor,
    L: LocalFs,
    O: SiteStoreOpener,
{
    settings.validate()?;
    let endpoint = negotiate_endpoint(ports.probe, settings)?;

    let provision = provision(
        &ProvisionPorts {
            fetcher: ports.fetcher,
            extractor: ports.extractor,
            fs: ports.fs,
        },
        reporter,
        settings,
        rng,
    )?;

    let layout = SiteLayout::new(&settings.install_path);
    let sync = synchronize(
        ports.fs,
        ports.store,
        reporter,
        &layout,
        &endpoint,
        settings.rewrite_content,
    )?;

    Ok(BootstrapReport {
        endpoint,
        provision,
        sync,
    })
}
