//! Application service — endpoint negotiation.

use anyhow::Result;

use crate::application::ports::PortProbe;
use crate::domain::endpoint::DEFAULT_HTTP_PORT;
use crate::domain::{BootstrapError, InstallationSettings, PortRequest, SiteEndpoint};

/// Choose the endpoint the site is served on.
///
/// Priority is strict: an explicit port is returned untouched without any
/// bind, then port 80 if it can be bound, then whatever ephemeral port the
/// kernel hands out.
///
/// # Errors
///
/// Returns [`BootstrapError::NetworkUnavailable`] when not even an ephemeral
/// port can be bound on the host.
pub fn negotiate_endpoint(
    probe: &impl PortProbe,
    settings: &InstallationSettings,
) -> Result<SiteEndpoint> {
    let host = settings.host.as_str();
    let port = match settings.port {
        PortRequest::Explicit(port) => port,
        PortRequest::Auto => match probe.try_bind(host, DEFAULT_HTTP_PORT) {
            Ok(_) => DEFAULT_HTTP_PORT,
            Err(e) => {
                tracing::debug!(host, error = %format!("{e:#}"), "port 80 unavailable, asking the kernel");
                probe
                    .try_bind(host, 0)
                    .map_err(|e| BootstrapError::NetworkUnavailable {
                        host: host.to_string(),
                        reason: format!("{e:#}"),
                    })?
            }
        },
    };
    tracing::info!(host, port, "endpoint negotiated");
    Ok(SiteEndpoint::new(host, port))
}
