//! Per-run installation settings.
//!
//! Pure types only — no I/O, no async, no filesystem access.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::domain::config::SourcesConfig;
use crate::domain::error::ConfigError;

/// Sentinel accepted by `--port` to request automatic port selection.
pub const AUTO_PORT: &str = "auto";

/// The port the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortRequest {
    /// Pick 80 when free, otherwise let the kernel choose.
    Auto,
    /// Use exactly this port, no availability check.
    Explicit(u16),
}

impl FromStr for PortRequest {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(AUTO_PORT) {
            return Ok(Self::Auto);
        }
        trimmed
            .parse::<u16>()
            .map(Self::Explicit)
            .map_err(|_| ConfigError::InvalidPort(s.to_string()))
    }
}

impl fmt::Display for PortRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str(AUTO_PORT),
            Self::Explicit(port) => write!(f, "{port}"),
        }
    }
}

/// Immutable configuration for one `pwp` invocation.
///
/// Built once from CLI flags merged over the config file. The negotiated
/// port lives in [`SiteEndpoint`](crate::domain::endpoint::SiteEndpoint),
/// never back in here.
#[derive(Debug, Clone)]
pub struct InstallationSettings {
    /// Host name or address to serve on.
    pub host: String,
    /// Requested port.
    pub port: PortRequest,
    /// Directory holding the WordPress tree.
    pub install_path: PathBuf,
    /// PHP executable used to run the built-in server.
    pub server_executable: String,
    /// Open the site in the platform viewer once the server is up.
    pub open_browser: bool,
    /// Rewrite old URLs inside post content and metadata after an endpoint change.
    pub rewrite_content: bool,
    /// Where the core and add-on archives come from.
    pub sources: SourcesConfig,
}

impl InstallationSettings {
    /// Settings with the stock defaults (`localhost`, `auto`, `wordpress`, `php`).
    #[must_use]
    pub fn new(install_path: impl Into<PathBuf>) -> Self {
        Self {
            host: "localhost".to_string(),
            port: PortRequest::Auto,
            install_path: install_path.into(),
            server_executable: "php".to_string(),
            open_browser: true,
            rewrite_content: true,
            sources: SourcesConfig::default(),
        }
    }

    /// Reject values that cannot possibly work.
    ///
    /// # Errors
    ///
    /// Returns an error if the host is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        Ok(())
    }
}
