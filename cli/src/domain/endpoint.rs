//! The `(host, port)` pair a site is served from.

use std::fmt;

/// Port that is left out of site URLs.
pub const DEFAULT_HTTP_PORT: u16 = 80;

/// Negotiated endpoint for the current run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteEndpoint {
    pub host: String,
    pub port: u16,
}

impl SiteEndpoint {
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Host as it must appear in a URL authority (IPv6 literals bracketed).
    fn authority_host(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        }
    }

    /// Site URL as WordPress stores it in `home` / `siteurl`.
    ///
    /// Port 80 is omitted: `http://localhost`, otherwise `http://localhost:8080`.
    #[must_use]
    pub fn url(&self) -> String {
        if self.port == DEFAULT_HTTP_PORT {
            format!("http://{}", self.authority_host())
        } else {
            format!("http://{}:{}", self.authority_host(), self.port)
        }
    }

    /// Address handed to `php -S`.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.authority_host(), self.port)
    }
}

impl fmt::Display for SiteEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bind_address())
    }
}
