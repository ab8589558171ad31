//! HTTP implementation of the `Fetcher` port.

use std::time::Duration;

use anyhow::Result;

use crate::application::ports::{FetchedBody, Fetcher};

/// Connect timeout for archive downloads. Reads are unbounded: archives
/// are tens of megabytes.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Production `Fetcher` over a blocking `ureq` agent.
pub struct UreqFetcher {
    agent: ureq::Agent,
}

impl UreqFetcher {
    #[must_use]
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(CONNECT_TIMEOUT)
            .user_agent(concat!("pwp/", env!("CARGO_PKG_VERSION")))
            .build();
        Self { agent }
    }
}

impl Default for UreqFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher for UreqFetcher {
    fn fetch(&self, url: &str) -> Result<FetchedBody> {
        let response = match self.agent.get(url).call() {
            Ok(r) => r,
            Err(ureq::Error::Status(code, _)) => anyhow::bail!("HTTP {code}"),
            Err(ureq::Error::Transport(t)) => anyhow::bail!("{t}"),
        };
        let content_length = response
            .header("Content-Length")
            .and_then(|v| v.parse::<u64>().ok());
        tracing::debug!(url, status = response.status(), ?content_length, "fetch started");
        Ok(FetchedBody {
            reader: response.into_reader(),
            content_length,
        })
    }
}
