//! Network infrastructure — implements `PortProbe` with a transient bind.

use std::net::TcpListener;

use anyhow::{Context, Result};

use crate::application::ports::PortProbe;

/// Production probe: binds a `std` listener and drops it immediately.
pub struct StdPortProbe;

impl PortProbe for StdPortProbe {
    fn try_bind(&self, host: &str, port: u16) -> Result<u16> {
        let listener = TcpListener::bind((host, port))
            .with_context(|| format!("cannot bind {host}:{port}"))?;
        let bound = listener.local_addr().context("reading bound address")?.port();
        drop(listener);
        Ok(bound)
    }
}
