//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Bootstrap errors ──────────────────────────────────────────────────────────

/// Failures of the bootstrap pipeline, one variant per failure class.
///
/// Callers add the phase label (`could not download WordPress`, ...) with
/// `anyhow::Context`; the variant stays reachable through `downcast_ref`.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("download of {url} failed: {reason}")]
    Download { url: String, reason: String },

    #[error("cannot open archive {path}: {reason}")]
    ArchiveOpen { path: String, reason: String },

    #[error("cannot extract '{entry}': {reason}")]
    Extraction { entry: String, reason: String },

    #[error("cannot write {path}: {reason}")]
    ConfigWrite { path: String, reason: String },

    #[error("no bindable port on host '{host}': {reason}")]
    NetworkUnavailable { host: String, reason: String },

    #[error("site database unavailable: {0}")]
    StoreUnavailable(String),
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to command-line and config-file values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid port '{0}': expected 'auto' or a number between 0 and 65535")]
    InvalidPort(String),

    #[error("Invalid host: must not be empty")]
    EmptyHost,
}
