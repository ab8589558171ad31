//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use anyhow::Result;

use crate::domain::PwpConfig;

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// How a reported phase ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhaseEnd {
    /// The phase finished; carries the completion message.
    Completed(String),
    /// The guard was dropped before completion (error path).
    Abandoned,
}

/// Handle for a long-running phase indicator.
///
/// The indicator lives exactly as long as the guard: `complete` ends it with
/// a message, dropping the guard ends it silently.
#[must_use = "dropping the guard ends the phase immediately"]
pub struct PhaseGuard {
    on_end: Option<Box<dyn FnOnce(PhaseEnd)>>,
}

impl PhaseGuard {
    /// Guard that runs `on_end` once when the phase ends.
    pub fn new(on_end: impl FnOnce(PhaseEnd) + 'static) -> Self {
        Self {
            on_end: Some(Box::new(on_end)),
        }
    }

    /// Guard with no indicator attached.
    pub fn noop() -> Self {
        Self { on_end: None }
    }

    /// End the phase successfully.
    pub fn complete(mut self, message: &str) {
        if let Some(f) = self.on_end.take() {
            f(PhaseEnd::Completed(message.to_string()));
        }
    }
}

impl Drop for PhaseGuard {
    fn drop(&mut self) {
        if let Some(f) = self.on_end.take() {
            f(PhaseEnd::Abandoned);
        }
    }
}

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
    /// Start an indicator for a long-running phase.
    fn phase(&self, message: &str) -> PhaseGuard;
}

// ── Fetch Port ────────────────────────────────────────────────────────────────

/// Response body of a successful fetch.
pub struct FetchedBody {
    /// Byte stream of the resource.
    pub reader: Box<dyn Read + Send>,
    /// Advertised size, when the server sent one.
    pub content_length: Option<u64>,
}

/// Retrieves remote resources. Transport errors surface as `Err`.
pub trait Fetcher {
    /// Open a byte stream for `url`.
    fn fetch(&self, url: &str) -> Result<FetchedBody>;
}

// ── Archive Port ──────────────────────────────────────────────────────────────

/// What an extraction pass produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionSummary {
    /// Root prefix that was stripped (`wordpress/`), empty when none.
    pub root: String,
    /// Regular files written.
    pub files: usize,
    /// Directories created from directory entries.
    pub directories: usize,
}

/// Unpacks an archive into a destination directory.
pub trait ArchiveExtractor {
    /// Extract `archive` into `destination`, stripping its root prefix.
    /// The archive file is deleted on success.
    fn extract(&self, archive: &Path, destination: &Path) -> Result<ExtractionSummary>;
}

// ── Network Probe Port ────────────────────────────────────────────────────────

/// Tests whether a TCP port can be bound.
pub trait PortProbe {
    /// Bind `host:port`, release it, and return the port actually bound
    /// (the kernel's choice when `port` is 0).
    fn try_bind(&self, host: &str, port: u16) -> Result<u16>;
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Abstracts the filesystem operations of provisioning.
pub trait LocalFs {
    /// Whether `path` exists.
    fn exists(&self, path: &Path) -> bool;
    /// Create a directory and all parents.
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    /// Create (or truncate) a file for writing.
    fn create_file(&self, path: &Path) -> Result<Box<dyn Write>>;
    /// Write `content` to `path`, replacing any existing file.
    fn write(&self, path: &Path, content: &str) -> Result<()>;
    /// Rename a file or directory.
    fn rename(&self, from: &Path, to: &Path) -> Result<()>;
    /// Remove a directory tree.
    fn remove_dir_all(&self, path: &Path) -> Result<()>;
    /// Create an empty staging directory next to `target`, on the same
    /// filesystem so it can be renamed onto `target`.
    fn staging_dir(&self, target: &Path) -> Result<PathBuf>;
}

// ── Site Store Port ───────────────────────────────────────────────────────────

/// Rows touched by the embedded-URL rewrite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentRewrite {
    /// `wp_posts.guid` rows changed.
    pub guids: usize,
    /// `wp_posts.post_content` rows changed.
    pub post_bodies: usize,
    /// `wp_postmeta.meta_value` rows changed.
    pub meta_values: usize,
}

/// Result of rewriting the site URL rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SiteUrlUpdate {
    /// `home` / `siteurl` rows updated.
    pub option_rows: usize,
    /// Embedded occurrences rewritten, when requested.
    pub content: Option<ContentRewrite>,
}

/// Minimal read/update interface over the WordPress database.
pub trait SiteStore {
    /// Persisted `home` option, `None` when the row is absent.
    ///
    /// # Errors
    ///
    /// Returns an error when the options table cannot be queried
    /// (typically because WordPress has not created its schema yet).
    fn home_url(&self) -> Result<Option<String>>;

    /// Set `home` and `siteurl` to `new_url` and, when `rewrite_content` is
    /// set, replace `old_url` with `new_url` in post and metadata fields.
    fn update_site_urls(
        &self,
        old_url: &str,
        new_url: &str,
        rewrite_content: bool,
    ) -> Result<SiteUrlUpdate>;
}

/// Opens the store file of an installation.
pub trait SiteStoreOpener {
    type Store: SiteStore;

    /// Open an existing store; must never create one.
    fn open(&self, path: &Path) -> Result<Self::Store>;
}

// ── Process Port ──────────────────────────────────────────────────────────────

/// Program, arguments and working directory of a process to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl LaunchSpec {
    #[must_use]
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            cwd: None,
        }
    }

    #[must_use]
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Human-readable command line for logs.
    #[must_use]
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A started process that can be waited on.
#[allow(async_fn_in_trait)]
pub trait RunningProcess {
    /// OS process id, if still known.
    fn id(&self) -> Option<u32>;
    /// Wait for the process to exit.
    async fn wait(self) -> Result<ExitStatus>;
}

/// Starts external processes.
pub trait ProcessLauncher {
    type Running: RunningProcess;

    /// Start a process the caller will wait on.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned.
    fn start(&self, spec: &LaunchSpec) -> Result<Self::Running>;

    /// Start a process and forget about it.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned.
    fn start_detached(&self, spec: &LaunchSpec) -> Result<()>;
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Loads the optional configuration file.
pub trait ConfigStore {
    /// Load the config, falling back to defaults when the file is absent.
    fn load(&self) -> Result<PwpConfig>;
    /// Location of the config file.
    fn path(&self) -> Result<PathBuf>;
}
