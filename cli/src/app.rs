//! Application context — unified state passed to the command handler.
//!
//! `AppContext` owns the output context and every production adapter, so
//! the command handler only wires them into application services.

use tracing::subscriber::DefaultGuard;
use tracing_subscriber::EnvFilter;

use crate::infra::archive::ZipExtractor;
use crate::infra::command_runner::TokioProcessLauncher;
use crate::infra::fetch::UreqFetcher;
use crate::infra::fs::StdFs;
use crate::infra::network::StdPortProbe;
use crate::infra::store::SqliteStoreOpener;
use crate::output::{OutputContext, TerminalReporter};

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

/// Unified application context.
///
/// Constructed once in `Cli::run()` and passed as `&AppContext` to the
/// command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Archive downloads.
    pub fetcher: UreqFetcher,
    /// Zip extraction.
    pub extractor: ZipExtractor,
    /// Port availability checks.
    pub probe: StdPortProbe,
    /// Local filesystem.
    pub fs: StdFs,
    /// WordPress database access.
    pub store: SqliteStoreOpener,
    /// PHP server and viewer processes.
    pub launcher: TokioProcessLauncher,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    #[must_use]
    pub fn new(flags: &OutputFlags) -> Self {
        Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            fetcher: UreqFetcher::new(),
            extractor: ZipExtractor,
            probe: StdPortProbe,
            fs: StdFs,
            store: SqliteStoreOpener,
            launcher: TokioProcessLauncher,
        }
    }

    /// Progress reporter over this context's output.
    #[must_use]
    pub fn terminal_reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }
}

/// Filter directive for a `-v` count; `RUST_LOG` takes precedence.
#[must_use]
pub fn log_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr `tracing` subscriber for the duration of the run.
///
/// The subscriber stays active until the returned guard is dropped.
pub fn init_tracing(verbose: u8) -> DefaultGuard {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_directive(verbose)));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_default(subscriber)
}
