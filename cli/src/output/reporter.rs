//! `TerminalReporter` — Presentation-layer implementation of `ProgressReporter`.
//!
//! Wraps `&OutputContext` and implements the `application::ports::ProgressReporter`
//! trait so application services can emit progress events without depending on
//! any presentation type directly.

use owo_colors::OwoColorize as _;

use crate::application::ports::{PhaseEnd, PhaseGuard, ProgressReporter};
use crate::output::{OutputContext, progress};

/// Terminal progress reporter that wraps an `OutputContext`.
///
/// - `step()` prints `"  → {message}"` (suppressed when `ctx.quiet`)
/// - `success()` prints `"  ✓ {message}"` (suppressed when `ctx.quiet`)
/// - `warn()` prints `"  ! {message}"` (suppressed when `ctx.quiet`)
/// - `phase()` shows a spinner on a TTY, a step line otherwise
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
}

impl<'a> TerminalReporter<'a> {
    /// Create a new `TerminalReporter` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    fn step(&self, message: &str) {
        if !self.ctx.quiet {
            println!("  {} {message}", "→".style(self.ctx.styles.step));
        }
    }

    fn success(&self, message: &str) {
        if !self.ctx.quiet {
            println!("  {} {message}", "✓".style(self.ctx.styles.success));
        }
    }

    fn warn(&self, message: &str) {
        if !self.ctx.quiet {
            println!("  {} {message}", "!".style(self.ctx.styles.warning));
        }
    }

    fn phase(&self, message: &str) -> PhaseGuard {
        if self.ctx.quiet {
            return PhaseGuard::noop();
        }
        if self.ctx.show_progress() {
            let pb = progress::spinner(message);
            return PhaseGuard::new(move |end| match end {
                PhaseEnd::Completed(done) => progress::finish_ok(&pb, &done),
                PhaseEnd::Abandoned => progress::abandon(&pb),
            });
        }
        self.step(message);
        let success = self.ctx.styles.success;
        PhaseGuard::new(move |end| {
            if let PhaseEnd::Completed(done) = end {
                println!("  {} {done}", "✓".style(success));
            }
        })
    }
}
