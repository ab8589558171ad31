//! Application service — run the PHP built-in server in the foreground.

use std::process::ExitStatus;

use anyhow::{Context, Result};

use crate::application::ports::{
    LaunchSpec, ProcessLauncher, ProgressReporter, RunningProcess,
};
use crate::domain::layout::ROUTER_FILE;
use crate::domain::viewer::viewer_command;
use crate::domain::{InstallationSettings, SiteEndpoint};

/// Build the `php -S` invocation for an endpoint.
#[must_use]
pub fn server_spec(settings: &InstallationSettings, endpoint: &SiteEndpoint) -> LaunchSpec {
    LaunchSpec::new(
        settings.server_executable.clone(),
        vec![
            "-S".to_string(),
            endpoint.bind_address(),
            "-t".to_string(),
            ".".to_string(),
            ROUTER_FILE.to_string(),
        ],
    )
    .current_dir(&settings.install_path)
}

/// Start the server, optionally open the viewer, and wait for the server
/// to exit.
///
/// `os` is the value of `std::env::consts::OS` used to pick the viewer.
///
/// # Errors
///
/// Returns an error if the server cannot be started or waited on. The
/// server's own exit status is returned, not turned into an error.
pub async fn supervise<L: ProcessLauncher>(
    launcher: &L,
    reporter: &impl ProgressReporter,
    settings: &InstallationSettings,
    endpoint: &SiteEndpoint,
    os: &str,
) -> Result<ExitStatus> {
    let spec = server_spec(settings, endpoint);
    tracing::debug!(command = %spec.display(), "starting PHP server");
    let server = launcher
        .start(&spec)
        .with_context(|| format!("could not start PHP server ({})", spec.program))?;
    tracing::info!(pid = ?server.id(), "PHP server started");

    reporter.success(&format!("PHP server listening on {}", endpoint.bind_address()));
    reporter.step("Press Ctrl-C to stop");

    if settings.open_browser {
        open_viewer(launcher, os, &endpoint.url());
    }

    let status = server.wait().await.context("PHP server wait failed")?;
    if status.success() {
        tracing::info!(%status, "PHP server exited");
    } else {
        tracing::warn!(%status, "PHP server exited");
        reporter.warn(&format!("PHP server exited with {status}"));
    }
    Ok(status)
}

fn open_viewer(launcher: &impl ProcessLauncher, os: &str, url: &str) {
    let Some((program, args)) = viewer_command(os, url) else {
        tracing::debug!(os, "no viewer for this platform");
        return;
    };
    if let Err(e) = launcher.start_detached(&LaunchSpec::new(program, args)) {
        tracing::debug!(program, error = %format!("{e:#}"), "could not open viewer");
    }
}
