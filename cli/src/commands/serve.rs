//! `pwp` — provision if needed, sync the site URL, then serve.

use anyhow::Result;
use owo_colors::OwoColorize as _;

use crate::app::AppContext;
use crate::application::services::bootstrap::{BootstrapPorts, BootstrapReport, bootstrap};
use crate::application::services::provision::ProvisionOutcome;
use crate::application::services::supervise::supervise;
use crate::application::services::synchronize::SyncOutcome;
use crate::domain::InstallationSettings;
use crate::output::OutputContext;

/// Run `pwp`.
///
/// # Errors
///
/// Returns an error if negotiation, provisioning, the URL update or the
/// server launch fails.
pub async fn run(settings: &InstallationSettings, app: &AppContext) -> Result<()> {
    let reporter = app.terminal_reporter();
    let ports = BootstrapPorts {
        probe: &app.probe,
        fetcher: &app.fetcher,
        extractor: &app.extractor,
        fs: &app.fs,
        store: &app.store,
    };

    let report = bootstrap(&ports, &reporter, settings, &mut rand::thread_rng())?;
    print_report(&report, settings, &app.output);

    supervise(
        &app.launcher,
        &reporter,
        settings,
        &report.endpoint,
        std::env::consts::OS,
    )
    .await?;
    Ok(())
}

fn print_report(report: &BootstrapReport, settings: &InstallationSettings, ctx: &OutputContext) {
    if ctx.quiet {
        return;
    }
    if report.provision == ProvisionOutcome::AlreadyProvisioned {
        println!(
            "  {} Using existing installation in {}",
            "✓".style(ctx.styles.success),
            settings.install_path.display()
        );
    }
    if report.sync == SyncOutcome::NoStore {
        println!(
            "  {} Finish the WordPress installer in the browser to create the database",
            "→".style(ctx.styles.step)
        );
    }
    println!(
        "  {} {}",
        "→".style(ctx.styles.step),
        report.endpoint.url().style(ctx.styles.url)
    );
}
