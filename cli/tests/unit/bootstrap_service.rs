//! End-to-end tests of the bootstrap sequence with mocked network and store.

#![allow(clippy::unwrap_used)]

use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;

use pwp_cli::application::services::bootstrap::{BootstrapPorts, bootstrap};
use pwp_cli::application::services::provision::ProvisionOutcome;
use pwp_cli::application::services::synchronize::SyncOutcome;
use pwp_cli::domain::{InstallationSettings, PortRequest};
use pwp_cli::infra::archive::ZipExtractor;
use pwp_cli::infra::fs::StdFs;

use crate::helpers::{
    MemFetcher, MemStoreOpener, RecordingReporter, ScriptedProbe, addon_zip, core_zip,
};

fn settings(dir: &TempDir) -> InstallationSettings {
    let mut s = InstallationSettings::new(dir.path().join("site"));
    s.sources.wordpress = "mem://core".to_string();
    s.sources.sqlite_plugin = "mem://addon".to_string();
    s
}

#[test]
fn first_run_provisions_and_waits_for_installer() {
    let dir = TempDir::new().unwrap();
    let s = settings(&dir);
    let probe = ScriptedProbe::port_80_free();
    let fetcher = MemFetcher::default()
        .with("mem://core", core_zip())
        .with("mem://addon", addon_zip());
    let store = MemStoreOpener::default();
    let ports = BootstrapPorts {
        probe: &probe,
        fetcher: &fetcher,
        extractor: &ZipExtractor,
        fs: &StdFs,
        store: &store,
    };

    let report = bootstrap(
        &ports,
        &RecordingReporter::default(),
        &s,
        &mut StdRng::seed_from_u64(1),
    )
    .unwrap();

    assert_eq!(report.endpoint.url(), "http://localhost");
    assert!(matches!(report.provision, ProvisionOutcome::Provisioned { .. }));
    assert_eq!(report.sync, SyncOutcome::NoStore);

    let again = bootstrap(
        &ports,
        &RecordingReporter::default(),
        &s,
        &mut StdRng::seed_from_u64(2),
    )
    .unwrap();
    assert_eq!(again.provision, ProvisionOutcome::AlreadyProvisioned);
    assert_eq!(fetcher.call_count(), 2);
}

#[test]
fn blank_host_is_rejected_before_any_probe() {
    let dir = TempDir::new().unwrap();
    let mut s = settings(&dir);
    s.host = " ".to_string();
    s.port = PortRequest::Auto;
    let probe = ScriptedProbe::port_80_free();
    let ports = BootstrapPorts {
        probe: &probe,
        fetcher: &MemFetcher::default(),
        extractor: &ZipExtractor,
        fs: &StdFs,
        store: &MemStoreOpener::default(),
    };

    assert!(
        bootstrap(
            &ports,
            &RecordingReporter::default(),
            &s,
            &mut StdRng::seed_from_u64(1)
        )
        .is_err()
    );
    assert!(probe.calls.borrow().is_empty());
}
