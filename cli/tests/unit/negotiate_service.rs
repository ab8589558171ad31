//! Tests for endpoint negotiation.

#![allow(clippy::unwrap_used)]

use pwp_cli::application::services::negotiate::negotiate_endpoint;
use pwp_cli::domain::{BootstrapError, InstallationSettings, PortRequest};

use crate::helpers::ScriptedProbe;

fn settings(port: PortRequest) -> InstallationSettings {
    let mut s = InstallationSettings::new("wordpress");
    s.port = port;
    s
}

#[test]
fn explicit_port_is_used_without_probing() {
    let probe = ScriptedProbe::offline();
    let endpoint = negotiate_endpoint(&probe, &settings(PortRequest::Explicit(8080))).unwrap();
    assert_eq!(endpoint.port, 8080);
    assert_eq!(endpoint.host, "localhost");
    assert!(probe.calls.borrow().is_empty());
}

#[test]
fn auto_prefers_port_80() {
    let probe = ScriptedProbe::port_80_free();
    let endpoint = negotiate_endpoint(&probe, &settings(PortRequest::Auto)).unwrap();
    assert_eq!(endpoint.port, 80);
    assert_eq!(*probe.calls.borrow(), vec![("localhost".to_string(), 80)]);
}

#[test]
fn auto_falls_back_to_kernel_port() {
    let probe = ScriptedProbe::port_80_taken(51_234);
    let endpoint = negotiate_endpoint(&probe, &settings(PortRequest::Auto)).unwrap();
    assert_eq!(endpoint.port, 51_234);
    let ports: Vec<u16> = probe.calls.borrow().iter().map(|(_, p)| *p).collect();
    assert_eq!(ports, vec![80, 0]);
}

#[test]
fn auto_fails_when_nothing_binds() {
    let probe = ScriptedProbe::offline();
    let err = negotiate_endpoint(&probe, &settings(PortRequest::Auto)).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<BootstrapError>(),
        Some(BootstrapError::NetworkUnavailable { .. })
    ));
}

#[test]
fn probes_use_the_configured_host() {
    let probe = ScriptedProbe::port_80_free();
    let mut s = settings(PortRequest::Auto);
    s.host = "127.0.0.1".to_string();
    negotiate_endpoint(&probe, &s).unwrap();
    assert_eq!(probe.calls.borrow()[0].0, "127.0.0.1");
}
