//! Property-based tests for negotiation, secrets, archive mapping and URLs.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use pwp_cli::application::services::negotiate::negotiate_endpoint;
use pwp_cli::domain::secrets::{SECRET_ALPHABET, SECRET_LEN};
use pwp_cli::domain::{
    ArchiveRoot, EntryTarget, GeneratedSecrets, InstallationSettings, PortRequest, SiteEndpoint,
};

use crate::helpers::ScriptedProbe;

proptest! {
    /// An explicit port is returned unchanged and never probed.
    #[test]
    fn prop_explicit_port_is_never_probed(port in any::<u16>()) {
        let probe = ScriptedProbe::offline();
        let mut s = InstallationSettings::new("wordpress");
        s.port = PortRequest::Explicit(port);
        let endpoint = negotiate_endpoint(&probe, &s).unwrap();
        prop_assert_eq!(endpoint.port, port);
        prop_assert!(probe.calls.borrow().is_empty());
    }

    /// Every decimal u16 parses as an explicit port request.
    #[test]
    fn prop_port_strings_parse(port in any::<u16>()) {
        let parsed = port.to_string().parse::<PortRequest>().unwrap();
        prop_assert_eq!(parsed, PortRequest::Explicit(port));
    }

    /// Secrets always have the fixed shape, whatever the seed.
    #[test]
    fn prop_secrets_have_fixed_shape(seed in any::<u64>()) {
        let secrets = GeneratedSecrets::generate(&mut StdRng::seed_from_u64(seed));
        let values: Vec<&str> = secrets.iter().map(|(_, v)| v).collect();
        prop_assert_eq!(values.len(), 8);
        for v in &values {
            prop_assert_eq!(v.len(), SECRET_LEN);
            prop_assert!(v.bytes().all(|b| SECRET_ALPHABET.contains(&b)));
        }
        let distinct: std::collections::HashSet<_> = values.iter().collect();
        prop_assert_eq!(distinct.len(), 8);
    }

    /// Entries below a shared root land at their path minus that root.
    #[test]
    fn prop_shared_root_is_stripped(
        root in "[a-z]{1,8}",
        files in prop::collection::vec("[a-z]{1,6}(/[a-z]{1,6}){0,2}\\.php", 1..8),
    ) {
        let names: Vec<String> = files.iter().map(|f| format!("{root}/{f}")).collect();
        let detected = ArchiveRoot::detect(names.iter().map(String::as_str));
        prop_assert!(!detected.is_empty());
        for (name, file) in names.iter().zip(&files) {
            match detected.target(name) {
                EntryTarget::Inside(path) => {
                    let depth = detected.as_prefix().matches('/').count();
                    let full: PathBuf = name.split('/').skip(depth).collect();
                    prop_assert_eq!(&path, &full);
                    prop_assert!(PathBuf::from(file).ends_with(&path));
                }
                other => prop_assert!(false, "unexpected target {:?}", other),
            }
        }
    }

    /// Port 80 never appears in a site URL; every other port does.
    #[test]
    fn prop_url_port_rule(port in any::<u16>()) {
        let url = SiteEndpoint::new("localhost", port).url();
        if port == 80 {
            prop_assert_eq!(url, "http://localhost");
        } else {
            prop_assert_eq!(url, format!("http://localhost:{port}"));
        }
    }
}

#[test]
fn secrets_differ_across_seeds() {
    let a = GeneratedSecrets::generate(&mut StdRng::seed_from_u64(1));
    let b = GeneratedSecrets::generate(&mut StdRng::seed_from_u64(2));
    assert_ne!(a, b);
}
