//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod archive;
pub mod config;
pub mod digest;
pub mod endpoint;
pub mod error;
pub mod layout;
pub mod secrets;
pub mod settings;
pub mod templates;
pub mod viewer;

pub use archive::{ArchiveRoot, EntryTarget};
pub use config::{BrowserConfig, PwpConfig, SourcesConfig};
pub use endpoint::SiteEndpoint;
pub use error::{BootstrapError, ConfigError};
pub use layout::SiteLayout;
pub use secrets::GeneratedSecrets;
pub use settings::{InstallationSettings, PortRequest};
