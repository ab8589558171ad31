//! Domain types for the optional `~/.pwp/config.yaml`.
//!
//! Pure types only — no I/O, no async, no filesystem access.

use serde::Deserialize;

// ── Constants ────────────────────────────────────────────────────────────────

/// Latest WordPress release archive.
pub const DEFAULT_WORDPRESS_URL: &str = "https://wordpress.org/latest.zip";
/// SQLite Integration drop-in plugin archive.
pub const DEFAULT_SQLITE_PLUGIN_URL: &str =
    "https://downloads.wordpress.org/plugin/sqlite-integration.zip";
/// Directory name of the add-on under `wp-content/plugins/`.
pub const DEFAULT_PLUGIN_SLUG: &str = "sqlite-integration";

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration file. Every field is optional.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PwpConfig {
    /// Archive locations.
    pub sources: SourcesConfig,
    /// Viewer behaviour.
    pub browser: BrowserConfig,
}

/// Where the core and add-on archives are fetched from.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SourcesConfig {
    /// WordPress core zip.
    pub wordpress: String,
    /// SQLite integration plugin zip.
    pub sqlite_plugin: String,
    /// Folder the plugin is extracted into.
    pub plugin_slug: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            wordpress: DEFAULT_WORDPRESS_URL.to_string(),
            sqlite_plugin: DEFAULT_SQLITE_PLUGIN_URL.to_string(),
            plugin_slug: DEFAULT_PLUGIN_SLUG.to_string(),
        }
    }
}

/// Viewer settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BrowserConfig {
    /// Open the site once the server is running.
    pub open: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self { open: true }
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
