//! Fixed file layout of a provisioned installation.

use std::path::{Path, PathBuf};

/// Generated environment definitions file.
pub const CONFIG_FILE: &str = "wp-config.php";
/// Generated routing shim for `php -S`.
pub const ROUTER_FILE: &str = "router.php";
/// Plugins directory, relative to the installation root.
pub const PLUGINS_DIR: &str = "wp-content/plugins";
/// Database drop-in shipped by the SQLite add-on.
pub const ADDON_ENTRY_POINT: &str = "db.php";
/// Directory WordPress loads drop-ins from.
pub const CONTENT_DIR: &str = "wp-content";
/// SQLite database file, created by the WordPress installer on first visit.
pub const STORE_FILE: &str = "wp-content/database/.ht.sqlite";
/// Table prefix written to the config and used by every store query.
pub const TABLE_PREFIX: &str = "wp_";

/// Paths derived from an installation root.
#[derive(Debug, Clone)]
pub struct SiteLayout {
    root: PathBuf,
}

impl SiteLayout {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    #[must_use]
    pub fn router_file(&self) -> PathBuf {
        self.root.join(ROUTER_FILE)
    }

    #[must_use]
    pub fn plugins_dir(&self) -> PathBuf {
        self.root.join(PLUGINS_DIR)
    }

    /// Folder the add-on is extracted into.
    #[must_use]
    pub fn addon_dir(&self, slug: &str) -> PathBuf {
        self.plugins_dir().join(slug)
    }

    /// Where the add-on's entry point is relocated to. WordPress only
    /// picks up `db.php` from the content directory.
    #[must_use]
    pub fn addon_entry_point(&self) -> PathBuf {
        self.root.join(CONTENT_DIR).join(ADDON_ENTRY_POINT)
    }

    #[must_use]
    pub fn store_file(&self) -> PathBuf {
        self.root.join(STORE_FILE)
    }
}
