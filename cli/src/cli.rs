//! CLI argument parsing with clap derive

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::app::{AppContext, OutputFlags, init_tracing};
use crate::application::ports::ConfigStore;
use crate::commands;
use crate::domain::{InstallationSettings, PortRequest, PwpConfig};
use crate::infra::config::YamlConfigStore;

/// Flags that were historically spelled with a single dash.
const LEGACY_FLAGS: [&str; 4] = ["host", "port", "path", "php"];

/// Portable WordPress: download, configure and serve WordPress on SQLite
/// with the PHP built-in server
#[derive(Parser, Debug)]
#[command(name = "pwp", version)]
pub struct Cli {
    /// Host name to serve on
    #[arg(long, default_value = "localhost", env = "PWP_HOST")]
    pub host: String,

    /// Port to use, or `auto` for 80 when free and a random port otherwise
    #[arg(long, default_value = "auto", env = "PWP_PORT")]
    pub port: PortRequest,

    /// Installation path
    #[arg(long, default_value = "wordpress", env = "PWP_PATH")]
    pub path: PathBuf,

    /// PHP executable
    #[arg(long, default_value = "php", env = "PWP_PHP")]
    pub php: String,

    /// Do not open the site in a browser
    #[arg(long)]
    pub no_browser: bool,

    /// Only update home/siteurl when the address changes, leave post content alone
    #[arg(long)]
    pub keep_content_urls: bool,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    /// Increase diagnostic logging (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Rewrite `-host`, `-port`, `-path` and `-php` (with or without `=value`)
/// to their double-dash form. Arguments after `--` are left alone.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    for arg in args {
        let arg: OsString = arg.into();
        if passthrough {
            out.push(arg);
            continue;
        }
        let rewritten = arg.to_str().and_then(|s| {
            if s == "--" {
                return None;
            }
            let flag = s.strip_prefix('-').filter(|rest| !rest.starts_with('-'))?;
            let name = flag.split_once('=').map_or(flag, |(name, _)| name);
            LEGACY_FLAGS.contains(&name).then(|| OsString::from(format!("-{s}")))
        });
        if arg == "--" {
            passthrough = true;
        }
        out.push(rewritten.unwrap_or(arg));
    }
    out
}

impl Cli {
    /// Parse the process arguments, accepting the legacy single-dash flags.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_legacy_flags(std::env::args_os()))
    }

    /// Merge the flags over the config file into per-run settings.
    #[must_use]
    pub fn settings(&self, config: PwpConfig) -> InstallationSettings {
        let mut settings = InstallationSettings::new(self.path.clone());
        settings.host.clone_from(&self.host);
        settings.port = self.port;
        settings.server_executable.clone_from(&self.php);
        settings.open_browser = !self.no_browser && config.browser.open;
        settings.rewrite_content = !self.keep_content_urls;
        settings.sources = config.sources;
        settings
    }

    /// Execute the CLI.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file is unreadable or any bootstrap
    /// phase fails.
    pub async fn run(self) -> Result<()> {
        let _log = init_tracing(self.verbose);
        let store = YamlConfigStore;
        let config = store.load().context("cannot load configuration")?;
        tracing::debug!(path = ?store.path().ok(), "configuration loaded");

        let settings = self.settings(config);
        let app = AppContext::new(&OutputFlags {
            no_color: self.no_color,
            quiet: self.quiet,
        });
        commands::serve::run(&settings, &app).await
    }
}
