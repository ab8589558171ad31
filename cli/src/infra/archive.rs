//! Zip implementation of the `ArchiveExtractor` port.

use std::fs::File;
use std::path::Path;

use anyhow::Result;

use crate::application::ports::{ArchiveExtractor, ExtractionSummary};
use crate::domain::{ArchiveRoot, BootstrapError, EntryTarget};

/// Production extractor over the `zip` crate.
pub struct ZipExtractor;

impl ArchiveExtractor for ZipExtractor {
    fn extract(&self, archive: &Path, destination: &Path) -> Result<ExtractionSummary> {
        let open_failed = |reason: String| BootstrapError::ArchiveOpen {
            path: archive.display().to_string(),
            reason,
        };
        let file = File::open(archive).map_err(|e| open_failed(e.to_string()))?;
        let mut zip = zip::ZipArchive::new(file).map_err(|e| open_failed(e.to_string()))?;

        let root = ArchiveRoot::detect(zip.file_names());
        let mut summary = ExtractionSummary {
            root: root.as_prefix(),
            ..ExtractionSummary::default()
        };
        std::fs::create_dir_all(destination).map_err(|e| BootstrapError::Extraction {
            entry: destination.display().to_string(),
            reason: e.to_string(),
        })?;

        for i in 0..zip.len() {
            let mut entry = zip.by_index(i).map_err(|e| BootstrapError::Extraction {
                entry: format!("#{i}"),
                reason: e.to_string(),
            })?;
            let name = entry.name().to_string();
            let failed = |reason: String| BootstrapError::Extraction {
                entry: name.clone(),
                reason,
            };

            let relative = match root.target(&name) {
                EntryTarget::Root => continue,
                EntryTarget::Inside(p) => p,
                EntryTarget::Unsafe => {
                    return Err(failed("path escapes the destination".to_string()).into());
                }
            };
            let path = destination.join(relative);

            if entry.is_dir() {
                std::fs::create_dir_all(&path).map_err(|e| failed(e.to_string()))?;
                summary.directories += 1;
                continue;
            }

            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| failed(e.to_string()))?;
            }
            let mut out = File::create(&path).map_err(|e| failed(e.to_string()))?;
            std::io::copy(&mut entry, &mut out).map_err(|e| failed(e.to_string()))?;
            drop(out);
            if let Some(mode) = entry.unix_mode() {
                apply_mode(&path, mode).map_err(|e| failed(e.to_string()))?;
            }
            summary.files += 1;
        }

        drop(zip);
        std::fs::remove_file(archive).map_err(|e| open_failed(format!("cannot remove: {e}")))?;
        tracing::debug!(
            archive = %archive.display(),
            root = %summary.root,
            files = summary.files,
            directories = summary.directories,
            "archive extracted"
        );
        Ok(summary)
    }
}

#[cfg(unix)]
fn apply_mode(path: &Path, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode & 0o7777))
}

#[cfg(not(unix))]
fn apply_mode(_path: &Path, _mode: u32) -> std::io::Result<()> {
    Ok(())
}
