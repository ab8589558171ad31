//! Archive root-prefix detection and entry path mapping.
//!
//! Pure functions over entry names; the zip reading itself lives in
//! `crate::infra::archive`.

use std::path::PathBuf;

/// Where an archive entry lands relative to the extraction destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryTarget {
    /// The entry is the root folder itself; nothing to create.
    Root,
    /// Relative path below the destination.
    Inside(PathBuf),
    /// The name escapes the destination (`..`, absolute path, drive prefix).
    Unsafe,
}

/// Common leading directory shared by every entry of an archive.
///
/// Computed as the longest common path prefix over each entry's directory
/// part, compared segment by segment. An archive with sibling top-level
/// folders (or files at the top level) has an empty root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveRoot {
    segments: Vec<String>,
}

impl ArchiveRoot {
    /// Detect the root from all entry names of an archive.
    pub fn detect<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut common: Option<Vec<String>> = None;
        for name in names {
            let dir = directory_segments(name);
            common = Some(match common {
                None => dir,
                Some(mut prefix) => {
                    let shared = prefix
                        .iter()
                        .zip(dir.iter())
                        .take_while(|(a, b)| a == b)
                        .count();
                    prefix.truncate(shared);
                    prefix
                }
            });
            if common.as_ref().is_some_and(Vec::is_empty) {
                break;
            }
        }
        Self {
            segments: common.unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Root in archive notation, e.g. `wordpress/`; empty when there is none.
    #[must_use]
    pub fn as_prefix(&self) -> String {
        if self.segments.is_empty() {
            String::new()
        } else {
            format!("{}/", self.segments.join("/"))
        }
    }

    /// Map an entry name to its location below the destination.
    #[must_use]
    pub fn target(&self, name: &str) -> EntryTarget {
        if is_absolute(name) {
            return EntryTarget::Unsafe;
        }
        let segments = segments(name);
        if segments.iter().any(|s| s == "..") {
            return EntryTarget::Unsafe;
        }
        let rest = segments
            .strip_prefix(self.segments.as_slice())
            .unwrap_or(segments.as_slice());
        if rest.is_empty() {
            return EntryTarget::Root;
        }
        EntryTarget::Inside(rest.iter().collect())
    }
}

/// Path segments of an entry name, ignoring empty and `.` segments.
/// Backslashes from archives built on Windows count as separators.
fn segments(name: &str) -> Vec<String> {
    name.split(['/', '\\'])
        .filter(|s| !s.is_empty() && *s != ".")
        .map(str::to_string)
        .collect()
}

/// Segments of the directory an entry lives in (the entry itself for folders).
fn directory_segments(name: &str) -> Vec<String> {
    let mut segs = segments(name);
    let is_dir = name.ends_with('/') || name.ends_with('\\');
    if !is_dir {
        segs.pop();
    }
    segs
}

fn is_absolute(name: &str) -> bool {
    let bytes = name.as_bytes();
    name.starts_with('/')
        || name.starts_with('\\')
        || (bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':')
}
