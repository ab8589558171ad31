//! Application service — copy a fetched resource into a local file.

use std::io::{Read, Write};
use std::path::Path;

use anyhow::Result;
use sha2::{Digest, Sha256};

use crate::application::ports::{Fetcher, LocalFs};
use crate::domain::BootstrapError;
use crate::domain::digest::hex_encode;

/// What was written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Downloaded {
    pub bytes: u64,
    pub sha256: String,
}

impl Downloaded {
    /// Short human summary: size and abbreviated digest.
    #[must_use]
    pub fn summary(&self) -> String {
        let short = self.sha256.get(..12).unwrap_or(&self.sha256);
        format!("{} bytes, sha256 {short}", self.bytes)
    }
}

/// Fetch `url` and write the full body to `dest`.
///
/// # Errors
///
/// Every transport, read or disk-write failure is reported as
/// [`BootstrapError::Download`].
pub fn download(
    fetcher: &impl Fetcher,
    fs: &impl LocalFs,
    url: &str,
    dest: &Path,
) -> Result<Downloaded> {
    let failed = |reason: String| BootstrapError::Download {
        url: url.to_string(),
        reason,
    };

    let mut out = fs.create_file(dest).map_err(|e| failed(format!("{e:#}")))?;
    let body = fetcher.fetch(url).map_err(|e| failed(format!("{e:#}")))?;

    let mut reader = body.reader;
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; 64 * 1024];
    let mut bytes = 0u64;
    loop {
        let n = reader
            .read(&mut buf)
            .map_err(|e| failed(format!("download interrupted: {e}")))?;
        if n == 0 {
            break;
        }
        out.write_all(&buf[..n])
            .map_err(|e| failed(format!("writing {}: {e}", dest.display())))?;
        hasher.update(&buf[..n]);
        bytes += n as u64;
    }
    out.flush()
        .map_err(|e| failed(format!("writing {}: {e}", dest.display())))?;

    if let Some(expected) = body.content_length
        && expected != bytes
    {
        return Err(failed(format!("truncated body: got {bytes} of {expected} bytes")).into());
    }

    let sha256 = hex_encode(&hasher.finalize());
    tracing::debug!(url, bytes, sha256 = %sha256, dest = %dest.display(), "download complete");
    Ok(Downloaded { bytes, sha256 })
}
