//! Writing generated files to disk.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Replaces `path` with `contents`.
///
/// The data is written to a temp file next to `path` and then renamed over
/// it, so the destination holds either the old file or the complete new one.
/// The temp file is deleted if any step fails.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| Error::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}
