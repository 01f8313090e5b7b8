//! Write a rendered page variant, or any other export payload, to disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::content::PageVariant;
use crate::render_variant;

/// Errors from [`write_page`] and [`write_file`]. Rendering itself cannot
/// fail; only the filesystem can.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The output's parent directory could not be created
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that was being created
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
    /// The HTML could not be written
    #[error("failed to write page to {}: {source}", path.display())]
    Write {
        /// Output file
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
}

/// Render `variant` and write it to `path`, creating missing parent
/// directories. Returns the number of bytes written.
pub fn write_page(path: &Path, variant: PageVariant) -> Result<usize, ExportError> {
    let bytes = write_file(path, &render_variant(variant))?;
    debug!(%variant, path = %path.display(), bytes, "page written");
    Ok(bytes)
}

/// Write `contents` to `path`, creating missing parent directories.
/// Returns the number of bytes written.
pub fn write_file(path: &Path, contents: &str) -> Result<usize, ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ExportError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, contents).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = contents.len(), "file written");
    Ok(contents.len())
}
