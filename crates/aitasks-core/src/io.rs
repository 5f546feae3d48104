use crate::error::{Result, ScaffoldError};
use std::path::Path;

/// Create a directory and all parents. Returns true if it did not exist before.
pub fn ensure_dir(path: &Path) -> Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }
    std::fs::create_dir_all(path).map_err(|source| ScaffoldError::CreateDir {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(dir = %path.display(), "created directory");
    Ok(true)
}

/// Write `data` to `path`, truncating any existing file.
///
/// The existing file is opened in place rather than replaced, so a target the
/// caller cannot write to fails instead of being swapped out.
pub fn overwrite(path: &Path, data: &[u8]) -> Result<()> {
    std::fs::write(path, data).map_err(|source| ScaffoldError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a file's raw bytes if it exists. `Ok(None)` when there is no regular file at `path`.
pub fn read_if_exists(path: &Path) -> Result<Option<Vec<u8>>> {
    if !path.is_file() {
        return Ok(None);
    }
    std::fs::read(path)
        .map(Some)
        .map_err(|source| ScaffoldError::Read {
            path: path.to_path_buf(),
            source,
        })
}
