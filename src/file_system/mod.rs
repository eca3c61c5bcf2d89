use std::{
    fs,
    path::{Path, PathBuf},
    time::SystemTime,
};

use crate::error::{Error, Result};

pub mod walk;

/// Resolves `dir` to its canonical path and reads the directory's own
/// modification time.
pub fn read_dir_fingerprint(dir: &Path) -> Result<(PathBuf, SystemTime)> {
    let canonical = fs::canonicalize(dir).map_err(|e| Error::from_dir_io(dir, e))?;
    let metadata = fs::metadata(&canonical).map_err(|e| Error::from_dir_io(&canonical, e))?;
    if !metadata.is_dir() {
        return Err(Error::InvalidDirectory(dir.to_path_buf()));
    }
    let modified = metadata
        .modified()
        .map_err(|e| Error::from_dir_io(&canonical, e))?;
    Ok((canonical, modified))
}
