use std::{fs, path::Path};

use crate::error::{IoExt, Result};

/// Computes the total size of a directory subtree from scratch.
///
/// Only regular files count towards the total. Any entry that cannot be
/// enumerated or stat'ed aborts the walk with [`crate::Error::WalkFailed`].
pub trait TreeWalk: Send + Sync {
    fn walk(&self, dir: &Path) -> Result<u64>;
}

/// Walks the host filesystem without following symbolic links.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsWalker;

impl TreeWalk for FsWalker {
    fn walk(&self, dir: &Path) -> Result<u64> {
        let size = get_size(dir)?;
        log::trace!("walked '{}': {} bytes", dir.display(), size);
        Ok(size)
    }
}

fn get_size(dir: &Path) -> Result<u64> {
    let mut size = 0;
    for entry in fs::read_dir(dir).walking(dir)? {
        let entry = entry.walking(dir)?;
        let path = entry.path();
        // symlinks report their own type here, so they are never followed
        let file_type = entry.file_type().walking(&path)?;

        if file_type.is_file() {
            size += entry.metadata().walking(&path)?.len();
        } else if file_type.is_dir() {
            size += get_size(&path)?;
        }
    }
    Ok(size)
}
