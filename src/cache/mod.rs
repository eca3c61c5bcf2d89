//! Directory size cache keyed by canonical path.
//!
//! A cached total is reused while the directory's own modification time has
//! not advanced past the time recorded with it. Two limitations follow from
//! using that timestamp as the only fingerprint:
//!
//! - Most filesystems only bump a directory's mtime when a direct child is
//!   added, removed or renamed. Rewriting a nested file in place leaves every
//!   ancestor's mtime alone, so the stale total keeps being served.
//! - The mtime is read before the walk starts. A change that lands while the
//!   walk is running can be missed by the walk yet still be covered by the
//!   recorded mtime, so the entry will look fresh until the next change.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard},
};

use crate::{
    error::{Error, Result},
    file_system::{
        read_dir_fingerprint,
        walk::{FsWalker, TreeWalk},
    },
};

pub mod entry;
pub mod stats;

pub use entry::{CacheEntry, CacheStatus, Usage};
pub use stats::CacheStats;

type Slot = Arc<Mutex<Option<CacheEntry>>>;

/// Caches directory sizes for the lifetime of the value.
///
/// Each directory gets its own lock, held from the freshness check until the
/// entry is updated. Concurrent queries for one directory therefore walk it at
/// most once between them, while different directories are walked in parallel.
pub struct DirSizeCache<W = FsWalker> {
    walker: W,
    slots: Mutex<HashMap<PathBuf, Slot>>,
    stats: Mutex<CacheStats>,
}

impl DirSizeCache<FsWalker> {
    pub fn new() -> Self {
        Self::with_walker(FsWalker)
    }
}

impl Default for DirSizeCache<FsWalker> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: TreeWalk> DirSizeCache<W> {
    pub fn with_walker(walker: W) -> Self {
        Self {
            walker,
            slots: Mutex::new(HashMap::new()),
            stats: Mutex::new(CacheStats::default()),
        }
    }

    pub fn walker(&self) -> &W {
        &self.walker
    }

    /// Returns the total size in bytes of the regular files under `dir`.
    pub fn get_usage(&self, dir: impl AsRef<Path>) -> Result<u64> {
        self.get_usage_detailed(dir).map(|usage| usage.size_bytes)
    }

    /// Like [`get_usage`](Self::get_usage), also reporting whether the cached
    /// total was reused.
    ///
    /// A failed walk leaves any existing entry for `dir` untouched.
    pub fn get_usage_detailed(&self, dir: impl AsRef<Path>) -> Result<Usage> {
        let (path, current_mod_time) = read_dir_fingerprint(dir.as_ref())?;

        let slot = self.slot(&path)?;
        let mut guard = self.lock_slot(&slot)?;

        let status = match guard.as_ref() {
            Some(entry) if entry.is_fresh(current_mod_time) => {
                log::debug!("cache hit for '{}'", path.display());
                let size_bytes = entry.size_bytes;
                self.stats.lock()?.apply_status(CacheStatus::Hit);
                return Ok(Usage {
                    path,
                    size_bytes,
                    status: CacheStatus::Hit,
                });
            }
            Some(_) => CacheStatus::Stale,
            None => CacheStatus::Miss,
        };
        log::debug!("cache {:?} for '{}', walking", status, path.display());

        let size_bytes = match self.walker.walk(&path) {
            Ok(size) => size,
            Err(err) => {
                log::warn!("walk of '{}' failed: {}", path.display(), err);
                self.stats.lock()?.apply_failure();
                return Err(err);
            }
        };

        *guard = Some(CacheEntry {
            path: path.clone(),
            size_bytes,
            observed_mod_time: current_mod_time,
        });
        drop(guard);

        self.stats.lock()?.apply_status(status);
        log::debug!("cached {} bytes for '{}'", size_bytes, path.display());

        Ok(Usage {
            path,
            size_bytes,
            status,
        })
    }

    /// The stored entry for `dir`, if a walk of it has ever succeeded.
    /// Does not check freshness.
    pub fn entry(&self, dir: impl AsRef<Path>) -> Result<Option<CacheEntry>> {
        let dir = dir.as_ref();
        let path = fs::canonicalize(dir).map_err(|e| Error::from_dir_io(dir, e))?;

        let slot = match self.slots.lock()?.get(&path) {
            Some(slot) => Arc::clone(slot),
            None => return Ok(None),
        };
        let entry = self.lock_slot(&slot)?.clone();
        Ok(entry)
    }

    /// Number of directories with a stored size.
    pub fn len(&self) -> Result<usize> {
        let slots: Vec<Slot> = self.slots.lock()?.values().cloned().collect();
        let mut count = 0;
        for slot in slots {
            if self.lock_slot(&slot)?.is_some() {
                count += 1;
            }
        }
        Ok(count)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    pub fn stats(&self) -> Result<CacheStats> {
        Ok(*self.stats.lock()?)
    }

    /// Locks a slot, recovering it if a walker panicked while holding it.
    /// Entries are only written after a walk succeeds, so the slot still
    /// holds the last good entry.
    fn lock_slot<'a>(&self, slot: &'a Slot) -> Result<MutexGuard<'a, Option<CacheEntry>>> {
        match slot.lock() {
            Ok(guard) => Ok(guard),
            Err(poisoned) => {
                log::warn!("recovering directory slot after a panicked walk");
                self.stats.lock()?.apply_failure();
                slot.clear_poison();
                Ok(poisoned.into_inner())
            }
        }
    }

    fn slot(&self, path: &Path) -> Result<Slot> {
        let mut slots = self.slots.lock()?;
        Ok(Arc::clone(slots.entry(path.to_path_buf()).or_default()))
    }
}
