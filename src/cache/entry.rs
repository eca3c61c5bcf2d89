use std::{path::PathBuf, time::SystemTime};

/// Last known size of one directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheEntry {
    pub path: PathBuf,
    pub size_bytes: u64,
    /// The directory's own mtime when `size_bytes` was computed. Only
    /// meaningful when compared against a later reading of the same directory.
    pub observed_mod_time: SystemTime,
}

impl CacheEntry {
    /// Whether this entry still describes a directory whose mtime is now
    /// `current_mod_time`.
    pub fn is_fresh(&self, current_mod_time: SystemTime) -> bool {
        current_mod_time <= self.observed_mod_time
    }
}

/// How a query was answered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheStatus {
    /// The stored size was reused.
    Hit,
    /// No entry existed; the tree was walked.
    Miss,
    /// An entry existed but the directory changed since; the tree was walked.
    Stale,
}

impl CacheStatus {
    pub fn walked(&self) -> bool {
        !matches!(self, Self::Hit)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Usage {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub status: CacheStatus,
}
