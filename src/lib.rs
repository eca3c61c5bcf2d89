//! Directory disk usage with a modification-time keyed cache.
//!
//! ```no_run
//! use ds_cache::DirSizeCache;
//!
//! let cache = DirSizeCache::new();
//! let first = cache.get_usage("/var/log")?;
//! // unchanged since, so no second walk
//! let second = cache.get_usage("/var/log")?;
//! assert_eq!(first, second);
//! # Ok::<(), ds_cache::Error>(())
//! ```

pub mod bytes;
pub mod cache;
pub mod error;
pub mod file_system;

pub use cache::{CacheEntry, CacheStats, CacheStatus, DirSizeCache, Usage};
pub use error::{Error, Result};
pub use file_system::walk::{FsWalker, TreeWalk};
