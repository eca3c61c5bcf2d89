#![allow(dead_code)]

use std::{
    fs::{self, File},
    io,
    path::Path,
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
    time::{Duration, SystemTime},
};

use ds_cache::{Error, FsWalker, Result, TreeWalk};

/// Filesystem walker that counts how often it runs.
#[derive(Default)]
pub struct CountingWalker {
    walks: AtomicUsize,
    delay: Duration,
}

impl CountingWalker {
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            walks: AtomicUsize::new(0),
            delay,
        }
    }

    pub fn walks(&self) -> usize {
        self.walks.load(Ordering::SeqCst)
    }
}

impl TreeWalk for CountingWalker {
    fn walk(&self, dir: &Path) -> Result<u64> {
        self.walks.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        FsWalker.walk(dir)
    }
}

/// Filesystem walker that reports a permission error while `failing` is set.
#[derive(Default)]
pub struct FlakyWalker {
    failing: AtomicBool,
}

impl FlakyWalker {
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

impl TreeWalk for FlakyWalker {
    fn walk(&self, dir: &Path) -> Result<u64> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(Error::walk_failed(
                dir.join("nested/locked"),
                io::Error::from(io::ErrorKind::PermissionDenied),
            ));
        }
        FsWalker.walk(dir)
    }
}

pub fn write_file(path: &Path, len: usize) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, vec![b'x'; len]).unwrap();
}

/// Moves `dir`'s mtime forward so the change is visible regardless of the
/// filesystem's timestamp granularity.
pub fn bump_mtime(dir: &Path, by: Duration) {
    let current = fs::metadata(dir).unwrap().modified().unwrap();
    let target = current.max(SystemTime::now()) + by;
    File::open(dir).unwrap().set_modified(target).unwrap();
}

/// Builds `a/one` (10 bytes), `a/b/two` (20 bytes) and `c/three` (5 bytes).
pub fn sample_tree(root: &Path) {
    write_file(&root.join("a/one"), 10);
    write_file(&root.join("a/b/two"), 20);
    write_file(&root.join("c/three"), 5);
}

/// Filesystem walker that panics mid-walk while `panicking` is set.
#[derive(Default)]
pub struct PanickyWalker {
    panicking: AtomicBool,
}

impl PanickyWalker {
    pub fn set_panicking(&self, panicking: bool) {
        self.panicking.store(panicking, Ordering::SeqCst);
    }
}

impl TreeWalk for PanickyWalker {
    fn walk(&self, dir: &Path) -> Result<u64> {
        if self.panicking.load(Ordering::SeqCst) {
            panic!("walker blew up in '{}'", dir.display());
        }
        FsWalker.walk(dir)
    }
}
