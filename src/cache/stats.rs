use crate::cache::entry::CacheStatus;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub stale: u64,
    pub walks: u64,
    pub failed_walks: u64,
}

impl CacheStats {
    pub fn apply_status(&mut self, status: CacheStatus) {
        match status {
            CacheStatus::Hit => self.hits += 1,
            CacheStatus::Miss => self.misses += 1,
            CacheStatus::Stale => self.stale += 1,
        }
        if status.walked() {
            self.walks += 1;
        }
    }

    pub fn apply_failure(&mut self) {
        self.walks += 1;
        self.failed_walks += 1;
    }
}
