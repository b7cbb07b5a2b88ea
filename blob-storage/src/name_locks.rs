use std::sync::{Arc, Mutex, MutexGuard};
use dashmap::DashMap;

/// Per-name mutexes, created on demand and dropped once nobody holds them.
#[derive(Debug, Default)]
pub struct NameLocks {
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl NameLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` while holding the lock for `name`.
    pub fn with_lock<T>(&self, name: &str, f: impl FnOnce() -> T) -> T {
        let lock = self.locks.entry(name.to_string()).or_default().clone();
        let result = {
            let _guard: MutexGuard<'_, ()> = lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            f()
        };
        drop(lock);
        // Only the map's own reference left means no one else is waiting on it.
        self.locks.remove_if(name, |_, l| Arc::strong_count(l) == 1);
        result
    }

    #[cfg(test)]
    pub(crate) fn tracked(&self) -> usize {
        self.locks.len()
    }
}
