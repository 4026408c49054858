//! Snapshot cache.
//!
//! In-memory store of statement snapshots keyed by security and fiscal
//! period. All operations serialize on one mutex, and the lock is never held
//! across a provider call. Eviction is whole-cache: once the total entry
//! count exceeds the capacity every entry is dropped.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use tracing::{info, warn};

use crate::period::{FiscalPeriod, PeriodWindow};
use crate::security::SecurityKey;
use crate::statement::Snapshot;

#[derive(Debug, Default)]
struct CacheInner {
    entries: HashMap<SecurityKey, HashMap<FiscalPeriod, Snapshot>>,
    evictions: u64,
}

impl CacheInner {
    fn total(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }
}

/// Cache occupancy figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub total_entries: usize,
    pub securities: usize,
    /// Number of full clears triggered by `maybe_evict`
    pub evictions: u64,
}

/// Thread-safe snapshot store.
///
/// Callers always receive clones; nothing outside the cache can reach the
/// stored values.
#[derive(Debug, Default)]
pub struct SnapshotCache {
    inner: Mutex<CacheInner>,
}

impl SnapshotCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, CacheInner> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            warn!("Snapshot cache lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Store a copy of `snapshot`, replacing any entry for the same slot.
    pub fn put(&self, key: &SecurityKey, period: FiscalPeriod, snapshot: &Snapshot) {
        let mut inner = self.lock();
        inner
            .entries
            .entry(key.clone())
            .or_default()
            .insert(period, snapshot.clone());
    }

    /// Copy of the snapshot for (key, period), if cached.
    pub fn get(&self, key: &SecurityKey, period: FiscalPeriod) -> Option<Snapshot> {
        let inner = self.lock();
        inner.entries.get(key)?.get(&period).cloned()
    }

    /// Copies of every period in `window`, newest first, only if all are cached.
    pub fn get_window(&self, key: &SecurityKey, window: &PeriodWindow) -> Option<Vec<Snapshot>> {
        let inner = self.lock();
        let periods = inner.entries.get(key)?;
        window
            .iter()
            .rev()
            .map(|period| periods.get(period).cloned())
            .collect()
    }

    /// Clear everything if the total entry count exceeds `capacity`.
    ///
    /// Returns whether a clear happened.
    pub fn maybe_evict(&self, capacity: usize) -> bool {
        let mut inner = self.lock();
        let total = inner.total();
        if total <= capacity {
            return false;
        }

        inner.entries.clear();
        inner.evictions += 1;
        info!(total, capacity, "Snapshot cache over capacity, cleared");
        true
    }

    /// Total number of cached snapshots.
    pub fn len(&self) -> usize {
        self.lock().total()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.lock().entries.clear();
    }

    pub fn stats(&self) -> CacheStats {
        let inner = self.lock();
        CacheStats {
            total_entries: inner.total(),
            securities: inner.entries.len(),
            evictions: inner.evictions,
        }
    }
}
