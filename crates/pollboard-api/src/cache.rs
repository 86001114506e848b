//! Invalidation of rendered page output
//!
//! Pages are rendered fresh on every request. A successful mutation still
//! bumps the generation of the affected path so downstream caches (and the
//! `ETag` of the next response) observe the change.

use dashmap::DashMap;
use tracing::debug;

/// Signal that a previously rendered page must be recomputed
pub trait ViewCache: Send + Sync {
    /// Mark the output for `path` stale
    fn invalidate(&self, path: &str);

    /// Current generation of `path`; starts at zero
    fn generation(&self, path: &str) -> u64;
}

/// Per-path generation counters
#[derive(Debug, Default)]
pub struct RevalidationRegistry {
    generations: DashMap<String, u64>,
}

impl RevalidationRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ViewCache for RevalidationRegistry {
    fn invalidate(&self, path: &str) {
        let mut entry = self.generations.entry(path.to_string()).or_insert(0);
        let next = entry.saturating_add(1);
        *entry = next;
        debug!(path, generation = *entry, "View invalidated");
    }

    fn generation(&self, path: &str) -> u64 {
        self.generations.get(path).map_or(0, |g| *g)
    }
}
