// Cache store for memoized API responses.
// Keyed entries with a fetch timestamp, checked against a fixed TTL.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};

use super::clock::Clock;

/// Wrapper for cached data with metadata.
#[derive(Debug, Clone)]
pub struct CachedData<T> {
    /// The cached data.
    pub data: T,
    /// When the data was last fetched successfully.
    pub cached_at: DateTime<Utc>,
}

impl<T> CachedData<T> {
    /// Create a new cached data entry.
    pub fn new(data: T, cached_at: DateTime<Utc>) -> Self {
        Self { data, cached_at }
    }

    /// Check if this cached data has expired based on TTL.
    ///
    /// An entry stamped in the future (clock moved backwards) counts as
    /// expired.
    pub fn is_expired(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        let elapsed = now
            .signed_duration_since(self.cached_at)
            .to_std()
            .unwrap_or(Duration::MAX);

        elapsed >= ttl
    }

    /// Check if this cached data is still valid (not expired).
    pub fn is_valid(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        !self.is_expired(ttl, now)
    }
}

/// Process-local memo table.
///
/// Entries are written only after a successful fetch and are never evicted;
/// a stale entry is simply refetched on the next read. The lock is never held
/// across an await, so two concurrent misses on the same key both fetch and
/// the last write wins.
pub struct Cache<K, V> {
    entries: Mutex<HashMap<K, CachedData<V>>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    /// Return the cached value if it is still fresh.
    pub fn get(&self, key: &K) -> Option<V> {
        let now = self.clock.now();
        self.entries()
            .get(key)
            .filter(|entry| entry.is_valid(self.ttl, now))
            .map(|entry| entry.data.clone())
    }

    /// Store a value stamped with the current time.
    pub fn insert(&self, key: K, value: V) {
        let entry = CachedData::new(value, self.clock.now());
        self.entries().insert(key, entry);
    }

    /// Return the fresh cached value, or run `producer` and cache its result.
    ///
    /// On failure the existing entry (stale or absent) is left untouched and
    /// the error is returned.
    pub async fn get_or_try_insert_with<F, Fut, E>(&self, key: K, producer: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.get(&key) {
            return Ok(value);
        }

        let value = producer().await?;
        self.insert(key, value.clone());
        Ok(value)
    }

    /// Number of entries, fresh or stale.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<K, CachedData<V>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
