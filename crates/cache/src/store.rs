//! Cache store
//!
//! Entries are never evicted unless the cache is configured with a maximum
//! entry count, in which case the least recently used entry is dropped.
//! Values are stored behind `Arc` so a hit returns the very instance that
//! was stored.

use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

// =============================================================================
// Configuration
// =============================================================================

/// Cache configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of entries (None = unbounded)
    pub max_entries: Option<usize>,
}

impl CacheConfig {
    /// Create a new, unbounded cache configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound the cache to a maximum number of entries
    pub fn max_entries(mut self, max: usize) -> Self {
        self.max_entries = Some(max);
        self
    }

    /// Remove any entry bound
    pub fn unbounded(mut self) -> Self {
        self.max_entries = None;
        self
    }
}

// =============================================================================
// Cache
// =============================================================================

/// Thread-safe keyed store handing out shared values
pub struct Cache<K: Hash + Eq, V> {
    entries: Mutex<LruCache<K, Arc<V>>>,
    config: CacheConfig,
}

impl<K: Hash + Eq, V> Cache<K, V> {
    /// Create a new cache
    pub fn new(config: CacheConfig) -> Self {
        let entries = match config.max_entries.and_then(NonZeroUsize::new) {
            Some(capacity) => LruCache::new(capacity),
            None => LruCache::unbounded(),
        };

        Self { entries: Mutex::new(entries), config }
    }

    /// Create a cache without an entry bound
    pub fn unbounded() -> Self {
        Self::new(CacheConfig::default())
    }

    /// The configuration this cache was created with
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<K, Arc<V>>> {
        // A panic while holding the lock cannot leave the map half-updated.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get a previously stored value
    pub fn get<Q>(&self, key: &Q) -> Option<Arc<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lock().get(key).cloned()
    }

    /// Store a value, overwriting any existing entry for the key
    pub fn put(&self, key: K, value: V) -> Arc<V> {
        let value = Arc::new(value);
        self.put_shared(key, Arc::clone(&value));
        value
    }

    /// Store an already shared value, overwriting any existing entry
    pub fn put_shared(&self, key: K, value: Arc<V>) {
        self.lock().put(key, value);
    }

    /// Get the value for `key`, constructing and storing it on a miss
    ///
    /// The constructor runs without the lock held, so it may itself consult
    /// the cache. If another caller stored the key in the meantime, the value
    /// stored first wins and is returned.
    pub fn get_or_insert_with<F>(&self, key: K, make: F) -> Arc<V>
    where
        F: FnOnce() -> V,
    {
        if let Some(hit) = self.get(&key) {
            return hit;
        }

        let value = Arc::new(make());
        let mut entries = self.lock();
        if let Some(existing) = entries.get(&key) {
            return Arc::clone(existing);
        }
        entries.put(key, Arc::clone(&value));
        value
    }

    /// Like [`Cache::get_or_insert_with`], but the constructor may fail
    ///
    /// Nothing is stored when the constructor returns `None`.
    pub fn try_get_or_insert_with<F>(&self, key: K, make: F) -> Option<Arc<V>>
    where
        F: FnOnce() -> Option<V>,
    {
        if let Some(hit) = self.get(&key) {
            return Some(hit);
        }

        let value = Arc::new(make()?);
        let mut entries = self.lock();
        if let Some(existing) = entries.get(&key) {
            return Some(Arc::clone(existing));
        }
        entries.put(key, Arc::clone(&value));
        Some(value)
    }

    /// Remove an entry, returning whether it existed
    pub fn remove<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lock().pop(key).is_some()
    }

    /// Check whether a key is present
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lock().contains(key)
    }

    /// Drop every entry
    pub fn clear(&self) {
        let mut entries = self.lock();
        let dropped = entries.len();
        entries.clear();
        tracing::debug!(dropped, "cache cleared");
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl<K: Hash + Eq, V> Default for Cache<K, V> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<K: Hash + Eq, V> std::fmt::Debug for Cache<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache")
            .field("len", &self.len())
            .field("config", &self.config)
            .finish()
    }
}
