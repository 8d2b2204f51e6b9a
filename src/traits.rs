//! # Cache Traits
//!
//! Small trait hierarchy so code can be written against "a cache" rather
//! than against [`LruCache`](crate::policy::lru::LruCache) directly.
//!
//! ```text
//!   ┌─────────────────────────────────────────┐
//!   │            CoreCache<K, V>              │
//!   │  insert / get / contains / len          │
//!   │  is_empty / capacity / clear            │
//!   └──────────────────┬──────────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │           MutableCache<K, V>            │
//!   │  remove / remove_batch                  │
//!   └──────────────────┬──────────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │           LruCacheTrait<K, V>           │
//!   │  pop_lru / peek_lru / touch             │
//!   │  recency_rank                           │
//!   └─────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//!
//! None of these traits imply `Send` or `Sync` access patterns. Implementations
//! are single-threaded; wrap them in a `Mutex` when sharing across threads.

/// Operations every cache supports.
///
/// # Example
///
/// ```
/// use lrukit::traits::CoreCache;
/// use lrukit::LruCache;
///
/// fn warm_cache<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
///     for (key, value) in data {
///         cache.insert(*key, value.clone());
///     }
/// }
///
/// let mut cache = LruCache::new(100).unwrap();
/// warm_cache(&mut cache, &[(1, "one".to_string()), (2, "two".to_string())]);
/// assert_eq!(CoreCache::len(&cache), 2);
/// ```
pub trait CoreCache<K, V> {
    /// Inserts a key-value pair, returning the previous value if the key was
    /// already cached. May evict one entry first when the cache is full.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Looks up a value. Counts as a use of the entry.
    ///
    /// Use [`contains`](Self::contains) to check existence without
    /// affecting eviction order.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Checks if a key exists without updating access state.
    fn contains(&self, key: &K) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries.
    fn capacity(&self) -> usize;

    /// Removes all entries. Capacity is unchanged.
    fn clear(&mut self);
}

/// Caches that support arbitrary key-based removal.
///
/// # Example
///
/// ```
/// use lrukit::traits::{CoreCache, MutableCache};
/// use lrukit::LruCache;
///
/// fn invalidate_keys<C: MutableCache<u64, String>>(cache: &mut C, keys: &[u64]) {
///     for key in keys {
///         cache.remove(key);
///     }
/// }
///
/// let mut cache = LruCache::new(100).unwrap();
/// cache.insert(1, "one".to_string());
/// cache.insert(2, "two".to_string());
/// cache.insert(3, "three".to_string());
///
/// invalidate_keys(&mut cache, &[1, 3]);
/// assert!(!cache.contains(&1));
/// assert!(cache.contains(&2));
/// assert!(!cache.contains(&3));
/// ```
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Removes `key`, returning its value if it was cached.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes several keys; results are in the same order as `keys`.
    fn remove_batch(&mut self, keys: &[K]) -> Vec<Option<V>> {
        keys.iter().map(|k| self.remove(k)).collect()
    }
}

/// Recency-ordered caches.
///
/// # Example
///
/// ```
/// use lrukit::traits::{CoreCache, LruCacheTrait};
/// use lrukit::LruCache;
///
/// fn touch_hot_keys<C: LruCacheTrait<u64, &'static str>>(cache: &mut C, keys: &[u64]) {
///     for key in keys {
///         cache.touch(key);
///     }
/// }
///
/// let mut cache = LruCache::new(3).unwrap();
/// cache.insert(1, "a");
/// cache.insert(2, "b");
/// cache.insert(3, "c");
///
/// touch_hot_keys(&mut cache, &[1]);
/// assert_eq!(cache.pop_lru(), Some((2, "b")));
/// ```
pub trait LruCacheTrait<K, V>: MutableCache<K, V> {
    /// Removes and returns the least recently used entry.
    fn pop_lru(&mut self) -> Option<(K, V)>;

    /// Returns the least recently used entry without removing it.
    fn peek_lru(&self) -> Option<(&K, &V)>;

    /// Marks `key` as most recently used. Returns `false` if absent.
    fn touch(&mut self, key: &K) -> bool;

    /// Position of `key` in recency order, `0` being most recent.
    ///
    /// Linear in the number of entries; intended for diagnostics and tests.
    fn recency_rank(&self, key: &K) -> Option<usize>;
}
