//! # Least Recently Used (LRU) Cache
//!
//! Bounded key-value cache that evicts the entry touched least recently
//! (by `insert` or `get`) once it holds `capacity` entries.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                          LruCache<K, V>                              │
//!   │                                                                      │
//!   │   ┌──────────────────────────────────────────────────────────────┐   │
//!   │   │  FxHashMap<K, SlotId>  (index)                               │   │
//!   │   │                                                              │   │
//!   │   │   "a" ─────────┐     "b" ─────────┐     "c" ─────────┐       │   │
//!   │   └────────────────┼──────────────────┼──────────────────┼───────┘   │
//!   │                    ▼                  ▼                  ▼           │
//!   │   ┌──────────────────────────────────────────────────────────────┐   │
//!   │   │  RecencyList<Entry<K, V>>  (nodes live in a SlotArena)       │   │
//!   │   │                                                              │   │
//!   │   │  head ──► [a|1] ◄──► [b|2] ◄──► [c|3] ◄── tail               │   │
//!   │   │   (MRU)                                (LRU)                 │   │
//!   │   └──────────────────────────────────────────────────────────────┘   │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The index and the list always hold the same set of slots: every mutation
//! updates both before returning.
//!
//! ## Operations Flow
//!
//! ```text
//!   INSERT new key (cache full, capacity = 3)
//!   ═══════════════════════════════════════════════════════════════════════
//!     Before:  head ──► [A] ◄──► [B] ◄──► [C] ◄── tail
//!
//!     insert(D):
//!       1. pop [C] from tail, drop "C" from index
//!       2. push [D] at head, index "D"
//!
//!     After:   head ──► [D] ◄──► [A] ◄──► [B] ◄── tail
//!
//!   GET existing key
//!   ═══════════════════════════════════════════════════════════════════════
//!     Before:  head ──► [A] ◄──► [B] ◄──► [C] ◄── tail
//!
//!     get(B):  index lookup O(1), splice [B] to head O(1)
//!
//!     After:   head ──► [B] ◄──► [A] ◄──► [C] ◄── tail
//!
//!   CONTAINS / PEEK
//!   ═══════════════════════════════════════════════════════════════════════
//!     index lookup only; order unchanged
//! ```
//!
//! ## Complexity
//!
//! | Operation        | Time   | Touches order |
//! |------------------|--------|---------------|
//! | `get`, `try_get` | O(1)   | yes           |
//! | `insert`         | O(1)*  | yes           |
//! | `contains`       | O(1)   | no            |
//! | `peek`           | O(1)   | no            |
//! | `touch`          | O(1)   | yes           |
//! | `remove`         | O(1)   | n/a           |
//! | `pop_lru`        | O(1)   | n/a           |
//! | `recency_rank`   | O(n)   | no            |
//!
//! \* amortized over hash map growth; the map is pre-sized at construction.
//!
//! ## Thread Safety
//!
//! `LruCache` has no internal locking. Share it behind a `Mutex` if more
//! than one thread needs it.

use std::fmt;
use std::hash::Hash;
use std::mem;
use std::num::NonZeroUsize;

use rustc_hash::FxHashMap;

use crate::ds::{RecencyList, SlotId};
use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::LruMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::LruMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CoreMetricsRecorder, LruMetricsReadRecorder, LruMetricsRecorder, MetricsSnapshotProvider,
};
use crate::traits::{CoreCache, LruCacheTrait, MutableCache};

/// Capacity used by [`LruCache::default`] and [`CacheBuilder::new`](crate::builder::CacheBuilder::new).
pub const DEFAULT_CAPACITY: usize = 100;

const DEFAULT_NONZERO_CAPACITY: NonZeroUsize = match NonZeroUsize::new(DEFAULT_CAPACITY) {
    Some(capacity) => capacity,
    None => panic!("DEFAULT_CAPACITY must be non-zero"),
};

// Upper bound on up-front allocation; larger caches grow on demand.
const MAX_PREALLOC: usize = 1 << 16;

/// Payload of a recency-list node. The key is kept alongside the value so
/// evicting the tail can also drop its index entry.
#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Bounded LRU cache.
///
/// # Example
///
/// ```
/// use lrukit::LruCache;
///
/// let mut cache = LruCache::new(2).unwrap();
/// cache.insert("a", 1);
/// cache.insert("b", 2);
///
/// // Reading "a" makes "b" the least recently used entry.
/// assert_eq!(cache.get(&"a"), Some(&1));
///
/// cache.insert("c", 3);
/// assert!(cache.contains(&"a"));
/// assert!(!cache.contains(&"b"));
/// assert!(cache.contains(&"c"));
/// ```
pub struct LruCache<K, V> {
    index: FxHashMap<K, SlotId>,
    list: RecencyList<Entry<K, V>>,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: LruMetrics,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `capacity` is 0.
    ///
    /// ```
    /// use lrukit::LruCache;
    ///
    /// let cache: LruCache<u64, String> = LruCache::new(100).unwrap();
    /// assert_eq!(cache.capacity(), 100);
    /// assert!(cache.is_empty());
    ///
    /// assert!(LruCache::<u64, String>::new(0).is_err());
    /// ```
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        match NonZeroUsize::new(capacity) {
            Some(capacity) => Ok(Self::with_nonzero_capacity(capacity)),
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(capacity, "rejected LRU cache capacity");
                Err(ConfigError::zero_capacity(capacity))
            },
        }
    }

    /// Creates an empty cache from an already validated capacity.
    pub fn with_nonzero_capacity(capacity: NonZeroUsize) -> Self {
        let capacity = capacity.get();
        let prealloc = capacity.min(MAX_PREALLOC);
        Self {
            index: FxHashMap::with_capacity_and_hasher(prealloc, Default::default()),
            list: RecencyList::with_capacity(prealloc),
            capacity,
            #[cfg(feature = "metrics")]
            metrics: LruMetrics::default(),
        }
    }

    /// Number of cached entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Maximum number of entries; fixed at construction.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if `key` is cached. Does not count as a use.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the value for `key` and marks it most recently used.
    ///
    /// A miss is `None`; it is not an error.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let id = self.promote(key)?;
        self.list.get(id).map(|entry| &entry.value)
    }

    /// Like [`get`](Self::get), with the presence flag spelled out.
    ///
    /// ```
    /// use lrukit::LruCache;
    ///
    /// let mut cache = LruCache::new(4).unwrap();
    /// cache.insert(1, "one");
    ///
    /// assert_eq!(cache.try_get(&1), (true, Some(&"one")));
    /// assert_eq!(cache.try_get(&2), (false, None));
    /// ```
    pub fn try_get(&mut self, key: &K) -> (bool, Option<&V>) {
        let value = self.get(key);
        (value.is_some(), value)
    }

    /// Mutable access to the value for `key`; marks it most recently used.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = self.promote(key)?;
        self.list.get_mut(id).map(|entry| &mut entry.value)
    }

    /// Returns the value for `key` without changing recency order.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let id = *self.index.get(key)?;
        self.list.get(id).map(|entry| &entry.value)
    }

    /// Inserts or overwrites `key`, making it the most recently used entry.
    ///
    /// Overwriting returns the previous value and leaves `len` unchanged.
    /// Inserting a new key into a full cache first evicts the least recently
    /// used entry.
    ///
    /// ```
    /// use lrukit::LruCache;
    ///
    /// let mut cache = LruCache::new(2).unwrap();
    /// assert_eq!(cache.insert(1, "a"), None);
    /// assert_eq!(cache.insert(2, "b"), None);
    /// assert_eq!(cache.insert(1, "A"), Some("a"));
    ///
    /// cache.insert(3, "c"); // evicts 2
    /// assert!(!cache.contains(&2));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if let Some(&id) = self.index.get(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();

            self.list.move_to_front(id);
            let entry = self.list.get_mut(id)?;
            return Some(mem::replace(&mut entry.value, value));
        }

        if self.index.len() >= self.capacity {
            #[cfg(feature = "metrics")]
            self.metrics.record_evict_call();

            self.evict_lru();

            #[cfg(feature = "metrics")]
            self.metrics.record_evicted_entry();
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        let id = self.list.push_front(Entry {
            key: key.clone(),
            value,
        });
        self.index.insert(key, id);
        None
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_call();

        let id = self.index.remove(key)?;
        let entry = self.list.remove(id)?;

        #[cfg(feature = "metrics")]
        self.metrics.record_remove_found();

        Some(entry.value)
    }

    /// Marks `key` as most recently used without reading it.
    ///
    /// Returns `false` if `key` is not cached.
    pub fn touch(&mut self, key: &K) -> bool {
        #[cfg(feature = "metrics")]
        self.metrics.record_touch_call();

        let Some(&id) = self.index.get(key) else {
            return false;
        };
        self.list.move_to_front(id);

        #[cfg(feature = "metrics")]
        self.metrics.record_touch_found();

        true
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru_call();

        let Entry { key, value } = self.list.pop_back()?;
        self.index.remove(&key);

        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru_found();

        Some((key, value))
    }

    /// Returns the least recently used entry without removing it.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_peek_lru_call();

        let entry = self.list.back()?;

        #[cfg(feature = "metrics")]
        self.metrics.record_peek_lru_found();

        Some((&entry.key, &entry.value))
    }

    /// Returns the most recently used entry without changing order.
    pub fn peek_mru(&self) -> Option<(&K, &V)> {
        self.list.front().map(|entry| (&entry.key, &entry.value))
    }

    /// Position of `key` in recency order; `0` is the most recently used.
    ///
    /// Walks the list, so this is O(n). Meant for tests and diagnostics.
    pub fn recency_rank(&self, key: &K) -> Option<usize> {
        #[cfg(feature = "metrics")]
        self.metrics.record_recency_rank_call();

        let target = *self.index.get(key)?;
        for (rank, (id, _)) in self.list.iter_entries().enumerate() {
            #[cfg(feature = "metrics")]
            self.metrics.record_recency_rank_scan_step();

            if id == target {
                #[cfg(feature = "metrics")]
                self.metrics.record_recency_rank_found();

                return Some(rank);
            }
        }
        None
    }

    /// Iterates entries from most to least recently used.
    ///
    /// ```
    /// use lrukit::LruCache;
    ///
    /// let mut cache = LruCache::new(3).unwrap();
    /// cache.insert("x", 1);
    /// cache.insert("y", 2);
    /// cache.get(&"x");
    ///
    /// let order: Vec<_> = cache.iter().map(|(k, _)| *k).collect();
    /// assert_eq!(order, vec!["x", "y"]);
    /// ```
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&K, &V)> + ExactSizeIterator + '_ {
        self.list.iter().map(|entry| (&entry.key, &entry.value))
    }

    /// Keys from most to least recently used.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator + '_ {
        self.list.iter().map(|entry| &entry.key)
    }

    /// Drops every entry. Capacity is unchanged.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        self.index.clear();
        self.list.clear();
    }

    /// Verifies that the index and the recency list agree.
    ///
    /// Checks, in order: index size equals list length; length is within
    /// capacity; the list links walk cleanly in both directions; every index
    /// entry points at a live slot holding the same key.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() != self.list.len() {
            return Err(InvariantError::new(format!(
                "index holds {} keys but recency list holds {} nodes",
                self.index.len(),
                self.list.len()
            )));
        }
        if self.index.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                self.index.len(),
                self.capacity
            )));
        }
        self.list.check_links()?;
        for (key, &id) in &self.index {
            match self.list.get(id) {
                None => {
                    return Err(InvariantError::new(format!(
                        "index points at vacant slot {}",
                        id.index()
                    )));
                },
                Some(entry) if entry.key != *key => {
                    return Err(InvariantError::new(format!(
                        "slot {} holds a different key than its index entry",
                        id.index()
                    )));
                },
                Some(_) => {},
            }
        }
        Ok(())
    }

    /// Looks `key` up and moves it to the head.
    fn promote(&mut self, key: &K) -> Option<SlotId> {
        let Some(&id) = self.index.get(key) else {
            #[cfg(feature = "metrics")]
            self.metrics.record_get_miss();
            return None;
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.list.move_to_front(id);
        Some(id)
    }

    /// Drops the tail from both structures. Only called on a full cache.
    fn evict_lru(&mut self) -> (K, V) {
        let Some(Entry { key, value }) = self.list.pop_back() else {
            unreachable!("eviction requested from an empty LRU cache");
        };
        self.index.remove(&key);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            len = self.index.len(),
            capacity = self.capacity,
            "evicted least recently used entry"
        );

        (key, value)
    }
}

impl<K, V> Default for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// A cache with [`DEFAULT_CAPACITY`] slots.
    fn default() -> Self {
        Self::with_nonzero_capacity(DEFAULT_NONZERO_CAPACITY)
    }
}

impl<K, V> fmt::Debug for LruCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .field("entries", &DebugEntries(self))
            .finish()
    }
}

struct DebugEntries<'a, K, V>(&'a LruCache<K, V>);

impl<K, V> fmt::Debug for DebugEntries<'_, K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

impl<K, V> Extend<(K, V)> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn metrics_snapshot(&self) -> LruMetricsSnapshot {
        self.metrics.snapshot(self.len(), self.capacity)
    }

    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<LruMetricsSnapshot> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn snapshot(&self) -> LruMetricsSnapshot {
        self.metrics_snapshot()
    }
}

impl<K, V> CoreCache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        LruCache::insert(self, key, value)
    }

    #[inline]
    fn get(&mut self, key: &K) -> Option<&V> {
        LruCache::get(self, key)
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        LruCache::contains(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        LruCache::len(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        LruCache::capacity(self)
    }

    fn clear(&mut self) {
        LruCache::clear(self);
    }
}

impl<K, V> MutableCache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        LruCache::remove(self, key)
    }
}

impl<K, V> LruCacheTrait<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn pop_lru(&mut self) -> Option<(K, V)> {
        LruCache::pop_lru(self)
    }

    fn peek_lru(&self) -> Option<(&K, &V)> {
        LruCache::peek_lru(self)
    }

    fn touch(&mut self, key: &K) -> bool {
        LruCache::touch(self, key)
    }

    fn recency_rank(&self, key: &K) -> Option<usize> {
        LruCache::recency_rank(self, key)
    }
}
