//! Cache builder.
//!
//! Collects configuration and validates it once, at `build` time, so call
//! sites that read a capacity from user input get a [`ConfigError`] instead
//! of a panic.
//!
//! ## Example
//!
//! ```rust
//! use lrukit::builder::CacheBuilder;
//!
//! let mut cache = CacheBuilder::new().capacity(2).build::<u64, String>().unwrap();
//! cache.insert(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some(&"hello".to_string()));
//!
//! assert!(CacheBuilder::new().capacity(0).build::<u64, String>().is_err());
//! ```

use std::hash::Hash;

use crate::error::ConfigError;
use crate::policy::lru::{LruCache, DEFAULT_CAPACITY};

/// Builder for [`LruCache`] instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheBuilder {
    capacity: usize,
}

impl CacheBuilder {
    /// Starts from [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Sets the maximum number of entries.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Validates the configuration and creates an empty cache.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the capacity is 0.
    pub fn build<K, V>(self) -> Result<LruCache<K, V>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        LruCache::new(self.capacity)
    }
}

impl Default for CacheBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_default_capacity() {
        let cache = CacheBuilder::default().build::<u64, String>().unwrap();
        assert_eq!(cache.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn built_cache_enforces_capacity() {
        let mut cache = CacheBuilder::new()
            .capacity(2)
            .build::<u64, String>()
            .unwrap();

        cache.insert(1, "one".to_string());
        cache.insert(2, "two".to_string());
        cache.insert(3, "three".to_string());

        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(&1));
        assert!(cache.contains(&2));
        assert!(cache.contains(&3));
    }

    #[test]
    fn zero_capacity_fails_at_build() {
        let err = CacheBuilder::new()
            .capacity(0)
            .build::<u64, u64>()
            .unwrap_err();
        assert_eq!(err.message(), "capacity must be at least 1, got 0");
    }

    #[test]
    fn last_capacity_wins() {
        let builder = CacheBuilder::new().capacity(0).capacity(5);
        assert_eq!(builder.build::<u8, u8>().unwrap().capacity(), 5);
    }
}
