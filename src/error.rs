//! Error types for lrukit.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when cache configuration is invalid (a
//!   capacity below 1).
//! - [`InvariantError`]: Returned by `check_invariants` when the hash index
//!   and the recency list disagree. Seeing one means a bug in this crate.
//!
//! ## Example Usage
//!
//! ```
//! use lrukit::error::ConfigError;
//! use lrukit::LruCache;
//!
//! let cache: Result<LruCache<String, i32>, ConfigError> = LruCache::new(100);
//! assert!(cache.is_ok());
//!
//! // Zero capacity is rejected without panicking
//! let bad = LruCache::<String, i32>::new(0);
//! assert!(bad.is_err());
//! ```

use thiserror::Error;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Produced by [`LruCache::check_invariants`](crate::policy::lru::LruCache::check_invariants)
/// and [`RecencyList::check_links`](crate::ds::RecencyList::check_links).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration parameters are invalid.
///
/// Produced by [`LruCache::new`](crate::policy::lru::LruCache::new) and
/// [`CacheBuilder::build`](crate::builder::CacheBuilder::build).
///
/// # Example
///
/// ```
/// use lrukit::LruCache;
///
/// let err = LruCache::<u64, u64>::new(0).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Shorthand for the one configuration check the cache performs.
    pub(crate) fn zero_capacity(requested: usize) -> Self {
        Self::new(format!("capacity must be at least 1, got {requested}"))
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
