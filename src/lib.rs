//! lrukit: a bounded least-recently-used cache.
//!
//! [`LruCache`] pairs a hash index (key to arena slot) with a recency-ordered
//! doubly linked list whose nodes live in that arena. Lookups, inserts,
//! promotions and evictions are all O(1), and the two structures are updated
//! together on every mutation.
//!
//! ```
//! use lrukit::LruCache;
//!
//! let mut cache = LruCache::new(2).unwrap();
//! cache.insert("k1", "v1");
//! cache.insert("k2", "v2");
//! cache.get(&"k1");
//! cache.insert("k3", "v3");
//!
//! assert!(cache.contains(&"k1"));
//! assert!(!cache.contains(&"k2"));
//! ```
//!
//! ## Features
//!
//! - `metrics`: operation counters, snapshots and a Prometheus text exporter.
//! - `tracing`: `tracing` events for evictions and rejected configuration.

pub mod builder;
pub mod ds;
pub mod error;
#[cfg(feature = "metrics")]
pub mod metrics;
pub mod policy;
pub mod prelude;
pub mod traits;

pub use crate::builder::CacheBuilder;
pub use crate::error::{ConfigError, InvariantError};
pub use crate::policy::lru::{LruCache, DEFAULT_CAPACITY};
