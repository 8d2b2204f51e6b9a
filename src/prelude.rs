pub use crate::builder::CacheBuilder;
pub use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::LruMetricsSnapshot;
pub use crate::policy::lru::{LruCache, DEFAULT_CAPACITY};
pub use crate::traits::{CoreCache, LruCacheTrait, MutableCache};
