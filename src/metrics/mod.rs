//! Operation counters for [`LruCache`](crate::policy::lru::LruCache).
//!
//! Enabled with the `metrics` feature. Recording, snapshotting and export are
//! kept apart:
//!
//! - [`metrics_impl::LruMetrics`] is owned by the cache and bumped inline.
//! - [`snapshot::LruMetricsSnapshot`] is a plain copy handed to callers.
//! - [`exporter::PrometheusTextExporter`] publishes a snapshot.

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
