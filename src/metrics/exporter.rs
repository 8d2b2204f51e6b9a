use std::io::Write;
use std::sync::{Mutex, PoisonError};

use crate::metrics::snapshot::LruMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for cache metrics snapshots.
///
/// Writes the Prometheus text exposition format so the output can be served
/// from a scrape endpoint or forwarded to an OpenTelemetry collector.
///
/// # Example
///
/// ```
/// use lrukit::metrics::exporter::PrometheusTextExporter;
/// use lrukit::metrics::traits::MetricsExporter;
/// use lrukit::LruCache;
///
/// let mut cache = LruCache::new(2).unwrap();
/// cache.insert("a", 1);
/// cache.get(&"a");
///
/// let exporter = PrometheusTextExporter::new("lru", Vec::new());
/// exporter.export(&cache.metrics_snapshot());
/// let text = String::from_utf8(exporter.into_inner()).unwrap();
/// assert!(text.contains("lru_get_hits_total 1"));
/// ```
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_metric(&self, kind: &str, suffix: &str, value: u64) {
        let name = self.metric_name(suffix);
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        // Export is best-effort; a failed write must not disturb the caller.
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write> MetricsExporter<LruMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &LruMetricsSnapshot) {
        let counters = [
            ("get_calls_total", snapshot.get_calls),
            ("get_hits_total", snapshot.get_hits),
            ("get_misses_total", snapshot.get_misses),
            ("insert_calls_total", snapshot.insert_calls),
            ("insert_updates_total", snapshot.insert_updates),
            ("insert_new_total", snapshot.insert_new),
            ("evict_calls_total", snapshot.evict_calls),
            ("evicted_entries_total", snapshot.evicted_entries),
            ("clear_calls_total", snapshot.clear_calls),
            ("pop_lru_calls_total", snapshot.pop_lru_calls),
            ("pop_lru_found_total", snapshot.pop_lru_found),
            ("peek_lru_calls_total", snapshot.peek_lru_calls),
            ("peek_lru_found_total", snapshot.peek_lru_found),
            ("touch_calls_total", snapshot.touch_calls),
            ("touch_found_total", snapshot.touch_found),
            ("remove_calls_total", snapshot.remove_calls),
            ("remove_found_total", snapshot.remove_found),
            ("recency_rank_calls_total", snapshot.recency_rank_calls),
            ("recency_rank_found_total", snapshot.recency_rank_found),
            ("recency_rank_scan_steps_total", snapshot.recency_rank_scan_steps),
        ];
        for (suffix, value) in counters {
            self.write_metric("counter", suffix, value);
        }
        self.write_metric("gauge", "cache_len", snapshot.cache_len as u64);
        self.write_metric("gauge", "capacity", snapshot.capacity as u64);
    }
}
