use std::io::Write;
use std::sync::{Mutex, PoisonError};

use crate::metrics::snapshot::LfuMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for cache metrics snapshots.
///
/// Writes the Prometheus text exposition format so the output can be
/// scraped directly or forwarded to a collector. Write errors are dropped:
/// exporting is observational and must not fail cache callers.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> PrometheusTextExporter<W> {
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

    fn write_metric(&self, writer: &mut W, kind: &str, suffix: &str, value: u64) {
        let name = self.metric_name(suffix);
        let _ = writeln!(writer, "# TYPE {name} {kind}");
        let _ = writeln!(writer, "{name} {value}");
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send> MetricsExporter<LfuMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &LfuMetricsSnapshot) {
        let counters = [
            ("get_calls_total", snapshot.get_calls),
            ("get_hits_total", snapshot.get_hits),
            ("get_misses_total", snapshot.get_misses),
            ("put_calls_total", snapshot.put_calls),
            ("put_updates_total", snapshot.put_updates),
            ("put_new_total", snapshot.put_new),
            ("evict_calls_total", snapshot.evict_calls),
            ("evicted_entries_total", snapshot.evicted_entries),
            ("pop_lfu_calls_total", snapshot.pop_lfu_calls),
            ("pop_lfu_found_total", snapshot.pop_lfu_found),
            ("peek_lfu_calls_total", snapshot.peek_lfu_calls),
            ("peek_lfu_found_total", snapshot.peek_lfu_found),
            ("frequency_calls_total", snapshot.frequency_calls),
            ("frequency_found_total", snapshot.frequency_found),
            ("clear_calls_total", snapshot.clear_calls),
        ];
        let gauges = [
            ("cache_len", snapshot.cache_len as u64),
            ("capacity", snapshot.capacity as u64),
        ];

        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        for (suffix, value) in counters {
            self.write_metric(&mut writer, "counter", suffix, value);
        }
        for (suffix, value) in gauges {
            self.write_metric(&mut writer, "gauge", suffix, value);
        }
        let _ = writer.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exports_counters_and_gauges_with_prefix() {
        let exporter = PrometheusTextExporter::new("lfu", Vec::new());
        let snapshot = LfuMetricsSnapshot {
            get_calls: 3,
            get_hits: 2,
            evicted_entries: 1,
            cache_len: 4,
            capacity: 8,
            ..Default::default()
        };
        exporter.export(&snapshot);

        let text = String::from_utf8(exporter.into_inner()).unwrap();
        assert!(text.contains("# TYPE lfu_get_calls_total counter\nlfu_get_calls_total 3\n"));
        assert!(text.contains("lfu_get_hits_total 2\n"));
        assert!(text.contains("lfu_evicted_entries_total 1\n"));
        assert!(text.contains("# TYPE lfu_cache_len gauge\nlfu_cache_len 4\n"));
        assert!(text.contains("lfu_capacity 8\n"));
    }

    #[test]
    fn empty_prefix_uses_bare_names() {
        let exporter = PrometheusTextExporter::new("", Vec::new());
        exporter.export(&LfuMetricsSnapshot::default());
        let text = String::from_utf8(exporter.into_inner()).unwrap();
        assert!(text.starts_with("# TYPE get_calls_total counter\n"));
    }
}
