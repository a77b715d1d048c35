//! Operation counters for caches, compiled in with the `metrics` feature.
//!
//! Recording, snapshotting, and exporting are separate concerns: a cache
//! owns an [`LfuMetrics`](metrics_impl::LfuMetrics) recorder, hands out
//! [`LfuMetricsSnapshot`](snapshot::LfuMetricsSnapshot) copies, and an
//! exporter such as [`PrometheusTextExporter`](exporter::PrometheusTextExporter)
//! publishes those snapshots.

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
