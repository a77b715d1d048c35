//! lfucache: an O(1) LFU cache with LRU tie-breaking, built on an
//! arena-backed intrusive list.
//!
//! - [`ds`]: the slot arena and the ordered list with O(1) splicing.
//! - [`policy::lfu`]: the cache engine.
//! - [`builder`]: validated construction from signed capacities.
//! - [`metrics`]: operation counters and a Prometheus text exporter
//!   (`metrics` feature).

pub mod builder;
pub mod ds;
pub mod error;
pub mod policy;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod traits;
