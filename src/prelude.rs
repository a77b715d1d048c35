pub use crate::builder::{CacheBuilder, DEFAULT_CAPACITY};
pub use crate::ds::{IntrusiveList, SlotId};
pub use crate::error::{CacheError, ConfigError};
pub use crate::policy::lfu::LfuCache;
pub use crate::traits::{CoreCache, LfuCacheTrait};

#[cfg(feature = "concurrency")]
pub use crate::policy::lfu::ConcurrentLfuCache;
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::LfuMetricsSnapshot;
