//! Validated construction for [`LfuCache`].
//!
//! Capacities arrive from callers as signed integers (configuration files,
//! CLI flags, foreign callers), so the builder is where a negative value is
//! rejected. `try_build` reports it; `build` treats it as fatal.
//!
//! ## Example
//!
//! ```rust
//! use lfucache::builder::{CacheBuilder, DEFAULT_CAPACITY};
//! use lfucache::traits::CoreCache;
//!
//! let mut cache = CacheBuilder::new().capacity(100).build::<u64, String>();
//! cache.put(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Ok(&"hello".to_string()));
//!
//! let default_sized = CacheBuilder::new().build::<u64, u64>();
//! assert_eq!(default_sized.capacity(), DEFAULT_CAPACITY);
//! ```

use std::hash::Hash;

use crate::error::ConfigError;
use crate::policy::lfu::LfuCache;

/// Capacity used when none is configured.
pub const DEFAULT_CAPACITY: usize = 5;

/// Builder for [`LfuCache`].
#[derive(Debug, Clone, Default)]
pub struct CacheBuilder {
    capacity: Option<i64>,
}

impl CacheBuilder {
    /// Creates a builder with no explicit capacity ([`DEFAULT_CAPACITY`]).
    pub fn new() -> Self {
        Self { capacity: None }
    }

    /// Sets the maximum number of entries. Must not be negative.
    pub fn capacity(mut self, capacity: i64) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Returns the capacity the cache would be built with.
    pub fn resolved_capacity(&self) -> Result<usize, ConfigError> {
        match self.capacity {
            None => Ok(DEFAULT_CAPACITY),
            Some(capacity) => usize::try_from(capacity).map_err(|_| {
                ConfigError::new(format!(
                    "capacity must be non-negative, got {capacity}"
                ))
            }),
        }
    }

    /// Builds the cache, rejecting a negative capacity.
    pub fn try_build<K, V>(&self) -> Result<LfuCache<K, V>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        let capacity = self.resolved_capacity()?;
        Ok(LfuCache::new(capacity))
    }

    /// Builds the cache.
    ///
    /// # Panics
    ///
    /// Panics if the configured capacity is negative.
    pub fn build<K, V>(&self) -> LfuCache<K, V>
    where
        K: Eq + Hash + Clone,
    {
        match self.try_build() {
            Ok(cache) => cache,
            Err(err) => panic!("invalid cache configuration: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::CoreCache;

    #[test]
    fn default_capacity_when_unset() {
        let cache: LfuCache<u32, u32> = CacheBuilder::new().build();
        assert_eq!(cache.capacity(), DEFAULT_CAPACITY);
        assert_eq!(cache.capacity(), 5);
    }

    #[test]
    fn explicit_capacity_is_used() {
        let cache: LfuCache<u32, u32> = CacheBuilder::new().capacity(42).build();
        assert_eq!(cache.capacity(), 42);
        assert!(cache.is_empty());
    }

    #[test]
    fn zero_capacity_is_valid() {
        let cache = CacheBuilder::new().capacity(0).try_build::<u32, u32>();
        assert_eq!(cache.map(|c| c.capacity()), Ok(0));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn max_capacity_builds_and_accepts_puts() {
        let mut cache = CacheBuilder::new()
            .capacity(i64::MAX)
            .try_build::<u32, u32>()
            .unwrap();
        assert_eq!(cache.capacity(), i64::MAX as usize);
        cache.put(1, 10);
        assert_eq!(cache.get(&1), Ok(&10));
    }

    #[test]
    fn negative_capacity_is_rejected() {
        let err = CacheBuilder::new()
            .capacity(-1)
            .try_build::<u32, u32>()
            .unwrap_err();
        assert!(err.message().contains("non-negative"));
        assert!(err.message().contains("-1"));
    }

    #[test]
    #[should_panic(expected = "invalid cache configuration")]
    fn negative_capacity_panics_on_build() {
        let _cache: LfuCache<u32, u32> = CacheBuilder::new().capacity(-5).build();
    }
}
