//! # Cache Trait Hierarchy
//!
//! The traits every cache in this crate implements, split the same way the
//! operations split: what any bounded cache supports, and what only makes
//! sense for a frequency-ordered one.
//!
//! ```text
//!   ┌─────────────────────────────────────────┐
//!   │            CoreCache<K, V>              │
//!   │                                         │
//!   │  put(&mut, K, V)                        │
//!   │  get(&mut, &K) → Result<&V, CacheError> │
//!   │  contains(&, &K) → bool                 │
//!   │  len(&) / is_empty(&) / capacity(&)     │
//!   │  clear(&mut)                            │
//!   └──────────────────┬──────────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │          LfuCacheTrait<K, V>            │
//!   │                                         │
//!   │  frequency(&K) → Result<u64, _>         │
//!   │  peek_lfu() → Option<(&K, &V)>          │
//!   │  pop_lfu() → Option<(K, V)>             │
//!   └─────────────────────────────────────────┘
//! ```
//!
//! Misses are reported as [`CacheError::NotFound`] rather than `None` so
//! that callers branch on a named condition; `put` never fails because
//! eviction is implicit.

use crate::error::CacheError;

/// Operations shared by every bounded cache.
///
/// # Example
///
/// ```
/// use lfucache::policy::lfu::LfuCache;
/// use lfucache::traits::CoreCache;
///
/// fn warm<C: CoreCache<u32, &'static str>>(cache: &mut C) {
///     cache.put(1, "one");
///     cache.put(2, "two");
/// }
///
/// let mut cache = LfuCache::new(4);
/// warm(&mut cache);
/// assert_eq!(cache.len(), 2);
/// ```
pub trait CoreCache<K, V> {
    /// Inserts or updates a key.
    ///
    /// Updating an existing key counts as an access. Admitting a new key
    /// into a full cache evicts one entry first.
    fn put(&mut self, key: K, value: V);

    /// Gets a reference to a value by key, recording the access.
    ///
    /// # Example
    ///
    /// ```
    /// use lfucache::error::CacheError;
    /// use lfucache::policy::lfu::LfuCache;
    /// use lfucache::traits::CoreCache;
    ///
    /// let mut cache = LfuCache::new(10);
    /// cache.put(1, "value");
    ///
    /// assert_eq!(cache.get(&1), Ok(&"value"));
    /// assert_eq!(cache.get(&99), Err(CacheError::NotFound));
    /// ```
    fn get(&mut self, key: &K) -> Result<&V, CacheError>;

    /// Checks if a key exists without recording an access.
    fn contains(&self, key: &K) -> bool;

    /// Returns the current number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum number of entries.
    fn capacity(&self) -> usize;

    /// Removes every entry. Capacity is unchanged.
    fn clear(&mut self);
}

/// Frequency-ordered cache operations.
pub trait LfuCacheTrait<K, V>: CoreCache<K, V> {
    /// Returns the access frequency of a key without recording an access.
    ///
    /// # Example
    ///
    /// ```
    /// use lfucache::policy::lfu::LfuCache;
    /// use lfucache::traits::{CoreCache, LfuCacheTrait};
    ///
    /// let mut cache = LfuCache::new(10);
    /// cache.put("a", 1);
    /// cache.get(&"a").unwrap();
    /// assert_eq!(cache.frequency(&"a"), Ok(2));
    /// assert!(cache.frequency(&"b").is_err());
    /// ```
    fn frequency(&self, key: &K) -> Result<u64, CacheError>;

    /// Returns the entry that the next eviction would remove.
    ///
    /// That is the least frequently used entry, and among equally frequent
    /// entries the least recently used one. Does not record an access.
    fn peek_lfu(&self) -> Option<(&K, &V)>;

    /// Removes and returns the entry [`peek_lfu`](Self::peek_lfu) reports.
    ///
    /// # Example
    ///
    /// ```
    /// use lfucache::policy::lfu::LfuCache;
    /// use lfucache::traits::{CoreCache, LfuCacheTrait};
    ///
    /// let mut cache = LfuCache::new(10);
    /// cache.put(1, "first");
    /// cache.put(2, "second");
    /// cache.get(&1).unwrap();
    ///
    /// assert_eq!(cache.pop_lfu(), Some((2, "second")));
    /// assert_eq!(cache.len(), 1);
    /// ```
    fn pop_lfu(&mut self) -> Option<(K, V)>;
}
