//! # LFU (Least Frequently Used) Cache Implementation
//!
//! An LFU cache with LRU tie-breaking where `get`, `put`, and eviction are
//! all O(1). Instead of one list per frequency, every entry lives in a
//! single [`IntrusiveList`] ordered by descending frequency, so equal
//! frequencies form contiguous *runs*. Two indexes make every operation a
//! constant number of splices:
//!
//! - key index: key → node
//! - run index: frequency → front node of that frequency's run
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────────┐
//!   │                          LfuCache<K, V>                                  │
//!   │                                                                          │
//!   │   index: FxHashMap<K, SlotId>       run_heads: FxHashMap<u64, SlotId>    │
//!   │          │                                   │                           │
//!   │          ▼                                   ▼                           │
//!   │   list (IntrusiveList<Entry<K, V>>, front = hottest)                     │
//!   │                                                                          │
//!   │   head ─► [d:5] ◄─► [a:3] ◄─► [f:3] ◄─► [b:1] ◄─► [c:1] ◄─ tail          │
//!   │           └ run 5 ┘  └──── run 3 ────┘  └──── run 1 ────┘                │
//!   │                       ▲ run_heads[3]     ▲ run_heads[1]     ▲ next victim│
//!   │                                                                          │
//!   │   capacity: usize  (maximum entries)                                     │
//!   └──────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Within a run the front is the most recently touched entry and the back
//! the least recently touched, so the list tail is always the eviction
//! victim: lowest frequency, and least recent among those.
//!
//! ## Access Flow
//!
//! ```text
//!   get(&k) / put(k, v) on an existing key
//!        │
//!        ▼
//!   1. unlink node, remembering its successor
//!   2. retire: if run_heads[f] was this node, hand it to the successor
//!      when the successor is also at f, otherwise drop run f
//!   3. f += 1
//!   4. place the node (first rule that applies):
//!        run f exists         → before run_heads[f]
//!        f < tail frequency   → at the back
//!        run f-1 exists       → before run_heads[f-1]
//!        otherwise            → back into its own former slot
//!   5. run_heads[f] = node
//! ```
//!
//! The last rule covers a node that was alone in run f-1: that run has just
//! vanished, and the node's former neighbors are exactly the runs above and
//! below f.
//!
//! ## Core Operations
//!
//! | Method              | Complexity | Description                             |
//! |---------------------|------------|-----------------------------------------|
//! | `new(capacity)`     | O(1)       | Create cache with given capacity        |
//! | `put(k, v)`         | O(1)       | Insert or update, may evict one entry   |
//! | `get(&k)`           | O(1)       | Get value, increments frequency         |
//! | `frequency(&k)`     | O(1)       | Current frequency, no side effects      |
//! | `peek_lfu()`        | O(1)       | Next eviction victim                    |
//! | `pop_lfu()`         | O(1)       | Remove the next eviction victim         |
//! | `iter()`            | O(n)       | Hottest first, most recent first in run |
//! | `clear()`           | O(n)       | Remove all entries                      |
//!
//! ## Thread Safety
//!
//! `get` and `put` take `&mut self`, so `LfuCache` itself can only be
//! read concurrently. With the `concurrency` feature,
//! [`ConcurrentLfuCache`] serializes every call behind one mutex.
//!
//! ## Example Usage
//!
//! ```
//! use lfucache::policy::lfu::LfuCache;
//! use lfucache::traits::{CoreCache, LfuCacheTrait};
//!
//! let mut cache = LfuCache::new(2);
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a").unwrap();
//!
//! cache.put("c", 3); // evicts "b"
//! assert!(!cache.contains(&"b"));
//!
//! let order: Vec<_> = cache.iter().map(|(k, _)| *k).collect();
//! assert_eq!(order, vec!["a", "c"]);
//! assert_eq!(cache.frequency(&"a"), Ok(2));
//! ```

use std::hash::Hash;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::builder::DEFAULT_CAPACITY;
use crate::ds::intrusive_list::{IntrusiveList, IntrusiveListIter};
use crate::ds::slot_arena::SlotId;
use crate::error::CacheError;
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::LfuMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::LfuMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CoreMetricsRecorder, LfuMetricsReadRecorder, LfuMetricsRecorder, MetricsSnapshotProvider,
};
use crate::traits::{CoreCache, LfuCacheTrait};

/// Upper bound on up-front allocation; larger caches grow on demand.
const PREALLOC_LIMIT: usize = 4096;

#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
    freq: u64,
}

/// Where a detached node goes when it is linked back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Before(SlotId),
    Back,
    FormerSlot,
}

/// LFU cache with LRU tie-breaking.
///
/// See module-level documentation for details.
#[derive(Debug)]
pub struct LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    list: IntrusiveList<Entry<K, V>>,
    index: FxHashMap<K, SlotId>,
    run_heads: FxHashMap<u64, SlotId>,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: LfuMetrics,
}

impl<K, V> LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new(capacity: usize) -> Self {
        debug!(capacity, "creating lfu cache");
        let prealloc = capacity.min(PREALLOC_LIMIT);
        LfuCache {
            list: IntrusiveList::with_capacity(prealloc),
            index: FxHashMap::with_capacity_and_hasher(prealloc, Default::default()),
            run_heads: FxHashMap::with_capacity_and_hasher(prealloc, Default::default()),
            capacity,
            #[cfg(feature = "metrics")]
            metrics: LfuMetrics::default(),
        }
    }

    /// Returns the value for `key` without recording an access.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let id = *self.index.get(key)?;
        self.list.get(id).map(|entry| &entry.value)
    }

    /// Iterates entries from most to least frequent; within one frequency,
    /// most recently touched first.
    ///
    /// Each call starts a fresh traversal. The cache cannot be mutated while
    /// the iterator is alive.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.list.iter(),
        }
    }

    /// Unlinks `id` and retires it from its run.
    fn detach(&mut self, id: SlotId, freq: u64) {
        let successor = self.list.next_id(id);
        self.list.unlink(id);

        if self.run_heads.get(&freq) != Some(&id) {
            return;
        }
        let heir = successor.filter(|next| {
            self.list
                .get(*next)
                .is_some_and(|entry| entry.freq == freq)
        });
        match heir {
            Some(next) => {
                self.run_heads.insert(freq, next);
            },
            None => {
                self.run_heads.remove(&freq);
            },
        }
    }

    fn placement(&self, freq: u64) -> Placement {
        if let Some(&head) = self.run_heads.get(&freq) {
            return Placement::Before(head);
        }
        match self.list.back() {
            None => return Placement::Back,
            Some(back) if freq < back.freq => return Placement::Back,
            Some(_) => {},
        }
        if freq == 1 {
            // a fresh entry always finds run 1 or a tail above 1
            return Placement::Back;
        }
        match self.run_heads.get(&(freq - 1)) {
            Some(&lower) => Placement::Before(lower),
            None => Placement::FormerSlot,
        }
    }

    /// Links a detached node at the front of its frequency's run.
    fn splice(&mut self, id: SlotId, freq: u64) {
        let linked = match self.placement(freq) {
            Placement::Before(anchor) => self.list.insert_before(id, anchor),
            Placement::Back => self.list.append(id),
            Placement::FormerSlot => self.list.replace_in_place(id, id),
        };
        debug_assert!(linked, "lfu node could not be relinked");
        self.run_heads.insert(freq, id);
    }

    /// Records one access: frequency + 1 and front of the new run.
    fn touch(&mut self, id: SlotId) {
        let Some(freq) = self.list.get(id).map(|entry| entry.freq) else {
            return;
        };
        self.detach(id, freq);
        let new_freq = freq.saturating_add(1);
        if let Some(entry) = self.list.get_mut(id) {
            entry.freq = new_freq;
        }
        self.splice(id, new_freq);
    }

    fn pop_back_entry(&mut self) -> Option<(K, V)> {
        let (id, entry) = self.list.pop_back()?;
        if self.run_heads.get(&entry.freq) == Some(&id) {
            self.run_heads.remove(&entry.freq);
        }
        self.index.remove(&entry.key);
        Some((entry.key, entry.value))
    }

    fn evict(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_evict_call();

        let freq = self.list.back().map(|entry| entry.freq);
        if self.pop_back_entry().is_some() {
            #[cfg(feature = "metrics")]
            self.metrics.record_evicted_entry();

            trace!(freq, len = self.list.len(), "evicted lfu entry");
        }
    }

    /// Panics unless the list is frequency-ordered, every run head and key
    /// index entry matches the list, and `len() <= capacity()`.
    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.list.debug_validate_invariants();
        assert!(self.list.len() <= self.capacity);
        assert_eq!(self.list.len(), self.index.len());
        assert_eq!(self.list.node_count(), self.list.len());

        let mut prev_freq: Option<u64> = None;
        let mut runs = 0usize;
        for (id, entry) in self.list.iter_entries() {
            assert!(entry.freq >= 1);
            assert_eq!(self.index.get(&entry.key), Some(&id));
            match prev_freq {
                Some(prev) if prev == entry.freq => {},
                Some(prev) => {
                    assert!(prev > entry.freq, "frequencies must not increase");
                    assert_eq!(self.run_heads.get(&entry.freq), Some(&id));
                    runs += 1;
                },
                None => {
                    assert_eq!(self.run_heads.get(&entry.freq), Some(&id));
                    runs += 1;
                },
            }
            prev_freq = Some(entry.freq);
        }
        assert_eq!(runs, self.run_heads.len());
    }
}

impl<K, V> Default for LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<K, V> CoreCache<K, V> for LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn put(&mut self, key: K, value: V) {
        #[cfg(feature = "metrics")]
        self.metrics.record_put_call();

        if let Some(&id) = self.index.get(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_put_update();

            if let Some(entry) = self.list.get_mut(id) {
                entry.value = value;
            }
            self.touch(id);
            return;
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_put_new();

        if self.capacity == 0 {
            // admitted and evicted in the same step
            #[cfg(feature = "metrics")]
            {
                self.metrics.record_evict_call();
                self.metrics.record_evicted_entry();
            }
            trace!("zero-capacity cache dropped new entry");
            return;
        }

        if self.list.len() >= self.capacity {
            self.evict();
        }

        let id = self.list.insert_detached(Entry {
            key: key.clone(),
            value,
            freq: 1,
        });
        self.splice(id, 1);
        self.index.insert(key, id);
    }

    fn get(&mut self, key: &K) -> Result<&V, CacheError> {
        let Some(&id) = self.index.get(key) else {
            #[cfg(feature = "metrics")]
            self.metrics.record_get_miss();
            return Err(CacheError::NotFound);
        };

        self.touch(id);

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.list
            .get(id)
            .map(|entry| &entry.value)
            .ok_or(CacheError::NotFound)
    }

    fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    fn len(&self) -> usize {
        self.list.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        debug!(dropped = self.list.len(), "clearing lfu cache");
        self.list.clear();
        self.index.clear();
        self.run_heads.clear();
    }
}

impl<K, V> LfuCacheTrait<K, V> for LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn frequency(&self, key: &K) -> Result<u64, CacheError> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_frequency_call();

        let freq = self
            .index
            .get(key)
            .and_then(|id| self.list.get(*id))
            .map(|entry| entry.freq)
            .ok_or(CacheError::NotFound)?;

        #[cfg(feature = "metrics")]
        (&self.metrics).record_frequency_found();

        Ok(freq)
    }

    fn peek_lfu(&self) -> Option<(&K, &V)> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_lfu_call();

        let entry = self.list.back()?;

        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_lfu_found();

        Some((&entry.key, &entry.value))
    }

    fn pop_lfu(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lfu_call();

        let popped = self.pop_back_entry();

        #[cfg(feature = "metrics")]
        if popped.is_some() {
            self.metrics.record_pop_lfu_found();
        }

        popped
    }
}

/// Iterator over `(&K, &V)` in eviction-last-to-first order.
pub struct Iter<'a, K, V> {
    inner: IntrusiveListIter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> std::iter::FusedIterator for Iter<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "metrics")]
impl<K, V> LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn metrics_snapshot(&self) -> LfuMetricsSnapshot {
        LfuMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            put_calls: self.metrics.put_calls,
            put_updates: self.metrics.put_updates,
            put_new: self.metrics.put_new,
            evict_calls: self.metrics.evict_calls,
            evicted_entries: self.metrics.evicted_entries,
            pop_lfu_calls: self.metrics.pop_lfu_calls,
            pop_lfu_found: self.metrics.pop_lfu_found,
            peek_lfu_calls: self.metrics.peek_lfu_calls.get(),
            peek_lfu_found: self.metrics.peek_lfu_found.get(),
            frequency_calls: self.metrics.frequency_calls.get(),
            frequency_found: self.metrics.frequency_found.get(),
            clear_calls: self.metrics.clear_calls,
            cache_len: self.list.len(),
            capacity: self.capacity,
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<LfuMetricsSnapshot> for LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn snapshot(&self) -> LfuMetricsSnapshot {
        self.metrics_snapshot()
    }
}

// ---------------------------------------------------------------------------
// ConcurrentLfuCache
// ---------------------------------------------------------------------------

/// Thread-safe wrapper around [`LfuCache`] using a `parking_lot::Mutex`.
///
/// Every call takes the lock exactly once. `get` mutates frequency state,
/// so there is no shared read path; values are returned by clone, or
/// borrowed inside a closure with [`get_with`](Self::get_with).
#[cfg(feature = "concurrency")]
#[derive(Debug)]
pub struct ConcurrentLfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    inner: parking_lot::Mutex<LfuCache<K, V>>,
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentLfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: parking_lot::Mutex::new(LfuCache::new(capacity)),
        }
    }

    pub fn put(&self, key: K, value: V) {
        self.inner.lock().put(key, value);
    }

    /// Runs `f` on the value for `key`, recording the access.
    pub fn get_with<R>(&self, key: &K, f: impl FnOnce(&V) -> R) -> Result<R, CacheError> {
        let mut cache = self.inner.lock();
        cache.get(key).map(f)
    }

    pub fn frequency(&self, key: &K) -> Result<u64, CacheError> {
        self.inner.lock().frequency(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().contains(key)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    pub fn pop_lfu(&self) -> Option<(K, V)> {
        self.inner.lock().pop_lfu()
    }

    /// Runs `f` with exclusive access to the underlying cache.
    pub fn with_cache<R>(&self, f: impl FnOnce(&mut LfuCache<K, V>) -> R) -> R {
        let mut cache = self.inner.lock();
        f(&mut cache)
    }

    pub fn into_inner(self) -> LfuCache<K, V> {
        self.inner.into_inner()
    }

    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> LfuMetricsSnapshot {
        self.inner.lock().metrics_snapshot()
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentLfuCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn get(&self, key: &K) -> Result<V, CacheError> {
        self.get_with(key, V::clone)
    }

    pub fn peek_lfu(&self) -> Option<(K, V)> {
        let cache = self.inner.lock();
        cache.peek_lfu().map(|(k, v)| (k.clone(), v.clone()))
    }

    /// Copies all entries in iteration order while holding the lock.
    pub fn snapshot(&self) -> Vec<(K, V)> {
        let cache = self.inner.lock();
        cache.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> From<LfuCache<K, V>> for ConcurrentLfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn from(cache: LfuCache<K, V>) -> Self {
        Self {
            inner: parking_lot::Mutex::new(cache),
        }
    }
}
