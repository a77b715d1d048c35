// ==============================================
// LFU SCENARIO TESTS (integration)
// ==============================================
//
// End-to-end behavior through the public API only: builder, traits,
// iteration and error values.

use lfucache::builder::{CacheBuilder, DEFAULT_CAPACITY};
use lfucache::error::CacheError;
use lfucache::policy::lfu::LfuCache;
use lfucache::traits::{CoreCache, LfuCacheTrait};

// ==============================================
// Eviction Scenarios
// ==============================================

mod eviction {
    use super::*;

    #[test]
    fn read_key_outlives_unread_key() {
        let mut cache = CacheBuilder::new().capacity(2).build();
        cache.put(1, 1);
        cache.put(2, 2);
        assert_eq!(cache.get(&1), Ok(&1));
        cache.put(3, 3);

        assert_eq!(cache.get(&2), Err(CacheError::NotFound));
        assert_eq!(cache.get(&3), Ok(&3));
    }

    #[test]
    fn capacity_zero_never_stores() {
        let mut cache = CacheBuilder::new().capacity(0).build();
        cache.put(1, 1);
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.get(&1), Err(CacheError::NotFound));
    }

    #[test]
    fn capacity_one_keeps_latest() {
        let mut cache = CacheBuilder::new().capacity(1).build();
        cache.put(1, 1);
        cache.put(2, 2);
        assert_eq!(cache.get(&1), Err(CacheError::NotFound));
        assert_eq!(cache.get(&2), Ok(&2));
    }

    #[test]
    fn lowest_frequency_is_evicted_not_oldest() {
        let mut cache = CacheBuilder::new().capacity(2).build();
        cache.put(1, 1);
        cache.put(2, 2);
        cache.get(&1).unwrap();
        cache.get(&1).unwrap();
        cache.get(&2).unwrap();
        cache.put(3, 3);

        assert_eq!(cache.get(&2), Err(CacheError::NotFound));
        assert_eq!(cache.get(&1), Ok(&1));
        assert_eq!(cache.get(&3), Ok(&3));
    }

    #[test]
    fn update_protects_key_like_a_read() {
        let mut cache = LfuCache::new(2);
        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("a", 10);
        cache.put("c", 3);

        assert!(!cache.contains(&"b"));
        assert_eq!(cache.peek(&"a"), Some(&10));
    }
}

// ==============================================
// Iteration Order
// ==============================================

mod iteration {
    use super::*;

    #[test]
    fn order_is_frequency_then_recency() {
        let mut cache = LfuCache::new(4);
        cache.put('a', 0);
        cache.put('b', 0);
        cache.put('c', 0);
        cache.put('d', 0);
        cache.get(&'b').unwrap();
        cache.get(&'d').unwrap();
        cache.get(&'d').unwrap();
        cache.get(&'a').unwrap();

        let order: Vec<char> = cache.iter().map(|(k, _)| *k).collect();
        assert_eq!(order, vec!['d', 'a', 'b', 'c']);
        assert_eq!(cache.peek_lfu(), Some((&'c', &0)));
    }

    #[test]
    fn empty_cache_yields_nothing() {
        let cache: LfuCache<u8, u8> = LfuCache::new(3);
        assert_eq!(cache.iter().next(), None);
        assert_eq!((&cache).into_iter().count(), 0);
    }

    #[test]
    fn iteration_does_not_touch() {
        let mut cache = LfuCache::new(3);
        cache.put(1, "x");
        cache.put(2, "y");
        for _ in cache.iter() {}
        for _ in &cache {}
        assert_eq!(cache.frequency(&1), Ok(1));
        assert_eq!(cache.frequency(&2), Ok(1));
    }
}

// ==============================================
// Construction
// ==============================================

mod construction {
    use super::*;

    #[test]
    fn default_capacity_is_five() {
        let cache: LfuCache<u32, u32> = LfuCache::default();
        assert_eq!(cache.capacity(), 5);
        assert_eq!(DEFAULT_CAPACITY, 5);
    }

    #[test]
    fn negative_capacity_is_a_config_error() {
        let err = CacheBuilder::new()
            .capacity(-2)
            .try_build::<u32, u32>()
            .unwrap_err();
        assert_eq!(err.to_string(), "capacity must be non-negative, got -2");
    }

    #[test]
    #[should_panic]
    fn negative_capacity_build_panics() {
        let _ = CacheBuilder::new().capacity(-1).build::<u32, u32>();
    }

    #[test]
    fn generic_over_core_cache_trait() {
        fn fill<C: CoreCache<u32, u32>>(cache: &mut C, n: u32) {
            for i in 0..n {
                cache.put(i, i);
            }
        }

        let mut cache = LfuCache::new(3);
        fill(&mut cache, 10);
        assert_eq!(cache.len(), cache.capacity());
    }
}
