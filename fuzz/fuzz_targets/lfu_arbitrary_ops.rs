#![no_main]

use libfuzzer_sys::fuzz_target;
use lfucache::policy::lfu::LfuCache;
use lfucache::traits::{CoreCache, LfuCacheTrait};

// Fuzz arbitrary operation sequences on LfuCache
//
// The first byte picks a capacity in 0..16; the rest is decoded as
// (op, key) pairs over a small key space so hits, ties and evictions are
// frequent.
fuzz_target!(|data: &[u8]| {
    let Some((&cap, ops)) = data.split_first() else {
        return;
    };
    let mut cache: LfuCache<u8, u32> = LfuCache::new(usize::from(cap % 16));

    for (step, pair) in ops.chunks_exact(2).enumerate() {
        let key = pair[1] % 32;
        match pair[0] % 6 {
            0 | 1 => {
                let before = cache.frequency(&key).ok();
                cache.put(key, step as u32);
                if let Some(freq) = before {
                    assert_eq!(cache.frequency(&key), Ok(freq + 1));
                }
            }
            2 | 3 => {
                let before = cache.frequency(&key).ok();
                let hit = cache.get(&key).is_ok();
                assert_eq!(hit, before.is_some());
                if let Some(freq) = before {
                    assert_eq!(cache.frequency(&key), Ok(freq + 1));
                }
            }
            4 => {
                let victim = cache.peek_lfu().map(|(k, v)| (*k, *v));
                assert_eq!(cache.pop_lfu(), victim);
            }
            5 => {
                let mut last = u64::MAX;
                for (k, _) in cache.iter() {
                    let freq = cache.frequency(k).unwrap_or(0);
                    assert!(freq <= last);
                    last = freq;
                }
            }
            _ => unreachable!(),
        }

        assert!(cache.len() <= cache.capacity());
        cache.debug_validate_invariants();
    }
});
