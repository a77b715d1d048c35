//! Walks through LFU eviction with LRU tie-breaking.
//!
//! Run with `RUST_LOG=lfucache=trace cargo run --example basic_lfu` to see
//! evictions as they happen.

use lfucache::prelude::*;
use tracing_subscriber::EnvFilter;

fn print_cache(cache: &LfuCache<&str, u32>) {
    for (key, value) in cache {
        let freq = cache.frequency(key).unwrap_or(0);
        println!("  {key:>6} = {value:<4} (freq {freq})");
    }
}

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut cache = CacheBuilder::new().capacity(3).try_build()?;

    cache.put("alpha", 1);
    cache.put("beta", 2);
    cache.put("gamma", 3);
    println!("after three puts:");
    print_cache(&cache);

    for _ in 0..3 {
        let _ = cache.get(&"alpha");
    }
    let _ = cache.get(&"gamma");
    println!("after reading alpha three times and gamma once:");
    print_cache(&cache);

    if let Some((key, _)) = cache.peek_lfu() {
        println!("next victim: {key}");
    }
    cache.put("delta", 4);
    println!("after putting delta:");
    print_cache(&cache);

    match cache.get(&"beta") {
        Ok(value) => println!("beta is still cached: {value}"),
        Err(err) => println!("beta: {err}"),
    }

    Ok(())
}
