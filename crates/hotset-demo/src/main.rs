//! Demonstration driver for the hotset LRU cache
//!
//! Walks the full public surface against a small cache of ticker symbols:
//! inserts, hit and miss lookups, replace, capacity overflow, explicit
//! eviction, and the statistics summary. The core crate is untouched by
//! anything here.

use anyhow::Result;
use clap::Parser;
use hotset::SharedCache;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Cache capacity (number of entries)
    #[arg(short, long, default_value_t = 5)]
    capacity: usize,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    anyhow::ensure!(args.capacity > 0, "capacity must be at least 1");

    info!("Starting hotset demo v{}", env!("CARGO_PKG_VERSION"));
    info!("Cache capacity: {}", args.capacity);

    let cache: SharedCache<String, i64> = SharedCache::new(args.capacity);

    println!("== Inserts ==");
    for (key, value) in [("aapl", 1), ("msft", 2), ("sq", 3), ("roku", 4)] {
        cache.insert(key.to_string(), value);
        println!("insert {key} -> {value}");
    }
    if let Some(key) = cache.most_recent_key() {
        println!("most recent key: {key}");
    }

    println!("\n== Lookups ==");
    match cache.get(&"aapl".to_string()) {
        Some(value) => println!("get aapl -> {value} (hit)"),
        None => println!("get aapl -> miss"),
    }
    match cache.get(&"nflx".to_string()) {
        Some(value) => println!("get nflx -> {value} (hit)"),
        None => println!("get nflx -> miss"),
    }
    if let Some(key) = cache.most_recent_key() {
        println!("most recent key: {key}");
    }

    println!("\n== Replace ==");
    match cache.replace(&"msft".to_string(), 20) {
        Ok(previous) => println!("replace msft -> 20 (was {previous})"),
        Err(err) => warn!("replace msft failed: {err}"),
    }
    if let Err(err) = cache.replace(&"nflx".to_string(), 5) {
        println!("replace nflx -> error: {err}");
    }

    println!("\n== Overflow ==");
    let mut next_value = 10;
    while cache.len() < cache.capacity() {
        cache.insert(format!("k{next_value}"), next_value);
        next_value += 1;
    }
    println!("cache full at {} entries", cache.len());
    cache.insert("amd".to_string(), 6);
    println!("insert amd -> 6 (evicted the coldest entry)");
    println!("resident entries: {}", cache.len());

    println!("\n== Eviction ==");
    while let Ok((key, value)) = cache.evict_least_recent() {
        println!("evicted {key} -> {value}");
    }
    if let Err(err) = cache.evict_least_recent() {
        println!("evict on empty cache -> error: {err}");
    }

    let stats = cache.stats().snapshot();
    println!("\n== Stats ==");
    println!("inserts:   {}", stats.inserts);
    println!("hits:      {}", stats.hits);
    println!("misses:    {}", stats.misses);
    println!("evictions: {}", stats.evictions);
    println!("hit ratio: {:.2}", stats.hit_ratio());

    info!("Demo complete");
    Ok(())
}
