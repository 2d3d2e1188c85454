//! Mini LRU demo
//!
//! Builds a cache from environment configuration, runs it through its
//! operations, and logs the resulting state.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mini_lru::config::parse_var;
use mini_lru::{Cache, Config};

/// Capacity the demo shrinks the cache to once it is full
const DEFAULT_SHRINK_TO: usize = 2;

fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mini_lru=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let shrink_to = parse_var("CACHE_SHRINK_TO").unwrap_or(DEFAULT_SHRINK_TO);
    info!(
        "Configuration loaded: capacity={}, shrink_to={}",
        config.capacity, shrink_to
    );

    let cache = Cache::from_config(&config).context("failed to build cache")?;

    for (i, key) in ["first", "second", "third", "fourth", "fifth"]
        .into_iter()
        .enumerate()
    {
        let added = cache.add(key, i + 1);
        info!(key, added, len = cache.len(), "add");
    }

    info!(found = ?cache.get("second"), "get second");
    info!(changed = cache.change_value("third", 30), "change third");
    info!(added = cache.add("second", 200), "add duplicate second");

    cache.change_capacity(shrink_to);
    info!(capacity = cache.capacity(), len = cache.len(), "capacity changed");

    info!("keys={:?} values={:?}", cache.keys(), cache.values());

    let stats = serde_json::to_string(&cache.stats()).context("failed to encode stats")?;
    info!("stats {}", stats);

    cache.clear();
    info!(len = cache.len(), "cache cleared");

    Ok(())
}
