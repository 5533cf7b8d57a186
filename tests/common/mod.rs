//! Shared test utilities.
//!
//! # Usage
//!
//! ```rust,ignore
//! mod common;
//!
//! #[test]
//! fn my_test() {
//!     common::init_tracing();
//!     // ... build and mutate maps; rebalancing steps are logged
//! }
//! ```
//!
//! Rebalancing events are only emitted when the crate is built with the
//! `tracing` feature:
//!
//! ```bash
//! RUST_LOG=rbtree_map=trace cargo test --features tracing -- --nocapture
//! ```

#![allow(dead_code)]

use std::sync::Once;

use rbtree_map::TreeMap;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Ensures tracing is only initialized once across all tests.
static INIT: Once = Once::new();

/// Default level when `RUST_LOG` is not set.
const DEFAULT_LEVEL: Level = Level::WARN;

/// Installs a compact console subscriber filtered by `RUST_LOG`.
///
/// Safe to call multiple times - only the first call takes effect.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL.to_string()));
        // try_init: another test binary helper may already have installed one
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .compact()
            .try_init();
    });
}

/// Builds a map whose values are the decimal rendering of each key.
pub fn numbered<I: IntoIterator<Item = i32>>(keys: I) -> TreeMap<i32, String> {
    keys.into_iter().map(|key| (key, key.to_string())).collect()
}

/// Collects the keys of `map` in iteration order.
pub fn keys_of<V>(map: &TreeMap<i32, V>) -> Vec<i32> {
    map.keys().copied().collect()
}

/// Walks `map` from `begin()` to `end()` with a cursor and collects the keys.
pub fn cursor_keys<V>(map: &TreeMap<i32, V>) -> Vec<i32> {
    let mut keys = Vec::with_capacity(map.len());
    let mut cursor = map.begin();
    while cursor != map.end() {
        keys.extend(cursor.key().copied());
        cursor.move_next();
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_init() {
        init_tracing();
        init_tracing();
        tracing::debug!(length = 0, "tracing initialized");
    }
}
