//! # hotset
//!
//! Fixed-capacity key/value cache with least-recently-used eviction.
//!
//! ## Architecture
//! - **Index**: AHash map from key to arena handle (O(1) lookups)
//! - **Recency list**: doubly linked ordering over arena slots (O(1) promote and evict)
//! - **SharedCache**: coarse-lock wrapper with hit/miss statistics
//!
//! Every operation runs in constant time; the index and the recency list
//! always describe the same set of entries.

#![warn(missing_docs)]

mod entry;
mod error;
mod lru;
mod recency;
mod shared;
mod stats;

pub use error::{Error, Result};
pub use lru::LruCache;
pub use shared::SharedCache;
pub use stats::{CacheStats, StatsSnapshot};
