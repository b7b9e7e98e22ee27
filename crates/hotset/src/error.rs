//! Error types for hotset

use std::fmt;

/// Result type alias for hotset operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cache operations
///
/// Both conditions are recoverable; callers decide whether to surface or
/// ignore them. Plain lookups report absence through `Option` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Eviction was requested but the cache holds no entries
    EmptyCache,

    /// Replace targeted a key that is not resident
    KeyNotFound,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyCache => write!(f, "Cache is empty, nothing to evict"),
            Error::KeyNotFound => write!(f, "Key not found in cache"),
        }
    }
}

impl std::error::Error for Error {}
