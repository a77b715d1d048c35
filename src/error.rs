//! Error types for the lfucache library.
//!
//! ## Key Components
//!
//! - [`CacheError`]: Returned by key lookups (`get`, `frequency`) when the
//!   key has no live entry. Callers are expected to branch on it.
//! - [`ConfigError`]: Returned when cache configuration parameters are
//!   invalid (negative capacity).
//!
//! ## Example Usage
//!
//! ```
//! use lfucache::builder::CacheBuilder;
//! use lfucache::error::{CacheError, ConfigError};
//! use lfucache::traits::CoreCache;
//!
//! let bad: Result<_, ConfigError> = CacheBuilder::new().capacity(-1).try_build::<u32, u32>();
//! assert!(bad.is_err());
//!
//! let mut cache = CacheBuilder::new().capacity(2).build::<u32, u32>();
//! assert_eq!(cache.get(&7), Err(CacheError::NotFound));
//! ```

use thiserror::Error;

// ---------------------------------------------------------------------------
// CacheError
// ---------------------------------------------------------------------------

/// Error returned by key lookups on a cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CacheError {
    /// The key has no live entry in the cache.
    #[error("key not found")]
    NotFound,
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration parameters are invalid.
///
/// Produced by [`CacheBuilder::try_build`](crate::builder::CacheBuilder::try_build).
/// [`CacheBuilder::build`](crate::builder::CacheBuilder::build) panics with
/// the same message instead, since a negative capacity is a programming
/// error rather than a runtime condition.
///
/// # Example
///
/// ```
/// use lfucache::builder::CacheBuilder;
///
/// let err = CacheBuilder::new().capacity(-3).try_build::<u64, u64>().unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- CacheError -------------------------------------------------------

    #[test]
    fn not_found_display() {
        assert_eq!(CacheError::NotFound.to_string(), "key not found");
    }

    #[test]
    fn cache_error_is_copy_and_eq() {
        let a = CacheError::NotFound;
        let b = a;
        assert_eq!(a, b);
    }

    #[test]
    fn cache_error_implements_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<CacheError>();
    }

    // -- ConfigError ------------------------------------------------------

    #[test]
    fn config_display_shows_message() {
        let err = ConfigError::new("capacity must be >= 0");
        assert_eq!(err.to_string(), "capacity must be >= 0");
    }

    #[test]
    fn config_debug_includes_message() {
        let err = ConfigError::new("bad capacity");
        let dbg = format!("{:?}", err);
        assert!(dbg.contains("bad capacity"));
    }

    #[test]
    fn config_message_accessor() {
        let err = ConfigError::new("test");
        assert_eq!(err.message(), "test");
    }

    #[test]
    fn config_clone_and_eq() {
        let a = ConfigError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn config_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ConfigError>();
    }
}
