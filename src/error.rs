//! Error types for tree lookups.
//!
//! The tree has exactly one failure mode that callers can observe: asking
//! for the value of a key that is not stored. Every other operation is
//! total.

use std::fmt;

/// Returned by [`RedBlackTree::get_value`](crate::RedBlackTree::get_value)
/// when no node carries the requested key.
///
/// The missing key is kept so callers can report it.
///
/// # Examples
///
/// ```rust
/// use sentree::{KeyNotFoundError, RedBlackTree};
///
/// let tree: RedBlackTree<i32, &str> = RedBlackTree::new();
/// let error = tree.get_value(&7).unwrap_err();
///
/// assert_eq!(error, KeyNotFoundError::new(7));
/// assert_eq!(format!("{error}"), "element with key 7 not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyNotFoundError<K> {
    key: K,
}

impl<K> KeyNotFoundError<K> {
    /// Creates an error for the given missing key.
    #[inline]
    #[must_use]
    pub const fn new(key: K) -> Self {
        Self { key }
    }

    /// Returns the key that was looked up.
    #[inline]
    #[must_use]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Consumes the error and returns the missing key.
    #[inline]
    #[must_use]
    pub fn into_key(self) -> K {
        self.key
    }
}

impl<K: fmt::Debug> fmt::Display for KeyNotFoundError<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "element with key {:?} not found", self.key)
    }
}

impl<K: fmt::Debug> std::error::Error for KeyNotFoundError<K> {}
