//! # sentree
//!
//! An in-memory ordered map backed by a red-black tree that uses a shared
//! black sentinel in place of absent children.
//!
//! ## Overview
//!
//! [`RedBlackTree`] stores key/value pairs ordered by `K: Ord` and keeps
//! itself balanced, so insert, lookup, delete and min/max all run in
//! O(log N). Inserting a key that is already present adds a second node
//! (equal keys are routed to the right) rather than replacing the value.
//!
//! ## Feature Flags
//!
//! - `tracing` (default): emit `TRACE` events for every rebalancing case
//!   and rotation under the `sentree::rebalance` target.
//!
//! ## Example
//!
//! ```rust
//! use sentree::prelude::*;
//!
//! let mut tree = RedBlackTree::new();
//! tree.insert(2, "two");
//! tree.insert(1, "one");
//! tree.insert(3, "three");
//!
//! assert_eq!(tree.get_value(&2), Ok(&"two"));
//! assert_eq!(tree.min(), Some(&1));
//! assert_eq!(tree.max(), Some(&3));
//!
//! assert_eq!(tree.delete(&2), Some("two"));
//! assert!(!tree.contains_key(&2));
//! assert!(tree.get_value(&2).is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Emits a `TRACE` event describing a rebalancing step.
///
/// Compiles to nothing when the `tracing` feature is disabled.
#[cfg(feature = "tracing")]
macro_rules! rebalance_event {
    ($($argument:tt)+) => {
        tracing::trace!(target: "sentree::rebalance", $($argument)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! rebalance_event {
    ($($argument:tt)+) => {};
}

/// Prelude module for convenient imports.
///
/// ```rust
/// use sentree::prelude::*;
///
/// let tree: RedBlackTree<i32, ()> = RedBlackTree::new();
/// assert!(tree.is_empty());
/// ```
pub mod prelude {
    pub use crate::error::KeyNotFoundError;
    pub use crate::tree::RedBlackTree;
}

pub mod error;
pub mod tree;

pub use error::KeyNotFoundError;
pub use tree::RedBlackTree;
