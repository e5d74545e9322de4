//! Ordered map based on a sentinel red-black tree.
//!
//! This module provides [`RedBlackTree`], a mutable ordered map whose nodes
//! are kept balanced by the classic red-black rebalancing algorithms.
//!
//! # Overview
//!
//! - O(log N) `insert`
//! - O(log N) `delete`
//! - O(log N) `get` / `get_value` / `contains_key`
//! - O(log N) `min` / `max`
//! - O(1) `len` and `is_empty`
//!
//! # Internal Structure
//!
//! The tree maintains the following invariants after every public operation:
//! 1. Every node is either red or black
//! 2. The root is black
//! 3. The sentinel standing in for absent children is black
//! 4. Red nodes have only black children
//! 5. Every path from a node to a descendant sentinel has the same number
//!    of black nodes
//! 6. Keys never decrease from left to right. A new key equal to a stored
//!    one is placed to the right of it; later rotations may lift the newer
//!    node above the older one, so equal keys can end up on either side
//!
//! Together these bound the height by `2 * log2(N + 1)`.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use smallvec::SmallVec;

use crate::error::KeyNotFoundError;

mod delete;
mod insert;
mod node;
mod rotation;

#[cfg(test)]
mod invariants;

use node::{Arena, NodeId};

// =============================================================================
// RedBlackTree Definition
// =============================================================================

/// A mutable ordered map backed by a red-black tree.
///
/// Keys must implement `Ord`. Inserting a key that is already present does
/// not replace the stored value; it adds another node carrying the same key.
/// Lookups and deletes act on the first matching node met while descending
/// from the root, and each `delete` removes a single node.
///
/// # Time Complexity
///
/// | Operation        | Complexity |
/// |------------------|------------|
/// | `new`            | O(1)       |
/// | `insert`         | O(log N)   |
/// | `delete`         | O(log N)   |
/// | `get`            | O(log N)   |
/// | `get_value`      | O(log N)   |
/// | `contains_key`   | O(log N)   |
/// | `min`/`max`      | O(log N)   |
/// | `len`/`is_empty` | O(1)       |
///
/// # Examples
///
/// ```rust
/// use sentree::RedBlackTree;
///
/// let mut tree = RedBlackTree::new();
/// tree.insert("banana", 3);
/// tree.insert("apple", 5);
/// tree.insert("cherry", 7);
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.get("apple"), Some(&5));
/// assert_eq!(tree.min(), Some(&"apple"));
/// assert_eq!(tree.max(), Some(&"cherry"));
/// ```
#[derive(Clone)]
pub struct RedBlackTree<K, V> {
    arena: Arena<K, V>,
    root: NodeId,
}

static_assertions::assert_impl_all!(RedBlackTree<i32, String>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(RedBlackTree<std::rc::Rc<i32>, ()>: Send, Sync);

impl<K, V> RedBlackTree<K, V> {
    /// Creates a new empty tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sentree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32, String> = RedBlackTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: NodeId::NIL,
        }
    }

    /// Returns the number of stored entries, counting duplicates.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the tree holds no entries.
    ///
    /// Use this rather than [`min_or_default`](Self::min_or_default) to tell
    /// an empty tree apart from one that stores the default key.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_nil()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = NodeId::NIL;
    }

    /// Returns the smallest key, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sentree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32, ()> = [(3, ()), (1, ()), (2, ())].into_iter().collect();
    /// assert_eq!(tree.min(), Some(&1));
    /// ```
    #[must_use]
    pub fn min(&self) -> Option<&K> {
        if self.root.is_nil() {
            return None;
        }
        Some(self.arena.key(self.arena.minimum(self.root)))
    }

    /// Returns the largest key, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sentree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32, ()> = [(3, ()), (1, ()), (2, ())].into_iter().collect();
    /// assert_eq!(tree.max(), Some(&3));
    /// ```
    #[must_use]
    pub fn max(&self) -> Option<&K> {
        if self.root.is_nil() {
            return None;
        }
        Some(self.arena.key(self.arena.maximum(self.root)))
    }

    /// Returns the smallest key, or `K::default()` if the tree is empty.
    ///
    /// An empty tree is not an error here; check [`is_empty`](Self::is_empty)
    /// when the default key may also be stored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sentree::RedBlackTree;
    ///
    /// let mut tree: RedBlackTree<i32, ()> = RedBlackTree::new();
    /// assert_eq!(tree.min_or_default(), 0);
    ///
    /// tree.insert(-4, ());
    /// assert_eq!(tree.min_or_default(), -4);
    /// ```
    #[must_use]
    pub fn min_or_default(&self) -> K
    where
        K: Default + Clone,
    {
        self.min().cloned().unwrap_or_default()
    }

    /// Returns the largest key, or `K::default()` if the tree is empty.
    #[must_use]
    pub fn max_or_default(&self) -> K
    where
        K: Default + Clone,
    {
        self.max().cloned().unwrap_or_default()
    }
}

impl<K: Ord, V> RedBlackTree<K, V> {
    /// Creates a tree holding a single entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sentree::RedBlackTree;
    ///
    /// let tree = RedBlackTree::singleton(42, "answer");
    /// assert_eq!(tree.len(), 1);
    /// assert_eq!(tree.get(&42), Some(&"answer"));
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(key: K, value: V) -> Self {
        let mut tree = Self::new();
        tree.insert(key, value);
        tree
    }

    /// Descends from the root to the first node whose key equals `key`.
    ///
    /// Returns `NodeId::NIL` when no node matches.
    fn search<Q>(&self, key: &Q) -> NodeId
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root;
        while !current.is_nil() {
            current = match key.cmp(self.arena.key(current).borrow()) {
                Ordering::Equal => return current,
                Ordering::Less => self.arena.left(current),
                Ordering::Greater => self.arena.right(current),
            };
        }
        NodeId::NIL
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// The key may be any borrowed form of the tree's key type, but the
    /// ordering on the borrowed form must match the ordering on the key type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sentree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert("hello".to_string(), 42);
    ///
    /// assert_eq!(tree.get("hello"), Some(&42));
    /// assert_eq!(tree.get("world"), None);
    /// ```
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let found = self.search(key);
        (!found.is_nil()).then(|| self.arena.value(found))
    }

    /// Returns the value stored under `key`, or a [`KeyNotFoundError`]
    /// naming the key when nothing is stored under it.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFoundError`] if no node carries `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sentree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert("apple".to_string(), 1);
    ///
    /// assert_eq!(tree.get_value("apple"), Ok(&1));
    ///
    /// let error = tree.get_value("pear").unwrap_err();
    /// assert_eq!(error.key(), "pear");
    /// ```
    pub fn get_value<Q>(&self, key: &Q) -> Result<&V, KeyNotFoundError<Q::Owned>>
    where
        K: Borrow<Q>,
        Q: Ord + ToOwned + ?Sized,
    {
        self.get(key)
            .ok_or_else(|| KeyNotFoundError::new(key.to_owned()))
    }

    /// Returns `true` if some node carries `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sentree::RedBlackTree;
    ///
    /// let tree = RedBlackTree::singleton(1, "one");
    /// assert!(tree.contains_key(&1));
    /// assert!(!tree.contains_key(&2));
    /// ```
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        !self.search(key).is_nil()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<K, V> Default for RedBlackTree<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for RedBlackTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V> Extend<(K, V)> for RedBlackTree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for RedBlackTree<K, V> {
    /// Formats the entries in key order, e.g. `{1: "one", 2: "two"}`.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = formatter.debug_map();
        let mut stack: SmallVec<[NodeId; 32]> = SmallVec::new();
        let mut current = self.root;

        loop {
            while !current.is_nil() {
                stack.push(current);
                current = self.arena.left(current);
            }
            let Some(node) = stack.pop() else {
                break;
            };
            map.entry(self.arena.key(node), self.arena.value(node));
            current = self.arena.right(node);
        }

        map.finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
