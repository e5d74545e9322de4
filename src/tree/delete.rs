//! Deletion, subtree transplanting and the double-black repair.

use std::borrow::Borrow;

use super::RedBlackTree;
use super::node::{Color, NodeId};

impl<K: Ord, V> RedBlackTree<K, V> {
    /// Removes one entry stored under `key` and returns its value.
    ///
    /// Returns `None`, leaving the tree untouched, when no node carries
    /// `key`. When duplicates exist, only the first node found while
    /// descending from the root is removed.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sentree::RedBlackTree;
    ///
    /// let mut tree: RedBlackTree<i32, &str> =
    ///     [(1, "one"), (2, "two"), (3, "three")].into_iter().collect();
    ///
    /// assert_eq!(tree.delete(&2), Some("two"));
    /// assert_eq!(tree.delete(&2), None);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let target = self.search(key);
        if target.is_nil() {
            return None;
        }

        if self.arena.len() == 1 {
            self.root = NodeId::NIL;
        } else {
            let (removed_color, replacement) = self.splice_out(target);
            if removed_color == Color::Black {
                self.delete_fixup(replacement);
            }
        }

        let (_, value) = self.arena.release(target, &mut self.root);
        Some(value)
    }

    /// Unlinks `target` from the tree.
    ///
    /// Returns the color that left its structural position and the node
    /// (possibly the sentinel) that now sits where the black-height may be
    /// one short. With two children, the in-order successor node itself is
    /// moved into `target`'s place and takes over its color; keys and values
    /// are never copied between nodes.
    fn splice_out(&mut self, target: NodeId) -> (Color, NodeId) {
        let left = self.arena.left(target);
        let right = self.arena.right(target);

        if left.is_nil() {
            self.transplant(target, right);
            return (self.arena.color(target), right);
        }
        if right.is_nil() {
            self.transplant(target, left);
            return (self.arena.color(target), left);
        }

        let successor = self.arena.minimum(right);
        let successor_color = self.arena.color(successor);
        let replacement = self.arena.right(successor);

        if self.arena.parent(successor) == target {
            // `replacement` may be the sentinel; the fixup still needs to
            // find its parent.
            self.arena.set_parent(replacement, successor);
        } else {
            self.transplant(successor, replacement);
            self.arena.set_right(successor, right);
            self.arena.set_parent(right, successor);
        }

        self.transplant(target, successor);
        self.arena.set_left(successor, left);
        self.arena.set_parent(left, successor);
        self.arena.set_color(successor, self.arena.color(target));

        (successor_color, replacement)
    }

    /// Puts the subtree rooted at `new` where the subtree rooted at `old`
    /// was, from the point of view of `old`'s parent.
    ///
    /// `new` may be the sentinel, in which case the sentinel records the
    /// parent.
    fn transplant(&mut self, old: NodeId, new: NodeId) {
        let parent = self.arena.parent(old);
        self.replace_child(parent, old, new);
        self.arena.set_parent(new, parent);
    }

    /// Restores the red-black invariants when the subtree at `node` is one
    /// black short of its sibling's subtree.
    ///
    /// Each pass either resolves the deficit locally (cases 3 and 4, at most
    /// three rotations in total), converts a red sibling into a black one
    /// (case 1), or pushes the deficit one level up (case 2).
    fn delete_fixup(&mut self, mut node: NodeId) {
        while node != self.root && self.arena.is_black(node) {
            let parent = self.arena.parent(node);
            let side = self.arena.side_of(node);
            let far = side.opposite();
            let mut sibling = self.arena.child(parent, far);

            if self.arena.is_red(sibling) {
                rebalance_event!(?side, "delete case 1: red sibling");
                self.arena.set_color(sibling, Color::Black);
                self.arena.set_color(parent, Color::Red);
                self.rotate(parent, side);
                sibling = self.arena.child(parent, far);
            }

            if self.arena.is_black(self.arena.left(sibling))
                && self.arena.is_black(self.arena.right(sibling))
            {
                rebalance_event!(?side, "delete case 2: black sibling, black nephews");
                self.arena.set_color(sibling, Color::Red);
                node = parent;
                continue;
            }

            if self.arena.is_black(self.arena.child(sibling, far)) {
                rebalance_event!(?side, "delete case 3: red near nephew");
                let near = self.arena.child(sibling, side);
                self.arena.set_color(near, Color::Black);
                self.arena.set_color(sibling, Color::Red);
                self.rotate(sibling, far);
                sibling = self.arena.child(parent, far);
            }

            rebalance_event!(?side, "delete case 4: red far nephew");
            self.arena.set_color(sibling, self.arena.color(parent));
            self.arena.set_color(parent, Color::Black);
            let far_nephew = self.arena.child(sibling, far);
            self.arena.set_color(far_nephew, Color::Black);
            self.rotate(parent, side);
            node = self.root;
        }

        self.arena.set_color(node, Color::Black);
    }
}
