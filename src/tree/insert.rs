//! Insertion and the red-red repair that follows it.

use super::RedBlackTree;
use super::node::{Color, NodeId, Side};

impl<K: Ord, V> RedBlackTree<K, V> {
    /// Inserts a key-value pair.
    ///
    /// Insertion always succeeds. A key equal to one already stored is
    /// routed to the right and stored in a new node; the existing value is
    /// left in place.
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
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1, "one");
    /// tree.insert(1, "uno");
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.get(&1), Some(&"one"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) {
        let mut parent = NodeId::NIL;
        let mut current = self.root;
        let mut side = Side::Left;

        while !current.is_nil() {
            parent = current;
            side = if key < *self.arena.key(current) {
                Side::Left
            } else {
                Side::Right
            };
            current = self.arena.child(current, side);
        }

        let node = self.arena.allocate(key, value, parent);
        if parent.is_nil() {
            self.root = node;
        } else {
            self.arena.set_child(parent, side, node);
        }

        self.insert_fixup(node);
    }

    /// Restores the red-black invariants after `node` was attached as a red
    /// leaf.
    ///
    /// The only invariant an insertion can break is "no red node has a red
    /// child", between `node` and its parent. Each pass either pushes that
    /// violation two levels up (uncle red) or removes it with at most two
    /// rotations (uncle black).
    fn insert_fixup(&mut self, mut node: NodeId) {
        while self.arena.is_red(self.arena.parent(node)) {
            let parent = self.arena.parent(node);
            // A red parent is never the root, so the grandparent is real.
            let grandparent = self.arena.parent(parent);
            let parent_side = self.arena.side_of(parent);
            let uncle = self.arena.child(grandparent, parent_side.opposite());

            if self.arena.is_red(uncle) {
                rebalance_event!(?parent_side, "insert case 1: red uncle");
                self.arena.set_color(parent, Color::Black);
                self.arena.set_color(uncle, Color::Black);
                self.arena.set_color(grandparent, Color::Red);
                node = grandparent;
                continue;
            }

            if self.arena.side_of(node) != parent_side {
                rebalance_event!(?parent_side, "insert case 2: inner grandchild");
                node = parent;
                self.rotate(node, parent_side);
            }

            rebalance_event!(?parent_side, "insert case 3: outer grandchild");
            let parent = self.arena.parent(node);
            let grandparent = self.arena.parent(parent);
            self.arena.set_color(parent, Color::Black);
            self.arena.set_color(grandparent, Color::Red);
            self.rotate(grandparent, parent_side.opposite());
        }

        let root = self.root;
        self.arena.set_color(root, Color::Black);
    }
}
