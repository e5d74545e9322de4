//! Rotation primitives and child-slot surgery shared by the fixups.

use super::RedBlackTree;
use super::node::{NodeId, Side};

impl<K, V> RedBlackTree<K, V> {
    /// Rotates `pivot` down towards `side`.
    ///
    /// The child of `pivot` on the opposite side rises into `pivot`'s
    /// position, `pivot` becomes that child's `side` child, and the riser's
    /// former `side` subtree moves across to `pivot`. `Side::Left` is the
    /// textbook left rotation, `Side::Right` its mirror.
    ///
    /// Colors, key order and node count are untouched. A rotation with no
    /// child to promote is a no-op.
    pub(super) fn rotate(&mut self, pivot: NodeId, side: Side) {
        let riser = self.arena.child(pivot, side.opposite());
        if pivot.is_nil() || riser.is_nil() {
            return;
        }
        rebalance_event!(?side, "rotate");

        let inner = self.arena.child(riser, side);
        self.arena.set_child(pivot, side.opposite(), inner);
        if !inner.is_nil() {
            self.arena.set_parent(inner, pivot);
        }

        let parent = self.arena.parent(pivot);
        self.arena.set_parent(riser, parent);
        self.replace_child(parent, pivot, riser);

        self.arena.set_child(riser, side, pivot);
        self.arena.set_parent(pivot, riser);
    }

    /// Points the slot of `parent` that held `old` at `new` instead, or makes
    /// `new` the root when `parent` is the sentinel.
    ///
    /// Only the downward link is written.
    pub(super) fn replace_child(&mut self, parent: NodeId, old: NodeId, new: NodeId) {
        if parent.is_nil() {
            self.root = new;
        } else if self.arena.left(parent) == old {
            self.arena.set_left(parent, new);
        } else {
            self.arena.set_right(parent, new);
        }
    }
}
