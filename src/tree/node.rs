//! Node storage for the red-black tree.
//!
//! Nodes live in a dense arena and refer to each other by [`NodeId`].
//! A single reserved id, [`NodeId::NIL`], stands for every absent child and
//! for the parent of the root. Reading any link or color through `NIL`
//! yields the tree-owned sentinel, which is always black, so the rotation
//! and fixup code never has to branch on "is this child real".

// =============================================================================
// Identifiers and Colors
// =============================================================================

/// Index of a node in the arena.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    /// The shared sentinel.
    pub(crate) const NIL: Self = Self(usize::MAX);

    #[inline]
    pub(crate) const fn is_nil(self) -> bool {
        self.0 == usize::MAX
    }
}

/// The color of a red-black tree node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Color {
    Red,
    Black,
}

/// Which child slot of a parent a node occupies.
///
/// Every rebalancing case has a left-handed and a right-handed form that
/// are mirror images; the case code is written once against a `Side`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

// =============================================================================
// Node Definition
// =============================================================================

/// Structural position of a node: its color and its three links.
///
/// `parent` is a back-reference only. Ownership flows strictly downwards
/// through the arena, and `parent` must be rewritten in lock-step with the
/// child slot that points at this node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct Links {
    pub(crate) color: Color,
    pub(crate) parent: NodeId,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
}

impl Links {
    const SENTINEL: Self = Self {
        color: Color::Black,
        parent: NodeId::NIL,
        left: NodeId::NIL,
        right: NodeId::NIL,
    };

    const fn red_leaf(parent: NodeId) -> Self {
        Self {
            color: Color::Red,
            parent,
            left: NodeId::NIL,
            right: NodeId::NIL,
        }
    }
}

/// One stored key/value pair plus its position in the tree.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    key: K,
    value: V,
    links: Links,
}

// =============================================================================
// Arena
// =============================================================================

/// Owner of every node in a tree, and of the tree's sentinel.
///
/// The arena is kept dense: releasing a node moves the last node into the
/// vacated slot and re-points that node's neighbours at its new id.
#[derive(Clone)]
pub(crate) struct Arena<K, V> {
    nodes: Vec<Node<K, V>>,
    sentinel: Links,
}

impl<K, V> Arena<K, V> {
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            sentinel: Links::SENTINEL,
        }
    }

    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.sentinel = Links::SENTINEL;
    }

    /// Stores a new red leaf hanging below `parent`.
    ///
    /// Only the new node's own links are set; attaching it to `parent`'s
    /// child slot is left to the caller.
    pub(crate) fn allocate(&mut self, key: K, value: V, parent: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            key,
            value,
            links: Links::red_leaf(parent),
        });
        id
    }

    /// Removes a node that is no longer linked into the tree and returns its
    /// key and value.
    ///
    /// The node stored last is moved into `id`; its parent's child slot (or
    /// `root`) and its children's parent links are rewritten to follow it.
    pub(crate) fn release(&mut self, id: NodeId, root: &mut NodeId) -> (K, V) {
        let last = NodeId(self.nodes.len() - 1);
        let removed = self.nodes.swap_remove(id.0);

        if last != id {
            let moved = self.nodes[id.0].links;
            if *root == last {
                *root = id;
            } else if self.left(moved.parent) == last {
                self.set_left(moved.parent, id);
            } else {
                self.set_right(moved.parent, id);
            }
            self.set_parent(moved.left, id);
            self.set_parent(moved.right, id);
        }

        // The sentinel's parent is scratch space; never leave it dangling.
        self.sentinel.parent = NodeId::NIL;

        (removed.key, removed.value)
    }

    // -------------------------------------------------------------------------
    // Payload access (real nodes only)
    // -------------------------------------------------------------------------

    #[inline]
    pub(crate) fn key(&self, id: NodeId) -> &K {
        &self.nodes[id.0].key
    }

    #[inline]
    pub(crate) fn value(&self, id: NodeId) -> &V {
        &self.nodes[id.0].value
    }

    // -------------------------------------------------------------------------
    // Link access (NIL reads and writes go to the sentinel)
    // -------------------------------------------------------------------------

    #[inline]
    pub(crate) fn links(&self, id: NodeId) -> &Links {
        if id.is_nil() {
            &self.sentinel
        } else {
            &self.nodes[id.0].links
        }
    }

    #[inline]
    fn links_mut(&mut self, id: NodeId) -> &mut Links {
        if id.is_nil() {
            &mut self.sentinel
        } else {
            &mut self.nodes[id.0].links
        }
    }

    #[inline]
    pub(crate) fn color(&self, id: NodeId) -> Color {
        self.links(id).color
    }

    #[inline]
    pub(crate) fn is_red(&self, id: NodeId) -> bool {
        self.color(id) == Color::Red
    }

    #[inline]
    pub(crate) fn is_black(&self, id: NodeId) -> bool {
        self.color(id) == Color::Black
    }

    /// Sets the color of a real node. The sentinel stays black.
    #[inline]
    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        if !id.is_nil() {
            self.nodes[id.0].links.color = color;
        }
    }

    #[inline]
    pub(crate) fn parent(&self, id: NodeId) -> NodeId {
        self.links(id).parent
    }

    #[inline]
    pub(crate) fn left(&self, id: NodeId) -> NodeId {
        self.links(id).left
    }

    #[inline]
    pub(crate) fn right(&self, id: NodeId) -> NodeId {
        self.links(id).right
    }

    #[inline]
    pub(crate) fn child(&self, id: NodeId, side: Side) -> NodeId {
        match side {
            Side::Left => self.left(id),
            Side::Right => self.right(id),
        }
    }

    /// Writes the parent link of `id`.
    ///
    /// Writing through `NIL` records the parent on the sentinel, which
    /// `delete_fixup` relies on when the spliced-out node had no children.
    #[inline]
    pub(crate) fn set_parent(&mut self, id: NodeId, parent: NodeId) {
        self.links_mut(id).parent = parent;
    }

    #[inline]
    pub(crate) fn set_left(&mut self, id: NodeId, child: NodeId) {
        if !id.is_nil() {
            self.nodes[id.0].links.left = child;
        }
    }

    #[inline]
    pub(crate) fn set_right(&mut self, id: NodeId, child: NodeId) {
        if !id.is_nil() {
            self.nodes[id.0].links.right = child;
        }
    }

    #[inline]
    pub(crate) fn set_child(&mut self, id: NodeId, side: Side, child: NodeId) {
        match side {
            Side::Left => self.set_left(id, child),
            Side::Right => self.set_right(id, child),
        }
    }

    /// The side of its parent that `id` hangs from.
    ///
    /// For `NIL` this uses the sentinel's recorded parent; the answer is only
    /// meaningful while that parent has a single absent child.
    #[inline]
    pub(crate) fn side_of(&self, id: NodeId) -> Side {
        if self.left(self.parent(id)) == id {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Walks left from `id` to the smallest node of its subtree.
    pub(crate) fn minimum(&self, mut id: NodeId) -> NodeId {
        while !self.left(id).is_nil() {
            id = self.left(id);
        }
        id
    }

    /// Walks right from `id` to the largest node of its subtree.
    pub(crate) fn maximum(&self, mut id: NodeId) -> NodeId {
        while !self.right(id).is_nil() {
            id = self.right(id);
        }
        id
    }
}
