//! Structural checks for the tests: colors, black-heights, key order and
//! parent links of a whole tree.

use super::RedBlackTree;
use super::node::NodeId;

/// The first broken invariant found by [`check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Violation {
    RedSentinel,
    SentinelParentLeftSet,
    RedRoot,
    RootHasParent,
    OutOfOrder { node: NodeId },
    BrokenParentLink { node: NodeId },
    RedChildOfRed { node: NodeId },
    BlackHeightMismatch { node: NodeId },
    UnreachableNodes { reachable: usize, stored: usize },
}

/// Verifies every red-black invariant and returns the black-height of the
/// root (black nodes on any root-to-sentinel path, sentinel excluded).
///
/// Keys must never decrease in in-order sequence. Equal keys are allowed on
/// either side of a node, since rotations can lift a later duplicate above
/// an earlier one.
pub(super) fn check<K: Ord, V>(tree: &RedBlackTree<K, V>) -> Result<usize, Violation> {
    let arena = &tree.arena;
    if arena.is_red(NodeId::NIL) {
        return Err(Violation::RedSentinel);
    }
    if !arena.parent(NodeId::NIL).is_nil() {
        return Err(Violation::SentinelParentLeftSet);
    }
    if !tree.root.is_nil() {
        if arena.is_red(tree.root) {
            return Err(Violation::RedRoot);
        }
        if !arena.parent(tree.root).is_nil() {
            return Err(Violation::RootHasParent);
        }
    }

    let mut reachable = 0;
    let black_height = check_subtree(tree, tree.root, None, None, &mut reachable)?;
    if reachable != arena.len() {
        return Err(Violation::UnreachableNodes {
            reachable,
            stored: arena.len(),
        });
    }
    Ok(black_height)
}

fn check_subtree<'a, K: Ord, V>(
    tree: &'a RedBlackTree<K, V>,
    node: NodeId,
    lower: Option<&'a K>,
    upper: Option<&'a K>,
    reachable: &mut usize,
) -> Result<usize, Violation> {
    if node.is_nil() {
        return Ok(0);
    }
    *reachable += 1;

    let arena = &tree.arena;
    let key = arena.key(node);
    if lower.is_some_and(|lower| key < lower) || upper.is_some_and(|upper| key > upper) {
        return Err(Violation::OutOfOrder { node });
    }

    let left = arena.left(node);
    let right = arena.right(node);
    for child in [left, right] {
        if child.is_nil() {
            continue;
        }
        if arena.parent(child) != node {
            return Err(Violation::BrokenParentLink { node: child });
        }
        if arena.is_red(node) && arena.is_red(child) {
            return Err(Violation::RedChildOfRed { node: child });
        }
    }

    let left_height = check_subtree(tree, left, lower, Some(key), reachable)?;
    let right_height = check_subtree(tree, right, Some(key), upper, reachable)?;
    if left_height != right_height {
        return Err(Violation::BlackHeightMismatch { node });
    }

    Ok(left_height + usize::from(arena.is_black(node)))
}

/// Number of nodes on the longest root-to-leaf path.
pub(super) fn height<K, V>(tree: &RedBlackTree<K, V>) -> usize {
    fn subtree_height<K, V>(tree: &RedBlackTree<K, V>, node: NodeId) -> usize {
        if node.is_nil() {
            return 0;
        }
        1 + subtree_height(tree, tree.arena.left(node))
            .max(subtree_height(tree, tree.arena.right(node)))
    }
    subtree_height(tree, tree.root)
}

/// Follows a path of `L`/`R` steps from the root.
pub(super) fn node_at<K, V>(tree: &RedBlackTree<K, V>, path: &str) -> NodeId {
    path.chars().fold(tree.root, |node, step| match step {
        'L' => tree.arena.left(node),
        'R' => tree.arena.right(node),
        other => panic!("invalid path step {other:?}"),
    })
}

/// Keys in in-order sequence.
pub(super) fn in_order_keys<K: Clone, V>(tree: &RedBlackTree<K, V>) -> Vec<K> {
    fn collect<K: Clone, V>(tree: &RedBlackTree<K, V>, node: NodeId, keys: &mut Vec<K>) {
        if node.is_nil() {
            return;
        }
        collect(tree, tree.arena.left(node), keys);
        keys.push(tree.arena.key(node).clone());
        collect(tree, tree.arena.right(node), keys);
    }
    let mut keys = Vec::with_capacity(tree.len());
    collect(tree, tree.root, &mut keys);
    keys
}
