//! Rotations that restore the height-balance of a subtree.
//!
//! Only the two single rotations are primitive. The double rotations are
//! composed from them: a left-right rotation rotates the left child left and
//! then the node right, and a right-left rotation mirrors it. Each function
//! takes ownership of a subtree root and returns the new root, with cached
//! heights refreshed bottom-up.
//!
//! ```text
//!   rotate_right(x)            rotate_left(y)
//!
//!        x                          y
//!       / \          =>            / \
//!      y   C                      A   x
//!     / \                            / \
//!    A   B                          B   C
//! ```
use super::node::Node;
use super::ufid::Ufid;
use std::cmp::Ordering;
use tracing::trace;

/// Number of primitive rotations performed on a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rotations {
    pub left: u64,
    pub right: u64,
}

/// Rotates a right-heavy subtree to the left. O(1).
///
/// Returns `node` unchanged if it has no right child.
pub fn rotate_left(mut node: Box<Node>, rotations: &mut Rotations) -> Box<Node> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    node.update_height();
    trace!(node = %node.id, pivot = %pivot.id, "Rotating left.");
    pivot.left = Some(node);
    pivot.update_height();
    rotations.left += 1;
    pivot
}

/// Rotates a left-heavy subtree to the right. O(1).
///
/// Returns `node` unchanged if it has no left child.
pub fn rotate_right(mut node: Box<Node>, rotations: &mut Rotations) -> Box<Node> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    node.update_height();
    trace!(node = %node.id, pivot = %pivot.id, "Rotating right.");
    pivot.right = Some(node);
    pivot.update_height();
    rotations.right += 1;
    pivot
}

pub fn rotate_left_right(mut node: Box<Node>, rotations: &mut Rotations) -> Box<Node> {
    node.left = node.left.take().map(|left| rotate_left(left, rotations));
    rotate_right(node, rotations)
}

pub fn rotate_right_left(mut node: Box<Node>, rotations: &mut Rotations) -> Box<Node> {
    node.right = node.right.take().map(|right| rotate_right(right, rotations));
    rotate_left(node, rotations)
}

/// Rebalances `node` on the way back up from inserting `key`.
///
/// The rotation is chosen by comparing the inserted key with the heavy child's
/// key, which tells which grandchild subtree grew.
pub fn rebalance_after_insert(node: Box<Node>, key: &Ufid, rotations: &mut Rotations) -> Box<Node> {
    let balance = node.balance_factor();

    if balance < -1 {
        let pivot = node.right.as_ref().map(|right| key.cmp(&right.id));
        match pivot {
            Some(Ordering::Less) => return rotate_right_left(node, rotations),
            Some(Ordering::Greater) => return rotate_left(node, rotations),
            _ => {}
        }
    }

    if balance > 1 {
        let pivot = node.left.as_ref().map(|left| key.cmp(&left.id));
        match pivot {
            Some(Ordering::Less) => return rotate_right(node, rotations),
            Some(Ordering::Greater) => return rotate_left_right(node, rotations),
            _ => {}
        }
    }

    node
}

/// Rebalances `node` on the way back up from a removal.
///
/// There is no inserted key to steer by, so the heavy child's own balance
/// factor picks between a single and a double rotation.
pub fn rebalance_after_remove(node: Box<Node>, rotations: &mut Rotations) -> Box<Node> {
    let balance = node.balance_factor();

    if balance > 1 {
        let left_balance = node.left.as_ref().map_or(0, |left| left.balance_factor());
        if left_balance >= 0 {
            rotate_right(node, rotations)
        } else {
            rotate_left_right(node, rotations)
        }
    } else if balance < -1 {
        let right_balance = node.right.as_ref().map_or(0, |right| right.balance_factor());
        if right_balance <= 0 {
            rotate_left(node, rotations)
        } else {
            rotate_right_left(node, rotations)
        }
    } else {
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::node::Link;

    fn node(id: &str, left: Link, right: Link) -> Box<Node> {
        let mut n = Box::new(Node::new(id, id.parse().unwrap()));
        n.left = left;
        n.right = right;
        n.update_height();
        n
    }

    fn leaf(id: &str) -> Link {
        Some(node(id, None, None))
    }

    fn inorder(link: &Link, out: &mut Vec<String>) {
        if let Some(n) = link {
            inorder(&n.left, out);
            out.push(n.id.to_string());
            inorder(&n.right, out);
        }
    }

    #[test]
    fn test_rotate_left_preserves_order() {
        // 1 -> 2 -> 3 chain, right-heavy
        let root = node("00000001", None, Some(node("00000002", None, leaf("00000003"))));
        let mut rotations = Rotations::default();
        let root = rotate_left(root, &mut rotations);

        assert_eq!(root.id.as_str(), "00000002");
        assert_eq!(root.height(), 2);
        assert_eq!(rotations, Rotations { left: 1, right: 0 });

        let mut ids = Vec::new();
        inorder(&Some(root), &mut ids);
        assert_eq!(ids, vec!["00000001", "00000002", "00000003"]);
    }

    #[test]
    fn test_rotate_right_moves_inner_grandchild() {
        let root = node(
            "00000005",
            Some(node("00000003", leaf("00000002"), leaf("00000004"))),
            leaf("00000006"),
        );
        let mut rotations = Rotations::default();
        let root = rotate_right(root, &mut rotations);

        assert_eq!(root.id.as_str(), "00000003");
        let right = root.right.as_ref().unwrap();
        assert_eq!(right.id.as_str(), "00000005");
        assert_eq!(right.left.as_ref().unwrap().id.as_str(), "00000004");
        assert_eq!(root.height(), 3);
        assert_eq!(rotations.right, 1);
    }

    #[test]
    fn test_rotate_without_pivot_is_noop() {
        let mut rotations = Rotations::default();
        let root = rotate_left(node("00000001", None, None), &mut rotations);
        let root = rotate_right(root, &mut rotations);
        assert_eq!(root.id.as_str(), "00000001");
        assert_eq!(rotations, Rotations::default());
    }

    #[test]
    fn test_double_rotations_are_two_singles() {
        let mut rotations = Rotations::default();
        let root = node("00000003", Some(node("00000001", None, leaf("00000002"))), None);
        let root = rotate_left_right(root, &mut rotations);
        assert_eq!(root.id.as_str(), "00000002");
        assert_eq!(rotations, Rotations { left: 1, right: 1 });

        let root = node("00000001", None, Some(node("00000003", leaf("00000002"), None)));
        let root = rotate_right_left(root, &mut rotations);
        assert_eq!(root.id.as_str(), "00000002");
        assert_eq!(root.height(), 2);
        assert_eq!(rotations, Rotations { left: 2, right: 2 });
    }

    #[test]
    fn test_rebalance_after_insert_picks_case_by_key() {
        let mut rotations = Rotations::default();
        let key: Ufid = "00000002".parse().unwrap();
        let root = node("00000001", None, Some(node("00000003", leaf("00000002"), None)));
        let root = rebalance_after_insert(root, &key, &mut rotations);
        assert_eq!(root.id, key);
        assert_eq!(rotations, Rotations { left: 1, right: 1 });
    }

    #[test]
    fn test_rebalance_after_remove_uses_child_balance() {
        let mut rotations = Rotations::default();
        // Left child is balanced after a removal on the right; a single rotation suffices.
        let root = node(
            "00000004",
            Some(node("00000002", leaf("00000001"), leaf("00000003"))),
            None,
        );
        let root = rebalance_after_remove(root, &mut rotations);
        assert_eq!(root.id.as_str(), "00000002");
        assert_eq!(root.height(), 3);
        assert_eq!(rotations, Rotations { left: 0, right: 1 });
    }
}
