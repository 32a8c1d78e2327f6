use super::node::{Link, Node};
use super::ufid::Ufid;

/// Visit order of a depth-first traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Node, left, right.
    Pre,
    /// Left, node, right.
    In,
    /// Left, right, node.
    Post,
}

/// Visits every node of `link` exactly once in the given order.
pub fn walk<'a, F>(link: &'a Link, order: Order, visit: &mut F)
where
    F: FnMut(&'a Node),
{
    let Some(node) = link.as_deref() else {
        return;
    };
    if order == Order::Pre {
        visit(node);
    }
    walk(&node.left, order, visit);
    if order == Order::In {
        visit(node);
    }
    walk(&node.right, order, visit);
    if order == Order::Post {
        visit(node);
    }
}

pub fn names(link: &Link, order: Order) -> Vec<&str> {
    let mut out = Vec::new();
    walk(link, order, &mut |node| out.push(node.name.as_str()));
    out
}

/// Collects the ids of every node named `name`, in pre-order.
pub fn ids_named<'a>(link: &'a Link, name: &str) -> Vec<&'a Ufid> {
    let mut out = Vec::new();
    walk(link, Order::Pre, &mut |node| {
        if node.name == name {
            out.push(&node.id);
        }
    });
    out
}

/// Returns the node at zero-based in-order position `rank`.
pub fn nth_inorder(link: &Link, rank: usize) -> Option<&Node> {
    let mut nodes = Vec::new();
    walk(link, Order::In, &mut |node| nodes.push(node));
    nodes.get(rank).copied()
}
