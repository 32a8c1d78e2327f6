//! The AVL tree is the structure that holds the roster.
//!
//! It is a binary search tree ordered by the numeric value of each record's
//! identifier, kept height-balanced so that every lookup, insert and removal
//! walks at most O(log n) levels:
//!
//! - for every node, all ids in its left subtree are smaller and all ids in its
//!   right subtree are larger;
//! - for every node, the heights of its two subtrees differ by at most one.
//!
//! Balance is restored on the way back up from each insertion by at most one
//! single or double rotation. Names are not unique and are not indexed, so a
//! search by name is a full pre-order walk.
//!
//! | **Operation**       | **Cost**    |
//! |---------------------|-------------|
//! | insert              | O(log n)    |
//! | remove              | O(log n)    |
//! | remove by rank      | O(n)        |
//! | search by id        | O(log n)    |
//! | search by name      | O(n)        |
//! | traversals          | O(n)        |
//! | height              | O(1)        |
//!
pub mod node;
pub mod rotation;
pub mod traversal;
pub mod ufid;

use crate::errors::Error;
use node::Link;
use rotation::Rotations;
use std::cmp::Ordering;
use tracing::debug;
use traversal::Order;
pub use ufid::Ufid;

/// What a removal does to the ancestors of the removed position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum RemovePolicy {
    /// Rebalance every ancestor on the way back up, like an insert does.
    #[default]
    Rebalance,
    /// Refresh heights only; never rotate on removal.
    Plain,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TreeConfig {
    pub remove_policy: RemovePolicy,
}

/// A height-balanced search tree of `(name, id)` records keyed by id.
#[derive(Debug, Default)]
pub struct AvlTree {
    root: Link,
    len: usize,
    config: TreeConfig,
    rotations: Rotations,
}

impl AvlTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TreeConfig) -> Self {
        Self {
            config,
            ..Self::new()
        }
    }

    /// Inserts a record.
    ///
    /// # Errors
    /// Returns `Error::DuplicateKey` if `id` is already stored; the tree is left
    /// unchanged.
    pub fn insert(&mut self, name: &str, id: Ufid) -> Result<(), Error> {
        insert_at(&mut self.root, name, &id, &mut self.rotations)?;
        self.len += 1;
        debug!(id = %id, name, "Inserted record.");
        Ok(())
    }

    /// Removes the record with the given id.
    ///
    /// A string that is not a well-formed id can never be stored, so it is
    /// reported as not found.
    ///
    /// # Errors
    /// Returns `Error::NotFound` if no record has this id.
    pub fn remove(&mut self, id: &str) -> Result<(), Error> {
        let key: Ufid = id
            .parse()
            .map_err(|_| err!(NotFound, "No record with id '{}'", id))?;
        remove_at(
            &mut self.root,
            &key,
            self.config.remove_policy,
            &mut self.rotations,
        )?;
        self.len -= 1;
        debug!(id = %key, "Removed record.");
        Ok(())
    }

    /// Removes the record at zero-based in-order position `rank`.
    ///
    /// # Errors
    /// Returns `Error::NotFound` if `rank` is not below the number of records.
    pub fn remove_by_rank(&mut self, rank: usize) -> Result<(), Error> {
        let id = traversal::nth_inorder(&self.root, rank)
            .map(|node| node.id.clone())
            .ok_or_else(|| err!(NotFound, "No record at rank {} of {}", rank, self.len))?;
        self.remove(id.as_str())
    }

    /// Returns the name stored under `id`.
    pub fn search_by_id(&self, id: &str) -> Option<&str> {
        let key: Ufid = id.parse().ok()?;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.id) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(node.name.as_str()),
            };
        }
        None
    }

    /// Returns the ids of every record named `name`, in pre-order.
    pub fn search_by_name(&self, name: &str) -> Vec<&Ufid> {
        traversal::ids_named(&self.root, name)
    }

    pub fn preorder(&self) -> Vec<&str> {
        traversal::names(&self.root, Order::Pre)
    }

    pub fn inorder(&self) -> Vec<&str> {
        traversal::names(&self.root, Order::In)
    }

    pub fn postorder(&self) -> Vec<&str> {
        traversal::names(&self.root, Order::Post)
    }

    /// Number of levels in the tree; 0 when empty.
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root_id(&self) -> Option<&Ufid> {
        self.root.as_ref().map(|node| &node.id)
    }

    pub fn rotations(&self) -> Rotations {
        self.rotations
    }
}

fn insert_at(
    slot: &mut Link,
    name: &str,
    id: &Ufid,
    rotations: &mut Rotations,
) -> Result<(), Error> {
    let Some(node) = slot.as_mut() else {
        *slot = Some(Box::new(node::Node::new(name, id.clone())));
        return Ok(());
    };

    match id.cmp(&node.id) {
        Ordering::Less => insert_at(&mut node.left, name, id, rotations)?,
        Ordering::Greater => insert_at(&mut node.right, name, id, rotations)?,
        Ordering::Equal => {
            return Err(err!(DuplicateKey, "Identifier {} is already stored", id));
        }
    }
    node.update_height();

    if let Some(node) = slot.take() {
        *slot = Some(rotation::rebalance_after_insert(node, id, rotations));
    }
    Ok(())
}

fn remove_at(
    slot: &mut Link,
    key: &Ufid,
    policy: RemovePolicy,
    rotations: &mut Rotations,
) -> Result<(), Error> {
    let Some(node) = slot.as_mut() else {
        return Err(err!(NotFound, "No record with id {}", key));
    };

    match key.cmp(&node.id) {
        Ordering::Less => remove_at(&mut node.left, key, policy, rotations)?,
        Ordering::Greater => remove_at(&mut node.right, key, policy, rotations)?,
        Ordering::Equal => return unlink(slot, policy, rotations),
    }
    node.update_height();

    settle(slot, policy, rotations);
    Ok(())
}

/// Removes the node at `slot` itself.
///
/// A node with two children keeps its position: it takes over the name and id
/// of its in-order successor, which is then removed from the right subtree.
fn unlink(slot: &mut Link, policy: RemovePolicy, rotations: &mut Rotations) -> Result<(), Error> {
    let Some(mut node) = slot.take() else {
        return Ok(());
    };

    match (node.left.take(), node.right.take()) {
        (None, None) => {}
        (Some(child), None) | (None, Some(child)) => *slot = Some(child),
        (Some(left), Some(right)) => {
            let successor = right.leftmost();
            node.name = successor.name.clone();
            node.id = successor.id.clone();
            node.left = Some(left);
            node.right = Some(right);

            let successor_id = node.id.clone();
            remove_at(&mut node.right, &successor_id, policy, rotations)?;
            node.update_height();
            *slot = Some(node);
            settle(slot, policy, rotations);
        }
    }
    Ok(())
}

fn settle(slot: &mut Link, policy: RemovePolicy, rotations: &mut Rotations) {
    if policy == RemovePolicy::Plain {
        return;
    }
    if let Some(node) = slot.take() {
        *slot = Some(rotation::rebalance_after_remove(node, rotations));
    }
}
