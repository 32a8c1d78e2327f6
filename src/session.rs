use crate::errors;
use crate::tree::{AvlTree, TreeConfig, Ufid};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;
use uuid::Uuid;

/// A tree that can be handed to several readers or one writer at a time.
///
/// Rotations touch several nodes at once, so every mutation holds the write
/// lock for its whole duration; searches and traversals share the read lock.
#[derive(Clone, Default)]
pub struct SharedTree {
    inner: Arc<RwLock<AvlTree>>,
}

impl SharedTree {
    pub fn new(tree: AvlTree) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tree)),
        }
    }

    pub fn read(&self) -> Result<RwLockReadGuard<'_, AvlTree>, errors::Error> {
        self.inner
            .read()
            .map_err(|_| errors::Error::LockTree("Failed to acquire tree read lock".into()))
    }

    pub fn write(&self) -> Result<RwLockWriteGuard<'_, AvlTree>, errors::Error> {
        self.inner
            .write()
            .map_err(|_| errors::Error::LockTree("Failed to acquire tree write lock".into()))
    }
}

pub struct Session {
    pub id: Uuid,
    pub tree: SharedTree,
}

impl Session {
    pub fn open(config: TreeConfig) -> Self {
        let session = Session {
            id: Uuid::new_v4(),
            tree: SharedTree::new(AvlTree::with_config(config)),
        };
        info!(session_id = %session.id, policy = ?config.remove_policy, "Opened session.");
        session
    }

    pub fn close(&self) -> Result<(), errors::Error> {
        let tree = self.tree.read()?;
        info!(
            session_id = %self.id,
            records = tree.len(),
            height = tree.height(),
            root = ?tree.root_id().map(Ufid::as_str),
            rotations = ?tree.rotations(),
            "Closed session."
        );
        Ok(())
    }
}
