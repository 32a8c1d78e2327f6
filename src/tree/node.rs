use super::ufid::Ufid;

/// An owned, possibly empty subtree.
pub type Link = Option<Box<Node>>;

/// One stored record.
///
/// A node exclusively owns both children. `height` caches the number of levels
/// in the subtree rooted here (a leaf is 1) and must be refreshed with
/// [`Node::update_height`] after any change to `left` or `right`.
#[derive(Debug)]
pub struct Node {
    pub id: Ufid,
    pub name: String,
    pub left: Link,
    pub right: Link,
    height: usize,
}

impl Node {
    pub fn new(name: &str, id: Ufid) -> Self {
        Self {
            id,
            name: name.to_owned(),
            left: None,
            right: None,
            height: 1,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// Height of the left subtree minus height of the right subtree.
    pub fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    /// Returns the leftmost (smallest) node of this subtree.
    pub fn leftmost(&self) -> &Node {
        let mut current = self;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        current
    }
}

/// Height of a possibly empty subtree; an empty subtree has height 0.
pub fn height(link: &Link) -> usize {
    link.as_ref().map_or(0, |n| n.height())
}
