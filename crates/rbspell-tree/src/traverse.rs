// In-order traversal computed from the node links alone

use std::iter::FusedIterator;

use crate::node::{Direction, NodeId};
use crate::tree::RbTree;

impl<T, C> RbTree<T, C> {
    /// Handle of the node with the smallest key.
    pub fn minimum(&self) -> Option<NodeId> {
        self.root.map(|root| self.extreme(root, Direction::Left))
    }

    /// Handle of the node with the largest key.
    pub fn maximum(&self) -> Option<NodeId> {
        self.root.map(|root| self.extreme(root, Direction::Right))
    }

    /// In-order successor of `id`, `None` after the largest key or for a
    /// stale handle.
    pub fn successor(&self, id: NodeId) -> Option<NodeId> {
        self.scan(id, Direction::Right)
    }

    /// In-order predecessor of `id`, `None` before the smallest key or for a
    /// stale handle.
    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        self.scan(id, Direction::Left)
    }

    /// Step one position in `dir` order.
    ///
    /// With a child on the `dir` side, the answer is the opposite-most node of
    /// that subtree. Otherwise climb while we are the `dir` child; the first
    /// ancestor reached from the other side is the answer.
    fn scan(&self, id: NodeId, dir: Direction) -> Option<NodeId> {
        if !self.is_valid(id) {
            return None;
        }
        if let Some(child) = self.child(id, dir) {
            return Some(self.extreme(child, dir.flip()));
        }
        let mut current = id;
        while let Some(parent) = self.node(current).parent {
            if self.child(parent, dir) != Some(current) {
                return Some(parent);
            }
            current = parent;
        }
        None
    }

    /// Follow `dir` links from `id` until the next one is a sentinel.
    fn extreme(&self, mut id: NodeId, dir: Direction) -> NodeId {
        while let Some(child) = self.child(id, dir) {
            id = child;
        }
        id
    }

    /// Borrowing iterator over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, T, C> {
        Iter {
            tree: self,
            next: self.minimum(),
            remaining: self.len(),
        }
    }
}

/// Ascending iterator over the keys of an [`RbTree`].
pub struct Iter<'a, T, C> {
    tree: &'a RbTree<T, C>,
    next: Option<NodeId>,
    remaining: usize,
}

impl<'a, T, C> Iterator for Iter<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.tree.successor(id);
        self.remaining = self.remaining.saturating_sub(1);
        self.tree.key(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, C> ExactSizeIterator for Iter<'_, T, C> {}

impl<T, C> FusedIterator for Iter<'_, T, C> {}

impl<'a, T, C> IntoIterator for &'a RbTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
