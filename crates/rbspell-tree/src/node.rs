// Node layout: color, key and index links into the arena

use std::fmt;

/// Node color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

/// Side of a node relative to its parent, or the scan direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// The opposite direction.
    pub fn flip(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Handle to a node inside one [`RbTree`](crate::RbTree).
///
/// A handle is a plain arena index. It stays valid across insertions.
/// Removing a node may move another node into the freed slot, so after a
/// removal only the handle returned by that removal is guaranteed to be
/// current; the tree rejects out-of-range handles with
/// [`TreeError::StaleHandle`](crate::TreeError::StaleHandle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One keyed position in the tree.
///
/// `None` links are sentinels: black, keyless and never allocated. Only the
/// root has no parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node<T> {
    pub(crate) color: Color,
    pub(crate) key: T,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<T> Node<T> {
    /// A freshly keyed node hanging below `parent`, with two sentinel
    /// children. The insert fixup decides its final color.
    pub(crate) fn new(key: T, parent: Option<NodeId>) -> Self {
        Self {
            color: Color::Black,
            key,
            parent,
            left: None,
            right: None,
        }
    }

    pub(crate) fn child(&self, dir: Direction) -> Option<NodeId> {
        match dir {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, dir: Direction, child: Option<NodeId>) {
        match dir {
            Direction::Left => self.left = child,
            Direction::Right => self.right = child,
        }
    }

    pub(crate) fn has_two_children(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }
}
