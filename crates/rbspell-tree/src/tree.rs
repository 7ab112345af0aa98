// RbTree: the ordered-set container
//
// The tree owns a flat arena of nodes and the root link. Every structural
// change goes through `&mut RbTree`, so a rotation or removal that changes
// the root is always visible to the owner.
//
// Direction convention: keys comparing `Less` than a node live in its left
// subtree, `Greater` in its right subtree. Rotation and removal use the same
// convention.

use std::cmp::Ordering;
use std::fmt;

use crate::TreeError;
use crate::cursor::CursorMut;
use crate::node::{Color, Direction, Node, NodeId};

/// A red-black ordered set of `T`, ordered by the comparator `C`.
///
/// The comparator must be a total order. It may look at only part of `T`
/// (e.g. a word but not its line number); equal keys are rejected on insert
/// and the first one stored wins.
pub struct RbTree<T, C = fn(&T, &T) -> Ordering> {
    pub(crate) nodes: Vec<Node<T>>,
    pub(crate) root: Option<NodeId>,
    compare: C,
}

/// Outcome of [`RbTree::kill`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removed<T> {
    /// The key that was removed from the tree.
    pub key: T,
    /// Handle of the in-order successor of the removed key, valid after the
    /// removal. `None` if the removed key was the largest.
    pub successor: Option<NodeId>,
}

impl<T: Ord> RbTree<T> {
    /// Create an empty tree ordered by `T`'s `Ord` implementation.
    pub fn new() -> Self {
        Self::with_comparator(<T as Ord>::cmp as fn(&T, &T) -> Ordering)
    }
}

impl<T: Ord> Default for RbTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> RbTree<T, C> {
    /// Create an empty tree ordered by a three-way comparator.
    pub fn with_comparator(compare: C) -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            compare,
        }
    }

    /// Number of keys in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Remove every key, keeping the arena allocation.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Handle of the root node, `None` for an empty tree.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Returns `true` if `id` refers to a node of this tree.
    pub fn is_valid(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Key stored at `id`.
    pub fn key(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id.index()).map(|n| &n.key)
    }

    /// Color of the node at `id`.
    pub fn color(&self, id: NodeId) -> Option<Color> {
        self.nodes.get(id.index()).map(|n| n.color)
    }

    /// Parent of the node at `id` (`None` for the root or a stale handle).
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.index()).and_then(|n| n.parent)
    }

    /// Child of the node at `id` on side `dir` (`None` for a sentinel).
    pub fn child_of(&self, id: NodeId, dir: Direction) -> Option<NodeId> {
        self.nodes.get(id.index()).and_then(|n| n.child(dir))
    }

    /// Open a mutable cursor on the smallest key.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T, C> {
        let front = self.minimum();
        CursorMut::new(self, front)
    }

    /// Open a mutable cursor on `id`. A stale handle yields a cursor that is
    /// already past the end.
    pub fn cursor_mut_at(&mut self, id: NodeId) -> CursorMut<'_, T, C> {
        let current = self.is_valid(id).then_some(id);
        CursorMut::new(self, current)
    }

    /// Keep only the keys for which `keep` returns `true`, scanning in
    /// ascending order and removing the others in place.
    pub fn retain<F>(&mut self, mut keep: F) -> Result<(), TreeError<T>>
    where
        F: FnMut(&T) -> bool,
    {
        let mut cursor = self.cursor_front_mut();
        while let Some(key) = cursor.key() {
            if keep(key) {
                cursor.move_next();
            } else {
                cursor.remove_current()?;
            }
        }
        Ok(())
    }

    // -- arena access --------------------------------------------------------

    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id.index()]
    }

    pub(crate) fn child(&self, id: NodeId, dir: Direction) -> Option<NodeId> {
        self.node(id).child(dir)
    }

    pub(crate) fn set_child(&mut self, id: NodeId, dir: Direction, child: Option<NodeId>) {
        self.node_mut(id).set_child(dir, child);
    }

    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        self.node_mut(id).color = color;
    }

    /// Color of a possibly-sentinel link. Sentinels are black.
    pub(crate) fn color_of(&self, link: Option<NodeId>) -> Color {
        link.map_or(Color::Black, |id| self.node(id).color)
    }

    /// Which side of `parent` the link `child` hangs on.
    ///
    /// A sentinel child is matched against the first sentinel slot of the
    /// parent; callers only ask for a sentinel's side when the other slot is
    /// occupied.
    pub(crate) fn side(
        &self,
        parent: NodeId,
        child: Option<NodeId>,
    ) -> Result<Direction, TreeError<T>> {
        let p = self.node(parent);
        if p.left == child {
            Ok(Direction::Left)
        } else if p.right == child {
            Ok(Direction::Right)
        } else {
            Err(TreeError::InvariantViolation(
                "parent link does not match any child link",
            ))
        }
    }

    /// Point whatever owned `old` (its parent, or the root link) at `new`.
    pub(crate) fn replace_child(
        &mut self,
        parent: Option<NodeId>,
        old: NodeId,
        new: Option<NodeId>,
    ) -> Result<(), TreeError<T>> {
        match parent {
            Some(p) => {
                let dir = self.side(p, Some(old))?;
                self.set_child(p, dir, new);
            }
            None => {
                if self.root != Some(old) {
                    return Err(TreeError::InvariantViolation(
                        "parentless node is not the root",
                    ));
                }
                self.root = new;
            }
        }
        Ok(())
    }

    /// Swap the stored keys of two distinct nodes, leaving colors and links.
    pub(crate) fn swap_keys(&mut self, a: NodeId, b: NodeId) {
        let (lo, hi) = if a.index() < b.index() {
            (a.index(), b.index())
        } else {
            (b.index(), a.index())
        };
        if lo == hi {
            return;
        }
        let (head, tail) = self.nodes.split_at_mut(hi);
        std::mem::swap(&mut head[lo].key, &mut tail[0].key);
    }

    /// Free the slot of an already unlinked node.
    ///
    /// The last node of the arena is moved into the freed slot and its
    /// neighbors are relinked. Returns the removed key and, if a node was
    /// moved, its old handle (its new handle is `id`).
    pub(crate) fn release(&mut self, id: NodeId) -> Result<(T, Option<NodeId>), TreeError<T>> {
        let last = NodeId(self.nodes.len() - 1);
        let removed = self.nodes.swap_remove(id.index());
        if id == last {
            return Ok((removed.key, None));
        }

        let (parent, left, right) = {
            let moved = self.node(id);
            (moved.parent, moved.left, moved.right)
        };
        match parent {
            Some(p) => {
                let dir = self.side(p, Some(last))?;
                self.set_child(p, dir, Some(id));
            }
            None => {
                if self.root != Some(last) {
                    return Err(TreeError::InvariantViolation(
                        "relocated parentless node is not the root",
                    ));
                }
                self.root = Some(id);
            }
        }
        for child in [left, right].into_iter().flatten() {
            self.node_mut(child).parent = Some(id);
        }
        Ok((removed.key, Some(last)))
    }
}

impl<T, C> RbTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Insert `key`, returning the handle of its node.
    ///
    /// Fails with [`TreeError::DuplicateKey`] (handing `key` back) if an
    /// equal key is already stored; the tree is left unchanged.
    pub fn insert(&mut self, key: T) -> Result<NodeId, TreeError<T>> {
        let mut parent = None;
        let mut dir = Direction::Left;
        let mut cursor = self.root;
        while let Some(id) = cursor {
            dir = match (self.compare)(&key, &self.node(id).key) {
                Ordering::Less => Direction::Left,
                Ordering::Greater => Direction::Right,
                Ordering::Equal => return Err(TreeError::DuplicateKey(key)),
            };
            parent = Some(id);
            cursor = self.child(id, dir);
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(key, parent));
        match parent {
            Some(p) => self.set_child(p, dir, Some(id)),
            None => self.root = Some(id),
        }
        self.redden(id)?;
        Ok(id)
    }

    /// Remove the key equal to `key` and return the stored key.
    ///
    /// Fails with [`TreeError::KeyNotFound`] before touching the tree if no
    /// such key exists.
    pub fn remove(&mut self, key: &T) -> Result<T, TreeError<T>> {
        let id = self.find(key).ok_or(TreeError::KeyNotFound)?;
        Ok(self.kill(id)?.key)
    }

    /// Handle of the node whose key equals `key`.
    pub fn find(&self, key: &T) -> Option<NodeId> {
        let mut cursor = self.root;
        while let Some(id) = cursor {
            cursor = match (self.compare)(key, &self.node(id).key) {
                Ordering::Less => self.child(id, Direction::Left),
                Ordering::Greater => self.child(id, Direction::Right),
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    /// Returns `true` if a key equal to `key` is stored.
    pub fn lookup(&self, key: &T) -> bool {
        self.find(key).is_some()
    }

    /// The stored key equal to `key`.
    pub fn get(&self, key: &T) -> Option<&T> {
        self.find(key).map(|id| &self.node(id).key)
    }

    pub(crate) fn compare_keys(&self, a: &T, b: &T) -> Ordering {
        (self.compare)(a, b)
    }
}

impl<T: Ord> FromIterator<T> for RbTree<T> {
    /// Build a set, silently dropping duplicates.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = RbTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T, C> Extend<T> for RbTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Insert every key, silently dropping duplicates.
    ///
    /// # Panics
    ///
    /// Panics if the balancing code reports an invariant violation, as
    /// `Extend` has no way to return it.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            match self.insert(key) {
                Ok(_) | Err(TreeError::DuplicateKey(_)) => {}
                Err(e) => panic!("corrupt tree during extend: {}", e.without_key()),
            }
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for RbTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(keys: &[i32]) -> RbTree<i32> {
        let mut tree = RbTree::new();
        for &k in keys {
            tree.insert(k).unwrap();
        }
        tree
    }

    #[test]
    fn empty_tree() {
        let tree: RbTree<i32> = RbTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);
        assert_eq!(tree.minimum(), None);
        assert!(!tree.lookup(&1));
    }

    #[test]
    fn first_node_is_black_root() {
        let tree = tree_of(&[10]);
        let root = tree.root().unwrap();
        assert_eq!(tree.color(root), Some(Color::Black));
        assert_eq!(tree.key(root), Some(&10));
        assert_eq!(tree.parent(root), None);
    }

    #[test]
    fn children_of_black_root_are_red() {
        let tree = tree_of(&[10, 5, 15]);
        let root = tree.root().unwrap();
        let left = tree.child_of(root, Direction::Left).unwrap();
        let right = tree.child_of(root, Direction::Right).unwrap();
        assert_eq!(tree.key(left), Some(&5));
        assert_eq!(tree.key(right), Some(&15));
        assert_eq!(tree.color(left), Some(Color::Red));
        assert_eq!(tree.color(right), Some(Color::Red));
    }

    #[test]
    fn ascending_inserts_rotate_root() {
        let tree = tree_of(&[1, 2, 3]);
        let root = tree.root().unwrap();
        assert_eq!(tree.key(root), Some(&2));
        assert_eq!(tree.color(root), Some(Color::Black));
    }

    #[test]
    fn zig_zag_insert_rotates_twice() {
        let tree = tree_of(&[3, 1, 2]);
        let root = tree.root().unwrap();
        assert_eq!(tree.key(root), Some(&2));
        assert_eq!(tree.check_invariants().unwrap(), 1);
    }

    #[test]
    fn duplicate_insert_returns_key_and_leaves_tree_unchanged() {
        let mut tree = tree_of(&[8, 3, 10, 1, 6, 14, 4, 7, 13]);
        let nodes_before = tree.nodes.clone();
        let root_before = tree.root;

        match tree.insert(6) {
            Err(TreeError::DuplicateKey(k)) => assert_eq!(k, 6),
            other => panic!("expected DuplicateKey, got {other:?}"),
        }
        assert_eq!(tree.nodes, nodes_before);
        assert_eq!(tree.root, root_before);
    }

    #[test]
    fn remove_missing_key_fails() {
        let mut tree = tree_of(&[1, 2, 3]);
        assert!(matches!(tree.remove(&4), Err(TreeError::KeyNotFound)));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn remove_returns_stored_key() {
        let mut tree = tree_of(&[1, 2, 3]);
        assert_eq!(tree.remove(&2).unwrap(), 2);
        assert!(!tree.lookup(&2));
        assert_eq!(tree.len(), 2);
        tree.check_invariants().unwrap();
    }

    #[test]
    fn remove_last_key_empties_tree() {
        let mut tree = tree_of(&[42]);
        tree.remove(&42).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);
    }

    #[test]
    fn comparator_on_part_of_key_keeps_first() {
        let mut tree = RbTree::with_comparator(|a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0));
        tree.insert((1, 'a')).unwrap();
        assert!(matches!(
            tree.insert((1, 'b')),
            Err(TreeError::DuplicateKey((1, 'b')))
        ));
        assert_eq!(tree.get(&(1, 'z')), Some(&(1, 'a')));
    }

    #[test]
    fn reverse_comparator() {
        let mut tree = RbTree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
        for k in 0..10 {
            tree.insert(k).unwrap();
        }
        let keys: Vec<i32> = tree.iter().copied().collect();
        assert_eq!(keys, (0..10).rev().collect::<Vec<_>>());
    }

    #[test]
    fn retain_removes_in_place() {
        let mut tree = tree_of(&[5, 1, 9, 2, 8, 3, 7, 4, 6]);
        tree.retain(|k| k % 3 != 0).unwrap();
        let keys: Vec<i32> = tree.iter().copied().collect();
        assert_eq!(keys, vec![1, 2, 4, 5, 7, 8]);
        tree.check_invariants().unwrap();
    }

    #[test]
    fn clear_resets_tree() {
        let mut tree = tree_of(&[1, 2, 3]);
        tree.clear();
        assert!(tree.is_empty());
        tree.insert(7).unwrap();
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn from_iter_drops_duplicates() {
        let tree: RbTree<&str> = ["b", "a", "b", "c", "a"].into_iter().collect();
        assert_eq!(tree.len(), 3);
        assert_eq!(format!("{tree:?}"), r#"{"a", "b", "c"}"#);
    }

    #[test]
    fn stale_handle_queries_return_none() {
        let tree = tree_of(&[1]);
        let stale = NodeId(5);
        assert!(!tree.is_valid(stale));
        assert_eq!(tree.key(stale), None);
        assert_eq!(tree.color(stale), None);
    }
}
