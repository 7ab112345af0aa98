// Mutable cursor: scan the tree in order and remove entries in place

use crate::TreeError;
use crate::node::NodeId;
use crate::tree::RbTree;

/// A cursor over an [`RbTree`] that can remove the key it points at.
///
/// The cursor always holds either a valid node handle or `None` (past the
/// end). Removing through the cursor moves it to the successor of the
/// removed key, so a forward scan that removes some keys visits every key
/// exactly once.
pub struct CursorMut<'a, T, C> {
    tree: &'a mut RbTree<T, C>,
    current: Option<NodeId>,
}

impl<'a, T, C> CursorMut<'a, T, C> {
    pub(crate) fn new(tree: &'a mut RbTree<T, C>, current: Option<NodeId>) -> Self {
        Self { tree, current }
    }

    /// Handle of the current node.
    pub fn id(&self) -> Option<NodeId> {
        self.current
    }

    /// Key at the cursor, `None` past the end.
    pub fn key(&self) -> Option<&T> {
        self.current.and_then(|id| self.tree.key(id))
    }

    /// Advance to the next larger key.
    pub fn move_next(&mut self) {
        self.current = self.current.and_then(|id| self.tree.successor(id));
    }

    /// Step back to the next smaller key.
    pub fn move_prev(&mut self) {
        self.current = self.current.and_then(|id| self.tree.predecessor(id));
    }

    /// Remove the key at the cursor and advance to its successor.
    ///
    /// Returns `Ok(None)` when the cursor is past the end.
    pub fn remove_current(&mut self) -> Result<Option<T>, TreeError<T>> {
        let Some(id) = self.current else {
            return Ok(None);
        };
        let removed = self.tree.kill(id)?;
        self.current = removed.successor;
        Ok(Some(removed.key))
    }
}

#[cfg(test)]
mod tests {
    use crate::RbTree;

    #[test]
    fn remove_every_other_key() {
        let mut tree: RbTree<i32> = (0..20).collect();
        let mut visited = Vec::new();
        {
            let mut cursor = tree.cursor_front_mut();
            while let Some(&k) = cursor.key() {
                visited.push(k);
                if k % 2 == 0 {
                    assert_eq!(cursor.remove_current().unwrap(), Some(k));
                } else {
                    cursor.move_next();
                }
            }
        }
        assert_eq!(visited, (0..20).collect::<Vec<_>>());
        assert_eq!(
            tree.iter().copied().collect::<Vec<_>>(),
            (0..20).filter(|k| k % 2 == 1).collect::<Vec<_>>()
        );
        tree.check_invariants().unwrap();
    }

    #[test]
    fn remove_everything_through_cursor() {
        let mut tree: RbTree<i32> = [5, 3, 8, 1, 4, 7, 9, 2, 6].into_iter().collect();
        let mut removed = Vec::new();
        {
            let mut cursor = tree.cursor_front_mut();
            while let Some(k) = cursor.remove_current().unwrap() {
                removed.push(k);
            }
        }
        assert_eq!(removed, (1..=9).collect::<Vec<_>>());
        assert!(tree.is_empty());
        tree.check_invariants().unwrap();
    }

    #[test]
    fn move_prev_and_next() {
        let mut tree: RbTree<i32> = [1, 2, 3].into_iter().collect();
        let mut cursor = tree.cursor_front_mut();
        cursor.move_next();
        assert_eq!(cursor.key(), Some(&2));
        cursor.move_prev();
        assert_eq!(cursor.key(), Some(&1));
        cursor.move_prev();
        assert_eq!(cursor.key(), None);
        cursor.move_next();
        assert_eq!(cursor.key(), None);
    }

    #[test]
    fn cursor_on_empty_tree() {
        let mut tree: RbTree<i32> = RbTree::new();
        let mut cursor = tree.cursor_front_mut();
        assert_eq!(cursor.id(), None);
        assert_eq!(cursor.remove_current().unwrap(), None);
    }

    #[test]
    fn cursor_at_stale_handle_is_past_end() {
        let mut tree: RbTree<i32> = [1].into_iter().collect();
        let stale = crate::NodeId(4);
        let cursor = tree.cursor_mut_at(stale);
        assert_eq!(cursor.key(), None);
    }
}
