// Structural validator for the red-black invariants

use std::cmp::Ordering;

use crate::TreeError;
use crate::node::{Color, NodeId};
use crate::tree::RbTree;

impl<T, C> RbTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Walk the whole tree and verify every structural invariant:
    ///
    /// - the root is black and has no parent,
    /// - no red node has a red parent,
    /// - all paths to a sentinel carry the same number of black nodes,
    /// - every child's parent link points back at its parent,
    /// - keys are strictly ascending in order,
    /// - every arena slot is reachable from the root.
    ///
    /// Returns the black-height of the root (black nodes below the root down
    /// to and including the sentinel; `0` for an empty tree).
    pub fn check_invariants(&self) -> Result<usize, TreeError<T>> {
        let Some(root) = self.root else {
            if !self.nodes.is_empty() {
                return Err(TreeError::InvariantViolation("empty root with allocated nodes"));
            }
            return Ok(0);
        };
        if !self.is_valid(root) {
            return Err(TreeError::InvariantViolation("root handle out of range"));
        }
        if self.node(root).parent.is_some() {
            return Err(TreeError::InvariantViolation("root has a parent"));
        }
        if self.node(root).color != Color::Black {
            return Err(TreeError::InvariantViolation("root is red"));
        }

        let mut reachable = 0;
        let height = self.check_subtree(Some(root), None, &mut reachable)?;
        if reachable != self.nodes.len() {
            return Err(TreeError::InvariantViolation("unreachable nodes in the arena"));
        }

        let mut previous: Option<&T> = None;
        for key in self.iter() {
            if let Some(prev) = previous {
                if self.compare_keys(prev, key) != Ordering::Less {
                    return Err(TreeError::InvariantViolation("keys out of order"));
                }
            }
            previous = Some(key);
        }

        // The root is black, so subtracting it gives the height below it.
        Ok(height - 1)
    }

    /// Black nodes on every path from `link` down to a sentinel, counting
    /// both `link` and the sentinel.
    fn check_subtree(
        &self,
        link: Option<NodeId>,
        parent: Option<NodeId>,
        reachable: &mut usize,
    ) -> Result<usize, TreeError<T>> {
        let Some(id) = link else {
            return Ok(1);
        };
        if !self.is_valid(id) {
            return Err(TreeError::InvariantViolation("child handle out of range"));
        }
        *reachable += 1;
        if *reachable > self.nodes.len() {
            return Err(TreeError::InvariantViolation("cycle in child links"));
        }

        let node = self.node(id);
        if node.parent != parent {
            return Err(TreeError::InvariantViolation("parent link disagrees with child link"));
        }
        if node.color == Color::Red && self.color_of(parent) == Color::Red {
            return Err(TreeError::InvariantViolation("red node with a red parent"));
        }

        let left = self.check_subtree(node.left, Some(id), reachable)?;
        let right = self.check_subtree(node.right, Some(id), reachable)?;
        if left != right {
            return Err(TreeError::InvariantViolation("unequal black-height"));
        }
        Ok(left + usize::from(node.color == Color::Black))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Direction;

    fn tree_of(keys: &[i32]) -> RbTree<i32> {
        let mut tree = RbTree::new();
        for &k in keys {
            tree.insert(k).unwrap();
        }
        tree
    }

    #[test]
    fn empty_tree_has_zero_height() {
        let tree: RbTree<i32> = RbTree::new();
        assert_eq!(tree.check_invariants().unwrap(), 0);
    }

    #[test]
    fn single_node_height() {
        assert_eq!(tree_of(&[1]).check_invariants().unwrap(), 1);
    }

    #[test]
    fn detects_red_root() {
        let mut tree = tree_of(&[1]);
        let root = tree.root().unwrap();
        tree.set_color(root, Color::Red);
        assert!(tree.check_invariants().unwrap_err().is_fatal());
    }

    #[test]
    fn detects_red_red() {
        let mut tree = tree_of(&[2, 1, 3, 4]);
        // 4 hangs red below black 3; painting 3 red breaks the rule.
        let three = tree.find(&3).unwrap();
        tree.set_color(three, Color::Red);
        assert!(matches!(
            tree.check_invariants(),
            Err(TreeError::InvariantViolation("red node with a red parent"))
        ));
    }

    #[test]
    fn detects_unequal_black_height() {
        let mut tree = tree_of(&[2, 1, 3]);
        let one = tree.find(&1).unwrap();
        tree.set_color(one, Color::Black);
        assert!(matches!(
            tree.check_invariants(),
            Err(TreeError::InvariantViolation("unequal black-height"))
        ));
    }

    #[test]
    fn detects_broken_parent_link() {
        let mut tree = tree_of(&[2, 1, 3]);
        let root = tree.root().unwrap();
        let left = tree.child_of(root, Direction::Left).unwrap();
        let right = tree.child_of(root, Direction::Right).unwrap();
        tree.node_mut(left).parent = Some(right);
        assert!(tree.check_invariants().is_err());
    }

    #[test]
    fn detects_out_of_order_keys() {
        let mut tree = tree_of(&[2, 1, 3]);
        let one = tree.find(&1).unwrap();
        tree.node_mut(one).key = 5;
        assert!(matches!(
            tree.check_invariants(),
            Err(TreeError::InvariantViolation("keys out of order"))
        ));
    }
}
