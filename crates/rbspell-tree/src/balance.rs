// Rotation, insert fixup (redden), removal (kill) and removal fixup (blacken)
//
// Both fixups are loops over a working node instead of recursive calls; the
// number of iterations is bounded by the tree height either way.

use crate::TreeError;
use crate::node::{Color, Direction, NodeId};
use crate::tree::{RbTree, Removed};

impl<T, C> RbTree<T, C> {
    /// Rotate the subtree rooted at `id` toward `dir`, promoting the child on
    /// the opposite side. In-order key sequence is preserved.
    ///
    /// Rotating a sentinel into place is an [`InvariantViolation`]; the
    /// fixups never ask for it on a well-formed tree.
    ///
    /// [`InvariantViolation`]: TreeError::InvariantViolation
    pub(crate) fn rotate(&mut self, id: NodeId, dir: Direction) -> Result<(), TreeError<T>> {
        let pivot = self
            .child(id, dir.flip())
            .ok_or(TreeError::InvariantViolation("rotating a sentinel into an internal position"))?;
        let inner = self.child(pivot, dir);
        let parent = self.node(id).parent;

        self.replace_child(parent, id, Some(pivot))?;
        self.node_mut(pivot).parent = parent;

        self.set_child(id, dir.flip(), inner);
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(id);
        }

        self.set_child(pivot, dir, Some(id));
        self.node_mut(id).parent = Some(pivot);
        Ok(())
    }

    /// Restore the red-black invariants after `id` received a key.
    pub(crate) fn redden(&mut self, mut id: NodeId) -> Result<(), TreeError<T>> {
        loop {
            let Some(parent) = self.node(id).parent else {
                // Root: stays black, the whole tree grows one black level.
                self.set_color(id, Color::Black);
                return Ok(());
            };
            self.set_color(id, Color::Red);
            if self.node(parent).color == Color::Black {
                return Ok(());
            }

            // A red parent is never the root, so the grandparent exists.
            let grandparent = self
                .node(parent)
                .parent
                .ok_or(TreeError::InvariantViolation("red node without a parent"))?;
            let parent_dir = self.side(grandparent, Some(parent))?;
            let uncle = self.child(grandparent, parent_dir.flip());

            if let Some(uncle) = uncle.filter(|&u| self.node(u).color == Color::Red) {
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                id = grandparent;
                continue;
            }

            let dir = self.side(parent, Some(id))?;
            if dir != parent_dir {
                // Zig-zag: lift `id` above its parent, then handle the old
                // parent, which now sits in a straight line below it.
                self.rotate(parent, parent_dir)?;
                id = parent;
                continue;
            }

            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            self.rotate(grandparent, parent_dir.flip())?;
            return Ok(());
        }
    }

    /// Remove the node at `id` from the tree.
    ///
    /// A node with two children takes over its in-order successor's key and
    /// the successor's node is spliced out instead; in that case the returned
    /// successor handle is `id` itself. All other handles except the
    /// returned one may be renumbered by the removal.
    pub fn kill(&mut self, id: NodeId) -> Result<Removed<T>, TreeError<T>> {
        if !self.is_valid(id) {
            return Err(TreeError::StaleHandle(id));
        }

        let mut successor = self.successor(id);
        let target = if self.node(id).has_two_children() {
            let next = successor.ok_or(TreeError::InvariantViolation(
                "node with a right subtree has no successor",
            ))?;
            self.swap_keys(id, next);
            successor = Some(id);
            next
        } else {
            id
        };

        let (parent, replacement, color) = {
            let node = self.node(target);
            (node.parent, node.left.or(node.right), node.color)
        };
        self.replace_child(parent, target, replacement)?;
        if let Some(replacement) = replacement {
            self.node_mut(replacement).parent = parent;
        }
        if color == Color::Black {
            self.blacken(replacement, parent)?;
        }

        let (key, moved_from) = self.release(target)?;
        if moved_from.is_some() && successor == moved_from {
            successor = Some(target);
        }
        Ok(Removed { key, successor })
    }

    /// Resolve the double-black deficit carried by `node`, a child of
    /// `parent` (either may be a sentinel/`None` link).
    pub(crate) fn blacken(
        &mut self,
        mut node: Option<NodeId>,
        mut parent: Option<NodeId>,
    ) -> Result<(), TreeError<T>> {
        loop {
            if let Some(red) = node.filter(|&n| self.node(n).color == Color::Red) {
                self.set_color(red, Color::Black);
                return Ok(());
            }
            let Some(p) = parent else {
                // Root absorbs the deficit: the tree loses one black level.
                return Ok(());
            };

            let dir = self.side(p, node)?;
            let sibling = self
                .child(p, dir.flip())
                .ok_or(TreeError::InvariantViolation("double-black node without a sibling"))?;

            if self.node(sibling).color == Color::Red {
                self.set_color(sibling, Color::Black);
                self.set_color(p, Color::Red);
                self.rotate(p, dir)?;
                continue;
            }

            let near = self.child(sibling, dir);
            let far = self.child(sibling, dir.flip());
            let near_red = near.filter(|&n| self.node(n).color == Color::Red);
            let far_red = far.filter(|&f| self.node(f).color == Color::Red);

            match (near_red, far_red) {
                (_, Some(far)) => {
                    let parent_color = self.node(p).color;
                    self.set_color(sibling, parent_color);
                    self.set_color(p, Color::Black);
                    self.set_color(far, Color::Black);
                    self.rotate(p, dir)?;
                    return Ok(());
                }
                (Some(near), None) => {
                    // Turn the near red nephew into a far one.
                    self.set_color(near, Color::Black);
                    self.set_color(sibling, Color::Red);
                    self.rotate(sibling, dir.flip())?;
                }
                (None, None) => {
                    self.set_color(sibling, Color::Red);
                    node = Some(p);
                    parent = self.node(p).parent;
                }
            }
        }
    }
}
