// rbspell-tree: red-black ordered set backed by a flat node arena.
//
// Nodes live in a `Vec` and refer to each other by `NodeId`. A missing child
// index stands in for the black sentinel leaf, so no leaf is ever allocated.
// Removing a node compacts the arena by moving the last node into the freed
// slot.
//
// Architecture:
//   - `node`: node layout, colors and directions
//   - `tree`: the `RbTree` container (insert, remove, search)
//   - `balance`: rotation and the insert/remove fixups
//   - `traverse`: successor/predecessor scans and the borrowing iterator
//   - `cursor`: `CursorMut` for removing entries while scanning
//   - `check`: structural validator used by tests and debug tooling

pub mod balance;
pub mod check;
pub mod cursor;
pub mod node;
pub mod traverse;
pub mod tree;

pub use cursor::CursorMut;
pub use node::{Color, Direction, NodeId};
pub use traverse::Iter;
pub use tree::{RbTree, Removed};

/// Error type for tree operations.
///
/// `DuplicateKey` and `KeyNotFound` are reported before any mutation and
/// leave the tree untouched. `InvariantViolation` means the balancing code
/// reached a state it rules out; the tree must be considered corrupt.
#[derive(Debug, thiserror::Error)]
pub enum TreeError<T> {
    /// An equal key is already stored. The rejected key is handed back.
    #[error("key already exists in the tree")]
    DuplicateKey(T),
    #[error("key not found in the tree")]
    KeyNotFound,
    /// The handle does not refer to a node of this tree (any more).
    #[error("stale node handle {0}")]
    StaleHandle(NodeId),
    #[error("red-black invariant violated: {0}")]
    InvariantViolation(&'static str),
}

impl<T> TreeError<T> {
    /// Returns `true` for errors that indicate a corrupt tree.
    pub fn is_fatal(&self) -> bool {
        matches!(self, TreeError::InvariantViolation(_))
    }

    /// Drop the key payload, e.g. to convert into an error type that does
    /// not carry `T`.
    pub fn without_key(self) -> TreeError<()> {
        match self {
            TreeError::DuplicateKey(_) => TreeError::DuplicateKey(()),
            TreeError::KeyNotFound => TreeError::KeyNotFound,
            TreeError::StaleHandle(id) => TreeError::StaleHandle(id),
            TreeError::InvariantViolation(msg) => TreeError::InvariantViolation(msg),
        }
    }
}
