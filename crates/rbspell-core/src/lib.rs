// rbspell-core: shared types and utilities used by the tree, the checker
// and the command-line tool.

pub mod character;
pub mod hash;
pub mod word;
