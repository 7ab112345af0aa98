// rbspell-check: everything around the word tree.
//
// - `dictionary`: fixed-bucket hash table of known words
// - `tokenizer`: line-by-line word reader with normalization
// - `autocorrect`: one-edit suggestion generators
// - `checker`: the document pipeline (collect, filter, suggest)

pub mod autocorrect;
pub mod checker;
pub mod dictionary;
pub mod tokenizer;

use std::io;
use std::path::PathBuf;

use rbspell_core::word::Word;
use rbspell_tree::TreeError;

pub use checker::{CheckOptions, CheckReport, Misspelling, SpellChecker};
pub use dictionary::{Dictionary, DictionaryOptions};

/// Error type for building a dictionary index.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// The word is already indexed. Loaders ignore this.
    #[error("word already in dictionary: {0}")]
    DuplicateKey(String),

    #[error("bucket count must be at least 1")]
    InvalidBucketCount,

    #[error("cannot open dictionary {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("I/O error while reading dictionary: {0}")]
    Io(#[from] io::Error),
}

/// Error type for checking a document.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("cannot open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("I/O error while reading input: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    /// The word set reported a broken invariant. Never recoverable.
    #[error("word set corrupted: {0}")]
    Tree(TreeError<()>),
}

impl CheckError {
    /// Returns `true` if the word set was found corrupt; the run must stop.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CheckError::Tree(e) if e.is_fatal())
    }
}

impl From<TreeError<Word>> for CheckError {
    fn from(e: TreeError<Word>) -> Self {
        CheckError::Tree(e.without_key())
    }
}
