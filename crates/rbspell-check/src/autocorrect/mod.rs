// Autocorrect: one-edit suggestions for unknown words
//
// Architecture:
//   - `generators`: one edit class each (SuggestionGenerator trait)
//   - `status`: collected suggestions, deduplication, lookup counting
//   - `strategy`: runs the generators in a fixed order

pub mod generators;
pub mod status;
pub mod strategy;

pub use generators::SuggestionGenerator;
pub use status::SuggestionStatus;
pub use strategy::{Autocorrect, default_strategy};

/// Anything that can answer "is this a known word?".
///
/// Candidates are passed already normalized (lowercase, alphanumeric only).
pub trait Lexicon {
    fn contains(&self, word: &str) -> bool;
}

impl Lexicon for hashbrown::HashSet<String> {
    fn contains(&self, word: &str) -> bool {
        hashbrown::HashSet::contains(self, word)
    }
}
