// Autocorrect strategy: runs the generators in a fixed order until enough
// suggestions are found.

use log::trace;

use super::Lexicon;
use super::generators::{
    DoubledLetter, Homophone, LetterDuplication, SuggestionGenerator, Transposition,
};
use super::status::SuggestionStatus;

/// An ordered list of generators.
pub struct Autocorrect {
    generators: Vec<Box<dyn SuggestionGenerator>>,
}

impl Autocorrect {
    pub fn new(generators: Vec<Box<dyn SuggestionGenerator>>) -> Self {
        Self { generators }
    }

    /// Run every generator in order until `status` is full.
    pub fn generate(&self, lexicon: &dyn Lexicon, status: &mut SuggestionStatus<'_>) {
        for generator in &self.generators {
            if status.should_abort() {
                break;
            }
            generator.generate(lexicon, status);
        }
    }

    /// Up to `max` distinct known words one edit away from `word`, in
    /// generator order.
    pub fn suggestions(&self, lexicon: &dyn Lexicon, word: &str, max: usize) -> Vec<String> {
        if max == 0 {
            return Vec::new();
        }
        let chars: Vec<char> = word.chars().collect();
        let mut status = SuggestionStatus::new(&chars, max);
        self.generate(lexicon, &mut status);
        trace!(
            "autocorrect {word:?}: {} suggestions after {} lookups",
            status.suggestion_count(),
            status.lookups()
        );
        status.into_suggestions()
    }

    /// The first known word one edit away from `word`, if any.
    pub fn attempt(&self, lexicon: &dyn Lexicon, word: &str) -> Option<String> {
        self.suggestions(lexicon, word, 1).into_iter().next()
    }
}

impl Default for Autocorrect {
    fn default() -> Self {
        default_strategy()
    }
}

/// Doubled letter, transposition, duplication, then homophones.
pub fn default_strategy() -> Autocorrect {
    Autocorrect::new(vec![
        Box::new(DoubledLetter),
        Box::new(Transposition),
        Box::new(LetterDuplication),
        Box::new(Homophone),
    ])
}
