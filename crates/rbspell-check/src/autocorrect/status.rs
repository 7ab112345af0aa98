// Suggestion status tracking: found suggestions, deduplication, cost

use hashbrown::HashSet;

/// Tracks one autocorrect run: the word being corrected, the suggestions
/// found so far and how many dictionary lookups were spent.
pub struct SuggestionStatus<'a> {
    word: &'a [char],
    max_suggestions: usize,
    lookups: usize,
    suggestions: Vec<String>,
    seen: HashSet<String>,
}

impl<'a> SuggestionStatus<'a> {
    pub fn new(word: &'a [char], max_suggestions: usize) -> Self {
        Self {
            word,
            max_suggestions,
            lookups: 0,
            suggestions: Vec::with_capacity(max_suggestions),
            seen: HashSet::new(),
        }
    }

    /// The word being corrected.
    pub fn word(&self) -> &'a [char] {
        self.word
    }

    /// Returns `true` once enough suggestions have been collected.
    pub fn should_abort(&self) -> bool {
        self.suggestions.len() >= self.max_suggestions
    }

    /// Count one dictionary lookup.
    pub fn charge(&mut self) {
        self.lookups += 1;
    }

    pub fn lookups(&self) -> usize {
        self.lookups
    }

    /// Record a suggestion. Duplicates, the word itself and anything past the
    /// limit are ignored.
    pub fn add_suggestion(&mut self, suggestion: String) {
        if self.should_abort() {
            return;
        }
        if suggestion.chars().eq(self.word.iter().copied()) {
            return;
        }
        if !self.seen.insert(suggestion.clone()) {
            return;
        }
        self.suggestions.push(suggestion);
    }

    pub fn suggestion_count(&self) -> usize {
        self.suggestions.len()
    }

    /// Suggestions in the order they were found.
    pub fn into_suggestions(self) -> Vec<String> {
        self.suggestions
    }
}
