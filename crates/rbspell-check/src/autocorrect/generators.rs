// Individual suggestion generators: each applies one class of single edit
// to the unknown word and validates the candidates against a lexicon.

use super::Lexicon;
use super::status::SuggestionStatus;

/// Letter pairs that are easy to confuse by sound. Each pair is tried in
/// both directions, left to right first.
pub const HOMOPHONES: &[(char, char)] = &[
    ('a', 'e'),
    ('b', 'p'),
    ('c', 'k'),
    ('c', 's'),
    ('d', 't'),
    ('e', 'i'),
    ('e', 'y'),
    ('f', 'v'),
    ('g', 'j'),
    ('i', 'j'),
    ('i', 'y'),
    ('k', 'q'),
    ('l', 'r'),
    ('m', 'n'),
    ('o', 'u'),
    ('u', 'w'),
    ('x', 'z'),
];

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// One class of edit operation.
pub trait SuggestionGenerator {
    fn generate(&self, lexicon: &dyn Lexicon, status: &mut SuggestionStatus<'_>);
}

/// Look `candidate` up and record it if known. Does nothing once the status
/// has enough suggestions.
pub fn suggest_for_buffer(
    lexicon: &dyn Lexicon,
    status: &mut SuggestionStatus<'_>,
    candidate: &[char],
) {
    if status.should_abort() {
        return;
    }
    let word: String = candidate.iter().collect();
    status.charge();
    if lexicon.contains(&word) {
        status.add_suggestion(word);
    }
}

// ---------------------------------------------------------------------------
// DoubledLetter
// ---------------------------------------------------------------------------

/// Collapses a doubled letter: `helllo` -> `hello`.
pub struct DoubledLetter;

impl SuggestionGenerator for DoubledLetter {
    fn generate(&self, lexicon: &dyn Lexicon, status: &mut SuggestionStatus<'_>) {
        let word = status.word();
        if word.len() < 2 {
            return;
        }
        let mut buffer = Vec::with_capacity(word.len());
        for i in 0..word.len() - 1 {
            if word[i] != word[i + 1] {
                continue;
            }
            buffer.clear();
            buffer.extend_from_slice(&word[..i]);
            buffer.extend_from_slice(&word[i + 1..]);
            suggest_for_buffer(lexicon, status, &buffer);
        }
    }
}

// ---------------------------------------------------------------------------
// Transposition
// ---------------------------------------------------------------------------

/// Swaps two adjacent letters: `wrold` -> `world`.
pub struct Transposition;

impl SuggestionGenerator for Transposition {
    fn generate(&self, lexicon: &dyn Lexicon, status: &mut SuggestionStatus<'_>) {
        let word = status.word();
        if word.len() < 2 {
            return;
        }
        let mut buffer = word.to_vec();
        for i in 0..word.len() - 1 {
            if word[i] == word[i + 1] {
                continue;
            }
            buffer.swap(i, i + 1);
            suggest_for_buffer(lexicon, status, &buffer);
            buffer.swap(i, i + 1);
        }
    }
}

// ---------------------------------------------------------------------------
// LetterDuplication
// ---------------------------------------------------------------------------

/// Doubles one letter: `helo` -> `hello`.
pub struct LetterDuplication;

impl SuggestionGenerator for LetterDuplication {
    fn generate(&self, lexicon: &dyn Lexicon, status: &mut SuggestionStatus<'_>) {
        let word = status.word();
        let mut buffer = Vec::with_capacity(word.len() + 1);
        for i in 0..word.len() {
            // Doubling either letter of an existing pair gives the same word.
            if i > 0 && word[i] == word[i - 1] {
                continue;
            }
            buffer.clear();
            buffer.extend_from_slice(&word[..=i]);
            buffer.extend_from_slice(&word[i..]);
            suggest_for_buffer(lexicon, status, &buffer);
        }
    }
}

// ---------------------------------------------------------------------------
// Homophone
// ---------------------------------------------------------------------------

/// Replaces one letter with a sound-alike from [`HOMOPHONES`]:
/// `fery` -> `very`.
pub struct Homophone;

impl Homophone {
    fn substitute(
        lexicon: &dyn Lexicon,
        status: &mut SuggestionStatus<'_>,
        buffer: &mut [char],
        from: char,
        to: char,
    ) {
        for i in 0..buffer.len() {
            if buffer[i] != from {
                continue;
            }
            buffer[i] = to;
            suggest_for_buffer(lexicon, status, buffer);
            buffer[i] = from;
        }
    }
}

impl SuggestionGenerator for Homophone {
    fn generate(&self, lexicon: &dyn Lexicon, status: &mut SuggestionStatus<'_>) {
        let mut buffer = status.word().to_vec();
        for &(a, b) in HOMOPHONES {
            Self::substitute(lexicon, status, &mut buffer, a, b);
            Self::substitute(lexicon, status, &mut buffer, b, a);
        }
    }
}
