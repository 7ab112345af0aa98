// Document checker: collect the distinct words of a document into the
// red-black word set, remove every word the dictionary knows while scanning
// in order, then run autocorrect over what is left.

use std::cmp::Ordering;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::{debug, info};
use rbspell_core::word::Word;
use rbspell_tree::{RbTree, TreeError};
use serde::Serialize;

use crate::CheckError;
use crate::autocorrect::Autocorrect;
use crate::dictionary::Dictionary;
use crate::tokenizer;

/// Order of occurrences in the word set: by text only.
pub type WordOrder = fn(&Word, &Word) -> Ordering;

/// Ordered set of distinct words; the first occurrence of each word wins.
pub type WordSet = RbTree<Word, WordOrder>;

/// An empty word set.
pub fn word_set() -> WordSet {
    RbTree::with_comparator(Word::cmp_text as WordOrder)
}

/// Collect `words` into a fresh word set.
///
/// Repeated words are ignored. Returns the set and the total number of words
/// read, repeats included.
pub fn build_word_set<I>(words: I) -> Result<(WordSet, usize), CheckError>
where
    I: IntoIterator<Item = io::Result<Word>>,
{
    let mut set = word_set();
    let mut total = 0usize;
    for word in words {
        total += 1;
        match set.insert(word?) {
            Ok(_) | Err(TreeError::DuplicateKey(_)) => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok((set, total))
}

/// Checker options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOptions {
    /// Run autocorrect on unknown words.
    pub suggest: bool,
    /// Suggestions to collect per unknown word.
    pub max_suggestions: usize,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            suggest: true,
            max_suggestions: 1,
        }
    }
}

/// One unknown word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Misspelling {
    pub word: String,
    /// First line the word occurred on (1-based).
    pub line: usize,
    pub suggestions: Vec<String>,
}

/// Result of checking one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub source: String,
    pub total_words: usize,
    pub unique_words: usize,
    pub known_words: usize,
    /// Unknown words in ascending order.
    pub misspellings: Vec<Misspelling>,
}

/// A dictionary plus the autocorrect strategy, shared across inputs.
pub struct SpellChecker {
    dictionary: Dictionary,
    autocorrect: Autocorrect,
    options: CheckOptions,
}

impl SpellChecker {
    pub fn new(dictionary: Dictionary, options: CheckOptions) -> Self {
        Self {
            dictionary,
            autocorrect: Autocorrect::default(),
            options,
        }
    }

    /// Replace the default autocorrect strategy.
    pub fn with_autocorrect(mut self, autocorrect: Autocorrect) -> Self {
        self.autocorrect = autocorrect;
        self
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn options(&self) -> CheckOptions {
        self.options
    }

    pub fn set_options(&mut self, options: CheckOptions) {
        self.options = options;
    }

    /// Remove every word the dictionary knows from `set`, in one ascending
    /// scan. Returns how many were removed.
    pub fn filter_known(&self, set: &mut WordSet) -> Result<usize, CheckError> {
        let mut removed = 0usize;
        let mut cursor = set.cursor_front_mut();
        while let Some(word) = cursor.key() {
            if self.dictionary.lookup(&word.text) {
                cursor.remove_current()?;
                removed += 1;
            } else {
                cursor.move_next();
            }
        }
        Ok(removed)
    }

    /// Suggestions for `word` under the current options.
    pub fn suggest(&self, word: &str) -> Vec<String> {
        if !self.options.suggest {
            return Vec::new();
        }
        self.autocorrect
            .suggestions(&self.dictionary, word, self.options.max_suggestions)
    }

    /// Check a document read from `reader`. `source` names it in the report.
    pub fn check_reader<R: BufRead>(
        &self,
        source: &str,
        reader: R,
    ) -> Result<CheckReport, CheckError> {
        info!("Reading input {source}...");
        let mut words = tokenizer::words(reader);
        let report = self.check_words(source, words.by_ref())?;
        debug!("{source}: {} lines read", words.line());
        Ok(report)
    }

    /// Check an in-memory document.
    pub fn check_str(&self, source: &str, text: &str) -> Result<CheckReport, CheckError> {
        self.check_words(source, tokenizer::words_in_str(text).map(Ok))
    }

    fn check_words<I>(&self, source: &str, words: I) -> Result<CheckReport, CheckError>
    where
        I: IntoIterator<Item = io::Result<Word>>,
    {
        let (mut set, total_words) = build_word_set(words)?;
        let unique_words = set.len();

        info!("Filtering words...");
        let known_words = self.filter_known(&mut set)?;
        debug!("{source}: {total_words} words, {unique_words} distinct, {known_words} known");

        let misspellings = set
            .iter()
            .map(|word| Misspelling {
                word: word.text.clone(),
                line: word.line,
                suggestions: self.suggest(&word.text),
            })
            .collect();

        Ok(CheckReport {
            source: source.to_string(),
            total_words,
            unique_words,
            known_words,
            misspellings,
        })
    }

    /// Check the file at `path`.
    pub fn check_file(&self, path: &Path) -> Result<CheckReport, CheckError> {
        let file = File::open(path).map_err(|source| CheckError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.check_reader(&path.display().to_string(), BufReader::new(file))
    }
}
