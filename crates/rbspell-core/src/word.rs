// Word occurrence produced by the tokenizer

use std::cmp::Ordering;
use std::fmt;

/// A normalized word together with the 1-based line it was read from.
///
/// Ordering and equality of occurrences inside the checker's word set look
/// at the text only (see [`Word::cmp_text`]), so the first line a word was
/// seen on is the one that is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    pub line: usize,
}

impl Word {
    pub fn new(text: impl Into<String>, line: usize) -> Self {
        Self {
            text: text.into(),
            line,
        }
    }

    /// Three-way comparison by word text, ignoring the line number.
    pub fn cmp_text(a: &Word, b: &Word) -> Ordering {
        a.text.cmp(&b.text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cmp_text_ignores_line() {
        let a = Word::new("cat", 1);
        let b = Word::new("cat", 9);
        assert_eq!(Word::cmp_text(&a, &b), Ordering::Equal);
        assert_ne!(a, b);
    }

    #[test]
    fn cmp_text_orders_by_text() {
        let a = Word::new("apple", 5);
        let b = Word::new("banana", 1);
        assert_eq!(Word::cmp_text(&a, &b), Ordering::Less);
    }

    #[test]
    fn display_prints_text() {
        assert_eq!(Word::new("fish", 3).to_string(), "fish");
    }
}
