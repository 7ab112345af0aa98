// Word tokenizer: reads a text source line by line and yields normalized
// words tagged with their 1-based line number.
//
// Input bytes that are not valid UTF-8 are replaced rather than rejected, so
// a Latin-1 word list still loads (its accented letters simply turn into
// replacement characters, which normalization drops).

use std::io::{self, BufRead};
use std::vec;

use rbspell_core::character::normalized_words;
use rbspell_core::word::Word;

/// Iterator over the words of a `BufRead` source.
///
/// I/O errors are yielded once and end the iteration.
pub struct Words<R> {
    reader: R,
    line: usize,
    buffer: Vec<u8>,
    pending: vec::IntoIter<String>,
    done: bool,
}

/// Tokenize `reader`.
pub fn words<R: BufRead>(reader: R) -> Words<R> {
    Words {
        reader,
        line: 0,
        buffer: Vec::new(),
        pending: Vec::new().into_iter(),
        done: false,
    }
}

/// Tokenize an in-memory string.
pub fn words_in_str(text: &str) -> impl Iterator<Item = Word> + '_ {
    text.lines()
        .enumerate()
        .flat_map(|(i, line)| normalized_words(line).map(move |w| Word::new(w, i + 1)))
}

impl<R: BufRead> Words<R> {
    /// Line number of the most recently read line.
    pub fn line(&self) -> usize {
        self.line
    }

    fn fill(&mut self) -> io::Result<bool> {
        self.buffer.clear();
        if self.reader.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(false);
        }
        self.line += 1;
        let text = String::from_utf8_lossy(&self.buffer);
        self.pending = normalized_words(&text).collect::<Vec<_>>().into_iter();
        Ok(true)
    }
}

impl<R: BufRead> Iterator for Words<R> {
    type Item = io::Result<Word>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(text) = self.pending.next() {
                return Some(Ok(Word::new(text, self.line)));
            }
            if self.done {
                return None;
            }
            match self.fill() {
                Ok(true) => {}
                Ok(false) => {
                    self.done = true;
                    return None;
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        words(input.as_bytes())
            .map(|w| w.unwrap().text)
            .collect()
    }

    #[test]
    fn splits_and_normalizes() {
        assert_eq!(
            texts("cat dog cat Dog! fish"),
            vec!["cat", "dog", "cat", "dog", "fish"]
        );
    }

    #[test]
    fn tracks_line_numbers() {
        let out: Vec<(String, usize)> = words("one\n\ntwo three\n-- four".as_bytes())
            .map(|w| {
                let w = w.unwrap();
                (w.text, w.line)
            })
            .collect();
        assert_eq!(
            out,
            vec![
                ("one".to_string(), 1),
                ("two".to_string(), 3),
                ("three".to_string(), 3),
                ("four".to_string(), 4),
            ]
        );
    }

    #[test]
    fn line_counts_blank_lines() {
        let mut it = words("\n\nword\n".as_bytes());
        assert_eq!(it.next().unwrap().unwrap().line, 3);
        assert_eq!(it.line(), 3);
        assert!(it.next().is_none());
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(texts("").is_empty());
        assert!(texts("\n\n   \n").is_empty());
    }

    #[test]
    fn crlf_line_endings() {
        assert_eq!(texts("alpha\r\nbeta\r\n"), vec!["alpha", "beta"]);
    }

    #[test]
    fn invalid_utf8_is_tolerated() {
        let bytes: &[u8] = b"caf\xe9 ok\n";
        let out: Vec<String> = words(bytes).map(|w| w.unwrap().text).collect();
        assert_eq!(out, vec!["caf", "ok"]);
    }

    #[test]
    fn io_error_is_yielded_once() {
        struct Failing;
        impl io::Read for Failing {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("disk on fire"))
            }
        }
        let mut it = words(io::BufReader::new(Failing));
        assert!(matches!(it.next(), Some(Err(_))));
        assert!(it.next().is_none());
    }

    #[test]
    fn words_in_str_matches_reader() {
        let text = "The cat\nsat on\nthe mat.";
        let a: Vec<Word> = words_in_str(text).collect();
        let b: Vec<Word> = words(text.as_bytes()).map(Result::unwrap).collect();
        assert_eq!(a, b);
    }
}
