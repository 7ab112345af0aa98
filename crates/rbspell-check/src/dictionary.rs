// Dictionary index: fixed-bucket hash table with chaining
//
// The number of buckets is chosen once at construction and never changes.
// A word lands in bucket `hash(word) % bucket_count`; collisions are
// chained and resolved by linear scan.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};
use rbspell_core::hash::hash_str;

use crate::DictionaryError;
use crate::autocorrect::Lexicon;
use crate::tokenizer;

/// 512K buckets, sized for a dictionary of roughly 400K words.
pub const DEFAULT_BUCKET_COUNT: usize = 512 * 1024;

/// Dictionary construction options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryOptions {
    /// Number of hash buckets. Must be at least 1.
    pub bucket_count: usize,
}

impl Default for DictionaryOptions {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKET_COUNT,
        }
    }
}

/// Occupancy figures for tuning the bucket count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BucketStats {
    pub words: usize,
    pub buckets: usize,
    pub empty_buckets: usize,
    pub longest_chain: usize,
}

/// Existence-only index of known words.
pub struct Dictionary {
    buckets: Vec<Vec<String>>,
    len: usize,
}

impl Dictionary {
    /// Create an empty dictionary with `options.bucket_count` buckets.
    pub fn new(options: DictionaryOptions) -> Result<Self, DictionaryError> {
        if options.bucket_count == 0 {
            return Err(DictionaryError::InvalidBucketCount);
        }
        let mut buckets = Vec::with_capacity(options.bucket_count);
        buckets.resize_with(options.bucket_count, Vec::new);
        Ok(Self { buckets, len: 0 })
    }

    /// Load a dictionary from a word list, one or more words per line.
    ///
    /// Lines go through the same normalization as checked documents, so
    /// `Hello` and `hello!` index the same word. Duplicates are skipped.
    pub fn from_reader<R: BufRead>(
        reader: R,
        options: DictionaryOptions,
    ) -> Result<Self, DictionaryError> {
        let mut dict = Self::new(options)?;
        let mut duplicates = 0usize;
        let mut words = tokenizer::words(reader);
        for word in words.by_ref() {
            match dict.insert(word?.text) {
                Ok(()) => {}
                Err(DictionaryError::DuplicateKey(_)) => duplicates += 1,
                Err(e) => return Err(e),
            }
        }
        debug!(
            "dictionary: {} words from {} lines, {} duplicates skipped",
            dict.len,
            words.line(),
            duplicates
        );
        Ok(dict)
    }

    /// Load a dictionary file.
    pub fn load_file(path: &Path, options: DictionaryOptions) -> Result<Self, DictionaryError> {
        info!("Reading dictionary {}...", path.display());
        let file = File::open(path).map_err(|source| DictionaryError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let dict = Self::from_reader(BufReader::new(file), options)?;
        let stats = dict.bucket_stats();
        info!("Finished loading dictionary ({} words)", dict.len);
        debug!(
            "dictionary buckets: {} empty of {}, longest chain {}",
            stats.empty_buckets, stats.buckets, stats.longest_chain
        );
        Ok(dict)
    }

    fn bucket_index(&self, word: &str) -> usize {
        // `buckets` is never empty, see `new`.
        (hash_str(word) % self.buckets.len() as u64) as usize
    }

    /// Add a word. Fails with [`DictionaryError::DuplicateKey`] if it is
    /// already present.
    pub fn insert(&mut self, word: impl Into<String>) -> Result<(), DictionaryError> {
        let word = word.into();
        let index = self.bucket_index(&word);
        let bucket = &mut self.buckets[index];
        if bucket.contains(&word) {
            return Err(DictionaryError::DuplicateKey(word));
        }
        bucket.push(word);
        self.len += 1;
        Ok(())
    }

    /// Returns `true` if `word` is in the dictionary.
    pub fn lookup(&self, word: &str) -> bool {
        self.buckets[self.bucket_index(word)]
            .iter()
            .any(|w| w == word)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn bucket_stats(&self) -> BucketStats {
        BucketStats {
            words: self.len,
            buckets: self.buckets.len(),
            empty_buckets: self.buckets.iter().filter(|b| b.is_empty()).count(),
            longest_chain: self.buckets.iter().map(Vec::len).max().unwrap_or(0),
        }
    }
}

impl Lexicon for Dictionary {
    fn contains(&self, word: &str) -> bool {
        self.lookup(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Dictionary {
        Dictionary::new(DictionaryOptions { bucket_count: 16 }).unwrap()
    }

    #[test]
    fn zero_buckets_rejected() {
        assert!(matches!(
            Dictionary::new(DictionaryOptions { bucket_count: 0 }),
            Err(DictionaryError::InvalidBucketCount)
        ));
    }

    #[test]
    fn insert_and_lookup() {
        let mut dict = small();
        dict.insert("hello").unwrap();
        dict.insert("world").unwrap();
        assert!(dict.lookup("hello"));
        assert!(dict.lookup("world"));
        assert!(!dict.lookup("helo"));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn duplicate_insert_fails() {
        let mut dict = small();
        dict.insert("cat").unwrap();
        match dict.insert("cat") {
            Err(DictionaryError::DuplicateKey(w)) => assert_eq!(w, "cat"),
            other => panic!("expected DuplicateKey, got {other:?}"),
        }
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn single_bucket_chains_everything() {
        let mut dict = Dictionary::new(DictionaryOptions { bucket_count: 1 }).unwrap();
        for w in ["a", "b", "c", "d"] {
            dict.insert(w).unwrap();
        }
        for w in ["a", "b", "c", "d"] {
            assert!(dict.lookup(w));
        }
        let stats = dict.bucket_stats();
        assert_eq!(stats.longest_chain, 4);
        assert_eq!(stats.empty_buckets, 0);
    }

    #[test]
    fn from_reader_normalizes_and_skips_duplicates() {
        let text = "Hello\nhello!\nWORLD\n\n--\ndon't\n";
        let dict = Dictionary::from_reader(text.as_bytes(), DictionaryOptions { bucket_count: 64 })
            .unwrap();
        assert_eq!(dict.len(), 3);
        assert!(dict.lookup("hello"));
        assert!(dict.lookup("world"));
        assert!(dict.lookup("dont"));
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = Dictionary::load_file(
            Path::new("/nonexistent/rbspell/words.txt"),
            DictionaryOptions::default(),
        )
        .err()
        .unwrap();
        assert!(err.to_string().contains("/nonexistent/rbspell/words.txt"));
    }

    #[test]
    fn default_bucket_count() {
        assert_eq!(DictionaryOptions::default().bucket_count, 524_288);
    }
}
