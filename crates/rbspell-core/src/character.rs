// Character classification and word normalization

/// Returns `true` if `c` survives normalization (letters and digits).
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

/// Normalize a raw whitespace-delimited token into a dictionary word.
///
/// Every character that is not alphanumeric is dropped and the remainder is
/// lowercased. The result may be empty (e.g. for a token of pure
/// punctuation), in which case callers skip it.
pub fn normalize_word(token: &str) -> String {
    token
        .chars()
        .filter(|&c| is_word_char(c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Split a line on whitespace and normalize each token, skipping tokens
/// that normalize to nothing.
pub fn normalized_words(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split_whitespace()
        .map(normalize_word)
        .filter(|w| !w.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation() {
        assert_eq!(normalize_word("Dog!"), "dog");
        assert_eq!(normalize_word("\"quoted,\""), "quoted");
    }

    #[test]
    fn strips_inner_punctuation() {
        assert_eq!(normalize_word("don't"), "dont");
        assert_eq!(normalize_word("e-mail"), "email");
    }

    #[test]
    fn keeps_digits() {
        assert_eq!(normalize_word("R2D2"), "r2d2");
    }

    #[test]
    fn punctuation_only_becomes_empty() {
        assert_eq!(normalize_word("--"), "");
        assert_eq!(normalize_word("..."), "");
    }

    #[test]
    fn lowercases_non_ascii() {
        assert_eq!(normalize_word("\u{00C4}iti"), "\u{00E4}iti");
    }

    #[test]
    fn normalized_words_skips_empty_tokens() {
        let words: Vec<String> = normalized_words("  The cat -- sat.  ").collect();
        assert_eq!(words, vec!["the", "cat", "sat"]);
    }

    #[test]
    fn normalized_words_of_blank_line() {
        assert_eq!(normalized_words("   \t ").count(), 0);
    }
}
