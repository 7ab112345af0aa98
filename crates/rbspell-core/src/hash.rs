// Deterministic string hashing for the dictionary index

/// Prime multiplier applied after every byte.
const MULTIPLIER: u64 = 701;

/// Hash a byte string.
///
/// For each byte the accumulator is bit-reversed, multiplied and the byte
/// added; the result gets one final multiply. Unkeyed and stable across runs
/// and platforms.
pub fn hash_bytes(bytes: &[u8]) -> u64 {
    let mut acc: u64 = 0;
    for &b in bytes {
        acc = acc.reverse_bits().wrapping_mul(MULTIPLIER);
        acc = acc.wrapping_add(u64::from(b));
    }
    acc.wrapping_mul(MULTIPLIER)
}

/// Hash a word by its UTF-8 bytes.
pub fn hash_str(word: &str) -> u64 {
    hash_bytes(word.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_hashes_to_zero() {
        assert_eq!(hash_str(""), 0);
    }

    #[test]
    fn single_byte() {
        assert_eq!(hash_str("a"), 97 * 701);
    }

    #[test]
    fn deterministic() {
        assert_eq!(hash_str("spellchecker"), hash_str("spellchecker"));
    }

    #[test]
    fn order_matters() {
        assert_ne!(hash_str("ab"), hash_str("ba"));
    }

    #[test]
    fn two_bytes() {
        // "ab": acc = 97, then reverse_bits(97) * 701 + 98, then * 701.
        let acc = 97u64.reverse_bits().wrapping_mul(701).wrapping_add(98);
        assert_eq!(hash_str("ab"), acc.wrapping_mul(701));
    }
}
