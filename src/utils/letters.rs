use once_cell::sync::Lazy;
use rand::Rng;
use std::collections::HashSet;

/// Letters a puzzle may contain; filler cells draw from these uniformly.
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

static ALPHABET_SET: Lazy<HashSet<char>> =
    Lazy::new(|| ALPHABET.iter().map(|&b| b as char).collect());

/// Pick one letter A-Z with equal probability
pub fn random_letter(rng: &mut impl Rng) -> char {
    ALPHABET[rng.random_range(0..ALPHABET.len())] as char
}

pub fn is_puzzle_letter(letter: char) -> bool {
    ALPHABET_SET.contains(&letter)
}

/// True when the word is non-empty and made only of A-Z
pub fn is_puzzle_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(is_puzzle_letter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_random_letter_is_uppercase() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            assert!(is_puzzle_letter(random_letter(&mut rng)));
        }
    }

    #[test]
    fn test_random_letter_covers_alphabet() {
        let mut rng = StdRng::seed_from_u64(11);
        let seen: HashSet<char> = (0..5_000).map(|_| random_letter(&mut rng)).collect();
        assert_eq!(seen.len(), 26);
    }

    #[test]
    fn test_puzzle_word() {
        assert!(is_puzzle_word("CAT"));
        assert!(!is_puzzle_word("cat"));
        assert!(!is_puzzle_word("CAFÉ"));
        assert!(!is_puzzle_word("R2D2"));
        assert!(!is_puzzle_word(""));
    }
}
