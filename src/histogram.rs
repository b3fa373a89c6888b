use crate::error::Error;
use crate::validation::{validate_letter, validate_word};
use lazy_static::lazy_static;
use std::collections::HashMap;

/// The letter distribution of a standard english tile set (133 tiles).
pub const ENGLISH_TILE_COUNTS: [(char, usize); 26] = [
    ('A', 13),
    ('B', 3),
    ('C', 3),
    ('D', 6),
    ('E', 18),
    ('F', 3),
    ('G', 4),
    ('H', 3),
    ('I', 12),
    ('J', 2),
    ('K', 2),
    ('L', 5),
    ('M', 3),
    ('N', 8),
    ('O', 11),
    ('P', 3),
    ('Q', 2),
    ('R', 9),
    ('S', 6),
    ('T', 9),
    ('U', 6),
    ('V', 3),
    ('W', 3),
    ('X', 2),
    ('Y', 3),
    ('Z', 2),
];

lazy_static! {
    static ref ENGLISH: LetterHistogram = LetterHistogram::from_counts(&ENGLISH_TILE_COUNTS);
}

/// Relative letter frequencies over a corpus.
///
/// Frequencies sum to 1 across the letters present in the corpus.
#[derive(Debug, Clone, Default)]
pub struct LetterHistogram {
    histogram: HashMap<char, f32>,
}

impl LetterHistogram {
    /// Count letter frequencies over `words`.
    /// ## Errors
    /// If a word fails validation.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Result<LetterHistogram, Error> {
        let mut counts: HashMap<char, usize> = HashMap::new();
        for word in words {
            for letter in validate_word(word.as_ref())?.chars() {
                *counts.entry(letter).or_insert(0) += 1;
            }
        }
        Ok(Self::normalize(counts))
    }

    /// Build a histogram from explicit letter counts.
    pub fn from_counts(counts: &[(char, usize)]) -> LetterHistogram {
        Self::normalize(
            counts
                .iter()
                .map(|&(letter, count)| (letter.to_ascii_uppercase(), count))
                .collect(),
        )
    }

    fn normalize(counts: HashMap<char, usize>) -> LetterHistogram {
        let total: usize = counts.values().sum();
        let histogram = counts
            .into_iter()
            .filter(|&(_, count)| count > 0)
            .map(|(letter, count)| (letter, count as f32 / total.max(1) as f32))
            .collect();
        LetterHistogram { histogram }
    }

    /// The standard english tile distribution.
    pub fn english() -> LetterHistogram {
        ENGLISH.clone()
    }

    /// Relative frequency of `letter` in the corpus, 0.0 when absent.
    pub fn density(&self, letter: char) -> f32 {
        validate_letter(letter)
            .ok()
            .and_then(|letter| self.histogram.get(&letter).copied())
            .unwrap_or(0.0)
    }

    /// 1 − density: high for exotic letters.
    pub fn rarity(&self, letter: char) -> f32 {
        1.0 - self.density(letter)
    }

    /// Sum of the per-letter frequencies of `word`.
    pub fn total_word_frequency(&self, word: &str) -> f32 {
        word.chars().map(|letter| self.density(letter)).sum()
    }

    /// Mean per-letter frequency of `word`, 0.0 for an empty word.
    pub fn average_word_frequency(&self, word: &str) -> f32 {
        if word.is_empty() {
            return 0.0;
        }
        self.total_word_frequency(word) / word.len() as f32
    }

    /// Largest per-letter frequency of `word`.
    pub fn max_word_frequency(&self, word: &str) -> f32 {
        word.chars()
            .map(|letter| self.density(letter))
            .fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_words() {
        let histogram = LetterHistogram::from_words(&["ab", "ab", "cd"]).unwrap();
        assert!((histogram.density('A') - 1.0 / 3.0).abs() < 1e-6);
        assert!((histogram.density('C') - 1.0 / 6.0).abs() < 1e-6);
        assert_eq!(histogram.density('Z'), 0.0);
        assert!(LetterHistogram::from_words(&["a b"]).is_err());
    }

    #[test]
    fn test_density_normalizes_case() {
        let histogram = LetterHistogram::from_words(&["aa"]).unwrap();
        assert_eq!(histogram.density('a'), histogram.density('A'));
        assert_eq!(histogram.density('?'), 0.0);
    }

    #[test]
    fn test_english_sums_to_one() {
        let histogram = LetterHistogram::english();
        let total: f32 = "ABCDEFGHIJKLMNOPQRSTUVWXYZ"
            .chars()
            .map(|letter| histogram.density(letter))
            .sum();
        assert!((total - 1.0).abs() < 1e-5);
        assert!((histogram.density('E') - 18.0 / 133.0).abs() < 1e-6);
    }

    #[test]
    fn test_rarity() {
        let histogram = LetterHistogram::english();
        assert!(histogram.rarity('Q') > histogram.rarity('E'));
    }

    #[test]
    fn test_word_aggregates() {
        let histogram = LetterHistogram::from_words(&["aab"]).unwrap();
        // A: 2/3, B: 1/3
        assert!((histogram.total_word_frequency("AB") - 1.0).abs() < 1e-6);
        assert!((histogram.average_word_frequency("AB") - 0.5).abs() < 1e-6);
        assert!((histogram.max_word_frequency("AB") - 2.0 / 3.0).abs() < 1e-6);
        assert_eq!(histogram.average_word_frequency(""), 0.0);
    }
}
