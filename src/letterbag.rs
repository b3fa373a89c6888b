use crate::error::Error;
use crate::validation::validate_letter;
use multiset::HashMultiSet;
use std::collections::HashMap;
use std::fmt;
use std::ops::{Deref, Sub};
use std::str::FromStr;

/// The multiset of letters still available to the search.
#[derive(Debug, Clone)]
pub struct LetterBag(HashMultiSet<char>);

impl Deref for LetterBag {
    type Target = HashMultiSet<char>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Default for LetterBag {
    fn default() -> Self {
        Self::new()
    }
}

impl Sub for LetterBag {
    type Output = Self;
    fn sub(self, other: Self) -> Self::Output {
        Self(self.0 - other.0)
    }
}

impl FromStr for LetterBag {
    type Err = Error;

    /// Parse a bag from a string of letters, normalizing to uppercase.
    /// ## Errors
    /// If a character is not ascii alphabetic.
    fn from_str(s: &str) -> Result<LetterBag, Error> {
        let mut bag = LetterBag::new();
        for c in s.chars() {
            bag.insert(validate_letter(c)?);
        }
        Ok(bag)
    }
}

/// Letters in sorted order, e.g. "AABD".
impl fmt::Display for LetterBag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut letters: Vec<char> = self.0.iter().copied().collect();
        letters.sort_unstable();
        write!(f, "{}", letters.into_iter().collect::<String>())
    }
}

impl LetterBag {
    pub fn new() -> LetterBag {
        LetterBag(HashMultiSet::new())
    }

    /// Add one `letter` to the bag.
    pub fn insert(&mut self, letter: char) {
        self.0.insert(letter);
    }

    /// Remove one occurrence of `letter`; removing an absent letter is a no-op.
    pub fn remove(&mut self, letter: char) -> bool {
        self.0.remove(&letter)
    }

    pub fn is_empty(&self) -> bool {
        self.0.len() == 0
    }

    /// A copy of this bag with one extra `letter`.
    #[must_use]
    pub fn with_letter(&self, letter: char) -> LetterBag {
        let mut bag = self.clone();
        bag.insert(letter);
        bag
    }

    /// Check that `word` can be spelled with the letters in this bag.
    pub fn can_build(&self, word: &str) -> bool {
        let mut needed: HashMap<char, usize> = HashMap::new();
        for letter in word.chars() {
            *needed.entry(letter).or_insert(0) += 1;
        }
        needed
            .iter()
            .all(|(letter, &count)| self.0.count_of(letter) >= count)
    }
}
