use crate::error::Error;
use crate::letterset::LetterSet;
use crate::validation::{validate_letter, validate_word};
use std::collections::HashSet;
use std::fmt;
use std::fs::read_to_string;

/// The set of admissible words, validated and uppercased.
///
/// Words are kept in sorted order so that every iteration over the dictionary
/// is deterministic, with a per-letter index for letter-containment lookups.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    present: HashSet<String>,
    by_letter: Vec<Vec<u32>>,
    /// Path of the wordfile used to build the dictionary.
    /// Empty if the dictionary was not built from a file.
    wordfile: String,
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Dictionary: {} words from '{}'>",
            self.words.len(),
            self.wordfile
        )
    }
}

impl Dictionary {
    /// Build a dictionary from a list of words.
    /// ## Errors
    /// If a word is empty or not ascii alphabetic.
    /// ## Examples
    /// ```
    /// # use banana_solver::{Dictionary, Error};
    /// let dictionary = Dictionary::from_words(&["cab", "bad", "CAB"])?;
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains("cab"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Result<Dictionary, Error> {
        let mut validated = words
            .iter()
            .map(|word| validate_word(word.as_ref()))
            .collect::<Result<Vec<String>, Error>>()?;
        validated.sort();
        validated.dedup();

        let present: HashSet<String> = validated.iter().cloned().collect();
        let mut by_letter = vec![Vec::new(); 26];
        for (i, word) in validated.iter().enumerate() {
            for letter in LetterSet::from_word(word).iter() {
                by_letter[(letter as u8 - b'A') as usize].push(i as u32);
            }
        }
        Ok(Dictionary {
            words: validated,
            present,
            by_letter,
            wordfile: String::new(),
        })
    }

    /// Read a dictionary from `wordfile`: one or more words per line, with
    /// whitespace as separator.
    /// ## Errors
    /// If the file can not be read, or a token fails validation.
    pub fn from_file(wordfile: &str) -> Result<Dictionary, Error> {
        let contents = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let tokens: Vec<&str> = contents.split_whitespace().collect();
        let mut dictionary = Dictionary::from_words(&tokens)?;
        dictionary.wordfile = String::from(wordfile);
        Ok(dictionary)
    }

    /// All words, in sorted order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The number of words in the dictionary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check membership. The query is case-normalized first; a string that
    /// fails validation is simply not a word.
    pub fn contains(&self, word: &str) -> bool {
        match validate_word(word) {
            Ok(word) => self.present.contains(&word),
            Err(_) => false,
        }
    }

    /// The words containing `letter`, in sorted order.
    /// ## Errors
    /// If `letter` is not ascii alphabetic.
    pub fn words_containing(&self, letter: char) -> Result<impl Iterator<Item = &str>, Error> {
        let letter = validate_letter(letter)?;
        let bucket = &self.by_letter[(letter as u8 - b'A') as usize];
        Ok(bucket.iter().map(move |&i| self.words[i as usize].as_str()))
    }

    /// The words containing every letter of `letters`, in sorted order.
    /// ## Errors
    /// If a letter is not ascii alphabetic.
    pub fn words_containing_all<I: IntoIterator<Item = char>>(
        &self,
        letters: I,
    ) -> Result<Vec<&str>, Error> {
        let wanted = letters
            .into_iter()
            .map(validate_letter)
            .collect::<Result<LetterSet, Error>>()?;
        Ok(self
            .words
            .iter()
            .filter(|word| LetterSet::from_word(word).is_superset(wanted))
            .map(String::as_str)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &["cab", "bad", "dad", "abe", "bead"];

    fn test_dictionary() -> Dictionary {
        Dictionary::from_words(WORDS).unwrap()
    }

    #[test]
    fn test_from_words_sorted_dedup() {
        let dictionary = Dictionary::from_words(&["bb", "aa", "BB"]).unwrap();
        assert_eq!(dictionary.words(), &["AA", "BB"]);
    }

    #[test]
    fn test_from_words_invalid() {
        assert!(Dictionary::from_words(&["c-b"]).is_err());
        assert!(Dictionary::from_words(&[""]).is_err());
    }

    #[test]
    fn test_contains_normalizes() {
        let dictionary = test_dictionary();
        assert!(dictionary.contains("CAB"));
        assert!(dictionary.contains("cab"));
        assert!(!dictionary.contains("cabs"));
        assert!(!dictionary.contains("c-b"));
    }

    #[test]
    fn test_words_containing() {
        let dictionary = test_dictionary();
        let with_c: Vec<&str> = dictionary.words_containing('c').unwrap().collect();
        assert_eq!(with_c, vec!["CAB"]);
        let with_d: Vec<&str> = dictionary.words_containing('D').unwrap().collect();
        assert_eq!(with_d, vec!["BAD", "BEAD", "DAD"]);
        assert!(dictionary.words_containing('!').is_err());
    }

    #[test]
    fn test_words_containing_all() {
        let dictionary = test_dictionary();
        let words = dictionary.words_containing_all("bd".chars()).unwrap();
        assert_eq!(words, vec!["BAD", "BEAD"]);
        // no letters leaves the dictionary unfiltered
        let words = dictionary.words_containing_all(std::iter::empty()).unwrap();
        assert_eq!(words.len(), dictionary.len());
    }

    #[test]
    fn test_display() {
        let dictionary = test_dictionary();
        assert_eq!(dictionary.to_string(), "<Dictionary: 5 words from ''>");
    }
}
