//! Letter and word normalization applied at crate boundaries.

use crate::error::Error;

/// Validate a single letter: ascii alphabetic, normalized to uppercase.
/// ## Errors
/// If `letter` is not an ascii alphabetic character.
pub fn validate_letter(letter: char) -> Result<char, Error> {
    if !letter.is_ascii_alphabetic() {
        return Err(Error::InvalidLetter(letter));
    }
    Ok(letter.to_ascii_uppercase())
}

/// Validate a word: non-empty ascii alphabetic, normalized to uppercase.
/// ## Errors
/// If `word` is empty or contains a non-alphabetic character.
pub fn validate_word(word: &str) -> Result<String, Error> {
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(Error::InvalidWord(String::from(word)));
    }
    Ok(word.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_letter() {
        assert_eq!(validate_letter('a').unwrap(), 'A');
        assert_eq!(validate_letter('Z').unwrap(), 'Z');
        assert!(validate_letter('4').is_err());
        assert!(validate_letter(' ').is_err());
        assert!(validate_letter('é').is_err());
    }

    #[test]
    fn test_validate_word() {
        assert_eq!(validate_word("cab").unwrap(), "CAB");
        assert_eq!(validate_word("CaB").unwrap(), "CAB");
        assert!(validate_word("").is_err());
        assert!(validate_word("c b").is_err());
        assert!(validate_word("c4b").is_err());
    }

    #[test]
    fn test_validation_is_idempotent() {
        let word = validate_word("banana").unwrap();
        assert_eq!(validate_word(&word).unwrap(), word);
        let letter = validate_letter('q').unwrap();
        assert_eq!(validate_letter(letter).unwrap(), letter);
    }
}
