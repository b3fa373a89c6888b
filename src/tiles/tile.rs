use super::Position;
use crate::error::Error;
use crate::validation::validate_letter;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single letter placed at a position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tile {
    value: char,
    position: Position,
}

impl Tile {
    /// Create a tile, normalizing the letter to uppercase.
    /// ## Errors
    /// If `value` is not an ascii alphabetic character.
    pub fn new(value: char, position: Position) -> Result<Tile, Error> {
        Ok(Tile {
            value: validate_letter(value)?,
            position,
        })
    }

    pub fn value(&self) -> char {
        self.value
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

/// Placeholder tile for the inline storage of a word's tile list.
impl Default for Tile {
    fn default() -> Tile {
        Tile {
            value: 'A',
            position: Position::new(0, 0),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}@{}", self.value, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes() {
        let tile = Tile::new('c', Position::new(1, 2)).unwrap();
        assert_eq!(tile.value(), 'C');
        assert_eq!(tile.position(), Position::new(1, 2));
    }

    #[test]
    fn test_new_rejects_non_alpha() {
        assert!(Tile::new('3', Position::new(0, 0)).is_err());
        assert!(Tile::new(' ', Position::new(0, 0)).is_err());
    }

    #[test]
    fn test_equality_by_value_and_position() {
        let a = Tile::new('A', Position::new(0, 0)).unwrap();
        let b = Tile::new('a', Position::new(0, 0)).unwrap();
        let c = Tile::new('A', Position::new(1, 0)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
