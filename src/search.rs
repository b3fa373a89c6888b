//! Search engines that grow a partial board until the letter bag is empty.
mod beam;
mod dfs;

pub use beam::{BeamSearch, BeamWeights};
pub use dfs::Dfs;

use crate::board::Board;
use crate::dictionary::Dictionary;
use crate::letterbag::LetterBag;
use crate::tiles::Word;

/// A board is valid when every maximal run on it spells a dictionary word.
pub(crate) fn board_is_valid(dictionary: &Dictionary, board: &Board) -> bool {
    board
        .get_words()
        .iter()
        .all(|word| dictionary.contains(&word.value()))
}

/// The bag left after placing `word` on `board`: only letters on positions
/// that were empty before the placement are consumed.
pub(crate) fn letters_without_word(board: &Board, word: &Word, letters: &LetterBag) -> LetterBag {
    let mut placed = LetterBag::new();
    for tile in word.iter() {
        if board.tile_at(tile.position()).is_none() {
            placed.insert(tile.value());
        }
    }
    letters.clone() - placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::{Direction, Position};

    #[test]
    fn test_board_is_valid() {
        let dictionary = Dictionary::from_words(&["cab", "bad"]).unwrap();
        let valid: Board = "\
CAB
  A
  D
"
        .parse()
        .unwrap();
        assert!(board_is_valid(&dictionary, &valid));
        let invalid: Board = "\
CAB
  B
  D
"
        .parse()
        .unwrap();
        assert!(!board_is_valid(&dictionary, &invalid));
        assert!(board_is_valid(&dictionary, &Board::new()));
    }

    #[test]
    fn test_letters_without_word_deducts_only_new_tiles() {
        let board: Board = "CAB".parse().unwrap();
        let word = Word::from_str("bad", Position::new(2, 0), Direction::DOWN).unwrap();
        let letters: LetterBag = "adx".parse().unwrap();
        // B overlaps the existing tile, so only A and D are consumed
        let rest = letters_without_word(&board, &word, &letters);
        assert_eq!(rest.to_string(), "X");
    }
}
