use super::{board_is_valid, letters_without_word};
use crate::board::Board;
use crate::dictionary::Dictionary;
use crate::error::Error;
use crate::generator::ConstraintGenerator;
use crate::letterbag::LetterBag;

/// Depth-first search over partial boards, returning the first complete one.
///
/// At every state the constraint generator proposes attachments; candidates
/// are tried in the generator's order, so the traversal is deterministic.
pub struct Dfs<'a> {
    dictionary: &'a Dictionary,
    generator: ConstraintGenerator<'a>,
}

impl<'a> Dfs<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Dfs<'a> {
        Dfs {
            dictionary,
            generator: ConstraintGenerator::new(dictionary),
        }
    }

    /// Search for a board that extends `board` and consumes all of `letters`.
    /// ## Errors
    /// `NoSolution` when the search space is exhausted.
    /// ## Examples
    /// ```
    /// # use banana_solver::{Board, Dictionary, Dfs, LetterBag, Error};
    /// let dictionary = Dictionary::from_words(&["cab"])?;
    /// let letters: LetterBag = "cab".parse()?;
    /// let board = Dfs::new(&dictionary).search(&Board::new(), &letters)?;
    /// assert_eq!(board.to_string(), "CAB\n");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn search(&self, board: &Board, letters: &LetterBag) -> Result<Board, Error> {
        self.search_inner(board, letters).ok_or(Error::NoSolution)
    }

    fn search_inner(&self, board: &Board, letters: &LetterBag) -> Option<Board> {
        if letters.is_empty() {
            return Some(board.clone());
        }
        for constraint in self.generator.generate(board, letters) {
            for word in constraint.filter(self.dictionary.words().to_vec()) {
                for candidate in constraint.create_candidates(board, &word) {
                    if !board.can_place_word(&candidate) {
                        continue;
                    }
                    let mut candidate_board = board.clone();
                    candidate_board.place_word_unchecked(&candidate);
                    if candidate_board == *board {
                        continue;
                    }
                    if !board_is_valid(self.dictionary, &candidate_board) {
                        continue;
                    }
                    let candidate_letters = letters_without_word(board, &candidate, letters);
                    if let Some(solution) = self.search_inner(&candidate_board, &candidate_letters)
                    {
                        return Some(solution);
                    }
                }
            }
        }
        None
    }
}
