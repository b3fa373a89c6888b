use super::{board_is_valid, letters_without_word};
use crate::board::Board;
use crate::constraint::Constraint;
use crate::dictionary::Dictionary;
use crate::error::Error;
use crate::generator::ConstraintGenerator;
use crate::histogram::LetterHistogram;
use crate::letterbag::LetterBag;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Weights of the heuristic that ranks partial boards.
///
/// The score is the weighted sum of: the number of unplaced letters
/// (negative by default, to reward progress), the board density (tiles over
/// the inclusive bounding-box area, rewarding compact boards), the average
/// word length, the number of open constraints (negative, preferring
/// more-constrained boards), and the average rarity of the placed letters
/// (rewarding boards that get rid of exotic tiles early).
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy)]
pub struct BeamWeights {
    pub remaining_letters: f32,
    pub board_density: f32,
    pub average_word_length: f32,
    pub constraint_count: f32,
    pub letter_rarity: f32,
}

impl Default for BeamWeights {
    fn default() -> BeamWeights {
        BeamWeights {
            remaining_letters: -2.0,
            board_density: 1.0,
            average_word_length: 1.0,
            constraint_count: -1.0,
            letter_rarity: 1.5,
        }
    }
}

#[derive(Debug, Clone)]
struct Node {
    board: Board,
    letters: LetterBag,
    constraints: Vec<Constraint>,
    score: f32,
}

/// Best-first beam search over partial boards.
///
/// Each round the beam is ranked by score, truncated to `beam_size`, checked
/// for a finished board, and expanded with every legal attachment. With a
/// wide enough beam this recovers from greedy dead ends that trip up a
/// depth-first traversal, at the cost of no completeness guarantee.
pub struct BeamSearch<'a> {
    dictionary: &'a Dictionary,
    generator: ConstraintGenerator<'a>,
    histogram: LetterHistogram,
    beam_size: usize,
    max_depth: usize,
    weights: BeamWeights,
}

impl<'a> BeamSearch<'a> {
    /// Create a beam search with beam size 100, no depth limit, default
    /// weights and the english letter corpus.
    pub fn new(dictionary: &'a Dictionary) -> BeamSearch<'a> {
        BeamSearch {
            dictionary,
            generator: ConstraintGenerator::new(dictionary),
            histogram: LetterHistogram::english(),
            beam_size: 100,
            max_depth: 0,
            weights: BeamWeights::default(),
        }
    }

    /// Set the number of nodes kept between expansions.
    #[must_use]
    pub fn with_beam_size(mut self, beam_size: usize) -> BeamSearch<'a> {
        self.beam_size = beam_size;
        self
    }

    /// Set the depth limit. 0 means unbounded.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> BeamSearch<'a> {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_weights(mut self, weights: BeamWeights) -> BeamSearch<'a> {
        self.weights = weights;
        self
    }

    /// Set the letter-frequency corpus used by the rarity term.
    #[must_use]
    pub fn with_histogram(mut self, histogram: LetterHistogram) -> BeamSearch<'a> {
        self.histogram = histogram;
        self
    }

    /// Search for a board that extends `board` and consumes all of `letters`.
    /// ## Errors
    /// - `NoSolution` when the beam empties out.
    /// - `DepthLimitReached` when `max_depth` expansions were not enough.
    /// ## Examples
    /// ```
    /// # use banana_solver::{BeamSearch, Board, Dictionary, LetterBag, Error};
    /// let dictionary = Dictionary::from_words(&["cab", "bad"])?;
    /// let letters: LetterBag = "cabad".parse()?;
    /// let search = BeamSearch::new(&dictionary).with_beam_size(10);
    /// let board = search.search(&Board::new(), &letters)?;
    /// assert!(board.get_words().len() >= 2);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn search(&self, board: &Board, letters: &LetterBag) -> Result<Board, Error> {
        let mut beam = vec![self.node(board.clone(), letters.clone())];
        let mut depth = 1;
        loop {
            // stable sort: equal scores keep their expansion order
            beam.sort_by(|a, b| b.score.total_cmp(&a.score));
            beam.truncate(self.beam_size);
            if let Some(node) = beam.iter().find(|node| node.letters.is_empty()) {
                return Ok(node.board.clone());
            }
            beam = self.expand_all(&beam);
            depth += 1;
            if self.max_depth > 0 && depth > self.max_depth {
                return Err(Error::DepthLimitReached(self.max_depth));
            }
            if beam.is_empty() {
                return Err(Error::NoSolution);
            }
        }
    }

    fn node(&self, board: Board, letters: LetterBag) -> Node {
        let constraints = self.generator.generate(&board, &letters);
        let score = self.score(&board, &letters, &constraints);
        Node {
            board,
            letters,
            constraints,
            score,
        }
    }

    fn expand_all(&self, beam: &[Node]) -> Vec<Node> {
        let expanded: Vec<Vec<Node>>;
        #[cfg(feature = "rayon")]
        {
            expanded = beam.par_iter().map(|node| self.expand(node)).collect();
        }
        #[cfg(not(feature = "rayon"))]
        {
            expanded = beam.iter().map(|node| self.expand(node)).collect();
        }
        expanded.into_iter().flatten().collect()
    }

    fn expand(&self, node: &Node) -> Vec<Node> {
        let mut successors = Vec::new();
        for constraint in &node.constraints {
            for word in constraint.filter(self.dictionary.words().to_vec()) {
                for candidate in constraint.create_candidates(&node.board, &word) {
                    if !node.board.can_place_word(&candidate) {
                        continue;
                    }
                    let mut board = node.board.clone();
                    board.place_word_unchecked(&candidate);
                    if board == node.board {
                        continue;
                    }
                    if !board_is_valid(self.dictionary, &board) {
                        continue;
                    }
                    let letters = letters_without_word(&node.board, &candidate, &node.letters);
                    successors.push(self.node(board, letters));
                }
            }
        }
        successors
    }

    fn score(&self, board: &Board, letters: &LetterBag, constraints: &[Constraint]) -> f32 {
        let words = board.get_words();
        let average_word_length = if words.is_empty() {
            0.0
        } else {
            words.iter().map(|word| word.len()).sum::<usize>() as f32 / words.len() as f32
        };
        let (density, rarity) = if board.is_empty() {
            (0.0, 0.0)
        } else {
            let (min, max) = board.bounds();
            let area = (max.x - min.x + 1) * (max.y - min.y + 1);
            let rarity = board
                .iter()
                .map(|tile| self.histogram.rarity(tile.value()))
                .sum::<f32>()
                / board.len() as f32;
            (board.len() as f32 / area as f32, rarity)
        };
        self.weights.remaining_letters * letters.len() as f32
            + self.weights.board_density * density
            + self.weights.average_word_length * average_word_length
            + self.weights.constraint_count * constraints.len() as f32
            + self.weights.letter_rarity * rarity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Result<T> = std::result::Result<T, Error>;

    fn solve(words: &[&str], letters: &str, beam_size: usize) -> Result<Board> {
        let dictionary = Dictionary::from_words(words)?;
        let letters: LetterBag = letters.parse()?;
        BeamSearch::new(&dictionary)
            .with_beam_size(beam_size)
            .search(&Board::new(), &letters)
    }

    #[test]
    fn test_solves_single_word() -> Result<()> {
        let board = solve(&["cab"], "cab", 100)?;
        assert_eq!(board.to_string(), "CAB\n");
        Ok(())
    }

    #[test]
    fn test_solves_crossing_words() -> Result<()> {
        let words = &["cab", "bad"];
        let board = solve(words, "cabad", 100)?;
        let dictionary = Dictionary::from_words(words)?;
        assert!(board_is_valid(&dictionary, &board));
        assert_eq!(board.len(), 5);
        Ok(())
    }

    #[test]
    fn test_recovers_where_first_branch_dead_ends() -> Result<()> {
        // AB sorts first and dead-ends with a C left over; a beam of two
        // keeps the ABC branch alive as well
        let board = solve(&["ab", "abc"], "abc", 2)?;
        assert_eq!(board.to_string(), "ABC\n");
        Ok(())
    }

    #[test]
    fn test_monotone_in_beam_size() -> Result<()> {
        // growing the beam never loses a solvable case
        for beam_size in [2, 3, 10, 100] {
            let board = solve(&["ab", "abc"], "abc", beam_size)?;
            assert_eq!(board.to_string(), "ABC\n");
        }
        Ok(())
    }

    #[test]
    fn test_unsolvable_empties_beam() {
        let result = solve(&["cab", "bad"], "xyz", 100);
        assert!(matches!(result, Err(Error::NoSolution)));
    }

    #[test]
    fn test_depth_limit() -> Result<()> {
        let dictionary = Dictionary::from_words(&["cab", "bad"])?;
        let letters: LetterBag = "cabad".parse()?;
        // a depth of one never gets past the root
        let search = BeamSearch::new(&dictionary).with_max_depth(1);
        let result = search.search(&Board::new(), &letters);
        assert!(matches!(result, Err(Error::DepthLimitReached(1))));
        // a depth of three reaches the two-word solution
        let search = BeamSearch::new(&dictionary).with_max_depth(3);
        assert!(search.search(&Board::new(), &letters).is_ok());
        Ok(())
    }

    #[test]
    fn test_prefers_rare_letters_first() -> Result<()> {
        // scoring sanity: the rarity term ranks a Q board above an E board
        let dictionary = Dictionary::from_words(&["qi", "en"])?;
        let search = BeamSearch::new(&dictionary);
        let qi: Board = "QI".parse()?;
        let en: Board = "EN".parse()?;
        let empty: LetterBag = LetterBag::new();
        let score_qi = search.score(&qi, &empty, &[]);
        let score_en = search.score(&en, &empty, &[]);
        assert!(score_qi > score_en);
        Ok(())
    }

    #[test]
    fn test_extends_starting_board() -> Result<()> {
        let dictionary = Dictionary::from_words(&["cab", "bad", "dad"])?;
        let letters: LetterBag = "ad".parse()?;
        let start: Board = "CAB".parse()?;
        let board = BeamSearch::new(&dictionary).search(&start, &letters)?;
        assert_eq!(board.to_string(), "CAB\n  A\n  D\n");
        Ok(())
    }
}
