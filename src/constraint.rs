use crate::board::Board;
use crate::letterset::LetterSet;
use crate::tiles::{Direction, Position, Word};
use std::cmp::Reverse;
use std::collections::HashSet;

/// One legal way to narrow and place candidate words.
///
/// A constraint has two operations: [`filter`](Constraint::filter) narrows a
/// list of candidate strings, and
/// [`create_candidates`](Constraint::create_candidates) lifts a string into
/// concrete placements on a board. Variants that have nothing to say for one
/// of the operations pass words through unchanged, or produce no placements.
#[derive(Debug, Clone)]
pub enum Constraint {
    /// Keep only words present in the set, preserving input order.
    InSet(HashSet<String>),
    /// Keep only words whose letter set contains all the given letters.
    Contains(LetterSet),
    /// Stable sort by word length.
    SortByLen { reverse: bool },
    /// Place the word at the origin going ACROSS. Used only for the first
    /// word on an empty board.
    Start,
    /// Place the word through an existing tile, perpendicular to the word the
    /// tile belongs to.
    Anchor(Position, Direction),
    /// Compose constraints: filters chain left to right, candidate placements
    /// concatenate.
    And(Vec<Constraint>),
}

impl Constraint {
    /// Narrow `words` to those satisfying the constraint, preserving order
    /// except where the constraint itself is an ordering.
    pub fn filter(&self, words: Vec<String>) -> Vec<String> {
        match self {
            Constraint::InSet(set) => words.into_iter().filter(|w| set.contains(w)).collect(),
            Constraint::Contains(letters) => words
                .into_iter()
                .filter(|w| LetterSet::from_word(w).is_superset(*letters))
                .collect(),
            Constraint::SortByLen { reverse } => {
                let mut words = words;
                if *reverse {
                    words.sort_by_key(|w| Reverse(w.len()));
                } else {
                    words.sort_by_key(String::len);
                }
                words
            }
            Constraint::And(constraints) => constraints
                .iter()
                .fold(words, |words, constraint| constraint.filter(words)),
            _ => words,
        }
    }

    /// Lift `word` into concrete placements on `board`.
    pub fn create_candidates(&self, board: &Board, word: &str) -> Vec<Word> {
        match self {
            Constraint::Start => {
                Word::from_str(word, Position::new(0, 0), Direction::ACROSS)
                    .into_iter()
                    .collect()
            }
            Constraint::Anchor(position, direction) => (0..word.chars().count() as i32)
                .filter_map(|i| Word::from_str(word, *position - *direction * i, *direction).ok())
                .filter(|candidate| board.can_place_word(candidate))
                .collect(),
            Constraint::And(constraints) => constraints
                .iter()
                .flat_map(|constraint| constraint.create_candidates(board, word))
                .collect(),
            _ => Vec::new(),
        }
    }
}
