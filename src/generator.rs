use crate::board::Board;
use crate::constraint::Constraint;
use crate::dictionary::Dictionary;
use crate::letterbag::LetterBag;
use crate::letterset::LetterSet;

/// Produces, for a `(board, letters)` state, one constraint per legal way to
/// add a new word.
///
/// On an empty board the only move is the first word at the origin. On a
/// populated board a new word can attach perpendicularly through any *open
/// anchor*: a tile whose two perpendicular neighbours are both empty. A tile
/// with an occupied perpendicular neighbour is skipped, since any word
/// through it would collide with an adjacent tile outside the overlap point.
#[derive(Debug, Clone)]
pub struct ConstraintGenerator<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> ConstraintGenerator<'a> {
    pub fn new(dictionary: &'a Dictionary) -> ConstraintGenerator<'a> {
        ConstraintGenerator { dictionary }
    }

    /// The constraints for the current state, in a deterministic order:
    /// board words in extraction order, anchor tiles in word order.
    pub fn generate(&self, board: &Board, letters: &LetterBag) -> Vec<Constraint> {
        if board.is_empty() {
            return vec![Constraint::And(vec![
                self.filter_can_build(letters),
                Constraint::Start,
            ])];
        }
        let mut constraints = Vec::new();
        for word in board.get_words() {
            let direction = word.direction().orthogonal();
            for tile in word.iter() {
                if board.tile_at(tile.position() + direction).is_some()
                    || board.tile_at(tile.position() - direction).is_some()
                {
                    continue;
                }
                // the anchor letter is reused, not consumed, so buildability
                // is checked against the bag extended with it
                constraints.push(Constraint::And(vec![
                    self.filter_can_build(&letters.with_letter(tile.value())),
                    Constraint::Contains(LetterSet::from_letter(tile.value())),
                    Constraint::Anchor(tile.position(), direction),
                ]));
            }
        }
        constraints
    }

    /// An `InSet` over the dictionary words spellable from `letters`.
    /// One-letter dictionary entries are never buildable: a single placed
    /// tile does not form a word.
    fn filter_can_build(&self, letters: &LetterBag) -> Constraint {
        Constraint::InSet(
            self.dictionary
                .words()
                .iter()
                .filter(|word| word.len() >= 2 && letters.can_build(word))
                .cloned()
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag(letters: &str) -> LetterBag {
        letters.parse().unwrap()
    }

    fn survivors(constraint: &Constraint, dictionary: &Dictionary) -> Vec<String> {
        constraint.filter(dictionary.words().to_vec())
    }

    #[test]
    fn test_empty_board_yields_start() {
        let dictionary = Dictionary::from_words(&["cab", "bad"]).unwrap();
        let generator = ConstraintGenerator::new(&dictionary);
        let constraints = generator.generate(&Board::new(), &bag("cab"));
        assert_eq!(constraints.len(), 1);
        // only CAB is buildable from the bag
        assert_eq!(survivors(&constraints[0], &dictionary), vec!["CAB"]);
        let candidates = constraints[0].create_candidates(&Board::new(), "CAB");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].value(), "CAB");
    }

    #[test]
    fn test_open_anchors_only() {
        let dictionary = Dictionary::from_words(&["abc", "cdc", "cef", "ceg"]).unwrap();
        let generator = ConstraintGenerator::new(&dictionary);
        let board: Board = "\
ABC
  D
  C
"
        .parse()
        .unwrap();
        let constraints = generator.generate(&board, &bag("ef"));
        // ABC: A and B are open, C has D below it.
        // CDC: C is blocked by B, D and the lower C are open.
        assert_eq!(constraints.len(), 4);

        // only the anchor on the lower C can build a word from E, F + anchor
        let buildable: Vec<usize> = constraints
            .iter()
            .map(|c| survivors(c, &dictionary).len())
            .collect();
        assert_eq!(buildable, vec![0, 0, 0, 1]);
        assert_eq!(survivors(&constraints[3], &dictionary), vec!["CEF"]);
    }

    #[test]
    fn test_anchor_letter_is_reused_not_consumed() {
        let dictionary = Dictionary::from_words(&["cab", "bad"]).unwrap();
        let generator = ConstraintGenerator::new(&dictionary);
        let board: Board = "CAB".parse().unwrap();
        // BAD is only buildable because the anchored B is free
        let constraints = generator.generate(&board, &bag("ad"));
        let buildable: Vec<Vec<String>> = constraints
            .iter()
            .map(|c| survivors(c, &dictionary))
            .collect();
        let expected: Vec<Vec<String>> = vec![vec![], vec![], vec![String::from("BAD")]];
        assert_eq!(buildable, expected);
    }

    #[test]
    fn test_one_letter_words_are_never_buildable() {
        let dictionary = Dictionary::from_words(&["a", "ab"]).unwrap();
        let generator = ConstraintGenerator::new(&dictionary);
        let constraints = generator.generate(&Board::new(), &bag("ab"));
        assert_eq!(survivors(&constraints[0], &dictionary), vec!["AB"]);
    }
}
