#![deny(
    clippy::used_underscore_binding,
    clippy::map_unwrap_or,
    clippy::int_plus_one,
    clippy::string_add_assign,
    clippy::if_not_else,
    clippy::invalid_upcast_comparisons,
    clippy::mutex_integer,
    clippy::mut_mut,
    clippy::items_after_statements,
    clippy::mem_forget,
    clippy::maybe_infinite_iter
)]

//! A Bananagrams-style board builder for Rust.
//! <br>
//! Given a dictionary of admissible words and a bag of letter tiles, this
//! crate searches for a connected crossword arrangement in which every
//! maximal horizontal or vertical run of two or more tiles spells a
//! dictionary word, and all the letters in the bag are used.
//!
//! The search is driven by constraints: for each state the
//! [`ConstraintGenerator`] enumerates every legal way to attach one new word
//! (the first word at the origin, later words perpendicularly through an
//! open anchor tile), and a search engine explores the resulting boards.
//! [`Dfs`] takes the first solution it can reach; [`BeamSearch`] keeps the
//! most promising partial boards, ranked by a tunable heuristic
//! ([`BeamWeights`]), and can use the `rayon` feature to expand them in
//! parallel.
//!
//! # Basic usage
//! ```
//! # use banana_solver::{Board, Dictionary, Dfs, LetterBag, Error};
//! let dictionary = Dictionary::from_words(&["cab", "bad"])?;
//! let letters: LetterBag = "abcad".parse()?;
//! let board = Dfs::new(&dictionary).search(&Board::new(), &letters)?;
//! assert_eq!(board.get_words().len(), 2);
//! assert!(letters.can_build(
//!     &board.iter().map(|tile| tile.value()).collect::<String>()
//! ));
//! # Ok::<(), Error>(())
//! ```
mod board;
mod constraint;
mod dictionary;
mod error;
mod generator;
mod histogram;
mod letterbag;
mod letterset;
mod search;
mod tiles;
mod validation;

pub use crate::board::Board;
pub use crate::constraint::Constraint;
pub use crate::dictionary::Dictionary;
pub use crate::error::Error;
pub use crate::generator::ConstraintGenerator;
pub use crate::histogram::{LetterHistogram, ENGLISH_TILE_COUNTS};
pub use crate::letterbag::LetterBag;
pub use crate::letterset::LetterSet;
pub use crate::search::{BeamSearch, BeamWeights, Dfs};
pub use crate::tiles::{Direction, Offset, Position, Tile, Word};
pub use crate::validation::{validate_letter, validate_word};
