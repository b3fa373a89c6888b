use crate::tiles::Position;
use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading a word file
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// A letter must be a single ascii alphabetic character
    #[error("Invalid letter '{0}'")]
    InvalidLetter(char),

    /// A word must be non-empty and ascii alphabetic
    #[error("Invalid word {0:?}")]
    InvalidWord(String),

    /// Only the four axis-aligned unit vectors are directions
    #[error("Invalid direction ({dx}, {dy})")]
    InvalidDirection { dx: i32, dy: i32 },

    /// A word needs at least two tiles
    #[error("Word must have at least two tiles, not {0}")]
    WordTooShort(usize),

    /// Word tiles must be contiguous along a single direction
    #[error("Word tiles starting at {0} are not colinear and contiguous")]
    WordNotLinear(Position),

    /// Attempt to replace a tile already on the board
    #[error("Attempt to replace tile at {0}")]
    TileReplaceError(Position),

    /// The search exhausted its frontier without a solution
    #[error("No solution found")]
    NoSolution,

    /// Beam search hit its depth limit before finding a solution
    #[error("No solution found within depth {0}")]
    DepthLimitReached(usize),
}
