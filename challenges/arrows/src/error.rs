use thiserror::Error;

use crate::grid::Coordinate;

pub type Result<T> = std::result::Result<T, ArrowError>;

#[derive(Debug, Error)]
pub enum ArrowError {
    /// A board cell holds something other than `u`, `d`, `l` or `r`.
    #[error("invalid direction symbol {symbol:?} at ({row}, {column})")]
    InvalidSymbol {
        row: usize,
        column: usize,
        symbol: char,
    },

    /// A direction lookup for a coordinate that is not on the board.
    #[error("coordinate {0} is outside the grid")]
    OutOfBounds(Coordinate),

    #[error("cannot select a path from an empty grid")]
    EmptyGrid,

    /// Raised only when a step limit was configured on the traveler.
    #[error("traversal from {start} exceeded the limit of {limit} steps")]
    StepLimitExceeded { start: Coordinate, limit: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
