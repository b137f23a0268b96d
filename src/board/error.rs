//! Typed failure values for board operations.
//!
//! Every error here is recoverable by the calling loop: the engine reports a
//! typed outcome and leaves the grid exactly as it was. Rendering the message
//! (or prompting again) is the caller's decision.

use super::coord::Coord;

/// Rejected board construction: dimensions outside the supported range.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
#[error("invalid board size {rows}x{cols}: need 5 <= cols <= rows <= 25")]
pub struct InvalidSize {
    /// Requested row count.
    pub rows: usize,
    /// Requested column count.
    pub cols: usize,
}

/// Rejected placement. The board is unchanged on any of these.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum PlaceError {
    /// Target coordinate lies outside the grid.
    #[error("cell {0} is outside the board")]
    OutOfBounds(Coord),

    /// Target cell already holds a mark.
    #[error("cell {0} is already occupied")]
    CellOccupied(Coord),

    /// First placement on an empty board must be a center cell.
    #[error("the first mark must go on a center cell, {0} is not one")]
    NotCenter(Coord),

    /// Placement touches no occupied cell in any of the 8 directions.
    #[error("cell {0} does not touch any occupied cell")]
    NoAdjacency(Coord),
}

/// Rejected load. The in-memory board is unchanged on any of these
/// (load is all-or-nothing).
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    /// The file contains no lines at all.
    #[error("the file is empty")]
    EmptyFile,

    /// The first line is not two whitespace-separated dimensions.
    #[error("malformed header line {0:?}, expected \"<rows> <cols>\"")]
    BadHeader(String),

    /// Header dimensions differ from this board's. The engine never resizes
    /// itself from a load.
    #[error("file is for a {rows}x{cols} board, this board is {expected_rows}x{expected_cols}")]
    DimensionMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    /// Fewer body lines than the header's row count.
    #[error("file ends after {found} of {expected} board rows")]
    Truncated { expected: usize, found: usize },

    /// A body character outside the cell alphabet.
    #[error("invalid cell character {ch:?} at row {row}, column {col}")]
    InvalidCellChar { ch: char, row: usize, col: usize },

    /// Underlying file-system failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
