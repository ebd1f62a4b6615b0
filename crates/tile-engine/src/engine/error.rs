use thiserror::Error;

use super::state::Tile;

/// Precondition violations rejected before a `Grid` can exist.
///
/// Operations on an already-constructed grid are total and never fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A grid needs at least one row and one column.
    #[error("grid size must be positive")]
    ZeroSize,

    /// A row whose length disagrees with the number of rows.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell holding something other than 0 or a power of two >= 2.
    #[error("cell ({row}, {col}) holds {value}, which is not a tile value")]
    InvalidTile { row: usize, col: usize, value: Tile },
}
