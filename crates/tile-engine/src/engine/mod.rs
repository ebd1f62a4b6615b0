//! Engine module: square tile grid, rotation, gravity merge, random spawns
//! and the game-over check. Public API stays small and ergonomic.
//!
//! - `Grid` is the validated `N x N` board with read-only accessors.
//! - Free functions mirror the `Grid` methods (e.g., `apply_move`, `spawn`).
//! - Only the upward merge has its own algorithm; other directions are
//!   derived by rotating, merging up, and rotating back.

mod error;
mod ops;
mod rotate;
mod spawn;
pub mod state;

#[cfg(test)]
pub(crate) mod testutil;

pub use error::GridError;
pub use ops::{apply_move, can_merge, is_game_over, merge, MoveReport};
pub use rotate::rotate;
pub use spawn::{initial_spawn, spawn};
pub use state::{is_valid_tile, Angle, Direction, Grid, Tile, MAX_TILE};

/// Create an all-empty `size x size` grid. Fails for `size == 0`.
pub fn create_grid(size: usize) -> Result<Grid, GridError> {
    Grid::new(size)
}
