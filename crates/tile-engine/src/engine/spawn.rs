use rand::seq::SliceRandom;
use rand::Rng;

use super::state::{Grid, Tile};

/// Place up to `max_count` new tiles on distinct empty cells, chosen
/// uniformly at random. Each new tile is 2 or 4 with equal probability.
///
/// Returns `false` without touching the grid when there is no empty cell.
/// Never overwrites an existing tile.
///
/// ```
/// use tile_engine::engine::{spawn, Grid};
/// use rand::{rngs::StdRng, SeedableRng};
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut g = Grid::new(4).unwrap();
/// assert!(spawn(&mut g, &mut rng, 3));
/// assert_eq!(g.count_empty(), 13);
/// ```
pub fn spawn<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R, max_count: usize) -> bool {
    let mut empty = grid.empty_cells();
    if empty.is_empty() {
        return false;
    }
    empty.shuffle(rng);
    for &(row, col) in empty.iter().take(max_count) {
        grid.set(row, col, generate_random_tile(rng));
    }
    true
}

/// Session-start convenience: identical to [`spawn`] with `count` tiles.
pub fn initial_spawn<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R, count: usize) {
    // A freshly created grid always has room; the flag carries no information here.
    let _ = spawn(grid, rng, count);
}

pub(crate) fn generate_random_tile<R: Rng + ?Sized>(rng: &mut R) -> Tile {
    2 << rng.gen_range(0u32..2)
}

impl Grid {
    /// Method form of [`spawn`].
    #[inline]
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R, max_count: usize) -> bool {
        spawn(self, rng, max_count)
    }
}
