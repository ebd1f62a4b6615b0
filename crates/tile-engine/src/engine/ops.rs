use super::rotate::rotate;
use super::state::{Direction, Grid, Tile, MAX_TILE};

/// What a single merge pass did to the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveReport {
    /// Any tile slid or merged.
    pub changed: bool,
    /// Number of pairwise merges performed.
    pub merges: u32,
    /// Sum of the tiles produced by merges.
    pub merged_value: u64,
}

/// Slide/merge tiles in `direction`, mutating `grid` in place. No randomness.
///
/// Returns whether anything moved or merged.
///
/// ```
/// use tile_engine::engine::{apply_move, Direction, Grid};
/// let mut g = Grid::from_rows(vec![vec![2, 2], vec![0, 0]]).unwrap();
/// assert!(apply_move(&mut g, Direction::Left));
/// assert_eq!(g.to_rows(), vec![vec![4, 0], vec![0, 0]]);
/// ```
pub fn apply_move(grid: &mut Grid, direction: Direction) -> bool {
    merge(grid, direction).changed
}

/// Same as [`apply_move`] but returns the full [`MoveReport`].
///
/// Every direction is realised as rotate -> merge up -> rotate back, so only
/// the upward pass has its own algorithm.
pub fn merge(grid: &mut Grid, direction: Direction) -> MoveReport {
    match direction.canonical_rotation() {
        None => merge_up(grid),
        Some((forward, back)) => {
            let mut turned = rotate(grid, forward);
            let report = merge_up(&mut turned);
            if report.changed {
                *grid = rotate(&turned, back);
            }
            report
        }
    }
}

/// Up-merge: for each column, walk every tile toward row 0 across empty
/// cells, merging it with an equal predecessor at most once.
///
/// A tile produced by a merge during this pass is frozen, so `[2,2,2,2]`
/// becomes `[4,4,0,0]` and not `[8,0,0,0]`.
fn merge_up(grid: &mut Grid) -> MoveReport {
    let n = grid.size();
    let cells = grid.cells_mut();
    let mut report = MoveReport::default();
    let mut frozen = vec![false; n];

    for col in 0..n {
        frozen.iter_mut().for_each(|f| *f = false);
        for row in 1..n {
            let mut t = row;
            while t > 0 {
                let cur = cells[t][col];
                if cur == 0 {
                    break;
                }
                let prev = cells[t - 1][col];
                if prev == 0 {
                    cells[t - 1][col] = cur;
                    cells[t][col] = 0;
                    report.changed = true;
                    t -= 1;
                    continue;
                }
                if prev == cur && !frozen[t - 1] && can_double(cur) {
                    let doubled = cur << 1;
                    cells[t - 1][col] = doubled;
                    cells[t][col] = 0;
                    frozen[t - 1] = true;
                    report.changed = true;
                    report.merges += 1;
                    report.merged_value += doubled as u64;
                }
                break;
            }
        }
    }
    report
}

#[inline]
fn can_double(tile: Tile) -> bool {
    tile < MAX_TILE
}

#[inline]
fn mergeable(a: Tile, b: Tile) -> bool {
    a != 0 && a == b && can_double(a)
}

/// True while any move can still change the grid: there is an empty cell, or
/// two orthogonally adjacent tiles are equal (and below the tile cap).
///
/// Each cell is compared only with its upper and left neighbour; adjacency is
/// symmetric so every pair is still visited once.
pub fn can_merge(grid: &Grid) -> bool {
    let rows: Vec<&[Tile]> = grid.rows().collect();
    for (r, row) in rows.iter().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            if v == 0 {
                return true;
            }
            if r > 0 && mergeable(v, rows[r - 1][c]) {
                return true;
            }
            if c > 0 && mergeable(v, row[c - 1]) {
                return true;
            }
        }
    }
    false
}

/// Game over: the grid is full and no adjacent pair can merge.
pub fn is_game_over(grid: &Grid) -> bool {
    !can_merge(grid)
}

impl Grid {
    /// Method form of [`apply_move`].
    #[inline]
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        apply_move(self, direction)
    }

    /// Method form of [`merge`].
    #[inline]
    pub fn merge(&mut self, direction: Direction) -> MoveReport {
        merge(self, direction)
    }

    /// Method form of [`can_merge`].
    #[inline]
    pub fn can_merge(&self) -> bool {
        can_merge(self)
    }

    /// Method form of [`is_game_over`].
    #[inline]
    pub fn is_game_over(&self) -> bool {
        is_game_over(self)
    }
}
