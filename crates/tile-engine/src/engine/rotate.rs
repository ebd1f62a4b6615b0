use super::state::{Angle, Grid};

/// Return `grid` rotated clockwise by `angle`. The input is left untouched.
///
/// For a source cell at `(r, c)` on a grid of side `n`:
/// - 90:  lands at `(c, n-1-r)`
/// - 180: lands at `(n-1-r, n-1-c)`
/// - 270: lands at `(n-1-c, r)`
///
/// ```
/// use tile_engine::engine::{rotate, Angle, Grid};
/// let g = Grid::from_rows(vec![vec![2, 4], vec![8, 16]]).unwrap();
/// let r = rotate(&g, Angle::Deg90);
/// assert_eq!(r.to_rows(), vec![vec![8, 2], vec![16, 4]]);
/// ```
pub fn rotate(grid: &Grid, angle: Angle) -> Grid {
    let n = grid.size();
    let last = n - 1;
    let mut cells = vec![vec![0; n]; n];
    for (r, row) in grid.rows().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            let (tr, tc) = match angle {
                Angle::Deg90 => (c, last - r),
                Angle::Deg180 => (last - r, last - c),
                Angle::Deg270 => (last - c, r),
            };
            cells[tr][tc] = v;
        }
    }
    // A permutation of a valid grid's cells is itself valid.
    Grid::from_cells_unchecked(cells)
}

impl Grid {
    /// Rotated copy of this grid. See [`rotate`].
    #[inline]
    pub fn rotated(&self, angle: Angle) -> Grid {
        rotate(self, angle)
    }
}
