use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::GridError;

/// A single cell value: 0 for empty, otherwise a power of two >= 2.
pub type Tile = u32;

/// Largest tile the engine will produce. Two equal tiles at this value are
/// blocked from merging rather than overflowing.
pub const MAX_TILE: Tile = 1 << 31;

/// A direction to slide/merge tiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Rotation that maps this direction onto canonical `Up`, paired with the
    /// rotation that undoes it. `None` for `Up` itself.
    #[inline]
    pub fn canonical_rotation(self) -> Option<(Angle, Angle)> {
        match self {
            Direction::Up => None,
            Direction::Down => Some((Angle::Deg180, Angle::Deg180)),
            Direction::Left => Some((Angle::Deg90, Angle::Deg270)),
            Direction::Right => Some((Angle::Deg270, Angle::Deg90)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// Clockwise rotation angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Angle {
    Deg90,
    Deg180,
    Deg270,
}

impl Angle {
    pub const ALL: [Angle; 3] = [Angle::Deg90, Angle::Deg180, Angle::Deg270];

    /// The angle that undoes this one.
    #[inline]
    pub fn inverse(self) -> Angle {
        match self {
            Angle::Deg90 => Angle::Deg270,
            Angle::Deg180 => Angle::Deg180,
            Angle::Deg270 => Angle::Deg90,
        }
    }

    #[inline]
    pub fn degrees(self) -> u32 {
        self.quarter_turns() * 90
    }

    #[inline]
    pub fn quarter_turns(self) -> u32 {
        match self {
            Angle::Deg90 => 1,
            Angle::Deg180 => 2,
            Angle::Deg270 => 3,
        }
    }
}

/// Square `size x size` board of tiles, indexed `[row][col]`.
///
/// The only constructors validate their input, so every `Grid` in
/// circulation is square and holds only empty cells or powers of two.
/// Mutation goes through the engine operations (`merge`, `spawn`); callers
/// get read-only access to the cells.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Vec<Tile>>,
}

impl Grid {
    /// Create an all-empty grid.
    ///
    /// ```
    /// use tile_engine::engine::Grid;
    /// let g = Grid::new(4).unwrap();
    /// assert_eq!(g.count_empty(), 16);
    /// ```
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::ZeroSize);
        }
        Ok(Grid {
            size,
            cells: vec![vec![0; size]; size],
        })
    }

    /// Build a grid from explicit rows, rejecting ragged or non-square input
    /// and any value that is neither 0 nor a power of two >= 2.
    ///
    /// ```
    /// use tile_engine::engine::Grid;
    /// let g = Grid::from_rows(vec![vec![2, 4], vec![0, 8]]).unwrap();
    /// assert_eq!(g.get(1, 1), 8);
    /// assert!(Grid::from_rows(vec![vec![2, 3], vec![0, 0]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::ZeroSize);
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != size {
                return Err(GridError::RaggedRow {
                    row,
                    expected: size,
                    found: cells.len(),
                });
            }
            for (col, &value) in cells.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(GridError::InvalidTile { row, col, value });
                }
            }
        }
        Ok(Grid { size, cells: rows })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Tile at `(row, col)`. Panics when out of bounds, like slice indexing.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Tile {
        self.cells[row][col]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Copy of the cells as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.cells.clone()
    }

    /// Row-major positions of every empty cell.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                if v == 0 {
                    out.push((r, c));
                }
            }
        }
        out
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v == 0).count()
    }

    /// Highest tile on the board, 0 when empty.
    pub fn highest_tile(&self) -> Tile {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Sum of all tile values.
    pub fn sum(&self) -> u64 {
        self.cells.iter().flatten().map(|&v| v as u64).sum()
    }

    pub(crate) fn from_cells_unchecked(cells: Vec<Vec<Tile>>) -> Self {
        debug_assert!(cells.iter().all(|row| row.len() == cells.len()));
        Grid {
            size: cells.len(),
            cells,
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, value: Tile) {
        debug_assert!(is_valid_tile(value));
        self.cells[row][col] = value;
    }

    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [Vec<Tile>] {
        &mut self.cells
    }
}

/// True for 0 and for powers of two >= 2.
#[inline]
pub fn is_valid_tile(value: Tile) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("size", &self.size)
            .field("cells", &self.cells)
            .finish()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = cell_width(self.highest_tile());
        let rule = "-".repeat(self.size * (width + 1) - 1);
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f, "{}", rule)?;
            }
            let line: Vec<String> = row.iter().map(|&v| format_val(v, width)).collect();
            writeln!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}

fn cell_width(highest: Tile) -> usize {
    // Pad so a four-digit tile still leaves a space on either side.
    highest.to_string().len().max(4) + 2
}

fn format_val(val: Tile, width: usize) -> String {
    match val {
        0 => " ".repeat(width),
        x => format!("{:>w$} ", x, w = width - 1),
    }
}
