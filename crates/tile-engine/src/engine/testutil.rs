use proptest::prelude::*;

use super::state::{Grid, Tile};

/// Shorthand for a validated grid in tests.
pub(crate) fn grid(rows: &[&[Tile]]) -> Grid {
    Grid::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
}

/// Arbitrary valid grid of side 1..=6 with tiles up to 2048.
pub(crate) fn arb_grid() -> impl Strategy<Value = Grid> {
    (1usize..7).prop_flat_map(|n| {
        proptest::collection::vec(proptest::collection::vec(0u32..12, n), n).prop_map(|exps| {
            let rows = exps
                .into_iter()
                .map(|row| {
                    row.into_iter()
                        .map(|e| if e == 0 { 0 } else { 1u32 << e })
                        .collect()
                })
                .collect();
            Grid::from_rows(rows).unwrap()
        })
    })
}

/// Arbitrary grid with no empty cell.
pub(crate) fn arb_full_grid() -> impl Strategy<Value = Grid> {
    (1usize..6).prop_flat_map(|n| {
        proptest::collection::vec(proptest::collection::vec(1u32..8, n), n).prop_map(|exps| {
            let rows = exps
                .into_iter()
                .map(|row| row.into_iter().map(|e| 1u32 << e).collect())
                .collect();
            Grid::from_rows(rows).unwrap()
        })
    })
}
