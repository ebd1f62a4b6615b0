use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::{self, Direction, Grid, GridError, Tile};

/// Largest grid side a session accepts.
pub const MAX_SIZE: usize = 256;

/// Configuration rejected by [`Session::new`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Grid(#[from] GridError),

    /// An empty starting grid never changes, so the game could never end.
    #[error("initial_tiles must be at least 1")]
    NoInitialTiles,

    #[error("grid size {size} exceeds the maximum of {max}")]
    SizeTooLarge { size: usize, max: usize },
}

/// Parameters of a single game session.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SessionConfig {
    /// Side length of the square grid.
    #[serde(default = "defaults::size")]
    pub size: usize,
    /// Tiles placed when the session starts or is reset.
    #[serde(default = "defaults::initial_tiles")]
    pub initial_tiles: usize,
    /// Upper bound on tiles placed after each successful move.
    #[serde(default = "defaults::spawn_per_move")]
    pub spawn_per_move: usize,
    /// Points awarded for each move that changed the grid.
    #[serde(default = "defaults::score_per_move")]
    pub score_per_move: u64,
    /// Fixed RNG seed; drawn from entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            size: defaults::size(),
            initial_tiles: defaults::initial_tiles(),
            spawn_per_move: defaults::spawn_per_move(),
            score_per_move: defaults::score_per_move(),
            seed: None,
        }
    }
}

mod defaults {
    pub fn size() -> usize { 4 }
    pub fn initial_tiles() -> usize { 3 }
    pub fn spawn_per_move() -> usize { 2 }
    pub fn score_per_move() -> u64 { 2 }
}

/// Result of one turn: merge, optional spawn, game-over check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub changed: bool,
    pub spawned: bool,
    pub game_over: bool,
}

/// End-of-game (or on-quit) snapshot for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub score: u64,
    pub moves: u64,
    pub highest_tile: Tile,
    pub seed: u64,
    pub game_over: bool,
    pub grid: Grid,
}

/// Owns the grid, the score and the one random source of a game.
///
/// The RNG is seeded once in [`Session::new`] and never reseeded, including
/// across [`Session::reset`]. Every turn runs merge -> spawn -> over-check to
/// completion before the next one is accepted.
pub struct Session {
    config: SessionConfig,
    grid: Grid,
    score: u64,
    moves: u64,
    seed: u64,
    rng: StdRng,
}

impl Session {
    /// Start a session: empty grid plus `initial_tiles` random tiles.
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        if config.size > MAX_SIZE {
            return Err(SessionError::SizeTooLarge {
                size: config.size,
                max: MAX_SIZE,
            });
        }
        if config.initial_tiles == 0 {
            return Err(SessionError::NoInitialTiles);
        }
        let grid = engine::create_grid(config.size)?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let rng = StdRng::seed_from_u64(seed);
        info!(
            "Starting session: size={} initial_tiles={} spawn_per_move={} seed={}",
            config.size, config.initial_tiles, config.spawn_per_move, seed
        );
        let mut session = Self {
            config,
            grid,
            score: 0,
            moves: 0,
            seed,
            rng,
        };
        session.populate();
        Ok(session)
    }

    /// Perform a move. Awards `score_per_move` and spawns new tiles only when
    /// the grid changed. A finished session ignores further moves.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.is_game_over() {
            return MoveOutcome {
                changed: false,
                spawned: false,
                game_over: true,
            };
        }
        let report = self.grid.merge(direction);
        let mut spawned = false;
        if report.changed {
            self.score += self.config.score_per_move;
            self.moves += 1;
            spawned = engine::spawn(&mut self.grid, &mut self.rng, self.config.spawn_per_move);
        }
        let game_over = self.is_game_over();
        debug!(
            "move {}: changed={} merges={} merged_value={} spawned={} score={}",
            direction, report.changed, report.merges, report.merged_value, spawned, self.score
        );
        if game_over {
            info!(
                "Game over: score={} moves={} highest_tile={}",
                self.score,
                self.moves,
                self.grid.highest_tile()
            );
        }
        MoveOutcome {
            changed: report.changed,
            spawned,
            game_over,
        }
    }

    /// Start over on a fresh grid of the same size. Score and move count go
    /// back to zero; the random source keeps its state.
    pub fn reset(&mut self) {
        let n = self.grid.size();
        self.grid = Grid::from_cells_unchecked(vec![vec![0; n]; n]);
        self.score = 0;
        self.moves = 0;
        self.populate();
        info!("Session reset");
    }

    fn populate(&mut self) {
        engine::initial_spawn(&mut self.grid, &mut self.rng, self.config.initial_tiles);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Number of moves that changed the grid.
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Seed actually in use, whether configured or drawn from entropy.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn is_game_over(&self) -> bool {
        engine::is_game_over(&self.grid)
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            score: self.score,
            moves: self.moves,
            highest_tile: self.grid.highest_tile(),
            seed: self.seed,
            game_over: self.is_game_over(),
            grid: self.grid.clone(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_grid(config: SessionConfig, grid: Grid) -> Self {
        let seed = config.seed.unwrap_or(0);
        Self {
            config,
            grid,
            score: 0,
            moves: 0,
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::testutil::grid;

    fn seeded(seed: u64) -> SessionConfig {
        SessionConfig {
            seed: Some(seed),
            ..Default::default()
        }
    }

    #[test]
    fn new_session_places_initial_tiles() {
        let s = Session::new(seeded(1)).unwrap();
        assert_eq!(s.grid().size(), 4);
        assert_eq!(s.grid().count_empty(), 13);
        assert_eq!(s.score(), 0);
        assert_eq!(s.moves(), 0);
        assert_eq!(s.seed(), 1);
        assert!(!s.is_game_over());
    }

    #[test]
    fn zero_size_session_is_rejected() {
        let cfg = SessionConfig {
            size: 0,
            ..seeded(1)
        };
        assert_eq!(
            Session::new(cfg).err(),
            Some(SessionError::Grid(GridError::ZeroSize))
        );
    }

    #[test]
    fn zero_initial_tiles_is_rejected() {
        let cfg = SessionConfig {
            initial_tiles: 0,
            ..seeded(1)
        };
        assert_eq!(Session::new(cfg).err(), Some(SessionError::NoInitialTiles));
    }

    #[test]
    fn oversized_grid_is_rejected() {
        let cfg = SessionConfig {
            size: usize::MAX,
            ..seeded(1)
        };
        assert_eq!(
            Session::new(cfg).err(),
            Some(SessionError::SizeTooLarge {
                size: usize::MAX,
                max: MAX_SIZE
            })
        );
        let largest = SessionConfig {
            size: MAX_SIZE,
            ..seeded(1)
        };
        assert_eq!(Session::new(largest).unwrap().grid().size(), MAX_SIZE);
    }

    #[test]
    fn same_seed_same_game() {
        let mut a = Session::new(seeded(42)).unwrap();
        let mut b = Session::new(seeded(42)).unwrap();
        assert_eq!(a.grid(), b.grid());
        for d in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
            assert_eq!(a.apply_move(d), b.apply_move(d));
            assert_eq!(a.grid(), b.grid());
        }
        assert_eq!(a.score(), b.score());
    }

    #[test]
    fn changed_move_scores_and_spawns() {
        let cfg = SessionConfig {
            size: 4,
            spawn_per_move: 1,
            ..seeded(3)
        };
        let start = grid(&[&[2, 2, 0, 0], &[0; 4], &[0; 4], &[0; 4]]);
        let mut s = Session::with_grid(cfg, start);
        let out = s.apply_move(Direction::Left);
        assert!(out.changed);
        assert!(out.spawned);
        assert!(!out.game_over);
        assert_eq!(s.score(), 2);
        assert_eq!(s.moves(), 1);
        assert_eq!(s.grid().get(0, 0), 4);
        assert_eq!(s.grid().count_empty(), 14);
        let sum = s.grid().sum();
        assert!(sum == 6 || sum == 8, "merged 4 plus one spawned tile, got {}", sum);
    }

    #[test]
    fn unchanged_move_neither_scores_nor_spawns() {
        let start = grid(&[&[2, 0, 0, 0], &[0; 4], &[0; 4], &[0; 4]]);
        let mut s = Session::with_grid(seeded(3), start.clone());
        let out = s.apply_move(Direction::Up);
        assert_eq!(
            out,
            MoveOutcome {
                changed: false,
                spawned: false,
                game_over: false
            }
        );
        assert_eq!(s.score(), 0);
        assert_eq!(s.grid(), &start);
    }

    #[test]
    fn spawn_increases_sum_by_new_tiles_only() {
        let start = grid(&[&[2, 2, 0, 0], &[4, 0, 0, 0], &[0; 4], &[0; 4]]);
        let before = start.sum();
        let mut s = Session::with_grid(seeded(11), start);
        assert!(s.apply_move(Direction::Left).spawned);
        assert_eq!(s.grid().count_empty(), 12);
        // 2+2 merged into 4 keeps the sum; each of the two spawned tiles adds 2 or 4.
        let added = s.grid().sum() - before;
        assert!((4..=8).contains(&added), "added {}", added);
    }

    #[test]
    fn finished_session_reports_game_over() {
        let locked = grid(&[&[2, 4], &[4, 2]]);
        let mut s = Session::with_grid(seeded(5), locked.clone());
        assert!(s.is_game_over());
        let out = s.apply_move(Direction::Left);
        assert!(out.game_over);
        assert!(!out.changed);
        assert_eq!(s.grid(), &locked);
        let summary = s.summary();
        assert!(summary.game_over);
        assert_eq!(summary.highest_tile, 4);
        assert_eq!(summary.score, 0);
        assert_eq!(summary.grid, locked);
    }

    #[test]
    fn move_into_locked_board_ends_game() {
        let cfg = SessionConfig {
            size: 2,
            spawn_per_move: 1,
            ..seeded(9)
        };
        // Left leaves a single empty cell at (0, 1) which the spawn fills.
        let mut s = Session::with_grid(cfg, grid(&[&[0, 8], &[16, 32]]));
        let out = s.apply_move(Direction::Left);
        assert!(out.changed && out.spawned);
        assert_eq!(s.grid().count_empty(), 0);
        assert!(out.game_over);
        assert!(s.is_game_over());
    }

    #[test]
    fn reset_clears_score_and_repopulates() {
        let mut s = Session::new(seeded(8)).unwrap();
        for d in Direction::ALL {
            s.apply_move(d);
        }
        s.reset();
        assert_eq!(s.score(), 0);
        assert_eq!(s.moves(), 0);
        assert_eq!(s.grid().count_empty(), 13);
        assert_eq!(s.seed(), 8);
    }

    #[test]
    fn config_defaults_from_partial_toml() {
        let cfg: SessionConfig = toml::from_str("size = 5\nseed = 12").unwrap();
        assert_eq!(cfg.size, 5);
        assert_eq!(cfg.seed, Some(12));
        assert_eq!(cfg.initial_tiles, 3);
        assert_eq!(cfg.spawn_per_move, 2);
        assert_eq!(cfg.score_per_move, 2);
    }
}
