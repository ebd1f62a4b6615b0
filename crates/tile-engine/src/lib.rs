//! tile-engine: the core of a sliding-tile merge puzzle (2048-style).
//!
//! This crate provides:
//! - A validated square `Grid` of power-of-two tiles (`engine` module)
//! - Rotation, directional merge, random spawn and game-over detection
//! - A `Session` that owns the grid, score and a single seeded RNG
//!
//! Quick start:
//! ```
//! use tile_engine::engine::{self, Direction};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut grid = engine::create_grid(4).unwrap();
//! engine::initial_spawn(&mut grid, &mut rng, 2);
//! if engine::apply_move(&mut grid, Direction::Left) {
//!     engine::spawn(&mut grid, &mut rng, 1);
//! }
//! assert!(grid.count_empty() <= 14);
//! ```
//!
//! Full loop through a session:
//! ```
//! use tile_engine::engine::Direction;
//! use tile_engine::session::{Session, SessionConfig};
//!
//! let mut session = Session::new(SessionConfig { seed: Some(7), ..Default::default() }).unwrap();
//! let mut turns = 0;
//! while !session.is_game_over() && turns < 8 {
//!     session.apply_move(Direction::ALL[turns % 4]);
//!     turns += 1;
//! }
//! let _final_score = session.score();
//! ```

pub mod engine;
pub mod session;
