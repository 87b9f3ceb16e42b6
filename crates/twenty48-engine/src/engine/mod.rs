//! Game engine logic and state management.
//!
//! This module builds turn-based 2048 gameplay on top of the [`Grid`](crate::Grid)
//! primitives:
//!
//! - [`GameEngine`] - Owns the grid, score and move count; applies moves
//! - [`GameStats`] - Score, move count and other running statistics
//! - [`TileSpawner`] - Seedable placement of new tiles
//! - [`TileSeed`] - Seed for deterministic tile placement
//! - [`resolve_move`] / [`collapse_grid`] - A single move on a bare grid
//!
//! # Game Flow
//!
//! 1. A [`GameEngine`] is created with an empty grid seeded with 4 random tiles
//! 2. The caller applies moves; each move collapses the grid towards its
//!    direction, adds the merge score and spawns one new tile
//! 3. After each move the grid is checked for being stuck
//! 4. Once stuck the engine is over and ignores further moves
//!
//! # Example
//!
//! ```
//! use twenty48_engine::{GameEngine, Move};
//!
//! let mut engine = GameEngine::new();
//!
//! for mv in [Move::Left, Move::Up, Move::Right, Move::Down].into_iter().cycle() {
//!     if engine.apply_move(mv).is_none() {
//!         break;
//!     }
//!     if engine.move_count() == 100 {
//!         break;
//!     }
//! }
//!
//! println!("score: {}", engine.score());
//! ```

pub use self::{game_engine::*, game_stats::*, resolver::*, spawner::*};

mod game_engine;
mod game_stats;
mod resolver;
mod spawner;
mod termination;
