use serde::{Deserialize, Serialize};

use crate::core::grid::Tile;

/// Running statistics of a game.
///
/// - **Score**: sum of the merge scores of every turn, never decreasing
/// - **Move count**: number of accepted moves, including moves that changed nothing
/// - **Best turn**: highest score gained by a single move
/// - **Highest tile**: largest tile ever present on the grid
///
/// # Example
///
/// ```
/// use twenty48_engine::GameStats;
///
/// let mut stats = GameStats::new();
/// stats.complete_move(6, 8);
/// stats.complete_move(0, 8);
///
/// assert_eq!(stats.score(), 6);
/// assert_eq!(stats.move_count(), 2);
/// assert_eq!(stats.best_turn_score(), 6);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    score: u64,
    move_count: usize,
    best_turn_score: u64,
    highest_tile: Tile,
}

impl GameStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            move_count: 0,
            best_turn_score: 0,
            highest_tile: 0,
        }
    }

    #[must_use]
    pub const fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub const fn move_count(&self) -> usize {
        self.move_count
    }

    #[must_use]
    pub const fn best_turn_score(&self) -> u64 {
        self.best_turn_score
    }

    #[must_use]
    pub const fn highest_tile(&self) -> Tile {
        self.highest_tile
    }

    /// Records the grid's highest tile without counting a move.
    pub fn observe_tile(&mut self, tile: Tile) {
        self.highest_tile = self.highest_tile.max(tile);
    }

    /// Updates statistics after a move.
    ///
    /// # Arguments
    ///
    /// * `score_delta` - Score gained by the move's merges
    /// * `highest_tile` - Highest tile on the grid after the move
    pub fn complete_move(&mut self, score_delta: u64, highest_tile: Tile) {
        self.move_count += 1;
        self.score += score_delta;
        self.best_turn_score = self.best_turn_score.max(score_delta);
        self.observe_tile(highest_tile);
    }
}
