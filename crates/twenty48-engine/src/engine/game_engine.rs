use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{
    GridShapeError,
    core::{grid::Grid, moves::Move},
    engine::{
        game_stats::GameStats,
        resolver::resolve_move,
        spawner::{TileSeed, TileSpawner},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant)]
pub enum SessionState {
    Playing,
    GameOver,
}

/// Parameters of a new game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of rows and columns.
    pub size: usize,
    /// Number of tiles placed on the empty grid before the first move.
    pub initial_tiles: usize,
    /// Seed for tile placement; a random seed is used when unset.
    pub seed: Option<TileSeed>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: 4,
            initial_tiles: GameEngine::INITIAL_TILES,
            seed: None,
        }
    }
}

/// Outcome of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnResult {
    pub score_delta: u64,
    pub game_over: bool,
}

/// Snapshot of everything a caller can observe about a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub grid: Grid,
    pub score: u64,
    pub move_count: usize,
    pub game_over: bool,
}

/// A single game of 2048.
///
/// Owns the grid exclusively. The game is [`SessionState::Playing`] until a
/// move leaves the grid stuck, after which it is [`SessionState::GameOver`]
/// for good and every further move is ignored.
#[derive(Debug, Clone)]
pub struct GameEngine {
    grid: Grid,
    spawner: TileSpawner,
    stats: GameStats,
    session_state: SessionState,
    config: GameConfig,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    pub const INITIAL_TILES: usize = 4;

    /// Creates a 4×4 game with a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default()).expect("default grid size should be valid")
    }

    /// Creates a game from `config`, seeding the empty grid with its initial tiles.
    pub fn with_config(config: GameConfig) -> Result<Self, GridShapeError> {
        let mut grid = Grid::new(config.size)?;
        let mut spawner = config.seed.map_or_else(TileSpawner::new, TileSpawner::with_seed);
        spawner.spawn(&mut grid, config.initial_tiles);
        let mut engine = Self::from_parts(grid, spawner, config);
        engine.update_session_state();
        Ok(engine)
    }

    /// Creates a game around an existing grid without placing any tile.
    ///
    /// The grid is checked immediately, so a stuck grid yields a game that is
    /// already over.
    #[must_use]
    pub fn from_grid(grid: Grid, spawner: TileSpawner) -> Self {
        let config = GameConfig {
            size: grid.size(),
            initial_tiles: 0,
            seed: None,
        };
        let mut engine = Self::from_parts(grid, spawner, config);
        engine.update_session_state();
        engine
    }

    fn from_parts(grid: Grid, spawner: TileSpawner, config: GameConfig) -> Self {
        let mut stats = GameStats::new();
        stats.observe_tile(grid.max_tile());
        Self {
            grid,
            spawner,
            stats,
            session_state: SessionState::Playing,
            config,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.stats.score()
    }

    #[must_use]
    pub fn move_count(&self) -> usize {
        self.stats.move_count()
    }

    #[must_use]
    pub fn session_state(&self) -> SessionState {
        self.session_state
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.session_state.is_game_over()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        GameState {
            grid: self.grid.clone(),
            score: self.score(),
            move_count: self.move_count(),
            game_over: self.is_over(),
        }
    }

    /// Applies one move and spawns a new tile.
    ///
    /// Every move is accepted while playing, including ones that leave the
    /// tiles where they were. Returns `None` without touching the game once it
    /// is over.
    pub fn apply_move(&mut self, mv: Move) -> Option<TurnResult> {
        if self.is_over() {
            return None;
        }

        let score_delta = resolve_move(&mut self.grid, mv, &mut self.spawner);
        self.stats.complete_move(score_delta, self.grid.max_tile());
        trace!(
            "move {} ({mv}): +{score_delta}, score {}",
            self.stats.move_count(),
            self.stats.score()
        );

        self.update_session_state();
        Some(TurnResult {
            score_delta,
            game_over: self.is_over(),
        })
    }

    fn update_session_state(&mut self) {
        if self.session_state.is_playing() && self.grid.is_stuck() {
            debug!(
                "game over after {} moves with score {}",
                self.stats.move_count(),
                self.stats.score()
            );
            self.session_state = SessionState::GameOver;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: TileSeed = TileSeed::from_bytes([
        0xA5, 0x5A, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D,
        0x0E,
    ]);

    fn seeded_config(size: usize) -> GameConfig {
        GameConfig {
            size,
            seed: Some(SEED),
            ..GameConfig::default()
        }
    }

    fn engine_from_ascii(art: &str) -> GameEngine {
        GameEngine::from_grid(Grid::from_ascii(art), TileSpawner::with_seed(SEED))
    }

    #[test]
    fn test_new_game_has_four_tiles() {
        let engine = GameEngine::new();
        assert_eq!(engine.grid().size(), 4);
        assert_eq!(engine.grid().count_empty(), 12);
        assert!(engine.grid().cells().iter().all(|v| [0, 2, 4].contains(v)));
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.move_count(), 0);
        assert!(engine.session_state().is_playing());
    }

    #[test]
    fn test_with_config_rejects_small_grid() {
        let result = GameEngine::with_config(GameConfig {
            size: 1,
            ..GameConfig::default()
        });
        assert!(matches!(result, Err(GridShapeError::TooSmall { size: 1 })));
    }

    #[test]
    fn test_larger_grid() {
        let engine = GameEngine::with_config(seeded_config(6)).unwrap();
        assert_eq!(engine.grid().size(), 6);
        assert_eq!(engine.grid().count_empty(), 32);
    }

    #[test]
    fn test_full_move_scenario() {
        let mut engine = engine_from_ascii(
            r"
            2 2 4 4
            . . . .
            . . . .
            . . . .
            ",
        );
        let result = engine.apply_move(Move::Left).unwrap();

        assert_eq!(result.score_delta, 6);
        assert!(!result.game_over);
        assert_eq!(&engine.grid().row(0)[..2], &[4, 8]);
        assert_eq!(engine.grid().count_empty(), 13);
        assert!([14, 16].contains(&engine.grid().sum()));
        assert_eq!(engine.score(), 6);
        assert_eq!(engine.move_count(), 1);
        assert_eq!(engine.stats().highest_tile(), 8);
    }

    #[test]
    fn test_unchanged_move_is_still_counted() {
        let mut engine = engine_from_ascii(
            r"
            2 . .
            . . .
            . . .
            ",
        );
        let result = engine.apply_move(Move::Left).unwrap();
        assert_eq!(result.score_delta, 0);
        assert_eq!(engine.move_count(), 1);
        assert_eq!(engine.grid().count_empty(), 7);
    }

    #[test]
    fn test_stuck_grid_starts_over() {
        let mut engine = engine_from_ascii(
            r"
            2 4
            4 2
            ",
        );
        assert!(engine.is_over());
        assert!(engine.state().game_over);

        let before = engine.state();
        assert_eq!(engine.apply_move(Move::Left), None);
        assert_eq!(engine.state(), before);
    }

    #[test]
    fn test_move_into_stuck_grid_ends_game() {
        // whatever lands in the corner, it neighbours 16 and 8
        let mut engine = engine_from_ascii(
            r"
            2 16
            8  .
            ",
        );
        assert!(!engine.is_over());

        let result = engine.apply_move(Move::Left).unwrap();
        assert_eq!(result.score_delta, 0);
        assert!(result.game_over);
        assert!(engine.session_state().is_game_over());
        assert_eq!(engine.move_count(), 1);

        let before = engine.state();
        for mv in Move::ALL {
            assert_eq!(engine.apply_move(mv), None);
        }
        assert_eq!(engine.state(), before);
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = GameEngine::with_config(seeded_config(4)).unwrap();
        let mut b = GameEngine::with_config(seeded_config(4)).unwrap();
        assert_eq!(a.grid(), b.grid());

        for mv in [Move::Left, Move::Up, Move::Up, Move::Right, Move::Down].repeat(20) {
            assert_eq!(a.apply_move(mv), b.apply_move(mv));
            assert_eq!(a.state(), b.state());
        }
    }

    #[test]
    fn test_invariants_over_a_long_game() {
        let mut engine = GameEngine::with_config(seeded_config(4)).unwrap();
        let mut last_score = 0;
        let mut moves = [Move::Left, Move::Down, Move::Right, Move::Up]
            .into_iter()
            .cycle();

        while !engine.is_over() && engine.move_count() < 5000 {
            let sum_before = engine.grid().sum();
            let result = engine.apply_move(moves.next().unwrap()).unwrap();

            let added = engine.grid().sum() - sum_before;
            assert!([0, 2, 4].contains(&added), "sum grew by {added}");
            assert!(
                engine
                    .grid()
                    .cells()
                    .iter()
                    .all(|&v| v == 0 || v.is_power_of_two() && v >= 2)
            );
            assert!(engine.score() >= last_score);
            assert_eq!(engine.score(), last_score + result.score_delta);
            last_score = engine.score();
        }
    }

    #[test]
    fn test_state_serialization() {
        let engine = engine_from_ascii(
            r"
            2 .
            . 4
            ",
        );
        let json = serde_json::to_string(&engine.state()).unwrap();
        assert_eq!(
            json,
            r#"{"grid":[[2,0],[0,4]],"score":0,"move_count":0,"game_over":false}"#
        );
        let state: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, engine.state());
    }

    #[test]
    fn test_config_defaults_when_deserializing() {
        let config: GameConfig = serde_json::from_str(r#"{"size":5}"#).unwrap();
        assert_eq!(config.size, 5);
        assert_eq!(config.initial_tiles, GameEngine::INITIAL_TILES);
        assert_eq!(config.seed, None);
    }
}
