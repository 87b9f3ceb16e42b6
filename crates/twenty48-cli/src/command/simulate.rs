use std::{collections::BTreeMap, path::PathBuf};

use log::{debug, info};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;
use serde::Serialize;
use twenty48_engine::{GameConfig, GameEngine, GridShapeError, Move, Tile, TileSeed};

use crate::{command::GameArgs, util::Output};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    #[clap(flatten)]
    game: GameArgs,
    /// Number of games to play
    #[arg(long, default_value_t = 100)]
    games: usize,
    /// Stop a game after this many moves even if it is not over
    #[arg(long, default_value_t = 100_000)]
    max_moves: usize,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SimulateArg) -> anyhow::Result<()> {
    let SimulateArg {
        game,
        games,
        max_moves,
        output,
    } = arg;
    let config = game.to_config()?;
    let summary = simulate(&config, *games, *max_moves)?;
    info!(
        "played {} games: best score {}, mean score {:.1}",
        summary.games, summary.max_score, summary.mean_score
    );
    Output::save_json(&summary, output.clone())?;
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct GameRecord {
    seed: TileSeed,
    score: u64,
    moves: usize,
    highest_tile: Tile,
    /// Whether the game reached game over within the move limit.
    finished: bool,
}

#[derive(Debug, Clone, Serialize)]
struct SimulationSummary {
    size: usize,
    initial_tiles: usize,
    games: usize,
    min_score: u64,
    max_score: u64,
    mean_score: f64,
    /// Number of games that ended with each highest tile.
    highest_tile_counts: BTreeMap<Tile, usize>,
    records: Vec<GameRecord>,
}

impl SimulationSummary {
    #[expect(clippy::cast_precision_loss)]
    fn new(config: &GameConfig, records: Vec<GameRecord>) -> Self {
        let min_score = records.iter().map(|r| r.score).min().unwrap_or(0);
        let max_score = records.iter().map(|r| r.score).max().unwrap_or(0);
        let total: u64 = records.iter().map(|r| r.score).sum();
        let mean_score = if records.is_empty() {
            0.0
        } else {
            total as f64 / records.len() as f64
        };
        let mut highest_tile_counts = BTreeMap::new();
        for record in &records {
            *highest_tile_counts.entry(record.highest_tile).or_insert(0) += 1;
        }
        Self {
            size: config.size,
            initial_tiles: config.initial_tiles,
            games: records.len(),
            min_score,
            max_score,
            mean_score,
            highest_tile_counts,
            records,
        }
    }
}

/// Plays `games` games with uniformly random moves.
///
/// Game seeds and moves come from one generator seeded by `config.seed`, so a
/// seeded run is reproducible.
fn simulate(
    config: &GameConfig,
    games: usize,
    max_moves: usize,
) -> Result<SimulationSummary, GridShapeError> {
    let mut rng = match config.seed {
        Some(seed) => Pcg32::from_seed(seed.to_bytes()),
        None => Pcg32::from_rng(&mut rand::rng()),
    };
    let records = (0..games)
        .map(|index| -> Result<GameRecord, GridShapeError> {
            let seed: TileSeed = rng.random();
            let mut engine = GameEngine::with_config(GameConfig {
                seed: Some(seed),
                ..config.clone()
            })?;
            while !engine.is_over() && engine.move_count() < max_moves {
                engine.apply_move(rng.random::<Move>());
            }
            let record = GameRecord {
                seed,
                score: engine.score(),
                moves: engine.move_count(),
                highest_tile: engine.stats().highest_tile(),
                finished: engine.is_over(),
            };
            debug!(
                "game #{index}: seed {seed}, score {}, moves {}, highest tile {}",
                record.score, record.moves, record.highest_tile
            );
            Ok(record)
        })
        .collect::<Result<Vec<_>, GridShapeError>>()?;
    Ok(SimulationSummary::new(config, records))
}
