use std::path::PathBuf;

use clap::{Parser, Subcommand};
use twenty48_engine::{GameConfig, TileSeed};

use crate::{command::play::PlayArg, util};

use self::{play_text::PlayTextArg, simulate::SimulateArg};

mod play;
mod play_text;
mod simulate;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play in a full-screen terminal UI
    Play(#[clap(flatten)] PlayArg),
    /// Play by typing W/A/S/D at a prompt
    PlayText(#[clap(flatten)] PlayTextArg),
    /// Play games with random moves and summarize the results as JSON
    Simulate(#[clap(flatten)] SimulateArg),
}

/// Options shared by every mode that starts a game.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct GameArgs {
    /// Read game settings from a JSON file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of rows and columns of the grid [default: 4]
    #[arg(long)]
    size: Option<usize>,
    /// Seed for tile placement, as 32 hexadecimal digits
    #[arg(long)]
    seed: Option<TileSeed>,
}

impl GameArgs {
    pub(crate) fn to_config(&self) -> anyhow::Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => util::read_json_file("config", path)?,
            None => GameConfig::default(),
        };
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        Ok(config)
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::PlayText(arg) => play_text::run(&arg)?,
        Mode::Simulate(arg) => simulate::run(&arg)?,
    }
    Ok(())
}
