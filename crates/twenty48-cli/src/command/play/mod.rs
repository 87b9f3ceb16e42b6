use crate::{
    command::{GameArgs, play::app::PlayApp},
    tui::Tui,
};

mod app;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    #[clap(flatten)]
    game: GameArgs,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg { game } = arg;

    let mut app = PlayApp::new(&game.to_config()?)?;
    Tui::new().run(&mut app)?;

    let engine = app.engine();
    println!(
        "Score: {} | Moves: {} | Best tile: {}",
        engine.score(),
        engine.move_count(),
        engine.stats().highest_tile()
    );
    Ok(())
}
