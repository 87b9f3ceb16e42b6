use crossterm::event::{self, Event};

use crate::tui::App;

/// TUI application runtime.
///
/// Draws the application, then blocks until the next terminal event and
/// redraws after handling it.
#[derive(Default, Debug)]
pub struct Tui {}

impl Tui {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the application until `app.should_exit()` returns true.
    pub fn run<A>(self, app: &mut A) -> anyhow::Result<()>
    where
        A: App,
    {
        ratatui::run(|terminal| {
            let mut dirty = true;
            while !app.should_exit() {
                if dirty {
                    terminal.draw(|f| app.draw(f))?;
                }
                let event = event::read()?;
                dirty = needs_redraw(&event);
                app.handle_event(&event);
            }
            Ok(())
        })
    }
}

fn needs_redraw(event: &Event) -> bool {
    !matches!(event, Event::FocusGained | Event::FocusLost | Event::Mouse(_))
}
