use crossterm::event::Event;
use ratatui::Frame;

/// Trait for turn-based TUI applications.
///
/// Applications executed by [`Tui::run`](super::Tui::run) must implement this trait.
/// Nothing happens between terminal events, so there is no tick callback: the
/// state only changes in [`App::handle_event`].
pub trait App {
    /// Returns whether the application should exit.
    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, resize, etc.).
    fn handle_event(&mut self, event: &Event);

    /// Draws the screen.
    fn draw(&self, frame: &mut Frame);
}
