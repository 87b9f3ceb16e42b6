use crossterm::event::{Event, KeyCode, KeyEventKind};
use log::warn;
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::Text,
};
use twenty48_engine::{GameConfig, GameEngine, GridShapeError, Move, SessionState};

use crate::{
    tui::App,
    view::widgets::{SessionDisplay, style},
};

/// Interactive game in the terminal.
///
/// Every restart begins a new game whose seed is drawn from a generator
/// seeded by the configured seed, so a fixed `--seed` reproduces the whole
/// sequence of games.
#[derive(Debug)]
pub struct PlayApp {
    engine: GameEngine,
    seeds: Pcg32,
    last_move: Option<Move>,
    is_exiting: bool,
}

impl PlayApp {
    pub fn new(config: &GameConfig) -> Result<Self, GridShapeError> {
        let mut seeds = match config.seed {
            Some(seed) => Pcg32::from_seed(seed.to_bytes()),
            None => Pcg32::from_rng(&mut rand::rng()),
        };
        let engine = new_game(config, &mut seeds)?;
        Ok(Self {
            engine,
            seeds,
            last_move: None,
            is_exiting: false,
        })
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    fn restart(&mut self) -> Result<(), GridShapeError> {
        self.engine = new_game(self.engine.config(), &mut self.seeds)?;
        self.last_move = None;
        Ok(())
    }
}

fn new_game(config: &GameConfig, seeds: &mut Pcg32) -> Result<GameEngine, GridShapeError> {
    GameEngine::with_config(GameConfig {
        seed: Some(seeds.random()),
        ..config.clone()
    })
}

fn key_to_move(code: KeyCode) -> Option<Move> {
    let mv = match code {
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h') => Move::Left,
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l') => Move::Right,
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k') => Move::Up,
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j') => Move::Down,
        _ => return None,
    };
    Some(mv)
}

impl App for PlayApp {
    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, event: &Event) {
        let Some(key) = event.as_key_event() else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.is_exiting = true,
            KeyCode::Char('r') => {
                if let Err(e) = self.restart() {
                    warn!("failed to restart game: {e}");
                }
            }
            code => {
                if let Some(mv) = key_to_move(code)
                    && self.engine.apply_move(mv).is_some()
                {
                    self.last_move = Some(mv);
                }
            }
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let session_display = SessionDisplay::new(&self.engine).last_move(self.last_move);
        let help_text = match self.engine.session_state() {
            SessionState::Playing => "Controls: ← → ↑ ↓ / WASD (Move) | R (Restart) | Q (Quit)",
            SessionState::GameOver => "Controls: R (Restart) | Q (Quit)",
        };
        let help_text = Text::from(help_text).style(style::HELP).centered();

        let [main_area, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());
        frame.render_widget(session_display, main_area);
        frame.render_widget(help_text, help_area);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};
    use twenty48_engine::TileSeed;

    use super::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn seeded_app() -> PlayApp {
        PlayApp::new(&GameConfig {
            seed: Some(TileSeed::from_bytes([3; 16])),
            ..GameConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(key_to_move(KeyCode::Left), Some(Move::Left));
        assert_eq!(key_to_move(KeyCode::Char('D')), Some(Move::Right));
        assert_eq!(key_to_move(KeyCode::Char('w')), Some(Move::Up));
        assert_eq!(key_to_move(KeyCode::Down), Some(Move::Down));
        assert_eq!(key_to_move(KeyCode::Char('x')), None);
        assert_eq!(key_to_move(KeyCode::Enter), None);
    }

    #[test]
    fn test_moves_and_quit() {
        let mut app = seeded_app();
        app.handle_event(&press(KeyCode::Left));
        app.handle_event(&press(KeyCode::Char('w')));
        assert_eq!(app.engine().move_count(), 2);
        assert_eq!(app.last_move, Some(Move::Up));
        assert!(!app.should_exit());

        app.handle_event(&press(KeyCode::Char('q')));
        assert!(app.should_exit());
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut app = seeded_app();
        let release = Event::Key(KeyEvent::new_with_kind(
            KeyCode::Left,
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        app.handle_event(&release);
        assert_eq!(app.engine().move_count(), 0);
    }

    #[test]
    fn test_restart_starts_a_new_game() {
        let mut app = seeded_app();
        app.handle_event(&press(KeyCode::Right));
        app.handle_event(&press(KeyCode::Char('r')));
        assert_eq!(app.engine().move_count(), 0);
        assert_eq!(app.engine().grid().count_empty(), 12);
        assert_eq!(app.last_move, None);
    }

    #[test]
    fn test_same_seed_same_games() {
        let mut a = seeded_app();
        let mut b = seeded_app();
        assert_eq!(a.engine().grid(), b.engine().grid());
        a.handle_event(&press(KeyCode::Char('r')));
        b.handle_event(&press(KeyCode::Char('r')));
        assert_eq!(a.engine().grid(), b.engine().grid());
    }
}
