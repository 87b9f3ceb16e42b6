use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};
use twenty48_engine::{GameEngine, Move, SessionState};

use crate::view::widgets::{GridDisplay, StatsDisplay, color, style};

/// Grid and statistics of a game side by side, with a popup once it is over.
#[derive(Debug)]
pub struct SessionDisplay<'a> {
    engine: &'a GameEngine,
    last_move: Option<Move>,
}

impl<'a> SessionDisplay<'a> {
    pub fn new(engine: &'a GameEngine) -> Self {
        Self {
            engine,
            last_move: None,
        }
    }

    pub fn last_move(self, last_move: Option<Move>) -> Self {
        Self { last_move, ..self }
    }
}

impl Widget for SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = match self.engine.session_state() {
            SessionState::Playing => color::WHITE,
            SessionState::GameOver => color::RED,
        };

        let grid_display = GridDisplay::new(self.engine.grid()).block(
            Block::bordered()
                .title(Line::from("2048").centered())
                .border_style(border_style)
                .style(style::DEFAULT),
        );
        let stats_display = StatsDisplay::new(self.engine)
            .last_move(self.last_move)
            .block(
                Block::bordered()
                    .title(Line::from("STATS").centered())
                    .padding(Padding::horizontal(1))
                    .border_style(border_style)
                    .style(style::DEFAULT),
            );

        let [grid_column, stats_column] = Layout::horizontal([
            Constraint::Length(grid_display.width()),
            Constraint::Length(stats_display.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);

        let [grid_area] =
            Layout::vertical([Constraint::Length(grid_display.height())]).areas(grid_column);
        let [stats_area] =
            Layout::vertical([Constraint::Length(stats_display.height())]).areas(stats_column);

        let grid_width = grid_display.width();
        grid_display.render(grid_area, buf);
        stats_display.render(stats_area, buf);

        if self.engine.is_over() {
            let style = Style::new().fg(color::WHITE).bg(color::RED);
            let block = Block::new().style(style);
            let text = Text::styled("GAME OVER!!", style).centered();
            let area = grid_area.centered(Constraint::Length(grid_width), Constraint::Length(3));
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            text.render(inner.centered_vertically(Constraint::Length(1)), buf);
        }
    }
}
