use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};
use twenty48_engine::{GameEngine, Move};

use crate::view::widgets::style;

/// Score and move statistics of a running game.
pub struct StatsDisplay<'a> {
    engine: &'a GameEngine,
    last_move: Option<Move>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> StatsDisplay<'a> {
    pub fn new(engine: &'a GameEngine) -> Self {
        Self {
            engine,
            last_move: None,
            block: None,
        }
    }

    pub fn last_move(self, last_move: Option<Move>) -> Self {
        Self { last_move, ..self }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        18 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        u16::try_from(ROWS.len()).unwrap_or(u16::MAX) + super::block_vertical_margin(self.block.as_ref())
    }
}

type ValueFn = fn(&StatsDisplay<'_>) -> String;

#[derive(Clone, Copy)]
enum Row {
    Empty,
    FullLabel(&'static str),
    FullValue(ValueFn),
    LabelValue(&'static str, ValueFn),
}

const ROWS: &[Row] = &[
    Row::FullLabel("SCORE:"),
    Row::FullValue(|stats| stats.engine.score().to_string()),
    Row::Empty,
    Row::LabelValue("MOVES:", |stats| stats.engine.move_count().to_string()),
    Row::LabelValue("TILE:", |stats| {
        stats.engine.stats().highest_tile().to_string()
    }),
    Row::LabelValue("BEST:", |stats| {
        stats.engine.stats().best_turn_score().to_string()
    }),
    Row::Empty,
    Row::LabelValue("LAST:", |stats| {
        stats
            .last_move
            .map_or_else(|| "-".to_owned(), |mv| mv.to_string())
    }),
];

impl Widget for StatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let style = style::DEFAULT;

        let rows_areas =
            Layout::vertical((0..ROWS.len()).map(|_| Constraint::Length(1))).split(area);

        for (row, area) in iter::zip(ROWS.iter().copied(), rows_areas.iter().copied()) {
            match row {
                Row::Empty => {}
                Row::FullLabel(label) => {
                    Line::styled(label, style).left_aligned().render(area, buf);
                }
                Row::FullValue(value) => {
                    Line::styled(value(&self), style)
                        .right_aligned()
                        .render(area, buf);
                }
                Row::LabelValue(label, value) => {
                    let [label_area, value_area] =
                        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);
                    Line::styled(label, style)
                        .left_aligned()
                        .render(label_area, buf);
                    Line::styled(value(&self), style)
                        .right_aligned()
                        .render(value_area, buf);
                }
            }
        }
    }
}
