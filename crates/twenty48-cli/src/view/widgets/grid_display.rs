use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};
use twenty48_engine::{Grid, Tile};

use crate::view::widgets::style;

const TILE_WIDTH: u16 = 7;
const TILE_HEIGHT: u16 = 3;

#[derive(Debug)]
pub struct GridDisplay<'a> {
    grid: &'a Grid,
    block: Option<BlockWidget<'a>>,
}

impl<'a> GridDisplay<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid, block: None }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    fn cells_per_side(&self) -> u16 {
        u16::try_from(self.grid.size()).unwrap_or(u16::MAX)
    }

    pub fn width(&self) -> u16 {
        self.cells_per_side().saturating_mul(TILE_WIDTH)
            + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        self.cells_per_side().saturating_mul(TILE_HEIGHT)
            + super::block_vertical_margin(self.block.as_ref())
    }
}

fn render_tile(value: Tile, area: Rect, buf: &mut Buffer) {
    let style = style::tile(value);
    BlockWidget::new().style(style).render(area, buf);
    if value != 0 {
        let [_, label_area, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);
        Line::styled(value.to_string(), style)
            .centered()
            .render(label_area, buf);
    }
}

impl Widget for GridDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &GridDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let n = self.grid.size();
        let horizontal =
            Layout::horizontal((0..n).map(|_| Constraint::Length(TILE_WIDTH))).flex(Flex::Center);
        let vertical =
            Layout::vertical((0..n).map(|_| Constraint::Length(TILE_HEIGHT))).flex(Flex::Center);

        for (row_area, row) in iter::zip(vertical.split(area).iter(), self.grid.rows()) {
            for (cell_area, &value) in iter::zip(horizontal.split(*row_area).iter(), row) {
                render_tile(value, *cell_area, buf);
            }
        }
    }
}
