use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{grid_display::*, session_display::*, stats_display::*};

mod grid_display;
mod session_display;
mod stats_display;

mod color {
    use ratatui::style::Color;

    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const DARK_GRAY: Color = Color::Rgb(60, 58, 50);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const INK: Color = Color::Rgb(119, 110, 101);
    pub const PAPER: Color = Color::Rgb(249, 246, 242);

    /// Tile backgrounds indexed by `log2(value) - 1`, i.e. 2, 4, 8, ...
    pub const TILES: [Color; 11] = [
        Color::Rgb(238, 228, 218),
        Color::Rgb(237, 224, 200),
        Color::Rgb(242, 177, 121),
        Color::Rgb(245, 149, 99),
        Color::Rgb(246, 124, 95),
        Color::Rgb(246, 94, 59),
        Color::Rgb(237, 207, 114),
        Color::Rgb(237, 204, 97),
        Color::Rgb(237, 200, 80),
        Color::Rgb(237, 197, 63),
        Color::Rgb(237, 194, 46),
    ];
}

pub mod style {
    use ratatui::style::{Color, Style};
    use twenty48_engine::Tile;

    use crate::view::widgets::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const HELP: Style = Style::new().fg(color::GRAY);
    pub const EMPTY_TILE: Style = fg_bg(color::GRAY, color::DARK_GRAY);
    pub const SUPER_TILE: Style = fg_bg(color::WHITE, color::BLACK);

    /// Returns the style of a cell holding `value`.
    pub fn tile(value: Tile) -> Style {
        if value == 0 {
            return EMPTY_TILE;
        }
        let index = value.ilog2().saturating_sub(1) as usize;
        match color::TILES.get(index) {
            Some(&bg) if index < 2 => fg_bg(color::INK, bg),
            Some(&bg) => fg_bg(color::PAPER, bg),
            None => SUPER_TILE,
        }
    }
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
