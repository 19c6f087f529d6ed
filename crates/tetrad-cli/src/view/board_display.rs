use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Text},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};
use tetrad_engine::{BOARD_HEIGHT, BOARD_WIDTH, Glyphs, Grid, render_rows};

use crate::view::style;

/// Draws a grid with [`render_rows`], one terminal line per board row.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    grid: &'a Grid,
    glyphs: &'a Glyphs,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(grid: &'a Grid, glyphs: &'a Glyphs) -> Self {
        Self {
            grid,
            glyphs,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn width(&self) -> u16 {
        (BOARD_WIDTH * 2) as u16 + super::block_horizontal_margin(self.block.as_ref())
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn height(&self) -> u16 {
        BOARD_HEIGHT as u16 + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let lines = render_rows(self.grid, self.glyphs)
            .into_iter()
            .map(Line::from)
            .collect::<Vec<_>>();
        Text::from(lines).style(style::DEFAULT).render(area, buf);
    }
}
