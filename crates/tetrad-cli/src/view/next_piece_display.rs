use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Text},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};
use tetrad_engine::{Cell, Glyphs, Grid, PieceKind, render_rows};

use crate::view::style;

/// Spawn footprints span columns 3..7 and rows 0..3.
const PREVIEW_COLS: std::ops::Range<usize> = 3..7;
const PREVIEW_ROWS: usize = 3;

/// Preview of the next piece in its spawn orientation.
#[derive(Debug)]
pub struct NextPieceDisplay<'a> {
    kind: PieceKind,
    glyphs: &'a Glyphs,
    block: Option<BlockWidget<'a>>,
}

impl<'a> NextPieceDisplay<'a> {
    pub fn new(kind: PieceKind, glyphs: &'a Glyphs) -> Self {
        Self {
            kind,
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
    const INNER_WIDTH: u16 = (PREVIEW_COLS.end - PREVIEW_COLS.start) as u16 * 2;
    #[expect(clippy::cast_possible_truncation)]
    const INNER_HEIGHT: u16 = PREVIEW_ROWS as u16;

    pub fn width(&self) -> u16 {
        Self::INNER_WIDTH + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        Self::INNER_HEIGHT + super::block_vertical_margin(self.block.as_ref())
    }

    fn preview_lines(&self) -> Vec<String> {
        let mut grid = Grid::EMPTY;
        for cell in self.kind.initial_footprint().iter() {
            grid.set(cell, Cell::Filled);
        }
        render_rows(&grid, self.glyphs)
            .into_iter()
            .take(PREVIEW_ROWS)
            .map(|row| {
                row.chars()
                    .skip(PREVIEW_COLS.start * 2)
                    .take(PREVIEW_COLS.len() * 2)
                    .collect()
            })
            .collect()
    }
}

impl Widget for NextPieceDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let lines = self
            .preview_lines()
            .into_iter()
            .map(Line::from)
            .collect::<Vec<_>>();
        let area = area.centered(
            Constraint::Length(Self::INNER_WIDTH),
            Constraint::Length(Self::INNER_HEIGHT),
        );
        Text::from(lines).style(style::DEFAULT).render(area, buf);
    }
}
