use super::{
    board::{Cell, Grid},
    geometry::BOARD_WIDTH,
};

/// Two-character glyphs used to draw each cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyphs {
    pub empty: String,
    pub filled: String,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            empty: "  ".to_owned(),
            filled: "[]".to_owned(),
        }
    }
}

impl Glyphs {
    /// Default glyphs with a custom filled-cell glyph.
    #[must_use]
    pub fn with_filled(filled: impl Into<String>) -> Self {
        Self {
            filled: filled.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn glyph(&self, cell: Cell) -> &str {
        match cell {
            Cell::Empty => &self.empty,
            Cell::Filled => &self.filled,
        }
    }
}

/// Renders `grid` as one string per row, top row first.
///
/// # Example
///
/// ```
/// use tetrad_engine::{Board, Glyphs, PieceContext, render_rows};
///
/// let mut board = Board::new();
/// board.update_composite(PieceContext::spawn(0).cells()); // I-piece
///
/// let rows = render_rows(board.composite(), &Glyphs::default());
/// assert_eq!(rows.len(), 20);
/// assert_eq!(rows[0], "      [][][][]      ");
/// ```
#[must_use]
pub fn render_rows(grid: &Grid, glyphs: &Glyphs) -> Vec<String> {
    grid.rows()
        .map(|row| {
            let mut line = String::with_capacity(BOARD_WIDTH * glyphs.filled.len());
            for &cell in row {
                line.push_str(glyphs.glyph(cell));
            }
            line
        })
        .collect()
}
