use super::geometry::{BOARD_HEIGHT, BOARD_SIZE, BOARD_WIDTH, CellIndex, Footprint};

/// A single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Empty,
    Filled,
}

/// Flat `BOARD_WIDTH × BOARD_HEIGHT` array of cells, row-major from the top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Cell; BOARD_SIZE],
}

impl Default for Grid {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Grid {
    pub const EMPTY: Self = Self {
        cells: [Cell::Empty; BOARD_SIZE],
    };

    /// Returns the cell at `index`, or `None` for the off-board sentinel.
    #[must_use]
    pub fn cell(&self, index: CellIndex) -> Option<Cell> {
        index.get().map(|i| self.cells[i])
    }

    /// Sets the cell at `index`. Off-board indices are ignored.
    pub fn set(&mut self, index: CellIndex, cell: Cell) {
        if let Some(i) = index.get() {
            self.cells[i] = cell;
        }
    }

    /// Returns `true` if any of `cells` is off the board or already filled.
    ///
    /// A footprint that does not collide is a valid piece placement.
    #[must_use]
    pub fn collides(&self, cells: &Footprint) -> bool {
        cells
            .iter()
            .any(|c| self.cell(c).is_none_or(|cell| cell.is_filled()))
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(BOARD_WIDTH)
    }

    #[must_use]
    pub fn is_row_full(&self, row: usize) -> bool {
        self.cells[row * BOARD_WIDTH..][..BOARD_WIDTH]
            .iter()
            .all(|c| c.is_filled())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }

    /// Removes `row`: every row above shifts down by one and the top row is cleared.
    fn remove_row(&mut self, row: usize) {
        self.cells.copy_within(..row * BOARD_WIDTH, BOARD_WIDTH);
        self.cells[..BOARD_WIDTH].fill(Cell::Empty);
    }
}

/// The playing field: settled cells plus the composite view with the falling piece.
///
/// - `settled` holds cells locked in by previous landings.
/// - `composite` is `settled` with the falling piece drawn in. It is rebuilt by
///   [`update_composite`](Self::update_composite) and is what gets rendered.
///
/// # Example
///
/// ```
/// use tetrad_engine::{Board, PieceContext};
///
/// let mut board = Board::new();
/// let piece = PieceContext::spawn(4); // O-piece
///
/// board.update_composite(piece.cells());
/// assert_eq!(board.composite().filled_count(), 4);
/// assert!(board.settled().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Board {
    settled: Grid,
    composite: Grid,
    cleared_lines: usize,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board whose settled and composite grids both equal `settled`.
    #[must_use]
    pub fn with_settled(settled: Grid) -> Self {
        Self {
            composite: settled.clone(),
            settled,
            cleared_lines: 0,
        }
    }

    #[must_use]
    pub fn settled(&self) -> &Grid {
        &self.settled
    }

    #[must_use]
    pub fn composite(&self) -> &Grid {
        &self.composite
    }

    /// Total number of rows removed over the board's lifetime.
    #[must_use]
    pub fn cleared_lines(&self) -> usize {
        self.cleared_lines
    }

    /// Collision test of `cells` against the settled grid.
    #[must_use]
    pub fn is_colliding(&self, cells: &Footprint) -> bool {
        self.settled.collides(cells)
    }

    /// Rebuilds the composite grid from the settled grid and the piece cells.
    pub fn update_composite(&mut self, cells: &Footprint) {
        self.composite.clone_from(&self.settled);
        for cell in cells.iter() {
            self.composite.set(cell, Cell::Filled);
        }
    }

    /// Removes full rows from the composite grid and commits it as the new
    /// settled grid.
    ///
    /// Rows are scanned top to bottom and each full row is removed as soon as it
    /// is found, so several full rows are all cleared in one pass.
    ///
    /// # Returns
    ///
    /// The number of rows removed by this call.
    pub fn explode_rows(&mut self) -> usize {
        let mut count = 0;
        for row in 0..BOARD_HEIGHT {
            if self.composite.is_row_full(row) {
                self.composite.remove_row(row);
                count += 1;
            }
        }
        self.cleared_lines += count;
        self.settled.clone_from(&self.composite);
        count
    }
}
