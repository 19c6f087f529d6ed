use std::fmt;

/// Number of columns on the board.
pub const BOARD_WIDTH: usize = 10;
/// Number of rows on the board.
pub const BOARD_HEIGHT: usize = 20;
/// Total number of cells on the board.
pub const BOARD_SIZE: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// Flat index of a board cell, or the off-board sentinel.
///
/// Cells are numbered row-major from the top-left corner: index `i` sits at
/// row `i / BOARD_WIDTH` and column `i % BOARD_WIDTH`.
///
/// Neighbor lookups ([`left`], [`right`], [`up`], [`down`]) are total: stepping
/// off the board yields [`CellIndex::OFF_BOARD`], and stepping from the sentinel
/// stays on the sentinel. Chains like `cell.up().right()` therefore never need
/// intermediate bounds checks.
///
/// [`left`]: Self::left
/// [`right`]: Self::right
/// [`up`]: Self::up
/// [`down`]: Self::down
///
/// # Example
///
/// ```
/// use tetrad_engine::CellIndex;
///
/// let corner = CellIndex::new(0);
/// assert!(corner.left().is_off_board());
/// assert!(corner.left().down().is_off_board());
/// assert_eq!(corner.right().down(), CellIndex::new(11));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellIndex(u8);

impl CellIndex {
    /// Sentinel meaning "no cell".
    pub const OFF_BOARD: Self = Self(u8::MAX);

    /// Creates a cell index, mapping anything outside the board to the sentinel.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn new(index: usize) -> Self {
        if index < BOARD_SIZE {
            Self(index as u8)
        } else {
            Self::OFF_BOARD
        }
    }

    /// Creates a cell index from row and column.
    #[must_use]
    pub const fn from_row_col(row: usize, col: usize) -> Self {
        if row < BOARD_HEIGHT && col < BOARD_WIDTH {
            Self::new(row * BOARD_WIDTH + col)
        } else {
            Self::OFF_BOARD
        }
    }

    /// Returns the flat index, or `None` for the sentinel.
    #[must_use]
    pub const fn get(self) -> Option<usize> {
        if self.is_off_board() {
            None
        } else {
            Some(self.0 as usize)
        }
    }

    #[must_use]
    pub const fn is_off_board(self) -> bool {
        self.0 as usize >= BOARD_SIZE
    }

    #[must_use]
    pub const fn row(self) -> Option<usize> {
        match self.get() {
            Some(i) => Some(i / BOARD_WIDTH),
            None => None,
        }
    }

    #[must_use]
    pub const fn col(self) -> Option<usize> {
        match self.get() {
            Some(i) => Some(i % BOARD_WIDTH),
            None => None,
        }
    }

    /// Cell one column to the left.
    #[must_use]
    pub const fn left(self) -> Self {
        match self.get() {
            Some(i) if i % BOARD_WIDTH != 0 => Self::new(i - 1),
            _ => Self::OFF_BOARD,
        }
    }

    /// Cell one column to the right.
    #[must_use]
    pub const fn right(self) -> Self {
        match self.get() {
            Some(i) if i % BOARD_WIDTH != BOARD_WIDTH - 1 => Self::new(i + 1),
            _ => Self::OFF_BOARD,
        }
    }

    /// Cell one row up.
    #[must_use]
    pub const fn up(self) -> Self {
        match self.get() {
            Some(i) if i >= BOARD_WIDTH => Self::new(i - BOARD_WIDTH),
            _ => Self::OFF_BOARD,
        }
    }

    /// Cell one row down.
    #[must_use]
    pub const fn down(self) -> Self {
        match self.get() {
            Some(i) if i / BOARD_WIDTH != BOARD_HEIGHT - 1 => Self::new(i + BOARD_WIDTH),
            _ => Self::OFF_BOARD,
        }
    }
}

impl fmt::Debug for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(i) => write!(f, "CellIndex({i})"),
            None => f.write_str("CellIndex(OFF_BOARD)"),
        }
    }
}

/// The four cells of a tetromino, in ascending row-major order.
///
/// Any cell may be [`CellIndex::OFF_BOARD`] when the footprint describes a
/// candidate position that leaves the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Footprint(pub [CellIndex; 4]);

impl Footprint {
    #[must_use]
    pub const fn from_indices(indices: [usize; 4]) -> Self {
        Self([
            CellIndex::new(indices[0]),
            CellIndex::new(indices[1]),
            CellIndex::new(indices[2]),
            CellIndex::new(indices[3]),
        ])
    }

    #[must_use]
    pub fn cells(&self) -> &[CellIndex; 4] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn is_off_board(&self) -> bool {
        self.iter().any(CellIndex::is_off_board)
    }

    /// Applies a neighbor step to every cell.
    #[must_use]
    pub fn map(self, f: impl Fn(CellIndex) -> CellIndex) -> Self {
        Self(self.0.map(f))
    }

    #[must_use]
    pub fn left(self) -> Self {
        self.map(CellIndex::left)
    }

    #[must_use]
    pub fn right(self) -> Self {
        self.map(CellIndex::right)
    }

    #[must_use]
    pub fn down(self) -> Self {
        self.map(CellIndex::down)
    }
}

impl std::ops::Index<usize> for Footprint {
    type Output = CellIndex;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}
