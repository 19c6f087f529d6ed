use super::{geometry::Footprint, orientation::Orientation};

/// Enum representing the shape of a piece.
///
/// The discriminant is the spawn index: a seed selects `ALL[seed % LEN]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece.
    I = 0,
    /// L-piece.
    L = 1,
    /// T-piece.
    T = 2,
    /// Z-piece.
    Z = 3,
    /// O-piece.
    O = 4,
    /// S-piece.
    S = 5,
    /// J-piece.
    J = 6,
}

impl PieceKind {
    /// Number of piece types (7).
    pub const LEN: usize = 7;

    pub const ALL: [Self; Self::LEN] = [
        Self::I,
        Self::L,
        Self::T,
        Self::Z,
        Self::O,
        Self::S,
        Self::J,
    ];

    /// Selects a shape from an 8-bit seed (`seed % LEN`).
    ///
    /// # Examples
    ///
    /// ```
    /// use tetrad_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_seed(0), PieceKind::I);
    /// assert_eq!(PieceKind::from_seed(7), PieceKind::I);
    /// assert_eq!(PieceKind::from_seed(4), PieceKind::O);
    /// ```
    #[must_use]
    pub const fn from_seed(seed: u8) -> Self {
        Self::ALL[seed as usize % Self::LEN]
    }

    /// First orientation of this shape's rotation cycle.
    #[must_use]
    pub const fn initial_orientation(self) -> Orientation {
        match self {
            Self::I => Orientation::I0,
            Self::L => Orientation::L0,
            Self::T => Orientation::T0,
            Self::Z => Orientation::Z0,
            Self::O => Orientation::O0,
            Self::S => Orientation::S0,
            Self::J => Orientation::J0,
        }
    }

    /// Cells occupied right after spawning.
    ///
    /// Every shape is horizontally centered on the top rows of the board.
    #[must_use]
    pub const fn initial_footprint(self) -> Footprint {
        match self {
            Self::I => Footprint::from_indices([3, 4, 5, 6]),
            Self::L => Footprint::from_indices([4, 14, 24, 25]),
            Self::T => Footprint::from_indices([4, 5, 6, 15]),
            Self::Z => Footprint::from_indices([4, 5, 15, 16]),
            Self::O => Footprint::from_indices([4, 5, 14, 15]),
            Self::S => Footprint::from_indices([5, 6, 14, 15]),
            Self::J => Footprint::from_indices([5, 15, 24, 25]),
        }
    }

    /// Returns the single character representation of this piece kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use tetrad_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.as_char(), 'I');
    /// assert_eq!(PieceKind::T.as_char(), 'T');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::L => 'L',
            PieceKind::T => 'T',
            PieceKind::Z => 'Z',
            PieceKind::O => 'O',
            PieceKind::S => 'S',
            PieceKind::J => 'J',
        }
    }
}

/// The falling piece together with its precomputed move candidates.
///
/// Besides the occupied cells (`cur`) the context keeps, at all times:
///
/// - `left`, `right`, `down`: `cur` translated by one cell
/// - `rotate`: `cur` after advancing to the next orientation
/// - `round`: blocker cells that must be free for the rotation
///
/// Candidates are recomputed after every mutation, so a caller can test a
/// candidate against the board and then apply the move.
///
/// The move operations do **not** check bounds or collisions. Applying a
/// candidate that collides or leaves the board puts the piece in an invalid
/// place; use [`GameSession`](crate::GameSession) for validated moves.
///
/// # Example
///
/// ```
/// use tetrad_engine::{Board, PieceContext};
///
/// let board = Board::new();
/// let mut piece = PieceContext::spawn(0); // I-piece
///
/// if !board.is_colliding(piece.down_candidate()) {
///     piece.down();
/// }
/// assert_eq!(piece.cells().cells()[0].get(), Some(13));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceContext {
    orientation: Orientation,
    cur: Footprint,
    left: Footprint,
    right: Footprint,
    down: Footprint,
    rotate: Footprint,
    round: Footprint,
}

impl PieceContext {
    /// Creates the piece selected by `seed % PieceKind::LEN` at its spawn position.
    #[must_use]
    pub fn spawn(seed: u8) -> Self {
        Self::with_kind(PieceKind::from_seed(seed))
    }

    #[must_use]
    pub fn with_kind(kind: PieceKind) -> Self {
        Self::from_parts(kind.initial_orientation(), kind.initial_footprint())
    }

    /// Builds a context for an arbitrary footprint and orientation.
    #[must_use]
    pub fn from_parts(orientation: Orientation, cur: Footprint) -> Self {
        Self {
            orientation,
            cur,
            left: cur.left(),
            right: cur.right(),
            down: cur.down(),
            rotate: orientation.rotate(cur),
            round: orientation.around(cur),
        }
    }

    #[must_use]
    pub fn kind(&self) -> Option<PieceKind> {
        self.orientation.kind()
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn cells(&self) -> &Footprint {
        &self.cur
    }

    #[must_use]
    pub fn left_candidate(&self) -> &Footprint {
        &self.left
    }

    #[must_use]
    pub fn right_candidate(&self) -> &Footprint {
        &self.right
    }

    #[must_use]
    pub fn down_candidate(&self) -> &Footprint {
        &self.down
    }

    #[must_use]
    pub fn rotate_candidate(&self) -> &Footprint {
        &self.rotate
    }

    /// Blocker cells checked in addition to the rotate candidate.
    #[must_use]
    pub fn round_candidate(&self) -> &Footprint {
        &self.round
    }

    /// Moves to the left candidate.
    ///
    /// The previous cells become the right candidate.
    pub fn left(&mut self) {
        self.right = self.cur;
        self.cur = self.left;
        self.left = self.cur.left();
        self.refresh_down_and_rotation();
    }

    /// Moves to the right candidate.
    ///
    /// The previous cells become the left candidate.
    pub fn right(&mut self) {
        self.left = self.cur;
        self.cur = self.right;
        self.right = self.cur.right();
        self.refresh_down_and_rotation();
    }

    /// Moves to the down candidate.
    pub fn down(&mut self) {
        self.cur = self.down;
        self.left = self.cur.left();
        self.right = self.cur.right();
        self.refresh_down_and_rotation();
    }

    /// Moves to the rotate candidate and advances the orientation.
    pub fn rotate(&mut self) {
        self.cur = self.rotate;
        self.orientation = self.orientation.next();
        self.left = self.cur.left();
        self.right = self.cur.right();
        self.refresh_down_and_rotation();
    }

    fn refresh_down_and_rotation(&mut self) {
        self.down = self.cur.down();
        self.rotate = self.orientation.rotate(self.cur);
        self.round = self.orientation.around(self.cur);
    }
}
