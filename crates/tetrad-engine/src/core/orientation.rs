use super::{geometry::Footprint, piece::PieceKind};

/// Rotation state of a falling piece.
///
/// Each shape owns a disjoint rotation cycle (`I0 → I1 → I0`, `L0 → … → L3 → L0`,
/// and so on). [`Orientation::None`] is the trivial state whose transitions leave
/// the footprint unchanged.
///
/// Cell diagrams below number the footprint cells in row-major order, which is
/// the order every transition preserves:
///
/// ```text
/// I0:               I1: [0]
///     [0][1][2][3]      [1]
///                       [2]
///                       [3]
///
/// L0: [0]           L1:       [0]     L2: [0][1]        L3:
///     [1]               [1][2][3]            [2]            [0][1][2]
///     [2][3]                                 [3]            [3]
///
/// J0:    [0]        J1: [0]           J2: [0][1]        J3:
///        [1]            [1][2][3]         [2]               [0][1][2]
///     [2][3]                              [3]                     [3]
///
/// T0:               T1: [0]           T2:    [0]        T3:    [0]
///     [0][1][2]         [1][2]            [1][2][3]         [1][2]
///        [3]            [3]                                    [3]
///
/// Z0:               Z1:    [0]        S0:               S1: [0]
///     [0][1]            [1][2]               [0][1]         [1][2]
///        [2][3]         [3]               [2][3]               [3]
///
/// O0: [0][1]
///     [2][3]
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Orientation {
    #[default]
    None = 0,
    I0,
    I1,
    L0,
    L1,
    L2,
    L3,
    T0,
    T1,
    T2,
    T3,
    Z0,
    Z1,
    O0,
    S0,
    S1,
    J0,
    J1,
    J2,
    J3,
}

impl Orientation {
    /// Number of orientation ids, including [`Orientation::None`].
    pub const LEN: usize = 20;

    pub const ALL: [Self; Self::LEN] = [
        Self::None,
        Self::I0,
        Self::I1,
        Self::L0,
        Self::L1,
        Self::L2,
        Self::L3,
        Self::T0,
        Self::T1,
        Self::T2,
        Self::T3,
        Self::Z0,
        Self::Z1,
        Self::O0,
        Self::S0,
        Self::S1,
        Self::J0,
        Self::J1,
        Self::J2,
        Self::J3,
    ];

    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Looks up an orientation by numeric id.
    ///
    /// Unknown ids map to [`Orientation::None`], whose transitions are identity.
    #[must_use]
    pub const fn from_id(id: u8) -> Self {
        if (id as usize) < Self::LEN {
            Self::ALL[id as usize]
        } else {
            Self::None
        }
    }

    /// Shape this orientation belongs to.
    #[must_use]
    pub const fn kind(self) -> Option<PieceKind> {
        match self {
            Self::None => None,
            Self::I0 | Self::I1 => Some(PieceKind::I),
            Self::L0 | Self::L1 | Self::L2 | Self::L3 => Some(PieceKind::L),
            Self::T0 | Self::T1 | Self::T2 | Self::T3 => Some(PieceKind::T),
            Self::Z0 | Self::Z1 => Some(PieceKind::Z),
            Self::O0 => Some(PieceKind::O),
            Self::S0 | Self::S1 => Some(PieceKind::S),
            Self::J0 | Self::J1 | Self::J2 | Self::J3 => Some(PieceKind::J),
        }
    }

    /// Successor in the shape's rotation cycle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::None => Self::None,
            Self::I0 => Self::I1,
            Self::I1 => Self::I0,
            Self::L0 => Self::L1,
            Self::L1 => Self::L2,
            Self::L2 => Self::L3,
            Self::L3 => Self::L0,
            Self::T0 => Self::T1,
            Self::T1 => Self::T2,
            Self::T2 => Self::T3,
            Self::T3 => Self::T0,
            Self::Z0 => Self::Z1,
            Self::Z1 => Self::Z0,
            Self::O0 => Self::O0,
            Self::S0 => Self::S1,
            Self::S1 => Self::S0,
            Self::J0 => Self::J1,
            Self::J1 => Self::J2,
            Self::J2 => Self::J3,
            Self::J3 => Self::J0,
        }
    }

    /// Number of distinct orientations in this orientation's cycle.
    #[must_use]
    pub const fn cycle_len(self) -> usize {
        match self {
            Self::None | Self::O0 => 1,
            Self::I0 | Self::I1 | Self::Z0 | Self::Z1 | Self::S0 | Self::S1 => 2,
            _ => 4,
        }
    }

    /// Footprint after rotating into [`Self::next`].
    ///
    /// The result keeps the row-major cell order, so per-cell translations stay
    /// valid after any number of rotations.
    #[must_use]
    pub fn rotate(self, src: Footprint) -> Footprint {
        let [s0, s1, s2, s3] = src.0;
        let cells = match self {
            Self::None | Self::O0 => return src,
            Self::I0 => [s1.up(), s1, s1.down(), s1.down().down()],
            Self::I1 => [s1.left(), s1, s1.right(), s1.right().right()],
            Self::L0 => [s0.right(), s1.left(), s1, s1.right()],
            Self::L1 => [s1.up(), s0.left(), s2, s2.down()],
            Self::L2 => [s2.left(), s2, s2.right(), s3.left()],
            Self::L3 => [s1.up(), s1, s3.right(), s2.down()],
            Self::T0 => [s1.up(), s1, s2, s3],
            Self::T1 => [s0, s1.left(), s1, s2],
            Self::T2 => [s0, s1, s2, s2.down()],
            Self::T3 => [s1, s2, s2.right(), s3],
            Self::Z0 => [s1.right().up(), s1, s1.right(), s2],
            Self::Z1 => [s1.left(), s1, s3, s3.right()],
            Self::S0 => [s0.left().up(), s0.left(), s0, s3],
            Self::S1 => [s2, s2.right(), s3.left(), s3],
            Self::J0 => [s0.left(), s1.left(), s1, s1.right()],
            Self::J1 => [s2.up(), s3.up(), s2, s2.down()],
            Self::J2 => [s2.left(), s2, s2.right(), s3.right()],
            Self::J3 => [s1.up(), s1, s0.down(), s3.left()],
        };
        Footprint(cells)
    }

    /// Cells outside the rotated footprint that must be free for the rotation
    /// out of this orientation.
    ///
    /// Shapes with fewer than four such cells repeat the footprint's first cell,
    /// which is never occupied on the settled grid.
    #[must_use]
    pub fn around(self, src: Footprint) -> Footprint {
        let [s0, s1, s2, s3] = src.0;
        let pad = s0;
        let cells = match self {
            Self::None | Self::O0 => return src,
            Self::I0 => [s0.up(), s2.down(), s3.down(), s2.down().down()],
            Self::I1 => [s0.left(), s2.right(), s2.right().right(), s3.right()],
            Self::L0 => [s0.left(), pad, pad, pad],
            Self::L1 => [s1.down(), pad, pad, pad],
            Self::L2 => [s3.right(), pad, pad, pad],
            Self::L3 => [s2.up(), pad, pad, pad],
            Self::T0 => [s2.up(), s0.down(), s2.down(), pad],
            Self::T1 => [s0.left(), s0.right(), s3.right(), pad],
            Self::T2 => [s0.left(), s0.right(), s1.down(), pad],
            Self::T3 => [s0.left(), s3.left(), s3.right(), pad],
            Self::Z0 => [s0.down(), pad, pad, pad],
            Self::Z1 => [s3.right(), s2.right(), pad, pad],
            Self::S0 => [s3.right(), pad, pad, pad],
            Self::S1 => [s1.left(), s3.left(), pad, pad],
            Self::J0 => [s0.right(), pad, pad, pad],
            Self::J1 => [s3.down(), pad, pad, pad],
            Self::J2 => [s3.left(), pad, pad, pad],
            Self::J3 => [s0.up(), pad, pad, pad],
        };
        Footprint(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::CellIndex;

    const CENTER: CellIndex = CellIndex::from_row_col(8, 4);

    fn is_canonical(fp: &Footprint) -> bool {
        fp.0.windows(2).all(|w| w[0] < w[1])
    }

    fn kinds() -> [PieceKind; PieceKind::LEN] {
        PieceKind::ALL
    }

    /// Spawn footprint of `kind` moved down so every rotation fits on the board.
    fn lowered(kind: PieceKind) -> Footprint {
        let mut fp = kind.initial_footprint();
        while fp[0] < CENTER {
            fp = fp.down();
        }
        fp
    }

    #[test]
    fn test_successor_cycles_return_to_start() {
        for orientation in Orientation::ALL {
            let mut o = orientation;
            for _ in 0..orientation.cycle_len() {
                o = o.next();
            }
            assert_eq!(o, orientation, "cycle of {orientation:?} did not close");
        }
    }

    #[test]
    fn test_successor_stays_within_shape() {
        for orientation in Orientation::ALL {
            assert_eq!(orientation.next().kind(), orientation.kind());
        }
    }

    #[test]
    fn test_from_id_roundtrip_and_fallback() {
        for orientation in Orientation::ALL {
            assert_eq!(Orientation::from_id(orientation.id()), orientation);
        }
        assert_eq!(Orientation::from_id(20), Orientation::None);
        assert_eq!(Orientation::from_id(u8::MAX), Orientation::None);
    }

    #[test]
    fn test_none_is_identity() {
        let fp = Footprint::from_indices([3, 4, 5, 6]);
        assert_eq!(Orientation::None.rotate(fp), fp);
        assert_eq!(Orientation::None.around(fp), fp);
        assert_eq!(Orientation::from_id(99).rotate(fp), fp);
    }

    #[test]
    fn test_rotation_cycles_restore_footprint() {
        for kind in kinds() {
            let start = lowered(kind);
            let mut fp = start;
            let mut o = kind.initial_orientation();
            for _ in 0..o.cycle_len() {
                fp = o.rotate(fp);
                o = o.next();
                assert!(!fp.is_off_board(), "{kind:?} rotated off board: {fp:?}");
                assert!(is_canonical(&fp), "{kind:?} lost cell order: {fp:?}");
            }
            assert_eq!(o, kind.initial_orientation());
            assert_eq!(fp, start, "{kind:?} did not return to its start footprint");
        }
    }

    #[test]
    fn test_rotated_footprints_are_connected_tetrominoes() {
        for kind in kinds() {
            let mut fp = lowered(kind);
            let mut o = kind.initial_orientation();
            for _ in 0..o.cycle_len() {
                fp = o.rotate(fp);
                o = o.next();
                // Every cell touches at least one other cell of the piece.
                for cell in fp.iter() {
                    let touching = [cell.left(), cell.right(), cell.up(), cell.down()]
                        .iter()
                        .any(|n| fp.iter().any(|c| c == *n));
                    assert!(touching, "{o:?} has a detached cell in {fp:?}");
                }
            }
        }
    }

    #[test]
    fn test_i_rotation_matches_diagram() {
        let i0 = Footprint::from_indices([83, 84, 85, 86]);
        let i1 = Orientation::I0.rotate(i0);
        assert_eq!(i1, Footprint::from_indices([74, 84, 94, 104]));
        assert_eq!(Orientation::I1.rotate(i1), i0);
    }

    #[test]
    fn test_rotation_at_top_leaves_board() {
        // T0 at spawn has its pivot on row 0, so the nose would go above the board.
        let t0 = PieceKind::T.initial_footprint();
        assert!(Orientation::T0.rotate(t0).is_off_board());
    }

    #[test]
    fn test_around_excludes_nothing_outside_reach() {
        for kind in kinds() {
            let mut fp = lowered(kind);
            let mut o = kind.initial_orientation();
            for _ in 0..o.cycle_len() {
                let around = o.around(fp);
                let rotated = o.rotate(fp);
                for cell in around.iter() {
                    let (Some(r), Some(c)) = (cell.row(), cell.col()) else {
                        panic!("{o:?} blocker left the board: {around:?}");
                    };
                    // Blockers stay within a 4x4 box around the piece.
                    let near = fp.iter().chain(rotated.iter()).any(|p| {
                        let (pr, pc) = (p.row().unwrap(), p.col().unwrap());
                        pr.abs_diff(r) <= 2 && pc.abs_diff(c) <= 2
                    });
                    assert!(near, "{o:?} blocker {cell:?} is far from the piece");
                }
                fp = rotated;
                o = o.next();
            }
        }
    }
}
