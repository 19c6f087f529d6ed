use std::time::{Duration, Instant};

use proptest::prelude::*;
use tetrad_engine::{
    BOARD_HEIGHT, BOARD_WIDTH, Board, Cell, CellIndex, Footprint, GameSession, Grid, PieceContext,
    PieceKind, PieceSeed, SessionConfig, StepOutcome,
};

fn drop_to_floor(board: &Board, piece: &mut PieceContext) -> usize {
    let mut falls = 0;
    while !board.is_colliding(piece.down_candidate()) {
        piece.down();
        falls += 1;
    }
    falls
}

fn land(board: &mut Board, piece: &PieceContext) -> usize {
    board.update_composite(piece.cells());
    board.explode_rows()
}

#[test]
fn i_piece_falls_to_the_floor() {
    let board = Board::new();
    let mut piece = PieceContext::spawn(0);
    assert_eq!(piece.kind(), Some(PieceKind::I));

    for _ in 0..19 {
        assert!(!board.is_colliding(piece.down_candidate()));
        piece.down();
    }

    assert_eq!(piece.cells(), &Footprint::from_indices([193, 194, 195, 196]));
    assert!(board.is_colliding(piece.down_candidate()));
}

#[test]
fn landing_completes_bottom_row() {
    let mut settled = Grid::EMPTY;
    for col in (0..BOARD_WIDTH).filter(|&c| c != 4) {
        settled.set(CellIndex::from_row_col(BOARD_HEIGHT - 1, col), Cell::Filled);
    }
    settled.set(CellIndex::from_row_col(BOARD_HEIGHT - 2, 0), Cell::Filled);
    let mut board = Board::with_settled(settled);

    // Stand an I-piece up in column 4.
    let mut piece = PieceContext::spawn(0);
    piece.down();
    assert!(!board.is_colliding(piece.rotate_candidate()));
    assert!(!board.is_colliding(piece.round_candidate()));
    piece.rotate();
    assert!(piece.cells().iter().all(|c| c.col() == Some(4)));

    drop_to_floor(&board, &mut piece);
    assert_eq!(land(&mut board, &piece), 1);
    assert_eq!(board.cleared_lines(), 1);

    let settled = board.settled();
    assert_eq!(
        settled.cell(CellIndex::from_row_col(BOARD_HEIGHT - 1, 0)),
        Some(Cell::Filled),
        "row above the cleared one shifts down"
    );
    for row in BOARD_HEIGHT - 3..BOARD_HEIGHT {
        assert_eq!(
            settled.cell(CellIndex::from_row_col(row, 4)),
            Some(Cell::Filled)
        );
    }
    assert_eq!(settled.filled_count(), 4);
    assert!(settled.rows().next().unwrap().iter().all(|c| c.is_empty()));
}

#[test]
fn gravity_landing_clears_completed_row() {
    let config = SessionConfig {
        seed: Some(PieceSeed::from_bytes([5; 16])),
        ..SessionConfig::default()
    };
    let start = Instant::now();

    // Find where the first piece comes to rest on an empty board.
    let mut resting = *GameSession::with_config_at(config.clone(), start).falling_piece();
    drop_to_floor(&Board::new(), &mut resting);
    let resting = *resting.cells();

    // Fill the bottom row except where the piece lands, plus one marker cell.
    let bottom = BOARD_HEIGHT - 1;
    let mut settled = Grid::EMPTY;
    for col in 0..BOARD_WIDTH {
        let index = CellIndex::from_row_col(bottom, col);
        if !resting.iter().any(|c| c == index) {
            settled.set(index, Cell::Filled);
        }
    }
    settled.set(CellIndex::from_row_col(bottom - 1, 0), Cell::Filled);

    let mut session = GameSession::with_board(config, Board::with_settled(settled), start);
    let outcome = loop {
        match session.gravity_step() {
            StepOutcome::Fell => {}
            outcome => break outcome,
        }
    };

    assert_eq!(outcome, StepOutcome::Landed { cleared_lines: 1 });
    assert_eq!(session.stats().score(), 100);
    assert_eq!(session.stats().total_cleared_lines(), 1);
    assert_eq!(session.stats().landed_pieces(), 1);
    assert_eq!(session.stats().line_cleared_counter()[1], 1);
    assert_eq!(session.board().cleared_lines(), 1);

    let settled = session.board().settled();
    assert_eq!(
        settled.cell(CellIndex::from_row_col(bottom, 0)),
        Some(Cell::Filled),
        "marker shifts into the bottom row"
    );
    for cell in resting.iter().filter(|c| c.row() != Some(bottom)) {
        let shifted = cell.down();
        assert_eq!(settled.cell(shifted), Some(Cell::Filled), "{shifted:?}");
    }
    let above_bottom = resting.iter().filter(|c| c.row() != Some(bottom)).count();
    assert_eq!(settled.filled_count(), 1 + above_bottom);
    assert!(settled.rows().next().unwrap().iter().all(|c| c.is_empty()));

    // The next piece is already falling from the top.
    assert!(session.session_state().is_playing());
    assert!(
        session
            .falling_piece()
            .cells()
            .iter()
            .all(|c| c.row().is_some_and(|row| row < 3))
    );
}

#[test]
fn stacking_ends_in_game_over() {
    let start = Instant::now();
    let config = SessionConfig {
        fall_interval: Duration::from_millis(100),
        seed: Some(PieceSeed::from_bytes([0x33; 16])),
    };
    let mut session = GameSession::with_config_at(config, start);

    let mut now = start;
    let mut landings = 0;
    let outcome = loop {
        now += Duration::from_millis(50);
        match session.step(now) {
            StepOutcome::Waiting | StepOutcome::Fell => {}
            StepOutcome::Landed { cleared_lines } => {
                assert_eq!(cleared_lines, 0);
                landings += 1;
            }
            outcome => break outcome,
        }
        assert!(landings < 100, "stack never reached the top");
    };

    assert_eq!(outcome, StepOutcome::GameOver);
    assert!(session.session_state().is_game_over());
    assert_eq!(session.stats().landed_pieces(), landings + 1);
    assert_eq!(session.step(now + Duration::from_secs(1)), StepOutcome::Halted);
}

#[test]
fn rotation_cycles_restore_spawn_footprint() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let mut piece = PieceContext::with_kind(kind);
        for _ in 0..5 {
            piece.down();
        }
        let start = *piece.cells();
        for _ in 0..piece.orientation().cycle_len() {
            assert!(!board.is_colliding(piece.rotate_candidate()), "{kind:?}");
            assert!(!board.is_colliding(piece.round_candidate()), "{kind:?}");
            piece.rotate();
            let cells: Vec<_> = piece.cells().iter().collect();
            assert!(cells.is_sorted(), "{kind:?}: {cells:?}");
        }
        assert_eq!(piece.cells(), &start, "{kind:?}");
        assert_eq!(piece.orientation(), kind.initial_orientation());
    }
}

proptest! {
    #[test]
    fn spawn_kind_repeats_every_seven_seeds(seed in 0..=(u8::MAX - 7)) {
        prop_assert_eq!(
            PieceContext::spawn(seed).kind(),
            PieceContext::spawn(seed + 7).kind()
        );
    }

    #[test]
    fn composite_tracks_falling_piece(moves in prop::collection::vec(0..4_u8, 0..200)) {
        let config = SessionConfig {
            seed: Some(PieceSeed::from_bytes([9; 16])),
            ..SessionConfig::default()
        };
        let mut session = GameSession::with_config_at(config, Instant::now());
        for m in moves {
            let _ = match m {
                0 => session.try_move_left(),
                1 => session.try_move_right(),
                2 => session.try_rotate(),
                _ => {
                    session.gravity_step();
                    Ok(())
                }
            };
            if session.session_state().is_game_over() {
                break;
            }
            let mut expected = session.board().clone();
            expected.update_composite(session.falling_piece().cells());
            prop_assert_eq!(expected.composite(), session.board().composite());
            prop_assert!(!session.falling_piece().cells().is_off_board());
        }
    }
}
