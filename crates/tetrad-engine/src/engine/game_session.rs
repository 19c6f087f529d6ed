use std::time::{Duration, Instant};

use crate::{
    MoveError, PieceCollisionError,
    core::{
        board::Board,
        geometry::Footprint,
        piece::{PieceContext, PieceKind},
    },
};

use super::{
    command::Command,
    game_stats::GameStats,
    seed_buffer::{PieceSeed, SeedBuffer},
};

#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    Playing,
    Paused,
    GameOver,
}

/// Result of one driver tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum StepOutcome {
    /// The fall interval has not elapsed yet.
    Waiting,
    /// The piece moved down one row.
    Fell,
    /// The piece was committed, rows were cleared and a new piece spawned.
    Landed { cleared_lines: usize },
    /// The piece was committed but the newly spawned piece is blocked.
    GameOver,
    /// The session is paused or over; nothing changed.
    Halted,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Time between two gravity steps.
    pub fall_interval: Duration,
    /// Seed for the piece sequence. `None` draws a random one.
    pub seed: Option<PieceSeed>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            fall_interval: Duration::from_secs(1),
            seed: None,
        }
    }
}

/// A single game: board, falling piece, gravity timer and statistics.
///
/// The clock is supplied by the caller through [`step`](Self::step), so the
/// session itself never reads the system time after construction.
///
/// # Example
///
/// ```
/// use std::time::{Duration, Instant};
///
/// use tetrad_engine::{GameSession, SessionConfig, StepOutcome};
///
/// let start = Instant::now();
/// let mut session = GameSession::with_config_at(SessionConfig::default(), start);
///
/// assert_eq!(session.step(start + Duration::from_millis(500)), StepOutcome::Waiting);
/// assert_eq!(session.step(start + Duration::from_secs(1)), StepOutcome::Fell);
///
/// // Moves are validated against the settled cells before they are applied.
/// session.try_move_left().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    piece: PieceContext,
    seeds: SeedBuffer,
    stats: GameStats,
    session_state: SessionState,
    fall_interval: Duration,
    last_fall: Instant,
    last_tick: Instant,
    play_time: Duration,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    #[must_use]
    pub fn with_config(config: SessionConfig) -> Self {
        Self::with_config_at(config, Instant::now())
    }

    /// Creates a session whose gravity timer starts at `start`.
    #[must_use]
    pub fn with_config_at(config: SessionConfig, start: Instant) -> Self {
        Self::with_board(config, Board::new(), start)
    }

    /// Like [`Self::with_config_at`], but starting from an existing board.
    ///
    /// The first piece is spawned without a game-over check; a blocked spawn
    /// is detected when it lands.
    #[must_use]
    pub fn with_board(config: SessionConfig, board: Board, start: Instant) -> Self {
        let mut seeds = config.seed.map_or_else(SeedBuffer::new, SeedBuffer::with_seed);
        let piece = PieceContext::spawn(seeds.pop_next_seed());
        let mut this = Self {
            board,
            piece,
            seeds,
            stats: GameStats::new(),
            session_state: SessionState::Playing,
            fall_interval: config.fall_interval,
            last_fall: start,
            last_tick: start,
            play_time: Duration::ZERO,
        };
        this.board.update_composite(this.piece.cells());
        this
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn falling_piece(&self) -> &PieceContext {
        &self.piece
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn session_state(&self) -> &SessionState {
        &self.session_state
    }

    #[must_use]
    pub fn fall_interval(&self) -> Duration {
        self.fall_interval
    }

    /// Shape of the piece that spawns after the current one lands.
    #[must_use]
    pub fn next_piece_kind(&self) -> PieceKind {
        self.seeds.peek_next_kind()
    }

    /// Time spent in the playing state, as observed by [`step`](Self::step).
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.play_time
    }

    pub fn toggle_pause(&mut self) {
        self.session_state = match self.session_state {
            SessionState::Playing => SessionState::Paused,
            SessionState::Paused => SessionState::Playing,
            SessionState::GameOver => SessionState::GameOver, // No change from game over
        };
    }

    /// Ends the session.
    pub fn quit(&mut self) {
        self.session_state = SessionState::GameOver;
    }

    /// Advances the gravity timer to `now` and runs a gravity step once the
    /// fall interval has elapsed.
    ///
    /// While paused the fall timer is frozen, so resuming does not trigger an
    /// immediate drop.
    pub fn step(&mut self, now: Instant) -> StepOutcome {
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        match self.session_state {
            SessionState::Playing => {}
            SessionState::Paused => {
                self.last_fall += elapsed;
                return StepOutcome::Halted;
            }
            SessionState::GameOver => return StepOutcome::Halted,
        }
        self.play_time += elapsed;

        if now.saturating_duration_since(self.last_fall) < self.fall_interval {
            return StepOutcome::Waiting;
        }
        self.last_fall = now;
        self.gravity_step()
    }

    /// Moves the piece down one row, or lands it if it cannot fall.
    ///
    /// Landing commits the piece, removes full rows and spawns the next piece.
    /// The session is over when the new piece cannot be placed or cannot fall.
    pub fn gravity_step(&mut self) -> StepOutcome {
        if !self.session_state.is_playing() {
            return StepOutcome::Halted;
        }

        if !self.board.is_colliding(self.piece.down_candidate()) {
            self.piece.down();
            self.board.update_composite(self.piece.cells());
            return StepOutcome::Fell;
        }

        self.board.update_composite(self.piece.cells());
        let cleared_lines = self.board.explode_rows();
        self.stats.record_landing(cleared_lines);

        self.piece = PieceContext::spawn(self.seeds.pop_next_seed());
        self.board.update_composite(self.piece.cells());
        if self.board.is_colliding(self.piece.cells())
            || self.board.is_colliding(self.piece.down_candidate())
        {
            self.session_state = SessionState::GameOver;
            return StepOutcome::GameOver;
        }
        StepOutcome::Landed { cleared_lines }
    }

    pub fn try_move_left(&mut self) -> Result<(), MoveError> {
        self.try_move(PieceContext::left_candidate, PieceContext::left)
    }

    pub fn try_move_right(&mut self) -> Result<(), MoveError> {
        self.try_move(PieceContext::right_candidate, PieceContext::right)
    }

    /// Moves the piece down one row. Unlike [`gravity_step`](Self::gravity_step),
    /// a blocked piece is left in place rather than landed.
    pub fn try_soft_drop(&mut self) -> Result<(), MoveError> {
        self.try_move(PieceContext::down_candidate, PieceContext::down)
    }

    /// Rotates the piece if neither the rotated cells nor the cells it sweeps
    /// through are blocked.
    pub fn try_rotate(&mut self) -> Result<(), MoveError> {
        self.ensure_playing()?;
        if self.board.is_colliding(self.piece.rotate_candidate())
            || self.board.is_colliding(self.piece.round_candidate())
        {
            return Err(MoveError::Collision(PieceCollisionError));
        }
        self.piece.rotate();
        self.board.update_composite(self.piece.cells());
        Ok(())
    }

    /// Applies a player command.
    ///
    /// [`Command::Pause`] and [`Command::Quit`] always succeed; movement
    /// commands fail without changing anything when they are blocked or the
    /// session is not playing.
    pub fn apply(&mut self, command: Command) -> Result<(), MoveError> {
        match command {
            Command::Left => self.try_move_left(),
            Command::Right => self.try_move_right(),
            Command::Rotate => self.try_rotate(),
            Command::Down => self.try_soft_drop(),
            Command::Pause => {
                self.toggle_pause();
                Ok(())
            }
            Command::Quit => {
                self.quit();
                Ok(())
            }
        }
    }

    fn ensure_playing(&self) -> Result<(), MoveError> {
        if self.session_state.is_playing() {
            Ok(())
        } else {
            Err(MoveError::NotPlaying)
        }
    }

    fn try_move(
        &mut self,
        candidate: fn(&PieceContext) -> &Footprint,
        apply: fn(&mut PieceContext),
    ) -> Result<(), MoveError> {
        self.ensure_playing()?;
        if self.board.is_colliding(candidate(&self.piece)) {
            return Err(MoveError::Collision(PieceCollisionError));
        }
        apply(&mut self.piece);
        self.board.update_composite(self.piece.cells());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        board::{Cell, Grid},
        geometry::{BOARD_HEIGHT, BOARD_WIDTH, CellIndex},
    };

    const SEED: PieceSeed = PieceSeed::from_bytes([0x5a; 16]);

    fn config() -> SessionConfig {
        SessionConfig {
            fall_interval: Duration::from_secs(1),
            seed: Some(SEED),
        }
    }

    fn composite_matches_piece(session: &GameSession) -> bool {
        let mut expected = session.board().clone();
        expected.update_composite(session.falling_piece().cells());
        expected.composite() == session.board().composite()
    }

    /// Every row below the top one is filled except its outer columns.
    fn nearly_full_board() -> Board {
        let mut grid = Grid::EMPTY;
        for row in 1..BOARD_HEIGHT {
            for col in 1..BOARD_WIDTH - 1 {
                grid.set(CellIndex::from_row_col(row, col), Cell::Filled);
            }
        }
        Board::with_settled(grid)
    }

    #[test]
    fn test_step_waits_for_interval() {
        let start = Instant::now();
        let mut session = GameSession::with_config_at(config(), start);
        let spawned = *session.falling_piece().cells();

        assert_eq!(session.step(start), StepOutcome::Waiting);
        assert_eq!(
            session.step(start + Duration::from_millis(999)),
            StepOutcome::Waiting
        );
        assert_eq!(session.falling_piece().cells(), &spawned);

        assert_eq!(
            session.step(start + Duration::from_secs(1)),
            StepOutcome::Fell
        );
        assert_eq!(session.falling_piece().cells(), &spawned.down());
        assert!(composite_matches_piece(&session));

        // The timer restarts from the fall.
        assert_eq!(
            session.step(start + Duration::from_millis(1500)),
            StepOutcome::Waiting
        );
        assert_eq!(session.duration(), Duration::from_millis(1500));
    }

    #[test]
    fn test_pause_freezes_timer() {
        let start = Instant::now();
        let mut session = GameSession::with_config_at(config(), start);

        session.apply(Command::Pause).unwrap();
        assert!(session.session_state().is_paused());
        assert_eq!(
            session.step(start + Duration::from_secs(5)),
            StepOutcome::Halted
        );
        assert_eq!(session.try_move_left(), Err(MoveError::NotPlaying));
        assert_eq!(session.gravity_step(), StepOutcome::Halted);

        session.apply(Command::Pause).unwrap();
        assert!(session.session_state().is_playing());
        assert_eq!(
            session.step(start + Duration::from_millis(5500)),
            StepOutcome::Waiting
        );
        assert_eq!(
            session.step(start + Duration::from_secs(6)),
            StepOutcome::Fell
        );
        assert_eq!(session.duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_moves_are_validated() {
        let start = Instant::now();
        let mut session = GameSession::with_config_at(config(), start);

        let mut moved = 0;
        while session.try_move_left().is_ok() {
            moved += 1;
            assert!(moved <= BOARD_WIDTH, "piece moved through the wall");
        }
        assert!(moved > 0);
        assert!(
            session
                .falling_piece()
                .cells()
                .iter()
                .any(|c| c.col() == Some(0))
        );
        assert!(composite_matches_piece(&session));

        let before = *session.falling_piece().cells();
        assert_eq!(
            session.apply(Command::Left),
            Err(MoveError::Collision(PieceCollisionError))
        );
        assert_eq!(session.falling_piece().cells(), &before);

        session.apply(Command::Right).unwrap();
        assert_eq!(session.falling_piece().cells(), &before.right());
    }

    #[test]
    fn test_soft_drop_does_not_land() {
        let start = Instant::now();
        let mut session = GameSession::with_config_at(config(), start);

        while session.try_soft_drop().is_ok() {}
        assert!(session.board().settled().is_empty());
        assert_eq!(session.stats().landed_pieces(), 0);
        assert!(
            session
                .falling_piece()
                .cells()
                .iter()
                .any(|c| c.row() == Some(BOARD_HEIGHT - 1))
        );
    }

    #[test]
    fn test_rotation_blocked_by_settled_cells() {
        let start = Instant::now();
        let mut session = GameSession::with_board(config(), nearly_full_board(), start);
        let orientation = session.falling_piece().orientation();

        if session.falling_piece().kind() != Some(PieceKind::O) {
            assert_eq!(
                session.try_rotate(),
                Err(MoveError::Collision(PieceCollisionError))
            );
        }
        assert_eq!(session.falling_piece().orientation(), orientation);
    }

    #[test]
    fn test_landing_spawns_next_piece() {
        let start = Instant::now();
        let mut session = GameSession::with_config_at(config(), start);
        let next = session.next_piece_kind();

        let mut falls = 0;
        let outcome = loop {
            match session.gravity_step() {
                StepOutcome::Fell => falls += 1,
                outcome => break outcome,
            }
        };
        assert!(falls >= BOARD_HEIGHT - 3);
        assert_eq!(outcome, StepOutcome::Landed { cleared_lines: 0 });
        assert_eq!(session.board().settled().filled_count(), 4);
        assert_eq!(session.falling_piece().kind(), Some(next));
        assert_eq!(session.stats().landed_pieces(), 1);
        assert!(composite_matches_piece(&session));
    }

    #[test]
    fn test_blocked_spawn_is_game_over() {
        let start = Instant::now();
        let mut session = GameSession::with_board(config(), nearly_full_board(), start);

        assert_eq!(session.gravity_step(), StepOutcome::GameOver);
        assert!(session.session_state().is_game_over());
        assert_eq!(session.stats().landed_pieces(), 1);

        assert_eq!(
            session.step(start + Duration::from_secs(10)),
            StepOutcome::Halted
        );
        session.toggle_pause();
        assert!(session.session_state().is_game_over());
        assert_eq!(session.apply(Command::Rotate), Err(MoveError::NotPlaying));
    }

    #[test]
    fn test_quit_ends_session() {
        let mut session = GameSession::with_config_at(config(), Instant::now());
        session.apply(Command::Quit).unwrap();
        assert!(session.session_state().is_game_over());
        assert_eq!(session.gravity_step(), StepOutcome::Halted);
    }

    #[test]
    fn test_same_seed_same_game() {
        let start = Instant::now();
        let mut a = GameSession::with_config_at(config(), start);
        let mut b = GameSession::with_config_at(config(), start);
        for _ in 0..200 {
            assert_eq!(a.gravity_step(), b.gravity_step());
            assert_eq!(a.board().composite(), b.board().composite());
        }
    }
}
