//! Game driver built on top of the core structures.
//!
//! - [`GameSession`] - gravity timer, landing, row clearing, spawning and the
//!   game-over decision
//! - [`Command`] - player commands decoded from single keys
//! - [`GameStats`] - score, cleared lines and landed pieces
//! - [`SeedBuffer`] / [`PieceSeed`] - buffered spawn seeds from a seedable PRNG
//!
//! # Game Flow
//!
//! 1. The session spawns a piece from the seed buffer
//! 2. The player moves and rotates it; every move is checked against the
//!    settled cells first
//! 3. Once per fall interval, [`GameSession::step`] moves the piece down, or
//!    lands it when it cannot fall
//! 4. Landing removes full rows and spawns the next piece
//! 5. The game ends when a freshly spawned piece is blocked
//!
//! # Example
//!
//! ```
//! use tetrad_engine::{GameSession, PieceSeed, SessionConfig, StepOutcome};
//!
//! let config = SessionConfig {
//!     seed: Some(PieceSeed::from_bytes([1; 16])),
//!     ..SessionConfig::default()
//! };
//! let mut session = GameSession::with_config(config);
//!
//! while !session.gravity_step().is_game_over() {}
//!
//! assert!(session.session_state().is_game_over());
//! assert_eq!(session.gravity_step(), StepOutcome::Halted);
//! ```

pub use self::{command::*, game_session::*, game_stats::*, seed_buffer::*};

mod command;
mod game_session;
mod game_stats;
mod seed_buffer;
