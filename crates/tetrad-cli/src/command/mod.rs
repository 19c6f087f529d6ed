use std::time::Duration;

use clap::{Parser, Subcommand};
use rand::Rng as _;
use tetrad_engine::{PieceSeed, SessionConfig};

use self::{play::PlayArg, render::RenderArg};

mod play;
mod render;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play in the terminal
    Play(#[clap(flatten)] PlayArg),
    /// Run gravity steps without a terminal UI and print the board
    Render(#[clap(flatten)] RenderArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Render(arg) => render::run(&arg)?,
    }
    Ok(())
}

/// Options shared by every mode that builds a session.
#[derive(Debug, Clone, clap::Args)]
struct SessionArg {
    /// Milliseconds between two gravity steps
    #[clap(long, default_value_t = 1000)]
    fall_interval_ms: u64,
    /// Piece sequence seed (32 hex digits); random when omitted
    #[clap(long)]
    seed: Option<PieceSeed>,
    /// Two-character glyph drawn for filled cells
    #[clap(long, default_value = "[]", value_parser = parse_glyph)]
    glyph: String,
}

impl Default for SessionArg {
    fn default() -> Self {
        Self {
            fall_interval_ms: 1000,
            seed: None,
            glyph: "[]".to_owned(),
        }
    }
}

impl SessionArg {
    /// Builds the session configuration, drawing a seed when none was given
    /// so that it can be reported for a replay.
    fn config(&self) -> SessionConfig {
        SessionConfig {
            fall_interval: Duration::from_millis(self.fall_interval_ms),
            seed: Some(self.seed.unwrap_or_else(|| rand::rng().random())),
        }
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("glyph must be exactly 2 characters wide, got {width}")]
struct InvalidGlyphError {
    width: usize,
}

fn parse_glyph(s: &str) -> Result<String, InvalidGlyphError> {
    let width = s.chars().count();
    if width == 2 {
        Ok(s.to_owned())
    } else {
        Err(InvalidGlyphError { width })
    }
}
