use std::io;

use tetrad_engine::{GameSession, Glyphs, SessionConfig, StepOutcome, render_rows};

use crate::command::SessionArg;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct RenderArg {
    #[clap(flatten)]
    session: SessionArg,
    /// Number of gravity steps to run before printing
    #[clap(long, default_value_t = 0)]
    steps: usize,
}

pub(crate) fn run(arg: &RenderArg) -> anyhow::Result<()> {
    let RenderArg { session, steps } = arg;
    let config = session.config();
    let glyphs = Glyphs::with_filled(&session.glyph);

    let mut out = io::stdout().lock();
    render(&mut out, config, &glyphs, *steps)?;
    Ok(())
}

/// Runs `steps` gravity steps and writes the framed composite grid.
fn render(
    out: &mut impl io::Write,
    config: SessionConfig,
    glyphs: &Glyphs,
    steps: usize,
) -> io::Result<()> {
    let mut session = GameSession::with_config(config);
    for _ in 0..steps {
        if session.gravity_step() == StepOutcome::GameOver {
            break;
        }
    }

    let rows = render_rows(session.board().composite(), glyphs);
    for row in &rows {
        writeln!(out, "<!{row}!>")?;
    }
    let floor_width = rows.first().map_or(0, |row| row.chars().count());
    writeln!(out, "<!{}!>", "=".repeat(floor_width))?;

    let stats = session.stats();
    writeln!(
        out,
        "next: {}  lines: {}  pieces: {}{}",
        session.next_piece_kind().as_char(),
        stats.total_cleared_lines(),
        stats.landed_pieces(),
        if session.session_state().is_game_over() {
            "  GAME OVER"
        } else {
            ""
        }
    )?;
    Ok(())
}
