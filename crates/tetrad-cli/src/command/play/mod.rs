use serde::Serialize;
use tetrad_engine::{GameSession, GameStats, Glyphs, PieceSeed};

use crate::{command::SessionArg, tui::Tui};

use self::app::PlayApp;

mod app;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    #[clap(flatten)]
    pub(super) session: SessionArg,
    /// Screen refresh and input polling rate (frames per second)
    #[clap(long, default_value_t = 30.0)]
    fps: f64,
    /// Print the final statistics as JSON when the session ends
    #[clap(long)]
    pub(super) json: bool,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            session: SessionArg::default(),
            fps: 30.0,
            json: false,
        }
    }
}

/// End-of-session report.
#[derive(Debug, Serialize)]
struct Summary<'a> {
    seed: Option<PieceSeed>,
    duration_secs: f64,
    stats: &'a GameStats,
}

impl<'a> Summary<'a> {
    fn new(session: &'a GameSession, seed: Option<PieceSeed>) -> Self {
        Self {
            seed,
            duration_secs: session.duration().as_secs_f64(),
            stats: session.stats(),
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg { session, fps, json } = arg;

    let config = session.config();
    let seed = config.seed;
    let mut app = PlayApp::new(config, Glyphs::with_filled(&session.glyph), *fps);

    Tui::new().run(&mut app)?;

    let summary = Summary::new(app.session(), seed);
    if *json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        let stats = summary.stats;
        println!(
            "score: {}, lines: {}, pieces: {}",
            stats.score(),
            stats.total_cleared_lines(),
            stats.landed_pieces()
        );
        if let Some(seed) = summary.seed {
            println!("seed: {seed}");
        }
    }
    Ok(())
}
