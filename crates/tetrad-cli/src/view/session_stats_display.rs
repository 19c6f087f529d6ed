use std::{fmt::Display, time::Duration};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Text},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};
use tetrad_engine::{GameSession, GameStats};

use crate::view::style;

const LABEL_WIDTH: usize = 8;
const VALUE_WIDTH: usize = 8;

/// Session totals followed by the line-clear histogram.
#[derive(Debug)]
pub struct SessionStatsDisplay<'a> {
    stats: &'a GameStats,
    play_time: Duration,
    block: Option<BlockWidget<'a>>,
}

impl<'a> SessionStatsDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self {
            stats: session.stats(),
            play_time: session.duration(),
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn width(&self) -> u16 {
        (LABEL_WIDTH + VALUE_WIDTH) as u16 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        let lines = u16::try_from(self.text_lines().len()).unwrap_or(u16::MAX);
        lines + super::block_vertical_margin(self.block.as_ref())
    }

    fn text_lines(&self) -> Vec<String> {
        let stats = self.stats;
        let mut lines = vec![
            stat_line("SCORE", stats.score()),
            stat_line("LEVEL", stats.level()),
            stat_line("LINES", stats.total_cleared_lines()),
            stat_line("PIECES", stats.landed_pieces()),
            stat_line("TIME", format_play_time(self.play_time)),
            String::new(),
        ];
        // Slot 0 counts landings without a clear.
        lines.extend(
            stats
                .line_cleared_counter()
                .iter()
                .enumerate()
                .skip(1)
                .map(|(rows, count)| stat_line(&format!("{rows}-ROW"), count)),
        );
        lines
    }
}

fn stat_line(label: &str, value: impl Display) -> String {
    format!("{label:<LABEL_WIDTH$}{value:>VALUE_WIDTH$}")
}

fn format_play_time(time: Duration) -> String {
    let secs = time.as_secs();
    format!(
        "{}:{:02}.{:02}",
        secs / 60,
        secs % 60,
        time.subsec_millis() / 10
    )
}

impl Widget for SessionStatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let lines = self
            .text_lines()
            .into_iter()
            .map(Line::from)
            .collect::<Vec<_>>();
        Text::from(lines).style(style::DEFAULT).render(area, buf);
    }
}
