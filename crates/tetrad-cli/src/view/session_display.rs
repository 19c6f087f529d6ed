use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};
use tetrad_engine::{GameSession, Glyphs, SessionState};

use crate::view::{BoardDisplay, NextPieceDisplay, SessionStatsDisplay, color, style};

/// Board in the center, next piece and statistics on the right.
#[derive(Debug)]
pub struct SessionDisplay<'a> {
    session: &'a GameSession,
    glyphs: &'a Glyphs,
}

impl<'a> SessionDisplay<'a> {
    pub fn new(session: &'a GameSession, glyphs: &'a Glyphs) -> Self {
        Self { session, glyphs }
    }
}

impl Widget for SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block_padding = Padding::symmetric(1, 0);
        let border_style = match self.session.session_state() {
            SessionState::Playing => color::WHITE,
            SessionState::Paused => color::YELLOW,
            SessionState::GameOver => color::RED,
        };

        let game_board = BoardDisplay::new(self.session.board().composite(), self.glyphs)
            .block(Block::bordered().border_style(border_style).style(style::DEFAULT));
        let next_panel = NextPieceDisplay::new(self.session.next_piece_kind(), self.glyphs).block(
            Block::bordered()
                .title(Line::from("NEXT").centered())
                .padding(block_padding)
                .border_style(border_style)
                .style(style::DEFAULT),
        );
        let session_stats = SessionStatsDisplay::new(self.session).block(
            Block::bordered()
                .title(Line::from("STATS").centered())
                .padding(block_padding)
                .border_style(border_style)
                .style(style::DEFAULT),
        );

        let [board_column, side_column] = Layout::horizontal([
            Constraint::Length(game_board.width()),
            Constraint::Length(u16::max(next_panel.width(), session_stats.width())),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);

        let [board_area] =
            Layout::vertical([Constraint::Length(game_board.height())]).areas(board_column);
        let [next_area, stats_area] = Layout::vertical([
            Constraint::Length(next_panel.height()),
            Constraint::Length(session_stats.height()),
        ])
        .spacing(1)
        .areas(side_column);
        let next_area = next_area.layout::<1>(
            &Layout::horizontal([Constraint::Length(next_panel.width())]).flex(Flex::Start),
        )[0];

        let game_board_width = game_board.width();
        game_board.render(board_area, buf);
        next_panel.render(next_area, buf);
        session_stats.render(stats_area, buf);

        let popup = match self.session.session_state() {
            SessionState::Playing => None,
            SessionState::Paused => {
                Some(("PAUSED", Style::new().fg(color::BLACK).bg(color::YELLOW)))
            }
            SessionState::GameOver => {
                Some(("GAME OVER", Style::new().fg(color::WHITE).bg(color::RED)))
            }
        };

        if let Some((text, style)) = popup {
            let block = Block::new().style(style);
            let text = Text::styled(text, style).centered();
            let area =
                board_area.centered(Constraint::Length(game_board_width), Constraint::Length(3));
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            text.render(inner.centered_vertically(Constraint::Length(1)), buf);
        }
    }
}
