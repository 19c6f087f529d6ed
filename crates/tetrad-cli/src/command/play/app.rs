use std::time::Instant;

use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::Text,
};
use tetrad_engine::{Command, GameSession, Glyphs, SessionConfig, SessionState};

use crate::{
    tui::{App, Tui},
    view::{SessionDisplay, style},
};

#[derive(Debug)]
pub struct PlayApp {
    session: GameSession,
    glyphs: Glyphs,
    fps: f64,
    is_exiting: bool,
}

impl PlayApp {
    pub fn new(config: SessionConfig, glyphs: Glyphs, fps: f64) -> Self {
        Self {
            session: GameSession::with_config(config),
            glyphs,
            fps,
            is_exiting: false,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }
}

fn key_command(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Left => Some(Command::Left),
        KeyCode::Right => Some(Command::Right),
        KeyCode::Up => Some(Command::Rotate),
        KeyCode::Down => Some(Command::Down),
        KeyCode::Char(c) => Command::from_char(c),
        _ => None,
    }
}

impl App for PlayApp {
    fn init(&mut self, tui: &mut Tui) {
        tui.set_frame_rate(self.fps);
        tui.set_tick_rate(self.fps);
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, _tui: &mut Tui, event: &Event) {
        let Some(event) = event.as_key_event() else {
            return;
        };
        match key_command(event.code) {
            Some(Command::Quit) => {
                self.session.quit();
                self.is_exiting = true;
            }
            // Blocked moves are ignored.
            Some(command) => _ = self.session.apply(command),
            None => {}
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let help_text = match self.session.session_state() {
            SessionState::Playing => "h ← / l → (Move) | k ↑ (Rotate) | j ↓ (Down) | p (Pause) | q (Quit)",
            SessionState::Paused => "p (Resume) | q (Quit)",
            SessionState::GameOver => "q (Quit)",
        };
        let help_text = Text::from(help_text).style(style::HELP).centered();

        let [main_area, help_area] =
            Layout::vertical([Constraint::Length(24), Constraint::Length(1)])
                .areas::<2>(frame.area());
        frame.render_widget(SessionDisplay::new(&self.session, &self.glyphs), main_area);
        frame.render_widget(help_text, help_area);
    }

    fn update(&mut self, _tui: &mut Tui) {
        self.session.step(Instant::now());
    }
}
