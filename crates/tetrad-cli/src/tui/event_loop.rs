use std::time::{Duration, Instant};

use crossterm::event;

use crate::tui::event::TuiEvent;

const DEFAULT_INTERVAL: Duration = Duration::from_millis(33);

/// Clock for the play screen: a tick deadline, a redraw deadline and terminal
/// input in between.
#[derive(Debug)]
pub(super) struct EventLoop {
    tick_interval: Duration,
    render_interval: Duration,
    next_tick: Instant,
    next_render: Instant,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    /// The first event is a render, so the screen is drawn before any input.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            tick_interval: DEFAULT_INTERVAL,
            render_interval: DEFAULT_INTERVAL,
            next_tick: now + DEFAULT_INTERVAL,
            next_render: now,
        }
    }

    pub(super) fn set_tick_interval(&mut self, interval: Duration) {
        self.tick_interval = interval;
        self.next_tick = Instant::now() + interval;
    }

    pub(super) fn set_render_interval(&mut self, interval: Duration) {
        self.render_interval = interval;
    }

    /// Blocks until a tick or render is due or a terminal event arrives.
    /// Ticks win over renders when both are due.
    pub(super) fn next(&mut self) -> anyhow::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if now >= self.next_tick {
                self.next_tick = now + self.tick_interval;
                return Ok(TuiEvent::Tick);
            }
            if now >= self.next_render {
                self.next_render = now + self.render_interval;
                return Ok(TuiEvent::Render);
            }
            if event::poll(self.timeout(now))? {
                return Ok(event::read()?.into());
            }
        }
    }

    fn timeout(&self, now: Instant) -> Duration {
        self.next_tick
            .min(self.next_render)
            .saturating_duration_since(now)
    }
}
