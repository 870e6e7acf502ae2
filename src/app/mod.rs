// lictor - terminal viewer for recorded trace steps
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

mod events;
mod requests;
mod state;

pub use events::{AppEvent, handle_app_event, handle_terminal_event, request_new_steps};
pub use requests::flush_requests;
pub use state::{App, AppStatus, Request, StepWorkspace};

use crate::config::Settings;
use crate::poll::{PollClient, RepeatingTimer};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, EventStream};
use futures::{FutureExt as _, StreamExt};
use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

// ---------------------------------------------------------------------------
// Timers
// ---------------------------------------------------------------------------

/// Timers feeding the app: visibility re-check and step polling.
pub struct AppTimers {
    check: RepeatingTimer,
    poll: RepeatingTimer,
}

impl AppTimers {
    pub fn start(app: &App, settings: &Settings) -> Self {
        Self {
            check: send_every(settings.check_interval, app.event_tx.clone(), || {
                AppEvent::CheckTick
            }),
            poll: send_every(settings.poll_interval, app.event_tx.clone(), || AppEvent::PollTick),
        }
    }

    pub fn cancel(&mut self) {
        self.check.cancel();
        self.poll.cancel();
    }
}

fn send_every(
    period: Duration,
    tx: mpsc::UnboundedSender<AppEvent>,
    make: fn() -> AppEvent,
) -> RepeatingTimer {
    RepeatingTimer::start(period, move || {
        if tx.send(make()).is_ok() { ControlFlow::Continue(()) } else { ControlFlow::Break(()) }
    })
}

// ---------------------------------------------------------------------------
// TUI event loop
// ---------------------------------------------------------------------------

pub async fn run_tui(
    app: &mut App,
    client: Arc<dyn PollClient>,
    settings: &Settings,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    // Mouse capture for horizontal wheel scrolling (ignore error on unsupported terminals)
    let _ = crossterm::execute!(std::io::stdout(), EnableMouseCapture);

    let mut timers = AppTimers::start(app, settings);
    request_new_steps(app);

    let mut events = EventStream::new();
    let tick_duration = Duration::from_millis(16);
    let mut last_render = Instant::now();

    let result = loop {
        // Phase 1: wait for at least one event or the next frame tick
        let time_to_next = tick_duration.saturating_sub(last_render.elapsed());
        tokio::select! {
            Some(Ok(event)) = events.next() => {
                handle_terminal_event(app, event);
            }
            Some(event) = app.event_rx.recv() => {
                handle_app_event(app, event);
            }
            () = tokio::time::sleep(time_to_next) => {}
        }

        // Phase 2: drain all remaining queued events (non-blocking)
        loop {
            if let Some(Some(Ok(event))) = events.next().now_or_never() {
                handle_terminal_event(app, event);
                continue;
            }
            match app.event_rx.try_recv() {
                Ok(event) => handle_app_event(app, event),
                Err(_) => break,
            }
        }

        if app.should_quit {
            break Ok(());
        }

        // Phase 3: spawn queued backend calls, then render once
        flush_requests(app, &client);
        app.spinner_frame = app.spinner_frame.wrapping_add(1);
        if let Err(err) = terminal.draw(|f| crate::ui::render(f, app)) {
            break Err(err.into());
        }
        last_render = Instant::now();
    };

    // --- Graceful shutdown ---
    // Timers go first so no tick can reach a disposed workspace.
    timers.cancel();
    app.dispose();

    let _ = crossterm::execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}
