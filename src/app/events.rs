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

use super::{App, AppStatus, Request};
use crate::error::{AppError, PollError};
use crate::poll::{LastSteps, StepDetail};
use crate::workspace::{StepId, VisibilityPass};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

/// Messages delivered to the App from timers and backend tasks.
#[derive(Debug)]
pub enum AppEvent {
    /// Periodic visibility re-check.
    CheckTick,
    /// Periodic request for new steps.
    PollTick,
    StepsArrived(LastSteps),
    PollFailed(PollError),
    StepLoaded { id: StepId, detail: StepDetail },
    StepLoadFailed { id: StepId, message: String },
}

pub fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::CheckTick => {
            let viewport = app.viewport();
            // A resize reveals panels without moving the offset
            let force = viewport.width != app.checked_width;
            app.checked_width = viewport.width;
            if let Some(pass) = app.workspace.check_visibility(&viewport, force) {
                queue_step_loads(app, &pass);
            }
        }
        AppEvent::PollTick => request_new_steps(app),
        AppEvent::StepsArrived(last) => {
            app.poll_in_flight = false;
            app.status = AppStatus::Live;
            let viewport = app.viewport();
            let outcome = app.workspace.merge_new_steps(last.steps, &viewport);
            if !outcome.appended.is_empty() {
                tracing::info!(
                    appended = outcome.appended.len(),
                    last_seen_id = app.workspace.last_seen_id(),
                    "new steps"
                );
            }
            if let Some(pass) = outcome.visibility {
                app.checked_width = viewport.width;
                queue_step_loads(app, &pass);
            }
        }
        AppEvent::PollFailed(err) => {
            app.poll_in_flight = false;
            tracing::warn!("poll failed: {err}");
            if let Some(fatal) = err.fatal() {
                end_session(app, fatal);
            } else if app.status == AppStatus::Connecting && err.is_transport() {
                end_session(app, AppError::BackendUnreachable);
            } else {
                app.status = AppStatus::Error(err.to_string());
            }
        }
        AppEvent::StepLoaded { id, detail } => {
            if let Some(step) = app.workspace.step_mut(id) {
                tracing::debug!(step_id = id, frames = detail.frames.len(), "step loaded");
                step.finish_loading(detail.frames);
            }
        }
        AppEvent::StepLoadFailed { id, message } => {
            tracing::warn!(step_id = id, "step load failed: {message}");
            if let Some(step) = app.workspace.step_mut(id) {
                step.fail_loading(message);
            }
        }
    }
}

/// Queue a poll for steps newer than the last one seen, unless one is
/// already in flight.
pub fn request_new_steps(app: &mut App) {
    if app.poll_in_flight || app.workspace.is_disposed() {
        return;
    }
    app.poll_in_flight = true;
    app.outbox.push(Request::Last { last_seen_id: app.workspace.last_seen_id() });
}

fn queue_step_loads(app: &mut App, pass: &VisibilityPass) {
    app.outbox.extend(pass.newly_visible.iter().copied().map(Request::Step));
}

fn end_session(app: &mut App, error: AppError) {
    tracing::error!("ending session: {error}");
    app.exit_error = Some(error);
    app.should_quit = true;
}

pub fn handle_terminal_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        // Resize: the strip re-clamps on render, the next CheckTick rechecks visibility
        _ => {}
    }
}

const KEY_SCROLL_COLS: i64 = 4;
const MOUSE_SCROLL_COLS: i64 = 3;

fn handle_key(app: &mut App, key: KeyEvent) {
    let page = i64::from(app.viewport_width.max(1));
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => app.should_quit = true,
        (KeyCode::Char('q') | KeyCode::Esc, _) => app.should_quit = true,
        (KeyCode::Left | KeyCode::Char('h'), _) => app.scroll_by(-KEY_SCROLL_COLS),
        (KeyCode::Right | KeyCode::Char('l'), _) => app.scroll_by(KEY_SCROLL_COLS),
        (KeyCode::PageUp, _) => app.scroll_by(-page),
        (KeyCode::PageDown, _) => app.scroll_by(page),
        (KeyCode::Home, _) => app.scroll_to(0),
        (KeyCode::End, _) => app.scroll_to(u32::MAX),
        (KeyCode::Char('r'), _) => request_new_steps(app),
        _ => {}
    }
}

fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => app.scroll_by(-MOUSE_SCROLL_COLS),
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => {
            app.scroll_by(MOUSE_SCROLL_COLS);
        }
        _ => {}
    }
}
