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

use super::events::AppEvent;
use crate::config::Settings;
use crate::error::AppError;
use crate::history::History;
use crate::workspace::{PanelMeasure, StepId, Viewport, Workspace, max_scroll_offset};
use tokio::sync::mpsc;

pub type StepWorkspace = Workspace<History, PanelMeasure>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppStatus {
    /// No poll has completed yet.
    Connecting,
    Live,
    Error(String),
}

/// Backend call queued by event handling, spawned by the run loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Last { last_seen_id: StepId },
    Step(StepId),
}

pub struct App {
    pub workspace: StepWorkspace,
    pub session_id: String,
    /// Backend base URL, for display.
    pub backend: String,
    /// Horizontal scroll position of the step strip, in columns.
    pub scroll_offset: u32,
    /// Width of the step strip at the last render.
    pub viewport_width: u32,
    /// Strip width used by the last visibility pass.
    pub checked_width: u32,
    pub status: AppStatus,
    pub should_quit: bool,
    pub poll_in_flight: bool,
    pub outbox: Vec<Request>,
    pub event_tx: mpsc::UnboundedSender<AppEvent>,
    pub event_rx: mpsc::UnboundedReceiver<AppEvent>,
    pub spinner_frame: usize,
    /// Set when the session must end with a specific exit code.
    pub exit_error: Option<AppError>,
}

impl App {
    pub fn new(settings: &Settings) -> Self {
        Self::with_parts(&settings.session_id, settings.base_url.as_str(), settings.panel)
    }

    /// Minimal app for tests: no backend, fixed 20-column panels.
    pub fn test_default() -> Self {
        Self::with_parts("test-session", crate::config::DEFAULT_URL, PanelMeasure::Fixed(20))
    }

    fn with_parts(session_id: &str, backend: &str, panel: PanelMeasure) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            workspace: Workspace::new(History::new(), panel, 0),
            session_id: session_id.to_owned(),
            backend: backend.to_owned(),
            scroll_offset: 0,
            viewport_width: 0,
            checked_width: 0,
            status: AppStatus::Connecting,
            should_quit: false,
            poll_in_flight: false,
            outbox: Vec::new(),
            event_tx,
            event_rx,
            spinner_frame: 0,
            exit_error: None,
        }
    }

    /// Current strip geometry, as the workspace reads it.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.scroll_offset, self.viewport_width)
    }

    #[must_use]
    pub fn max_scroll(&self) -> u32 {
        let width = self.workspace.item_width().unwrap_or(0);
        max_scroll_offset(self.workspace.len(), self.viewport_width, width)
    }

    pub fn scroll_to(&mut self, offset: u32) {
        self.scroll_offset = offset.min(self.max_scroll());
    }

    pub fn scroll_by(&mut self, delta: i64) {
        let target = i64::from(self.scroll_offset).saturating_add(delta).max(0);
        self.scroll_to(u32::try_from(target).unwrap_or(u32::MAX));
    }

    /// Re-apply the scroll bound after the viewport or step count changed.
    pub fn clamp_scroll(&mut self) {
        self.scroll_to(self.scroll_offset);
    }

    pub fn dispose(&mut self) {
        self.workspace.dispose();
        self.outbox.clear();
    }
}
