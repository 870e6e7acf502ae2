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

use crate::poll::TraceFrame;

/// Numeric step identifier assigned by the trace backend.
pub type StepId = u64;

/// Load state of a step's body. Bodies are fetched lazily, the first time
/// the step scrolls into view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StepContent {
    #[default]
    Pending,
    Loading,
    Loaded(Vec<TraceFrame>),
    Failed(String),
}

/// One panel of the workspace strip.
#[derive(Debug, Clone)]
pub struct Step {
    id: StepId,
    title: String,
    /// Shared panel width, fixed when the first step was appended.
    width: u32,
    visible_hits: u32,
    content: StepContent,
}

impl Step {
    pub fn new(id: StepId, title: impl Into<String>) -> Self {
        Self { id, title: title.into(), width: 0, visible_hits: 0, content: StepContent::Pending }
    }

    #[must_use]
    pub fn id(&self) -> StepId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    pub(crate) fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    /// How many visibility passes have included this step.
    #[must_use]
    pub fn visible_hits(&self) -> u32 {
        self.visible_hits
    }

    #[must_use]
    pub fn content(&self) -> &StepContent {
        &self.content
    }

    /// Record that the step is on screen.
    ///
    /// Returns `true` when the caller should start loading the body: on the
    /// first hit, and again after a failed load.
    pub fn on_visible(&mut self) -> bool {
        self.visible_hits = self.visible_hits.saturating_add(1);
        match self.content {
            StepContent::Pending | StepContent::Failed(_) => {
                self.content = StepContent::Loading;
                true
            }
            StepContent::Loading | StepContent::Loaded(_) => false,
        }
    }

    pub fn finish_loading(&mut self, frames: Vec<TraceFrame>) {
        self.content = StepContent::Loaded(frames);
    }

    pub fn fail_loading(&mut self, message: impl Into<String>) {
        self.content = StepContent::Failed(message.into());
    }
}
