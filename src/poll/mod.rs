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

//! Trace backend collaborator: the polling client, its wire types and the
//! timer used to drive it.

mod http;
mod timer;
mod wire;

pub use http::HttpPollClient;
pub use timer::RepeatingTimer;
pub use wire::{LastSteps, StepDetail, TraceFrame, frame_depths};

use crate::error::PollError;
use crate::workspace::StepId;
use async_trait::async_trait;

/// Source of steps for one recorded session.
#[async_trait]
pub trait PollClient: Send + Sync {
    /// Steps recorded after `last_seen_id`.
    async fn request_last(
        &self,
        session_id: &str,
        last_seen_id: StepId,
    ) -> Result<LastSteps, PollError>;

    /// Call graph recorded for one step.
    async fn request_step(&self, session_id: &str, id: StepId) -> Result<StepDetail, PollError>;
}
