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

use crate::workspace::StepId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Body of `GET {base}/last/{session}/{last_id}/`.
///
/// Each entry is a `[id, title]` pair. The backend is expected to send only
/// ids above `last_id`, but ordering and freshness are not guaranteed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastSteps {
    #[serde(rename = "new", default)]
    pub steps: Vec<(StepId, String)>,
}

/// Body of `GET {base}/step/{session}/{id}/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDetail {
    #[serde(default)]
    pub frames: Vec<TraceFrame>,
}

/// One node of a recorded call graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceFrame {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub file: String,
    pub line: u32,
    #[serde(default)]
    pub name: String,
    /// Closest recorded ancestor frame, if any.
    #[serde(default)]
    pub pid: Option<String>,
}

/// Nesting depth of every frame, following `pid` links.
///
/// Parents missing from the list end the chain; cycles are cut after
/// `frames.len()` hops.
pub fn frame_depths(frames: &[TraceFrame]) -> Vec<usize> {
    let by_id: HashMap<&str, usize> =
        frames.iter().enumerate().map(|(i, f)| (f.id.as_str(), i)).collect();

    frames
        .iter()
        .map(|frame| {
            let mut depth = 0;
            let mut parent = frame.pid.as_deref();
            while let Some(pos) = parent.and_then(|pid| by_id.get(pid)) {
                depth += 1;
                if depth >= frames.len() {
                    break;
                }
                parent = frames[*pos].pid.as_deref();
            }
            depth
        })
        .collect()
}
