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

mod measure;
pub mod range;
mod step;
mod store;
mod tracker;

pub use measure::{MAX_FIT_WIDTH, MIN_FIT_WIDTH, PanelMeasure};
pub use range::{VisibleRange, max_scroll_offset, panel_x, visible_range};
pub use step::{Step, StepContent, StepId};
pub use store::StepStore;
pub use tracker::{
    Geometry, Measure, MergeOutcome, Notifier, Viewport, VisibilityPass, Workspace,
};
