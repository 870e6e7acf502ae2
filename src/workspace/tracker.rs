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

use super::range::{VisibleRange, visible_range};
use super::step::{Step, StepId};
use super::store::StepStore;

/// Scroll geometry owned by the hosting surface, sampled on every check.
pub trait Geometry {
    fn scroll_offset(&self) -> u32;
    fn viewport_width(&self) -> u32;
}

/// Plain snapshot of the surface geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub scroll_offset: u32,
    pub width: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(scroll_offset: u32, width: u32) -> Self {
        Self { scroll_offset, width }
    }
}

impl Geometry for Viewport {
    fn scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    fn viewport_width(&self) -> u32 {
        self.width
    }
}

/// Listener told about every appended step, in append order.
pub trait Notifier {
    fn append(&mut self, id: StepId, title: &str);
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn append(&mut self, id: StepId, title: &str) {
        (**self).append(id, title);
    }
}

/// Measures the rendered width of a step panel.
pub trait Measure {
    fn measure(&self, step: &Step) -> u32;
}

impl<F: Fn(&Step) -> u32> Measure for F {
    fn measure(&self, step: &Step) -> u32 {
        self(step)
    }
}

/// Result of a visibility pass that actually ran.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityPass {
    pub range: Option<VisibleRange>,
    /// Every step that received `on_visible`, ascending by position.
    pub dispatched: Vec<StepId>,
    /// Steps whose body should now be requested.
    pub newly_visible: Vec<StepId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    pub appended: Vec<StepId>,
    /// The forced recheck that follows a batch with at least one new step.
    pub visibility: Option<VisibilityPass>,
}

/// Horizontal strip of steps, newest first, with lazy visibility dispatch.
///
/// Every step shares one width: it is measured from the first appended step
/// and reused for all later ones. Steps of differing real widths will make the
/// index math drift.
pub struct Workspace<N, M> {
    store: StepStore,
    notifier: N,
    measure: M,
    last_seen_id: StepId,
    last_offset: u32,
    item_width: Option<u32>,
    disposed: bool,
}

impl<N: Notifier, M: Measure> Workspace<N, M> {
    /// `initial_offset` is the surface's scroll offset at construction time.
    pub fn new(notifier: N, measure: M, initial_offset: u32) -> Self {
        Self {
            store: StepStore::new(),
            notifier,
            measure,
            last_seen_id: 0,
            last_offset: initial_offset,
            item_width: None,
            disposed: false,
        }
    }

    /// Create, store and announce a new step.
    ///
    /// `id` must not be present yet; `merge_new_steps` is the deduplicating
    /// caller. A duplicate returns the stored step untouched. Returns `None`
    /// once the workspace is disposed.
    pub fn append_step(&mut self, id: StepId, title: impl Into<String>) -> Option<&Step> {
        if self.disposed {
            return None;
        }
        debug_assert!(!self.store.contains(id), "step {id} appended twice");
        let mut step = Step::new(id, title);
        if !self.store.contains(id) {
            step.set_width(self.fixed_width(&step));
            self.notifier.append(step.id(), step.title());
        }
        Some(self.store.insert(step))
    }

    fn fixed_width(&mut self, step: &Step) -> u32 {
        if let Some(width) = self.item_width {
            return width;
        }
        let width = self.measure.measure(step);
        tracing::debug!(step_id = step.id(), width, "fixed step width");
        self.item_width = Some(width);
        width
    }

    /// Append every step of a poll result that is not stored yet.
    pub fn merge_new_steps<G>(
        &mut self,
        items: impl IntoIterator<Item = (StepId, String)>,
        geometry: &G,
    ) -> MergeOutcome
    where
        G: Geometry + ?Sized,
    {
        let mut outcome = MergeOutcome::default();
        if self.disposed {
            return outcome;
        }

        for (id, title) in items {
            if id > self.last_seen_id {
                self.last_seen_id = id;
            }
            if self.store.contains(id) {
                continue;
            }
            self.append_step(id, title);
            outcome.appended.push(id);
        }

        if !outcome.appended.is_empty() {
            tracing::debug!(
                appended = outcome.appended.len(),
                last_seen_id = self.last_seen_id,
                "merged new steps"
            );
            outcome.visibility = self.check_visibility(geometry, true);
        }
        outcome
    }

    /// Dispatch `on_visible` to every step currently on screen.
    ///
    /// Returns `None` when nothing ran: after disposal, when the offset is
    /// unchanged and `force` is off, or before any step fixed the width.
    pub fn check_visibility<G>(&mut self, geometry: &G, force: bool) -> Option<VisibilityPass>
    where
        G: Geometry + ?Sized,
    {
        if self.disposed {
            return None;
        }
        let offset = geometry.scroll_offset();
        if !force && offset == self.last_offset {
            return None;
        }
        self.last_offset = offset;
        let item_width = self.item_width?;

        let len = self.store.len();
        let range = visible_range(len, offset, geometry.viewport_width(), item_width)?;
        let mut pass = VisibilityPass { range: Some(range), ..VisibilityPass::default() };
        for pos in range.indices(len) {
            if let Some(step) = self.store.at_mut(pos) {
                pass.dispatched.push(step.id());
                if step.on_visible() {
                    pass.newly_visible.push(step.id());
                }
            }
        }
        Some(pass)
    }

    /// Stop reacting. Late timer ticks or poll completions become no-ops.
    pub fn dispose(&mut self) {
        if !self.disposed {
            tracing::debug!(steps = self.store.len(), "workspace disposed");
        }
        self.disposed = true;
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    #[must_use]
    pub fn steps(&self) -> &StepStore {
        &self.store
    }

    pub fn step_mut(&mut self, id: StepId) -> Option<&mut Step> {
        self.store.get_mut(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    #[must_use]
    pub fn last_seen_id(&self) -> StepId {
        self.last_seen_id
    }

    #[must_use]
    pub fn last_offset(&self) -> u32 {
        self.last_offset
    }

    #[must_use]
    pub fn item_width(&self) -> Option<u32> {
        self.item_width
    }

    #[must_use]
    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}
