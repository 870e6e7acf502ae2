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

use super::step::{Step, StepId};
use std::collections::HashMap;

/// Append-only step list in arrival order, with an id index.
///
/// Positions are stable because nothing is ever removed, so the index can
/// store plain `usize` positions.
#[derive(Debug, Default)]
pub struct StepStore {
    steps: Vec<Step>,
    index: HashMap<StepId, usize>,
}

impl StepStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `step` and return the stored value. When a step with the same
    /// id is already present nothing changes and the existing step is
    /// returned.
    pub fn insert(&mut self, step: Step) -> &Step {
        let pos = match self.index.get(&step.id()) {
            Some(&pos) => pos,
            None => {
                let pos = self.steps.len();
                self.index.insert(step.id(), pos);
                self.steps.push(step);
                pos
            }
        };
        &self.steps[pos]
    }

    #[must_use]
    pub fn contains(&self, id: StepId) -> bool {
        self.index.contains_key(&id)
    }

    #[must_use]
    pub fn position(&self, id: StepId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    #[must_use]
    pub fn get(&self, id: StepId) -> Option<&Step> {
        self.position(id).and_then(|pos| self.steps.get(pos))
    }

    pub fn get_mut(&mut self, id: StepId) -> Option<&mut Step> {
        let pos = self.position(id)?;
        self.steps.get_mut(pos)
    }

    #[must_use]
    pub fn at(&self, pos: usize) -> Option<&Step> {
        self.steps.get(pos)
    }

    pub fn at_mut(&mut self, pos: usize) -> Option<&mut Step> {
        self.steps.get_mut(pos)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Steps in arrival order.
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }
}
