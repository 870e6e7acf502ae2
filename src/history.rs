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

//! Breadcrumb trail of appended steps.

use crate::workspace::{Notifier, StepId};
use unicode_width::UnicodeWidthStr;

const SEPARATOR: &str = " › ";
const ELLIPSIS: &str = "…";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: StepId,
    pub title: String,
}

impl HistoryEntry {
    fn label(&self) -> String {
        format!("#{} {}", self.id, self.title)
    }
}

#[derive(Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Newest entries that fit in `max_width` columns, oldest first, with a
    /// leading ellipsis when older entries were dropped.
    #[must_use]
    pub fn breadcrumb(&self, max_width: usize) -> String {
        let sep_width = SEPARATOR.width();
        let mut parts: Vec<String> = Vec::new();
        let mut used = 0usize;
        let mut truncated = false;

        for entry in self.entries.iter().rev() {
            let label = entry.label();
            let extra = if parts.is_empty() { 0 } else { sep_width };
            let reserve = if parts.len() + 1 < self.entries.len() {
                ELLIPSIS.width() + sep_width
            } else {
                0
            };
            if used + extra + label.width() + reserve > max_width {
                truncated = true;
                break;
            }
            used += extra + label.width();
            parts.push(label);
        }

        parts.reverse();
        let trail = parts.join(SEPARATOR);
        if truncated && !trail.is_empty() {
            format!("{ELLIPSIS}{SEPARATOR}{trail}")
        } else if truncated {
            ELLIPSIS.to_owned()
        } else {
            trail
        }
    }
}

impl Notifier for History {
    fn append(&mut self, id: StepId, title: &str) {
        tracing::trace!(step_id = id, "history append");
        self.entries.push(HistoryEntry { id, title: title.to_owned() });
    }
}
