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

//! Scroll offset to step index mapping.
//!
//! Steps are laid out newest-first: visual slot 0 holds the last element of
//! the arrival-ordered list, so a larger scroll offset walks toward older
//! steps (smaller indices).

/// Inclusive index range produced from the scroll geometry.
///
/// The bounds are left unclamped: `begin` can be negative and `end` can run
/// past the last index. [`VisibleRange::indices`] skips anything outside
/// `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRange {
    pub begin: i64,
    pub end: i64,
}

impl VisibleRange {
    /// Valid positions inside the range, ascending.
    pub fn indices(self, len: usize) -> impl Iterator<Item = usize> {
        (self.begin..=self.end).filter_map(move |i| usize::try_from(i).ok().filter(|&i| i < len))
    }
}

/// Compute the range of `len` uniform items of `item_width` that intersect the
/// viewport `[scroll_offset, scroll_offset + viewport_width]`.
///
/// Returns `None` while no item width is known.
#[must_use]
pub fn visible_range(
    len: usize,
    scroll_offset: u32,
    viewport_width: u32,
    item_width: u32,
) -> Option<VisibleRange> {
    if item_width == 0 {
        return None;
    }
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    let width = i64::from(item_width);
    let offset = i64::from(scroll_offset);
    let end = len - offset / width - 1;
    let begin = len - (offset + i64::from(viewport_width)) / width - 1;
    Some(VisibleRange { begin, end })
}

/// Left edge, in surface columns, of the panel at `index`.
#[must_use]
pub fn panel_x(len: usize, index: usize, item_width: u32) -> u64 {
    let slot = len.saturating_sub(index + 1) as u64;
    slot * u64::from(item_width)
}

/// Largest scroll offset that still keeps the viewport filled.
#[must_use]
pub fn max_scroll_offset(len: usize, viewport_width: u32, item_width: u32) -> u32 {
    let content = (len as u64).saturating_mul(u64::from(item_width));
    let max = content.saturating_sub(u64::from(viewport_width));
    u32::try_from(max).unwrap_or(u32::MAX)
}
