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

use super::step::Step;
use super::tracker::Measure;
use unicode_width::UnicodeWidthStr;

/// Columns taken by the panel border and the `#id ` prefix padding.
const PANEL_CHROME: u32 = 4;

pub const MIN_FIT_WIDTH: u32 = 20;
pub const MAX_FIT_WIDTH: u32 = 48;

/// Terminal column width of a step panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMeasure {
    /// Every panel uses exactly this many columns.
    Fixed(u32),
    /// Size the panel to the step's heading, within bounds.
    FitTitle { min: u32, max: u32 },
}

impl Default for PanelMeasure {
    fn default() -> Self {
        Self::FitTitle { min: MIN_FIT_WIDTH, max: MAX_FIT_WIDTH }
    }
}

impl Measure for PanelMeasure {
    fn measure(&self, step: &Step) -> u32 {
        match *self {
            Self::Fixed(width) => width,
            Self::FitTitle { min, max } => {
                let heading = format!("#{} {}", step.id(), step.title());
                let text = u32::try_from(heading.width()).unwrap_or(u32::MAX);
                text.saturating_add(PANEL_CHROME).clamp(min, max.max(min))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fixed_ignores_title() {
        assert_eq!(PanelMeasure::Fixed(30).measure(&Step::new(1, "x".repeat(90))), 30);
    }

    #[test]
    fn fit_title_clamps_to_bounds() {
        let measure = PanelMeasure::FitTitle { min: 20, max: 48 };
        assert_eq!(measure.measure(&Step::new(1, "GET /")), 20);
        assert_eq!(measure.measure(&Step::new(1, "x".repeat(200))), 48);
        // "#12 " + 26 chars + chrome
        assert_eq!(measure.measure(&Step::new(12, "POST /films/42/comments/ok")), 34);
    }

    #[test]
    fn fit_title_counts_display_columns() {
        let measure = PanelMeasure::FitTitle { min: 1, max: 100 };
        // Each CJK glyph is two columns wide.
        assert_eq!(measure.measure(&Step::new(1, "映画")), 3 + 4 + 4);
    }
}
