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

use ratatui::layout::{Constraint, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub header_sep: Rect,
    pub breadcrumb: Rect,
    pub breadcrumb_sep: Rect,
    pub strip: Rect,
    pub footer: Rect,
}

pub fn compute(area: Rect) -> AppLayout {
    let zero = Rect::new(area.x, area.y, area.width, 0);

    if area.height < 6 {
        // Compact: strip and footer only
        let [strip, footer] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);
        AppLayout {
            header: zero,
            header_sep: zero,
            breadcrumb: zero,
            breadcrumb_sep: zero,
            strip,
            footer,
        }
    } else {
        let [header, header_sep, breadcrumb, breadcrumb_sep, strip, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(2),
            Constraint::Length(1),
        ])
        .areas(area);
        AppLayout { header, header_sep, breadcrumb, breadcrumb_sep, strip, footer }
    }
}
