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

mod breadcrumb;
mod header;
mod layout;
mod strip;
pub mod theme;

use crate::app::{App, AppStatus};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, app: &mut App) {
    let areas = layout::compute(frame.area());

    if areas.header.height > 0 {
        header::render(frame, areas.header, app);
        render_separator(frame, areas.header_sep);
        breadcrumb::render(frame, areas.breadcrumb, app);
        render_separator(frame, areas.breadcrumb_sep);
    }

    strip::render(frame, areas.strip, app);
    render_footer(frame, areas.footer, app);
}

const FOOTER_PAD: u16 = 2;
const FOOTER_HINTS: &str = "←/→ scroll  Home/End  r refresh  q quit";

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let padded = Rect {
        x: area.x + FOOTER_PAD,
        y: area.y,
        width: area.width.saturating_sub(FOOTER_PAD * 2),
        height: area.height,
    };

    let (status_text, status_color) = status_label(app);
    let summary = format!(
        "  {} steps · last #{} · col {}/{}",
        app.workspace.len(),
        app.workspace.last_seen_id(),
        app.scroll_offset,
        app.max_scroll()
    );
    let left = Line::from(vec![
        Span::styled(status_text, Style::default().fg(status_color)),
        Span::styled(summary, Style::default().fg(theme::DIM)),
    ]);
    let left_width = left.width();
    frame.render_widget(Paragraph::new(left), padded);

    // Hints only when they fit beside the summary
    if usize::from(padded.width) > left_width + FOOTER_HINTS.width() + 2 {
        let hints = Line::from(Span::styled(FOOTER_HINTS, Style::default().fg(theme::DIM)));
        frame.render_widget(Paragraph::new(hints).alignment(Alignment::Right), padded);
    }
}

fn status_label(app: &App) -> (String, Color) {
    match &app.status {
        AppStatus::Connecting => {
            (format!("{} connecting", theme::spinner(app.spinner_frame)), theme::STATUS_CONNECTING)
        }
        AppStatus::Live => ("● live".to_owned(), theme::STATUS_LIVE),
        AppStatus::Error(message) => (format!("✗ {message}"), theme::STATUS_ERROR),
    }
}

fn render_separator(frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let sep_str = theme::SEPARATOR_CHAR.repeat(usize::from(area.width));
    let line = Line::from(Span::styled(sep_str, Style::default().fg(theme::DIM)));
    frame.render_widget(Paragraph::new(line), area);
}
