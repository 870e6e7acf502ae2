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

use crate::app::App;
use crate::poll::{TraceFrame, frame_depths};
use crate::ui::theme;
use crate::workspace::{Step, StepContent, panel_x, visible_range};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

/// Draw the step panels that intersect the strip, newest at the left.
pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    app.viewport_width = u32::from(area.width);
    app.clamp_scroll();

    let steps = app.workspace.steps();
    let Some(item_width) = app.workspace.item_width() else {
        let waiting = Line::from(Span::styled(
            format!("{} Waiting for steps...", theme::spinner(app.spinner_frame)),
            Style::default().fg(theme::DIM),
        ));
        frame.render_widget(Paragraph::new(waiting), area);
        return;
    };

    let len = steps.len();
    let Some(range) = visible_range(len, app.scroll_offset, app.viewport_width, item_width) else {
        return;
    };
    for pos in range.indices(len) {
        let Some(step) = steps.at(pos) else {
            continue;
        };
        let left = i64::try_from(panel_x(len, pos, item_width)).unwrap_or(i64::MAX)
            - i64::from(app.scroll_offset);
        if let Some(rect) = clip_panel(area, left, item_width) {
            render_panel(frame, rect, step, app.spinner_frame);
        }
    }
}

/// Intersect a panel starting `left` columns into the strip with the strip.
fn clip_panel(area: Rect, left: i64, width: u32) -> Option<Rect> {
    let start = left.max(0);
    let end = left.saturating_add(i64::from(width)).min(i64::from(area.width));
    if end <= start {
        return None;
    }
    let x = u16::try_from(start).ok()?;
    let w = u16::try_from(end - start).ok()?;
    Some(Rect { x: area.x + x, y: area.y, width: w, height: area.height })
}

fn render_panel(frame: &mut Frame, area: Rect, step: &Step, spinner_frame: usize) {
    let border = match step.content() {
        StepContent::Loaded(_) => theme::PANEL_LOADED,
        StepContent::Failed(_) => theme::PANEL_FAILED,
        StepContent::Pending | StepContent::Loading => theme::PANEL_LOADING,
    };
    let title = Line::from(vec![
        Span::styled(format!("#{} ", step.id()), Style::default().fg(theme::ACCENT)),
        Span::styled(step.title().to_owned(), Style::default().add_modifier(Modifier::BOLD)),
    ]);
    let block = Block::bordered().border_style(Style::default().fg(border)).title(title);

    let body = match step.content() {
        StepContent::Pending | StepContent::Loading => Paragraph::new(Line::from(Span::styled(
            format!("{} loading", theme::spinner(spinner_frame)),
            Style::default().fg(theme::DIM),
        ))),
        StepContent::Loaded(frames) if frames.is_empty() => Paragraph::new(Line::from(
            Span::styled("no frames recorded", Style::default().fg(theme::DIM)),
        )),
        StepContent::Loaded(frames) => Paragraph::new(frame_lines(frames)),
        StepContent::Failed(message) => Paragraph::new(Line::from(Span::styled(
            format!("failed: {message}"),
            Style::default().fg(theme::STATUS_ERROR),
        )))
        .wrap(Wrap { trim: true }),
    };
    frame.render_widget(body.block(block), area);
}

fn frame_lines(frames: &[TraceFrame]) -> Vec<Line<'static>> {
    frames
        .iter()
        .zip(frame_depths(frames))
        .map(|(frame, depth)| {
            let name = if frame.name.is_empty() { "?" } else { frame.name.as_str() };
            Line::from(vec![
                Span::raw(" ".repeat(depth)),
                Span::styled(
                    name.to_owned(),
                    Style::default().fg(theme::frame_kind_color(&frame.kind)),
                ),
                Span::styled(
                    format!(" {}:{}", short_path(&frame.file), frame.line),
                    Style::default().fg(theme::DIM),
                ),
            ])
        })
        .collect()
}

/// Last two path components, enough to tell frames apart in a narrow panel.
fn short_path(path: &str) -> &str {
    let mut cut = path.len();
    for _ in 0..2 {
        match path[..cut].rfind('/') {
            Some(idx) => cut = idx,
            None => return path,
        }
    }
    &path[cut + 1..]
}
