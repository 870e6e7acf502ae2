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

use ratatui::style::Color;

// Accent
pub const ACCENT: Color = Color::Rgb(244, 118, 0);

// UI chrome
pub const DIM: Color = Color::DarkGray;
pub const SEPARATOR_CHAR: &str = "─";

// Panel borders by load state
pub const PANEL_LOADED: Color = Color::White;
pub const PANEL_LOADING: Color = DIM;
pub const PANEL_FAILED: Color = Color::Red;

// Status colors
pub const STATUS_LIVE: Color = Color::Green;
pub const STATUS_CONNECTING: Color = Color::Yellow;
pub const STATUS_ERROR: Color = Color::Red;

pub const SPINNER_FRAMES: &[char] = &[
    '\u{280B}', '\u{2819}', '\u{2839}', '\u{2838}', '\u{283C}', '\u{2834}', '\u{2826}', '\u{2827}',
    '\u{2807}', '\u{280F}',
];

/// Color for a recorded frame, keyed on its framework role.
pub fn frame_kind_color(kind: &str) -> Color {
    let lower = kind.to_lowercase();
    if lower.contains("model") || lower.contains("manager") {
        Color::Cyan
    } else if lower.contains("view") {
        Color::Green
    } else if lower.contains("url") {
        Color::Magenta
    } else if lower.contains("form") {
        Color::Yellow
    } else {
        Color::Gray
    }
}

pub fn spinner(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}
