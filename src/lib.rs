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

pub mod app;
pub mod config;
pub mod error;
pub mod history;
pub mod poll;
pub mod ui;
pub mod workspace;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "lictor", about = "Browse recorded trace steps in the terminal", version)]
pub struct Cli {
    /// Trace session whose steps are shown
    pub session: String,

    /// Base URL of the trace backend (falls back to LICTOR_URL)
    #[arg(long)]
    pub url: Option<String>,

    /// How often to ask the backend for new steps, in milliseconds
    #[arg(long, default_value_t = config::DEFAULT_POLL_INTERVAL_MS)]
    pub poll_interval_ms: u64,

    /// How often to re-check which steps are on screen, in milliseconds
    #[arg(long, default_value_t = config::DEFAULT_CHECK_INTERVAL_MS)]
    pub check_interval_ms: u64,

    /// Fixed width of every step panel in columns (default: fit the first title)
    #[arg(long)]
    pub step_width: Option<u32>,

    /// Per-request timeout for backend calls, in seconds
    #[arg(long, default_value_t = config::DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub request_timeout_secs: u64,

    /// Write tracing diagnostics to this file (tracing is disabled otherwise)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<std::path::PathBuf>,

    /// Tracing filter directives (overrides RUST_LOG), e.g. `lictor=debug`
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,

    /// Append to the log file instead of truncating it
    #[arg(long)]
    pub log_append: bool,
}
