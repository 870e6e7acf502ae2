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

use crate::Cli;
use crate::error::AppError;
use crate::workspace::PanelMeasure;
use anyhow::Context as _;
use reqwest::Url;
use std::time::Duration;

pub const URL_ENV: &str = "LICTOR_URL";
pub const DEFAULT_URL: &str = "http://127.0.0.1:8000/lictor";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;
/// Visibility re-check period.
pub const DEFAULT_CHECK_INTERVAL_MS: u64 = 500;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const MIN_STEP_WIDTH: u32 = 8;

/// Validated runtime settings derived from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub session_id: String,
    pub base_url: Url,
    pub poll_interval: Duration,
    pub check_interval: Duration,
    pub request_timeout: Duration,
    pub panel: PanelMeasure,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        let env_url = std::env::var(URL_ENV).ok();
        Self::resolve(cli, env_url.as_deref())
    }

    /// Same as `from_cli`, with the environment fallback passed in.
    pub fn resolve(cli: &Cli, env_url: Option<&str>) -> anyhow::Result<Self> {
        let session_id = cli.session.trim();
        if session_id.is_empty() {
            return Err(invalid("session id must not be empty"));
        }

        let raw_url = cli.url.as_deref().or(env_url).unwrap_or(DEFAULT_URL);
        let base_url = parse_base_url(raw_url)?;

        let poll_interval = non_zero_millis(cli.poll_interval_ms, "--poll-interval-ms")?;
        let check_interval = non_zero_millis(cli.check_interval_ms, "--check-interval-ms")?;
        if cli.request_timeout_secs == 0 {
            return Err(invalid("--request-timeout-secs must be greater than zero"));
        }

        let panel = match cli.step_width {
            Some(width) if width < MIN_STEP_WIDTH => {
                return Err(invalid(format!("--step-width must be at least {MIN_STEP_WIDTH}")));
            }
            Some(width) => PanelMeasure::Fixed(width),
            None => PanelMeasure::default(),
        };

        Ok(Self {
            session_id: session_id.to_owned(),
            base_url,
            poll_interval,
            check_interval,
            request_timeout: Duration::from_secs(cli.request_timeout_secs),
            panel,
        })
    }
}

fn parse_base_url(raw: &str) -> anyhow::Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|_| anyhow::Error::new(AppError::InvalidConfig))
        .with_context(|| format!("invalid backend url `{raw}`"))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(invalid(format!("backend url `{raw}` must be http(s)")));
    }
    Ok(url)
}

fn non_zero_millis(value: u64, flag: &str) -> anyhow::Result<Duration> {
    if value == 0 {
        return Err(invalid(format!("{flag} must be greater than zero")));
    }
    Ok(Duration::from_millis(value))
}

fn invalid(message: impl Into<String>) -> anyhow::Error {
    anyhow::Error::new(AppError::InvalidConfig).context(message.into())
}
