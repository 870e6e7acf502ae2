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

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("Trace backend unreachable")]
    BackendUnreachable,
    #[error("Session not found")]
    SessionNotFound,
    #[error("Invalid configuration")]
    InvalidConfig,
}

impl AppError {
    pub const BACKEND_UNREACHABLE_EXIT_CODE: i32 = 20;
    pub const SESSION_NOT_FOUND_EXIT_CODE: i32 = 21;
    pub const INVALID_CONFIG_EXIT_CODE: i32 = 22;

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::BackendUnreachable => Self::BACKEND_UNREACHABLE_EXIT_CODE,
            Self::SessionNotFound => Self::SESSION_NOT_FOUND_EXIT_CODE,
            Self::InvalidConfig => Self::INVALID_CONFIG_EXIT_CODE,
        }
    }

    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::BackendUnreachable => {
                "Could not reach the trace backend. Check `--url` or LICTOR_URL."
            }
            Self::SessionNotFound => "The requested trace session was not found.",
            Self::InvalidConfig => "Invalid command-line configuration. Run `lictor --help`.",
        }
    }
}

/// Failures of the trace backend collaborator.
#[derive(Debug, thiserror::Error)]
pub enum PollError {
    #[error("invalid backend url `{0}`")]
    InvalidUrl(String),
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("session `{0}` not found")]
    SessionNotFound(String),
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("malformed response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl PollError {
    /// Errors that should end the session rather than be retried.
    #[must_use]
    pub fn fatal(&self) -> Option<AppError> {
        match self {
            Self::SessionNotFound(_) => Some(AppError::SessionNotFound),
            Self::InvalidUrl(_) => Some(AppError::InvalidConfig),
            Self::Transport { .. } | Self::Status { .. } | Self::Decode { .. } => None,
        }
    }

    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}
