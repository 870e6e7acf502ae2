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

use super::PollClient;
use super::wire::{LastSteps, StepDetail};
use crate::error::PollError;
use crate::workspace::StepId;
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// `PollClient` over the trace backend's JSON endpoints.
#[derive(Debug, Clone)]
pub struct HttpPollClient {
    http: reqwest::Client,
    base: Url,
}

impl HttpPollClient {
    pub fn new(base: Url, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("lictor/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, base })
    }

    #[must_use]
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// `{base}/{segments...}/` with each segment percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, PollError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| PollError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments)
            .push("");
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        session_id: &str,
    ) -> Result<T, PollError> {
        let url_str = url.to_string();
        tracing::trace!(url = %url_str, "GET");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| PollError::Transport { url: url_str.clone(), source })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(PollError::SessionNotFound(session_id.to_owned()));
        }
        if !status.is_success() {
            return Err(PollError::Status { url: url_str, status: status.as_u16() });
        }

        let body = response
            .text()
            .await
            .map_err(|source| PollError::Transport { url: url_str.clone(), source })?;
        serde_json::from_str(&body).map_err(|source| PollError::Decode { url: url_str, source })
    }
}

#[async_trait]
impl PollClient for HttpPollClient {
    async fn request_last(
        &self,
        session_id: &str,
        last_seen_id: StepId,
    ) -> Result<LastSteps, PollError> {
        let last = last_seen_id.to_string();
        let url = self.endpoint(&["last", session_id, &last])?;
        self.get_json(url, session_id).await
    }

    async fn request_step(&self, session_id: &str, id: StepId) -> Result<StepDetail, PollError> {
        let id = id.to_string();
        let url = self.endpoint(&["step", session_id, &id])?;
        self.get_json(url, session_id).await
    }
}
