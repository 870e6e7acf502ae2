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

use super::{App, AppEvent, Request};
use crate::poll::PollClient;
use std::sync::Arc;

/// Spawn every queued backend call. Results come back as `AppEvent`s.
pub fn flush_requests(app: &mut App, client: &Arc<dyn PollClient>) {
    if app.workspace.is_disposed() {
        app.outbox.clear();
        return;
    }
    for request in std::mem::take(&mut app.outbox) {
        let client = Arc::clone(client);
        let tx = app.event_tx.clone();
        let session_id = app.session_id.clone();
        tokio::spawn(async move {
            let event = match request {
                Request::Last { last_seen_id } => {
                    match client.request_last(&session_id, last_seen_id).await {
                        Ok(last) => AppEvent::StepsArrived(last),
                        Err(err) => AppEvent::PollFailed(err),
                    }
                }
                Request::Step(id) => match client.request_step(&session_id, id).await {
                    Ok(detail) => AppEvent::StepLoaded { id, detail },
                    Err(err) => AppEvent::StepLoadFailed { id, message: err.to_string() },
                },
            };
            // The receiver is gone once the app has shut down.
            let _ = tx.send(event);
        });
    }
}
