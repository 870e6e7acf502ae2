// Backend round trips through `flush_requests`, with a scripted client.

use async_trait::async_trait;
use lictor::app::{App, AppEvent, Request, flush_requests, handle_app_event, request_new_steps};
use lictor::error::PollError;
use lictor::poll::{HttpPollClient, LastSteps, PollClient, StepDetail};
use lictor::workspace::{StepContent, StepId};
use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Default)]
struct ScriptedClient {
    steps: Vec<(StepId, String)>,
    calls: Mutex<Vec<String>>,
}

#[async_trait]
impl PollClient for ScriptedClient {
    async fn request_last(
        &self,
        session_id: &str,
        last_seen_id: StepId,
    ) -> Result<LastSteps, PollError> {
        self.calls.lock().unwrap().push(format!("last/{session_id}/{last_seen_id}"));
        let steps = self.steps.iter().filter(|(id, _)| *id > last_seen_id).cloned().collect();
        Ok(LastSteps { steps })
    }

    async fn request_step(&self, session_id: &str, id: StepId) -> Result<StepDetail, PollError> {
        self.calls.lock().unwrap().push(format!("step/{session_id}/{id}"));
        if id == 2 {
            return Err(PollError::Status { url: format!("step/{id}"), status: 500 });
        }
        Ok(StepDetail::default())
    }
}

async fn next_event(app: &mut App) -> AppEvent {
    tokio::time::timeout(Duration::from_secs(5), app.event_rx.recv())
        .await
        .expect("event within timeout")
        .expect("channel open")
}

#[tokio::test]
async fn poll_then_lazy_body_loads() {
    let scripted = Arc::new(ScriptedClient {
        steps: vec![(1, "GET /".to_owned()), (2, "GET /films/".to_owned())],
        ..ScriptedClient::default()
    });
    let client: Arc<dyn PollClient> = scripted.clone();
    let mut app = App::test_default();
    app.viewport_width = 60;

    request_new_steps(&mut app);
    flush_requests(&mut app, &client);
    assert!(app.outbox.is_empty());
    let event = next_event(&mut app).await;
    handle_app_event(&mut app, event);
    assert_eq!(app.workspace.len(), 2);
    assert_eq!(app.outbox, vec![Request::Step(1), Request::Step(2)]);

    flush_requests(&mut app, &client);
    for _ in 0..2 {
        let event = next_event(&mut app).await;
        handle_app_event(&mut app, event);
    }
    let steps = app.workspace.steps();
    assert_eq!(steps.get(1).map(|s| s.content().clone()), Some(StepContent::Loaded(Vec::new())));
    assert!(matches!(steps.get(2).map(|s| s.content()), Some(StepContent::Failed(_))));

    let mut calls = scripted.calls.lock().unwrap().clone();
    calls.sort();
    assert_eq!(calls, vec!["last/test-session/0", "step/test-session/1", "step/test-session/2"]);
}

#[tokio::test]
async fn flush_after_dispose_spawns_nothing() {
    let scripted = Arc::new(ScriptedClient::default());
    let client: Arc<dyn PollClient> = scripted.clone();
    let mut app = App::test_default();
    app.outbox.push(Request::Last { last_seen_id: 0 });
    app.workspace.dispose();

    flush_requests(&mut app, &client);
    assert!(app.outbox.is_empty());
    tokio::task::yield_now().await;
    assert!(scripted.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let base = "http://127.0.0.1:1/lictor/".parse().unwrap();
    let client = HttpPollClient::new(base, Duration::from_secs(2)).unwrap();
    let err = client.request_last("demo", 0).await.unwrap_err();
    assert!(err.is_transport(), "unexpected error: {err}");
    assert_eq!(err.fatal(), None);
}
