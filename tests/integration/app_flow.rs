// App event handling end to end, without a terminal.

use lictor::app::{App, AppEvent, AppStatus, Request, handle_app_event, request_new_steps};
use lictor::error::{AppError, PollError};
use lictor::poll::{LastSteps, StepDetail, TraceFrame};
use lictor::workspace::StepContent;
use pretty_assertions::assert_eq;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::helpers::batch;

fn live_app(viewport_width: u32) -> App {
    let mut app = App::test_default();
    app.viewport_width = viewport_width;
    app
}

fn arrived(items: &[(u64, &str)]) -> AppEvent {
    AppEvent::StepsArrived(LastSteps { steps: batch(items) })
}

#[test]
fn poll_tick_queues_a_single_request() {
    let mut app = live_app(60);
    handle_app_event(&mut app, AppEvent::PollTick);
    handle_app_event(&mut app, AppEvent::PollTick);
    assert_eq!(app.outbox, vec![Request::Last { last_seen_id: 0 }]);
    assert!(app.poll_in_flight);
}

#[test]
fn arrived_steps_feed_history_and_request_visible_bodies() {
    let mut app = live_app(60);
    request_new_steps(&mut app);
    handle_app_event(&mut app, arrived(&[(7, "A"), (9, "B")]));

    assert_eq!(app.status, AppStatus::Live);
    assert!(!app.poll_in_flight);
    assert_eq!(app.workspace.last_seen_id(), 9);
    let history: Vec<_> = app.workspace.notifier().entries().iter().map(|e| e.id).collect();
    assert_eq!(history, vec![7, 9]);
    assert_eq!(
        app.outbox,
        vec![Request::Last { last_seen_id: 0 }, Request::Step(7), Request::Step(9)]
    );

    app.outbox.clear();
    request_new_steps(&mut app);
    assert_eq!(app.outbox, vec![Request::Last { last_seen_id: 9 }]);
}

#[test]
fn scrolling_then_check_tick_loads_newly_visible_steps() {
    let mut app = live_app(40);
    let items: Vec<(u64, String)> = (1..=6).map(|id| (id, format!("GET /{id}"))).collect();
    handle_app_event(&mut app, AppEvent::StepsArrived(LastSteps { steps: items }));
    // 20-column panels, 40 columns: newest steps 6 and 5, plus the partial 4
    assert_eq!(app.outbox, vec![Request::Step(4), Request::Step(5), Request::Step(6)]);
    app.outbox.clear();

    handle_app_event(&mut app, AppEvent::CheckTick);
    assert!(app.outbox.is_empty());

    app.scroll_to(80);
    handle_app_event(&mut app, AppEvent::CheckTick);
    assert_eq!(app.outbox, vec![Request::Step(1), Request::Step(2)]);
}

#[test]
fn loaded_and_failed_bodies_update_steps() {
    let mut app = live_app(60);
    handle_app_event(&mut app, arrived(&[(1, "GET /"), (2, "GET /films/")]));

    let frame = TraceFrame {
        id: "f1".to_owned(),
        kind: "call".to_owned(),
        file: "films/views.py".to_owned(),
        line: 12,
        name: "index".to_owned(),
        pid: None,
    };
    handle_app_event(
        &mut app,
        AppEvent::StepLoaded { id: 1, detail: StepDetail { frames: vec![frame.clone()] } },
    );
    handle_app_event(&mut app, AppEvent::StepLoadFailed { id: 2, message: "boom".to_owned() });
    // unknown ids are dropped
    handle_app_event(&mut app, AppEvent::StepLoadFailed { id: 99, message: "late".to_owned() });

    let steps = app.workspace.steps();
    assert_eq!(steps.get(1).map(|s| s.content().clone()), Some(StepContent::Loaded(vec![frame])));
    assert_eq!(
        steps.get(2).map(|s| s.content().clone()),
        Some(StepContent::Failed("boom".to_owned()))
    );
}

#[test]
fn missing_session_ends_with_its_exit_code() {
    let mut app = live_app(60);
    request_new_steps(&mut app);
    handle_app_event(&mut app, AppEvent::PollFailed(PollError::SessionNotFound("nope".into())));
    assert!(app.should_quit);
    assert_eq!(app.exit_error, Some(AppError::SessionNotFound));
    assert_eq!(app.exit_error.as_ref().map(AppError::exit_code), Some(21));
}

#[test]
fn http_error_after_connect_keeps_running() {
    let mut app = live_app(60);
    handle_app_event(&mut app, arrived(&[(1, "GET /")]));
    handle_app_event(
        &mut app,
        AppEvent::PollFailed(PollError::Status { url: "http://x/".into(), status: 502 }),
    );
    assert!(!app.should_quit);
    assert!(matches!(app.status, AppStatus::Error(ref msg) if msg.contains("502")));
    request_new_steps(&mut app);
    assert_eq!(app.outbox.last(), Some(&Request::Last { last_seen_id: 1 }));
}

#[test]
fn disposed_app_ignores_late_events() {
    let mut app = live_app(60);
    app.dispose();
    handle_app_event(&mut app, arrived(&[(1, "GET /")]));
    handle_app_event(&mut app, AppEvent::PollTick);
    assert!(app.workspace.is_empty());
    assert!(app.outbox.is_empty());
}

#[test]
fn widening_the_terminal_loads_revealed_steps() {
    let mut app = live_app(20);
    let items: Vec<(u64, String)> = (1..=6).map(|id| (id, format!("GET /{id}"))).collect();
    handle_app_event(&mut app, AppEvent::StepsArrived(LastSteps { steps: items }));
    assert_eq!(app.outbox, vec![Request::Step(5), Request::Step(6)]);
    app.outbox.clear();

    let mut terminal = Terminal::new(TestBackend::new(120, 12)).unwrap();
    terminal.draw(|f| lictor::ui::render(f, &mut app)).unwrap();
    assert_eq!(app.viewport_width, 120);

    handle_app_event(&mut app, AppEvent::CheckTick);
    assert_eq!(
        app.outbox,
        vec![Request::Step(1), Request::Step(2), Request::Step(3), Request::Step(4)]
    );
    let pending: Vec<_> = app
        .workspace
        .steps()
        .iter()
        .filter(|s| *s.content() == StepContent::Pending)
        .map(|s| s.id())
        .collect();
    assert!(pending.is_empty(), "drawn but never requested: {pending:?}");

    app.outbox.clear();
    for _ in 0..3 {
        handle_app_event(&mut app, AppEvent::CheckTick);
    }
    assert!(app.outbox.is_empty());
}
