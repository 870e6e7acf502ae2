// Visibility dispatch through the public workspace API.

use lictor::workspace::{Step, StepContent};
use pretty_assertions::assert_eq;

use crate::helpers::{view, workspace, workspace_with};

#[test]
fn five_steps_scrolled_to_120_dispatch_indices_one_to_three() {
    let mut ws = workspace_with(5);
    let pass = ws.check_visibility(&view(120, 250), false).unwrap();
    // ids equal arrival positions here
    assert_eq!(pass.dispatched, vec![1, 2, 3]);
    for id in [1, 2, 3] {
        assert_eq!(ws.steps().get(id).map(Step::visible_hits), Some(1));
    }
    assert_eq!(ws.steps().get(0).map(Step::visible_hits), Some(0));
    assert_eq!(ws.steps().get(4).map(Step::visible_hits), Some(0));
}

#[test]
fn empty_workspace_check_is_noop_for_any_offset() {
    let (mut ws, _) = workspace();
    for offset in [0, 1, 99, 5_000] {
        assert_eq!(ws.check_visibility(&view(offset, 250), true), None);
        assert_eq!(ws.check_visibility(&view(offset + 1, 250), false), None);
    }
}

#[test]
fn repeated_unforced_check_dispatches_once() {
    let mut ws = workspace_with(5);
    assert!(ws.check_visibility(&view(120, 250), false).is_some());
    assert_eq!(ws.check_visibility(&view(120, 250), false), None);
    assert_eq!(ws.steps().get(2).map(Step::visible_hits), Some(1));
}

#[test]
fn forced_check_always_dispatches() {
    let mut ws = workspace_with(5);
    for _ in 0..3 {
        let pass = ws.check_visibility(&view(120, 250), true).unwrap();
        assert_eq!(pass.dispatched, vec![1, 2, 3]);
    }
    assert_eq!(ws.steps().get(2).map(Step::visible_hits), Some(3));
}

#[test]
fn initial_offset_counts_as_already_recorded() {
    // constructed at offset 0, so an unforced check at 0 does nothing
    let mut ws = workspace_with(3);
    assert_eq!(ws.check_visibility(&view(0, 250), false), None);
    assert!(ws.check_visibility(&view(10, 250), false).is_some());
}

#[test]
fn only_first_visibility_requests_a_load() {
    let mut ws = workspace_with(5);
    let first = ws.check_visibility(&view(120, 250), true).unwrap();
    assert_eq!(first.newly_visible, vec![1, 2, 3]);
    let second = ws.check_visibility(&view(0, 250), false).unwrap();
    assert_eq!(second.dispatched, vec![2, 3, 4]);
    assert_eq!(second.newly_visible, vec![4]);
    assert_eq!(ws.steps().get(4).map(|s| s.content().clone()), Some(StepContent::Loading));
}

#[test]
fn fast_scroll_past_the_end_is_silently_skipped() {
    let mut ws = workspace_with(2);
    let pass = ws.check_visibility(&view(10_000, 250), false).unwrap();
    assert!(pass.dispatched.is_empty());
    let range = pass.range.unwrap();
    assert!(range.end < 0);
}
