// Merging poll results into the workspace.

use lictor::workspace::Step;
use pretty_assertions::assert_eq;

use crate::helpers::{batch, view, workspace};

#[test]
fn merge_appends_in_batch_order_and_rechecks_once() {
    let (mut ws, notifier) = workspace();
    let outcome = ws.merge_new_steps(batch(&[(7, "A"), (9, "B")]), &view(0, 250));

    assert_eq!(outcome.appended, vec![7, 9]);
    assert_eq!(*notifier.appended.borrow(), vec![(7, "A".to_owned()), (9, "B".to_owned())]);
    assert_eq!(ws.last_seen_id(), 9);

    let pass = outcome.visibility.unwrap();
    assert_eq!(pass.dispatched, vec![7, 9]);
    assert_eq!(ws.steps().get(7).map(Step::visible_hits), Some(1));
    assert_eq!(ws.steps().get(9).map(Step::visible_hits), Some(1));
}

#[test]
fn merge_is_idempotent_for_known_ids() {
    let (mut ws, notifier) = workspace();
    let items = batch(&[(3, "GET /"), (4, "GET /films/")]);
    ws.merge_new_steps(items.clone(), &view(0, 250));
    let outcome = ws.merge_new_steps(items, &view(0, 250));

    assert!(outcome.appended.is_empty());
    assert_eq!(outcome.visibility, None);
    assert_eq!(ws.len(), 2);
    assert_eq!(notifier.appended.borrow().len(), 2);
}

#[test]
fn last_seen_id_never_decreases() {
    let (mut ws, _) = workspace();
    ws.merge_new_steps(batch(&[(10, "late")]), &view(0, 250));
    ws.merge_new_steps(batch(&[(2, "stale"), (5, "also stale")]), &view(0, 250));
    assert_eq!(ws.last_seen_id(), 10);

    ws.merge_new_steps(batch(&[(12, "fresh")]), &view(0, 250));
    assert_eq!(ws.last_seen_id(), 12);
    // out-of-order ids are still stored, in arrival order
    let ids: Vec<_> = ws.steps().iter().map(Step::id).collect();
    assert_eq!(ids, vec![10, 2, 5, 12]);
}

#[test]
fn empty_batch_changes_nothing() {
    let (mut ws, notifier) = workspace();
    let outcome = ws.merge_new_steps(Vec::new(), &view(0, 250));
    assert!(outcome.appended.is_empty());
    assert_eq!(outcome.visibility, None);
    assert_eq!(ws.last_seen_id(), 0);
    assert!(notifier.appended.borrow().is_empty());
}

#[test]
fn merged_steps_share_the_first_measured_width() {
    let (mut ws, _) = workspace();
    ws.merge_new_steps(batch(&[(1, "short"), (2, "a much longer title")]), &view(0, 250));
    assert_eq!(ws.item_width(), Some(100));
    assert!(ws.steps().iter().all(|s| s.width() == 100));
}

#[test]
fn merge_after_dispose_is_ignored() {
    let (mut ws, notifier) = workspace();
    ws.dispose();
    let outcome = ws.merge_new_steps(batch(&[(1, "late")]), &view(0, 250));
    assert!(outcome.appended.is_empty());
    assert!(ws.is_empty());
    assert!(notifier.appended.borrow().is_empty());
}
