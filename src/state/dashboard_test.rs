use super::*;
use crate::test_helpers::{conflict, sample_snapshot};

fn with_conflict() -> DashboardSnapshot {
    let mut snapshot = sample_snapshot();
    snapshot.conflicts.insert("10.0.0.5".to_owned(), vec![conflict("10.0.0.5")]);
    snapshot
}

#[test]
fn begin_load_clears_error_and_sets_flags() {
    let mut state = DashboardState { error: Some("old".to_owned()), ..DashboardState::default() };
    state.begin_load(true);
    assert!(state.loading);
    assert!(state.refreshing);
    assert_eq!(state.error, None);
}

#[test]
fn plain_load_does_not_set_refreshing() {
    let mut state = DashboardState::default();
    state.begin_load(false);
    assert!(state.loading);
    assert!(!state.refreshing);
}

#[test]
fn snapshot_with_conflicts_shows_alert() {
    let mut state = DashboardState::default();
    state.apply_snapshot(with_conflict());
    assert!(state.has_conflicts);
    assert!(state.conflict_alert_visible());
    assert_eq!(state.conflict_count(), 1);
}

#[test]
fn snapshot_without_conflicts_hides_indicator() {
    let mut state = DashboardState::default();
    state.apply_snapshot(sample_snapshot());
    assert!(!state.has_conflicts);
    assert!(!state.conflict_alert_visible());
    assert_eq!(state.conflict_count(), 0);
}

#[test]
fn dismiss_keeps_flag_and_reload_reopens() {
    let mut state = DashboardState::default();
    state.apply_snapshot(with_conflict());
    state.dismiss_conflicts();
    assert!(state.has_conflicts);
    assert!(!state.conflict_alert_visible());

    state.apply_snapshot(with_conflict());
    assert!(state.conflict_alert_visible());
}

#[test]
fn failure_keeps_previous_snapshot() {
    let mut state = DashboardState::default();
    state.apply_snapshot(sample_snapshot());
    state.apply_failure(LOAD_FAILED_MESSAGE);
    assert!(state.snapshot.is_some());
    assert!(!state.is_blocking_error());
}

#[test]
fn failure_without_snapshot_is_blocking() {
    let mut state = DashboardState::default();
    state.apply_failure(LOAD_FAILED_MESSAGE);
    assert!(state.is_blocking_error());
}

#[test]
fn finish_clears_in_flight_flags() {
    let mut state = DashboardState::default();
    state.begin_load(true);
    state.finish();
    assert!(!state.loading);
    assert!(!state.refreshing);
}

#[test]
fn toggle_flips_visibility() {
    let mut state = DashboardState::default();
    state.apply_snapshot(with_conflict());
    state.toggle_conflicts();
    assert!(!state.show_conflicts);
    state.toggle_conflicts();
    assert!(state.show_conflicts);
}

#[test]
fn reset_drops_snapshot() {
    let mut state = DashboardState::default();
    state.apply_snapshot(with_conflict());
    state.reset();
    assert_eq!(state, DashboardState::default());
}
