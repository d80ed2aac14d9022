//! Dashboard data state: the loaded snapshot plus its presentation flags.
//!
//! DESIGN
//! ======
//! The snapshot is shared behind an `Arc` and replaced wholesale on every
//! successful load; views never mutate it. Conflict-alert visibility is
//! recomputed from conflict presence on each load, so a dismissed alert
//! re-opens when the next snapshot still carries conflicts.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::sync::Arc;

use crate::net::types::DashboardSnapshot;

/// Banner text for a failed (non-auth) dashboard load.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load data. Please check if the backend is running.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub snapshot: Option<Arc<DashboardSnapshot>>,
    pub loading: bool,
    pub refreshing: bool,
    pub error: Option<String>,
    pub has_conflicts: bool,
    pub show_conflicts: bool,
}

impl DashboardState {
    /// Start a fetch: clear the previous error and raise the in-flight flags.
    pub fn begin_load(&mut self, refreshing: bool) {
        self.error = None;
        self.loading = true;
        if refreshing {
            self.refreshing = true;
        }
    }

    /// Install a freshly fetched snapshot.
    pub fn apply_snapshot(&mut self, snapshot: DashboardSnapshot) {
        self.has_conflicts = snapshot.has_conflicts();
        if self.has_conflicts {
            self.show_conflicts = true;
        }
        self.snapshot = Some(Arc::new(snapshot));
    }

    /// Record a failed fetch; any previously loaded snapshot stays visible.
    pub fn apply_failure(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Drop the in-flight flags.
    pub fn finish(&mut self) {
        self.loading = false;
        self.refreshing = false;
    }

    /// Hide the alert; the underlying flag is untouched.
    pub fn dismiss_conflicts(&mut self) {
        self.show_conflicts = false;
    }

    pub fn toggle_conflicts(&mut self) {
        self.show_conflicts = !self.show_conflicts;
    }

    /// Number of conflicting addresses in the loaded snapshot.
    pub fn conflict_count(&self) -> usize {
        self.snapshot.as_ref().map_or(0, |s| s.conflicts.len())
    }

    /// Whether the conflict alert panel is currently visible.
    pub fn conflict_alert_visible(&self) -> bool {
        self.show_conflicts && self.has_conflicts
    }

    /// Error with no data to fall back on: the full-page error screen.
    pub fn is_blocking_error(&self) -> bool {
        self.error.is_some() && self.snapshot.is_none()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
