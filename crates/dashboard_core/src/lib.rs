//! Client-side state for the Smart Bell dashboard.
//!
//! This crate holds everything the view renders from: the last fetched
//! schedule ([`ScheduleStore`]), the single-slot inline-edit state
//! machine ([`EditSession`]), and the [`Dashboard`] container that
//! applies sync completions to both. It is browser-independent; the
//! frontend crate owns the actual HTTP calls and feeds their outcomes
//! back as [`SyncEvent`]s.

mod edit;
mod store;

pub use edit::{Draft, EditField, EditInput, EditSession};
pub use store::ScheduleStore;

use bell_types::WeeklySchedule;
use thiserror::Error;

/// The two user-visible failure kinds. The display text is shown to
/// the user verbatim, replacing the dashboard body.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardError {
    #[error("Error fetching data. Please try again later.")]
    Fetch,
    #[error("Error updating. Please try again.")]
    Update,
}

/// Completion of a remote read or write, as applied to the dashboard.
///
/// A successful write carries the schedule returned by its
/// reconciliation fetch; the client never patches the store itself.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncEvent {
    FetchOk(WeeklySchedule),
    FetchFailed,
    UpdateOk(WeeklySchedule),
    UpdateFailed,
}

/// The one state value the view renders from, replaced wholesale per
/// event so a render pass never sees a half-applied transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub store: ScheduleStore,
    pub session: EditSession,
    pub error: Option<DashboardError>,
    /// True until the first fetch completes, so an empty day is only
    /// claimed once the server has actually answered.
    pub loading: bool,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self {
            store: ScheduleStore::default(),
            session: EditSession::Idle,
            error: None,
            loading: true,
        }
    }
}

impl Dashboard {
    /// Apply a sync completion.
    ///
    /// On a failed write the session keeps its target and draft so the
    /// buffered input survives, and the store keeps its last-good
    /// schedule; only the error flag changes.
    pub fn apply(&mut self, event: SyncEvent) {
        match event {
            SyncEvent::FetchOk(schedule) => {
                self.store.replace(schedule);
                self.error = None;
                self.loading = false;
            }
            SyncEvent::FetchFailed => {
                self.error = Some(DashboardError::Fetch);
                self.loading = false;
            }
            SyncEvent::UpdateOk(schedule) => {
                self.store.replace(schedule);
                self.session.cancel();
                self.error = None;
            }
            SyncEvent::UpdateFailed => {
                self.error = Some(DashboardError::Update);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bell_types::Weekday;
    use serde_json::json;

    fn schedule(value: serde_json::Value) -> WeeklySchedule {
        serde_json::from_value(value).unwrap()
    }

    fn monday_math() -> WeeklySchedule {
        schedule(json!({
            "Monday": [
                { "id": 1, "start_time": "09:00", "end_time": "10:00", "lecture": "Math" }
            ]
        }))
    }

    #[test]
    fn test_fresh_dashboard_is_loading() {
        let dashboard = Dashboard::default();

        assert!(dashboard.loading);
        assert_eq!(dashboard.session, EditSession::Idle);
        assert_eq!(dashboard.error, None);
    }

    #[test]
    fn test_fetch_ok_populates_store() {
        let mut dashboard = Dashboard::default();

        dashboard.apply(SyncEvent::FetchOk(monday_math()));

        assert!(!dashboard.loading);
        assert_eq!(dashboard.error, None);
        assert_eq!(dashboard.store.entries_for(Weekday::Monday).len(), 1);
    }

    #[test]
    fn test_fetch_failure_keeps_previous_store() {
        let mut dashboard = Dashboard::default();
        dashboard.apply(SyncEvent::FetchOk(monday_math()));

        dashboard.apply(SyncEvent::FetchFailed);

        assert_eq!(dashboard.error, Some(DashboardError::Fetch));
        // Stale but valid: the last good schedule is still there.
        assert_eq!(dashboard.store.entries_for(Weekday::Monday)[0].lecture, "Math");
    }

    #[test]
    fn test_update_ok_replaces_store_and_closes_session() {
        let mut dashboard = Dashboard::default();
        dashboard.apply(SyncEvent::FetchOk(monday_math()));
        dashboard.session.begin(1, EditField::Lecture);
        dashboard.session.input(EditInput::Lecture, "Algebra".to_string());

        dashboard.apply(SyncEvent::UpdateOk(schedule(json!({
            "Monday": [
                { "id": 1, "start_time": "09:00", "end_time": "10:00", "lecture": "Algebra" }
            ]
        }))));

        assert_eq!(dashboard.session, EditSession::Idle);
        assert_eq!(dashboard.error, None);
        assert_eq!(
            dashboard.store.entries_for(Weekday::Monday)[0].lecture,
            "Algebra"
        );
    }

    #[test]
    fn test_update_failure_preserves_session_and_store() {
        let mut dashboard = Dashboard::default();
        dashboard.apply(SyncEvent::FetchOk(monday_math()));
        dashboard.session.begin(1, EditField::Lecture);
        dashboard.session.input(EditInput::Lecture, "Algebra".to_string());

        dashboard.apply(SyncEvent::UpdateFailed);

        assert_eq!(dashboard.error, Some(DashboardError::Update));
        // The draft survives for retry; the schedule is not discarded.
        assert!(dashboard.session.is_editing(1, EditField::Lecture));
        assert_eq!(dashboard.session.pending(EditInput::Lecture), Some("Algebra"));
        assert_eq!(dashboard.store.entries_for(Weekday::Monday)[0].lecture, "Math");
    }

    #[test]
    fn test_later_fetch_clears_error() {
        let mut dashboard = Dashboard::default();
        dashboard.apply(SyncEvent::FetchFailed);

        dashboard.apply(SyncEvent::FetchOk(monday_math()));

        assert_eq!(dashboard.error, None);
    }

    #[test]
    fn test_error_messages_match_dashboard_copy() {
        assert_eq!(
            DashboardError::Fetch.to_string(),
            "Error fetching data. Please try again later."
        );
        assert_eq!(
            DashboardError::Update.to_string(),
            "Error updating. Please try again."
        );
    }
}
