//! Last-fetched schedule state and the current-day projection.

use bell_types::{EntryId, ScheduleEntry, Weekday, WeeklySchedule};

/// Holds the most recently fetched weekly schedule.
///
/// The schedule is only ever swapped wholesale by [`replace`]; there is
/// no partial merge, so a failed fetch leaves the previous contents
/// stale but intact.
///
/// [`replace`]: ScheduleStore::replace
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleStore {
    schedule: WeeklySchedule,
}

impl ScheduleStore {
    /// Swap in a freshly fetched schedule, discarding the old one.
    pub fn replace(&mut self, fresh: WeeklySchedule) {
        self.schedule = fresh;
    }

    /// Project the given day's entries in server order; empty when the
    /// day key is absent from the last fetch.
    pub fn entries_for(&self, day: Weekday) -> &[ScheduleEntry] {
        self.schedule.entries_for(day)
    }

    /// Look up one entry by its correlation key.
    pub fn entry(&self, day: Weekday, id: EntryId) -> Option<&ScheduleEntry> {
        self.schedule.entry(day, id)
    }
}
