//! Shared types for the Smart Bell dashboard.
//!
//! This crate defines the schedule data model and the wire-level
//! request/response shapes exchanged with the Smart Bell API.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

/// Identifier of a schedule entry, unique within its day and stable
/// across fetches.
pub type EntryId = u32;

/// Days of the week, spelled the way the Smart Bell API keys them.
///
/// Ordered Monday-first so schedule maps iterate in week order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// The full English name, as used in API payloads.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// The current weekday in the user's local timezone.
    pub fn today() -> Self {
        Local::now().weekday().into()
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One scheduled lecture slot.
///
/// Times are the API's "HH:MM" strings; the client treats them as
/// opaque and never does arithmetic on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Unique entry identifier within its day
    pub id: EntryId,
    /// Slot start, "HH:MM"
    pub start_time: String,
    /// Slot end, "HH:MM"
    pub end_time: String,
    /// Lecture name shown in the cell
    pub lecture: String,
}

impl ScheduleEntry {
    /// Display form of the time window, e.g. "09:00 - 10:00".
    pub fn time_window(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }
}

/// The full weekday → ordered entries mapping returned by the API.
///
/// Entry order within a day is server-assigned and preserved as
/// received. A missing key means the day has no entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklySchedule {
    days: BTreeMap<Weekday, Vec<ScheduleEntry>>,
}

impl WeeklySchedule {
    /// The day's entries in server order, empty if the key is absent.
    pub fn entries_for(&self, day: Weekday) -> &[ScheduleEntry] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or_default()
    }

    /// Look up a single entry by its correlation key.
    pub fn entry(&self, day: Weekday, id: EntryId) -> Option<&ScheduleEntry> {
        self.entries_for(day).iter().find(|e| e.id == id)
    }

    /// True when no day has any entries.
    pub fn is_empty(&self) -> bool {
        self.days.values().all(Vec::is_empty)
    }
}

impl From<BTreeMap<Weekday, Vec<ScheduleEntry>>> for WeeklySchedule {
    fn from(days: BTreeMap<Weekday, Vec<ScheduleEntry>>) -> Self {
        Self { days }
    }
}

/// Envelope for `GET /api/schedule`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub schedule: WeeklySchedule,
}

/// Body for `PUT /api/update`.
///
/// Lecture updates use the body-id contract: the entry id travels in
/// the body next to its day, the same shape as timeslot updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateLectureRequest {
    pub day: Weekday,
    pub id: EntryId,
    pub lecture: String,
}

/// Body for `PUT /api/update-timeslot`.
///
/// Both time fields travel in one request; a slot is never updated one
/// half at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateTimeslotRequest {
    pub day: Weekday,
    pub id: EntryId,
    pub start_time: String,
    pub end_time: String,
}

/// A single pending write, tagged by the endpoint it goes to.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateRequest {
    Lecture(UpdateLectureRequest),
    Timeslot(UpdateTimeslotRequest),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_schedule() -> WeeklySchedule {
        serde_json::from_value(json!({
            "Monday": [
                { "id": 1, "start_time": "09:00", "end_time": "10:00", "lecture": "Math" },
                { "id": 2, "start_time": "10:00", "end_time": "11:00", "lecture": "Physics" }
            ],
            "Wednesday": [
                { "id": 1, "start_time": "08:30", "end_time": "09:30", "lecture": "Chemistry" }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_weekday_serializes_as_full_name() {
        for day in Weekday::ALL {
            let json = serde_json::to_value(day).unwrap();
            assert_eq!(json, json!(day.name()));
        }
    }

    #[test]
    fn test_weekday_deserializes_from_full_name() {
        let day: Weekday = serde_json::from_str("\"Wednesday\"").unwrap();
        assert_eq!(day, Weekday::Wednesday);
    }

    #[test]
    fn test_weekday_from_chrono() {
        assert_eq!(Weekday::from(chrono::Weekday::Mon), Weekday::Monday);
        assert_eq!(Weekday::from(chrono::Weekday::Sun), Weekday::Sunday);
    }

    #[test]
    fn test_weekday_ordering_is_monday_first() {
        let mut days = vec![Weekday::Sunday, Weekday::Friday, Weekday::Monday];
        days.sort();
        assert_eq!(days, vec![Weekday::Monday, Weekday::Friday, Weekday::Sunday]);
    }

    #[test]
    fn test_schedule_deserializes_from_api_shape() {
        let schedule = sample_schedule();

        let monday = schedule.entries_for(Weekday::Monday);
        assert_eq!(monday.len(), 2);
        assert_eq!(monday[0].lecture, "Math");
        assert_eq!(monday[0].time_window(), "09:00 - 10:00");
    }

    #[test]
    fn test_schedule_preserves_server_order() {
        let schedule = sample_schedule();

        let ids: Vec<EntryId> = schedule
            .entries_for(Weekday::Monday)
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_absent_day_projects_empty() {
        let schedule = sample_schedule();

        assert!(schedule.entries_for(Weekday::Sunday).is_empty());
    }

    #[test]
    fn test_entry_lookup_by_id() {
        let schedule = sample_schedule();

        let entry = schedule.entry(Weekday::Monday, 2).unwrap();
        assert_eq!(entry.lecture, "Physics");
        assert!(schedule.entry(Weekday::Monday, 99).is_none());
        assert!(schedule.entry(Weekday::Tuesday, 1).is_none());
    }

    #[test]
    fn test_schedule_response_envelope() {
        let response: ScheduleResponse = serde_json::from_value(json!({
            "schedule": {
                "Monday": [
                    { "id": 1, "start_time": "09:00", "end_time": "10:00", "lecture": "Math" }
                ]
            }
        }))
        .unwrap();

        assert_eq!(response.schedule.entries_for(Weekday::Monday).len(), 1);
    }

    #[test]
    fn test_update_lecture_body_shape() {
        let body = UpdateLectureRequest {
            day: Weekday::Monday,
            id: 3,
            lecture: "Biology".to_string(),
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            json!({ "day": "Monday", "id": 3, "lecture": "Biology" })
        );
    }

    #[test]
    fn test_update_timeslot_body_shape() {
        let body = UpdateTimeslotRequest {
            day: Weekday::Friday,
            id: 1,
            start_time: "11:00".to_string(),
            end_time: "12:30".to_string(),
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            json!({
                "day": "Friday",
                "id": 1,
                "start_time": "11:00",
                "end_time": "12:30"
            })
        );
    }

    #[test]
    fn test_empty_schedule() {
        let schedule = WeeklySchedule::default();
        assert!(schedule.is_empty());

        let schedule: WeeklySchedule = serde_json::from_value(json!({ "Monday": [] })).unwrap();
        assert!(schedule.is_empty());
        assert!(!sample_schedule().is_empty());
    }
}
