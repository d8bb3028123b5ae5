//! Inline-edit session state machine.
//!
//! A session is either `Idle` or holds exactly one open target: one
//! entry, one editable cell. Opening another target discards whatever
//! was buffered before; nothing is saved implicitly.

use bell_types::{
    EntryId, ScheduleEntry, UpdateLectureRequest, UpdateRequest, UpdateTimeslotRequest, Weekday,
};

use crate::store::ScheduleStore;

/// Which cell of a row is editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    /// The paired start/end time cell
    Time,
    /// The lecture name cell
    Lecture,
}

/// A single text input inside an open editor.
///
/// The time cell carries two inputs; the lecture cell one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditInput {
    StartTime,
    EndTime,
    Lecture,
}

/// Buffered draft values for the open target.
///
/// `None` means the input was never touched; on commit the entry's
/// last-known server value is submitted in its place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Draft {
    Time {
        start: Option<String>,
        end: Option<String>,
    },
    Lecture {
        value: Option<String>,
    },
}

impl Draft {
    fn empty(field: EditField) -> Self {
        match field {
            EditField::Time => Draft::Time {
                start: None,
                end: None,
            },
            EditField::Lecture => Draft::Lecture { value: None },
        }
    }

    /// The cell this draft edits.
    pub fn field(&self) -> EditField {
        match self {
            Draft::Time { .. } => EditField::Time,
            Draft::Lecture { .. } => EditField::Lecture,
        }
    }
}

/// The single-slot edit session.
///
/// At most one (entry, field) pair is ever open; `begin` on an already
/// editing session switches targets and drops the prior draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Idle,
    Editing { entry_id: EntryId, draft: Draft },
}

impl EditSession {
    /// Open an editor for (entry, field) with a fresh draft. Any
    /// previously open editor is discarded without saving.
    pub fn begin(&mut self, entry_id: EntryId, field: EditField) {
        *self = EditSession::Editing {
            entry_id,
            draft: Draft::empty(field),
        };
    }

    /// Buffer a typed value for the open target.
    ///
    /// No-op when idle or when the input does not belong to the open
    /// cell. An empty string clears the buffer back to untouched, so
    /// commit falls back to the server value.
    pub fn input(&mut self, input: EditInput, value: String) {
        let EditSession::Editing { draft, .. } = self else {
            return;
        };
        let buffered = Some(value).filter(|v| !v.is_empty());
        match (draft, input) {
            (Draft::Time { start, .. }, EditInput::StartTime) => *start = buffered,
            (Draft::Time { end, .. }, EditInput::EndTime) => *end = buffered,
            (Draft::Lecture { value }, EditInput::Lecture) => *value = buffered,
            _ => {}
        }
    }

    /// Close the session, dropping any buffered values.
    pub fn cancel(&mut self) {
        *self = EditSession::Idle;
    }

    /// Whether (entry, field) is the open target.
    pub fn is_editing(&self, entry_id: EntryId, field: EditField) -> bool {
        matches!(
            self,
            EditSession::Editing { entry_id: open, draft }
                if *open == entry_id && draft.field() == field
        )
    }

    /// The buffered value for an input of the open target, if any.
    pub fn pending(&self, input: EditInput) -> Option<&str> {
        let EditSession::Editing { draft, .. } = self else {
            return None;
        };
        match (draft, input) {
            (Draft::Time { start, .. }, EditInput::StartTime) => start.as_deref(),
            (Draft::Time { end, .. }, EditInput::EndTime) => end.as_deref(),
            (Draft::Lecture { value }, EditInput::Lecture) => value.as_deref(),
            _ => None,
        }
    }

    /// Value an edit form input should show: the buffered draft, or the
    /// entry's current server value when the buffer is untouched.
    pub fn prefill(&self, input: EditInput, entry: &ScheduleEntry) -> String {
        self.pending(input)
            .map(str::to_owned)
            .unwrap_or_else(|| match input {
                EditInput::StartTime => entry.start_time.clone(),
                EditInput::EndTime => entry.end_time.clone(),
                EditInput::Lecture => entry.lecture.clone(),
            })
    }

    /// Build the write for the open target.
    ///
    /// Buffer-or-original: any input never touched (or cleared) submits
    /// the entry's last-known server value, so a time edit always
    /// carries both halves of the slot. Returns `None` when idle or
    /// when the target entry is no longer present in the store.
    pub fn commit_request(&self, store: &ScheduleStore, day: Weekday) -> Option<UpdateRequest> {
        let EditSession::Editing { entry_id, draft } = self else {
            return None;
        };
        let entry = store.entry(day, *entry_id)?;
        let request = match draft {
            Draft::Lecture { value } => UpdateRequest::Lecture(UpdateLectureRequest {
                day,
                id: *entry_id,
                lecture: value.clone().unwrap_or_else(|| entry.lecture.clone()),
            }),
            Draft::Time { start, end } => UpdateRequest::Timeslot(UpdateTimeslotRequest {
                day,
                id: *entry_id,
                start_time: start.clone().unwrap_or_else(|| entry.start_time.clone()),
                end_time: end.clone().unwrap_or_else(|| entry.end_time.clone()),
            }),
        };
        Some(request)
    }
}
