//! Reusable UI components.

mod error_notice;
mod lecture_cell;
mod loading;
mod schedule_table;
mod time_cell;

pub use error_notice::ErrorNotice;
pub use lecture_cell::{EditMode, EditOptions, LectureCell};
pub use loading::Loading;
pub use schedule_table::ScheduleTable;
pub use time_cell::TimeCell;
