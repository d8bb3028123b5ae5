//! HTTP sync client for the Smart Bell API.
//!
//! Reads fetch the whole weekly schedule; writes update one entry and
//! are always followed by a reconciliation read, so the client never
//! merges state locally. There is no retry and no timeout: a failed
//! call surfaces once and a hung call simply never resolves.

use bell_types::{
    ScheduleResponse, UpdateLectureRequest, UpdateRequest, UpdateTimeslotRequest, WeeklySchedule,
};
use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

/// Fixed base path of the Smart Bell API.
const API_BASE: &str = "/api";

/// Any way a remote call can fail. The view folds all of these into a
/// single user-visible message; the variant only matters for console
/// diagnostics.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Network failure or an unparseable response body
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    /// The server answered outside the 2xx range
    #[error("server responded with status {0}")]
    Status(u16),
}

/// Result type for sync client calls.
pub type Result<T> = std::result::Result<T, ApiError>;

/// GET the full weekly schedule.
pub async fn fetch_schedule() -> Result<WeeklySchedule> {
    let resp = Request::get(&format!("{API_BASE}/schedule")).send().await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    let body: ScheduleResponse = resp.json().await?;
    Ok(body.schedule)
}

/// PUT a single entry's lecture name.
pub async fn update_lecture(body: &UpdateLectureRequest) -> Result<()> {
    put_json("update", body).await
}

/// PUT a single entry's time window. Both halves of the slot travel in
/// one request, never two.
pub async fn update_timeslot(body: &UpdateTimeslotRequest) -> Result<()> {
    put_json("update-timeslot", body).await
}

/// Submit one write, then re-read the whole schedule.
///
/// The read starts only after the write acks, so within one save the
/// returned schedule always reflects that write. Ordering across
/// overlapping saves is not sequenced; the last completion to arrive
/// wins at the store.
pub async fn save_and_refresh(update: &UpdateRequest) -> Result<WeeklySchedule> {
    match update {
        UpdateRequest::Lecture(body) => update_lecture(body).await?,
        UpdateRequest::Timeslot(body) => update_timeslot(body).await?,
    }
    fetch_schedule().await
}

/// PUT one body to an endpoint under the API base. The ack body is
/// ignored.
async fn put_json<T: Serialize>(endpoint: &str, body: &T) -> Result<()> {
    let resp = Request::put(&format!("{API_BASE}/{endpoint}"))
        .json(body)?
        .send()
        .await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(())
}
