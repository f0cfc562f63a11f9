use std::fs;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of the daily timetable, returned verbatim by the schedule endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScheduleEntry {
    #[schema(example = "09:00 AM")]
    pub time: String,
    #[schema(example = "Mathematics")]
    pub subject: String,
    #[schema(example = "Room 101")]
    pub room: String,
}

/// The shipped timetable. Used when no SCHEDULE_FILE override is configured.
pub fn builtin_schedule() -> Vec<ScheduleEntry> {
    [
        ("09:00 AM", "Mathematics", "Room 101"),
        ("10:30 AM", "Physics", "Lab 201"),
        ("12:00 PM", "Free Period", "-"),
        ("01:00 PM", "Computer Science", "Room 305"),
        ("02:30 PM", "English", "Room 102"),
    ]
    .into_iter()
    .map(|(time, subject, room)| ScheduleEntry {
        time: time.to_string(),
        subject: subject.to_string(),
        room: room.to_string(),
    })
    .collect()
}

/// Loads the timetable once at startup. A configured file that cannot be read
/// or parsed is a startup error, not a fallback to the builtin list.
pub fn load_schedule(path: Option<&str>) -> anyhow::Result<Vec<ScheduleEntry>> {
    match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read schedule file {path}"))?;
            let entries: Vec<ScheduleEntry> = serde_json::from_str(&raw)
                .with_context(|| format!("invalid schedule JSON in {path}"))?;
            Ok(entries)
        }
        None => Ok(builtin_schedule()),
    }
}
