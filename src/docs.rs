use crate::api::attendance::MarkAttendance;
use crate::model::attendance::AttendanceRecord;
use crate::schedule::ScheduleEntry;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Class Attendance API",
        version = "1.0.0",
        description = r#"
## Class Attendance Backend

Backend for a single-subject class attendance tracker.

### 🔹 Key Features
- **Schedule**
  - Fixed daily timetable, served verbatim
- **Attendance**
  - One mark per student per day, enforced by the store
  - Full attendance history, most recent first

### 📦 Response Format
- JSON-based RESTful responses

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::schedule::today_schedule,
        crate::api::attendance::mark_attendance,
        crate::api::attendance::list_attendance,
    ),
    components(
        schemas(
            ScheduleEntry,
            MarkAttendance,
            AttendanceRecord,
        )
    ),
    tags(
        (name = "Schedule", description = "Daily timetable APIs"),
        (name = "Attendance", description = "Attendance marking and history APIs"),
    )
)]
pub struct ApiDoc;
