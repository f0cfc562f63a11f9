use actix_web::{HttpResponse, http::StatusCode};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::model::attendance::AttendanceRecord;

/// Everything a handler can fail with. Each variant maps to one structured
/// JSON response; nothing crosses the API boundary unformatted.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{field} is required")]
    Validation { field: &'static str },

    #[error("Attendance already marked for {student_name} today")]
    Duplicate {
        student_name: String,
        record: Box<AttendanceRecord>,
    },

    #[error(transparent)]
    Storage(#[from] sqlx::Error),
}

impl actix_web::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Duplicate { .. } => StatusCode::CONFLICT,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Validation { .. } => HttpResponse::BadRequest().json(json!({
                "success": false,
                "message": self.to_string(),
            })),
            ApiError::Duplicate { record, .. } => HttpResponse::Conflict().json(json!({
                "success": false,
                "message": self.to_string(),
                "record": record,
            })),
            ApiError::Storage(e) => {
                error!(error = %e, "Storage failure");
                HttpResponse::InternalServerError().json(json!({
                    "success": false,
                    "error": e.to_string(),
                }))
            }
        }
    }
}
