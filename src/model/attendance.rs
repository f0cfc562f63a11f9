use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One persisted mark of a student's presence for a subject on a date.
/// Wire format is camelCase to match the frontend contract.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "S1")]
    pub student_id: String,
    #[schema(example = "Alice")]
    pub student_name: String,
    #[schema(example = "Mathematics")]
    pub subject: String,
    #[schema(example = "2026-01-01", format = "date", value_type = String)]
    pub date: NaiveDate,
    #[schema(example = "9:02:17 AM")]
    pub time: String,
    #[schema(example = "present")]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::AttendanceRecord;
    use chrono::NaiveDate;

    #[test]
    fn record_serializes_with_camel_case_keys_and_iso_date() {
        let record = AttendanceRecord {
            id: 7,
            student_id: "S1".to_string(),
            student_name: "Alice".to_string(),
            subject: "Mathematics".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(),
            time: "9:02:17 AM".to_string(),
            status: "present".to_string(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["studentId"], "S1");
        assert_eq!(json["studentName"], "Alice");
        assert_eq!(json["date"], "2026-01-02");
        assert_eq!(json["status"], "present");
    }
}
