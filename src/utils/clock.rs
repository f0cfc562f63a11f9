use chrono::{Local, NaiveDate};

/// Calendar day in the server's local timezone; one record per student per day.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Wall-clock stamp the way it is shown to students, e.g. "2:30:05 PM".
pub fn wall_clock() -> String {
    Local::now().format("%-I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::{today, wall_clock};
    use chrono::NaiveTime;

    #[test]
    fn today_formats_as_iso_date() {
        let stamp = today().format("%Y-%m-%d").to_string();
        assert_eq!(stamp.len(), 10);
        assert_eq!(stamp.as_bytes()[4], b'-');
        assert_eq!(stamp.as_bytes()[7], b'-');
    }

    #[test]
    fn wall_clock_reads_as_a_twelve_hour_time() {
        let stamp = wall_clock();
        assert!(stamp.ends_with("AM") || stamp.ends_with("PM"), "{stamp}");
        assert!(NaiveTime::parse_from_str(&stamp, "%I:%M:%S %p").is_ok(), "{stamp}");
    }
}
