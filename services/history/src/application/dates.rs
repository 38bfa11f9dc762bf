//! 查询参数中的日期解析
//!
//! 接受 RFC 3339、`YYYY-MM-DD HH:MM:SS`、`YYYY-MM-DDTHH:MM:SS`（按 UTC）
//! 以及 `YYYY-MM-DD`（UTC 零点）。

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use stock_errors::{AppError, AppResult};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

pub fn parse_timestamp(field: &str, raw: &str) -> AppResult<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(ts.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|ts| ts.and_utc())
        .ok_or_else(|| AppError::validation(format!("Invalid {}: {}", field, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_rfc3339_is_converted_to_utc() {
        let ts = parse_timestamp("start_date", "2024-03-01T10:00:00+02:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap());
    }

    #[test]
    fn test_naive_formats_are_utc() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap();
        assert_eq!(parse_timestamp("end_date", "2024-03-01 10:30:00").unwrap(), expected);
        assert_eq!(parse_timestamp("end_date", "2024-03-01T10:30:00").unwrap(), expected);
    }

    #[test]
    fn test_date_only_is_midnight() {
        let ts = parse_timestamp("start_date", "2024-03-01").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_garbage_is_validation_error() {
        let err = parse_timestamp("start_date", "yesterday").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.message(), "Invalid start_date: yesterday");

        assert!(parse_timestamp("end_date", "2024-13-01").is_err());
    }
}
