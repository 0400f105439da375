use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;

/// Render a backend timestamp for a table cell. Accepts RFC 3339 or a bare
/// `YYYY-MM-DDTHH:MM:SS`; anything else is shown as-is.
pub fn format_datetime(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Utc).format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    raw.to_string()
}

/// Column renderer for timestamp fields on opaque records.
pub fn datetime_cell(record: &Value, key: &str) -> String {
    record
        .get(key)
        .and_then(Value::as_str)
        .map(format_datetime)
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_rfc3339() {
        assert_eq!(format_datetime("2026-03-01T09:30:00Z"), "2026-03-01 09:30");
        assert_eq!(
            format_datetime("2026-03-01T09:30:00+02:00"),
            "2026-03-01 07:30"
        );
    }

    #[test]
    fn test_format_naive() {
        assert_eq!(format_datetime("2026-03-01T09:30:00"), "2026-03-01 09:30");
    }

    #[test]
    fn test_unparseable_passes_through() {
        assert_eq!(format_datetime("yesterday"), "yesterday");
        assert_eq!(format_datetime(""), "");
    }

    #[test]
    fn test_datetime_cell() {
        let record = json!({"createdAt": "2026-03-01T09:30:00Z"});
        assert_eq!(datetime_cell(&record, "createdAt"), "2026-03-01 09:30");
        assert_eq!(datetime_cell(&record, "updatedAt"), "-");
        assert_eq!(datetime_cell(&json!({"createdAt": 5}), "createdAt"), "-");
    }
}
