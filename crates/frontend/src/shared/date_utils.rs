//! Date formatting for grids and task cards.
//!
//! The backend sends ISO dates (`2024-03-15` or a full timestamp); the UI shows
//! US-style `MM/DD/YYYY`.

use chrono::NaiveDate;

pub const EMPTY_CELL: &str = "—";

fn date_part(value: &str) -> &str {
    value.split('T').next().unwrap_or(value)
}

pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_part(value.trim()), "%Y-%m-%d").ok()
}

/// "2024-03-15" -> "03/15/2024". Anything unparsable is echoed back.
pub fn format_date(value: &str) -> String {
    match parse_iso_date(value) {
        Some(d) => d.format("%m/%d/%Y").to_string(),
        None => value.to_string(),
    }
}

pub fn format_optional_date(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => format_date(v),
        _ => EMPTY_CELL.to_string(),
    }
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn today_iso() -> String {
    today().format("%Y-%m-%d").to_string()
}

/// Whole days from `started` to `today`; `None` for bad input or a future start.
pub fn days_since(started: &str, today: NaiveDate) -> Option<i64> {
    let start = parse_iso_date(started)?;
    let days = (today - start).num_days();
    (days >= 0).then_some(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "03/15/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "03/15/2024");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_optional_date() {
        assert_eq!(format_optional_date(None), EMPTY_CELL);
        assert_eq!(format_optional_date(Some("  ")), EMPTY_CELL);
        assert_eq!(format_optional_date(Some("2023-01-02")), "01/02/2023");
    }

    #[test]
    fn test_days_since() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(days_since("2024-03-01", today), Some(14));
        assert_eq!(days_since("2024-03-15T08:00:00Z", today), Some(0));
        assert_eq!(days_since("2024-04-01", today), None);
        assert_eq!(days_since("", today), None);
    }
}
