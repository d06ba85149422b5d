use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Returns the current time in the configured timezone.
pub fn now_in_timezone(tz: &Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(tz)
}

/// Returns today's date in the configured timezone.
pub fn today_local(tz: &Tz) -> NaiveDate {
    now_in_timezone(tz).date_naive()
}

/// Parses a date cell as the spreadsheet scripts serialise it.
///
/// Accepts RFC 3339 timestamps (converted into `tz` first), plain
/// `YYYY-MM-DD` and the form-style `M/D/YYYY`.
pub fn parse_sheet_date(raw: &str, tz: &Tz) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(tz).date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%m/%d/%Y"))
        .ok()
}

/// Formats a date as `Month D, YYYY`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Formats a sheet date cell for display; unparseable cells are returned as-is.
pub fn display_sheet_date(raw: &str, tz: &Tz) -> String {
    parse_sheet_date(raw, tz)
        .map(format_long_date)
        .unwrap_or_else(|| raw.trim().to_string())
}
