use time::macros::format_description;
use time::{OffsetDateTime, Time, UtcOffset};

/// Parse a 24-hour `HH:mm` string. The hour may be a single digit (`9:00`);
/// minutes always take two. Surrounding whitespace is ignored.
pub fn parse_hh_mm(input: &str) -> Option<Time> {
    Time::parse(
        input.trim(),
        format_description!("[hour padding:none]:[minute]"),
    )
    .ok()
}

/// Elapsed hours between two `HH:mm` times on the same nominal day.
///
/// Returns `None` if either side fails to parse. The result is negative when
/// `end` is earlier than `start`; midnight crossings are not modelled.
pub fn try_hours_between(start: &str, end: &str) -> Option<f64> {
    let start = parse_hh_mm(start)?;
    let end = parse_hh_mm(end)?;
    Some((end - start).as_seconds_f64() / 3600.0)
}

/// Like [`try_hours_between`], but unparsable input counts as a zero-length
/// shift. Callers reject anything not strictly positive.
pub fn hours_between(start: &str, end: &str) -> f64 {
    try_hours_between(start, end).unwrap_or(0.0)
}

pub fn to_local_time(dt: OffsetDateTime) -> OffsetDateTime {
    if let Ok(local_offset) = UtcOffset::current_local_offset() {
        dt.to_offset(local_offset)
    } else {
        dt
    }
}

/// Today's date as `yyyy-MM-dd`, in local time when the offset is known.
pub fn today_string() -> String {
    let d = to_local_time(OffsetDateTime::now_utc()).date();
    format!("{:04}-{:02}-{:02}", d.year(), d.month() as u8, d.day())
}

/// Render fractional hours as `Xh YYm`.
pub fn format_hours(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    let sign = if total_minutes < 0 { "-" } else { "" };
    let total_minutes = total_minutes.abs();
    format!("{}{}h {:02}m", sign, total_minutes / 60, total_minutes % 60)
}
