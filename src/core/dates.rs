use crate::domain::model::{DueDate, NormalizedDate};
use chrono::{FixedOffset, NaiveDateTime};

/// Date formats the institution has been seen to use in the due-date
/// column. Tried in order; the first that parses wins.
const DUE_DATE_FORMATS: &[&str] = &["%d %b %Y: %H:%M", "%d %b %Y : %H:%M", "%d %b %y %H:%M"];

const BRISBANE_UTC_OFFSET_SECS: i32 = 10 * 3600;

/// Queensland has no daylight saving, so a fixed offset is exact year-round.
pub fn brisbane_offset() -> FixedOffset {
    FixedOffset::east_opt(BRISBANE_UTC_OFFSET_SECS).unwrap()
}

/// Normalizes a raw due-date string into a canonical calendar value.
///
/// Total: anything unparsable comes back as `DueDate::Invalid` so the
/// caller can render a marker instead of failing the whole report. Some
/// due dates are ranges ("start - end"); only the end matters.
pub fn normalize(raw: &str) -> DueDate {
    let raw = raw.trim();
    let candidate = match raw.rsplit_once(" - ") {
        Some((_, end)) => end.trim(),
        None => raw,
    };

    for format in DUE_DATE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(candidate, format) {
            if let Some(instant) = parsed.and_local_timezone(brisbane_offset()).single() {
                return DueDate::Known(NormalizedDate::new(instant));
            }
        }
    }

    tracing::debug!(raw, "due date did not match any known format");
    DueDate::Invalid
}
