use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

/// Rendered in place of a clock time when no event occurs.
pub const NOT_AVAILABLE: &str = "N/A";

/// Split decimal hours into whole hours, minutes and seconds, truncating.
pub fn hours_to_hms(decimal_hours: f64) -> (i64, i64, i64) {
    let hours = decimal_hours.floor();
    let minutes = (decimal_hours - hours) * 60.0;
    let seconds = (minutes - minutes.floor()) * 60.0;
    (hours as i64, minutes.floor() as i64, seconds.floor() as i64)
}

/// Clock string for decimal local hours, wrapped into [00:00:00, 24:00:00).
///
/// Display only: the day the time belongs to is lost. Use [`wall_clock`] or
/// [`day_offset`] for calendar bookkeeping.
pub fn format_hours(decimal_hours: f64) -> String {
    if !decimal_hours.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let (h, m, s) = hours_to_hms(decimal_hours);
    format!("{:02}:{:02}:{:02}", h.rem_euclid(24), m, s)
}

pub fn decimal_hours_to_time_string(decimal_hours: Option<f64>) -> String {
    decimal_hours.map_or_else(|| NOT_AVAILABLE.to_string(), format_hours)
}

/// Length of time as `HH:MM:SS`, without wrapping at 24 hours.
pub fn format_duration(hours: Option<f64>) -> String {
    match hours {
        Some(h) if h.is_finite() && h >= 0.0 => {
            let (h, m, s) = hours_to_hms(h);
            format!("{:02}:{:02}:{:02}", h, m, s)
        }
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// -1 for the previous calendar day, 1 for the next, 0 for the same day.
pub fn day_offset(decimal_hours: f64) -> i64 {
    (decimal_hours / 24.0).floor() as i64
}

/// Local date and time of an event expressed in hours from the start of `date`.
pub fn wall_clock(date: NaiveDate, decimal_hours: f64) -> Option<NaiveDateTime> {
    if !decimal_hours.is_finite() {
        return None;
    }
    let millis = (decimal_hours * 3_600_000.0).round() as i64;
    date.and_hms_opt(0, 0, 0)?
        .checked_add_signed(TimeDelta::try_milliseconds(millis)?)
}
