use chrono::{NaiveDate, NaiveDateTime};
use solar_times::format::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, s).unwrap()
}

// ── Clock strings ──

#[test]
fn test_known_time_strings() {
    assert_eq!(format_hours(0.0), "00:00:00");
    assert_eq!(format_hours(6.5), "06:30:00");
    assert_eq!(format_hours(13.75), "13:45:00");
    assert_eq!(format_hours(12.0 + 1.0 / 3600.0 * 30.5), "12:00:30");
}

#[test]
fn test_wraps_past_midnight() {
    assert_eq!(format_hours(25.25), "01:15:00");
    assert_eq!(format_hours(24.0), "00:00:00");
}

#[test]
fn test_wraps_before_midnight() {
    assert_eq!(format_hours(-0.5), "23:30:00");
    assert_eq!(format_hours(-2.25), "21:45:00");
}

#[test]
fn test_truncates_rather_than_rounds() {
    assert_eq!(format_hours(5.0 + 59.0 / 60.0 + 59.9 / 3600.0), "05:59:59");
}

#[test]
fn test_absent_renders_not_available() {
    assert_eq!(decimal_hours_to_time_string(None), NOT_AVAILABLE);
    assert_eq!(decimal_hours_to_time_string(None), "N/A");
    assert_eq!(decimal_hours_to_time_string(Some(f64::NAN)), "N/A");
    assert_eq!(decimal_hours_to_time_string(Some(6.5)), "06:30:00");
}

// ── Durations ──

#[test]
fn test_duration_does_not_wrap() {
    assert_eq!(format_duration(Some(14.5)), "14:30:00");
    assert_eq!(format_duration(Some(0.25)), "00:15:00");
    assert_eq!(format_duration(None), "N/A");
    assert_eq!(format_duration(Some(-1.0)), "N/A");
}

// ── Calendar bookkeeping ──

#[test]
fn test_day_offset() {
    assert_eq!(day_offset(-0.5), -1);
    assert_eq!(day_offset(0.0), 0);
    assert_eq!(day_offset(23.99), 0);
    assert_eq!(day_offset(24.0), 1);
    assert_eq!(day_offset(31.0), 1);
}

#[test]
fn test_wall_clock_keeps_wrap_direction() {
    let d = date(2024, 3, 1);
    assert_eq!(wall_clock(d, 6.5), Some(datetime(2024, 3, 1, 6, 30, 0)));
    assert_eq!(wall_clock(d, -0.5), Some(datetime(2024, 2, 29, 23, 30, 0)));
    assert_eq!(wall_clock(d, 25.25), Some(datetime(2024, 3, 2, 1, 15, 0)));
    assert_eq!(wall_clock(d, f64::INFINITY), None);
}

#[test]
fn test_hours_to_hms() {
    assert_eq!(hours_to_hms(6.5), (6, 30, 0));
    assert_eq!(hours_to_hms(-0.5), (-1, 30, 0));
}
