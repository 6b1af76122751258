use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

use crate::error::{Result, SolarError};
use crate::types::validate_utc_offset;

/// Julian Day of the J2000.0 epoch, 2000-01-01 12:00 UTC.
pub const J2000: f64 = 2451545.0;
pub const DAYS_PER_CENTURY: f64 = 36525.0;

/// Time-of-day assumed when a request carries none.
pub fn local_noon() -> NaiveTime {
    NaiveTime::MIN + TimeDelta::hours(12)
}

/// Julian Day Number of the Gregorian date, valid from 4800 BC onwards.
pub fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let a = (14 - month as i64) / 12;
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;
    day as i64 + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

/// Julian Day for a local calendar date and time-of-day.
///
/// The local wall clock is shifted to UTC by subtracting `utc_offset` hours
/// before the date is converted, so an offset can move the instant onto the
/// previous or next UTC day. `time` defaults to local noon.
pub fn to_julian_day(
    year: i32,
    month: u32,
    day: u32,
    time: Option<NaiveTime>,
    utc_offset: f64,
) -> Result<f64> {
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(SolarError::InvalidDate { year, month, day })?;
    julian_day(date, time, utc_offset)
}

pub fn julian_day(date: NaiveDate, time: Option<NaiveTime>, utc_offset: f64) -> Result<f64> {
    let utc = to_utc(date.and_time(time.unwrap_or_else(local_noon)), utc_offset)?;
    let jdn = julian_day_number(utc.year(), utc.month(), utc.day());
    Ok(jdn as f64 + day_fraction(utc.time()) - 0.5)
}

pub fn julian_century(julian_day: f64) -> f64 {
    (julian_day - J2000) / DAYS_PER_CENTURY
}

fn to_utc(local: NaiveDateTime, utc_offset: f64) -> Result<NaiveDateTime> {
    let offset = validate_utc_offset(utc_offset)?;
    let shift = TimeDelta::milliseconds((offset * 3_600_000.0).round() as i64);
    local
        .checked_sub_signed(shift)
        .ok_or_else(|| SolarError::InvalidDate {
            year: local.year(),
            month: local.month(),
            day: local.day(),
        })
}

fn day_fraction(time: NaiveTime) -> f64 {
    let seconds = time.num_seconds_from_midnight() as f64 + time.nanosecond() as f64 / 1e9;
    seconds / 86_400.0
}
