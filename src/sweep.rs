use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};
use log::{debug, trace};

use crate::angles::days_in_year;
use crate::error::{Result, SolarError};
use crate::events::DailySun;
use crate::julian::julian_day;
use crate::types::{validate_utc_offset, DayRecord, Location, Twilight};

/// Sunrise and sunset for every threshold on one local calendar day,
/// evaluated at local noon.
pub fn day_record(location: &Location, utc_offset: f64, date: NaiveDate) -> Result<DayRecord> {
    let jd = julian_day(date, None, utc_offset)?;
    let sun = DailySun::new(location, utc_offset, jd)?;
    let times = Twilight::ALL.map(|twilight| {
        let cell = sun.times(twilight);
        if let Some(condition) = cell.polar_condition() {
            trace!("{date} {twilight}: {condition}");
        }
        cell
    });
    Ok(DayRecord {
        date,
        utc_offset,
        solar_noon: sun.solar_noon,
        times,
    })
}

/// One record per day of `year`, in chronological order.
///
/// Polar days and nights are recorded per cell and never fail the sweep;
/// only a malformed offset or year does.
pub fn yearly_sun_times(
    location: &Location,
    utc_offset: f64,
    year: i32,
) -> Result<Vec<DayRecord>> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(SolarError::InvalidDate {
        year,
        month: 1,
        day: 1,
    })?;
    let end = NaiveDate::from_ymd_opt(year, 12, 31).ok_or(SolarError::InvalidDate {
        year,
        month: 12,
        day: 31,
    })?;
    debug!(
        "sweeping {} days of {year} at ({:.4}, {:.4}) UTC{utc_offset:+}",
        days_in_year(year),
        location.latitude(),
        location.longitude()
    );
    sun_times_range(location, utc_offset, start, end)
}

/// Records for each day from `start` to `end` inclusive.
pub fn sun_times_range(
    location: &Location,
    utc_offset: f64,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<DayRecord>> {
    validate_utc_offset(utc_offset)?;
    start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(|date| day_record(location, utc_offset, date))
        .collect()
}

/// Two UTC offsets in force over different parts of the year, e.g. a
/// standard and a daylight-saving offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetSchedule {
    pub winter_offset: f64,
    pub summer_offset: f64,
    /// Month and day the winter offset takes effect.
    pub winter_start: (u32, u32),
    /// Month and day the summer offset takes effect.
    pub summer_start: (u32, u32),
}

impl OffsetSchedule {
    /// Fails with [`SolarError::InvalidSchedule`] when both offsets start on
    /// the same month and day, since one of them would never apply.
    pub fn new(
        winter_offset: f64,
        summer_offset: f64,
        winter_start: NaiveDate,
        summer_start: NaiveDate,
    ) -> Result<Self> {
        let (winter_start, summer_start) = (month_day(winter_start), month_day(summer_start));
        if winter_start == summer_start {
            let (month, day) = winter_start;
            return Err(SolarError::InvalidSchedule { month, day });
        }
        Ok(Self {
            winter_offset: validate_utc_offset(winter_offset)?,
            summer_offset: validate_utc_offset(summer_offset)?,
            winter_start,
            summer_start,
        })
    }

    /// Offsets switching on the first Sunday of the given months.
    pub fn from_first_sundays(
        year: i32,
        winter_month: u32,
        summer_month: u32,
        winter_offset: f64,
        summer_offset: f64,
    ) -> Result<Self> {
        Self::new(
            winter_offset,
            summer_offset,
            first_sunday(year, winter_month)?,
            first_sunday(year, summer_month)?,
        )
    }

    pub fn is_winter(&self, date: NaiveDate) -> bool {
        let md = month_day(date);
        if self.winter_start < self.summer_start {
            self.winter_start <= md && md < self.summer_start
        } else {
            md >= self.winter_start || md < self.summer_start
        }
    }

    pub fn offset_for(&self, date: NaiveDate) -> f64 {
        if self.is_winter(date) {
            self.winter_offset
        } else {
            self.summer_offset
        }
    }
}

fn month_day(date: NaiveDate) -> (u32, u32) {
    (date.month(), date.day())
}

pub fn first_sunday(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, Weekday::Sun, 1).ok_or(
        SolarError::InvalidDate {
            year,
            month,
            day: 1,
        },
    )
}

/// Combine two sweeps by calendar date, taking the `secondary` record for
/// dates where `use_secondary` holds and the `primary` one otherwise.
///
/// Dates present in only one input are kept as they are. The result is in
/// chronological order regardless of the input order.
pub fn merge_by_date<F>(
    primary: &[DayRecord],
    secondary: &[DayRecord],
    use_secondary: F,
) -> Vec<DayRecord>
where
    F: Fn(NaiveDate) -> bool,
{
    let mut merged: BTreeMap<NaiveDate, DayRecord> =
        primary.iter().map(|record| (record.date, *record)).collect();
    for record in secondary {
        if use_secondary(record.date) || !merged.contains_key(&record.date) {
            merged.insert(record.date, *record);
        }
    }
    merged.into_values().collect()
}

/// A year in which the UTC offset follows `schedule`.
pub fn yearly_sun_times_dual_offset(
    location: &Location,
    year: i32,
    schedule: &OffsetSchedule,
) -> Result<Vec<DayRecord>> {
    let summer = yearly_sun_times(location, schedule.summer_offset, year)?;
    let winter = yearly_sun_times(location, schedule.winter_offset, year)?;
    Ok(merge_by_date(&summer, &winter, |date| schedule.is_winter(date)))
}
