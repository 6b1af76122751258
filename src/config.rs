use std::fs;
use std::path::Path;

use chrono::format::ParseErrorKind;
use chrono::{NaiveDate, NaiveTime};
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SolarError};
use crate::types::{validate_utc_offset, Location, Observation};

/// A single-instant request as read from JSON. Without `time` the
/// calculation runs at local noon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarConfig {
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub utc_offset: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl SolarConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Validate in the order coordinates, offset, date, time.
    pub fn observation(&self) -> Result<Observation> {
        let location = Location::new(self.latitude, self.longitude)?;
        let utc_offset = validate_utc_offset(self.utc_offset)?;
        let date = parse_date(&self.date)?;
        let time = self.time.as_deref().map(parse_time).transpose()?;
        Observation::new(date, time, utc_offset, location)
    }
}

/// Strict `YYYY-MM-DD`. Well-formed strings naming a day that does not
/// exist fail with [`SolarError::InvalidDate`].
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    let format_error = || SolarError::InvalidDateFormat(s.to_string());
    // chrono alone accepts a leading sign and unpadded fields
    if !is_iso_date_shape(s) {
        return Err(format_error());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| match (e.kind(), date_fields(s)) {
        (ParseErrorKind::OutOfRange | ParseErrorKind::Impossible, Some((year, month, day))) => {
            SolarError::InvalidDate { year, month, day }
        }
        _ => format_error(),
    })
}

fn is_iso_date_shape(s: &str) -> bool {
    s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

fn date_fields(s: &str) -> Option<(i32, u32, u32)> {
    Some((
        s.get(0..4)?.parse().ok()?,
        s.get(5..7)?.parse().ok()?,
        s.get(8..10)?.parse().ok()?,
    ))
}

/// `HH:MM:SS` or `HH:MM`.
pub fn parse_time(s: &str) -> Result<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| SolarError::InvalidTime(s.to_string()))
}
