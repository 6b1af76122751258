use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::error::{Result, SolarError};

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;
pub const MIN_UTC_OFFSET: f64 = -12.0;
pub const MAX_UTC_OFFSET: f64 = 14.0;

/// Solar elevation threshold that defines when "sunrise" and "sunset" occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Twilight {
    Official,
    Civil,
    Nautical,
    Astronomical,
}

impl Twilight {
    pub const ALL: [Twilight; 4] = [
        Twilight::Official,
        Twilight::Civil,
        Twilight::Nautical,
        Twilight::Astronomical,
    ];

    /// Elevation of the sun's centre in degrees. The official value folds in
    /// standard refraction and the solar semi-diameter.
    pub const fn elevation(self) -> f64 {
        match self {
            Twilight::Official => -0.833,
            Twilight::Civil => -6.0,
            Twilight::Nautical => -12.0,
            Twilight::Astronomical => -18.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Twilight::Official => "official",
            Twilight::Civil => "civil",
            Twilight::Nautical => "nautical",
            Twilight::Astronomical => "astronomical",
        }
    }

    const fn index(self) -> usize {
        match self {
            Twilight::Official => 0,
            Twilight::Civil => 1,
            Twilight::Nautical => 2,
            Twilight::Astronomical => 3,
        }
    }
}

impl fmt::Display for Twilight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Twilight {
    type Err = SolarError;

    fn from_str(s: &str) -> Result<Self> {
        Twilight::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SolarError::UnknownTwilight(s.to_string()))
    }
}

/// A validated geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    latitude: f64,
    longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        validate_latitude(latitude)?;
        validate_longitude(longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

fn check_range(name: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    // NaN fails the contains check as well
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(SolarError::InvalidCoordinate {
            name,
            value,
            min,
            max,
        })
    }
}

pub fn validate_latitude(latitude: f64) -> Result<f64> {
    check_range("latitude", latitude, MIN_LATITUDE, MAX_LATITUDE).map(|()| latitude)
}

pub fn validate_longitude(longitude: f64) -> Result<f64> {
    check_range("longitude", longitude, MIN_LONGITUDE, MAX_LONGITUDE).map(|()| longitude)
}

pub fn validate_utc_offset(utc_offset: f64) -> Result<f64> {
    if (MIN_UTC_OFFSET..=MAX_UTC_OFFSET).contains(&utc_offset) {
        Ok(utc_offset)
    } else {
        Err(SolarError::InvalidUtcOffset(utc_offset))
    }
}

/// A single-instant request: local calendar date, optional local time
/// (solar calculations default to 12:00:00), UTC offset and location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub utc_offset: f64,
    pub location: Location,
}

impl Observation {
    pub fn new(
        date: NaiveDate,
        time: Option<NaiveTime>,
        utc_offset: f64,
        location: Location,
    ) -> Result<Self> {
        Ok(Self {
            date,
            time,
            utc_offset: validate_utc_offset(utc_offset)?,
            location,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolarCondition {
    /// The sun stays above the threshold for the whole day.
    PolarDay,
    /// The sun never climbs to the threshold.
    PolarNight,
}

impl fmt::Display for PolarCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolarCondition::PolarDay => f.write_str("sun stays above the threshold all day"),
            PolarCondition::PolarNight => f.write_str("sun stays below the threshold all day"),
        }
    }
}

/// Sunrise and sunset for one threshold on one day, in decimal local hours.
/// Values may fall outside [0, 24) when the event crosses midnight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TwilightTimes {
    Events { sunrise: f64, sunset: f64 },
    Polar(PolarCondition),
}

impl TwilightTimes {
    pub fn sunrise(&self) -> Option<f64> {
        match *self {
            TwilightTimes::Events { sunrise, .. } => Some(sunrise),
            TwilightTimes::Polar(_) => None,
        }
    }

    pub fn sunset(&self) -> Option<f64> {
        match *self {
            TwilightTimes::Events { sunset, .. } => Some(sunset),
            TwilightTimes::Polar(_) => None,
        }
    }

    /// Hours between sunrise and sunset.
    pub fn day_length(&self) -> Option<f64> {
        match *self {
            TwilightTimes::Events { sunrise, sunset } => Some(sunset - sunrise),
            TwilightTimes::Polar(_) => None,
        }
    }

    pub fn polar_condition(&self) -> Option<PolarCondition> {
        match *self {
            TwilightTimes::Events { .. } => None,
            TwilightTimes::Polar(condition) => Some(condition),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub utc_offset: f64,
    pub solar_noon: f64,
    pub times: [TwilightTimes; 4],
}

impl DayRecord {
    pub fn get(&self, twilight: Twilight) -> TwilightTimes {
        self.times[twilight.index()]
    }

    pub fn sunrise(&self, twilight: Twilight) -> Option<f64> {
        self.get(twilight).sunrise()
    }

    pub fn sunset(&self, twilight: Twilight) -> Option<f64> {
        self.get(twilight).sunset()
    }

    pub fn day_length(&self, twilight: Twilight) -> Option<f64> {
        self.get(twilight).day_length()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Summer,
    Winter,
    Spring,
    Fall,
}

impl Season {
    /// Astronomical season by fixed solstice/equinox dates, flipped for the
    /// southern hemisphere.
    pub fn for_date(date: NaiveDate, latitude: f64) -> Season {
        let northern = match (date.month(), date.day()) {
            (12, d) if d >= 21 => Season::Winter,
            (1, _) | (2, _) => Season::Winter,
            (3, d) if d < 20 => Season::Winter,
            (3, _) | (4, _) | (5, _) => Season::Spring,
            (6, d) if d < 21 => Season::Spring,
            (6, _) | (7, _) | (8, _) => Season::Summer,
            (9, d) if d < 22 => Season::Summer,
            _ => Season::Fall,
        };
        if latitude >= 0.0 {
            northern
        } else {
            northern.opposite()
        }
    }

    pub fn opposite(self) -> Season {
        match self {
            Season::Summer => Season::Winter,
            Season::Winter => Season::Summer,
            Season::Spring => Season::Fall,
            Season::Fall => Season::Spring,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Season::Summer => "Summer",
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Fall => "Fall",
        };
        f.write_str(name)
    }
}
