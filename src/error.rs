use thiserror::Error;

use crate::types::PolarCondition;

#[derive(Debug, Error)]
pub enum SolarError {
    #[error("invalid date {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDateFormat(String),

    #[error("invalid time '{0}', expected HH:MM:SS or HH:MM")]
    InvalidTime(String),

    #[error("{name} {value} is outside [{min}, {max}]")]
    InvalidCoordinate {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("UTC offset {0} is outside [-12, 14] hours")]
    InvalidUtcOffset(f64),

    /// The hour-angle argument left [-1, 1] for this elevation threshold.
    #[error("no solar event at {elevation}° elevation: {condition}")]
    UndefinedSolarEvent {
        condition: PolarCondition,
        elevation: f64,
    },

    #[error("both offsets of the schedule start on {month:02}-{day:02}")]
    InvalidSchedule { month: u32, day: u32 },

    #[error("unknown twilight '{0}', expected official, civil, nautical or astronomical")]
    UnknownTwilight(String),

    #[error("config error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SolarError>;
