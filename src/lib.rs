pub mod angles;
pub mod calculation;
pub mod config;
pub mod error;
pub mod events;
pub mod format;
pub mod julian;
pub mod sweep;
pub mod types;

pub use angles::{
    days_in_year, deg_to_rad, eccent_earth_orbit, equation_of_time, geom_mean_anom_sun,
    geom_mean_long_sun, leap_year, mean_obliq_ecliptic, normalize_angle, obliq_corr, rad_to_deg,
    sun_apparent_long, sun_declination, sun_eq_of_center, sun_true_long, var_y, OrbitalParameters,
    DEGREES_PER_HOUR,
};

pub use calculation::{calculate, calculate_for, SolarCalculation};

pub use config::{parse_date, parse_time, SolarConfig};

pub use error::{Result, SolarError};

pub use events::{hour_angle, hour_angle_for_declination, solar_noon, sunrise, sunset, DailySun};

pub use format::{
    day_offset, decimal_hours_to_time_string, format_duration, format_hours, wall_clock,
    NOT_AVAILABLE,
};

pub use julian::{julian_century, julian_day, julian_day_number, to_julian_day, J2000};

pub use sweep::{
    day_record, first_sunday, merge_by_date, sun_times_range, yearly_sun_times,
    yearly_sun_times_dual_offset, OffsetSchedule,
};

pub use types::{
    validate_latitude, validate_longitude, validate_utc_offset, DayRecord, Location, Observation,
    PolarCondition, Season, Twilight, TwilightTimes,
};
