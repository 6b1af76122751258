use crate::angles::{self, deg_to_rad, rad_to_deg, OrbitalParameters, DEGREES_PER_HOUR};
use crate::error::{Result, SolarError};
use crate::julian::julian_century;
use crate::types::{
    validate_latitude, validate_longitude, validate_utc_offset, Location, PolarCondition,
    Twilight, TwilightTimes,
};

/// Hour angle in degrees at which the sun's centre sits at `elevation`.
///
/// Fails with [`SolarError::UndefinedSolarEvent`] when the sun never reaches
/// that elevation on the day, rather than returning 0 or 180.
pub fn hour_angle(latitude: f64, century: f64, elevation: f64) -> Result<f64> {
    hour_angle_for_declination(latitude, angles::sun_declination(century), elevation)
}

pub fn hour_angle_for_declination(
    latitude: f64,
    declination: f64,
    elevation: f64,
) -> Result<f64> {
    validate_latitude(latitude)?;
    crossing_hour_angle(latitude, declination, elevation).map_err(|condition| {
        SolarError::UndefinedSolarEvent {
            condition,
            elevation,
        }
    })
}

fn crossing_hour_angle(
    latitude: f64,
    declination: f64,
    elevation: f64,
) -> std::result::Result<f64, PolarCondition> {
    let lat = deg_to_rad(latitude);
    let dec = deg_to_rad(declination);
    let cos_arg = (deg_to_rad(elevation).sin() - lat.sin() * dec.sin()) / (lat.cos() * dec.cos());

    if cos_arg > 1.0 {
        Err(PolarCondition::PolarNight)
    } else if cos_arg < -1.0 {
        Err(PolarCondition::PolarDay)
    } else if cos_arg.is_nan() {
        Err(polar_condition_by_hemisphere(latitude, declination))
    } else {
        Ok(rad_to_deg(cos_arg.acos()))
    }
}

// Sun on the observer's side of the equator means it circles overhead.
fn polar_condition_by_hemisphere(latitude: f64, declination: f64) -> PolarCondition {
    if latitude * declination > 0.0 {
        PolarCondition::PolarDay
    } else {
        PolarCondition::PolarNight
    }
}

/// Local solar noon in decimal hours. The offset is added after the
/// UTC minutes are converted to hours.
pub fn solar_noon(longitude: f64, utc_offset: f64, julian_day: f64) -> Result<f64> {
    validate_longitude(longitude)?;
    validate_utc_offset(utc_offset)?;
    let eot = angles::equation_of_time(julian_century(julian_day));
    Ok(solar_noon_from_eot(longitude, utc_offset, eot))
}

fn solar_noon_from_eot(longitude: f64, utc_offset: f64, equation_of_time: f64) -> f64 {
    (720.0 - 4.0 * longitude - equation_of_time) / 60.0 + utc_offset
}

pub fn sunrise(
    location: &Location,
    utc_offset: f64,
    julian_day: f64,
    twilight: Twilight,
) -> Result<f64> {
    let century = julian_century(julian_day);
    let noon = solar_noon(location.longitude(), utc_offset, julian_day)?;
    let ha = hour_angle(location.latitude(), century, twilight.elevation())?;
    Ok(noon - ha / DEGREES_PER_HOUR)
}

pub fn sunset(
    location: &Location,
    utc_offset: f64,
    julian_day: f64,
    twilight: Twilight,
) -> Result<f64> {
    let century = julian_century(julian_day);
    let noon = solar_noon(location.longitude(), utc_offset, julian_day)?;
    let ha = hour_angle(location.latitude(), century, twilight.elevation())?;
    Ok(noon + ha / DEGREES_PER_HOUR)
}

/// Per-day quantities shared by every threshold evaluation of that day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailySun {
    pub julian_day: f64,
    pub orbit: OrbitalParameters,
    pub solar_noon: f64,
    location: Location,
}

impl DailySun {
    pub fn new(location: &Location, utc_offset: f64, julian_day: f64) -> Result<Self> {
        let utc_offset = validate_utc_offset(utc_offset)?;
        let orbit = OrbitalParameters::at(julian_century(julian_day));
        Ok(Self {
            julian_day,
            orbit,
            solar_noon: solar_noon_from_eot(location.longitude(), utc_offset, orbit.equation_of_time),
            location: *location,
        })
    }

    pub fn hour_angle(&self, elevation: f64) -> Result<f64> {
        hour_angle_for_declination(self.location.latitude(), self.orbit.declination, elevation)
    }

    /// Event times in decimal local hours, not reduced modulo 24.
    pub fn times(&self, twilight: Twilight) -> TwilightTimes {
        let latitude = self.location.latitude();
        match crossing_hour_angle(latitude, self.orbit.declination, twilight.elevation()) {
            Ok(ha) => TwilightTimes::Events {
                sunrise: self.solar_noon - ha / DEGREES_PER_HOUR,
                sunset: self.solar_noon + ha / DEGREES_PER_HOUR,
            },
            Err(condition) => TwilightTimes::Polar(condition),
        }
    }
}
