use std::fmt;

use crate::angles::OrbitalParameters;
use crate::error::Result;
use crate::events::DailySun;
use crate::format::decimal_hours_to_time_string;
use crate::julian::julian_day;
use crate::types::{Observation, Twilight, TwilightTimes};

/// Every intermediate of the NOAA chain for one instant, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarCalculation {
    pub observation: Observation,
    pub twilight: Twilight,
    pub julian_day: f64,
    pub orbit: OrbitalParameters,
    /// `None` during polar day or night for `twilight`.
    pub hour_angle: Option<f64>,
    pub solar_noon: f64,
    pub times: TwilightTimes,
}

impl SolarCalculation {
    pub fn sunrise(&self) -> Option<f64> {
        self.times.sunrise()
    }

    pub fn sunset(&self) -> Option<f64> {
        self.times.sunset()
    }
}

pub fn calculate(observation: &Observation) -> Result<SolarCalculation> {
    calculate_for(observation, Twilight::Official)
}

pub fn calculate_for(observation: &Observation, twilight: Twilight) -> Result<SolarCalculation> {
    let jd = julian_day(observation.date, observation.time, observation.utc_offset)?;
    let sun = DailySun::new(&observation.location, observation.utc_offset, jd)?;
    Ok(SolarCalculation {
        observation: *observation,
        twilight,
        julian_day: jd,
        orbit: sun.orbit,
        hour_angle: sun.hour_angle(twilight.elevation()).ok(),
        solar_noon: sun.solar_noon,
        times: sun.times(twilight),
    })
}

impl fmt::Display for SolarCalculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let obs = &self.observation;
        let orbit = &self.orbit;
        let time = obs
            .time
            .map_or_else(|| "12:00:00".to_string(), |t| t.format("%H:%M:%S").to_string());

        writeln!(f, "Solar Times Calculator")?;
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(f, "Date: {}", obs.date)?;
        writeln!(f, "Time: {time}")?;
        writeln!(
            f,
            "Location: {:.4}°, {:.4}°",
            obs.location.latitude(),
            obs.location.longitude()
        )?;
        writeln!(f, "UTC Offset: {:+.1} hours", obs.utc_offset)?;
        writeln!(f, "Twilight: {} ({}°)", self.twilight, self.twilight.elevation())?;
        writeln!(f)?;
        writeln!(f, "Astronomical Calculations:")?;
        writeln!(f, "Julian Day:              {:.6}", self.julian_day)?;
        writeln!(f, "Julian Century:          {:.8}", orbit.century)?;
        writeln!(f, "Geom Mean Long Sun:      {:.6}°", orbit.geom_mean_long)?;
        writeln!(f, "Geom Mean Anom Sun:      {:.6}°", orbit.geom_mean_anom)?;
        writeln!(f, "Eccent Earth Orbit:      {:.8}", orbit.eccentricity)?;
        writeln!(f, "Sun Eq of Center:        {:.6}°", orbit.eq_of_center)?;
        writeln!(f, "Sun True Long:           {:.6}°", orbit.true_long)?;
        writeln!(f, "Sun Apparent Long:       {:.6}°", orbit.apparent_long)?;
        writeln!(f, "Mean Obliq Ecliptic:     {:.6}°", orbit.mean_obliquity)?;
        writeln!(f, "Obliq Corr:              {:.6}°", orbit.obliquity_corr)?;
        writeln!(f, "Var Y:                   {:.8}", orbit.var_y)?;
        writeln!(f, "Sun Declination:         {:.6}°", orbit.declination)?;
        match (self.hour_angle, self.times.polar_condition()) {
            (Some(ha), _) => writeln!(f, "Hour Angle:              {ha:.6}°")?,
            (None, Some(condition)) => writeln!(f, "Hour Angle:              N/A ({condition})")?,
            (None, None) => writeln!(f, "Hour Angle:              N/A")?,
        }
        writeln!(f, "Equation of Time:        {:.6} minutes", orbit.equation_of_time)?;
        writeln!(f)?;
        writeln!(f, "Solar Times:")?;
        writeln!(f, "Sunrise:    {}", decimal_hours_to_time_string(self.sunrise()))?;
        writeln!(f, "Solar Noon: {}", decimal_hours_to_time_string(Some(self.solar_noon)))?;
        write!(f, "Sunset:     {}", decimal_hours_to_time_string(self.sunset()))
    }
}
