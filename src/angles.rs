pub const DEGREES_PER_HOUR: f64 = 15.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

pub fn leap_year(year: i32) -> bool {
    (year % 400 == 0) || (year % 4 == 0 && year % 100 != 0)
}

pub fn days_in_year(year: i32) -> u32 {
    if leap_year(year) {
        366
    } else {
        365
    }
}

/// Geometric mean longitude of the sun, degrees in [0, 360).
pub fn geom_mean_long_sun(century: f64) -> f64 {
    normalize_angle(280.46646 + century * (36000.76983 + century * 0.0003032))
}

/// Geometric mean anomaly of the sun, degrees (not reduced).
pub fn geom_mean_anom_sun(century: f64) -> f64 {
    357.52911 + century * (35999.05029 - 0.0001537 * century)
}

pub fn eccent_earth_orbit(century: f64) -> f64 {
    0.016708634 - century * (0.000042037 + 0.0000001267 * century)
}

pub fn sun_eq_of_center(century: f64) -> f64 {
    eq_of_center(century, geom_mean_anom_sun(century))
}

pub fn sun_true_long(century: f64) -> f64 {
    geom_mean_long_sun(century) + sun_eq_of_center(century)
}

pub fn sun_apparent_long(century: f64) -> f64 {
    apparent_long(century, sun_true_long(century))
}

/// Mean obliquity of the ecliptic: 23° 26' plus a seconds polynomial.
pub fn mean_obliq_ecliptic(century: f64) -> f64 {
    let seconds = 21.448 - century * (46.8150 + century * (0.00059 - century * 0.001813));
    23.0 + (26.0 + seconds / 60.0) / 60.0
}

pub fn obliq_corr(century: f64) -> f64 {
    mean_obliq_ecliptic(century) + 0.00256 * deg_to_rad(omega(century)).cos()
}

pub fn var_y(century: f64) -> f64 {
    var_y_from(obliq_corr(century))
}

pub fn sun_declination(century: f64) -> f64 {
    declination_from(obliq_corr(century), sun_apparent_long(century))
}

/// Equation of time in minutes.
pub fn equation_of_time(century: f64) -> f64 {
    eot_from(
        var_y(century),
        geom_mean_long_sun(century),
        eccent_earth_orbit(century),
        geom_mean_anom_sun(century),
    )
}

// Longitude of the moon's ascending node, drives the nutation terms.
fn omega(century: f64) -> f64 {
    125.04 - 1934.136 * century
}

fn eq_of_center(century: f64, mean_anom: f64) -> f64 {
    let m = deg_to_rad(mean_anom);
    m.sin() * (1.914602 - century * (0.004817 + 0.000014 * century))
        + (2.0 * m).sin() * (0.019993 - 0.000101 * century)
        + (3.0 * m).sin() * 0.000289
}

fn apparent_long(century: f64, true_long: f64) -> f64 {
    true_long - 0.00569 - 0.00478 * deg_to_rad(omega(century)).sin()
}

fn var_y_from(obliquity: f64) -> f64 {
    (deg_to_rad(obliquity) / 2.0).tan().powi(2)
}

fn declination_from(obliquity: f64, apparent_long: f64) -> f64 {
    let sint = deg_to_rad(obliquity).sin() * deg_to_rad(apparent_long).sin();
    rad_to_deg(sint.asin())
}

fn eot_from(y: f64, mean_long: f64, eccent: f64, mean_anom: f64) -> f64 {
    let l0 = deg_to_rad(mean_long);
    let m = deg_to_rad(mean_anom);
    let etime = y * (2.0 * l0).sin() - 2.0 * eccent * m.sin()
        + 4.0 * eccent * y * m.sin() * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * eccent * eccent * (2.0 * m).sin();
    rad_to_deg(etime) * 4.0
}

/// All century-dependent quantities of the NOAA chain, evaluated once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalParameters {
    pub century: f64,
    pub geom_mean_long: f64,
    pub geom_mean_anom: f64,
    pub eccentricity: f64,
    pub eq_of_center: f64,
    pub true_long: f64,
    pub apparent_long: f64,
    pub mean_obliquity: f64,
    pub obliquity_corr: f64,
    pub var_y: f64,
    pub declination: f64,
    pub equation_of_time: f64,
}

impl OrbitalParameters {
    pub fn at(century: f64) -> Self {
        let geom_mean_long = geom_mean_long_sun(century);
        let geom_mean_anom = geom_mean_anom_sun(century);
        let eccentricity = eccent_earth_orbit(century);
        let eq_of_center = eq_of_center(century, geom_mean_anom);
        let true_long = geom_mean_long + eq_of_center;
        let apparent_long = apparent_long(century, true_long);
        let mean_obliquity = mean_obliq_ecliptic(century);
        let obliquity_corr = mean_obliquity + 0.00256 * deg_to_rad(omega(century)).cos();
        let var_y = var_y_from(obliquity_corr);
        Self {
            century,
            geom_mean_long,
            geom_mean_anom,
            eccentricity,
            eq_of_center,
            true_long,
            apparent_long,
            mean_obliquity,
            obliquity_corr,
            var_y,
            declination: declination_from(obliquity_corr, apparent_long),
            equation_of_time: eot_from(var_y, geom_mean_long, eccentricity, geom_mean_anom),
        }
    }
}
