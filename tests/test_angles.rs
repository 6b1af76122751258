use chrono::NaiveDate;
use solar_times::angles::*;
use solar_times::julian::{julian_century, julian_day};

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

fn century_at_noon_utc(year: i32, month: u32, day: u32) -> f64 {
    let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
    julian_century(julian_day(date, None, 0.0).unwrap())
}

// ── NormalizeAngle ──

#[test]
fn test_normalize_angle_basic() {
    let cases: &[(f64, f64)] = &[
        (0.0, 0.0),
        (45.0, 45.0),
        (360.0, 0.0),
        (361.0, 1.0),
        (-1.0, 359.0),
        (-90.0, 270.0),
        (720.0, 0.0),
        (-450.0, 270.0),
    ];
    for &(input, expected) in cases {
        assert_approx!(normalize_angle(input), expected, 1e-9);
    }
}

#[test]
fn test_deg_rad_roundtrip() {
    for deg in [-180.0, -23.44, 0.0, 0.833, 90.0, 359.9] {
        assert_approx!(rad_to_deg(deg_to_rad(deg)), deg, 1e-12);
    }
}

// ── Leap years ──

#[test]
fn test_days_in_year() {
    assert_eq!(days_in_year(2023), 365);
    assert_eq!(days_in_year(2024), 366);
    assert_eq!(days_in_year(1900), 365);
    assert_eq!(days_in_year(2000), 366);
}

// ── Orbital elements at J2000.0 ──

#[test]
fn test_polynomials_at_epoch() {
    assert_approx!(geom_mean_long_sun(0.0), 280.46646, 1e-12);
    assert_approx!(geom_mean_anom_sun(0.0), 357.52911, 1e-12);
    assert_approx!(eccent_earth_orbit(0.0), 0.016708634, 1e-15);
    assert_approx!(mean_obliq_ecliptic(0.0), 23.439291111, 1e-8);
}

#[test]
fn test_corrections_at_epoch() {
    assert_approx!(sun_eq_of_center(0.0), -0.084301, 1e-5);
    assert_approx!(sun_apparent_long(0.0), 280.372555, 1e-5);
    assert_approx!(obliq_corr(0.0), 23.437821, 1e-5);
    assert_approx!(var_y(0.0), 0.043029, 1e-5);
    assert_approx!(sun_declination(0.0), -23.032516, 1e-5);
    assert_approx!(equation_of_time(0.0), -3.301259, 1e-5);
}

#[test]
fn test_true_long_is_mean_plus_center() {
    for c in [-0.5, 0.0, 0.243, 1.0] {
        assert_approx!(sun_true_long(c), geom_mean_long_sun(c) + sun_eq_of_center(c), 1e-12);
    }
}

#[test]
fn test_mean_longitude_reduced() {
    for c in [-20.0, -1.0, 0.0, 0.5, 3.7, 20.0] {
        let l0 = geom_mean_long_sun(c);
        assert!((0.0..360.0).contains(&l0), "century {}: {}", c, l0);
    }
}

// ── Declination & equation of time over a year ──

#[test]
fn test_declination_solstices() {
    assert_approx!(sun_declination(century_at_noon_utc(2024, 6, 21)), 23.437, 0.01);
    assert_approx!(sun_declination(century_at_noon_utc(2024, 12, 21)), -23.437, 0.01);
}

#[test]
fn test_declination_bounded_all_days() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    for date in start.iter_days().take(366) {
        let c = julian_century(julian_day(date, None, 0.0).unwrap());
        let decl = sun_declination(c);
        assert!(decl.abs() <= 23.45, "{}: {}", date, decl);
    }
}

#[test]
fn test_equation_of_time_extremes() {
    assert_approx!(equation_of_time(century_at_noon_utc(2024, 11, 3)), 16.49, 0.05);
    assert_approx!(equation_of_time(century_at_noon_utc(2024, 2, 11)), -14.23, 0.05);
}

#[test]
fn test_equation_of_time_bounded() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    for date in start.iter_days().take(366) {
        let c = julian_century(julian_day(date, None, 0.0).unwrap());
        let eot = equation_of_time(c);
        assert!(eot >= -15.0 && eot <= 17.0, "{}: {}", date, eot);
    }
}

// ── OrbitalParameters matches the individual functions ──

#[test]
fn test_orbital_parameters_consistent() {
    for c in [-1.0, -0.1, 0.0, 0.2447, 0.5, 2.0] {
        let p = OrbitalParameters::at(c);
        assert_eq!(p.century, c);
        assert_approx!(p.geom_mean_long, geom_mean_long_sun(c), 1e-12);
        assert_approx!(p.geom_mean_anom, geom_mean_anom_sun(c), 1e-12);
        assert_approx!(p.eccentricity, eccent_earth_orbit(c), 1e-15);
        assert_approx!(p.eq_of_center, sun_eq_of_center(c), 1e-12);
        assert_approx!(p.true_long, sun_true_long(c), 1e-12);
        assert_approx!(p.apparent_long, sun_apparent_long(c), 1e-12);
        assert_approx!(p.mean_obliquity, mean_obliq_ecliptic(c), 1e-12);
        assert_approx!(p.obliquity_corr, obliq_corr(c), 1e-12);
        assert_approx!(p.var_y, var_y(c), 1e-15);
        assert_approx!(p.declination, sun_declination(c), 1e-12);
        assert_approx!(p.equation_of_time, equation_of_time(c), 1e-12);
    }
}

#[test]
fn test_finite_across_calendar_range() {
    for year in [1, 500, 1582, 2000, 4000, 9999] {
        let p = OrbitalParameters::at(century_at_noon_utc(year, 6, 1));
        assert!(p.declination.is_finite(), "year {}", year);
        assert!(p.equation_of_time.is_finite(), "year {}", year);
    }
}
