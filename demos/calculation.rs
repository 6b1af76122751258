use chrono::{NaiveDate, Offset, TimeZone};
use chrono_tz::America::New_York;

use solar_times::{
    calculate, decimal_hours_to_time_string, format_duration, yearly_sun_times, Location,
    Observation, PolarCondition, Twilight,
};

fn main() -> solar_times::Result<()> {
    let latitude = 40.7128;
    let longitude = -74.0060;
    let location = Location::new(latitude, longitude)?;

    let date = NaiveDate::from_ymd_opt(2024, 6, 21).expect("valid date");
    let utc_offset = New_York.offset_from_utc_date(&date).fix().local_minus_utc() as f64 / 3600.0;

    let observation = Observation::new(date, None, utc_offset, location)?;
    println!("{}", calculate(&observation)?);
    println!();

    let year = yearly_sun_times(&location, utc_offset, 2024)?;
    let longest = year
        .iter()
        .filter_map(|r| r.day_length(Twilight::Official).map(|len| (r.date, len)))
        .max_by(|a, b| a.1.total_cmp(&b.1));
    let shortest = year
        .iter()
        .filter_map(|r| r.day_length(Twilight::Official).map(|len| (r.date, len)))
        .min_by(|a, b| a.1.total_cmp(&b.1));

    println!("=== {} days in 2024, New York (UTC{:+}) ===", year.len(), utc_offset);
    if let Some((date, len)) = longest {
        println!("Longest day:  {date} ({})", format_duration(Some(len)));
    }
    if let Some((date, len)) = shortest {
        println!("Shortest day: {date} ({})", format_duration(Some(len)));
    }

    let svalbard = Location::new(78.2232, 15.6267)?;
    let polar = yearly_sun_times(&svalbard, 1.0, 2024)?;
    let midnight_sun = polar
        .iter()
        .filter(|r| r.get(Twilight::Official).polar_condition() == Some(PolarCondition::PolarDay))
        .count();
    let polar_night = polar
        .iter()
        .filter(|r| r.get(Twilight::Official).polar_condition() == Some(PolarCondition::PolarNight))
        .count();
    println!();
    println!("=== Longyearbyen, 2024 ===");
    println!("Midnight sun days: {midnight_sun}");
    println!("Polar night days:  {polar_night}");
    if let Some(first) = polar
        .iter()
        .find(|r| r.get(Twilight::Official).polar_condition() == Some(PolarCondition::PolarDay))
    {
        println!(
            "Midnight sun begins: {} (sunset {})",
            first.date,
            decimal_hours_to_time_string(first.sunset(Twilight::Official))
        );
    }
    Ok(())
}
