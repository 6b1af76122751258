use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{error, LevelFilter};

use solar_times::{
    calculate_for, decimal_hours_to_time_string, format_duration, yearly_sun_times, Location,
    Result, Season, SolarConfig, Twilight,
};

#[derive(Parser)]
#[command(name = "suncalc")]
#[command(about = "Sunrise, sunset and twilight times from the NOAA solar equations")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full calculation chain for the instant in a JSON config file
    Report {
        /// Configuration file with date, time, utc_offset, latitude and longitude
        #[arg(default_value = "config.json")]
        config: PathBuf,

        /// official, civil, nautical or astronomical
        #[arg(long, default_value = "official")]
        twilight: Twilight,
    },

    /// Print sunrise and sunset for every day of a year
    Year {
        #[arg(long, allow_hyphen_values = true)]
        latitude: f64,

        #[arg(long, allow_hyphen_values = true)]
        longitude: f64,

        #[arg(long, allow_hyphen_values = true)]
        utc_offset: f64,

        #[arg(long)]
        year: i32,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Report { config, twilight } => {
            let observation = SolarConfig::load(&config)?.observation()?;
            println!("{}", calculate_for(&observation, twilight)?);
        }
        Commands::Year {
            latitude,
            longitude,
            utc_offset,
            year,
        } => {
            let location = Location::new(latitude, longitude)?;
            let records = yearly_sun_times(&location, utc_offset, year)?;

            let mut header = vec!["date".to_string(), "season".to_string(), "noon".to_string()];
            for twilight in Twilight::ALL {
                header.push(format!("{twilight}_sunrise"));
                header.push(format!("{twilight}_sunset"));
            }
            header.push("day_length".to_string());
            println!("{}", header.join(","));

            for record in &records {
                let mut row = vec![
                    record.date.to_string(),
                    Season::for_date(record.date, latitude).to_string(),
                    decimal_hours_to_time_string(Some(record.solar_noon)),
                ];
                for twilight in Twilight::ALL {
                    row.push(decimal_hours_to_time_string(record.sunrise(twilight)));
                    row.push(decimal_hours_to_time_string(record.sunset(twilight)));
                }
                row.push(format_duration(record.day_length(Twilight::Official)));
                println!("{}", row.join(","));
            }
        }
    }
    Ok(())
}
