use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use natal_chart::{
    AnglePosition, BirthRecord, ChartConfig, GeoLocation, HouseCusp, PlanetPosition,
    PositionStatus, calculate_all_planets, calculate_horoscope, sign_info,
};
use natal_time::{CivilDate, CivilDateTime, jd_to_calendar, jd_to_centuries};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "natal", about = "Natal chart positions CLI")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Config file (TOML); defaults to $NATAL_CONFIG
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Zodiac sign and DMS of an ecliptic longitude
    Sign {
        /// Ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Julian Day and century of a civil date/time
    Jd {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Clock time (HH:MM or HH:MM:SS); default from config
        #[arg(long)]
        time: Option<String>,
    },
    /// Positions of the ten bodies at an instant
    Sky {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Clock time (HH:MM or HH:MM:SS); default from config
        #[arg(long)]
        time: Option<String>,
        /// Latitude in degrees, north positive
        #[arg(long, allow_negative_numbers = true, requires = "lon")]
        lat: Option<f64>,
        /// Longitude in degrees, east positive
        #[arg(long, allow_negative_numbers = true, requires = "lat")]
        lon: Option<f64>,
    },
    /// Full birth chart with equal houses
    Chart {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth clock time (HH:MM or HH:MM:SS), taken as-is
        #[arg(long)]
        time: Option<String>,
        /// Latitude in degrees; default location from config
        #[arg(long, allow_negative_numbers = true, requires = "lon")]
        lat: Option<f64>,
        /// Longitude in degrees, east positive
        #[arg(long, allow_negative_numbers = true, requires = "lat")]
        lon: Option<f64>,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn parse_date(s: &str) -> Result<CivilDate> {
    let date: CivilDate = s.parse()?;
    if !date.is_valid() {
        bail!("{date} is not a calendar date");
    }
    Ok(date)
}

fn parse_instant(date: &str, time: Option<&str>, config: &ChartConfig) -> Result<CivilDateTime> {
    let date = parse_date(date)?;
    match time {
        Some(clock) => Ok(CivilDateTime::with_clock(date, clock)?),
        None => Ok(CivilDateTime {
            date,
            hour: config.default_clock_hour,
        }),
    }
}

fn location(lat: Option<f64>, lon: Option<f64>) -> Result<Option<GeoLocation>> {
    match (lat, lon) {
        (Some(lat), Some(lon)) => {
            let loc = GeoLocation::new(lat, lon);
            if let Err(msg) = loc.validate() {
                bail!("{msg}");
            }
            Ok(Some(loc))
        }
        _ => Ok(None),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_planets(planets: &[PlanetPosition]) {
    for p in planets {
        let info = sign_info(p.longitude_deg);
        let flag = match (p.status, p.retrograde) {
            (PositionStatus::Defaulted, _) => " (defaulted)",
            (_, true) => " R",
            _ => "",
        };
        println!(
            "{:<8} {:<12} {:>2}°{:02}' house {:>2}  {:>8.3} deg/day{}",
            p.body.name(),
            p.sign.name(),
            info.dms.degrees,
            info.dms.minutes,
            p.house,
            p.speed_deg_per_day,
            flag
        );
    }
}

fn print_angle(a: &AnglePosition) {
    println!(
        "{:<9} {:<12} {:.4} ({:.4} deg)",
        a.angle.name(),
        a.sign.name(),
        a.degree_in_sign,
        a.longitude_deg
    );
}

fn print_houses(houses: &[HouseCusp]) {
    for c in houses {
        println!(
            "House {:>2}  {:<12} {:.4}",
            c.house,
            c.sign.name(),
            c.degree_in_sign
        );
    }
}

#[derive(Serialize)]
struct JdReport {
    instant: CivilDateTime,
    julian_day: f64,
    julian_century: f64,
    calendar: (i32, u32, f64),
}

fn run(cli: Cli) -> Result<()> {
    let config = natal_config::load_config(cli.config.as_deref()).context("loading config")?;

    match cli.command {
        Commands::Sign { lon } => {
            if !lon.is_finite() {
                bail!("longitude must be finite");
            }
            let info = sign_info(lon);
            if cli.json {
                return print_json(&info);
            }
            let dms = info.dms.rounded(1);
            println!(
                "{} ({:?}, {:?}) - {} deg {} min {:.1} sec ({:.4} deg in sign)",
                info.sign.name(),
                info.sign.element(),
                info.sign.modality(),
                dms.degrees,
                dms.minutes,
                dms.seconds,
                info.degree_in_sign
            );
        }

        Commands::Jd { date, time } => {
            let instant = parse_instant(&date, time.as_deref(), &config)?;
            let jd = instant.julian_day();
            let report = JdReport {
                instant,
                julian_day: jd,
                julian_century: jd_to_centuries(jd),
                calendar: jd_to_calendar(jd),
            };
            if cli.json {
                return print_json(&report);
            }
            println!("{}", report.instant);
            println!("JD {:.6}", report.julian_day);
            println!("T  {:.12}", report.julian_century);
        }

        Commands::Sky {
            date,
            time,
            lat,
            lon,
        } => {
            let instant = parse_instant(&date, time.as_deref(), &config)?;
            let loc = location(lat, lon)?;
            let sky = calculate_all_planets(&instant, loc.as_ref(), &config);
            if cli.json {
                return print_json(&sky);
            }
            println!("{instant}  JD {:.6}", sky.julian_day);
            print_planets(&sky.planets);
            if let Some(asc) = &sky.ascendant {
                print_angle(asc);
            }
            if let Some(mc) = &sky.midheaven {
                print_angle(mc);
            }
        }

        Commands::Chart {
            date,
            time,
            lat,
            lon,
        } => {
            let record = BirthRecord {
                date: parse_date(&date)?,
                time,
                location: location(lat, lon)?,
            };
            let chart = calculate_horoscope(&record, &config);
            if cli.json {
                return print_json(&chart);
            }
            println!(
                "{} at {:.4}, {:.4}",
                record.date, chart.location.latitude_deg, chart.location.longitude_deg
            );
            print_planets(&chart.planets);
            print_angle(&chart.ascendant);
            print_angle(&chart.midheaven);
            print_houses(&chart.houses);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    log::debug!("natal {}", env!("CARGO_PKG_VERSION"));
    run(cli)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instant_uses_config_hour() {
        let config = ChartConfig::default();
        let dt = parse_instant("2000-01-01", None, &config).unwrap();
        assert_eq!(dt.julian_day(), 2_451_545.0);
        let dt = parse_instant("2000-01-01", Some("06:00"), &config).unwrap();
        assert_eq!(dt.hour, 6.0);
    }

    #[test]
    fn rejects_impossible_dates_and_clocks() {
        let config = ChartConfig::default();
        assert!(parse_instant("2023-02-30", None, &config).is_err());
        assert!(parse_instant("2023/02/03", None, &config).is_err());
        assert!(parse_instant("2023-02-03", Some("7pm"), &config).is_err());
    }

    #[test]
    fn location_requires_valid_pair() {
        assert_eq!(location(None, None).unwrap(), None);
        assert!(location(Some(91.0), Some(0.0)).is_err());
        assert_eq!(
            location(Some(-33.87), Some(151.21)).unwrap(),
            Some(GeoLocation::new(-33.87, 151.21))
        );
    }

    #[test]
    fn parses_sky_with_negative_coordinates() {
        let cli = Cli::try_parse_from([
            "natal", "--json", "sky", "--date", "1990-01-01", "--lat", "40.7", "--lon", "-74.0",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Sky { lat, lon, .. } => {
                assert_eq!(lat, Some(40.7));
                assert_eq!(lon, Some(-74.0));
            }
            _ => panic!("expected sky"),
        }
    }

    #[test]
    fn lat_without_lon_rejected() {
        assert!(Cli::try_parse_from(["natal", "sky", "--date", "1990-01-01", "--lat", "1"]).is_err());
    }
}
