use clap::{Parser, Subcommand};
use hilal_core::{GeoLocation, body_altitude_deg, elongation_deg, lunar_position, solar_position};
use hilal_search::{
    ClassifierStrategy, FiqhMode, LocationOutcome, decide_month_start, evaluate_location,
    month_following, nearest_conjunction, next_conjunction,
};
use hilal_time::Instant;

#[derive(Parser)]
#[command(name = "hilal", about = "Crescent visibility and Hijri month-start CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Nearest and next solar-lunar conjunction around a date
    Conjunction {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
    },
    /// Evaluate crescent visibility for one location
    Visibility {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ); the conjunction searched
        /// from is the next one at or after this instant
        #[arg(long)]
        date: String,
        /// Latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: f64,
        /// Observer label for output
        #[arg(long, default_value = "observer")]
        name: String,
        /// Criterion: odeh (default) or elongation
        #[arg(long, default_value = "odeh")]
        criterion: String,
    },
    /// Decide when the next Hijri month starts over a set of locations
    MonthStart {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
        /// Observer location as name,lat,lon (repeatable, order matters)
        #[arg(long)]
        location: Vec<String>,
        /// Fiqh mode: global (default) or horizon-sharing
        #[arg(long, default_value = "global")]
        fiqh: String,
        /// Criterion: odeh (default) or elongation
        #[arg(long, default_value = "odeh")]
        criterion: String,
    },
}

fn parse_utc(s: &str) -> Result<Instant, String> {
    // Parse "YYYY-MM-DDThh:mm:ssZ" or "YYYY-MM-DDThh:mm:ss"
    let s = s.trim_end_matches('Z');
    let parts: Vec<&str> = s.split('T').collect();
    if parts.len() != 2 {
        return Err(format!("expected YYYY-MM-DDThh:mm:ssZ, got {s}"));
    }
    let date_parts: Vec<&str> = parts[0].split('-').collect();
    let time_parts: Vec<&str> = parts[1].split(':').collect();
    if date_parts.len() != 3 || time_parts.len() != 3 {
        return Err(format!("invalid date/time format: {s}"));
    }
    let year: i32 = date_parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = date_parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = date_parts[2].parse().map_err(|e| format!("{e}"))?;
    let hour: u32 = time_parts[0].parse().map_err(|e| format!("{e}"))?;
    let minute: u32 = time_parts[1].parse().map_err(|e| format!("{e}"))?;
    let second: f64 = time_parts[2].parse().map_err(|e| format!("{e}"))?;
    Ok(Instant::from_calendar(year, month, day, hour, minute, second))
}

fn require_utc(s: &str) -> Instant {
    parse_utc(s).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn parse_criterion(s: &str) -> ClassifierStrategy {
    match s.to_lowercase().as_str() {
        "odeh" | "q" => ClassifierStrategy::OdehQ,
        "elongation" | "thresholds" => ClassifierStrategy::ElongationAltitude,
        _ => {
            eprintln!("Invalid criterion: {s}");
            eprintln!("Valid: odeh (default), elongation");
            std::process::exit(1);
        }
    }
}

fn parse_fiqh(s: &str) -> FiqhMode {
    match s.to_lowercase().as_str() {
        "global" => FiqhMode::Global,
        "horizon-sharing" | "horizon" => FiqhMode::HorizonSharing,
        _ => {
            eprintln!("Invalid fiqh mode: {s}");
            eprintln!("Valid: global (default), horizon-sharing");
            std::process::exit(1);
        }
    }
}

fn parse_location(s: &str) -> GeoLocation {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        eprintln!("Invalid location '{s}': expected name,lat,lon");
        std::process::exit(1);
    }
    let lat: f64 = parts[1].trim().parse().unwrap_or_else(|e| {
        eprintln!("Invalid latitude '{}': {e}", parts[1]);
        std::process::exit(1);
    });
    let lon: f64 = parts[2].trim().parse().unwrap_or_else(|e| {
        eprintln!("Invalid longitude '{}': {e}", parts[2]);
        std::process::exit(1);
    });
    GeoLocation::new(parts[0].trim(), lat, lon).unwrap_or_else(|e| {
        eprintln!("Invalid location '{s}': {e}");
        std::process::exit(1);
    })
}

fn require_location(name: &str, lat: f64, lon: f64) -> GeoLocation {
    GeoLocation::new(name, lat, lon).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn print_outcome(outcome: &LocationOutcome) {
    match outcome {
        LocationOutcome::Sighting(r) => {
            let moon = lunar_position(r.sunset);
            let sun = solar_position(r.sunset);
            let moon_alt = body_altitude_deg(&moon, r.sunset, &r.location);
            let elong = elongation_deg(&sun, &moon).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });
            println!(
                "  {:<14} sunset {}  elong {:>6.2} deg  moon alt {:>6.2} deg  {}",
                r.location.name(),
                r.sunset,
                elong,
                moon_alt,
                r.category
            );
        }
        LocationOutcome::Unknown { location } => {
            println!(
                "  {:<14} no sunset in search window (polar): unknown",
                location.name()
            );
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Conjunction { date } => {
            let t = require_utc(&date);
            let nearest = nearest_conjunction(t);
            let next = next_conjunction(t);
            println!("Nearest conjunction: {nearest}");
            println!("Next conjunction:    {next}");
            println!("Month that begins:   {}", month_following(next).name());
        }

        Commands::Visibility {
            date,
            lat,
            lon,
            name,
            criterion,
        } => {
            let t = require_utc(&date);
            let strategy = parse_criterion(&criterion);
            let location = require_location(&name, lat, lon);
            let conjunction = next_conjunction(t);
            println!("Conjunction: {conjunction}");
            match evaluate_location(&location, conjunction, strategy) {
                Ok(outcome) => print_outcome(&outcome),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::MonthStart {
            date,
            location,
            fiqh,
            criterion,
        } => {
            let t = require_utc(&date);
            let strategy = parse_criterion(&criterion);
            let mode = parse_fiqh(&fiqh);
            if location.is_empty() {
                eprintln!("At least one --location name,lat,lon is required");
                std::process::exit(1);
            }
            let locations: Vec<GeoLocation> =
                location.iter().map(|s| parse_location(s)).collect();

            let conjunction = next_conjunction(t);
            let mut outcomes = Vec::with_capacity(locations.len());
            for loc in &locations {
                match evaluate_location(loc, conjunction, strategy) {
                    Ok(outcome) => outcomes.push(outcome),
                    Err(e) => {
                        eprintln!("Error evaluating {}: {e}", loc.name());
                        std::process::exit(1);
                    }
                }
            }

            println!("Conjunction: {conjunction}");
            println!("Locations:");
            for outcome in &outcomes {
                print_outcome(outcome);
            }
            match decide_month_start(conjunction, &outcomes, mode) {
                Ok(decision) => {
                    println!(
                        "{} begins {} ({} mode)",
                        decision.hijri_month.name(),
                        decision.predicted_start,
                        decision.fiqh_mode
                    );
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
