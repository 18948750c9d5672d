use clap::{Parser, Subcommand};
use kala_ephem::{GeoLocation, LowPrecisionEphemeris, RiseSetConfig, vedic_day_for_date};
use kala_search::{
    AngleProvider, BoundaryEvent, LunarPhase, PanchangaConfig, PanchangaResult, SearchDirection, SynodicConfig,
    SynodicRoot, VedicDay, compute_panchanga, find_lunar_phase,
};
use kala_time::UtcTime;
use kala_vedic_base::{
    AyanamshaSystem, Karana, Nakshatra, SpecialWindows, Tithi, TimeWindow, Yoga,
    nakshatra_from_longitude, normalize_360, special_windows, tithi_from_elongation,
    vaar_from_local_jd,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kala", about = "Panchanga calculator (analytic ephemeris)")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full panchanga for a civil date at a location
    Panchanga {
        /// Civil date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Altitude in meters
        #[arg(long, default_value = "0")]
        alt: f64,
        /// Ayanamsha system (lahiri, kp, raman, fagan-bradley, yukteshwar)
        #[arg(long, default_value = "lahiri")]
        ayanamsha: String,
        /// Also compute end times and all boundaries within the day
        #[arg(long)]
        end_times: bool,
        /// Samples per day for end-time detection
        #[arg(long, default_value = "25")]
        samples: usize,
    },
    /// Find the next (or previous) new moon
    NewMoon {
        /// UTC datetime (YYYY-MM-DD[Thh:mm:ss[Z]])
        #[arg(long)]
        date: String,
        /// Search backward instead of forward
        #[arg(long)]
        prev: bool,
    },
    /// Find the next (or previous) full moon
    FullMoon {
        /// UTC datetime (YYYY-MM-DD[Thh:mm:ss[Z]])
        #[arg(long)]
        date: String,
        /// Search backward instead of forward
        #[arg(long)]
        prev: bool,
    },
    /// Rahu Kalam, Yamaganda, Gulika Kalam and Abhijit for a date
    Windows {
        /// Civil date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        #[arg(long, default_value = "0")]
        alt: f64,
    },
    /// Tithi at an instant
    Tithi {
        /// UTC datetime (YYYY-MM-DD[Thh:mm:ss[Z]])
        #[arg(long)]
        date: String,
    },
    /// Moon's nakshatra at an instant
    Nakshatra {
        /// UTC datetime (YYYY-MM-DD[Thh:mm:ss[Z]])
        #[arg(long)]
        date: String,
        /// Ayanamsha system
        #[arg(long, default_value = "lahiri")]
        ayanamsha: String,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_with(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

fn parse_utc(s: &str) -> UtcTime {
    s.parse::<UtcTime>()
        .unwrap_or_else(|e| exit_with(format!("invalid date '{s}': {e}")))
}

fn require_aya_system(name: &str) -> AyanamshaSystem {
    AyanamshaSystem::from_name(name).unwrap_or_else(|| {
        let known: Vec<&str> = AyanamshaSystem::all().iter().map(|s| s.name()).collect();
        exit_with(format!(
            "unknown ayanamsha '{name}' (known: {})",
            known.join(", ")
        ))
    })
}

fn require_day(date: &str, location: &GeoLocation) -> (UtcTime, VedicDay) {
    let utc = parse_utc(date);
    match vedic_day_for_date(utc.year, utc.month, utc.day, location, &RiseSetConfig::default()) {
        Ok(day) => (utc, day),
        Err(e) => exit_with(e),
    }
}

fn fmt_date(utc: &UtcTime) -> String {
    format!("{:04}-{:02}-{:02}", utc.year, utc.month, utc.day)
}

/// Latitude/longitude with hemisphere letters, e.g. `40.7128N, 74.0060W`.
fn fmt_coords(lat: f64, lon: f64) -> String {
    let ns = if lat < 0.0 { 'S' } else { 'N' };
    let ew = if lon < 0.0 { 'W' } else { 'E' };
    format!("{:.4}{ns}, {:.4}{ew}", lat.abs(), lon.abs())
}

fn fmt_jd(jd: f64) -> String {
    UtcTime::from_jd(jd).to_string()
}

fn fmt_end(end: Option<f64>) -> String {
    end.map_or_else(|| "after next sunrise".to_string(), fmt_jd)
}

fn print_events(events: &[BoundaryEvent], name_of: impl Fn(u8) -> &'static str) {
    for ev in events {
        println!(
            "    {:<16} ends {}",
            name_of(ev.period_index),
            fmt_jd(ev.crossing_jd_utc)
        );
    }
}

fn print_window(label: &str, w: &TimeWindow) {
    println!("{label:<13} {}  ->  {}", fmt_jd(w.start_jd), fmt_jd(w.end_jd));
}

fn print_windows(windows: &SpecialWindows) {
    print_window("Rahu Kalam:", &windows.rahu_kalam);
    print_window("Yamaganda:", &windows.yamaganda);
    print_window("Gulika Kalam:", &windows.gulika_kalam);
    print_window("Abhijit:", &windows.abhijit);
}

fn print_panchanga(r: &PanchangaResult, end_times: bool) {
    println!("Sunrise:      {}", fmt_jd(r.day.sunrise_jd));
    println!("Sunset:       {}", fmt_jd(r.day.sunset_jd));
    println!("Next sunrise: {}\n", fmt_jd(r.day.next_sunrise_jd));

    println!("Vaar:      {}", r.vaar.name());
    println!(
        "Tithi:     {} {} (index {})",
        r.tithi.paksha.name(),
        r.tithi.tithi.name(),
        r.tithi.tithi_index
    );
    if end_times {
        println!("  End:     {}", fmt_end(r.tithi.end_jd));
        print_events(&r.tithi.events, |i| Tithi::from_index(i).name());
    }
    println!(
        "Nakshatra: {} (index {}, pada {})",
        r.nakshatra.nakshatra.name(),
        r.nakshatra.nakshatra_index,
        r.nakshatra.pada
    );
    if end_times {
        println!("  End:     {}", fmt_end(r.nakshatra.end_jd));
        print_events(&r.nakshatra.events, |i| Nakshatra::from_index(i).name());
    }
    println!("Yoga:      {} (index {})", r.yoga.yoga.name(), r.yoga.yoga_index);
    if end_times {
        println!("  End:     {}", fmt_end(r.yoga.end_jd));
        print_events(&r.yoga.events, |i| Yoga::from_index(i).name());
    }
    let bhadra = if r.karana.karana.is_vishti() { " [Bhadra]" } else { "" };
    println!(
        "Karana:    {} (sequence {}){bhadra}",
        r.karana.karana.name(),
        r.karana.karana_index
    );
    if end_times {
        println!("  End:     {}", fmt_end(r.karana.end_jd));
        print_events(&r.karana.events, |i| Karana::from_index(i).name());
    }
    let adhika = if r.masa.adhika { "Adhika " } else { "" };
    println!("Masa:      {adhika}{}", r.masa.masa.name());
    println!(
        "  New moons: {}  ->  {}\n",
        fmt_jd(r.masa.start_jd),
        fmt_jd(r.masa.end_jd)
    );
    print_windows(&r.windows);
}

fn print_root(label: &str, root: &SynodicRoot) {
    println!("{label}: {}", fmt_jd(root.jd_utc));
    println!(
        "  JD {:.6}  residual {:.2e} deg  iterations {}{}",
        root.jd_utc,
        root.residual_deg,
        root.iterations,
        if root.converged { "" } else { "  (not converged)" }
    );
}

fn lunar_phase_command(date: &str, prev: bool, phase: LunarPhase) {
    let utc = parse_utc(date);
    if let Err(e) = utc.validate() {
        exit_with(e);
    }
    let ephem = LowPrecisionEphemeris::tropical();
    let direction = if prev {
        SearchDirection::Backward
    } else {
        SearchDirection::Forward
    };
    match find_lunar_phase(&ephem, utc.to_jd(), phase, direction, &SynodicConfig::default()) {
        Ok(root) => {
            let which = if prev { "Previous" } else { "Next" };
            print_root(&format!("{which} {}", phase.name()), &root);
        }
        Err(e) => exit_with(e),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Panchanga {
            date,
            lat,
            lon,
            alt,
            ayanamsha,
            end_times,
            samples,
        } => {
            let ephem = LowPrecisionEphemeris::sidereal(require_aya_system(&ayanamsha));
            let location = GeoLocation::new(lat, lon, alt);
            let (utc, day) = require_day(&date, &location);
            let config = if end_times {
                PanchangaConfig::with_end_times(samples)
            } else {
                PanchangaConfig::default()
            };
            match compute_panchanga(&ephem, &day, &config) {
                Ok(r) => {
                    println!(
                        "Panchanga for {} at {} ({})\n",
                        fmt_date(&utc),
                        fmt_coords(lat, lon),
                        ephem.frame_name()
                    );
                    print_panchanga(&r, end_times);
                }
                Err(e) => exit_with(e),
            }
        }

        Commands::NewMoon { date, prev } => lunar_phase_command(&date, prev, LunarPhase::NewMoon),

        Commands::FullMoon { date, prev } => {
            lunar_phase_command(&date, prev, LunarPhase::FullMoon)
        }

        Commands::Windows {
            date,
            lat,
            lon,
            alt,
        } => {
            let location = GeoLocation::new(lat, lon, alt);
            let (utc, day) = require_day(&date, &location);
            let vaar = vaar_from_local_jd(day.sunrise_jd, day.longitude_deg);
            println!(
                "{} ({}) at {}\n",
                fmt_date(&utc),
                vaar.name(),
                fmt_coords(lat, lon)
            );
            print_windows(&special_windows(day.sunrise_jd, day.sunset_jd, vaar));
        }

        Commands::Tithi { date } => {
            let utc = parse_utc(&date);
            let ephem = LowPrecisionEphemeris::tropical();
            match ephem.sun_moon_at(utc.to_jd()) {
                Ok(sm) => {
                    let elongation = normalize_360(sm.moon_lon_deg - sm.sun_lon_deg);
                    let pos = tithi_from_elongation(elongation);
                    println!(
                        "{} {} (index {}, {} of paksha) - {:.4} deg into tithi, elongation {:.4} deg",
                        pos.paksha.name(),
                        pos.tithi.name(),
                        pos.tithi_index,
                        pos.tithi_in_paksha,
                        pos.degrees_in_tithi,
                        elongation
                    );
                }
                Err(e) => exit_with(e),
            }
        }

        Commands::Nakshatra { date, ayanamsha } => {
            let utc = parse_utc(&date);
            let ephem = LowPrecisionEphemeris::sidereal(require_aya_system(&ayanamsha));
            match ephem.moon_longitude_deg(utc.to_jd()) {
                Ok(lon) => {
                    let info = nakshatra_from_longitude(lon);
                    println!(
                        "{} (index {}) - Pada {} ({:.4} deg in nakshatra, Moon {:.4} deg {})",
                        info.nakshatra.name(),
                        info.nakshatra.index(),
                        info.pada,
                        info.degrees_in_nakshatra,
                        lon,
                        ephem.frame_name()
                    );
                }
                Err(e) => exit_with(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coords_use_hemisphere_letters() {
        assert_eq!(fmt_coords(28.6139, 77.209), "28.6139N, 77.2090E");
        assert_eq!(fmt_coords(40.7128, -74.006), "40.7128N, 74.0060W");
        assert_eq!(fmt_coords(-33.8688, 151.2093), "33.8688S, 151.2093E");
        assert_eq!(fmt_coords(0.0, 0.0), "0.0000N, 0.0000E");
    }

    #[test]
    fn end_falls_back_after_next_sunrise() {
        assert_eq!(fmt_end(None), "after next sunrise");
        assert_eq!(fmt_end(Some(2_460_320.5)), "2024-01-11T00:00:00Z");
    }
}
