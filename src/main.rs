// =============================================================================
// state-paths - CLI Entry Point
// =============================================================================
// Table of Contents:
// 1. Arguments
// 2. Main Entry Point
// 3. Config Assembly
// =============================================================================

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use state_paths::{ComfortRange, Region, ReportStyle, TripConfig, TripPlanner};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// -----------------------------------------------------------------------------
// 1. Arguments
// -----------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(name = "state-paths")]
#[command(about = "Find road-trip orderings through bordering U.S. states that stay within a comfort range")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Trip configuration file (TOML); flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// NOAA state climatology file (name followed by 12 monthly means)
    #[arg(long)]
    climate: Option<PathBuf>,

    /// Comma-separated state codes, e.g. OR,WA,CA
    #[arg(long, value_delimiter = ',')]
    states: Vec<String>,

    /// Census region (NE, MW, S, W)
    #[arg(long)]
    region: Option<String>,

    /// Census division within the region (e.g. M, P, ENC)
    #[arg(long)]
    sub_region: Option<String>,

    /// Only paths starting in this state
    #[arg(long)]
    start: Option<String>,

    /// Only paths ending in this state
    #[arg(long)]
    end: Option<String>,

    /// Month the trip starts (1-12)
    #[arg(short, long)]
    month: Option<u32>,

    /// Year the trip starts (defaults to the current year)
    #[arg(long)]
    year: Option<i32>,

    /// Time spent in each state, e.g. "1 week" or "1 month"
    #[arg(short, long)]
    interval: Option<String>,

    /// Lowest acceptable average temperature
    #[arg(long)]
    min: Option<f64>,

    /// Highest acceptable average temperature
    #[arg(long)]
    max: Option<f64>,

    /// Per-state comfort range, CODE=MIN:MAX (repeatable)
    #[arg(long = "state-range")]
    state_ranges: Vec<String>,

    /// Stop after this many paths
    #[arg(long)]
    max_paths: Option<usize>,

    /// Show the temperature at each stop
    #[arg(long)]
    with_temps: bool,

    /// Show full state names instead of codes
    #[arg(long)]
    full_names: bool,

    /// Print the machine-readable report as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List region and sub-region codes with their states
    Regions,
}

// -----------------------------------------------------------------------------
// 2. Main Entry Point
// -----------------------------------------------------------------------------

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(Command::Regions) = args.command {
        print_regions();
        return Ok(());
    }

    let config = build_config(&args)?;
    let planner = TripPlanner::from_config(config).context("failed to set up planner")?;
    let started = std::time::Instant::now();
    let report = planner.plan()?;

    for issue in &report.issues {
        tracing::warn!("{}", issue);
    }
    if report.truncated {
        tracing::warn!("stopped after {} paths (max_paths)", report.candidates);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let style = ReportStyle { with_temperatures: args.with_temps, full_names: args.full_names };
        for line in report.lines(style) {
            println!("{}\n", line);
        }
    }

    tracing::info!(
        candidates = report.candidates,
        accepted = report.accepted(),
        "completed in {:.3}s",
        started.elapsed().as_secs_f64()
    );
    Ok(())
}

fn print_regions() {
    let registry = state_paths::Registry::global();
    for region in Region::ALL {
        println!("{} ({})", region.code(), region.name());
        for sub in region.sub_regions() {
            let states: Vec<&str> = registry
                .states_by_region(region, Some(*sub))
                .iter()
                .map(|s| s.code())
                .collect();
            println!("  {:<4}{:<20}{}", sub.code(), sub.name(), states.join(","));
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Config Assembly
// -----------------------------------------------------------------------------

fn build_config(args: &Args) -> Result<TripConfig> {
    let mut config = match &args.config {
        Some(path) => TripConfig::load(path)?,
        None => TripConfig::default(),
    };

    if args.climate.is_some() {
        config.climate_data = args.climate.clone();
    }
    if !args.states.is_empty() {
        config.selection.states = args.states.clone();
    }
    if args.region.is_some() {
        config.selection.region = args.region.clone();
        config.selection.sub_region = args.sub_region.clone();
    }
    if args.start.is_some() {
        config.start_state = args.start.clone();
    }
    if args.end.is_some() {
        config.end_state = args.end.clone();
    }
    if let Some(month) = args.month {
        config.start_month = month;
    }
    if args.year.is_some() {
        config.start_year = args.year;
    }
    if let Some(interval) = &args.interval {
        config.interval = interval.parse()?;
    }
    if args.min.is_some() || args.max.is_some() {
        config.comfort = ComfortRange {
            min: args.min.unwrap_or(config.comfort.min),
            max: args.max.unwrap_or(config.comfort.max),
        };
    }
    for entry in &args.state_ranges {
        let (code, range) = parse_state_range(entry)?;
        config.state_ranges.insert(code, range);
    }
    if args.max_paths.is_some() {
        config.max_paths = args.max_paths;
    }

    config.validate()?;
    if config.selection.states.is_empty() && config.selection.region.is_none() {
        bail!("no states selected: pass --states, --region or a config with a [selection]");
    }
    Ok(config)
}

/// Parses `NM=20:50`.
fn parse_state_range(spec: &str) -> Result<(String, ComfortRange)> {
    let (code, bounds) = spec.split_once('=').with_context(|| format!("expected CODE=MIN:MAX, got '{}'", spec))?;
    let (min, max) = bounds.split_once(':').with_context(|| format!("expected MIN:MAX, got '{}'", bounds))?;
    let range = ComfortRange::new(min.trim().parse()?, max.trim().parse()?)?;
    Ok((code.trim().to_ascii_uppercase(), range))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_state_range() {
        let (code, range) = parse_state_range("nm=20:50").unwrap();
        assert_eq!(code, "NM");
        assert_eq!(range, ComfortRange { min: 20.0, max: 50.0 });
        assert!(parse_state_range("NM").is_err());
        assert!(parse_state_range("NM=50:20").is_err());
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::parse_from([
            "state-paths", "--states", "OR,WA,CA", "--month", "4", "--interval", "1 month", "--min", "40",
            "--state-range", "CA=30:90",
        ]);
        let config = build_config(&args).unwrap();
        assert_eq!(config.selection.states, vec!["OR", "WA", "CA"]);
        assert_eq!(config.start_month, 4);
        assert_eq!(config.comfort, ComfortRange { min: 40.0, max: 105.0 });
        assert_eq!(config.state_ranges["CA"], ComfortRange { min: 30.0, max: 90.0 });
    }

    #[test]
    fn test_requires_a_selection() {
        let args = Args::parse_from(["state-paths"]);
        assert!(build_config(&args).is_err());
    }
}
