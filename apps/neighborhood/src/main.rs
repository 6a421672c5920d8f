//! neighborhood — report the city with the smallest neighborhood on a road.
//!
//! Reads a road file (length, city count, then one `position name` line per
//! city), lists the cities in file order, and prints the smallest
//! neighborhood size with the name of the city that owns it.
//!
//! Exit status: 0 on success, a per-kind code for loader failures (see
//! `road_core::ErrorKind::exit_code`), 1 for anything else.

mod report;


use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use road_analysis::analyze;
use road_core::{RoadError, RoadLimits, load_road_with};
use road_output::{CsvReportWriter, ReportWriter, rows_from_analysis};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "neighborhood", version, about = "Smallest city neighborhood on a road")]
struct Cli {
    /// Road file to read.
    #[arg(env = "NEIGHBORHOOD_FILE", default_value = "txt.txt")]
    file: PathBuf,

    /// Largest accepted road length.
    #[arg(long, default_value_t = RoadLimits::MAX_LENGTH)]
    max_length: u32,

    /// Largest accepted city count.
    #[arg(long, default_value_t = RoadLimits::MAX_CITIES)]
    max_cities: u32,

    /// Also write every city's neighborhood to this CSV file.
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Print a JSON document instead of text.
    #[arg(long)]
    json: bool,

    /// Skip the city listing in text mode.
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn limits(&self) -> Result<RoadLimits> {
        Ok(RoadLimits::new(
            RoadLimits::MIN_LENGTH,
            self.max_length,
            RoadLimits::MIN_CITIES,
            self.max_cities,
        )?)
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(exit_code(&e))
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let limits = cli.limits()?;
    let road = load_road_with(&cli.file, &limits)?;
    info!("loaded {} cities from {}", road.city_count(), cli.file.display());

    let listing = road.cities().to_vec();
    let analysis = analyze(road);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if cli.json {
        report::write_json(&mut out, &listing, &analysis)?;
    } else {
        if !cli.quiet {
            report::write_listing(&mut out, &listing)?;
        }
        report::write_summary(&mut out, &analysis)?;
    }
    out.flush()?;

    if let Some(path) = &cli.csv {
        write_csv(path, &analysis)
            .with_context(|| format!("writing report to {}", path.display()))?;
        info!("wrote neighborhood report to {}", path.display());
    }
    Ok(())
}

fn write_csv(path: &Path, analysis: &road_analysis::Analysis) -> Result<()> {
    let mut writer = CsvReportWriter::create(path)?;
    writer.write_rows(&rows_from_analysis(analysis))?;
    writer.finish()?;
    Ok(())
}

/// Loader failures map to their kind's code; everything else is 1.
fn exit_code(e: &anyhow::Error) -> u8 {
    e.downcast_ref::<RoadError>().map_or(1, |r| r.kind().exit_code())
}
