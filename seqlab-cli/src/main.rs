//! SeqLab CLI — sequence-outcome analysis from the terminal.
//!
//! Commands:
//! - `analyze` — run one scenario from flags, or one/two from a TOML config
//! - `options` — list the distinct filter values a dataset offers
//! - `validate` — check a CSV against its instrument layout

mod report;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

use seqlab_core::config::{AnalysisConfig, ScenarioSpec};
use seqlab_core::data::{
    demo_dataset, load_dataset, Dataset, FilterOptions, Instrument, ALL_SENTINEL,
};
use seqlab_core::query::{compare, run_scenario, Comparison, ScenarioReport};

#[derive(Parser)]
#[command(name = "seqlab", about = "SeqLab CLI — sequence outcome analyzer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one scenario from flags, or one/two scenarios from a TOML config.
    Analyze {
        /// Path to a TOML analysis config (mutually exclusive with the
        /// inline scenario flags).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Dataset CSV path.
        #[arg(long)]
        data: Option<PathBuf>,

        /// Instrument code: CL or ES.
        #[arg(long)]
        instrument: Option<String>,

        /// Required start point label, e.g. "OpenHigh (Green)".
        #[arg(long)]
        start_point: Option<String>,

        /// Required position/session label, e.g. "High/Asia".
        #[arg(long)]
        position: Option<String>,

        /// Optional weekday filter ("All" or omit for no constraint).
        #[arg(long)]
        day: Option<String>,

        /// Optional ADR model filter.
        #[arg(long)]
        adr: Option<String>,

        /// Optional ODR model filter.
        #[arg(long)]
        odr: Option<String>,

        /// Use the deterministic synthetic demo dataset instead of a CSV.
        #[arg(long, default_value_t = false)]
        synthetic: bool,

        /// Emit the result bundle as JSON instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List the distinct filter option values a dataset offers.
    Options {
        /// Dataset CSV path.
        #[arg(long)]
        data: Option<PathBuf>,

        /// Instrument code: CL or ES.
        #[arg(long)]
        instrument: String,

        /// Use the synthetic demo dataset instead of a CSV.
        #[arg(long, default_value_t = false)]
        synthetic: bool,
    },
    /// Check a CSV against its instrument layout and report provenance.
    Validate {
        /// Dataset CSV path.
        #[arg(long)]
        data: PathBuf,

        /// Instrument code: CL or ES.
        #[arg(long)]
        instrument: String,
    },
}

/// JSON output bundle for `analyze --json`.
#[derive(Serialize)]
struct AnalysisOutput {
    instrument: Instrument,
    fingerprint: String,
    scenario1: Option<ScenarioReport>,
    scenario2: Option<ScenarioReport>,
    comparison: Option<Comparison>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            config,
            data,
            instrument,
            start_point,
            position,
            day,
            adr,
            odr,
            synthetic,
            json,
        } => run_analyze(
            config, data, instrument, start_point, position, day, adr, odr, synthetic, json,
        ),
        Commands::Options {
            data,
            instrument,
            synthetic,
        } => run_options(data, &instrument, synthetic),
        Commands::Validate { data, instrument } => run_validate(&data, &instrument),
    }
}

fn parse_instrument(code: &str) -> Result<Instrument> {
    Instrument::parse(code)
        .with_context(|| format!("unknown instrument '{code}' (expected one of: CL, ES)"))
}

fn resolve_dataset(
    data: Option<&Path>,
    instrument: Instrument,
    synthetic: bool,
) -> Result<Dataset> {
    match data {
        Some(path) => {
            if synthetic {
                bail!("--data and --synthetic are mutually exclusive");
            }
            Ok(load_dataset(path, instrument)?)
        }
        None => {
            if !synthetic {
                bail!("one of --data or --synthetic is required");
            }
            eprintln!("WARNING: using synthetic demo data for {instrument}");
            Ok(demo_dataset(instrument, 1_000))
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn run_analyze(
    config_path: Option<PathBuf>,
    data: Option<PathBuf>,
    instrument: Option<String>,
    start_point: Option<String>,
    position: Option<String>,
    day: Option<String>,
    adr: Option<String>,
    odr: Option<String>,
    synthetic: bool,
    json: bool,
) -> Result<()> {
    let inline_flags = start_point.is_some() || position.is_some();
    if config_path.is_some() && inline_flags {
        bail!("--config and inline scenario flags are mutually exclusive");
    }

    let (instrument, dataset, spec1, spec2) = if let Some(path) = config_path {
        let config = AnalysisConfig::from_file(&path)?;
        let instrument = config.data.instrument()?;
        let data_path = data.unwrap_or(config.data.path.clone());
        let dataset = resolve_dataset(Some(data_path.as_path()), instrument, synthetic)?;
        (instrument, dataset, config.scenario1, config.scenario2)
    } else {
        let code = instrument
            .as_deref()
            .context("--instrument is required without --config")?;
        let instrument = parse_instrument(code)?;
        let spec = ScenarioSpec {
            start_point: start_point.context("--start-point is required without --config")?,
            position_type: position.context("--position is required without --config")?,
            day,
            adr_model: adr,
            odr_model: odr,
        };
        let dataset = resolve_dataset(data.as_deref(), instrument, synthetic)?;
        (instrument, dataset, spec, None)
    };

    let criteria1 = spec1.to_criteria()?;
    let report1 = run_scenario(&dataset, &criteria1);

    let (criteria2, report2) = match &spec2 {
        Some(spec) => {
            let criteria = spec.to_criteria()?;
            let report = run_scenario(&dataset, &criteria);
            (Some(criteria), report)
        }
        None => (None, None),
    };

    let comparison = if spec2.is_some() {
        compare(
            report1.as_ref().map(|r| r.total_count).unwrap_or(0),
            report2.as_ref().map(|r| r.total_count).unwrap_or(0),
        )
    } else {
        None
    };

    if json {
        let output = AnalysisOutput {
            instrument,
            fingerprint: dataset.fingerprint().to_string(),
            scenario1: report1,
            scenario2: report2,
            comparison,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_header(&dataset);
    print!("{}", report::scenario_block("Scenario 1", &criteria1, report1.as_ref()));
    if let Some(criteria2) = &criteria2 {
        println!();
        print!("{}", report::scenario_block("Scenario 2", criteria2, report2.as_ref()));
        println!();
        print!("{}", report::comparison_block(comparison.as_ref()));
    }

    Ok(())
}

fn run_options(data: Option<PathBuf>, instrument: &str, synthetic: bool) -> Result<()> {
    let instrument = parse_instrument(instrument)?;
    let dataset = resolve_dataset(data.as_deref(), instrument, synthetic)?;
    let options = FilterOptions::from_dataset(&dataset);

    print_header(&dataset);
    print_list("Start points", &options.start_points, false);
    print_list("Position types", &options.position_types, false);
    let weekdays: Vec<String> = options.weekdays.iter().map(|d| d.to_string()).collect();
    print_list("Days", &weekdays, true);
    print_list("ADR models", &options.adr_models, true);
    print_list("ODR models", &options.odr_models, true);
    print_list("RDR models", &options.rdr_models, false);

    Ok(())
}

fn run_validate(data: &Path, instrument: &str) -> Result<()> {
    let instrument = parse_instrument(instrument)?;
    let layout = instrument.layout();

    let dataset = load_dataset(data, instrument)
        .with_context(|| format!("'{}' does not match the {} layout", data.display(), instrument))?;

    println!("File:         {}", data.display());
    println!(
        "Layout:       {} ({} columns, {} banner line(s))",
        layout.name,
        layout.column_count(),
        layout.banner_rows
    );
    println!("Rows loaded:  {}", dataset.len());
    println!("Rows skipped: {}", dataset.skipped_rows());
    println!("Fingerprint:  {}", dataset.fingerprint());

    Ok(())
}

fn print_header(dataset: &Dataset) {
    println!(
        "Dataset: {} ({}) — {} rows, {} skipped",
        dataset.instrument(),
        dataset.instrument().display_name(),
        dataset.len(),
        dataset.skipped_rows()
    );
    println!();
}

fn print_list(label: &str, values: &[String], with_all: bool) {
    println!("{label}:");
    if with_all {
        println!("  {ALL_SENTINEL}");
    }
    for value in values {
        println!("  {value}");
    }
    println!();
}
