use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use stringsight::analysis::{analyze_table, compare};
use stringsight::config::AnalyzerConfig;
use stringsight::data::loader;
use stringsight::report;

/// Batch performance analyzer for solar PV string telemetry.
#[derive(Debug, Parser)]
#[command(name = "stringsight", version, about)]
struct Cli {
    /// CSV with the live (e.g. hourly) telemetry
    live: PathBuf,

    /// CSV with the baseline/reference telemetry
    baseline: PathBuf,

    /// Optional TOML config file (CLI flags below override it)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Shortfall percentage above which the run is underperforming
    #[arg(long)]
    error_threshold: Option<f64>,

    /// Raw reading treated as the disconnection sentinel
    #[arg(long)]
    disconnection_value: Option<f64>,

    /// Multiplier applied to the row dispersion for the threshold test
    #[arg(long)]
    threshold_multiplier: Option<f64>,
}

impl Cli {
    fn build_config(&self) -> Result<AnalyzerConfig> {
        let mut cfg = match &self.config {
            Some(path) => AnalyzerConfig::from_file(path)?,
            None => AnalyzerConfig::default(),
        };
        if let Some(v) = self.error_threshold {
            cfg.error_threshold = v;
        }
        if let Some(v) = self.disconnection_value {
            cfg.disconnection_value = v;
        }
        if let Some(v) = self.threshold_multiplier {
            cfg.threshold_multiplier = v;
        }
        Ok(cfg)
    }
}

fn main() -> Result<()> {
    // Disconnection alerts are logged at warn; show them unless RUST_LOG
    // says otherwise.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let cfg = cli.build_config()?;

    // If either dataset fails to load, the whole comparison is skipped: a
    // one-sided comparison is meaningless, and no partial report is
    // emitted for a failed run.
    let live_table = loader::load_csv(&cli.live)
        .with_context(|| format!("live dataset {}", cli.live.display()))?;
    let baseline_table = loader::load_csv(&cli.baseline)
        .with_context(|| format!("baseline dataset {}", cli.baseline.display()))?;

    // Independent runs with fresh tracker state each.
    let live = analyze_table(&live_table, &cfg);
    let baseline = analyze_table(&baseline_table, &cfg);

    let verdict = compare::classify(&live, baseline.grand_total, cfg.error_threshold);

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating report file {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };
    report::write_report(&mut out, &live, &verdict, &cfg).context("writing report")?;
    out.flush().context("flushing report")?;

    Ok(())
}
