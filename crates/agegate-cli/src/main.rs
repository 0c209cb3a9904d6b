//! CLI entry point for agegate.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `agegate-app` crate.

use agegate_app::{
    BatchInput, BatchRequest, CheckInput, CheckRequest, ExplainOutput, decision_exit_code,
    format_explanation, run_batch, run_check, run_explain, run_features, run_regions,
    run_requirements, run_verify_catalog, serialize_json,
};
use agegate_settings::Overrides;
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use time::{Date, OffsetDateTime};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser, Debug)]
#[command(
    name = "agegate",
    version,
    about = "Age-based feature eligibility rules for child-directed apps"
)]
struct Cli {
    /// Path to agegate config TOML (a missing file means defaults).
    #[arg(long, global = true, default_value = "agegate.toml")]
    config: Utf8PathBuf,

    /// Override the lookahead window for upcoming unlocks, in years.
    #[arg(long, global = true)]
    horizon: Option<u32>,

    /// Override where Feb 29 birthdays land in common years.
    #[arg(long, global = true, value_enum)]
    leap_day: Option<LeapDay>,

    /// Leave upcoming unlocks out of results.
    #[arg(long, global = true)]
    no_upcoming: bool,

    /// Evaluation date (YYYY-MM-DD); defaults to the current UTC date.
    #[arg(long, global = true)]
    today: Option<String>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = Format::Json)]
    format: Format,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Md,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LeapDay {
    #[value(name = "feb28")]
    Feb28,
    #[value(name = "mar1")]
    Mar1,
}

impl LeapDay {
    fn as_str(self) -> &'static str {
        match self {
            LeapDay::Feb28 => "feb28",
            LeapDay::Mar1 => "mar1",
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decide whether one feature may be enabled. Exits 2 when restricted.
    Check {
        /// Region code (e.g. US, DE). Unknown regions use the default rules.
        #[arg(long)]
        region: String,
        /// Feature key (e.g. free_chat).
        #[arg(long)]
        feature: String,
        /// Date of birth (YYYY-MM-DD).
        #[arg(long)]
        dob: Option<String>,
        /// Age in whole years; must match --dob when both are given.
        #[arg(long)]
        age: Option<u32>,
    },

    /// Decide several features at once. Unknown features are skipped.
    Batch {
        #[arg(long)]
        region: String,
        /// Comma-separated feature keys.
        #[arg(long, value_delimiter = ',', required = true)]
        features: Vec<String>,
        #[arg(long)]
        dob: Option<String>,
        #[arg(long)]
        age: Option<u32>,
    },

    /// List regions with their regulatory references.
    Regions,

    /// List known features.
    Features,

    /// Show a feature's minimum ages across regions.
    Requirements {
        /// Feature key.
        feature: String,
    },

    /// Explain a region code or feature key.
    Explain {
        /// Region code (e.g. "DE") or feature key (e.g. "ai_chat").
        identifier: String,
    },

    /// Cross-check rule tables against metadata. Exits 2 when issues are found.
    VerifyCatalog,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let code = match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("agegate error: {err:#}");
            1
        }
    };
    std::process::exit(code);
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "agegate=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.cmd {
        Commands::Check {
            region,
            feature,
            dob,
            age,
        } => cmd_check(
            cli,
            CheckRequest {
                date_of_birth: dob.clone(),
                age: *age,
                region: region.clone(),
                feature: feature.clone(),
            },
        ),
        Commands::Batch {
            region,
            features,
            dob,
            age,
        } => cmd_batch(
            cli,
            BatchRequest {
                date_of_birth: dob.clone(),
                age: *age,
                region: region.clone(),
                features: features.clone(),
            },
        ),
        Commands::Regions => {
            let regions = run_regions();
            emit(cli.format, &regions, || agegate_app::render_regions(&regions))?;
            Ok(0)
        }
        Commands::Features => {
            let features = run_features();
            emit(cli.format, &features, || agegate_app::render_features(&features))?;
            Ok(0)
        }
        Commands::Requirements { feature } => {
            let req = run_requirements(feature)?;
            emit(cli.format, &req, || agegate_app::render_requirements(&req))?;
            Ok(0)
        }
        Commands::Explain { identifier } => cmd_explain(identifier),
        Commands::VerifyCatalog => {
            let out = run_verify_catalog();
            emit(cli.format, &out, || {
                agegate_app::render_catalog_issues(&out.catalog_version, &out.issues)
            })?;
            Ok(if out.issues.is_empty() { 0 } else { 2 })
        }
    }
}

fn cmd_check(cli: &Cli, request: CheckRequest) -> anyhow::Result<i32> {
    let config_text = read_config(&cli.config)?;
    let output = run_check(CheckInput {
        request,
        config_text: &config_text,
        overrides: overrides(cli),
        today: today(cli)?,
    })?;

    let report = &output.report;
    emit(cli.format, report, || agegate_app::render_check(report))?;
    Ok(decision_exit_code(report.result.decision.allowed))
}

fn cmd_batch(cli: &Cli, request: BatchRequest) -> anyhow::Result<i32> {
    let config_text = read_config(&cli.config)?;
    let output = run_batch(BatchInput {
        request,
        config_text: &config_text,
        overrides: overrides(cli),
        today: today(cli)?,
    })?;

    let report = &output.report;
    emit(cli.format, report, || agegate_app::render_batch(report))?;
    Ok(0)
}

fn cmd_explain(identifier: &str) -> anyhow::Result<i32> {
    let output = run_explain(identifier);
    if matches!(output, ExplainOutput::NotFound { .. }) {
        eprint!("{}", format_explanation(&output));
        return Ok(1);
    }
    print!("{}", format_explanation(&output));
    Ok(0)
}

fn overrides(cli: &Cli) -> Overrides {
    Overrides {
        horizon_years: cli.horizon,
        leap_day: cli.leap_day.map(|l| l.as_str().to_string()),
        no_upcoming: cli.no_upcoming,
    }
}

fn today(cli: &Cli) -> anyhow::Result<Date> {
    match cli.today.as_deref() {
        Some(s) => agegate_types::parse_iso_date(s)
            .with_context(|| format!("invalid --today date: {s} (expected YYYY-MM-DD)")),
        None => Ok(OffsetDateTime::now_utc().date()),
    }
}

/// Load config if present; a missing file is allowed (defaults apply).
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(err).with_context(|| format!("read config: {}", path)),
    }
}

fn emit<T: serde::Serialize>(
    format: Format,
    value: &T,
    markdown: impl FnOnce() -> String,
) -> anyhow::Result<()> {
    let data = match format {
        Format::Json => serialize_json(value)?,
        Format::Md => markdown().into_bytes(),
    };
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&data).context("write output")?;
    stdout.flush().context("flush output")?;
    Ok(())
}
