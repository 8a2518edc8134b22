use std::net::SocketAddr;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use staff_cost_engine::api::{AppState, create_router};
use staff_cost_engine::config::{PolicyLoader, PolicyRates};
use staff_cost_engine::error::EngineError;
use staff_cost_engine::ingest::read_staff_file;
use staff_cost_engine::report::{render_comparison_run, render_scenario};
use staff_cost_engine::scenario::{Scenario, ScenarioComparison, ScenarioSummary};
use staff_cost_engine::telemetry::{self, TelemetryError};
use thiserror::Error;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "staff-cost",
    about = "Cost a staff list on a date and compare what-if scenarios",
    version
)]
struct Cli {
    /// YAML policy file overriding the built-in NI and pension rates
    #[arg(long, global = true)]
    policy: Option<PathBuf>,
    /// Log level or filter directive, overridden by STAFF_COST_LOG
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the cost report for a staff file on one date
    Report(ReportArgs),
    /// Compare the staff file on a base date against another date
    Compare(CompareArgs),
    /// Start the HTTP service
    Serve(ServeArgs),
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// Staff CSV file
    #[arg(long)]
    staff: PathBuf,
    /// Evaluation date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    date: NaiveDate,
    /// Scenario label
    #[arg(long, default_value = "Scenario")]
    name: String,
    /// Print JSON instead of the text report
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct CompareArgs {
    /// Staff CSV file
    #[arg(long)]
    staff: PathBuf,
    /// Base scenario date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    base_date: NaiveDate,
    /// Compared scenario date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    date: NaiveDate,
    /// Base scenario label
    #[arg(long, default_value = "Base")]
    base_name: String,
    /// Compared scenario label
    #[arg(long, default_value = "Scenario")]
    name: String,
    /// Print JSON instead of the text report
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "STAFF_COST_HOST", default_value = "127.0.0.1")]
    host: String,
    /// Port to bind
    #[arg(long, env = "STAFF_COST_PORT", default_value_t = 8080)]
    port: u16,
}

/// JSON output of `compare`: both scenarios, then the comparison.
#[derive(Debug, Serialize)]
struct ComparisonRun {
    base: ScenarioSummary,
    scenario: ScenarioSummary,
    comparison: ScenarioComparison,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("invalid listen address '{0}'")]
    Address(String),
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("staff-cost: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), CliError> {
    let cli = Cli::parse();
    telemetry::init(&cli.log_level)?;

    let policy = PolicyLoader::load_or_default(cli.policy.as_ref())?.into_rates();

    match cli.command {
        Command::Report(args) => run_report(args, &policy),
        Command::Compare(args) => run_compare(args, &policy),
        Command::Serve(args) => run_server(args, policy).await,
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn run_report(args: ReportArgs, policy: &PolicyRates) -> Result<(), CliError> {
    let staff = read_staff_file(&args.staff)?;
    let mut scenario = Scenario::new(args.name, &staff, args.date);
    scenario.evaluate(policy)?;

    if args.json {
        print_json(&scenario.summary()?)
    } else {
        print!("{}", render_scenario(&scenario)?);
        Ok(())
    }
}

fn run_compare(args: CompareArgs, policy: &PolicyRates) -> Result<(), CliError> {
    let staff = read_staff_file(&args.staff)?;

    let mut base = Scenario::new(args.base_name, &staff, args.base_date);
    let mut scenario = Scenario::new(args.name, &staff, args.date);
    base.evaluate(policy)?;
    scenario.evaluate(policy)?;
    let comparison = scenario.compare_with(&base)?;

    if args.json {
        print_json(&ComparisonRun {
            base: base.summary()?,
            scenario: scenario.summary()?,
            comparison,
        })
    } else {
        print!("{}", render_comparison_run(&scenario, &base, &comparison)?);
        Ok(())
    }
}

async fn run_server(args: ServeArgs, policy: PolicyRates) -> Result<(), CliError> {
    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|_| CliError::Address(format!("{}:{}", args.host, args.port)))?;

    let app = create_router(AppState::new(policy));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(%addr, "staff cost service listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
