//! Fleet feed reconciler service binary.
//!
//! Loads configuration, initializes tracing, and executes one reconciliation
//! run: generate today's batch, reconcile it against yesterday's snapshot,
//! emit the categorized record sets, and persist the merged snapshot.

use chrono::NaiveDate;
use clap::Parser;
use fleet_config::shared::ReconcilerConfig;
use fleet_telemetry::tracing::init_tracing;
use tracing::error;

use crate::core::run_reconciler_with_config;
use crate::error::{ReconcilerError, ReconcilerResult};

mod core;
mod error;

/// Expected format of the `--run-date` argument.
const RUN_DATE_FORMAT: &str = "%Y-%m-%d";

/// Reconciles the daily fleet feed against yesterday's snapshot.
#[derive(Parser, Debug)]
#[command(name = "fleet-reconciler")]
#[command(about = "Reconciles the daily fleet feed against yesterday's snapshot")]
struct Args {
    /// Number of records to generate for today's batch (overrides config)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100_000))]
    records: Option<u32>,

    /// Run date as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    run_date: Option<String>,

    /// Seed for the synthetic record source (entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

/// Entry point for the reconciler service.
///
/// Argument and configuration validation happen before the runtime starts, so
/// an invalid invocation never begins a run.
fn main() -> ReconcilerResult<()> {
    let args = Args::parse();

    let mut config =
        fleet_config::load_config::<ReconcilerConfig>().map_err(ReconcilerError::config)?;
    if let Some(records) = args.records {
        config.pipeline.batch.new_records = records as usize;
    }
    config.validate().map_err(ReconcilerError::config)?;

    let run_date = resolve_run_date(args.run_date.as_deref())?;

    init_tracing(env!("CARGO_BIN_NAME")).map_err(ReconcilerError::config)?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async_main(config, run_date, args.seed))?;

    Ok(())
}

/// Main async entry point that runs the reconciliation pipeline.
async fn async_main(
    config: ReconcilerConfig,
    run_date: NaiveDate,
    seed: Option<u64>,
) -> ReconcilerResult<()> {
    if let Err(err) = run_reconciler_with_config(config, run_date, seed).await {
        error!("{}: {err}", err.category());
        return Err(err);
    }

    Ok(())
}

/// Parses the run date argument, defaulting to today.
fn resolve_run_date(raw: Option<&str>) -> ReconcilerResult<NaiveDate> {
    match raw {
        Some(raw) => NaiveDate::parse_from_str(raw, RUN_DATE_FORMAT).map_err(|err| {
            ReconcilerError::InvalidArgument(format!("invalid run date `{raw}`: {err}"))
        }),
        None => Ok(chrono::Utc::now().date_naive()),
    }
}
