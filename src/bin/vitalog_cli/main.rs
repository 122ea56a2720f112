// ABOUTME: Vitalog CLI - log today's health data and inspect scores, trends and history
// ABOUTME: Drives the health data service against file or in-memory storage, printing JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Record or update today's log
//! vitalog-cli log --steps 9500 --water 2.2 --sleep 7.5 --heart-rate 64 --mood 4
//!
//! # Overall score and per-metric breakdown for today
//! vitalog-cli dashboard
//!
//! # Week-over-week trends (needs at least 8 logs)
//! vitalog-cli trend
//!
//! # Seven-day step chart with average
//! vitalog-cli history --metric steps
//!
//! # Populate 30 days of demo data in a scratch directory
//! vitalog-cli --data-dir /tmp/vitalog seed-demo --days 30
//! ```

mod commands;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use vitalog::cache::QueryCache;
use vitalog::config::{AppConfig, StorageBackend};
use vitalog::logging::LoggingConfig;
use vitalog::service::HealthDataService;
use vitalog::store::{HealthLogRepository, InMemoryHealthLogStore, JsonFileHealthLogStore};
use vitalog_intelligence::ChartMetric;

#[derive(Parser)]
#[command(
    name = "vitalog-cli",
    about = "Vitalog daily health log",
    long_about = "Record daily health measurements and inspect scores, recommendations, trends and history."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory override (default: VITALOG_DATA_DIR or the platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Keep logs in memory only for this invocation
    #[arg(long, global = true)]
    memory: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Measurement flags for `log`; unset flags keep the stored value
#[derive(clap::Args, Default)]
struct LogFields {
    /// Step count
    #[arg(long)]
    steps: Option<u32>,
    /// Water intake in liters
    #[arg(long)]
    water: Option<f64>,
    /// Sleep duration in hours
    #[arg(long)]
    sleep: Option<f64>,
    /// Resting heart rate in bpm
    #[arg(long)]
    heart_rate: Option<u32>,
    /// Weight in kg
    #[arg(long)]
    weight: Option<f64>,
    /// Systolic blood pressure in mmHg
    #[arg(long)]
    systolic: Option<u32>,
    /// Diastolic blood pressure in mmHg
    #[arg(long)]
    diastolic: Option<u32>,
    /// Mood from 1 (very bad) to 5 (excellent)
    #[arg(long)]
    mood: Option<u8>,
    /// Calories consumed
    #[arg(long)]
    calories: Option<u32>,
    /// Exercise description
    #[arg(long)]
    exercise: Option<String>,
    /// Free-text notes
    #[arg(long)]
    notes: Option<String>,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Record or update the log for a day (default: today)
    Log {
        /// Day to log (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,

        #[command(flatten)]
        fields: LogFields,
    },

    /// Show the log for a day with its metric analysis
    Show {
        /// Day to show (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Overall health score of the most recent log
    Score,

    /// Week-over-week trends
    Trend,

    /// Zero-filled chart series with averages
    History {
        /// Single metric to chart
        #[arg(long, value_enum)]
        metric: Option<MetricArg>,

        /// Number of days ending on --date
        #[arg(long, default_value = "7")]
        days: u32,

        /// Last day of the series (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Score, today's metrics, progress and trends in one view
    Dashboard {
        /// Day to build the dashboard for (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Delete a log by id
    Delete {
        /// Log id
        id: String,
    },

    /// Populate realistic demo logs ending today
    SeedDemo {
        /// Number of days to generate
        #[arg(long, default_value = "30")]
        days: u32,

        /// Random seed for reproducible data
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum MetricArg {
    Steps,
    Water,
    Sleep,
    HeartRate,
    Weight,
    Calories,
}

impl From<MetricArg> for ChartMetric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Steps => Self::Steps,
            MetricArg::Water => Self::Water,
            MetricArg::Sleep => Self::Sleep,
            MetricArg::HeartRate => Self::HeartRate,
            MetricArg::Weight => Self::Weight,
            MetricArg::Calories => Self::Calories,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;

    let mut config = AppConfig::from_env().context("Failed to load configuration")?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if cli.memory {
        config.storage = StorageBackend::Memory;
    }
    info!(data_dir = %config.data_dir.display(), storage = ?config.storage, "Vitalog CLI");

    let cache = QueryCache::with_config(&config.cache);
    match config.storage {
        StorageBackend::File => {
            let store = JsonFileHealthLogStore::in_dir(&config.data_dir);
            run(HealthDataService::new(store, cache, &config.scoring), cli.command).await
        }
        StorageBackend::Memory => {
            let store = InMemoryHealthLogStore::new();
            run(HealthDataService::new(store, cache, &config.scoring), cli.command).await
        }
    }
}

async fn run<R: HealthLogRepository>(service: HealthDataService<R>, command: Command) -> Result<()> {
    let today = commands::today();
    match command {
        Command::Log { date, fields } => {
            commands::log(&service, date.unwrap_or(today), fields).await
        }
        Command::Show { date } => commands::show(&service, date.unwrap_or(today)).await,
        Command::Score => commands::score(&service).await,
        Command::Trend => commands::trend(&service).await,
        Command::History { metric, days, date } => {
            commands::history(&service, date.unwrap_or(today), days, metric.map(Into::into))
                .await
        }
        Command::Dashboard { date } => {
            commands::dashboard(&service, date.unwrap_or(today)).await
        }
        Command::Delete { id } => commands::delete(&service, &id).await,
        Command::SeedDemo { days, seed } => commands::seed_demo(&service, today, days, seed).await,
    }
}
