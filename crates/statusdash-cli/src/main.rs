//! statusdash CLI - live terminal dashboard for a container fleet
//!
//! Usage:
//!   statusdash                  Run the dashboard (same as `statusdash dashboard`)
//!   statusdash snapshot         Fetch once and print the snapshot as JSON
//!   statusdash services         Fetch once and print the service groups
//!   statusdash config           Print the effective configuration

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use statusdash_core::DashConfig;
use statusdash_dashboard::{
    fetch_once, partition, widgets::services::health_text, CommandSource,
};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::info;
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "statusdash")]
#[command(author, version, about = "Live terminal dashboard for a container fleet")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to ./statusdash.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Status collector command, overriding the configuration
    #[arg(long, global = true, value_name = "CMD")]
    collector: Option<String>,

    /// Refresh interval in seconds, overriding the configuration
    #[arg(short, long, global = true, value_name = "SECS")]
    interval: Option<u64>,

    /// Write logs to this file while the dashboard is running
    #[arg(long, global = true, value_name = "FILE")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Run the live dashboard
    Dashboard,

    /// Fetch one snapshot and print it as JSON
    Snapshot {
        /// Print on a single line
        #[arg(long)]
        compact: bool,
    },

    /// Fetch one snapshot and print persistent and setup services
    Services,

    /// Print the effective configuration as TOML
    Config,
}

/// Where log lines go
enum LogTarget {
    Stderr,
    File(PathBuf),
    Discard,
}

impl Cli {
    fn log_target(&self) -> LogTarget {
        let dashboard = matches!(self.command, None | Some(Commands::Dashboard));
        match (&self.log_file, dashboard) {
            (Some(path), _) => LogTarget::File(path.clone()),
            // stderr would draw over the dashboard
            (None, true) => LogTarget::Discard,
            (None, false) => LogTarget::Stderr,
        }
    }

    /// Configuration from file or defaults, with command-line overrides applied
    fn resolve_config(&self) -> Result<DashConfig> {
        let mut config = match &self.config {
            Some(path) => DashConfig::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => {
                let cwd = std::env::current_dir().context("Failed to get current directory")?;
                DashConfig::load_or_default(&cwd).context("Failed to load configuration")?
            }
        };

        if let Some(command) = &self.collector {
            config.collector.command = command.clone();
            config.collector.args.clear();
        }
        if let Some(secs) = self.interval {
            config.refresh_secs = secs;
        }

        config.validate().context("Invalid configuration")?;
        Ok(config)
    }
}

fn init_tracing(verbose: bool, target: LogTarget) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let (writer, ansi) = match target {
        LogTarget::Stderr => (BoxMakeWriter::new(std::io::stderr), true),
        LogTarget::Discard => (BoxMakeWriter::new(std::io::sink), false),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(ansi)
                .with_writer(writer),
        )
        .with(filter)
        .try_init()
        .context("Failed to install log subscriber")?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_target())?;

    let config = cli.resolve_config()?;

    match cli.command.unwrap_or(Commands::Dashboard) {
        Commands::Dashboard => cmd_dashboard(&config).await,
        Commands::Snapshot { compact } => cmd_snapshot(&config, compact).await,
        Commands::Services => cmd_services(&config).await,
        Commands::Config => cmd_config(&config),
    }
}

async fn cmd_dashboard(config: &DashConfig) -> Result<()> {
    info!(refresh_secs = config.refresh_secs, "Launching dashboard");

    statusdash_dashboard::run(config)
        .await
        .context("Dashboard failed")?;

    Ok(())
}

async fn cmd_snapshot(config: &DashConfig, compact: bool) -> Result<()> {
    let source = CommandSource::from_config(&config.collector);
    let snapshot = fetch_once(Arc::new(source))
        .await
        .context("Failed to fetch snapshot")?;

    let json = if compact {
        serde_json::to_string(&snapshot)?
    } else {
        serde_json::to_string_pretty(&snapshot)?
    };
    println!("{}", json);

    Ok(())
}

async fn cmd_services(config: &DashConfig) -> Result<()> {
    let source = CommandSource::from_config(&config.collector);
    let snapshot = fetch_once(Arc::new(source))
        .await
        .context("Failed to fetch snapshot")?;

    let (persistent, setup) = partition(
        &snapshot.services,
        config.layout.persistent_services.as_slice(),
    );

    for (title, group) in [("Persistent services", persistent), ("Setup services", setup)] {
        println!("{} ({})", title, group.len());
        for svc in group {
            println!("  {:<20} {:<12} {}", svc.label, svc.status, health_text(svc));
        }
        println!();
    }

    Ok(())
}

fn cmd_config(config: &DashConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}
