//! Main entry point for the Elo ladder tool
//!
//! Reads a roster and a game log, replays the games and prints the ladder.
//! Logs go to stderr so the report on stdout stays clean.

use anyhow::{Context, Result};
use clap::Parser;
use elo_ladder::config::{validate_config, AppConfig, OutputFormat};
use elo_ladder::LadderService;
use std::io::Write;
use std::path::PathBuf;
use tracing::{error, info};

/// Elo Ladder - rebuild a ranked ladder from a roster and a game log
#[derive(Parser)]
#[command(
    name = "elo-ladder",
    version,
    about = "Replays a chronological game log over a roster and renders an Elo ladder",
    long_about = "Elo Ladder reads a roster of players with starting ratings and a log of \
                 pairwise game results, replays the games in date order with a fixed K-factor \
                 of 32, and prints the ranked ladder followed by the game log."
)]
struct Args {
    /// Roster file: one `id rating name` per line
    #[arg(short, long, value_name = "FILE")]
    roster: PathBuf,

    /// Game log file: one `date player1 player2 result` per line
    #[arg(short, long, value_name = "FILE")]
    games: PathBuf,

    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Output format override
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    format: Option<OutputFormat>,

    /// Report title override
    #[arg(long, value_name = "TITLE")]
    title: Option<String>,

    /// List the most recent game first
    #[arg(long)]
    newest_first: bool,

    /// Only show the top N ladder rows
    #[arg(long, value_name = "N")]
    top: Option<usize>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug logging, including every rating update")]
    debug: bool,

    /// Dry run mode (validate inputs and exit)
    #[arg(long, help = "Parse and replay the inputs without writing a report")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load configuration and apply CLI overrides
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(config_path) => AppConfig::from_file(config_path)?,
        None => AppConfig::from_env()?,
    };

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }
    if args.debug {
        config.service.log_level = "debug".to_string();
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if let Some(title) = &args.title {
        config.output.title = title.clone();
    }
    if args.newest_first {
        config.output.newest_first = true;
    }
    if args.top.is_some() {
        config.output.top = args.top;
    }

    validate_config(&config)?;
    Ok(config)
}

fn run(args: &Args, service: &LadderService) -> Result<()> {
    let outcome = service.compute_files(&args.roster, &args.games)?;

    if args.dry_run {
        info!(
            "Dry run completed: {} players, {} games",
            outcome.final_store.len(),
            outcome.games.len()
        );
        return Ok(());
    }

    let report = service.render(&outcome)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &report)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Report written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(report.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!(
        "{} {} starting ({} output)",
        config.service.name,
        elo_ladder::VERSION,
        config.output.format
    );

    let service = LadderService::new(config);
    if let Err(e) = run(&args, &service) {
        error!("Ladder computation failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
