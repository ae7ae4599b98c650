use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use wizard_core::{ConsoleError, TerminalConsole};
use wizard_session::{run_session, BattleReport, SessionConfig, SessionError};

#[derive(Parser)]
#[command(version, about = "Turn-based duel against the Evil Wizard")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a hero and fight the wizard on this terminal (default).
    Play(PlayArgs),
    /// Print a one-line summary of a saved battle report.
    Report(ReportArgs),
}

#[derive(Args, Default)]
struct PlayArgs {
    /// TOML file with [battle], [report] and [telemetry] tables.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for damage rolls; replays a previous fight.
    #[arg(long)]
    seed: Option<u64>,
    /// Where to write the JSON battle report.
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Args)]
struct ReportArgs {
    #[arg(long)]
    input: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command.unwrap_or(Commands::Play(PlayArgs::default())) {
        Commands::Play(args) => handle_play(args),
        Commands::Report(args) => {
            init_tracing(None);
            handle_report(args)
        }
    }
}

fn handle_play(args: PlayArgs) -> Result<()> {
    let mut config = match args.config.as_deref() {
        Some(path) => SessionConfig::from_path(path)?,
        None => SessionConfig::default(),
    };
    init_tracing(config.telemetry.filter());
    config.apply_env();
    if let Some(seed) = args.seed {
        config.battle.seed = Some(seed);
    }
    if let Some(path) = args.report {
        config.set_report_path(path);
    }

    let mut console = TerminalConsole::stdio();
    match run_session(&config, &mut console) {
        Ok(report) => {
            if let Some(report_cfg) = config.report.as_ref() {
                println!("Report written to {}", report_cfg.path.display());
            }
            info!(target: "wizard_cli", id = %report.id, "session complete");
            Ok(())
        }
        Err(SessionError::Console(ConsoleError::Closed)) => {
            warn!(target: "wizard_cli", "input closed before the battle finished");
            println!();
            println!("Input closed. The wizard will wait for your return.");
            Ok(())
        }
        Err(err) => Err(err).context("battle session failed"),
    }
}

fn handle_report(args: ReportArgs) -> Result<()> {
    let report = BattleReport::read_from(&args.input)
        .with_context(|| format!("failed to load report {}", args.input.display()))?;
    println!("{}", report.headline());
    Ok(())
}

/// Logs go to stderr so they never interleave with the game text. `RUST_LOG`
/// wins over the config filter; without either only warnings are shown.
fn init_tracing(config_filter: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config_filter.unwrap_or("warn")))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
