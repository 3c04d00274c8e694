/// Main entry point for the standalone habit analytics CLI
///
/// This binary loads a user snapshot from a JSON file, runs the analytics
/// engine over it, and prints the analysis as JSON on stdout. Logs go to
/// stderr so the output stays pipeable.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use habit_analytics::{AnalyticsEngine, EngineError, UserHabitSnapshot};

/// Command line arguments for the habit analytics CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON file holding a user habit snapshot
    snapshot: PathBuf,

    /// Seed for the prediction jitter (deterministic output when set)
    #[arg(long)]
    seed: Option<u64>,

    /// Pretty-print the analysis JSON
    #[arg(short, long)]
    pretty: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_analytics={}", log_level))
        .with_writer(std::io::stderr) // Send logs to stderr, not stdout
        .init();

    info!("Loading snapshot from: {}", args.snapshot.display());

    let raw = std::fs::read_to_string(&args.snapshot).map_err(EngineError::Io)?;
    let snapshot: UserHabitSnapshot = serde_json::from_str(&raw).map_err(EngineError::Json)?;

    info!(
        "Analyzing user {} ({} habits, {} logs)",
        snapshot.user.id,
        snapshot.habits.len(),
        snapshot.logs.len()
    );

    let mut engine = match args.seed {
        Some(seed) => AnalyticsEngine::with_seed(seed),
        None => AnalyticsEngine::new(),
    };
    let analysis = engine.analyze(&snapshot);

    let output = if args.pretty {
        serde_json::to_string_pretty(&analysis)
    } else {
        serde_json::to_string(&analysis)
    }
    .map_err(EngineError::Json)?;

    println!("{}", output);
    Ok(())
}
