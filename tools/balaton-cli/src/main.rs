use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use balaton_core::places::csv_source;
use balaton_core::{CsvStore, GameConfig, MatchController, MatchMode};

mod play;

#[derive(Parser, Debug)]
#[command(
    name = "balaton",
    author,
    version,
    about = "Guess which Lake Balaton town the computer is thinking of",
    long_about = "After every wrong guess you are told how far the target is and roughly \
                  in which direction.\n\n\
                  Casual mode is a single round. Competitive mode is three rounds in a row; \
                  your total time and guess count go on the leaderboard."
)]
struct Args {
    /// CSV file of places (name,latitude,longitude)
    #[arg(short, long)]
    places: PathBuf,

    /// Leaderboard CSV file (overrides the config file)
    #[arg(short, long)]
    leaderboard: Option<PathBuf>,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// casual or competitive
    #[arg(short, long, default_value = "casual")]
    mode: MatchMode,

    /// Player name for competitive mode (asked for when missing)
    #[arg(long)]
    player: Option<String>,

    /// Seed the target picker, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(path: Option<&PathBuf>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid config file: {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; stdout belongs to the game
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let mut config = load_config(args.config.as_ref())?;
    if let Some(path) = args.leaderboard {
        config.leaderboard_path = path;
    }

    let catalog = csv_source::from_path(&args.places)
        .with_context(|| format!("Failed to load places from {}", args.places.display()))?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let store = CsvStore::new(config.leaderboard_path.clone());

    tracing::info!(
        places = catalog.places().len(),
        leaderboard = %store.path().display(),
        mode = %args.mode,
        "starting"
    );

    let mut controller = MatchController::new(config, store);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    play::run(
        &mut controller,
        &catalog,
        &mut rng,
        args.mode,
        args.player,
        stdin.lock(),
        stdout.lock(),
    )
}
