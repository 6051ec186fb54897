use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use jewel_collector::game::GameConfig;
use jewel_collector::modes::HumanMode;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Parser)]
#[command(name = "jewel_collector")]
#[command(version, about = "Collect jewels, dodge radiation, survive the phases")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "human")]
    mode: Mode,

    /// JSON game configuration; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for board generation
    #[arg(long)]
    seed: Option<u64>,

    /// Largest board side the game grows to (at most 30)
    #[arg(long)]
    max_size: Option<usize>,

    /// Start on a randomized board instead of the fixed layout
    #[arg(long)]
    random_start: bool,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play with the keyboard
    Human,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_tracing(path)?;
    }

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if let Some(max_size) = cli.max_size {
        config.max_size = max_size;
    }
    if cli.random_start {
        config.random_start = true;
    }
    config
        .validate()
        .map_err(|reason| anyhow!("Invalid configuration: {reason}"))?;

    // Dispatch to appropriate mode
    match cli.mode {
        Mode::Human => {
            let mut human_mode = HumanMode::new(config);
            human_mode.run().await?;
        }
    }

    Ok(())
}

/// Logs go to a file; the terminal belongs to the game screen
fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
