//! League Season Simulator CLI
//!
//! CSV team stats → simulated double round-robin → standings / team logs

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use season_core::SeasonConfig;
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
const DEFAULT_STATS_PATH: &str = "PLdata.csv";

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "season_sim")]
#[command(about = "Simulate a league season from team aggregate stats", long_about = None)]
struct Cli {
    /// Season config JSON (falls back to $SEASON_SIM_CONFIG_PATH)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Simulate one season and print the final table
    Simulate {
        /// Team stats CSV (Squad, MP, GF, GA columns)
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Seed for a reproducible season
        #[arg(long)]
        seed: Option<u64>,

        /// Also print this team's match log
        #[arg(long)]
        team: Option<String>,

        /// Write the season as JSON to this path
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Menu-driven session: run simulations and browse the results
    Interactive {
        /// Team stats CSV (Squad, MP, GF, GA columns)
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Seed for the session's random stream
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Check the checksum of an exported season file
    Verify {
        /// Export JSON written by `simulate --json`
        #[arg(long)]
        file: PathBuf,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Simulate { csv, seed, team, json } => {
            let csv = stats_path(csv, &config);
            let seed = seed.or(config.seed);
            println!("⚽ Simulating season from {}", csv.display());

            let league = season_cli::load_league(&csv)?;
            let mut runner = SeasonConfig { seed, ..config.clone() }.runner(league);
            let season = runner.simulate_season().context("Season simulation failed")?;

            print!("\n{}", season_cli::render::render_table(&season, &config.zones));

            if let Some(team) = team {
                let log = season
                    .match_log(&team)
                    .with_context(|| format!("Unknown team '{}'", team))?;
                print!("\n{}", season_cli::render::render_team(&team, log));
            }

            if let Some(path) = json {
                let export = season_cli::build_export(&season, seed, &config.zones)?;
                season_cli::write_export(&path, &export)?;
                println!("\n📄 Season saved to: {}", path.display());
                println!("   Checksum: {}", export.metadata.checksum);
            }
        }

        Commands::Interactive { csv, seed } => {
            let csv = stats_path(csv, &config);
            let league = season_cli::load_league(&csv)?;
            let runner = SeasonConfig { seed: seed.or(config.seed), ..config.clone() }.runner(league);
            let mut app = season_cli::App::new(runner, config.zones);

            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            season_cli::run_interactive(&mut app, stdin.lock(), &mut stdout)?;
        }

        Commands::Verify { file } => {
            println!("🔍 Verifying season export...");
            if season_cli::verify_export(&file)? {
                println!("✅ Checksum matches");
            } else {
                anyhow::bail!("❌ Checksum mismatch in {}", file.display());
            }
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn load_config(path: Option<&Path>) -> Result<SeasonConfig> {
    let config = match path {
        Some(path) => Some(
            SeasonConfig::load(path).with_context(|| format!("Failed to load config: {}", path.display()))?,
        ),
        None => SeasonConfig::from_env()?,
    };
    Ok(config.unwrap_or_default())
}

#[cfg(feature = "cli")]
fn stats_path(flag: Option<PathBuf>, config: &SeasonConfig) -> PathBuf {
    flag.or_else(|| config.stats_path.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATS_PATH))
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("season_sim CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
