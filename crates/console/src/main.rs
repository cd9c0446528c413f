use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use arena_console::commands::{self, FightOptions, PolicyArg, ResetTarget};
use arena_console::logging;
use arena_console::prompt::ConsolePrompt;
use arena_core::{ArenaConfig, FileStore, SeedChoice};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about = "Turn-based gladiator battles", long_about = None)]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Directory holding the roster, scores and battle history
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fight a random gladiator from the roster
    Fight {
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        seed: Option<u64>,
        #[arg(short, long, value_enum)]
        policy: Option<PolicyArg>,
        /// Skip the pause between turns
        #[arg(long)]
        fast: bool,
    },
    /// Show wins per player
    Scores,
    /// Show past battles
    History {
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show the gladiator roster
    Roster,
    /// Wipe stored scores, roster or history
    Reset {
        #[arg(value_enum)]
        target: ResetTarget,
    },
}

fn load_config(path: Option<PathBuf>) -> Result<ArenaConfig> {
    let Some(path) = path.or_else(ArenaConfig::get_default_path) else {
        return Ok(ArenaConfig::default());
    };
    ArenaConfig::load_or_default(&path)
        .with_context(|| format!("Failed to load config: {}", path.display()))
}

fn main() -> Result<()> {
    logging::init("warn");
    let cli = Cli::parse();

    let config = load_config(cli.config)?;
    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => config.resolve_data_dir().context("Failed to resolve data directory")?,
    };
    let mut store = FileStore::open(&data_dir)
        .with_context(|| format!("Failed to open data directory: {}", data_dir.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Fight { name, seed, policy, fast } => {
            let options = FightOptions {
                name,
                seed: SeedChoice::from_option(seed),
                policy: policy.map_or(config.ai_policy, Into::into),
                player: config.player,
                turn_delay: if fast { Duration::ZERO } else { config.turn_delay() },
            };
            let mut prompt = ConsolePrompt::new(io::stdin().lock(), out);
            commands::fight(&mut store, &options, &mut prompt)?;
            prompt.into_output().flush()?;
        }
        Command::Scores => commands::print_scores(&store, &mut out)?,
        Command::History { limit } => commands::print_history(&store, limit, &mut out)?,
        Command::Roster => commands::print_roster(&mut store, &mut out)?,
        Command::Reset { target } => commands::reset(&mut store, target, &mut out)?,
    }

    store.close().context("Failed to flush the data directory")?;
    Ok(())
}
