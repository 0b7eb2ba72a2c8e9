//! CLI frontend for the Luckometer decision game.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "luckometer",
    about = "Luckometer, a game of choices and pure luck",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game in the terminal
    Play {
        /// RNG seed for a repeatable game
        #[arg(short, long)]
        seed: Option<u64>,

        /// Starting luck score (default: random in 5..=20)
        #[arg(short, long)]
        luck: Option<i32>,

        /// Content file to play instead of the built-in day at work
        #[arg(short, long)]
        content: Option<PathBuf>,

        /// Write the session journal to this file on exit
        #[arg(long)]
        log: Option<PathBuf>,
    },

    /// Print the scenario tree with its luck deltas
    Tree {
        /// RNG seed for the luck deltas
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Content file (default: built-in)
        #[arg(short, long)]
        content: Option<PathBuf>,
    },

    /// Sample random paths through the tree
    Path {
        /// RNG seed for the tree and the samples
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Number of paths to sample
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,

        /// Content file (default: built-in)
        #[arg(short, long)]
        content: Option<PathBuf>,
    },

    /// Autoplay many games with random choices and report the bands
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "1000")]
        games: u32,

        /// RNG seed for deterministic simulation
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Content file (default: built-in)
        #[arg(short, long)]
        content: Option<PathBuf>,
    },

    /// Validate a content file
    Check {
        /// Path to a JSON content file
        file: PathBuf,
    },

    /// Print the built-in content as JSON
    Content,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            seed,
            luck,
            content,
            log,
        } => commands::play::run(content.as_deref(), seed, luck, log.as_deref()),
        Commands::Tree { seed, content } => commands::tree::run(content.as_deref(), seed),
        Commands::Path {
            seed,
            count,
            content,
        } => commands::path::run(content.as_deref(), seed, count),
        Commands::Simulate {
            games,
            seed,
            content,
        } => commands::simulate::run(content.as_deref(), games, seed),
        Commands::Check { file } => commands::check::run(&file),
        Commands::Content => commands::content::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
