//! notopoly CLI - play the game in a terminal or drive it from a script.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// notopoly - totally not monopoly
#[derive(Parser, Debug)]
#[command(name = "notopoly")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play interactively in the terminal
    Play {
        /// Dice seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        #[command(flatten)]
        rules: cli::RuleArgs,
    },

    /// Apply a sequence of key presses and print the resulting game
    Script {
        /// Keys to press: 1 = move, 2 = buy, 3 = end turn (e.g. "123123")
        #[arg(short, long, required = true)]
        keys: String,

        /// Dice seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        #[command(flatten)]
        rules: cli::RuleArgs,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Print the action log before the final state
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the generated board
    Board {
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let result = match args.command {
        Commands::Play { seed, rules } => cli::play::execute(seed, &rules),

        Commands::Script {
            keys,
            seed,
            rules,
            format,
            verbose,
        } => cli::script::execute(&keys, seed, &rules, format, verbose),

        Commands::Board { format } => cli::board::execute(format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
