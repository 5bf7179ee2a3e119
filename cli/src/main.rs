//! Bytepair CLI - Command-line interface for the byte-pair tokenizer.
//!
//! This is the main entry point for the `bytepair` command-line tool.

mod commands;

use clap::{ArgAction, Parser, Subcommand};
use commands::{DecodeCommand, EncodeCommand, TrainCommand, VocabCommand};
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "bytepair")]
#[command(about = "A byte-pair encoding tokenizer", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (-q, -qq)
    #[arg(short = 'q', long, global = true, action = ArgAction::Count)]
    quiet: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a new tokenizer from a text file
    Train(TrainCommand),
    /// Encode text to token IDs
    Encode(EncodeCommand),
    /// Decode token IDs back to text
    Decode(DecodeCommand),
    /// Print the vocabulary of a trained tokenizer
    Vocab(VocabCommand),
}

fn init_logging(verbose: u8, quiet: u8) {
    let level = match (quiet, verbose) {
        (0, 0) => LevelFilter::Warn,
        (0, 1) => LevelFilter::Info,
        (0, 2) => LevelFilter::Debug,
        (0, _) => LevelFilter::Trace,
        (1, _) => LevelFilter::Error,
        _ => LevelFilter::Off,
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp_millis()
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Train(cmd) => commands::train::run(cmd)?,
        Commands::Encode(cmd) => commands::encode::run(cmd)?,
        Commands::Decode(cmd) => commands::decode::run(cmd)?,
        Commands::Vocab(cmd) => commands::vocab::run(cmd)?,
    }

    Ok(())
}
