//! Train command implementation.

use clap::Parser;

/// Train command arguments.
#[derive(Parser)]
pub struct TrainCommand {
    /// Path to the training data file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output directory for the trained model
    #[arg(short, long)]
    pub output: PathBuf,

    /// Target vocabulary size
    #[arg(long, default_value_t = 1000)]
    pub vocab_size: usize,

    /// Special tokens to reserve (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub special_tokens: Vec<String>,

    /// Text encoding of the input (utf-8, latin-1, ascii)
    #[arg(short, long, default_value = "utf-8")]
    pub encoding: String,
}

use anyhow::{Context, Result as AnyhowResult};
use bytepair_tokenizer::Tokenizer;
use std::path::PathBuf;
use std::time::Instant;

pub fn run(cmd: TrainCommand) -> AnyhowResult<()> {
    let mut tokenizer = Tokenizer::with_encoding_label(&cmd.encoding)?;

    let start = Instant::now();
    let vocab = tokenizer
        .train(&cmd.input, cmd.vocab_size, &cmd.special_tokens)
        .with_context(|| format!("training on {} failed", cmd.input.display()))?;
    let vocab_size = vocab.len();
    let merges = tokenizer.merges().map_or(0, |m| m.len());
    println!(
        "Trained {} merges (vocab size {}) in {:.2}s",
        merges,
        vocab_size,
        start.elapsed().as_secs_f64()
    );

    tokenizer.save(&cmd.output)?;
    println!("Model saved to {}", cmd.output.display());

    Ok(())
}
