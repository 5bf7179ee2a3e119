//! Vocab command implementation.

use clap::Parser;

/// Vocab command arguments.
#[derive(Parser)]
pub struct VocabCommand {
    /// Path to the trained tokenizer model
    #[arg(short, long)]
    pub tokenizer: PathBuf,

    /// Skip the 256 single-byte tokens
    #[arg(long, default_value_t = false)]
    pub skip_bytes: bool,

    /// Maximum number of entries to print
    #[arg(short, long)]
    pub limit: Option<usize>,
}

use anyhow::{Context, Result as AnyhowResult};
use bytepair_core::BASE_VOCAB_SIZE;
use bytepair_tokenizer::Tokenizer;
use std::path::PathBuf;

pub fn run(cmd: VocabCommand) -> AnyhowResult<()> {
    let tokenizer = Tokenizer::load(&cmd.tokenizer)?;
    let vocab = tokenizer.vocab().context("tokenizer is not trained")?;

    let skip = if cmd.skip_bytes { BASE_VOCAB_SIZE } else { 0 };
    let limit = cmd.limit.unwrap_or(usize::MAX);

    for (id, symbol) in vocab.iter().skip(skip).take(limit) {
        let marker = if vocab.is_special(id) { " (special)" } else { "" };
        println!("{}\t{:?}{}", id, symbol, marker);
    }

    println!(
        "Vocab size: {} ({} specials, {} merges)",
        vocab.len(),
        vocab.specials().len(),
        tokenizer.merges().map_or(0, |m| m.len())
    );

    Ok(())
}
