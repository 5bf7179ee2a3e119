//! Decode command implementation.

use clap::Parser;

/// Decode command arguments.
#[derive(Parser)]
pub struct DecodeCommand {
    /// Path to the trained tokenizer model
    #[arg(short, long)]
    pub tokenizer: PathBuf,

    /// Token IDs to decode (comma or whitespace separated)
    #[arg(short = 'i', long)]
    pub tokens: String,
}

use anyhow::{Context, Result as AnyhowResult};
use bytepair_tokenizer::Tokenizer;
use std::path::PathBuf;

pub fn run(cmd: DecodeCommand) -> AnyhowResult<()> {
    let tokenizer = Tokenizer::load(&cmd.tokenizer)?;

    let ids = parse_ids(&cmd.tokens)?;
    let text = tokenizer.decode(&ids)?;

    println!("{}", text);

    Ok(())
}

fn parse_ids(tokens: &str) -> AnyhowResult<Vec<u32>> {
    tokens
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u32>()
                .with_context(|| format!("invalid token ID {:?}", s))
        })
        .collect()
}
