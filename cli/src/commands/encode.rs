//! Encode command implementation.

use clap::Parser;

/// Encode command arguments.
#[derive(Parser)]
pub struct EncodeCommand {
    /// Path to the trained tokenizer model
    #[arg(short, long)]
    pub tokenizer: PathBuf,

    /// Text to encode ("-" reads stdin)
    #[arg(short, long)]
    pub input: String,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

use anyhow::Result as AnyhowResult;
use bytepair_tokenizer::Tokenizer;
use std::io::Read;
use std::path::PathBuf;

pub fn run(cmd: EncodeCommand) -> AnyhowResult<()> {
    let tokenizer = Tokenizer::load(&cmd.tokenizer)?;

    let input_text = if cmd.input == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        cmd.input
    };

    let ids = tokenizer.encode(&input_text)?;
    let output = ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    match &cmd.output {
        Some(path) => {
            std::fs::write(path, &output)?;
            println!("Encoded {} tokens to {}", ids.len(), path.display());
        }
        None => println!("{}", output),
    }

    Ok(())
}
