//! Bytepair-tokenizer - High-level tokenizer API
//!
//! This crate ties training, encoding and decoding together behind a single
//! [`Tokenizer`]. A tokenizer starts untrained, is trained exactly once, and
//! from then on is a read-only value that can be shared across threads.
//!
//! # Example
//!
//! ```rust
//! use bytepair_tokenizer::Tokenizer;
//!
//! let mut tokenizer = Tokenizer::default();
//! tokenizer.train_from_str("hello hello help", 260, &["<pad>"])?;
//!
//! let ids = tokenizer.encode("hello")?;
//! assert_eq!(tokenizer.decode(&ids)?, "hello");
//! # Ok::<(), bytepair_tokenizer::TokenizerError>(())
//! ```

// Re-export core types
pub use bytepair_core::{
    ByteVocabulary, MergeList, MergeRule, Result, Symbol, TextEncoding, TokenizerError,
};
pub use bytepair_training::{TrainedModel, TrainingConfig};

// Tokenizer API
pub mod tokenizer;
pub use tokenizer::Tokenizer;

// IO/Serialization
pub mod io;
pub use io::{SerializedTokenizer, TokenizerLoader, TokenizerSaver};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
