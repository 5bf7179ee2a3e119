//! Bytepair-training - BPE training infrastructure
//!
//! This crate learns an ordered list of merge rules from text. Each step
//! counts adjacent symbol pairs over the corpus, merges the most frequent
//! pair (earliest-seen on ties) everywhere it occurs, and records the merged
//! symbol as the next vocabulary entry.
//!
//! # Example
//!
//! ```rust
//! use bytepair_training::{BpeTrainer, TrainingConfig};
//!
//! let config = TrainingConfig::default()
//!     .with_vocab_size(260)
//!     .with_special_tokens(["<pad>"]);
//!
//! let model = BpeTrainer::new(config).train("low lower lowest")?;
//! assert_eq!(model.vocab.len(), 260);
//! assert_eq!(model.merges.len(), 3);
//! # Ok::<(), bytepair_training::TokenizerError>(())
//! ```

pub use bytepair_core::{Result, TokenizerError};

// Training infrastructure
pub mod training;
pub use training::{
    BpeTrainer, Corpus, CorpusRewriter, PairStatistics, TrainedModel, TrainingConfig,
};
