//! Training infrastructure for BPE tokenizers.
//!
//! This module provides the corpus representation, pair counting, corpus
//! rewriting and the training loop that ties them together.

pub mod corpus;
pub mod counter;
pub mod rewriter;
pub mod trainer;

pub use corpus::Corpus;
pub use counter::PairStatistics;
pub use rewriter::CorpusRewriter;
pub use trainer::{BpeTrainer, TrainedModel, TrainingConfig};
