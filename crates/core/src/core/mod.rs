//! Core BPE data structures.
//!
//! This module contains the byte-level building blocks shared by training
//! and tokenization: symbols, the vocabulary and the ordered merge list.

pub mod merges;
pub mod symbol;
pub mod vocab;

pub use merges::{MergeList, MergeRule, Pair};
pub use symbol::{Symbol, Word};
pub use vocab::{ByteVocabulary, BASE_VOCAB_SIZE};
