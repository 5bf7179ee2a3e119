//! Bytepair-core - Core data structures for byte-pair encoding
//!
//! This crate provides the pieces shared by training and tokenization:
//! byte-sequence symbols, the id/symbol vocabulary, ordered merge rules and
//! the text codecs used to turn text into bytes and back.
//!
//! # Example
//!
//! ```rust
//! use bytepair_core::{ByteVocabulary, Symbol};
//!
//! let mut vocab = ByteVocabulary::new();
//! assert_eq!(vocab.len(), 256);
//!
//! let id = vocab.reserve_special(b"<pad>");
//! assert_eq!(id, 256);
//! assert_eq!(vocab.id_of(&Symbol::from(&b"<pad>"[..])).unwrap(), 256);
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

// Core BPE data structures
pub mod core;
pub use crate::core::{ByteVocabulary, MergeList, MergeRule, Pair, Symbol, Word, BASE_VOCAB_SIZE};

// Text codecs
pub mod text;
pub use text::TextEncoding;
