//! Format definitions for tokenizer serialization.
//!
//! Symbols are arbitrary bytes, so they are stored as byte arrays. The
//! `text` field on each token is a lossy rendering for people reading the
//! file and is ignored when loading.

use serde::{Deserialize, Serialize};

/// Current format version.
pub const FORMAT_VERSION: u32 = 1;

/// File name inside a saved tokenizer directory.
pub const TOKENIZER_FILE: &str = "tokenizer.json";

/// One vocabulary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedToken {
    pub id: u32,
    pub bytes: Vec<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Complete tokenizer serialization format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedTokenizer {
    /// Format version
    pub version: u32,
    /// Text encoding label
    pub encoding: String,
    /// Vocabulary in ID order
    pub vocab: Vec<SerializedToken>,
    /// IDs of reserved special tokens, in reservation order
    pub special_tokens: Vec<u32>,
    /// Merge rules as `(left, right)` byte pairs, in rank order
    pub merges: Vec<(Vec<u8>, Vec<u8>)>,
}
