//! Serialization and deserialization for trained tokenizers.
//!
//! A trained tokenizer is stored as a single `tokenizer.json` holding the
//! encoding, the vocabulary in ID order, the special token IDs and the
//! merges in rank order. Loading replays the vocabulary so encode and decode
//! behave exactly as before saving.

pub mod format;
pub mod load;
pub mod save;

pub use format::{SerializedToken, SerializedTokenizer, FORMAT_VERSION, TOKENIZER_FILE};
pub use load::TokenizerLoader;
pub use save::TokenizerSaver;
