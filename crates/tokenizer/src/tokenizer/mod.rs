//! Main tokenizer implementation.
//!
//! This module provides the high-level `Tokenizer` struct that owns the
//! trained vocabulary and merge list and applies them to text.

use crate::io::{TokenizerLoader, TokenizerSaver};
use bytepair_core::{
    ByteVocabulary, MergeList, Result, Symbol, TextEncoding, TokenizerError,
};
use bytepair_training::{BpeTrainer, TrainedModel, TrainingConfig};
use rayon::prelude::*;
use std::path::Path;
use std::str::FromStr;

/// Main tokenizer struct.
///
/// Holds the configured text encoding and, once trained, the frozen
/// vocabulary and merges. Encoding and decoding take `&self` and touch no
/// mutable state.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    /// Text encoding for training input, encode and decode
    encoding: TextEncoding,
    /// Present once training has completed
    model: Option<TrainedModel>,
}

impl Tokenizer {
    /// Create an untrained tokenizer using the given text encoding.
    pub fn new(encoding: TextEncoding) -> Self {
        Self {
            encoding,
            model: None,
        }
    }

    /// Create an untrained tokenizer from an encoding label such as `"utf-8"`.
    pub fn with_encoding_label(label: &str) -> Result<Self> {
        Ok(Self::new(label.parse()?))
    }

    /// Wrap an already trained model.
    pub fn from_model(model: TrainedModel, encoding: TextEncoding) -> Self {
        Self {
            encoding,
            model: Some(model),
        }
    }

    /// Train on a text file.
    ///
    /// # Arguments
    /// * `input_path` - File read under the configured encoding
    /// * `vocab_size` - Target total vocabulary size
    /// * `special_tokens` - Tokens reserved before training; repeats ignored
    ///
    /// Training happens once; a second call fails with
    /// [`TokenizerError::AlreadyTrained`].
    pub fn train<P, S>(
        &mut self,
        input_path: P,
        vocab_size: usize,
        special_tokens: &[S],
    ) -> Result<&ByteVocabulary>
    where
        P: AsRef<Path>,
        S: AsRef<str>,
    {
        let trainer = self.trainer(vocab_size, special_tokens)?;
        let model = trainer.train_file(input_path.as_ref())?;
        Ok(self.install(model))
    }

    /// Train on in-memory text.
    pub fn train_from_str<S: AsRef<str>>(
        &mut self,
        text: &str,
        vocab_size: usize,
        special_tokens: &[S],
    ) -> Result<&ByteVocabulary> {
        let trainer = self.trainer(vocab_size, special_tokens)?;
        let model = trainer.train(text)?;
        Ok(self.install(model))
    }

    fn trainer<S: AsRef<str>>(&self, vocab_size: usize, special_tokens: &[S]) -> Result<BpeTrainer> {
        if self.model.is_some() {
            return Err(TokenizerError::AlreadyTrained);
        }

        let config = TrainingConfig::default()
            .with_vocab_size(vocab_size)
            .with_special_tokens(special_tokens.iter().map(|s| s.as_ref()))
            .with_encoding(self.encoding);
        Ok(BpeTrainer::new(config))
    }

    fn install(&mut self, model: TrainedModel) -> &ByteVocabulary {
        &self.model.insert(model).vocab
    }

    fn model(&self) -> Result<&TrainedModel> {
        self.model.as_ref().ok_or(TokenizerError::Untrained)
    }

    /// Encode text to token IDs.
    ///
    /// The text becomes single-byte symbols, every merge rule is applied
    /// once in training order, and each resulting symbol maps to its ID.
    pub fn encode(&self, text: &str) -> Result<Vec<u32>> {
        let model = self.model()?;
        let bytes = self.encoding.encode(text)?;

        let symbols: Vec<Symbol> = bytes
            .iter()
            .map(|&b| model.vocab.byte_symbol(b).clone())
            .collect();

        model
            .merges
            .apply_all(symbols)
            .iter()
            .map(|symbol| model.vocab.id_of(symbol))
            .collect()
    }

    /// Encode a batch of texts (parallelized).
    pub fn encode_batch<S>(&self, texts: &[S]) -> Result<Vec<Vec<u32>>>
    where
        S: AsRef<str> + Sync,
    {
        self.model()?;

        texts
            .par_iter()
            .map(|text| self.encode(text.as_ref()))
            .collect()
    }

    /// Decode token IDs back to text.
    ///
    /// Fails if an ID is unknown or the concatenated bytes are not valid
    /// under the configured encoding.
    pub fn decode(&self, ids: &[u32]) -> Result<String> {
        let bytes = self.decode_bytes(ids)?;
        self.encoding.decode(&bytes)
    }

    /// Decode token IDs to raw bytes without text validation.
    pub fn decode_bytes(&self, ids: &[u32]) -> Result<Vec<u8>> {
        let model = self.model()?;

        let mut bytes = Vec::with_capacity(ids.len() * 2);
        for &id in ids {
            bytes.extend_from_slice(model.vocab.symbol_of(id)?);
        }
        Ok(bytes)
    }

    /// Whether training has completed.
    pub fn is_trained(&self) -> bool {
        self.model.is_some()
    }

    /// The configured text encoding.
    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// The trained vocabulary.
    pub fn vocab(&self) -> Option<&ByteVocabulary> {
        self.model.as_ref().map(|m| &m.vocab)
    }

    /// The trained merges, in rank order.
    pub fn merges(&self) -> Option<&MergeList> {
        self.model.as_ref().map(|m| &m.merges)
    }

    /// Get the vocabulary size (0 until trained).
    pub fn vocab_size(&self) -> usize {
        self.vocab().map_or(0, ByteVocabulary::len)
    }

    /// Save the tokenizer to a directory.
    ///
    /// # Arguments
    /// * `path` - Directory path to save to
    pub fn save(&self, path: &Path) -> Result<()> {
        let saver = TokenizerSaver::new(self.model()?, self.encoding);
        saver.save(path)
    }

    /// Serialize the trained tokenizer to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        TokenizerSaver::new(self.model()?, self.encoding).to_json()
    }

    /// Load a tokenizer from a directory.
    ///
    /// # Arguments
    /// * `path` - Directory path to load from
    pub fn load(path: &Path) -> Result<Self> {
        let (model, encoding) = TokenizerLoader::load(path)?;
        Ok(Self::from_model(model, encoding))
    }
}

impl FromStr for Tokenizer {
    type Err = TokenizerError;

    fn from_str(s: &str) -> Result<Self> {
        let (model, encoding) = TokenizerLoader::from_json(s)?;
        Ok(Self::from_model(model, encoding))
    }
}
