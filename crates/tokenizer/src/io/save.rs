//! Save functionality for trained tokenizers.

use super::format::{SerializedToken, SerializedTokenizer, FORMAT_VERSION, TOKENIZER_FILE};
use bytepair_core::{Result, TextEncoding, TokenizerError};
use bytepair_training::TrainedModel;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Tokenizer saver - handles saving trained models.
pub struct TokenizerSaver<'a> {
    model: &'a TrainedModel,
    encoding: TextEncoding,
}

impl<'a> TokenizerSaver<'a> {
    /// Create a new tokenizer saver.
    pub fn new(model: &'a TrainedModel, encoding: TextEncoding) -> Self {
        Self { model, encoding }
    }

    /// Save the tokenizer to a directory.
    ///
    /// This writes a single `tokenizer.json` file containing all model data,
    /// creating the directory if needed.
    ///
    /// # Arguments
    /// * `path` - Directory path to save to
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).map_err(|e| {
            TokenizerError::Save(format!(
                "Failed to create directory {}: {}",
                path.display(),
                e
            ))
        })?;

        let file_path = path.join(TOKENIZER_FILE);
        let file = File::create(&file_path).map_err(|e| {
            TokenizerError::Save(format!(
                "Failed to create file {}: {}",
                file_path.display(),
                e
            ))
        })?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.serialize())
            .map_err(|e| TokenizerError::Save(format!("Failed to serialize tokenizer: {}", e)))?;
        writer
            .flush()
            .map_err(|e| TokenizerError::io(&file_path, e))?;

        log::info!(
            "Saved tokenizer ({} tokens, {} merges) to {}",
            self.model.vocab.len(),
            self.model.merges.len(),
            file_path.display()
        );
        Ok(())
    }

    /// Serialize to a pretty-printed JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.serialize())?)
    }

    /// Serialize the tokenizer to a structure.
    pub fn serialize(&self) -> SerializedTokenizer {
        let vocab = self
            .model
            .vocab
            .iter()
            .map(|(id, symbol)| SerializedToken {
                id,
                bytes: symbol.to_vec(),
                text: self.encoding.decode(symbol).ok(),
            })
            .collect();

        let merges = self
            .model
            .merges
            .iter()
            .map(|rule| (rule.left.to_vec(), rule.right.to_vec()))
            .collect();

        SerializedTokenizer {
            version: FORMAT_VERSION,
            encoding: self.encoding.label().to_string(),
            vocab,
            special_tokens: self.model.vocab.specials().to_vec(),
            merges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytepair_training::BpeTrainer;

    #[test]
    fn test_serialize() {
        let model = BpeTrainer::with_vocab_size(258).train("aaab").unwrap();

        let saver = TokenizerSaver::new(&model, TextEncoding::Utf8);
        let serialized = saver.serialize();

        assert_eq!(serialized.version, FORMAT_VERSION);
        assert_eq!(serialized.encoding, "utf-8");
        assert_eq!(serialized.vocab.len(), 258);
        assert_eq!(serialized.vocab[256].bytes, b"aa");
        assert_eq!(serialized.vocab[256].text.as_deref(), Some("aa"));
        assert_eq!(
            serialized.merges,
            vec![
                (b"a".to_vec(), b"a".to_vec()),
                (b"aa".to_vec(), b"a".to_vec())
            ]
        );
        assert!(serialized.special_tokens.is_empty());
    }

    #[test]
    fn test_save_creates_directory() {
        let model = BpeTrainer::with_vocab_size(256).train("x").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("model");

        TokenizerSaver::new(&model, TextEncoding::Latin1)
            .save(&target)
            .unwrap();

        let contents = std::fs::read_to_string(target.join(TOKENIZER_FILE)).unwrap();
        assert!(contents.contains("\"latin-1\""));
    }
}
