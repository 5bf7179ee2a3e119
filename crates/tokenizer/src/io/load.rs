//! Load functionality for saved tokenizers.

use super::format::{SerializedTokenizer, FORMAT_VERSION, TOKENIZER_FILE};
use ahash::AHashSet;
use bytepair_core::{
    ByteVocabulary, MergeList, MergeRule, Result, Symbol, TextEncoding, TokenizerError,
    BASE_VOCAB_SIZE,
};
use bytepair_training::TrainedModel;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Tokenizer loader - handles loading trained models.
pub struct TokenizerLoader;

impl TokenizerLoader {
    /// Load a tokenizer from a directory.
    ///
    /// Expects a `tokenizer.json` file in the given directory.
    ///
    /// # Arguments
    /// * `path` - Directory path to load from
    pub fn load(path: &Path) -> Result<(TrainedModel, TextEncoding)> {
        let file_path = path.join(TOKENIZER_FILE);
        let file = File::open(&file_path).map_err(|e| TokenizerError::io(&file_path, e))?;

        let reader = BufReader::new(file);
        let serialized: SerializedTokenizer = serde_json::from_reader(reader)?;

        let loaded = Self::deserialize(serialized)?;
        log::info!(
            "Loaded tokenizer ({} tokens, {} merges) from {}",
            loaded.0.vocab.len(),
            loaded.0.merges.len(),
            file_path.display()
        );
        Ok(loaded)
    }

    /// Load a tokenizer from a JSON string.
    pub fn from_json(json: &str) -> Result<(TrainedModel, TextEncoding)> {
        let serialized: SerializedTokenizer = serde_json::from_str(json)?;
        Self::deserialize(serialized)
    }

    /// Rebuild the model by replaying the vocabulary in ID order.
    ///
    /// Special IDs are re-reserved and every other ID above the byte range
    /// must be produced by the next merge, so the rebuilt vocabulary assigns
    /// exactly the same IDs (shadowed symbols included).
    pub fn deserialize(data: SerializedTokenizer) -> Result<(TrainedModel, TextEncoding)> {
        if data.version != FORMAT_VERSION {
            return Err(TokenizerError::Load(format!(
                "Unsupported format version {} (expected {})",
                data.version, FORMAT_VERSION
            )));
        }

        let encoding: TextEncoding = data.encoding.parse()?;

        if data.vocab.len() < BASE_VOCAB_SIZE {
            return Err(TokenizerError::Load(format!(
                "Vocabulary has {} entries, fewer than the {} byte tokens",
                data.vocab.len(),
                BASE_VOCAB_SIZE
            )));
        }

        for (expected, token) in data.vocab.iter().enumerate() {
            if token.id as usize != expected {
                return Err(TokenizerError::Load(format!(
                    "Vocabulary IDs must be dense and ordered: found {} at position {}",
                    token.id, expected
                )));
            }
        }

        for token in &data.vocab[..BASE_VOCAB_SIZE] {
            if token.bytes != [token.id as u8] {
                return Err(TokenizerError::Load(format!(
                    "Byte token {} is bound to {:?}",
                    token.id,
                    Symbol::from(token.bytes.as_slice())
                )));
            }
        }

        let specials: AHashSet<u32> = data.special_tokens.iter().copied().collect();
        let mut vocab = ByteVocabulary::new();
        let mut merges = MergeList::new();
        let mut pending = data.merges.into_iter();

        for token in &data.vocab[BASE_VOCAB_SIZE..] {
            if specials.contains(&token.id) {
                let id = vocab.reserve_special(&token.bytes);
                if id != token.id {
                    return Err(TokenizerError::Load(format!(
                        "Special token {:?} resolves to ID {} instead of {}",
                        Symbol::from(token.bytes.as_slice()),
                        id,
                        token.id
                    )));
                }
                continue;
            }

            let (left, right) = pending.next().ok_or_else(|| {
                TokenizerError::Load(format!("No merge produces vocabulary entry {}", token.id))
            })?;
            for part in [&left, &right] {
                if !vocab.contains(part) {
                    return Err(TokenizerError::Load(format!(
                        "Merge for entry {} uses unknown symbol {:?}",
                        token.id,
                        Symbol::from(part.as_slice())
                    )));
                }
            }

            let rule = MergeRule::new(Symbol::from(left), Symbol::from(right));
            if rule.merged().as_bytes() != token.bytes.as_slice() {
                return Err(TokenizerError::Load(format!(
                    "Merge {:?} + {:?} does not produce entry {} ({:?})",
                    rule.left,
                    rule.right,
                    token.id,
                    Symbol::from(token.bytes.as_slice())
                )));
            }

            vocab.define(rule.merged().clone());
            merges.push(rule);
        }

        if pending.next().is_some() {
            return Err(TokenizerError::Load(
                "More merges than merged vocabulary entries".to_string(),
            ));
        }

        Ok((TrainedModel { vocab, merges }, encoding))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::save::TokenizerSaver;
    use bytepair_training::{BpeTrainer, TrainingConfig};

    fn sample_model() -> TrainedModel {
        let config = TrainingConfig::default()
            .with_vocab_size(270)
            .with_special_tokens(["<pad>", "<eos>"]);
        BpeTrainer::new(config)
            .train("low lower lowest newer wider")
            .unwrap()
    }

    #[test]
    fn test_load_roundtrip() {
        let model = sample_model();
        let dir = tempfile::tempdir().unwrap();

        TokenizerSaver::new(&model, TextEncoding::Utf8)
            .save(dir.path())
            .unwrap();
        let (loaded, encoding) = TokenizerLoader::load(dir.path()).unwrap();

        assert_eq!(encoding, TextEncoding::Utf8);
        assert_eq!(loaded.merges, model.merges);
        assert_eq!(loaded.vocab.specials(), model.vocab.specials());
        let before: Vec<_> = model.vocab.iter().map(|(i, s)| (i, s.clone())).collect();
        let after: Vec<_> = loaded.vocab.iter().map(|(i, s)| (i, s.clone())).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_load_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = TokenizerLoader::load(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, TokenizerError::Io { .. }));
    }

    #[test]
    fn test_rejects_tampered_merge() {
        let model = sample_model();
        let mut data = TokenizerSaver::new(&model, TextEncoding::Utf8).serialize();
        data.merges[0].1 = b"z".to_vec();

        let err = TokenizerLoader::deserialize(data).unwrap_err();
        assert!(matches!(err, TokenizerError::Load(_)));
    }

    #[test]
    fn test_rejects_extra_merges() {
        let model = sample_model();
        let mut data = TokenizerSaver::new(&model, TextEncoding::Utf8).serialize();
        data.merges.push((b"x".to_vec(), b"y".to_vec()));

        assert!(TokenizerLoader::deserialize(data).is_err());
    }

    #[test]
    fn test_rejects_unknown_encoding() {
        let model = sample_model();
        let mut data = TokenizerSaver::new(&model, TextEncoding::Utf8).serialize();
        data.encoding = "utf-7".to_string();

        let err = TokenizerLoader::deserialize(data).unwrap_err();
        assert!(matches!(err, TokenizerError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = TokenizerLoader::from_json("{\"version\": 1").unwrap_err();
        assert!(matches!(err, TokenizerError::Json(_)));
    }
}
