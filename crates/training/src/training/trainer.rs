//! BPE trainer implementation.
//!
//! Training is single-threaded and deterministic: the same text and
//! configuration always yield the same vocabulary and merge order.

use std::path::Path;

use bytepair_core::{
    ByteVocabulary, MergeList, MergeRule, Result, TextEncoding, TokenizerError, BASE_VOCAB_SIZE,
};

use super::corpus::Corpus;
use super::counter::PairStatistics;
use super::rewriter::CorpusRewriter;

/// Configuration for BPE training.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingConfig {
    /// Target vocabulary size, counting the 256 byte tokens and specials
    pub vocab_size: usize,
    /// Special tokens to reserve before any merge, in order
    pub special_tokens: Vec<String>,
    /// Encoding used to read the input and to encode words and specials
    pub encoding: TextEncoding,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            vocab_size: 1000,
            special_tokens: Vec::new(),
            encoding: TextEncoding::Utf8,
        }
    }
}

impl TrainingConfig {
    /// Set the target vocabulary size.
    pub fn with_vocab_size(mut self, vocab_size: usize) -> Self {
        self.vocab_size = vocab_size;
        self
    }

    /// Set the special tokens.
    pub fn with_special_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.special_tokens = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Set the text encoding.
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}

/// Output of training: the frozen vocabulary and the ordered merges.
#[derive(Debug, Clone)]
pub struct TrainedModel {
    pub vocab: ByteVocabulary,
    pub merges: MergeList,
}

/// BPE trainer.
///
/// Trains a BPE tokenizer from text data by iteratively merging the most
/// frequent adjacent symbol pair.
#[derive(Debug, Clone, Default)]
pub struct BpeTrainer {
    config: TrainingConfig,
}

impl BpeTrainer {
    /// Create a new BPE trainer with the given configuration.
    pub fn new(config: TrainingConfig) -> Self {
        Self { config }
    }

    /// Create a new BPE trainer with default configuration.
    pub fn with_vocab_size(vocab_size: usize) -> Self {
        Self::new(TrainingConfig::default().with_vocab_size(vocab_size))
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Train on the contents of a file, read under the configured encoding.
    pub fn train_file(&self, path: &Path) -> Result<TrainedModel> {
        let bytes = std::fs::read(path).map_err(|e| TokenizerError::io(path, e))?;
        let text = self.config.encoding.decode(&bytes)?;
        log::info!("Read {} bytes from {}", bytes.len(), path.display());

        self.train(&text)
    }

    /// Train the tokenizer on the given text.
    ///
    /// Stops when the vocabulary reaches the target size or no word has a
    /// pair left to merge; in the latter case the vocabulary is smaller than
    /// requested.
    pub fn train(&self, text: &str) -> Result<TrainedModel> {
        let encoding = self.config.encoding;
        let target = self.config.vocab_size;

        let mut vocab = ByteVocabulary::new();
        for token in &self.config.special_tokens {
            let bytes = encoding.encode(token)?;
            vocab.reserve_special(&bytes);
        }

        let mut corpus = Corpus::from_text(text, encoding, &vocab)?;
        let mut merges = MergeList::new();

        let num_merges = target.saturating_sub(vocab.len());
        if num_merges == 0 {
            log::warn!(
                "vocab_size {} leaves no room for merges ({} byte tokens + {} specials)",
                target,
                BASE_VOCAB_SIZE,
                vocab.specials().len()
            );
        }
        log::info!(
            "Starting BPE training: {} distinct words, {} merges to compute",
            corpus.len(),
            num_merges
        );

        let mut last_log_percent = 0;

        while vocab.len() < target {
            let stats = PairStatistics::from_corpus(&corpus);
            let Some(((left, right), count)) = stats.best() else {
                log::info!(
                    "No mergeable pairs left; stopping at vocab size {}",
                    vocab.len()
                );
                break;
            };

            let rule = MergeRule::new(left.clone(), right.clone());
            corpus = CorpusRewriter::rewrite(corpus, &rule);

            if vocab.contains(rule.merged()) {
                log::warn!(
                    "Merged symbol {:?} already in vocabulary; new ID shadows the old one",
                    rule.merged()
                );
            }
            let id = vocab.define(rule.merged().clone());
            log::debug!(
                "Merge {}: {:?} + {:?} -> {} (frequency: {})",
                merges.len(),
                rule.left,
                rule.right,
                id,
                count
            );
            merges.push(rule);

            let current_percent = merges.len() * 100 / num_merges;
            if current_percent >= last_log_percent + 10 {
                log::info!(
                    "Progress: {}% ({}/{} merges)",
                    current_percent,
                    merges.len(),
                    num_merges
                );
                last_log_percent = current_percent;
            }
        }

        log::info!(
            "Finished training: {} merges, vocab size {}",
            merges.len(),
            vocab.len()
        );

        Ok(TrainedModel { vocab, merges })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytepair_core::Symbol;
    use std::io::Write;

    fn sym(s: &str) -> Symbol {
        Symbol::from(s.as_bytes())
    }

    #[test]
    fn test_aaab_scenario() {
        let model = BpeTrainer::with_vocab_size(258).train("aaab").unwrap();

        assert_eq!(model.vocab.len(), 258);
        assert_eq!(model.merges.len(), 2);
        assert_eq!(model.merges.get(0).unwrap().pair(), (sym("a"), sym("a")));
        assert_eq!(model.merges.get(1).unwrap().pair(), (sym("aa"), sym("a")));
        assert_eq!(model.vocab.symbol_of(256).unwrap().as_bytes(), b"aa");
        assert_eq!(model.vocab.symbol_of(257).unwrap().as_bytes(), b"aaa");
    }

    #[test]
    fn test_stops_when_no_pairs_left() {
        let model = BpeTrainer::with_vocab_size(1000).train("ab ab").unwrap();

        assert_eq!(model.merges.len(), 1);
        assert_eq!(model.vocab.len(), 257);
    }

    #[test]
    fn test_no_merges_at_base_size() {
        let model = BpeTrainer::with_vocab_size(256).train("hello hello").unwrap();

        assert!(model.merges.is_empty());
        assert_eq!(model.vocab.len(), 256);
    }

    #[test]
    fn test_vocab_size_below_specials() {
        let config = TrainingConfig::default()
            .with_vocab_size(257)
            .with_special_tokens(["<a>", "<b>"]);
        let model = BpeTrainer::new(config).train("hello").unwrap();

        assert!(model.merges.is_empty());
        assert_eq!(model.vocab.len(), 258);
    }

    #[test]
    fn test_specials_reserved_before_merges() {
        let config = TrainingConfig::default()
            .with_vocab_size(260)
            .with_special_tokens(["<PAD>", "<UNK>", "<PAD>", "x"]);
        let model = BpeTrainer::new(config).train("low lower lowest").unwrap();

        assert_eq!(model.vocab.specials(), &[256, 257]);
        assert_eq!(model.vocab.symbol_of(256).unwrap().as_bytes(), b"<PAD>");
        assert_eq!(model.vocab.symbol_of(258).unwrap().as_bytes(), b"lo");
        assert_eq!(model.vocab.symbol_of(259).unwrap().as_bytes(), b"low");
        assert_eq!(model.vocab.len(), 256 + 2 + model.merges.len());
    }

    #[test]
    fn test_merges_stay_within_words() {
        let model = BpeTrainer::with_vocab_size(300).train("ab ba ab ba").unwrap();

        for rule in &model.merges {
            assert!(!rule.merged().contains(&b' '));
        }
        assert_eq!(model.merges.len(), 2);
    }

    #[test]
    fn test_deterministic() {
        let text = "the quick brown fox jumps over the lazy dog the end";
        let first = BpeTrainer::with_vocab_size(300).train(text).unwrap();
        let second = BpeTrainer::with_vocab_size(300).train(text).unwrap();

        assert_eq!(first.merges, second.merges);
        let a: Vec<_> = first.vocab.iter().map(|(id, s)| (id, s.clone())).collect();
        let b: Vec<_> = second.vocab.iter().map(|(id, s)| (id, s.clone())).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_literal_special_in_text_shadows() {
        let config = TrainingConfig::default()
            .with_vocab_size(270)
            .with_special_tokens(["ab"]);
        let model = BpeTrainer::new(config).train("ab ab ab").unwrap();

        // The special keeps 256; the merge that recreates "ab" gets 257.
        assert_eq!(model.merges.len(), 1);
        assert_eq!(model.vocab.len(), 258);
        assert_eq!(model.vocab.symbol_of(256).unwrap().as_bytes(), b"ab");
        assert_eq!(model.vocab.id_of(b"ab").unwrap(), 257);
    }

    #[test]
    fn test_train_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "aaab\n").unwrap();

        let model = BpeTrainer::with_vocab_size(258)
            .train_file(file.path())
            .unwrap();
        assert_eq!(model.merges.len(), 2);
    }

    #[test]
    fn test_train_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = BpeTrainer::default()
            .train_file(&dir.path().join("missing.txt"))
            .unwrap_err();

        assert!(matches!(err, TokenizerError::Io { .. }));
    }

    #[test]
    fn test_train_file_invalid_for_encoding() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[b'a', 0xff, b'b']).unwrap();

        let err = BpeTrainer::default().train_file(file.path()).unwrap_err();
        assert!(matches!(err, TokenizerError::Encoding(_)));

        let config = TrainingConfig::default().with_encoding(TextEncoding::Latin1);
        assert!(BpeTrainer::new(config).train_file(file.path()).is_ok());
    }
}
