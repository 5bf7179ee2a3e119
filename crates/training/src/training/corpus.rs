//! Training corpus: distinct words and how often each occurs.
//!
//! Iteration order is first-occurrence order in the training text. The pair
//! statistics tie-break depends on that order, so it is part of the contract.

use ahash::RandomState;
use bytepair_core::{ByteVocabulary, Result, Symbol, TextEncoding, Word};
use indexmap::IndexMap;

/// Word -> frequency, in insertion order.
pub type WordCounts = IndexMap<Word, u64, RandomState>;

/// Characters that separate words.
///
/// Unicode `White_Space` plus the information separators U+001C..U+001F.
#[inline]
pub fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Split text into maximal runs of non-separator characters.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_word_separator).filter(|w| !w.is_empty())
}

/// Multiset of words under training.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    words: WordCounts,
}

impl Corpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a corpus from text.
    ///
    /// Each word is encoded under `encoding` and starts as a sequence of
    /// single-byte symbols taken from `vocab`.
    pub fn from_text(text: &str, encoding: TextEncoding, vocab: &ByteVocabulary) -> Result<Self> {
        let mut corpus = Self::new();

        for word in split_words(text) {
            let bytes = encoding.encode(word)?;
            let symbols: Word = bytes
                .iter()
                .map(|&b| vocab.byte_symbol(b).clone())
                .collect();
            corpus.add_word(symbols, 1);
        }

        Ok(corpus)
    }

    /// Add `count` occurrences of a word, accumulating onto an existing entry.
    pub fn add_word(&mut self, word: Word, count: u64) {
        *self.words.entry(word).or_insert(0) += count;
    }

    /// Frequency of a word, if present.
    pub fn frequency(&self, word: &[Symbol]) -> Option<u64> {
        self.words.get(word).copied()
    }

    /// Iterate `(word, frequency)` in corpus order.
    pub fn iter(&self) -> impl Iterator<Item = (&Word, u64)> + '_ {
        self.words.iter().map(|(word, &count)| (word, count))
    }

    /// Get the number of distinct words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Get the total count of all word occurrences.
    pub fn total_occurrences(&self) -> u64 {
        self.words.values().sum()
    }
}

impl IntoIterator for Corpus {
    type Item = (Word, u64);
    type IntoIter = indexmap::map::IntoIter<Word, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

impl FromIterator<(Word, u64)> for Corpus {
    fn from_iter<I: IntoIterator<Item = (Word, u64)>>(iter: I) -> Self {
        let mut corpus = Self::new();
        for (word, count) in iter {
            corpus.add_word(word, count);
        }
        corpus
    }
}
