//! Pair counting for BPE training.
//!
//! Counts are kept in discovery order: the order in which a full scan of the
//! corpus (words in corpus order, left to right within each word) first meets
//! each pair. [`PairStatistics::best`] relies on that order to break ties.

use ahash::RandomState;
use bytepair_core::Pair;
use indexmap::IndexMap;

use super::corpus::Corpus;

/// Pair -> aggregate frequency, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct PairStatistics {
    counts: IndexMap<Pair, u64, RandomState>,
}

impl PairStatistics {
    /// Count all adjacent pairs in the corpus.
    ///
    /// A word with frequency `f` adds `f` for each adjacent occurrence of a
    /// pair, so a pair repeated inside one word counts once per occurrence.
    pub fn from_corpus(corpus: &Corpus) -> Self {
        let mut counts: IndexMap<Pair, u64, RandomState> = IndexMap::default();

        for (word, freq) in corpus.iter() {
            for window in word.windows(2) {
                let pair = (window[0].clone(), window[1].clone());
                *counts.entry(pair).or_insert(0) += freq;
            }
        }

        Self { counts }
    }

    /// The pair to merge next.
    ///
    /// Highest count wins; among equal counts, the pair discovered first.
    pub fn best(&self) -> Option<(&Pair, u64)> {
        let mut best: Option<(&Pair, u64)> = None;

        for (pair, &count) in &self.counts {
            match best {
                Some((_, top)) if count <= top => {}
                _ => best = Some((pair, count)),
            }
        }

        best
    }

    /// Get the count for a pair.
    pub fn get(&self, pair: &Pair) -> Option<u64> {
        self.counts.get(pair).copied()
    }

    /// Iterate `(pair, count)` in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&Pair, u64)> + '_ {
        self.counts.iter().map(|(pair, &count)| (pair, count))
    }

    /// Get the number of distinct pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when no word has two or more symbols.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
