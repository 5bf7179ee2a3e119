//! Corpus rewriting after a merge.

use bytepair_core::MergeRule;

use super::corpus::Corpus;

/// Applies a chosen merge to every word of a corpus.
pub struct CorpusRewriter;

impl CorpusRewriter {
    /// Rewrite every word with `rule`, keeping frequencies.
    ///
    /// Words keep their corpus position. If two words become identical, the
    /// later one's frequency is added to the earlier entry.
    pub fn rewrite(corpus: Corpus, rule: &MergeRule) -> Corpus {
        let mut rewritten = Corpus::new();

        for (word, freq) in corpus {
            let word = rule.apply(&word).unwrap_or(word);
            rewritten.add_word(word, freq);
        }

        rewritten
    }
}
