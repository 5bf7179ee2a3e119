//! Merge rule management for BPE.
//!
//! Merge rules are kept in the order training discovered them. That order
//! is the rule's rank: encoding applies rank 0 first, then rank 1, and so on.

use crate::core::symbol::Symbol;

/// A pair of adjacent symbols.
pub type Pair = (Symbol, Symbol);

/// A single learned merge: `left` followed by `right` becomes `merged`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRule {
    pub left: Symbol,
    pub right: Symbol,
    merged: Symbol,
}

impl MergeRule {
    /// Create a merge rule for a pair of symbols.
    pub fn new(left: Symbol, right: Symbol) -> Self {
        let merged = left.concat(&right);
        Self {
            left,
            right,
            merged,
        }
    }

    /// The symbol this rule produces.
    #[inline]
    pub fn merged(&self) -> &Symbol {
        &self.merged
    }

    /// The `(left, right)` pair this rule matches.
    pub fn pair(&self) -> Pair {
        (self.left.clone(), self.right.clone())
    }

    #[inline]
    fn matches_at(&self, symbols: &[Symbol], i: usize) -> bool {
        i + 1 < symbols.len() && symbols[i] == self.left && symbols[i + 1] == self.right
    }

    /// Apply this rule to a symbol sequence.
    ///
    /// Scans left to right, replacing each `(left, right)` occurrence with the
    /// merged symbol and resuming after it, so occurrences never overlap:
    /// `[a, a, a]` under `(a, a)` becomes `[aa, a]`.
    ///
    /// Returns `None` when nothing matched, leaving the caller's sequence as is.
    pub fn apply(&self, symbols: &[Symbol]) -> Option<Vec<Symbol>> {
        let first = (0..symbols.len()).find(|&i| self.matches_at(symbols, i))?;

        let mut out = Vec::with_capacity(symbols.len() - 1);
        out.extend_from_slice(&symbols[..first]);

        let mut i = first;
        while i < symbols.len() {
            if self.matches_at(symbols, i) {
                out.push(self.merged.clone());
                i += 2;
            } else {
                out.push(symbols[i].clone());
                i += 1;
            }
        }

        Some(out)
    }
}

/// Ordered collection of BPE merge rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeList {
    rules: Vec<MergeRule>,
}

impl MergeList {
    /// Create a new empty list of merge rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule; its rank is the current length.
    pub fn push(&mut self, rule: MergeRule) {
        self.rules.push(rule);
    }

    /// Get the rule with the given rank.
    #[inline]
    pub fn get(&self, rank: usize) -> Option<&MergeRule> {
        self.rules.get(rank)
    }

    /// Get the number of merge rules.
    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if there are no merge rules.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate rules in rank order.
    pub fn iter(&self) -> std::slice::Iter<'_, MergeRule> {
        self.rules.iter()
    }

    /// Apply every rule once, in rank order, to a symbol sequence.
    pub fn apply_all(&self, mut symbols: Vec<Symbol>) -> Vec<Symbol> {
        for rule in &self.rules {
            if symbols.len() < 2 {
                break;
            }
            if let Some(merged) = rule.apply(&symbols) {
                symbols = merged;
            }
        }
        symbols
    }
}

impl<'a> IntoIterator for &'a MergeList {
    type Item = &'a MergeRule;
    type IntoIter = std::slice::Iter<'a, MergeRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl FromIterator<MergeRule> for MergeList {
    fn from_iter<I: IntoIterator<Item = MergeRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
