//! Vocabulary storage and lookup.
//!
//! This module maps token IDs to byte-sequence symbols and back. IDs are
//! handed out append-only: 0-255 are the single bytes, then reserved special
//! tokens, then merged symbols in the order training discovers them.

use crate::core::symbol::Symbol;
use crate::error::{Result, TokenizerError};
use ahash::{AHashMap, AHashSet};

/// Number of single-byte base tokens.
pub const BASE_VOCAB_SIZE: usize = 256;

/// Vocabulary with forward (ID -> symbol) and reverse (symbol -> ID) mappings.
#[derive(Debug, Clone)]
pub struct ByteVocabulary {
    /// Forward mapping, indexed by ID
    symbols: Vec<Symbol>,
    /// Reverse mapping: symbol bytes -> most recent ID
    ids: AHashMap<Symbol, u32>,
    /// IDs of reserved special tokens, in reservation order
    specials: Vec<u32>,
    special_set: AHashSet<u32>,
}

impl ByteVocabulary {
    /// Create a vocabulary seeded with the 256 single-byte symbols.
    pub fn new() -> Self {
        let mut vocab = Self {
            symbols: Vec::with_capacity(BASE_VOCAB_SIZE),
            ids: AHashMap::with_capacity(BASE_VOCAB_SIZE),
            specials: Vec::new(),
            special_set: AHashSet::new(),
        };
        vocab.initialize();
        vocab
    }

    /// Reset to the 256 single-byte symbols, dropping everything else.
    pub fn initialize(&mut self) {
        self.symbols.clear();
        self.ids.clear();
        self.specials.clear();
        self.special_set.clear();

        for b in 0..=u8::MAX {
            let symbol = Symbol::byte(b);
            self.ids.insert(symbol.clone(), b as u32);
            self.symbols.push(symbol);
        }
    }

    /// Reserve an ID for a special token.
    ///
    /// Returns the new ID, or the existing one if these bytes are already in
    /// the vocabulary (a repeated special, or one that collides with a byte).
    /// Only newly created IDs are recorded as specials.
    pub fn reserve_special(&mut self, token: &[u8]) -> u32 {
        if let Some(&id) = self.ids.get(token) {
            return id;
        }

        let id = self.push(Symbol::from(token));
        self.specials.push(id);
        self.special_set.insert(id);
        id
    }

    /// Assign the next ID to a newly merged symbol.
    ///
    /// If the bytes are already present the old ID stays valid for decoding,
    /// but lookups by symbol resolve to the new one.
    pub fn define(&mut self, symbol: Symbol) -> u32 {
        self.push(symbol)
    }

    fn push(&mut self, symbol: Symbol) -> u32 {
        let id = self.symbols.len() as u32;
        self.ids.insert(symbol.clone(), id);
        self.symbols.push(symbol);
        id
    }

    /// Check whether a byte sequence is already a symbol.
    #[inline]
    pub fn contains(&self, bytes: &[u8]) -> bool {
        self.ids.contains_key(bytes)
    }

    /// Get the symbol for an ID.
    pub fn symbol_of(&self, id: u32) -> Result<&Symbol> {
        self.get_symbol(id)
            .ok_or(TokenizerError::UnknownTokenId(id))
    }

    /// Get the ID for a symbol.
    pub fn id_of(&self, symbol: &[u8]) -> Result<u32> {
        self.get_id(symbol)
            .ok_or_else(|| TokenizerError::UnknownSymbol(format!("{:?}", Symbol::from(symbol))))
    }

    #[inline]
    pub fn get_symbol(&self, id: u32) -> Option<&Symbol> {
        self.symbols.get(id as usize)
    }

    #[inline]
    pub fn get_id(&self, symbol: &[u8]) -> Option<u32> {
        self.ids.get(symbol).copied()
    }

    /// The base symbol for a single byte.
    #[inline]
    pub fn byte_symbol(&self, b: u8) -> &Symbol {
        &self.symbols[b as usize]
    }

    /// Get the size of the vocabulary (number of IDs handed out).
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; the byte symbols are never removed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// IDs of accepted special tokens, in reservation order.
    pub fn specials(&self) -> &[u32] {
        &self.specials
    }

    /// Check if an ID is a special token.
    #[inline]
    pub fn is_special(&self, id: u32) -> bool {
        self.special_set.contains(&id)
    }

    /// Iterate `(id, symbol)` in ID order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Symbol)> + '_ {
        self.symbols
            .iter()
            .enumerate()
            .map(|(id, symbol)| (id as u32, symbol))
    }
}

impl Default for ByteVocabulary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize() {
        let vocab = ByteVocabulary::new();

        assert_eq!(vocab.len(), 256);
        for b in 0..=u8::MAX {
            assert_eq!(vocab.symbol_of(b as u32).unwrap().as_bytes(), &[b]);
            assert_eq!(vocab.id_of(&[b]).unwrap(), b as u32);
        }
        assert!(vocab.specials().is_empty());
    }

    #[test]
    fn test_reserve_special() {
        let mut vocab = ByteVocabulary::new();
        let pad = vocab.reserve_special(b"<pad>");
        let unk = vocab.reserve_special(b"<unk>");

        assert_eq!(pad, 256);
        assert_eq!(unk, 257);
        assert_eq!(vocab.specials(), &[256, 257]);
        assert!(vocab.is_special(pad));
        assert!(!vocab.is_special(b'a' as u32));
    }

    #[test]
    fn test_reserve_special_idempotent() {
        let mut vocab = ByteVocabulary::new();
        let first = vocab.reserve_special(b"<pad>");
        let second = vocab.reserve_special(b"<pad>");

        assert_eq!(first, second);
        assert_eq!(vocab.len(), 257);
        assert_eq!(vocab.specials(), &[256]);
    }

    #[test]
    fn test_reserve_special_colliding_with_byte() {
        let mut vocab = ByteVocabulary::new();
        let id = vocab.reserve_special(b"a");

        assert_eq!(id, b'a' as u32);
        assert_eq!(vocab.len(), 256);
        assert!(vocab.specials().is_empty());
    }

    #[test]
    fn test_define() {
        let mut vocab = ByteVocabulary::new();
        vocab.reserve_special(b"<pad>");
        let id = vocab.define(Symbol::from(&b"th"[..]));

        assert_eq!(id, 257);
        assert_eq!(vocab.id_of(b"th").unwrap(), 257);
        assert_eq!(vocab.symbol_of(257).unwrap().as_bytes(), b"th");
    }

    #[test]
    fn test_define_shadows_existing_bytes() {
        let mut vocab = ByteVocabulary::new();
        let special = vocab.reserve_special(b"ab");
        let merged = vocab.define(Symbol::from(&b"ab"[..]));

        assert_ne!(special, merged);
        assert_eq!(vocab.len(), 258);
        assert_eq!(vocab.id_of(b"ab").unwrap(), merged);
        assert_eq!(vocab.symbol_of(special).unwrap().as_bytes(), b"ab");
    }

    #[test]
    fn test_lookup_errors() {
        let vocab = ByteVocabulary::new();

        assert!(matches!(
            vocab.symbol_of(300),
            Err(TokenizerError::UnknownTokenId(300))
        ));
        let err = vocab.id_of(b"zz").unwrap_err();
        assert!(err.is_lookup());
    }

    #[test]
    fn test_iter_in_id_order() {
        let mut vocab = ByteVocabulary::new();
        vocab.define(Symbol::from(&b"xy"[..]));

        let ids: Vec<u32> = vocab.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, (0..257).collect::<Vec<_>>());
        assert_eq!(vocab.iter().last().unwrap().1.as_bytes(), b"xy");
    }
}
