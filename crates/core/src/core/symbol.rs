//! Byte-sequence symbols.
//!
//! A [`Symbol`] is the unit merges operate on: an immutable, non-empty byte
//! sequence. Symbols compare and hash by content, so two symbols built
//! independently from the same bytes are interchangeable.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// An immutable byte sequence; cloning is a reference count bump.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(Arc<[u8]>);

/// One whitespace-delimited word of the training text, as symbols.
pub type Word = Vec<Symbol>;

impl Symbol {
    /// Create a symbol holding a single byte.
    pub fn byte(b: u8) -> Self {
        Self(Arc::from([b].as_slice()))
    }

    /// Concatenate two symbols into a new one.
    pub fn concat(&self, other: &Symbol) -> Self {
        let mut bytes = Vec::with_capacity(self.len() + other.len());
        bytes.extend_from_slice(&self.0);
        bytes.extend_from_slice(&other.0);
        Self(Arc::from(bytes))
    }

    /// The raw bytes of this symbol.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Deref for Symbol {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Symbol {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Borrow<[u8]> for Symbol {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl From<&[u8]> for Symbol {
    fn from(bytes: &[u8]) -> Self {
        Self(Arc::from(bytes))
    }
}

impl From<Vec<u8>> for Symbol {
    fn from(bytes: Vec<u8>) -> Self {
        Self(Arc::from(bytes))
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b\"{}\"", self.0.escape_ascii())
    }
}

/// Lossy text rendering, for printing vocabularies.
impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}
