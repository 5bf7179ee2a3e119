//! Text codecs.
//!
//! Training reads text and tokenization consumes text, but every merge works
//! on bytes. [`TextEncoding`] is the configured conversion between the two.
//! Conversions are strict: characters the codec cannot represent and byte
//! strings that are not valid under it are errors, never replaced.

use crate::error::{Result, TokenizerError};
use std::fmt;
use std::str::FromStr;

/// Supported text encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextEncoding {
    /// UTF-8
    #[default]
    Utf8,
    /// ISO-8859-1: each byte is the code point of the same value
    Latin1,
    /// 7-bit ASCII
    Ascii,
}

impl TextEncoding {
    /// Canonical label, as accepted by [`FromStr`].
    pub fn label(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Latin1 => "latin-1",
            Self::Ascii => "ascii",
        }
    }

    /// Encode text to bytes.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        match self {
            Self::Utf8 => Ok(text.as_bytes().to_vec()),
            Self::Latin1 => self.encode_narrow(text, 0xFF),
            Self::Ascii => self.encode_narrow(text, 0x7F),
        }
    }

    fn encode_narrow(&self, text: &str, max: u32) -> Result<Vec<u8>> {
        text.char_indices()
            .map(|(pos, ch)| {
                let cp = ch as u32;
                if cp <= max {
                    Ok(cp as u8)
                } else {
                    Err(TokenizerError::Encoding(format!(
                        "'{}' codec can't encode character {:?} at position {}",
                        self.label(),
                        ch,
                        pos
                    )))
                }
            })
            .collect()
    }

    /// Decode bytes to text.
    pub fn decode(&self, bytes: &[u8]) -> Result<String> {
        match self {
            Self::Utf8 => std::str::from_utf8(bytes)
                .map(str::to_owned)
                .map_err(|e| {
                    TokenizerError::Encoding(format!("'utf-8' codec can't decode bytes: {}", e))
                }),
            Self::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
            Self::Ascii => match bytes.iter().position(|b| !b.is_ascii()) {
                None => Ok(bytes.iter().map(|&b| b as char).collect()),
                Some(pos) => Err(TokenizerError::Encoding(format!(
                    "'ascii' codec can't decode byte {:#04x} at position {}",
                    bytes[pos], pos
                ))),
            },
        }
    }
}

impl FromStr for TextEncoding {
    type Err = TokenizerError;

    fn from_str(label: &str) -> Result<Self> {
        let normalized = label.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "latin-1" | "latin1" | "iso-8859-1" | "iso8859-1" | "l1" => Ok(Self::Latin1),
            "ascii" | "us-ascii" => Ok(Self::Ascii),
            _ => Err(TokenizerError::InvalidConfig(format!(
                "unsupported text encoding: {:?}",
                label
            ))),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels() {
        assert_eq!("UTF-8".parse::<TextEncoding>().unwrap(), TextEncoding::Utf8);
        assert_eq!("utf8".parse::<TextEncoding>().unwrap(), TextEncoding::Utf8);
        assert_eq!("ISO_8859_1".parse::<TextEncoding>().unwrap(), TextEncoding::Latin1);
        assert_eq!("us-ascii".parse::<TextEncoding>().unwrap(), TextEncoding::Ascii);

        for enc in [TextEncoding::Utf8, TextEncoding::Latin1, TextEncoding::Ascii] {
            assert_eq!(enc.label().parse::<TextEncoding>().unwrap(), enc);
        }
    }

    #[test]
    fn test_unsupported_label() {
        let err = "ebcdic".parse::<TextEncoding>().unwrap_err();
        assert!(matches!(err, TokenizerError::InvalidConfig(_)));
    }

    #[test]
    fn test_utf8() {
        let enc = TextEncoding::Utf8;
        assert_eq!(enc.encode("héllo").unwrap(), "héllo".as_bytes());
        assert_eq!(enc.decode("héllo".as_bytes()).unwrap(), "héllo");

        // Half of a two-byte character
        assert!(matches!(
            enc.decode(&[0xc3]),
            Err(TokenizerError::Encoding(_))
        ));
    }

    #[test]
    fn test_latin1() {
        let enc = TextEncoding::Latin1;
        assert_eq!(enc.encode("héllo").unwrap(), vec![b'h', 0xe9, b'l', b'l', b'o']);
        assert_eq!(enc.decode(&[b'h', 0xe9]).unwrap(), "hé");
        assert!(matches!(enc.encode("€"), Err(TokenizerError::Encoding(_))));
    }

    #[test]
    fn test_ascii() {
        let enc = TextEncoding::Ascii;
        assert_eq!(enc.encode("abc").unwrap(), b"abc");
        assert!(enc.encode("é").is_err());
        assert!(enc.decode(&[b'a', 0x80]).is_err());
    }
}
