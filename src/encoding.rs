use crate::error::FilterError;
use encoding_rs::{Encoding, WINDOWS_1252};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Text encoding of the input and output files
///
/// Lines are split on raw `\n` bytes before decoding, so only encodings
/// that keep ASCII bytes as-is are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextEncoding(&'static Encoding);

impl TextEncoding {
    /// Resolve a WHATWG encoding label (`latin1`, `utf-8`, `windows-1252`, ...)
    pub fn for_label(label: &str) -> Result<Self, FilterError> {
        Encoding::for_label(label.trim().as_bytes())
            .filter(|&encoding| encoding.is_ascii_compatible())
            .map(TextEncoding)
            .ok_or_else(|| FilterError::UnsupportedEncoding(label.to_string()))
    }

    /// The usual SPED encoding. `latin1` resolves to windows-1252, which maps
    /// every byte to a character and back.
    pub fn latin1() -> Self {
        TextEncoding(WINDOWS_1252)
    }

    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Decode one line, dropping undecodable bytes.
    /// The flag is true when something was dropped.
    #[inline]
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> (Cow<'a, str>, bool) {
        match self.0.decode_without_bom_handling(bytes) {
            (text, false) => (text, false),
            // Replacement characters would be re-encoded as `&#65533;`
            (text, true) => (Cow::Owned(text.replace(char::REPLACEMENT_CHARACTER, "")), true),
        }
    }

    /// Encode text back into this encoding
    #[inline]
    pub fn encode<'a>(&self, text: &'a str) -> Cow<'a, [u8]> {
        self.0.encode(text).0
    }
}

impl Default for TextEncoding {
    fn default() -> Self {
        Self::latin1()
    }
}

impl FromStr for TextEncoding {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::for_label(s)
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
