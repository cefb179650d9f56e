//! Disassembly listings.
//!
//! A listing is one [`Line`] per input word, numbered from zero in input
//! order. Decoding each word is independent, so the index is the only thing
//! tying a line back to its position in the stream.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::config::OutputFormat;
use crate::isa::decoder;
use crate::loader;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Line {
    pub index: usize,
    #[serde(serialize_with = "serialize_hex_word")]
    pub word: u32,
    pub text: String,
}

impl Line {
    pub fn new(index: usize, word: u32) -> Self {
        Self {
            index,
            word,
            text: decoder::disassemble(word),
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "inst {}: {:08x} {}", self.index, self.word, self.text)
    }
}

fn serialize_hex_word<S: Serializer>(word: &u32, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format!("{:08x}", word))
}

/// Decodes every complete word of `bytes`.
pub fn listing(bytes: &[u8]) -> Vec<Line> {
    from_words(loader::words(bytes))
}

pub fn from_words(words: impl IntoIterator<Item = u32>) -> Vec<Line> {
    words
        .into_iter()
        .enumerate()
        .map(|(index, word)| Line::new(index, word))
        .collect()
}

/// Renders `lines` in the requested format.
///
/// Text output ends with a newline after the last line; an empty listing
/// renders as an empty string (text) or `[]` (JSON).
pub fn render(lines: &[Line], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(lines.iter().map(|l| format!("{}\n", l)).collect()),
        OutputFormat::Json => serde_json::to_string_pretty(lines),
    }
}
