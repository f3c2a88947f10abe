use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;
use thiserror::Error;

use super::{Language, PartOfSpeech};

/// A synset identifier: part of speech plus a language-scoped offset,
/// printed bit-exact as `"<pos-letter>#<offset>"` (e.g. `n#03001627`).
///
/// Offsets aligned to the shared cross-language backbone are zero-padded
/// digit strings; synsets defined by a single language instead carry a
/// marker letter in front (`N`, `W`, `H`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SynsetId {
    pos: PartOfSpeech,
    offset: SmolStr,
}

/// Error returned when a synset identifier string is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid synset id '{0}'")]
pub struct InvalidSynsetId(pub String);

impl SynsetId {
    pub fn new(pos: PartOfSpeech, offset: impl Into<SmolStr>) -> Self {
        Self {
            pos,
            offset: offset.into(),
        }
    }

    /// Parse the `"<pos-letter>#<offset>"` form.
    pub fn parse(id: &str) -> Result<Self, InvalidSynsetId> {
        let mut chars = id.chars();
        let pos = chars
            .next()
            .and_then(PartOfSpeech::from_letter)
            .ok_or_else(|| InvalidSynsetId(id.to_string()))?;
        if chars.next() != Some('#') {
            return Err(InvalidSynsetId(id.to_string()));
        }
        let offset = chars.as_str();
        if offset.is_empty() {
            return Err(InvalidSynsetId(id.to_string()));
        }
        Ok(Self::new(pos, offset))
    }

    pub fn pos(&self) -> PartOfSpeech {
        self.pos
    }

    pub fn offset(&self) -> &str {
        &self.offset
    }

    /// True if the synset is not aligned to the shared backbone: its offset
    /// starts with a language marker letter instead of a digit.
    pub fn is_new(&self) -> bool {
        !self
            .offset
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit())
    }

    /// The language the synset was originally defined for, read off the
    /// offset: digits mean the shared (English) backbone, a marker letter
    /// names the defining language. Unknown markers yield `None`.
    pub fn origin_language(&self) -> Option<Language> {
        match self.offset.chars().next()? {
            c if c.is_ascii_digit() => Some(Language::English),
            'N' | 'W' | 'Y' => Some(Language::Italian),
            'H' => Some(Language::Hebrew),
            'S' => Some(Language::Spanish),
            'L' => Some(Language::Latin),
            'R' => Some(Language::Romanian),
            'P' => Some(Language::Portuguese),
            _ => None,
        }
    }
}

impl fmt::Display for SynsetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.pos.letter(), self.offset)
    }
}

impl FromStr for SynsetId {
    type Err = InvalidSynsetId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
