use std::fmt;

/// The four open word classes a WordNet partitions its senses into.
///
/// Identifiers and index columns use the single letters n/v/a/r; note that
/// adverbs are tagged `r`, not `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PartOfSpeech {
    /// All parts of speech, in index-column order (n, v, a, r).
    pub const ALL: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
    ];

    /// The single-letter tag used in synset identifiers.
    pub fn letter(self) -> char {
        match self {
            PartOfSpeech::Noun => 'n',
            PartOfSpeech::Verb => 'v',
            PartOfSpeech::Adjective => 'a',
            PartOfSpeech::Adverb => 'r',
        }
    }

    /// Parse a single-letter tag.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'n' => Some(PartOfSpeech::Noun),
            'v' => Some(PartOfSpeech::Verb),
            'a' => Some(PartOfSpeech::Adjective),
            'r' => Some(PartOfSpeech::Adverb),
            _ => None,
        }
    }

    /// Full lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
