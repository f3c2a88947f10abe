use std::fmt;
use std::hash::{Hash, Hasher};

use smol_str::SmolStr;

use crate::base::{Language, PartOfSpeech, SynsetId};

/// A word form within one part-of-speech context, carrying the sense list
/// its index row maps it to.
///
/// Identity is `(lemma, part of speech, language)`: two lookups of the
/// same word compare equal regardless of how their sense lists were
/// obtained. Read-only, constructed on lookup.
#[derive(Debug, Clone)]
pub struct Lemma {
    lemma: SmolStr,
    pos: PartOfSpeech,
    language: Language,
    synsets: Vec<SynsetId>,
}

impl Lemma {
    pub fn new(
        lemma: impl Into<SmolStr>,
        pos: PartOfSpeech,
        language: Language,
        synsets: Vec<SynsetId>,
    ) -> Self {
        Self {
            lemma: lemma.into(),
            pos,
            language,
            synsets,
        }
    }

    /// The stored lemma string (underscore-joined for multiword lemmas).
    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    pub fn pos(&self) -> PartOfSpeech {
        self.pos
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Identifiers of the synsets this lemma belongs to, in index order.
    pub fn synset_ids(&self) -> &[SynsetId] {
        &self.synsets
    }
}

impl PartialEq for Lemma {
    fn eq(&self, other: &Self) -> bool {
        self.lemma == other.lemma && self.pos == other.pos && self.language == other.language
    }
}

impl Eq for Lemma {}

impl Hash for Lemma {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lemma.hash(state);
        self.pos.hash(state);
        self.language.hash(state);
    }
}

impl fmt::Display for Lemma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lemma.contains('_') {
            f.write_str(&self.lemma.replace('_', " "))
        } else {
            f.write_str(&self.lemma)
        }
    }
}
