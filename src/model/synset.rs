use std::fmt;

use smol_str::SmolStr;

use crate::base::{GAP_LEMMA, Language, PartOfSpeech, SynsetId};
use crate::catalog::semfield;
use crate::store::SynsetRow;

/// A gloss: definition text plus an optional usage example.
///
/// The distribution embeds examples in the definition as `...; "example"`;
/// parsing splits them back out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gloss {
    definition: String,
    example: Option<String>,
}

impl Gloss {
    pub fn parse(raw: &str) -> Self {
        if let Some((definition, example)) = raw.split_once("; \"") {
            let example = example.strip_suffix('"').unwrap_or(example);
            Self {
                definition: definition.trim().to_string(),
                example: Some(example.to_string()),
            }
        } else {
            Self {
                definition: raw.trim().to_string(),
                example: None,
            }
        }
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn example(&self) -> Option<&str> {
        self.example.as_deref()
    }
}

impl fmt::Display for Gloss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.definition)
    }
}

/// One sense: an ordered set of member lemmas sharing a meaning, within
/// one language's WordNet.
///
/// Read-only; constructed on demand from the backing store.
#[derive(Debug, Clone)]
pub struct Synset {
    id: SynsetId,
    language: Language,
    words: Vec<SmolStr>,
    phrases: Vec<SmolStr>,
    gloss: Option<Gloss>,
    semfield: Option<SmolStr>,
    is_new: bool,
}

impl Synset {
    pub(crate) fn from_row(row: SynsetRow, language: Language) -> Self {
        Self {
            id: row.id,
            language,
            words: row.words,
            phrases: row.phrases,
            gloss: row.gloss.as_deref().map(Gloss::parse),
            semfield: row.semfield,
            is_new: row.is_new,
        }
    }

    pub fn id(&self) -> &SynsetId {
        &self.id
    }

    pub fn pos(&self) -> PartOfSpeech {
        self.id.pos()
    }

    pub fn offset(&self) -> &str {
        self.id.offset()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Ordinary member lemmas, with the gap sentinel filtered out.
    pub fn lemmas(&self) -> impl Iterator<Item = &SmolStr> {
        self.words.iter().filter(|word| word.as_str() != GAP_LEMMA)
    }

    /// The raw word list, sentinel included.
    pub fn words(&self) -> &[SmolStr] {
        &self.words
    }

    /// Free-combination synonyms (the phraset); not lexical units.
    pub fn phrases(&self) -> &[SmolStr] {
        &self.phrases
    }

    /// True if this synset is a lexical gap: no lexicalized word in the
    /// language, word list exactly `["GAP!"]`.
    pub fn is_lexical_gap(&self) -> bool {
        self.words.len() == 1 && self.words[0] == GAP_LEMMA
    }

    pub fn gloss(&self) -> Option<&Gloss> {
        self.gloss.as_ref()
    }

    pub fn semfield_code(&self) -> Option<&str> {
        self.semfield.as_deref()
    }

    /// The label of the synset's semfield, through the static table.
    pub fn semfield_label(&self) -> Option<&'static str> {
        self.semfield.as_deref().and_then(semfield::label)
    }

    /// True if the synset is not aligned to the shared backbone.
    pub fn is_new(&self) -> bool {
        self.is_new
    }
}

impl PartialEq for Synset {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Synset {}

impl std::hash::Hash for Synset {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Synset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.gloss {
            Some(gloss) => gloss.fmt(f),
            None => self.id.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(idstr: &str, words: &[&str]) -> SynsetRow {
        SynsetRow {
            id: SynsetId::parse(idstr).unwrap(),
            words: words.iter().map(|w| SmolStr::new(w)).collect(),
            phrases: Vec::new(),
            gloss: None,
            semfield: None,
            is_new: false,
        }
    }

    #[test]
    fn test_gloss_example_split() {
        let gloss = Gloss::parse("a seat for one person; \"he put his coat over the back of the chair\"");
        assert_eq!(gloss.definition(), "a seat for one person");
        assert_eq!(
            gloss.example(),
            Some("he put his coat over the back of the chair")
        );

        let plain = Gloss::parse("a seat for one person");
        assert_eq!(plain.example(), None);
    }

    #[test]
    fn test_lexical_gap_classification() {
        let gap = Synset::from_row(row("n#03100000", &["GAP!"]), Language::Latin);
        assert!(gap.is_lexical_gap());
        assert_eq!(gap.lemmas().count(), 0);

        let ordinary = Synset::from_row(row("n#03001627", &["sella", "cathedra"]), Language::Latin);
        assert!(!ordinary.is_lexical_gap());
        assert_eq!(ordinary.lemmas().count(), 2);
    }

    #[test]
    fn test_semfield_label_through_static_table() {
        let mut r = row("n#03001627", &["sella"]);
        r.semfield = Some(SmolStr::new("110"));
        let synset = Synset::from_row(r, Language::Latin);
        assert_eq!(synset.semfield_label(), Some("Furniture"));
    }
}
