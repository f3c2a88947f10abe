//! Row types of the backing-store read interface.
//!
//! These mirror the relational tables a compiled MultiWordNet database
//! exposes; the query layer turns them into [`crate::model`] entities.

use smol_str::SmolStr;

use crate::base::{PartOfSpeech, SynsetId};

/// A row of a per-language synset table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SynsetRow {
    pub id: SynsetId,
    /// Ordered member lemmas; exactly `["GAP!"]` for a lexical gap.
    pub words: Vec<SmolStr>,
    /// Free-combination synonyms that are not lexical units.
    #[cfg_attr(feature = "serde", serde(default))]
    pub phrases: Vec<SmolStr>,
    /// Raw gloss text: definition, optionally followed by `; "example"`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub gloss: Option<String>,
    /// Subject-domain classification code.
    #[cfg_attr(feature = "serde", serde(default))]
    pub semfield: Option<SmolStr>,
    /// True if the synset is not aligned to the shared backbone.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_new: bool,
}

/// A row of the lemma index: one optional sense list per part of speech,
/// in storage order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexRow {
    #[cfg_attr(feature = "serde", serde(default))]
    pub noun: Vec<SynsetId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub verb: Vec<SynsetId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub adjective: Vec<SynsetId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub adverb: Vec<SynsetId>,
}

impl IndexRow {
    /// The sense list for one part of speech.
    pub fn get(&self, pos: PartOfSpeech) -> &[SynsetId] {
        match pos {
            PartOfSpeech::Noun => &self.noun,
            PartOfSpeech::Verb => &self.verb,
            PartOfSpeech::Adjective => &self.adjective,
            PartOfSpeech::Adverb => &self.adverb,
        }
    }

    pub fn get_mut(&mut self, pos: PartOfSpeech) -> &mut Vec<SynsetId> {
        match pos {
            PartOfSpeech::Noun => &mut self.noun,
            PartOfSpeech::Verb => &mut self.verb,
            PartOfSpeech::Adjective => &mut self.adjective,
            PartOfSpeech::Adverb => &mut self.adverb,
        }
    }

    /// The parts of speech with at least one sense, in column order.
    pub fn pos_entries(&self) -> impl Iterator<Item = (PartOfSpeech, &[SynsetId])> {
        PartOfSpeech::ALL
            .into_iter()
            .map(|pos| (pos, self.get(pos)))
            .filter(|(_, ids)| !ids.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.pos_entries().next().is_none()
    }
}

/// A row of a relation table: a directed, typed edge between synsets,
/// with word fields populated for lexical relations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelationRow {
    pub type_code: SmolStr,
    pub source: SynsetId,
    pub target: SynsetId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub source_word: Option<SmolStr>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub target_word: Option<SmolStr>,
    /// `"new"` for edges added outside the shared backbone.
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: Option<SmolStr>,
}

impl RelationRow {
    /// A semantic (synset-to-synset) edge.
    pub fn semantic(type_code: impl Into<SmolStr>, source: SynsetId, target: SynsetId) -> Self {
        Self {
            type_code: type_code.into(),
            source,
            target,
            source_word: None,
            target_word: None,
            status: None,
        }
    }

    /// A lexical (word-to-word) edge scoped within two synsets.
    pub fn lexical(
        type_code: impl Into<SmolStr>,
        source: SynsetId,
        source_word: impl Into<SmolStr>,
        target: SynsetId,
        target_word: impl Into<SmolStr>,
    ) -> Self {
        Self {
            type_code: type_code.into(),
            source,
            target,
            source_word: Some(source_word.into()),
            target_word: Some(target_word.into()),
            status: None,
        }
    }

    pub fn with_status(mut self, status: impl Into<SmolStr>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Supplementary per-lemma morphological metadata, exposed read-through
/// only; the query core never decodes it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MorphoRow {
    pub lemma: SmolStr,
    pub pos: PartOfSpeech,
    #[cfg_attr(feature = "serde", serde(default))]
    pub principal_parts: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub irregular_forms: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub alternative_forms: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pronunciation: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub miscellanea: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_row_pos_entries_skip_empty_columns() {
        let mut row = IndexRow::default();
        row.get_mut(PartOfSpeech::Verb)
            .push(SynsetId::parse("v#02202047").unwrap());

        let entries: Vec<_> = row.pos_entries().map(|(pos, _)| pos).collect();
        assert_eq!(entries, vec![PartOfSpeech::Verb]);
        assert!(!row.is_empty());
        assert!(IndexRow::default().is_empty());
    }

    #[test]
    fn test_relation_row_constructors() {
        let chair = SynsetId::parse("n#03001627").unwrap();
        let furniture = SynsetId::parse("n#03405725").unwrap();

        let semantic = RelationRow::semantic("@", chair.clone(), furniture.clone());
        assert_eq!(semantic.source_word, None);

        let lexical = RelationRow::lexical("!", chair, "sella", furniture, "mensa");
        assert_eq!(lexical.source_word.as_deref(), Some("sella"));
        assert_eq!(lexical.target_word.as_deref(), Some("mensa"));
    }
}
