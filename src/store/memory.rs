//! In-memory backing store.
//!
//! Keeps each language's tables in maps tuned for the read interface: the
//! lemma index is a sorted map so prefix scans are range scans, and
//! relation rows live in one insertion-ordered vector with secondary
//! indexes by source id, target id, source word and target word.

use std::collections::BTreeMap;
use std::ops::Bound;

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::base::{GAP_LEMMA, Language, PartOfSpeech, SynsetId};

use super::rows::{IndexRow, MorphoRow, RelationRow, SynsetRow};
use super::{Store, StoreError};

#[derive(Debug, Default)]
struct LanguageTables {
    synsets: FxHashMap<SynsetId, SynsetRow>,
    index: BTreeMap<SmolStr, IndexRow>,
    relations: Vec<RelationRow>,
    by_source: FxHashMap<SynsetId, Vec<u32>>,
    by_target: FxHashMap<SynsetId, Vec<u32>>,
    by_source_word: FxHashMap<SmolStr, Vec<u32>>,
    by_target_word: FxHashMap<SmolStr, Vec<u32>>,
    morpho: FxHashMap<SmolStr, Vec<MorphoRow>>,
    synonyms: FxHashMap<(PartOfSpeech, SmolStr), Vec<SmolStr>>,
}

impl LanguageTables {
    fn push_relation(&mut self, row: RelationRow) {
        let slot = self.relations.len() as u32;
        self.by_source.entry(row.source.clone()).or_default().push(slot);
        self.by_target.entry(row.target.clone()).or_default().push(slot);
        if let Some(word) = &row.source_word {
            self.by_source_word.entry(word.clone()).or_default().push(slot);
        }
        if let Some(word) = &row.target_word {
            self.by_target_word.entry(word.clone()).or_default().push(slot);
        }
        self.relations.push(row);
    }

    fn rows_at(&self, slots: Option<&Vec<u32>>) -> Vec<RelationRow> {
        slots
            .into_iter()
            .flatten()
            .map(|slot| self.relations[*slot as usize].clone())
            .collect()
    }
}

/// An in-memory [`Store`].
///
/// The `common` tables always exist (they hold the shared backbone
/// relations); other languages exist once rows are added for them.
/// Querying a language that was never populated is a
/// [`StoreError::TableUnavailable`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    languages: FxHashMap<Language, LanguageTables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        let mut store = Self::default();
        store.languages.insert(Language::Common, LanguageTables::default());
        store
    }

    fn tables(&self, language: Language) -> Result<&LanguageTables, StoreError> {
        self.languages
            .get(&language)
            .ok_or(StoreError::TableUnavailable { language })
    }

    fn tables_mut(&mut self, language: Language) -> &mut LanguageTables {
        self.languages.entry(language).or_default()
    }

    /// Register a language so queries against it see empty tables instead
    /// of an unavailable store.
    pub fn add_language(&mut self, language: Language) {
        self.tables_mut(language);
    }

    /// Insert a synset row and index its ordinary members (the GAP
    /// sentinel is never indexed).
    pub fn add_synset(&mut self, language: Language, row: SynsetRow) {
        let tables = self.tables_mut(language);
        for word in &row.words {
            if word.as_str() != GAP_LEMMA {
                tables
                    .index
                    .entry(word.clone())
                    .or_default()
                    .get_mut(row.id.pos())
                    .push(row.id.clone());
            }
        }
        tables.synsets.insert(row.id.clone(), row);
    }

    /// Insert an index entry directly, for lemmas whose index row is not
    /// derivable from synset membership.
    pub fn add_index_entry(&mut self, language: Language, lemma: impl Into<SmolStr>, id: SynsetId) {
        self.tables_mut(language)
            .index
            .entry(lemma.into())
            .or_default()
            .get_mut(id.pos())
            .push(id);
    }

    pub fn add_relation(&mut self, language: Language, row: RelationRow) {
        self.tables_mut(language).push_relation(row);
    }

    pub fn add_morpho(&mut self, language: Language, row: MorphoRow) {
        self.tables_mut(language)
            .morpho
            .entry(row.lemma.clone())
            .or_default()
            .push(row);
    }

    pub fn add_synonyms(
        &mut self,
        language: Language,
        pos: PartOfSpeech,
        offset: impl Into<SmolStr>,
        lemmas: Vec<SmolStr>,
    ) {
        self.tables_mut(language)
            .synonyms
            .insert((pos, offset.into()), lemmas);
    }

    /// Load a store from the JSON fixture format: a list of per-language
    /// table dumps.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let fixture: fixture::StoreFixture =
            serde_json::from_str(json).map_err(|err| StoreError::unavailable(err.to_string()))?;
        let mut store = Self::new();
        for language in fixture.languages {
            store.add_language(language.language);
            for row in language.synsets {
                store.add_synset(language.language, row);
            }
            for row in language.relations {
                store.add_relation(language.language, row);
            }
            for row in language.morpho {
                store.add_morpho(language.language, row);
            }
        }
        Ok(store)
    }
}

#[cfg(feature = "serde")]
mod fixture {
    use serde::Deserialize;

    use crate::base::Language;
    use crate::store::rows::{MorphoRow, RelationRow, SynsetRow};

    #[derive(Deserialize)]
    pub(super) struct StoreFixture {
        pub languages: Vec<LanguageFixture>,
    }

    #[derive(Deserialize)]
    pub(super) struct LanguageFixture {
        pub language: Language,
        #[serde(default)]
        pub synsets: Vec<SynsetRow>,
        #[serde(default)]
        pub relations: Vec<RelationRow>,
        #[serde(default)]
        pub morpho: Vec<MorphoRow>,
    }
}

impl Store for MemoryStore {
    fn synset_row(
        &self,
        language: Language,
        id: &SynsetId,
    ) -> Result<Option<SynsetRow>, StoreError> {
        Ok(self.tables(language)?.synsets.get(id).cloned())
    }

    fn index_row(&self, language: Language, lemma: &str) -> Result<Option<IndexRow>, StoreError> {
        Ok(self.tables(language)?.index.get(lemma).cloned())
    }

    fn index_prefix(
        &self,
        language: Language,
        prefix: &str,
    ) -> Result<Vec<(SmolStr, IndexRow)>, StoreError> {
        let tables = self.tables(language)?;
        Ok(tables
            .index
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(|(lemma, _)| lemma.starts_with(prefix))
            .map(|(lemma, row)| (lemma.clone(), row.clone()))
            .collect())
    }

    fn relations_from(
        &self,
        language: Language,
        source: &SynsetId,
    ) -> Result<Vec<RelationRow>, StoreError> {
        let tables = self.tables(language)?;
        Ok(tables.rows_at(tables.by_source.get(source)))
    }

    fn relations_into(
        &self,
        language: Language,
        target: &SynsetId,
    ) -> Result<Vec<RelationRow>, StoreError> {
        let tables = self.tables(language)?;
        Ok(tables.rows_at(tables.by_target.get(target)))
    }

    fn relations_from_word(
        &self,
        language: Language,
        lemma: &str,
    ) -> Result<Vec<RelationRow>, StoreError> {
        let tables = self.tables(language)?;
        Ok(tables.rows_at(tables.by_source_word.get(lemma)))
    }

    fn relations_into_word(
        &self,
        language: Language,
        lemma: &str,
    ) -> Result<Vec<RelationRow>, StoreError> {
        let tables = self.tables(language)?;
        Ok(tables.rows_at(tables.by_target_word.get(lemma)))
    }

    fn morpho_rows(&self, language: Language, lemma: &str) -> Result<Vec<MorphoRow>, StoreError> {
        Ok(self
            .tables(language)?
            .morpho
            .get(lemma)
            .cloned()
            .unwrap_or_default())
    }

    fn synonym_rows(
        &self,
        language: Language,
        pos: PartOfSpeech,
        offset: &str,
    ) -> Result<Option<Vec<SmolStr>>, StoreError> {
        Ok(self
            .tables(language)?
            .synonyms
            .get(&(pos, SmolStr::new(offset)))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> SynsetId {
        SynsetId::parse(s).unwrap()
    }

    fn synset(idstr: &str, words: &[&str]) -> SynsetRow {
        SynsetRow {
            id: id(idstr),
            words: words.iter().map(|w| SmolStr::new(w)).collect(),
            phrases: Vec::new(),
            gloss: None,
            semfield: None,
            is_new: false,
        }
    }

    #[test]
    fn test_add_synset_indexes_members() {
        let mut store = MemoryStore::new();
        store.add_synset(Language::Latin, synset("n#03001627", &["sella", "cathedra"]));

        let row = store.index_row(Language::Latin, "sella").unwrap().unwrap();
        assert_eq!(row.noun, vec![id("n#03001627")]);
        assert!(row.verb.is_empty());
    }

    #[test]
    fn test_gap_sentinel_is_not_indexed() {
        let mut store = MemoryStore::new();
        store.add_synset(Language::Latin, synset("n#03100000", &["GAP!"]));
        assert!(store.index_row(Language::Latin, "GAP!").unwrap().is_none());
    }

    #[test]
    fn test_index_prefix_scan() {
        let mut store = MemoryStore::new();
        store.add_synset(Language::Latin, synset("v#02202047", &["abalieno"]));
        store.add_synset(Language::Latin, synset("n#00088107", &["abalienatio"]));
        store.add_synset(Language::Latin, synset("v#00756076", &["abdico"]));

        let hits = store.index_prefix(Language::Latin, "abali").unwrap();
        let lemmas: Vec<_> = hits.iter().map(|(lemma, _)| lemma.as_str()).collect();
        assert_eq!(lemmas, vec!["abalienatio", "abalieno"]);

        assert!(store.index_prefix(Language::Latin, "zzz").unwrap().is_empty());
    }

    #[test]
    fn test_relation_secondary_indexes() {
        let mut store = MemoryStore::new();
        let chair = id("n#03001627");
        let furniture = id("n#03405725");
        store.add_relation(
            Language::Common,
            RelationRow::semantic("@", chair.clone(), furniture.clone()),
        );

        assert_eq!(store.relations_from(Language::Common, &chair).unwrap().len(), 1);
        assert_eq!(store.relations_into(Language::Common, &furniture).unwrap().len(), 1);
        assert!(store.relations_from(Language::Common, &furniture).unwrap().is_empty());
    }

    #[test]
    fn test_word_indexes_cover_lexical_rows_only() {
        let mut store = MemoryStore::new();
        let amo = id("v#01775164");
        let odi = id("v#01774136");
        store.add_relation(
            Language::Latin,
            RelationRow::lexical("!", amo.clone(), "amo", odi.clone(), "odi"),
        );
        store.add_relation(Language::Latin, RelationRow::semantic("$", amo, odi));

        assert_eq!(store.relations_from_word(Language::Latin, "amo").unwrap().len(), 1);
        assert_eq!(store.relations_into_word(Language::Latin, "odi").unwrap().len(), 1);
        assert!(store.relations_from_word(Language::Latin, "odi").unwrap().is_empty());
    }

    #[test]
    fn test_unpopulated_language_is_unavailable() {
        let store = MemoryStore::new();
        let err = store.index_row(Language::Hebrew, "x").unwrap_err();
        assert_eq!(err, StoreError::TableUnavailable { language: Language::Hebrew });
        // common always exists
        assert!(store.index_row(Language::Common, "x").unwrap().is_none());
    }

    #[test]
    fn test_storage_order_is_preserved() {
        let mut store = MemoryStore::new();
        let chair = id("n#03001627");
        for offset in ["03405725", "00021939", "00002684"] {
            store.add_relation(
                Language::Common,
                RelationRow::semantic("@", chair.clone(), SynsetId::new(PartOfSpeech::Noun, offset)),
            );
        }
        let targets: Vec<_> = store
            .relations_from(Language::Common, &chair)
            .unwrap()
            .into_iter()
            .map(|row| row.target.offset().to_string())
            .collect();
        assert_eq!(targets, vec!["03405725", "00021939", "00002684"]);
    }
}
