//! Typed relation lookup with catalog-driven reverse inference.
//!
//! `outgoing` is a plain filter over stored rows. `incoming` consults the
//! catalog: a type with a declared inverse has no stored rows of its own,
//! so its incoming edges are read from the stored counterpart with the
//! queried synset as source and presented swapped; a type without an
//! inverse is scanned by target directly. The same rule, applied
//! uniformly, covers reversible pairs, symmetric types (antonym, nearest)
//! and one-directional types (also-see, verb-group).
//!
//! Semantic queries merge the `common` relation table with the language's
//! own table, common first, storage order within each. Lexical word-keyed
//! queries read the language table only; the common table carries no word
//! fields.

use tracing::trace;

use crate::base::{Language, PartOfSpeech, SynsetId, normalize_lemma};
use crate::catalog::{self, CatalogEntry};
use crate::model::Relation;
use crate::store::{RelationRow, Store};

use super::error::{WordNetError, WordNetResult};

/// Outgoing/incoming edge lookup for one language's relation tables.
#[derive(Debug, Clone, Copy)]
pub struct RelationIndex<'a, S> {
    store: &'a S,
    language: Language,
}

impl<'a, S: Store> RelationIndex<'a, S> {
    pub fn new(store: &'a S, language: Language) -> Self {
        Self { store, language }
    }

    /// Stored relations whose source is `id`, optionally restricted to one
    /// type. Restricting to an unknown or inapplicable type is an error,
    /// never silently empty.
    pub fn outgoing(&self, id: &SynsetId, type_code: Option<&str>) -> WordNetResult<Vec<Relation>> {
        let rows = self.semantic_rows_from(id)?;
        match type_code {
            Some(symbol) => {
                self.entry_for(symbol, id.pos())?;
                Ok(rows
                    .into_iter()
                    .filter(|row| row.type_code == symbol)
                    .map(Relation::from_row)
                    .collect())
            }
            None => Ok(rows.into_iter().map(Relation::from_row).collect()),
        }
    }

    /// Relations of the requested type pointing into `id`, synthesized
    /// from the stored direction where the catalog declares one. With no
    /// type, every catalog type applicable to the synset's part of speech
    /// is merged, in catalog order.
    pub fn incoming(&self, id: &SynsetId, type_code: Option<&str>) -> WordNetResult<Vec<Relation>> {
        match type_code {
            Some(symbol) => {
                let entry = self.entry_for(symbol, id.pos())?;
                self.incoming_of_type(id, entry)
            }
            None => {
                let mut merged = Vec::new();
                for entry in catalog::types_for(id.pos()) {
                    merged.extend(self.incoming_of_type(id, entry)?);
                }
                Ok(merged)
            }
        }
    }

    fn incoming_of_type(
        &self,
        id: &SynsetId,
        entry: &'static CatalogEntry,
    ) -> WordNetResult<Vec<Relation>> {
        if let Some(stored) = entry.inverse {
            trace!(
                "[REL_INDEX] incoming '{}' for {id}: synthesizing from stored '{stored}'",
                entry.symbol
            );
            Ok(self
                .semantic_rows_from(id)?
                .into_iter()
                .filter(|row| row.type_code == stored)
                .map(|row| Relation::from_row(row).inverted(entry.symbol))
                .collect())
        } else {
            Ok(self
                .semantic_rows_into(id)?
                .into_iter()
                .filter(|row| row.type_code == entry.symbol)
                .map(Relation::from_row)
                .collect())
        }
    }

    /// Stored lexical relations whose source word is `lemma`. Word-keyed
    /// queries validate the symbol but not part-of-speech applicability
    /// (a bare word has none); semantic types simply match no word-keyed
    /// rows.
    pub fn outgoing_for_word(
        &self,
        lemma: &str,
        type_code: Option<&str>,
    ) -> WordNetResult<Vec<Relation>> {
        let key = normalize_lemma(lemma);
        let symbol = self.known_symbol(type_code)?;
        Ok(self
            .store
            .relations_from_word(self.language, &key)?
            .into_iter()
            .filter(|row| symbol.is_none_or(|wanted| row.type_code == wanted))
            .map(Relation::from_row)
            .collect())
    }

    /// Lexical relations of the requested type pointing into the word,
    /// synthesized from the stored direction where the catalog declares
    /// one. With no type, every lexical catalog type is merged.
    pub fn incoming_for_word(
        &self,
        lemma: &str,
        type_code: Option<&str>,
    ) -> WordNetResult<Vec<Relation>> {
        let key = normalize_lemma(lemma);
        match type_code {
            Some(symbol) => {
                let entry = catalog::lookup(symbol)
                    .ok_or_else(|| WordNetError::UnknownType(symbol.into()))?;
                self.incoming_word_of_type(&key, entry)
            }
            None => {
                let mut merged = Vec::new();
                for entry in catalog::entries().iter().filter(|entry| entry.is_lexical) {
                    merged.extend(self.incoming_word_of_type(&key, entry)?);
                }
                Ok(merged)
            }
        }
    }

    fn incoming_word_of_type(
        &self,
        lemma: &str,
        entry: &CatalogEntry,
    ) -> WordNetResult<Vec<Relation>> {
        if let Some(stored) = entry.inverse {
            Ok(self
                .store
                .relations_from_word(self.language, lemma)?
                .into_iter()
                .filter(|row| row.type_code == stored)
                .map(|row| Relation::from_row(row).inverted(entry.symbol))
                .collect())
        } else {
            Ok(self
                .store
                .relations_into_word(self.language, lemma)?
                .into_iter()
                .filter(|row| row.type_code == entry.symbol)
                .map(Relation::from_row)
                .collect())
        }
    }

    fn entry_for(
        &self,
        symbol: &str,
        pos: PartOfSpeech,
    ) -> WordNetResult<&'static CatalogEntry> {
        let entry = catalog::lookup(symbol)
            .ok_or_else(|| WordNetError::UnknownType(symbol.into()))?;
        if !entry.applies_to(pos) {
            return Err(WordNetError::invalid_type(symbol, pos));
        }
        Ok(entry)
    }

    fn known_symbol<'t>(&self, type_code: Option<&'t str>) -> WordNetResult<Option<&'t str>> {
        match type_code {
            Some(symbol) if catalog::lookup(symbol).is_none() => {
                Err(WordNetError::UnknownType(symbol.into()))
            }
            other => Ok(other),
        }
    }

    fn semantic_rows_from(&self, id: &SynsetId) -> WordNetResult<Vec<RelationRow>> {
        let mut rows = self.store.relations_from(Language::Common, id)?;
        if self.language != Language::Common {
            rows.extend(self.store.relations_from(self.language, id)?);
        }
        Ok(rows)
    }

    fn semantic_rows_into(&self, id: &SynsetId) -> WordNetResult<Vec<RelationRow>> {
        let mut rows = self.store.relations_into(Language::Common, id)?;
        if self.language != Language::Common {
            rows.extend(self.store.relations_into(self.language, id)?);
        }
        Ok(rows)
    }
}
