//! # Backing store
//!
//! The narrow read interface the query core consumes, plus an in-memory
//! implementation. The core never writes: a store is populated elsewhere
//! (ingestion and database compilation are external collaborators) and is
//! immutable once shared.

mod memory;
mod rows;

pub use memory::MemoryStore;
pub use rows::{IndexRow, MorphoRow, RelationRow, SynsetRow};

use smol_str::SmolStr;
use thiserror::Error;

use crate::base::{Language, PartOfSpeech, SynsetId};

/// Errors raised by the backing store itself.
///
/// An absent row is NOT an error (`Ok(None)` / an empty vec); these cover
/// the store being unreadable, which is fatal to the call and propagated
/// without retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store holds no tables at all for the language.
    #[error("no tables for language '{language}'")]
    TableUnavailable { language: Language },

    /// The store cannot be read.
    #[error("backing store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}

/// Read access to a populated relational store, per language.
///
/// All methods are synchronous, side-effect-free lookups; implementations
/// must serve single-key queries from indexes, not full-table scans, and
/// must preserve storage order within each result.
pub trait Store {
    /// Synset row by identifier.
    fn synset_row(
        &self,
        language: Language,
        id: &SynsetId,
    ) -> Result<Option<SynsetRow>, StoreError>;

    /// Lemma index row by exact lemma string (case-sensitive).
    fn index_row(&self, language: Language, lemma: &str) -> Result<Option<IndexRow>, StoreError>;

    /// All index rows whose lemma starts with `prefix`, in index order.
    /// This is the wildcard-search contract: O(matches), not O(lemmas).
    fn index_prefix(
        &self,
        language: Language,
        prefix: &str,
    ) -> Result<Vec<(SmolStr, IndexRow)>, StoreError>;

    /// Stored relations whose source synset matches.
    fn relations_from(
        &self,
        language: Language,
        source: &SynsetId,
    ) -> Result<Vec<RelationRow>, StoreError>;

    /// Stored relations whose target synset matches.
    fn relations_into(
        &self,
        language: Language,
        target: &SynsetId,
    ) -> Result<Vec<RelationRow>, StoreError>;

    /// Stored lexical relations whose source word matches.
    fn relations_from_word(
        &self,
        language: Language,
        lemma: &str,
    ) -> Result<Vec<RelationRow>, StoreError>;

    /// Stored lexical relations whose target word matches.
    fn relations_into_word(
        &self,
        language: Language,
        lemma: &str,
    ) -> Result<Vec<RelationRow>, StoreError>;

    /// Supplementary morphological rows for a lemma (read-through).
    fn morpho_rows(&self, language: Language, lemma: &str) -> Result<Vec<MorphoRow>, StoreError>;

    /// The discriminated synonym list for one synset of a lemma's part of
    /// speech, if the language ships a synonyms table.
    fn synonym_rows(
        &self,
        language: Language,
        pos: PartOfSpeech,
        offset: &str,
    ) -> Result<Option<Vec<SmolStr>>, StoreError>;
}
