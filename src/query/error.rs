//! Error types for query operations.

use smol_str::SmolStr;
use thiserror::Error;

use crate::base::PartOfSpeech;
use crate::store::StoreError;

pub type WordNetResult<T> = Result<T, WordNetError>;

/// Errors surfaced by the query layer.
///
/// `NotFound` is reserved for single-entity lookups by exact key; searches
/// with no matches return an empty result instead.
#[derive(Debug, Error)]
pub enum WordNetError {
    /// A lemma, synset or semfield code is absent. Recoverable.
    #[error("no {kind} found for '{key}'")]
    NotFound { kind: &'static str, key: String },

    /// The relation type exists but is not defined for the entity's part
    /// of speech.
    #[error("no relation type '{symbol}' for '{pos}'")]
    InvalidType { symbol: SmolStr, pos: PartOfSpeech },

    /// The relation type code is not in the catalog.
    #[error("unknown relation type '{0}'")]
    UnknownType(SmolStr),

    /// A part-of-speech-unrestricted exact lookup matched several parts
    /// of speech.
    #[error("cannot disambiguate '{lemma}' between '{candidates}'")]
    AmbiguousLemma { lemma: SmolStr, candidates: String },

    /// The backing store could not be read. Fatal to the call.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl WordNetError {
    pub fn not_found(kind: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            key: key.into(),
        }
    }

    pub fn invalid_type(symbol: impl Into<SmolStr>, pos: PartOfSpeech) -> Self {
        Self::InvalidType {
            symbol: symbol.into(),
            pos,
        }
    }

    /// True for the recoverable negative-result case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
