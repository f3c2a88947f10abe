//! Foundation types for the WordNet query core.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`PartOfSpeech`] - the four open word classes (n/v/a/r)
//! - [`Language`] - the languages a MultiWordNet distribution covers
//! - [`SynsetId`] - `"<pos-letter>#<offset>"` synset identifiers
//! - [`GAP_LEMMA`], [`normalize_lemma`] - lemma-token conventions
//!
//! This module has NO dependencies on other wordnet modules.

mod language;
mod pos;
mod synset_id;

pub use language::{Language, UnknownLanguage};
pub use pos::PartOfSpeech;
pub use synset_id::{InvalidSynsetId, SynsetId};

use smol_str::SmolStr;

/// Sentinel lemma marking a lexical gap: a synset slot with no lexicalized
/// word in the language. Must be preserved bit-exact.
pub const GAP_LEMMA: &str = "GAP!";

/// Normalize a lemma token to its stored form.
///
/// Multiword lemmas are joined with underscores in the index and relation
/// tables, so spaces in caller input are converted before lookup.
pub fn normalize_lemma(lemma: &str) -> SmolStr {
    if lemma.contains(' ') {
        SmolStr::new(lemma.replace(' ', "_"))
    } else {
        SmolStr::new(lemma)
    }
}
