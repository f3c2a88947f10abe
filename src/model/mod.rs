//! Read-only entities of the semantic network: synsets, lemmas and the
//! typed relations between them.
//!
//! Entities are values constructed from backing-store rows per query; none
//! owns another's lifetime — a [`Lemma`] references its synsets by
//! identifier, a [`Relation`] references synsets and words by
//! identifier/string, all resolved lazily by the query layer.

mod lemma;
mod relation;
mod synset;

pub use lemma::Lemma;
pub use relation::Relation;
pub use synset::{Gloss, Synset};
