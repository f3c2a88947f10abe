//! # wordnet-base
//!
//! Core library for querying MultiWordNet lexico-semantic databases:
//! lemma resolution, typed relation traversal with reverse-relation
//! inference, and synset graph navigation.
//!
//! The semantic network is immutable at query time; this crate consumes a
//! populated relational store through the narrow [`store::Store`] read
//! interface and never writes. Ingestion of distribution files and
//! database compilation are external collaborators.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! net      → WordNet facade (per-language query handle)
//!   ↓
//! query    → Resolver, RelationIndex, Navigator, error taxonomy
//!   ↓
//! model    → Synset, Lemma, Relation entities
//!   ↓
//! store    → Store trait, row types, MemoryStore
//!   ↓
//! catalog  → static relation catalog + semfield table
//!   ↓
//! base     → primitives (PartOfSpeech, Language, SynsetId)
//! ```
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use wordnet::store::{MemoryStore, SynsetRow};
//! use wordnet::{Language, PartOfSpeech, SynsetId, WordNet};
//!
//! let mut store = MemoryStore::new();
//! store.add_synset(
//!     Language::Latin,
//!     SynsetRow {
//!         id: SynsetId::parse("n#03001627").unwrap(),
//!         words: vec!["sella".into(), "cathedra".into()],
//!         phrases: vec![],
//!         gloss: Some("a seat for one person".into()),
//!         semfield: Some("110".into()),
//!         is_new: false,
//!     },
//! );
//!
//! let latin = WordNet::new(Arc::new(store), Language::Latin);
//! let sella = latin.get_lemma("sella", PartOfSpeech::Noun).unwrap();
//! let synonyms = latin.synonyms(&sella).unwrap();
//! assert_eq!(synonyms[0].lemma(), "cathedra");
//! ```

/// Primitives: parts of speech, languages, synset identifiers
pub mod base;

/// Static tables: relation catalog, semfield classification
pub mod catalog;

/// Entities: synsets, lemmas, relations
pub mod model;

/// The per-language WordNet query handle
pub mod net;

/// Traversal core: resolution, relation lookup, navigation
pub mod query;

/// Backing-store read interface and in-memory implementation
pub mod store;

// Re-export the types most callers need
pub use base::{GAP_LEMMA, Language, PartOfSpeech, SynsetId, normalize_lemma};
pub use model::{Gloss, Lemma, Relation, Synset};
pub use net::WordNet;
pub use query::{Navigator, RelationIndex, Resolver, WordNetError, WordNetResult};
pub use store::{MemoryStore, Store, StoreError};
