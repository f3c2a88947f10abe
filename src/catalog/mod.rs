//! Static relation catalog: the language-agnostic table of known relation
//! type codes, their part-of-speech applicability, and reverse-relation
//! declarations.
//!
//! The catalog is process-wide immutable data, loaded once on first use.
//! The inverse declarations encode the storage invariant that only one
//! direction of a reversible pair is persisted: a type that declares an
//! inverse is the *synthesized* direction, and its entry names the stored
//! counterpart its edges are derived from. Stored types, symmetric types
//! (antonym, nearest) and intentionally one-directional types (also-see,
//! verb-group) declare none.

pub mod semfield;

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::base::PartOfSpeech;

/// One row of the relation catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// The exact symbol stored in relation rows (e.g. `"@"`, `"#m"`).
    pub symbol: &'static str,
    /// Human-readable relation name.
    pub long_name: &'static str,
    /// Parts of speech the type applies to.
    pub pos: &'static [PartOfSpeech],
    /// Lexical (word-to-word) rather than semantic (synset-to-synset).
    pub is_lexical: bool,
    /// For synthesized types: the stored counterpart the reverse edges are
    /// derived from.
    pub inverse: Option<&'static str>,
}

impl CatalogEntry {
    /// Whether the relation type is defined for the given part of speech.
    pub fn applies_to(&self, pos: PartOfSpeech) -> bool {
        self.pos.contains(&pos)
    }
}

use crate::base::PartOfSpeech::{Adjective, Adverb, Noun, Verb};

const NVAR: &[PartOfSpeech] = &[Noun, Verb, Adjective, Adverb];
const N: &[PartOfSpeech] = &[Noun];
const V: &[PartOfSpeech] = &[Verb];
const A: &[PartOfSpeech] = &[Adjective];
const NA: &[PartOfSpeech] = &[Noun, Adjective];
const VA: &[PartOfSpeech] = &[Verb, Adjective];

/// The full catalog, in the order the distribution documents the codes.
#[rustfmt::skip]
const ENTRIES: &[CatalogEntry] = &[
    CatalogEntry { symbol: "!", long_name: "antonym", pos: NVAR, is_lexical: true, inverse: None },
    CatalogEntry { symbol: "@", long_name: "hypernym", pos: NVAR, is_lexical: false, inverse: None },
    CatalogEntry { symbol: "~", long_name: "hyponym", pos: NVAR, is_lexical: false, inverse: Some("@") },
    CatalogEntry { symbol: "#m", long_name: "member-of", pos: N, is_lexical: false, inverse: None },
    CatalogEntry { symbol: "#s", long_name: "substance-of", pos: N, is_lexical: false, inverse: None },
    CatalogEntry { symbol: "#p", long_name: "part-of", pos: N, is_lexical: false, inverse: None },
    CatalogEntry { symbol: "%m", long_name: "has-member", pos: N, is_lexical: false, inverse: Some("#m") },
    CatalogEntry { symbol: "%s", long_name: "has-substance", pos: N, is_lexical: false, inverse: Some("#s") },
    CatalogEntry { symbol: "%p", long_name: "has-part", pos: N, is_lexical: false, inverse: Some("#p") },
    CatalogEntry { symbol: "=", long_name: "attribute", pos: NA, is_lexical: false, inverse: None },
    CatalogEntry { symbol: "|", long_name: "nearest", pos: NVAR, is_lexical: false, inverse: None },
    CatalogEntry { symbol: "+r", long_name: "has-role", pos: N, is_lexical: false, inverse: None },
    CatalogEntry { symbol: "-r", long_name: "is-role-of", pos: N, is_lexical: false, inverse: Some("+r") },
    CatalogEntry { symbol: "+c", long_name: "composed-of", pos: NVAR, is_lexical: true, inverse: None },
    CatalogEntry { symbol: "-c", long_name: "composes", pos: NVAR, is_lexical: true, inverse: Some("+c") },
    CatalogEntry { symbol: "*", long_name: "entailment", pos: V, is_lexical: false, inverse: None },
    CatalogEntry { symbol: ">", long_name: "causes", pos: V, is_lexical: false, inverse: None },
    CatalogEntry { symbol: "^", long_name: "also-see", pos: VA, is_lexical: false, inverse: None },
    CatalogEntry { symbol: "$", long_name: "verb-group", pos: V, is_lexical: false, inverse: None },
    CatalogEntry { symbol: "&", long_name: "similar-to", pos: A, is_lexical: false, inverse: None },
    CatalogEntry { symbol: "<", long_name: "participle", pos: A, is_lexical: true, inverse: None },
    CatalogEntry { symbol: "\\", long_name: "derived-from", pos: NVAR, is_lexical: true, inverse: None },
    CatalogEntry { symbol: "/", long_name: "related-to", pos: NVAR, is_lexical: true, inverse: None },
];

static BY_SYMBOL: LazyLock<FxHashMap<&'static str, &'static CatalogEntry>> = LazyLock::new(|| {
    ENTRIES.iter().map(|entry| (entry.symbol, entry)).collect()
});

/// Look up a catalog entry by its exact symbol.
pub fn lookup(symbol: &str) -> Option<&'static CatalogEntry> {
    BY_SYMBOL.get(symbol).copied()
}

/// The stored counterpart a synthesized type derives its edges from, or
/// `None` for stored, symmetric and one-directional types.
pub fn inverse_of(symbol: &str) -> Option<&'static str> {
    lookup(symbol).and_then(|entry| entry.inverse)
}

/// All catalog entries applicable to the given part of speech, in catalog
/// order.
pub fn types_for(pos: PartOfSpeech) -> impl Iterator<Item = &'static CatalogEntry> {
    ENTRIES.iter().filter(move |entry| entry.applies_to(pos))
}

/// The whole catalog, in documentation order.
pub fn entries() -> &'static [CatalogEntry] {
    ENTRIES
}
