//! One-hop graph navigation: synonym sets, antonym pairs, derivational
//! families and the broad "semantically near" union.
//!
//! Every operation composes [`Resolver`] and [`RelationIndex`] lookups,
//! deduplicates in discovery order and stays within one relation hop;
//! chain walking beyond one hop is layered on top by callers.

use indexmap::IndexSet;
use tracing::trace;

use crate::base::{Language, PartOfSpeech, SynsetId, normalize_lemma};
use crate::model::{Lemma, Relation, Synset};
use crate::store::{Store, StoreError};

use super::error::{WordNetError, WordNetResult};
use super::relation_index::RelationIndex;
use super::resolver::Resolver;

/// The stored members of the derivation/composition families followed by
/// [`Navigator::derivates`]; both edge directions of each are traversed.
const DERIVATION_FAMILY: [&str; 2] = ["\\", "+c"];

/// Lemma- and synset-level convenience traversals over one language.
#[derive(Debug, Clone, Copy)]
pub struct Navigator<'a, S> {
    store: &'a S,
    language: Language,
}

impl<'a, S: Store> Navigator<'a, S> {
    pub fn new(store: &'a S, language: Language) -> Self {
        Self { store, language }
    }

    fn resolver(&self) -> Resolver<'a, S> {
        Resolver::new(self.store, self.language)
    }

    fn index(&self) -> RelationIndex<'a, S> {
        RelationIndex::new(self.store, self.language)
    }

    /// Load one synset. Rows are looked up under this WordNet's own
    /// language first (so a language's gap rows shadow the backbone),
    /// then the synset's origin language, then English; a fallback source
    /// the store does not carry is skipped, not fatal.
    pub fn synset(&self, id: &SynsetId) -> WordNetResult<Synset> {
        let mut candidates = Vec::with_capacity(3);
        for language in [Some(self.language), id.origin_language(), Some(Language::English)]
            .into_iter()
            .flatten()
        {
            if !candidates.contains(&language) {
                candidates.push(language);
            }
        }

        for language in candidates {
            match self.store.synset_row(language, id) {
                Ok(Some(row)) => return Ok(Synset::from_row(row, language)),
                Ok(None) => {}
                Err(StoreError::TableUnavailable { .. }) => {}
                Err(err) => return Err(err.into()),
            }
        }
        Err(WordNetError::not_found("synset", id.to_string()))
    }

    /// All synsets the lemma belongs to, in index order.
    pub fn synsets(&self, lemma: &Lemma) -> WordNetResult<Vec<Synset>> {
        lemma
            .synset_ids()
            .iter()
            .map(|id| self.synset(id))
            .collect()
    }

    /// All other lemmas sharing any synset with `lemma`, same part of
    /// speech, the lemma itself excluded. The discriminated synonyms
    /// table is preferred; synset membership (ordinary members plus the
    /// phraset) is the fallback.
    pub fn synonyms(&self, lemma: &Lemma) -> WordNetResult<Vec<Lemma>> {
        let mut found: IndexSet<Lemma> = IndexSet::new();

        for id in lemma.synset_ids() {
            if let Some(words) =
                self.store
                    .synonym_rows(self.language, lemma.pos(), id.offset())?
            {
                for word in words {
                    if word != lemma.lemma() {
                        found.insert(self.lemma_or_bare(&word, lemma.pos())?);
                    }
                }
            }
        }

        if found.is_empty() {
            for id in lemma.synset_ids() {
                let synset = self.synset(id)?;
                for word in synset.lemmas() {
                    if word.as_str() != lemma.lemma() {
                        found.insert(self.lemma_or_bare(word, lemma.pos())?);
                    }
                }
                for phrase in synset.phrases() {
                    found.insert(self.lemma_or_bare(phrase, lemma.pos())?);
                }
            }
        }

        trace!("[NAVIGATOR] synonyms '{}' -> {}", lemma.lemma(), found.len());
        Ok(found.into_iter().collect())
    }

    /// Antonym neighbors of the lemma. Antonymy is its own inverse, so
    /// edges are collected from both sides and merged.
    pub fn antonyms(&self, lemma: &Lemma) -> WordNetResult<Vec<Lemma>> {
        let index = self.index();
        let mut found: IndexSet<Lemma> = IndexSet::new();

        for relation in index.outgoing_for_word(lemma.lemma(), Some("!"))? {
            self.insert_far_word(&relation, FarSide::Target, None, &mut found)?;
        }
        for relation in index.incoming_for_word(lemma.lemma(), Some("!"))? {
            self.insert_far_word(&relation, FarSide::Source, None, &mut found)?;
        }
        Ok(found.into_iter().collect())
    }

    /// Derivational family of the lemma: both directions of the
    /// derived-from and composed-of relations, optionally restricted to a
    /// target part of speech.
    pub fn derivates(
        &self,
        lemma: &Lemma,
        pos: Option<PartOfSpeech>,
    ) -> WordNetResult<Vec<Lemma>> {
        let mut found: IndexSet<Lemma> = IndexSet::new();
        self.collect_family(lemma, &DERIVATION_FAMILY, pos, &mut found)?;
        trace!("[NAVIGATOR] derivates '{}' -> {}", lemma.lemma(), found.len());
        Ok(found.into_iter().collect())
    }

    /// The broad "semantically near" union: synonyms, derivates, and
    /// related-to neighbors, optionally restricted to a part of speech.
    pub fn relatives(
        &self,
        lemma: &Lemma,
        pos: Option<PartOfSpeech>,
    ) -> WordNetResult<Vec<Lemma>> {
        let mut found: IndexSet<Lemma> = IndexSet::new();

        for synonym in self.synonyms(lemma)? {
            if pos.is_none_or(|wanted| synonym.pos() == wanted) {
                found.insert(synonym);
            }
        }
        self.collect_family(lemma, &DERIVATION_FAMILY, pos, &mut found)?;
        self.collect_family(lemma, &["/"], pos, &mut found)?;

        Ok(found.into_iter().collect())
    }

    /// Follow both directions of the given stored lexical types, filtering
    /// the far word by part of speech.
    fn collect_family(
        &self,
        lemma: &Lemma,
        symbols: &[&str],
        pos: Option<PartOfSpeech>,
        found: &mut IndexSet<Lemma>,
    ) -> WordNetResult<()> {
        let index = self.index();
        for &symbol in symbols {
            for relation in index.outgoing_for_word(lemma.lemma(), Some(symbol))? {
                self.insert_far_word(&relation, FarSide::Target, pos, found)?;
            }
            for relation in index.incoming_for_word(lemma.lemma(), Some(symbol))? {
                self.insert_far_word(&relation, FarSide::Source, pos, found)?;
            }
        }
        Ok(())
    }

    fn insert_far_word(
        &self,
        relation: &Relation,
        side: FarSide,
        pos: Option<PartOfSpeech>,
        found: &mut IndexSet<Lemma>,
    ) -> WordNetResult<()> {
        let (word, far_pos) = match side {
            FarSide::Source => (relation.source_word(), relation.source().pos()),
            FarSide::Target => (relation.target_word(), relation.target().pos()),
        };
        let Some(word) = word else {
            return Ok(());
        };
        if pos.is_none_or(|wanted| far_pos == wanted) {
            found.insert(self.lemma_or_bare(word, far_pos)?);
        }
        Ok(())
    }

    /// Resolve a related word through the index, falling back to a bare
    /// record when the word has no index row of its own.
    fn lemma_or_bare(&self, word: &str, pos: PartOfSpeech) -> WordNetResult<Lemma> {
        match self.resolver().get_lemma(word, pos) {
            Ok(lemma) => Ok(lemma),
            Err(WordNetError::NotFound { .. }) => Ok(Lemma::new(
                normalize_lemma(word),
                pos,
                self.language,
                Vec::new(),
            )),
            Err(err) => Err(err),
        }
    }
}

/// Which end of a relation carries the neighbor being collected.
#[derive(Debug, Clone, Copy)]
enum FarSide {
    Source,
    Target,
}
