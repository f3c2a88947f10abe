//! The per-language query handle.
//!
//! [`WordNet`] owns a shared reference to the backing store and surfaces
//! the whole query API: resolution, relation lookup, navigation, the
//! read-through supplementary tables, and the chain-walking utilities
//! that callers layer over `outgoing`/`incoming`. Loaded synsets are
//! memoized; everything else is computed per call.

use std::collections::VecDeque;
use std::sync::Arc;

use indexmap::IndexSet;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use tracing::debug;

use crate::base::{Language, PartOfSpeech, SynsetId, normalize_lemma};
use crate::catalog::semfield;
use crate::model::{Lemma, Relation, Synset};
use crate::query::{Navigator, RelationIndex, Resolver, WordNetError, WordNetResult};
use crate::store::{MorphoRow, Store};

/// One language's WordNet within the MultiWordNet.
pub struct WordNet<S> {
    store: Arc<S>,
    language: Language,
    synsets: RwLock<FxHashMap<SynsetId, Arc<Synset>>>,
}

impl<S: Store> WordNet<S> {
    pub fn new(store: Arc<S>, language: Language) -> Self {
        debug!("[WORDNET] opening '{language}' wordnet");
        Self {
            store,
            language,
            synsets: RwLock::new(FxHashMap::default()),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    fn resolver(&self) -> Resolver<'_, S> {
        Resolver::new(self.store.as_ref(), self.language)
    }

    fn relations(&self) -> RelationIndex<'_, S> {
        RelationIndex::new(self.store.as_ref(), self.language)
    }

    fn navigator(&self) -> Navigator<'_, S> {
        Navigator::new(self.store.as_ref(), self.language)
    }

    // ------------------------------------------------------------------
    // Entity resolution
    // ------------------------------------------------------------------

    /// Look up a lemma in one part of speech.
    pub fn get_lemma(&self, lemma: &str, pos: PartOfSpeech) -> WordNetResult<Lemma> {
        self.resolver().get_lemma(lemma, pos)
    }

    /// Look up a lemma, resolving its part of speech from the index;
    /// fails when the word exists under more than one.
    pub fn get_lemma_any(&self, lemma: &str) -> WordNetResult<Lemma> {
        self.resolver().get_lemma_any(lemma)
    }

    /// Exact (`strict`) or prefix search over the lemma index.
    pub fn search(
        &self,
        pattern: &str,
        pos: Option<PartOfSpeech>,
        strict: bool,
    ) -> WordNetResult<Vec<Lemma>> {
        self.resolver().search(pattern, pos, strict)
    }

    // ------------------------------------------------------------------
    // Synsets
    // ------------------------------------------------------------------

    /// Load a synset by identifier, memoized for the handle's lifetime.
    pub fn get_synset(&self, id: &SynsetId) -> WordNetResult<Arc<Synset>> {
        if let Some(hit) = self.synsets.read().get(id).cloned() {
            return Ok(hit);
        }
        let synset = Arc::new(self.navigator().synset(id)?);
        self.synsets
            .write()
            .insert(id.clone(), Arc::clone(&synset));
        Ok(synset)
    }

    /// All synsets a lemma belongs to, in index order.
    pub fn synsets(&self, lemma: &Lemma) -> WordNetResult<Vec<Arc<Synset>>> {
        lemma
            .synset_ids()
            .iter()
            .map(|id| self.get_synset(id))
            .collect()
    }

    // ------------------------------------------------------------------
    // Relation lookup
    // ------------------------------------------------------------------

    /// Stored relations out of a synset, optionally restricted to a type.
    pub fn outgoing(&self, id: &SynsetId, type_code: Option<&str>) -> WordNetResult<Vec<Relation>> {
        self.relations().outgoing(id, type_code)
    }

    /// Relations pointing into a synset, with reverse edges synthesized
    /// from the stored direction where the catalog declares one.
    pub fn incoming(&self, id: &SynsetId, type_code: Option<&str>) -> WordNetResult<Vec<Relation>> {
        self.relations().incoming(id, type_code)
    }

    /// Lexical relations out of a word.
    pub fn outgoing_for_word(
        &self,
        lemma: &str,
        type_code: Option<&str>,
    ) -> WordNetResult<Vec<Relation>> {
        self.relations().outgoing_for_word(lemma, type_code)
    }

    /// Lexical relations into a word, reverse-synthesized like
    /// [`WordNet::incoming`].
    pub fn incoming_for_word(
        &self,
        lemma: &str,
        type_code: Option<&str>,
    ) -> WordNetResult<Vec<Relation>> {
        self.relations().incoming_for_word(lemma, type_code)
    }

    /// The type code of the first stored relation from `source` to
    /// `target`, if any.
    pub fn relation_to(
        &self,
        source: &SynsetId,
        target: &SynsetId,
    ) -> WordNetResult<Option<SmolStr>> {
        for relation in self.outgoing(source, None)? {
            if relation.target() == target {
                return Ok(Some(SmolStr::new(relation.type_code())));
            }
        }
        Ok(None)
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Co-members of any synset shared with the lemma.
    pub fn synonyms(&self, lemma: &Lemma) -> WordNetResult<Vec<Lemma>> {
        self.navigator().synonyms(lemma)
    }

    /// Antonym neighbors, merged from both edge directions.
    pub fn antonyms(&self, lemma: &Lemma) -> WordNetResult<Vec<Lemma>> {
        self.navigator().antonyms(lemma)
    }

    /// Derivational family, optionally restricted to a part of speech.
    pub fn derivates(
        &self,
        lemma: &Lemma,
        pos: Option<PartOfSpeech>,
    ) -> WordNetResult<Vec<Lemma>> {
        self.navigator().derivates(lemma, pos)
    }

    /// Union of synonyms, derivates and related-to neighbors.
    pub fn relatives(
        &self,
        lemma: &Lemma,
        pos: Option<PartOfSpeech>,
    ) -> WordNetResult<Vec<Lemma>> {
        self.navigator().relatives(lemma, pos)
    }

    // ------------------------------------------------------------------
    // Static and supplementary tables
    // ------------------------------------------------------------------

    /// Label of a semfield code; unknown codes are `NotFound`.
    pub fn semfield(&self, code: &str) -> WordNetResult<&'static str> {
        semfield::label(code).ok_or_else(|| WordNetError::not_found("semfield", code))
    }

    /// Raw morphological rows for a lemma (read-through).
    pub fn morpho(&self, lemma: &str) -> WordNetResult<Vec<MorphoRow>> {
        let key = normalize_lemma(lemma);
        Ok(self.store.morpho_rows(self.language, &key)?)
    }

    // ------------------------------------------------------------------
    // Chain walking, layered over outgoing/incoming
    // ------------------------------------------------------------------

    /// The topmost hypernyms reachable from a synset. Cycle-safe.
    pub fn roots(&self, id: &SynsetId) -> WordNetResult<Vec<Arc<Synset>>> {
        let mut seen: IndexSet<SynsetId> = IndexSet::new();
        let mut todo = vec![id.clone()];
        let mut roots = Vec::new();

        while let Some(next) = todo.pop() {
            if !seen.insert(next.clone()) {
                continue;
            }
            let hypernyms: Vec<SynsetId> = self
                .outgoing(&next, Some("@"))?
                .into_iter()
                .map(|relation| relation.target().clone())
                .collect();
            if hypernyms.is_empty() {
                roots.push(self.get_synset(&next)?);
            } else {
                todo.extend(hypernyms);
            }
        }
        Ok(roots)
    }

    /// Every hypernym path from the synset to a root, each path listed
    /// root-first and ending at the synset itself. Edges that would close
    /// a cycle are dropped.
    pub fn hypernym_paths(&self, id: &SynsetId) -> WordNetResult<Vec<Vec<SynsetId>>> {
        self.paths_above(id, &mut Vec::new())
    }

    fn paths_above(
        &self,
        id: &SynsetId,
        on_path: &mut Vec<SynsetId>,
    ) -> WordNetResult<Vec<Vec<SynsetId>>> {
        if on_path.contains(id) {
            return Ok(Vec::new());
        }
        on_path.push(id.clone());

        let hypernyms: Vec<SynsetId> = self
            .outgoing(id, Some("@"))?
            .into_iter()
            .map(|relation| relation.target().clone())
            .collect();

        let mut paths = Vec::new();
        if hypernyms.is_empty() {
            paths.push(vec![id.clone()]);
        }
        for hypernym in hypernyms {
            for mut ancestors in self.paths_above(&hypernym, on_path)? {
                ancestors.push(id.clone());
                paths.push(ancestors);
            }
        }

        on_path.pop();
        Ok(paths)
    }

    /// Length of the longest hypernym path from the synset to a root.
    pub fn max_depth(&self, id: &SynsetId) -> WordNetResult<usize> {
        Ok(self
            .hypernym_paths(id)?
            .iter()
            .map(|path| path.len().saturating_sub(1))
            .max()
            .unwrap_or(0))
    }

    /// Breadth-first closure of one relation type from a synset, the
    /// synset itself excluded, deduplicated in discovery order and
    /// optionally depth-bounded.
    pub fn walk(
        &self,
        id: &SynsetId,
        type_code: &str,
        max_depth: Option<usize>,
    ) -> WordNetResult<Vec<SynsetId>> {
        let mut seen: IndexSet<SynsetId> = IndexSet::new();
        seen.insert(id.clone());
        let mut queue: VecDeque<(SynsetId, usize)> = VecDeque::from([(id.clone(), 0)]);
        let mut closure = Vec::new();

        while let Some((next, depth)) = queue.pop_front() {
            if max_depth.is_some_and(|limit| depth >= limit) {
                continue;
            }
            for relation in self.outgoing(&next, Some(type_code))? {
                let target = relation.target().clone();
                if seen.insert(target.clone()) {
                    closure.push(target.clone());
                    queue.push_back((target, depth + 1));
                }
            }
        }
        Ok(closure)
    }
}
