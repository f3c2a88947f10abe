//! Entity resolution: lemma strings to [`Lemma`] records.
//!
//! Resolution goes through the lemma index, never a synset scan, so exact
//! lookups are O(1) and wildcard lookups are O(matches). Wildcard (non-
//! strict) matching is prefix matching: the index is sorted, so a prefix
//! scan is the pattern semantics the underlying structure supports
//! directly.

use smol_str::SmolStr;
use tracing::trace;

use crate::base::{Language, PartOfSpeech, normalize_lemma};
use crate::model::Lemma;
use crate::store::{IndexRow, Store};

use super::error::{WordNetError, WordNetResult};

/// Resolves lemma strings against one language's lemma index.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a, S> {
    store: &'a S,
    language: Language,
}

impl<'a, S: Store> Resolver<'a, S> {
    pub fn new(store: &'a S, language: Language) -> Self {
        Self { store, language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Look up a lemma in one part of speech. Absence is a `NotFound`
    /// error, distinct from a lemma that exists but has no relations.
    pub fn get_lemma(&self, lemma: &str, pos: PartOfSpeech) -> WordNetResult<Lemma> {
        let key = normalize_lemma(lemma);
        trace!("[RESOLVER] get_lemma '{key}' pos={pos}");

        let senses = self
            .store
            .index_row(self.language, &key)?
            .map(|row| row.get(pos).to_vec())
            .unwrap_or_default();
        if senses.is_empty() {
            return Err(WordNetError::not_found("lemma", key.as_str()));
        }
        Ok(Lemma::new(key, pos, self.language, senses))
    }

    /// Look up a lemma without restricting the part of speech. Fails with
    /// `AmbiguousLemma` when the index lists it under more than one.
    pub fn get_lemma_any(&self, lemma: &str) -> WordNetResult<Lemma> {
        let key = normalize_lemma(lemma);
        trace!("[RESOLVER] get_lemma_any '{key}'");

        let row = self
            .store
            .index_row(self.language, &key)?
            .ok_or_else(|| WordNetError::not_found("lemma", key.as_str()))?;

        let mut entries = row.pos_entries();
        let (pos, senses) = entries
            .next()
            .ok_or_else(|| WordNetError::not_found("lemma", key.as_str()))?;
        let remaining: Vec<_> = entries.map(|(pos, _)| pos).collect();
        if !remaining.is_empty() {
            let candidates = std::iter::once(pos)
                .chain(remaining)
                .map(|pos| pos.letter().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(WordNetError::AmbiguousLemma {
                lemma: key,
                candidates,
            });
        }
        Ok(Lemma::new(key, pos, self.language, senses.to_vec()))
    }

    /// Search the lemma index. Strict mode requires an exact, case-
    /// sensitive match; non-strict mode matches any lemma starting with
    /// `pattern`. Returns one record per matching (lemma, part of speech),
    /// in index order; no matches is an empty result, not an error.
    pub fn search(
        &self,
        pattern: &str,
        pos: Option<PartOfSpeech>,
        strict: bool,
    ) -> WordNetResult<Vec<Lemma>> {
        let key = normalize_lemma(pattern);
        trace!("[RESOLVER] search '{key}' pos={pos:?} strict={strict}");

        let mut matches = Vec::new();
        if strict {
            if let Some(row) = self.store.index_row(self.language, &key)? {
                self.collect_records(&key, &row, pos, &mut matches);
            }
        } else {
            for (lemma, row) in self.store.index_prefix(self.language, &key)? {
                self.collect_records(&lemma, &row, pos, &mut matches);
            }
        }
        trace!("[RESOLVER] search '{key}' -> {} records", matches.len());
        Ok(matches)
    }

    fn collect_records(
        &self,
        lemma: &SmolStr,
        row: &IndexRow,
        pos: Option<PartOfSpeech>,
        into: &mut Vec<Lemma>,
    ) {
        for (entry_pos, senses) in row.pos_entries() {
            if pos.is_some_and(|wanted| wanted != entry_pos) {
                continue;
            }
            into.push(Lemma::new(
                lemma.clone(),
                entry_pos,
                self.language,
                senses.to_vec(),
            ));
        }
    }
}
