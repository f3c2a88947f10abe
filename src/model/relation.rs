use std::fmt;

use smol_str::SmolStr;

use crate::base::SynsetId;
use crate::catalog;
use crate::store::RelationRow;

/// A directed, typed edge of the semantic network.
///
/// Semantic relations connect synsets; lexical relations connect words
/// within two synsets and carry both word fields. Incoming-edge synthesis
/// presents stored rows swapped under the synthesized type code; apart
/// from that, a `Relation` is a verbatim view of a stored row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    type_code: SmolStr,
    source: SynsetId,
    target: SynsetId,
    source_word: Option<SmolStr>,
    target_word: Option<SmolStr>,
    status: Option<SmolStr>,
}

impl Relation {
    pub(crate) fn from_row(row: RelationRow) -> Self {
        Self {
            type_code: row.type_code,
            source: row.source,
            target: row.target,
            source_word: row.source_word,
            target_word: row.target_word,
            status: row.status,
        }
    }

    /// The exact relation symbol (e.g. `"@"`, `"#m"`).
    pub fn type_code(&self) -> &str {
        &self.type_code
    }

    /// Human-readable name of the relation type, if the code is known.
    pub fn long_name(&self) -> Option<&'static str> {
        catalog::lookup(&self.type_code).map(|entry| entry.long_name)
    }

    pub fn source(&self) -> &SynsetId {
        &self.source
    }

    pub fn target(&self) -> &SynsetId {
        &self.target
    }

    pub fn source_word(&self) -> Option<&str> {
        self.source_word.as_deref()
    }

    pub fn target_word(&self) -> Option<&str> {
        self.target_word.as_deref()
    }

    /// True for word-to-word edges (both word fields populated).
    pub fn is_lexical(&self) -> bool {
        self.source_word.is_some() && self.target_word.is_some()
    }

    /// True for edges added outside the shared backbone.
    pub fn is_new(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|status| status.eq_ignore_ascii_case("new"))
    }

    /// The swapped presentation of this edge under a synthesized type
    /// code, used by incoming-edge inference.
    pub(crate) fn inverted(self, as_type: &str) -> Self {
        Self {
            type_code: SmolStr::new(as_type),
            source: self.target,
            target: self.source,
            source_word: self.target_word,
            target_word: self.source_word,
            status: self.status,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &str = match self.long_name() {
            Some(name) => name,
            None => self.type_code.as_str(),
        };
        match (&self.source_word, &self.target_word) {
            (Some(source), Some(target)) => write!(f, "{source} {name} {target}"),
            _ => write!(f, "{} {name} {}", self.source, self.target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> SynsetId {
        SynsetId::parse(s).unwrap()
    }

    #[test]
    fn test_inverted_swaps_endpoints_and_words() {
        let row = RelationRow::lexical("+c", id("n#00000001"), "respublica", id("n#00000002"), "res");
        let inverted = Relation::from_row(row).inverted("-c");

        assert_eq!(inverted.type_code(), "-c");
        assert_eq!(inverted.source(), &id("n#00000002"));
        assert_eq!(inverted.target(), &id("n#00000001"));
        assert_eq!(inverted.source_word(), Some("res"));
        assert_eq!(inverted.target_word(), Some("respublica"));
    }

    #[test]
    fn test_new_status_is_case_insensitive() {
        let row = RelationRow::semantic("@", id("n#00000001"), id("n#00000002")).with_status("NEW");
        assert!(Relation::from_row(row).is_new());
    }

    #[test]
    fn test_display_uses_long_names() {
        let row = RelationRow::semantic("@", id("n#03001627"), id("n#03405725"));
        assert_eq!(Relation::from_row(row).to_string(), "n#03001627 hypernym n#03405725");
    }
}
