//! Tests for the relation index: outgoing filtering, incoming with
//! catalog-driven reverse synthesis, common/language table merging, and
//! the invalid-type error surface.

mod helpers;

use helpers::{id, latin};
use wordnet::{PartOfSpeech, WordNetError};

#[test]
fn test_outgoing_filters_by_type() {
    let net = latin();
    let hypernyms = net.outgoing(&id("n#03001627"), Some("@")).unwrap();

    assert_eq!(hypernyms.len(), 1);
    assert_eq!(hypernyms[0].target(), &id("n#03405725"));
    assert_eq!(hypernyms[0].long_name(), Some("hypernym"));
}

#[test]
fn test_outgoing_unrestricted_merges_all_types() {
    let relations = latin().outgoing(&id("n#03001627"), None).unwrap();
    let codes: Vec<_> = relations
        .iter()
        .map(|relation| relation.type_code())
        .collect();

    // common rows first (storage order), then the language table's
    assert!(codes.contains(&"@"));
    assert!(codes.contains(&"|"));
    assert!(codes.contains(&"/"));
}

#[test]
fn test_incoming_without_inverse_scans_by_target() {
    let net = latin();
    let parts = net.incoming(&id("n#03001627"), Some("#p")).unwrap();

    let sources: Vec<_> = parts
        .iter()
        .map(|relation| relation.source().to_string())
        .collect();
    assert_eq!(sources, vec!["n#03002711", "n#03512589"]);
    assert!(parts.iter().all(|relation| relation.type_code() == "#p"));
}

#[test]
fn test_incoming_with_inverse_synthesizes_from_stored_direction() {
    let net = latin();

    // no hyponym rows are stored; incoming hyponym edges come from the
    // stored hypernym direction, swapped
    let hyponym_edges = net.incoming(&id("n#03001627"), Some("~")).unwrap();
    assert_eq!(hyponym_edges.len(), 1);
    assert_eq!(hyponym_edges[0].type_code(), "~");
    assert_eq!(hyponym_edges[0].source(), &id("n#03405725"));
    assert_eq!(hyponym_edges[0].target(), &id("n#03001627"));

    // has-part edges into a part come from stored part-of rows
    let has_part = net.incoming(&id("n#03002711"), Some("%p")).unwrap();
    assert_eq!(has_part.len(), 1);
    assert_eq!(has_part[0].source(), &id("n#03001627"));
    assert_eq!(has_part[0].target(), &id("n#03002711"));
}

#[test]
fn test_incoming_equals_swapped_outgoing_of_stored_type() {
    let net = latin();
    for synset in [
        id("n#03001627"),
        id("n#03405725"),
        id("n#00021939"),
        id("n#00002684"),
        id("n#00001740"),
        id("n#04326896"),
    ] {
        let incoming: Vec<_> = net
            .incoming(&synset, Some("~"))
            .unwrap()
            .into_iter()
            .map(|relation| (relation.source().clone(), relation.target().clone()))
            .collect();
        let swapped_outgoing: Vec<_> = net
            .outgoing(&synset, Some("@"))
            .unwrap()
            .into_iter()
            .map(|relation| (relation.target().clone(), relation.source().clone()))
            .collect();
        assert_eq!(incoming, swapped_outgoing, "synset {synset}");
    }
}

#[test]
fn test_language_table_is_merged_with_common() {
    let net = latin();
    let incoming = net.incoming(&id("n#03001627"), Some("@")).unwrap();

    // the curule-seat edge lives in the Latin table, not the backbone
    assert_eq!(incoming.len(), 1);
    assert_eq!(incoming[0].source(), &id("n#L0000042"));
    assert!(incoming[0].is_new());
}

#[test]
fn test_unknown_type_is_an_error() {
    let err = latin().outgoing(&id("n#03001627"), Some("??")).unwrap_err();
    assert!(matches!(err, WordNetError::UnknownType(_)));
}

#[test]
fn test_inapplicable_type_is_an_error() {
    // verb-group is not defined for nouns
    let err = latin().outgoing(&id("n#03001627"), Some("$")).unwrap_err();
    assert!(matches!(
        err,
        WordNetError::InvalidType { pos: PartOfSpeech::Noun, .. }
    ));
}

#[test]
fn test_word_keyed_lookup_covers_lexical_rows() {
    let net = latin();

    let outgoing = net.outgoing_for_word("amo", Some("!")).unwrap();
    assert_eq!(outgoing.len(), 1);
    assert_eq!(outgoing[0].target_word(), Some("odi"));
    assert!(outgoing[0].is_lexical());

    // only one direction is stored; the reverse comes from incoming
    assert!(net.outgoing_for_word("odi", Some("!")).unwrap().is_empty());
    let incoming = net.incoming_for_word("odi", Some("!")).unwrap();
    assert_eq!(incoming.len(), 1);
    assert_eq!(incoming[0].source_word(), Some("amo"));
}

#[test]
fn test_word_keyed_reverse_synthesis() {
    let net = latin();

    // "composes" edges into respublica are synthesized from the stored
    // composed-of row, words swapped along with the endpoints
    let composes = net.incoming_for_word("respublica", Some("-c")).unwrap();
    assert_eq!(composes.len(), 1);
    assert_eq!(composes[0].type_code(), "-c");
    assert_eq!(composes[0].source_word(), Some("res"));
    assert_eq!(composes[0].target_word(), Some("respublica"));
}

#[test]
fn test_relation_to_reports_first_connecting_type() {
    let net = latin();
    assert_eq!(
        net.relation_to(&id("n#03001627"), &id("n#03405725")).unwrap(),
        Some("@".into())
    );
    assert_eq!(
        net.relation_to(&id("n#03001627"), &id("n#00001740")).unwrap(),
        None
    );
}

#[test]
fn test_incoming_unrestricted_merges_both_paths() {
    let net = latin();
    let relations = net.incoming(&id("n#03001627"), None).unwrap();

    // direct target scan: stored @ and #p rows into the chair
    assert!(relations.iter().any(|relation| {
        relation.type_code() == "@" && relation.source() == &id("n#L0000042")
    }));
    assert!(relations.iter().any(|relation| {
        relation.type_code() == "#p" && relation.source() == &id("n#03002711")
    }));
    // synthesized path: the hyponym edge derived from the stored hypernym
    assert!(relations.iter().any(|relation| {
        relation.type_code() == "~" && relation.source() == &id("n#03405725")
    }));
}
