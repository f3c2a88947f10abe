//! Shared fixture store for the integration tests: a small bilingual
//! MultiWordNet with an English noun backbone (chair → furniture →
//! artifact → object → entity, plus part-of edges), Latin synsets over
//! the same offsets (including a lexical gap), and Latin lexical
//! relations (antonymy, derivation, composition, related-to).

// Not every test binary exercises every helper.
#![allow(dead_code)]

use std::sync::Arc;

use once_cell::sync::Lazy;
use smol_str::SmolStr;
use wordnet::store::{MemoryStore, MorphoRow, RelationRow, SynsetRow};
use wordnet::{Language, PartOfSpeech, SynsetId, WordNet};

pub static STORE: Lazy<Arc<MemoryStore>> = Lazy::new(|| Arc::new(build_store()));

pub fn latin() -> WordNet<MemoryStore> {
    WordNet::new(Arc::clone(&STORE), Language::Latin)
}

pub fn english() -> WordNet<MemoryStore> {
    WordNet::new(Arc::clone(&STORE), Language::English)
}

pub fn id(s: &str) -> SynsetId {
    SynsetId::parse(s).unwrap()
}

fn words(items: &[&str]) -> Vec<SmolStr> {
    items.iter().map(|item| SmolStr::new(item)).collect()
}

fn synset(idstr: &str, members: &[&str]) -> SynsetRow {
    SynsetRow {
        id: id(idstr),
        words: words(members),
        phrases: Vec::new(),
        gloss: None,
        semfield: None,
        is_new: false,
    }
}

fn build_store() -> MemoryStore {
    let mut store = MemoryStore::new();

    // ---- English backbone -------------------------------------------
    let english_rows = [
        synset("n#00001740", &["entity"]),
        synset("n#00002684", &["object"]),
        synset("n#00021939", &["artifact", "artefact"]),
        SynsetRow {
            semfield: Some(SmolStr::new("110")),
            ..synset("n#03405725", &["furniture", "article_of_furniture"])
        },
        SynsetRow {
            semfield: Some(SmolStr::new("110")),
            gloss: Some("a seat for one person; \"he sat on the chair\"".to_string()),
            ..synset("n#03001627", &["chair"])
        },
        synset("n#04326896", &["stool"]),
        synset("n#03002711", &["backrest"]),
        synset("n#03512589", &["leg"]),
        synset("v#02202047", &["alienate"]),
        synset("n#00088107", &["alienation"]),
    ];
    for row in english_rows {
        store.add_synset(Language::English, row);
    }

    // ---- Shared backbone relations ----------------------------------
    let backbone = [
        RelationRow::semantic("@", id("n#03001627"), id("n#03405725")),
        RelationRow::semantic("@", id("n#04326896"), id("n#03405725")),
        RelationRow::semantic("@", id("n#03405725"), id("n#00021939")),
        RelationRow::semantic("@", id("n#00021939"), id("n#00002684")),
        RelationRow::semantic("@", id("n#00002684"), id("n#00001740")),
        RelationRow::semantic("#p", id("n#03002711"), id("n#03001627")),
        RelationRow::semantic("#p", id("n#03512589"), id("n#03001627")),
        RelationRow::semantic("|", id("n#03001627"), id("n#04326896")),
    ];
    for row in backbone {
        store.add_relation(Language::Common, row);
    }

    // ---- Latin synsets over the same offsets ------------------------
    let latin_rows = [
        SynsetRow {
            semfield: Some(SmolStr::new("110")),
            ..synset("n#03001627", &["sella", "cathedra"])
        },
        SynsetRow {
            phrases: words(&["instrumenta_domus"]),
            ..synset("n#03405725", &["supellex"])
        },
        // lexical gap: no Latin word for "backrest"
        SynsetRow {
            phrases: words(&["tergum_sellae"]),
            ..synset("n#03002711", &["GAP!"])
        },
        synset("n#03512589", &["pes"]),
        synset("v#02202047", &["abalieno", "abdico"]),
        synset("n#00088107", &["abalienatio"]),
        synset("v#01775164", &["amo", "diligo"]),
        synset("v#01774136", &["odi"]),
        synset("n#09754051", &["respublica"]),
        synset("n#00031921", &["res"]),
        synset("v#01984317", &["sedeo"]),
        synset("a#01234567", &["alienus"]),
        synset("n#07654321", &["alienus", "peregrinus"]),
        SynsetRow {
            is_new: true,
            ..synset("n#L0000042", &["sella_curulis"])
        },
    ];
    for row in latin_rows {
        store.add_synset(Language::Latin, row);
    }

    // ---- Latin relations --------------------------------------------
    let latin_relations = [
        // curule seat is a chair; added outside the backbone
        RelationRow::semantic("@", id("n#L0000042"), id("n#03001627")).with_status("new"),
        // antonymy, stored in one direction only
        RelationRow::lexical("!", id("v#01775164"), "amo", id("v#01774136"), "odi"),
        // abalienatio derived from abalieno
        RelationRow::lexical("\\", id("n#00088107"), "abalienatio", id("v#02202047"), "abalieno"),
        // respublica composed of res
        RelationRow::lexical("+c", id("n#09754051"), "respublica", id("n#00031921"), "res"),
        // sella related to sedeo
        RelationRow::lexical("/", id("n#03001627"), "sella", id("v#01984317"), "sedeo"),
    ];
    for row in latin_relations {
        store.add_relation(Language::Latin, row);
    }

    // ---- Supplementary tables ---------------------------------------
    store.add_synonyms(
        Language::Latin,
        PartOfSpeech::Noun,
        "03001627",
        words(&["sella", "cathedra"]),
    );
    store.add_morpho(
        Language::Latin,
        MorphoRow {
            lemma: SmolStr::new("abalieno"),
            pos: PartOfSpeech::Verb,
            principal_parts: Some("abalieno abalienare abalienavi abalienatus".to_string()),
            irregular_forms: None,
            alternative_forms: None,
            pronunciation: None,
            miscellanea: Some("v1spia--1-".to_string()),
        },
    );

    store
}
