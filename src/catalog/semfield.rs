//! Static semfield table: subject-domain classification codes attached to
//! synsets, as a flat `code → label` map.
//!
//! Multiword labels keep the distribution's underscore joining; callers
//! that want display text replace underscores with spaces.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

/// The semfield table, grouped by top-level subject field.
const SEMFIELDS: &[(&str, &str)] = &[
    // General
    ("000", "Factotum"),
    ("010", "Metrology"),
    ("011", "Time_Period"),
    ("012", "Number"),
    ("020", "Color"),
    ("030", "Person"),
    ("040", "Quality"),
    ("050", "Psychological_Features"),
    // Dwelling and buildings
    ("100", "Architecture"),
    ("110", "Furniture"),
    ("111", "Buildings"),
    ("112", "Town_Planning"),
    ("120", "Home"),
    // Humanities
    ("200", "Humanities"),
    ("210", "History"),
    ("211", "Heraldry"),
    ("220", "Linguistics"),
    ("221", "Grammar"),
    ("230", "Literature"),
    ("231", "Philology"),
    ("240", "Philosophy"),
    ("250", "Psychology"),
    ("251", "Psychoanalysis"),
    ("260", "Art"),
    ("261", "Dance"),
    ("262", "Drawing"),
    ("263", "Painting"),
    ("264", "Music"),
    ("265", "Photography"),
    ("266", "Plastic_Arts"),
    ("267", "Sculpture"),
    ("268", "Theatre"),
    ("270", "Religion"),
    ("271", "Mythology"),
    ("272", "Occultism"),
    ("273", "Theology"),
    // Social science
    ("300", "Social_Science"),
    ("310", "Anthropology"),
    ("311", "Ethnology"),
    ("312", "Folklore"),
    ("320", "Economy"),
    ("321", "Banking"),
    ("322", "Commerce"),
    ("323", "Enterprise"),
    ("324", "Finance"),
    ("325", "Insurance"),
    ("326", "Money"),
    ("327", "Exchange"),
    ("330", "Law"),
    ("340", "Administration"),
    ("350", "Military"),
    ("360", "Pedagogy"),
    ("361", "School"),
    ("362", "University"),
    ("370", "Politics"),
    ("371", "Diplomacy"),
    ("380", "Publishing"),
    ("390", "Sociology"),
    ("391", "Artisanship"),
    ("392", "Industry"),
    ("393", "Transport"),
    ("394", "Aviation"),
    ("395", "Vehicles"),
    ("396", "Nautical"),
    ("397", "Railway"),
    ("398", "Tourism"),
    ("399", "Fashion"),
    // Pure science
    ("400", "Pure_Science"),
    ("410", "Astronomy"),
    ("411", "Astrology"),
    ("420", "Biology"),
    ("421", "Biochemistry"),
    ("422", "Anatomy"),
    ("423", "Physiology"),
    ("424", "Genetics"),
    ("425", "Animals"),
    ("426", "Entomology"),
    ("427", "Plants"),
    ("428", "Ecology"),
    ("430", "Chemistry"),
    ("440", "Earth"),
    ("441", "Geography"),
    ("442", "Geology"),
    ("443", "Meteorology"),
    ("444", "Oceanography"),
    ("445", "Paleontology"),
    ("450", "Mathematics"),
    ("451", "Geometry"),
    ("452", "Statistics"),
    ("460", "Physics"),
    ("461", "Acoustics"),
    ("462", "Atomic_Physics"),
    ("463", "Electricity"),
    ("464", "Electronics"),
    ("465", "Gas"),
    ("466", "Optics"),
    // Applied science
    ("500", "Applied_Science"),
    ("510", "Agriculture"),
    ("511", "Animal_Husbandry"),
    ("512", "Veterinary"),
    ("520", "Food"),
    ("521", "Gastronomy"),
    ("530", "Computer_Science"),
    ("540", "Engineering"),
    ("541", "Mechanics"),
    ("542", "Astronautics"),
    ("543", "Hydraulics"),
    ("550", "Telecommunication"),
    ("551", "Post"),
    ("552", "Telegraphy"),
    ("553", "Telephony"),
    ("560", "Medicine"),
    ("561", "Dentistry"),
    ("562", "Pharmacy"),
    ("563", "Psychiatry"),
    ("564", "Radiology"),
    ("565", "Surgery"),
    // Free time
    ("600", "Free_Time"),
    ("610", "Play"),
    ("611", "Betting"),
    ("612", "Card_Games"),
    ("613", "Chess"),
    ("620", "Radio_TV"),
    ("630", "Cinema"),
    ("640", "Entertainment"),
    ("650", "Sport"),
    ("651", "Athletics"),
    ("652", "Badminton"),
    ("653", "Baseball"),
    ("654", "Basketball"),
    ("655", "Boxing"),
    ("656", "Cricket"),
    ("657", "Cycling"),
    ("658", "Fencing"),
    ("659", "Fishing"),
    ("660", "Football"),
    ("661", "Golf"),
    ("662", "Hockey"),
    ("663", "Mountaineering"),
    ("664", "Racing"),
    ("665", "Rugby"),
    ("666", "Skating"),
    ("667", "Skiing"),
    ("668", "Soccer"),
    ("669", "Swimming"),
    ("670", "Tennis"),
    ("671", "Volleyball"),
    ("672", "Wrestling"),
    ("680", "Hunting"),
];

static BY_CODE: LazyLock<FxHashMap<&'static str, &'static str>> =
    LazyLock::new(|| SEMFIELDS.iter().copied().collect());

/// Look up the label for a semfield code.
pub fn label(code: &str) -> Option<&'static str> {
    BY_CODE.get(code).copied()
}

/// All `(code, label)` pairs, in table order.
pub fn entries() -> &'static [(&'static str, &'static str)] {
    SEMFIELDS
}
