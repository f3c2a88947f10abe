use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A language within the MultiWordNet, plus [`Language::Common`] for the
/// shared cross-language tables (backbone relations, semfield data).
///
/// The lowercase name of each variant is the key the backing store is
/// addressed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Language {
    Common,
    English,
    Italian,
    Spanish,
    Portuguese,
    Hebrew,
    Romanian,
    Latin,
}

/// Error returned when a language identifier is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language '{0}'")]
pub struct UnknownLanguage(pub String);

impl Language {
    /// The store key for this language (e.g. `"latin"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Common => "common",
            Language::English => "english",
            Language::Italian => "italian",
            Language::Spanish => "spanish",
            Language::Portuguese => "portuguese",
            Language::Hebrew => "hebrew",
            Language::Romanian => "romanian",
            Language::Latin => "latin",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "common" => Ok(Language::Common),
            "english" => Ok(Language::English),
            "italian" => Ok(Language::Italian),
            "spanish" => Ok(Language::Spanish),
            "portuguese" => Ok(Language::Portuguese),
            "hebrew" => Ok(Language::Hebrew),
            "romanian" => Ok(Language::Romanian),
            "latin" => Ok(Language::Latin),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_key_roundtrip() {
        assert_eq!("latin".parse(), Ok(Language::Latin));
        assert_eq!(Language::Latin.as_str(), "latin");
        assert!("klingon".parse::<Language>().is_err());
    }
}
