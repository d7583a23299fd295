use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two external sites a lookup queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// The dictionary site: definitions, part-of-speech tags, word origin.
    Dictionary,
    /// The thesaurus site: synonyms, antonyms, related words, rhymes.
    Thesaurus,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Dictionary => write!(f, "dictionary"),
            Source::Thesaurus => write!(f, "thesaurus"),
        }
    }
}

/// A raw fetched page, alive only between fetch and extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceDocument {
    pub source: Source,
    /// URL the body was fetched from.
    pub url: String,
    /// HTTP status observed on the response.
    pub status: u16,
    /// Raw HTML body.
    pub body: String,
    /// RFC 3339 timestamp of the fetch, for provenance in logs and caches.
    pub fetched_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_display() {
        assert_eq!(Source::Dictionary.to_string(), "dictionary");
        assert_eq!(Source::Thesaurus.to_string(), "thesaurus");
    }

    #[test]
    fn test_source_serde_snake_case() {
        let json = serde_json::to_string(&Source::Thesaurus).unwrap();
        assert_eq!(json, "\"thesaurus\"");
    }
}
