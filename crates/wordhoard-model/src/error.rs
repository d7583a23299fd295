use crate::source::Source;
use thiserror::Error;

/// Everything that can go wrong during a lookup.
///
/// Each network- or page-shaped variant carries the `Source` it came from,
/// so a caller always knows which stage and which site failed.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The input word failed normalization; no network call was made.
    #[error("invalid word {word:?}: {reason}")]
    InvalidWord { word: String, reason: String },

    /// The site answered with a not-found status: the word is not an entry there.
    #[error("{site} has no entry for {word:?}")]
    NotFound { site: Source, word: String },

    /// Transport-level failure: connection, timeout, or a non-success status.
    #[error("fetch from {site} failed for {url}: {reason}")]
    Fetch {
        site: Source,
        url: String,
        reason: String,
    },

    /// The page fetched fine but none of the expected structure was present.
    #[error("could not extract fields from {site} page: {reason}")]
    Parse { site: Source, reason: String },
}

impl LookupError {
    /// The source a failure came from, if it happened past normalization.
    pub fn site(&self) -> Option<Source> {
        match self {
            LookupError::InvalidWord { .. } => None,
            LookupError::NotFound { site, .. }
            | LookupError::Fetch { site, .. }
            | LookupError::Parse { site, .. } => Some(*site),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_site() {
        let err = LookupError::NotFound {
            site: Source::Thesaurus,
            word: "zzyzx".into(),
        };
        assert_eq!(err.to_string(), "thesaurus has no entry for \"zzyzx\"");
        assert_eq!(err.site(), Some(Source::Thesaurus));

        let err = LookupError::InvalidWord {
            word: "".into(),
            reason: "empty".into(),
        };
        assert_eq!(err.site(), None);
    }
}
