use unicode_normalization::UnicodeNormalization;
use wordhoard_model::LookupError;

/// A word that has passed normalization and is safe to embed in a source URL.
///
/// Constructed only by [`normalize_word`]; the private field keeps callers
/// from smuggling un-normalized input into the fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest(String);

impl LookupRequest {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Normalize raw input into a canonical lookup key.
///
/// NFC-normalizes (so `e` + combining acute and `é` compare equal), trims,
/// and lowercases. Allowed characters are ASCII letters plus interior
/// hyphen and apostrophe ("mother-in-law", "o'clock"). Anything else is an
/// `InvalidWord` error, reported before any network activity.
pub fn normalize_word(input: &str) -> Result<LookupRequest, LookupError> {
    let nfc: String = input.nfc().collect();
    let word = nfc.trim().to_lowercase();

    if word.is_empty() {
        return Err(invalid(input, "empty after trimming"));
    }
    for ch in word.chars() {
        if !ch.is_ascii_alphabetic() && ch != '-' && ch != '\'' {
            return Err(invalid(input, &format!("disallowed character {ch:?}")));
        }
    }
    // Hyphen and apostrophe join letters; they cannot lead or trail.
    if word.starts_with(['-', '\'']) || word.ends_with(['-', '\'']) {
        return Err(invalid(input, "hyphen or apostrophe at word boundary"));
    }

    Ok(LookupRequest(word))
}

fn invalid(input: &str, reason: &str) -> LookupError {
    LookupError::InvalidWord {
        word: input.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_case_and_whitespace() {
        assert_eq!(normalize_word("  Run \n").unwrap().as_str(), "run");
        assert_eq!(normalize_word("SPRINT").unwrap().as_str(), "sprint");
    }

    #[test]
    fn test_allows_interior_punctuation() {
        assert_eq!(
            normalize_word("mother-in-law").unwrap().as_str(),
            "mother-in-law"
        );
        assert_eq!(normalize_word("o'clock").unwrap().as_str(), "o'clock");
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            normalize_word(""),
            Err(LookupError::InvalidWord { .. })
        ));
        assert!(matches!(
            normalize_word("   \t"),
            Err(LookupError::InvalidWord { .. })
        ));
    }

    #[test]
    fn test_rejects_non_alphabetic() {
        assert!(normalize_word("1234").is_err());
        assert!(normalize_word("two words").is_err());
        assert!(normalize_word("naïve").is_err());
        assert!(normalize_word("run;drop").is_err());
    }

    #[test]
    fn test_rejects_boundary_punctuation() {
        assert!(normalize_word("-run").is_err());
        assert!(normalize_word("run-").is_err());
        assert!(normalize_word("'twas'").is_err());
    }

    #[test]
    fn test_nfc_applies_before_validation() {
        // e + combining acute becomes é, which is then rejected as non-ASCII,
        // not mangled into something that would hit the network.
        let decomposed = "cafe\u{0301}";
        assert!(normalize_word(decomposed).is_err());
    }
}
