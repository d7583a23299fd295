use regex::Regex;
use std::sync::OnceLock;

fn stray_latin1() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("[\u{80}-\u{ff}]").expect("valid regex"))
}

fn word_char() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\w").expect("valid regex"))
}

/// Clean one extracted text chunk.
///
/// Both sites decorate entries with arrows, bullets, and mis-decoded
/// Latin-1 artifacts in the `U+0080`–`U+00FF` range; those are stripped.
/// A chunk with no word characters left (pure punctuation/whitespace)
/// is noise from the markup, not content, and becomes `None`.
pub fn clean(raw: &str) -> Option<String> {
    let stripped = stray_latin1().replace_all(raw, "");
    if !word_char().is_match(&stripped) {
        return None;
    }
    let trimmed = stripped.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
