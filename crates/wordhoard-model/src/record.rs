use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Part-of-speech tag attached to a definition.
///
/// Dictionary entry headers use free-form labels ("noun", "transitive verb");
/// anything unrecognized maps to `None` at the call site rather than failing
/// the extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    Noun,
    Pronoun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Conjunction,
    Interjection,
}

impl PartOfSpeech {
    /// Parse a site label like "noun" or "transitive verb".
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().to_lowercase();
        // Qualified verb labels ("transitive verb", "auxiliary verb") all tag as verb.
        if label.ends_with("verb") && !label.ends_with("adverb") {
            return Some(PartOfSpeech::Verb);
        }
        match label.as_str() {
            "noun" | "plural noun" => Some(PartOfSpeech::Noun),
            "pronoun" => Some(PartOfSpeech::Pronoun),
            "adjective" => Some(PartOfSpeech::Adjective),
            "adverb" => Some(PartOfSpeech::Adverb),
            "preposition" => Some(PartOfSpeech::Preposition),
            "conjunction" => Some(PartOfSpeech::Conjunction),
            "interjection" => Some(PartOfSpeech::Interjection),
            _ => None,
        }
    }
}

/// A single sense of the word, as extracted from the dictionary source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<PartOfSpeech>,
}

/// Etymology information from the dictionary source.
///
/// The site splits this across two page sections: prose etymology, and a
/// "First Known Use" date. Sets rather than lists because the same chunk can
/// appear under both layouts on some pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordOrigin {
    pub description: BTreeSet<String>,
    pub first_use: BTreeSet<String>,
}

impl WordOrigin {
    pub fn is_empty(&self) -> bool {
        self.description.is_empty() && self.first_use.is_empty()
    }
}

/// Partial field set contributed by the dictionary source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryFields {
    pub definitions: Vec<Definition>,
    pub origin: WordOrigin,
}

/// Partial field set contributed by the thesaurus source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThesaurusFields {
    pub synonyms: BTreeSet<String>,
    pub antonyms: BTreeSet<String>,
    pub related_words: BTreeSet<String>,
    pub rhymes: BTreeSet<String>,
}

/// The aggregated output of one lookup.
///
/// The two sources contribute disjoint fields, so assembling a record is a
/// plain merge with no precedence rules. Word sets are `BTreeSet` so that
/// repeated lookups against unchanged pages serialize identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,
    pub definitions: Vec<Definition>,
    pub origin: WordOrigin,
    pub synonyms: BTreeSet<String>,
    pub antonyms: BTreeSet<String>,
    pub related_words: BTreeSet<String>,
    pub rhymes: BTreeSet<String>,
}

/// A nameable field of a `WordRecord`, for output filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Definitions,
    Origin,
    Synonyms,
    Antonyms,
    RelatedWords,
    Rhymes,
}

impl WordRecord {
    /// Empty a single field in place. Used by output filtering; the lookup
    /// itself always populates every field it can.
    pub fn clear_field(&mut self, field: Field) {
        match field {
            Field::Definitions => self.definitions.clear(),
            Field::Origin => self.origin = WordOrigin::default(),
            Field::Synonyms => self.synonyms.clear(),
            Field::Antonyms => self.antonyms.clear(),
            Field::RelatedWords => self.related_words.clear(),
            Field::Rhymes => self.rhymes.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_of_speech_labels() {
        assert_eq!(PartOfSpeech::from_label("noun"), Some(PartOfSpeech::Noun));
        assert_eq!(PartOfSpeech::from_label(" Verb "), Some(PartOfSpeech::Verb));
        assert_eq!(
            PartOfSpeech::from_label("transitive verb"),
            Some(PartOfSpeech::Verb)
        );
        assert_eq!(
            PartOfSpeech::from_label("auxiliary verb"),
            Some(PartOfSpeech::Verb)
        );
        assert_eq!(PartOfSpeech::from_label("adverb"), Some(PartOfSpeech::Adverb));
        assert_eq!(PartOfSpeech::from_label("geographical name"), None);
        assert_eq!(PartOfSpeech::from_label(""), None);
    }

    #[test]
    fn test_clear_field() {
        let mut record = WordRecord {
            word: "run".into(),
            definitions: vec![Definition {
                text: "to go faster than a walk".into(),
                part_of_speech: Some(PartOfSpeech::Verb),
            }],
            origin: WordOrigin {
                description: ["Middle English ronnen".to_string()].into(),
                first_use: ["before the 12th century".to_string()].into(),
            },
            synonyms: ["sprint".to_string(), "dash".to_string()].into(),
            antonyms: BTreeSet::new(),
            related_words: BTreeSet::new(),
            rhymes: ["fun".to_string()].into(),
        };

        record.clear_field(Field::Synonyms);
        assert!(record.synonyms.is_empty());
        assert!(!record.definitions.is_empty());

        record.clear_field(Field::Origin);
        assert!(record.origin.is_empty());
        assert_eq!(record.rhymes.len(), 1);
    }

    #[test]
    fn test_record_serialization_is_stable() {
        let record = WordRecord {
            word: "calm".into(),
            definitions: vec![],
            origin: WordOrigin::default(),
            synonyms: ["placid".to_string(), "serene".to_string(), "placid".to_string()].into(),
            antonyms: BTreeSet::new(),
            related_words: BTreeSet::new(),
            rhymes: BTreeSet::new(),
        };
        let a = serde_json::to_string(&record).unwrap();
        let b = serde_json::to_string(&record).unwrap();
        assert_eq!(a, b);
        // Sets dedupe and order their members.
        assert_eq!(record.synonyms.len(), 2);
        assert_eq!(record.synonyms.iter().next().unwrap(), "placid");
    }
}
