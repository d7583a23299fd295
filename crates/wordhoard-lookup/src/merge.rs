use wordhoard_model::{DictionaryFields, ThesaurusFields, WordRecord};

/// Assemble the final record from both partial field sets.
///
/// The dictionary source contributes definitions and origin, the thesaurus
/// source the four word sets; the field sets are disjoint, so this is a
/// pure move with no precedence rules.
pub fn merge(word: &str, dictionary: DictionaryFields, thesaurus: ThesaurusFields) -> WordRecord {
    WordRecord {
        word: word.to_string(),
        definitions: dictionary.definitions,
        origin: dictionary.origin,
        synonyms: thesaurus.synonyms,
        antonyms: thesaurus.antonyms,
        related_words: thesaurus.related_words,
        rhymes: thesaurus.rhymes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordhoard_model::{Definition, PartOfSpeech, WordOrigin};

    #[test]
    fn test_merge_is_field_faithful() {
        let dictionary = DictionaryFields {
            definitions: vec![Definition {
                text: "to go faster than a walk".into(),
                part_of_speech: Some(PartOfSpeech::Verb),
            }],
            origin: WordOrigin {
                description: ["Middle English ronnen".to_string()].into(),
                first_use: ["before 12th century".to_string()].into(),
            },
        };
        let thesaurus = ThesaurusFields {
            synonyms: ["sprint".to_string(), "dash".to_string()].into(),
            antonyms: ["crawl".to_string()].into(),
            related_words: ["jog".to_string()].into(),
            rhymes: ["fun".to_string()].into(),
        };

        let record = merge("run", dictionary.clone(), thesaurus.clone());

        assert_eq!(record.word, "run");
        assert_eq!(record.definitions, dictionary.definitions);
        assert_eq!(record.origin, dictionary.origin);
        assert_eq!(record.synonyms, thesaurus.synonyms);
        assert_eq!(record.antonyms, thesaurus.antonyms);
        assert_eq!(record.related_words, thesaurus.related_words);
        assert_eq!(record.rhymes, thesaurus.rhymes);
    }

    #[test]
    fn test_merge_of_empty_fields_is_empty_record() {
        let record = merge(
            "sesquipedalian",
            DictionaryFields::default(),
            ThesaurusFields::default(),
        );
        assert!(record.definitions.is_empty());
        assert!(record.origin.is_empty());
        assert!(record.synonyms.is_empty());
    }
}
