use wordhoard_model::{PartOfSpeech, WordRecord};

/// Render a record as a plain-text report for the terminal.
///
/// Empty fields are omitted entirely rather than printed as empty
/// headings, so a filtered lookup reads the same as a sparse entry.
pub fn render_text(record: &WordRecord) -> String {
    let mut out = String::new();
    out.push_str(&record.word);
    out.push('\n');
    out.push_str(&"=".repeat(record.word.len()));
    out.push('\n');

    if !record.definitions.is_empty() {
        out.push_str("\nDefinitions:\n");
        for def in &record.definitions {
            match def.part_of_speech {
                Some(pos) => out.push_str(&format!("  [{}] {}\n", pos_label(pos), def.text)),
                None => out.push_str(&format!("  {}\n", def.text)),
            }
        }
    }

    if !record.origin.is_empty() {
        out.push_str("\nOrigin:\n");
        for desc in &record.origin.description {
            out.push_str(&format!("  {desc}\n"));
        }
        for date in &record.origin.first_use {
            out.push_str(&format!("  First known use: {date}\n"));
        }
    }

    word_list(&mut out, "Synonyms", &record.synonyms);
    word_list(&mut out, "Antonyms", &record.antonyms);
    word_list(&mut out, "Related words", &record.related_words);
    word_list(&mut out, "Rhymes", &record.rhymes);

    out
}

fn word_list(out: &mut String, title: &str, words: &std::collections::BTreeSet<String>) {
    if words.is_empty() {
        return;
    }
    let joined = words.iter().cloned().collect::<Vec<_>>().join(", ");
    out.push_str(&format!("\n{title}:\n  {joined}\n"));
}

fn pos_label(pos: PartOfSpeech) -> &'static str {
    match pos {
        PartOfSpeech::Noun => "noun",
        PartOfSpeech::Pronoun => "pronoun",
        PartOfSpeech::Verb => "verb",
        PartOfSpeech::Adjective => "adjective",
        PartOfSpeech::Adverb => "adverb",
        PartOfSpeech::Preposition => "preposition",
        PartOfSpeech::Conjunction => "conjunction",
        PartOfSpeech::Interjection => "interjection",
    }
}
