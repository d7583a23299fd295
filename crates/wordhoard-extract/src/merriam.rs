use crate::text;
use scraper::{Html, Selector};
use wordhoard_model::{
    Definition, DictionaryFields, LookupError, PartOfSpeech, SourceDocument, WordOrigin,
};

const FIRST_USE_PREFIX: &str = "First Known Use:";

/// Extract definitions and origin from a Merriam-Webster entry page.
///
/// Selectors are anchored to the site's known layout: sense text lives in
/// `span.ssens` runs under each entry, the part-of-speech label in the
/// entry's `span.main-fl` header, and etymology in `div.etymology` with a
/// separate `div.first-use` block on some entries. Missing sections produce
/// empty fields; a page with none of these anchors at all is a parse error.
pub fn extract(doc: &SourceDocument) -> Result<DictionaryFields, LookupError> {
    let document = Html::parse_document(&doc.body);

    let definitions = extract_definitions(&document);
    let origin = extract_origin(&document);

    if definitions.is_empty() && origin.is_empty() && !has_entry_header(&document) {
        return Err(LookupError::Parse {
            site: doc.source,
            reason: "no dictionary entry structure found".to_string(),
        });
    }

    tracing::info!(
        definitions = definitions.len(),
        origin_chunks = origin.description.len() + origin.first_use.len(),
        "Extracted dictionary fields"
    );

    Ok(DictionaryFields {
        definitions,
        origin,
    })
}

/// Walk sense spans and part-of-speech headers in document order, tagging
/// each sense with the nearest preceding header's label.
fn extract_definitions(document: &Html) -> Vec<Definition> {
    let sel = Selector::parse("span.main-fl, span.ssens").expect("valid selector");

    let mut definitions = Vec::new();
    let mut current_pos: Option<PartOfSpeech> = None;

    for el in document.select(&sel) {
        let is_header = el.value().classes().any(|c| c == "main-fl");
        let content: String = el.text().collect();

        if is_header {
            current_pos = PartOfSpeech::from_label(&content);
            continue;
        }

        if let Some(cleaned) = text::clean(&content) {
            // Senses are prefixed with a ':' separator in the markup.
            let sense = cleaned.trim_start_matches(':').trim_start();
            if !sense.is_empty() {
                definitions.push(Definition {
                    text: sense.to_string(),
                    part_of_speech: current_pos,
                });
            }
        }
    }

    definitions
}

/// Pull etymology text, splitting prose description from "First Known Use"
/// dates. Some entries carry the date inline in the etymology block, others
/// in a dedicated first-use block; both are handled.
fn extract_origin(document: &Html) -> WordOrigin {
    let etymology_sel = Selector::parse("div.etymology > div").expect("valid selector");
    let first_use_sel = Selector::parse("div.first-use > div").expect("valid selector");

    let mut origin = WordOrigin::default();

    for el in document.select(&etymology_sel) {
        for chunk in el.text() {
            let Some(cleaned) = text::clean(chunk) else {
                continue;
            };
            if let Some(idx) = cleaned.find(FIRST_USE_PREFIX) {
                let date = cleaned[idx + FIRST_USE_PREFIX.len()..].trim();
                if !date.is_empty() {
                    origin.first_use.insert(date.to_string());
                }
            } else {
                origin.description.insert(cleaned);
            }
        }
    }

    for el in document.select(&first_use_sel) {
        for chunk in el.text() {
            if let Some(cleaned) = text::clean(chunk) {
                let date = cleaned
                    .trim_start_matches(FIRST_USE_PREFIX)
                    .trim()
                    .to_string();
                if !date.is_empty() {
                    origin.first_use.insert(date);
                }
            }
        }
    }

    origin
}

fn has_entry_header(document: &Html) -> bool {
    let sel = Selector::parse("span.main-fl").expect("valid selector");
    document.select(&sel).next().is_some()
}
