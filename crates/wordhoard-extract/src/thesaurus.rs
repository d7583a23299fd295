use crate::text;
use scraper::{Html, Selector};
use std::collections::BTreeSet;
use wordhoard_model::{LookupError, SourceDocument, ThesaurusFields};

/// Extract synonyms, antonyms, related words, and rhymes from a thesaurus
/// browse page.
///
/// Each word list lives in its own container: `section.container-info`
/// blocks for synonyms and antonyms, a `related-to-more` listing, and a
/// rhyming dictionary block. A page may legitimately lack any one of them
/// (plenty of words have no antonyms); only a page with none of the
/// containers at all is treated as a layout change and fails.
pub fn extract(doc: &SourceDocument) -> Result<ThesaurusFields, LookupError> {
    let document = Html::parse_document(&doc.body);

    let fields = ThesaurusFields {
        synonyms: collect(
            &document,
            "section.container-info.synonyms div.list-holder ul li a span.text",
        ),
        antonyms: collect(
            &document,
            "section.container-info.antonyms div.list-holder ul li a span.text",
        ),
        related_words: collect(&document, "div#related-to-more dl dd a"),
        rhymes: collect(&document, "div.rhyming-dictionary div#rhm-content a"),
    };

    if !has_any_container(&document) {
        return Err(LookupError::Parse {
            site: doc.source,
            reason: "no thesaurus word-list structure found".to_string(),
        });
    }

    tracing::info!(
        synonyms = fields.synonyms.len(),
        antonyms = fields.antonyms.len(),
        related = fields.related_words.len(),
        rhymes = fields.rhymes.len(),
        "Extracted thesaurus fields"
    );

    Ok(fields)
}

fn collect(document: &Html, selector: &str) -> BTreeSet<String> {
    let sel = Selector::parse(selector).expect("valid selector");
    document
        .select(&sel)
        .filter_map(|el| text::clean(&el.text().collect::<String>()))
        .collect()
}

fn has_any_container(document: &Html) -> bool {
    let sel = Selector::parse(
        "section.container-info, div#related-to-more, div.rhyming-dictionary",
    )
    .expect("valid selector");
    document.select(&sel).next().is_some()
}
