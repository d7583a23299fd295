pub mod filter;
pub mod merge;

pub use filter::FieldFilter;
pub use merge::merge;

use wordhoard_acquire::{normalize_word, Fetcher, LookupRequest, SourceConfig};
use wordhoard_extract::{merriam, thesaurus};
use wordhoard_model::{DictionaryFields, LookupError, Source, ThesaurusFields, WordRecord};

/// Client for the whole pipeline: normalize, fetch both sources in
/// parallel, extract, merge.
///
/// A lookup succeeds only when the word is an entry on both sources; a
/// failure in either branch aborts the whole call and no partial record
/// is ever returned.
pub struct Lexicon {
    fetcher: Fetcher,
}

impl Lexicon {
    /// A client against the live default sources.
    pub fn new() -> Self {
        Self::with_config(SourceConfig::default())
    }

    /// A client with injected base URLs/timeout, for mirrors and fixtures.
    pub fn with_config(config: SourceConfig) -> Self {
        Self {
            fetcher: Fetcher::new(config),
        }
    }

    /// Look up one word and return its aggregated record.
    pub async fn lookup(&self, word: &str) -> Result<WordRecord, LookupError> {
        let request = normalize_word(word)?;
        tracing::info!(word = %request.as_str(), "Looking up word");

        // The two branches share nothing, so run them concurrently. The
        // aggregator still waits for both and fails if either failed.
        let (dictionary, thesaurus) = tokio::join!(
            self.dictionary_fields(&request),
            self.thesaurus_fields(&request),
        );
        let dictionary = dictionary?;
        let thesaurus = thesaurus?;

        let record = merge(request.as_str(), dictionary, thesaurus);
        tracing::info!(
            word = %record.word,
            definitions = record.definitions.len(),
            synonyms = record.synonyms.len(),
            antonyms = record.antonyms.len(),
            "Lookup complete"
        );
        Ok(record)
    }

    /// Look up one word, then drop the filtered-out fields from the result.
    pub async fn lookup_filtered(
        &self,
        word: &str,
        filter: &FieldFilter,
    ) -> Result<WordRecord, LookupError> {
        let mut record = self.lookup(word).await?;
        filter.apply(&mut record);
        Ok(record)
    }

    async fn dictionary_fields(
        &self,
        request: &LookupRequest,
    ) -> Result<DictionaryFields, LookupError> {
        let doc = self.fetcher.fetch(Source::Dictionary, request).await?;
        merriam::extract(&doc)
    }

    async fn thesaurus_fields(
        &self,
        request: &LookupRequest,
    ) -> Result<ThesaurusFields, LookupError> {
        let doc = self.fetcher.fetch(Source::Thesaurus, request).await?;
        thesaurus::extract(&doc)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot lookup against the default sources.
pub async fn lookup(word: &str) -> Result<WordRecord, LookupError> {
    Lexicon::new().lookup(word).await
}
