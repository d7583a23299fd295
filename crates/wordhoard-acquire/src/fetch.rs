use crate::normalize::LookupRequest;
use std::time::Duration;
use wordhoard_model::{LookupError, Source, SourceDocument};

const DEFAULT_DICTIONARY_BASE: &str = "https://www.merriam-webster.com/dictionary";
const DEFAULT_THESAURUS_BASE: &str = "https://www.thesaurus.com/browse";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where and how to fetch. Base URLs are injectable so tests and deployments
/// can point at fixtures or mirrors instead of the live sites.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub dictionary_base: String,
    pub thesaurus_base: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            dictionary_base: DEFAULT_DICTIONARY_BASE.to_string(),
            thesaurus_base: DEFAULT_THESAURUS_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: "wordhoard/0.1 (dictionary lookup tool)".to_string(),
        }
    }
}

impl SourceConfig {
    pub fn base_for(&self, source: Source) -> &str {
        match source {
            Source::Dictionary => &self.dictionary_base,
            Source::Thesaurus => &self.thesaurus_base,
        }
    }
}

/// Build the deterministic per-source URL for a normalized word.
///
/// Both sites put the word directly in the URL path. Apostrophes are the
/// only allowed character that needs escaping.
pub fn url_for(config: &SourceConfig, source: Source, word: &LookupRequest) -> String {
    let base = config.base_for(source).trim_end_matches('/');
    format!("{base}/{}", word.as_str().replace('\'', "%27"))
}

/// Whether an HTTP status means "this word is not an entry here".
fn is_not_found(status: u16) -> bool {
    status == 404 || status == 410
}

/// Issues single GET requests against the configured sources. No retries:
/// a transient failure surfaces to the caller as a `Fetch` error.
pub struct Fetcher {
    config: SourceConfig,
}

impl Fetcher {
    pub fn new(config: SourceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Fetch one source page for a normalized word.
    pub async fn fetch(
        &self,
        source: Source,
        word: &LookupRequest,
    ) -> Result<SourceDocument, LookupError> {
        let url = url_for(&self.config, source, word);
        tracing::info!(url = %url, source = %source, "Fetching page");

        let client = reqwest::Client::builder()
            .user_agent(&self.config.user_agent)
            .timeout(self.config.timeout)
            .build()
            .map_err(|e| fetch_error(source, &url, &e))?;

        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| fetch_error(source, &url, &e))?;

        let status = response.status();
        if is_not_found(status.as_u16()) {
            return Err(LookupError::NotFound {
                site: source,
                word: word.as_str().to_string(),
            });
        }
        if !status.is_success() {
            return Err(LookupError::Fetch {
                site: source,
                url,
                reason: format!("HTTP {status}"),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| fetch_error(source, &url, &e))?;
        tracing::info!(bytes = body.len(), source = %source, "Received HTML");

        Ok(SourceDocument {
            source,
            url,
            status: status.as_u16(),
            body,
            fetched_at: chrono::Utc::now().to_rfc3339(),
        })
    }
}

fn fetch_error(source: Source, url: &str, err: &reqwest::Error) -> LookupError {
    let reason = if err.is_timeout() {
        format!("timed out: {err}")
    } else {
        err.to_string()
    };
    LookupError::Fetch {
        site: source,
        url: url.to_string(),
        reason,
    }
}
