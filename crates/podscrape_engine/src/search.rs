use std::time::Duration;

use podscrape_core::{extract_from_html, ExtractionConfig, SearchResult};
use scrape_logging::{scrape_info, scrape_warn};

use crate::fetch::{ClientBuildError, ClientConfig, Fetcher, ReqwestFetcher};
use crate::{build_query_url, decode_body};

/// Where queries are sent and how result pages are read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSettings {
    pub endpoint: String,
    pub query_param: String,
    pub extraction: ExtractionConfig,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://www.wolframalpha.com/input".to_string(),
            query_param: "i".to_string(),
            extraction: ExtractionConfig::default(),
        }
    }
}

/// Turns queries into `SearchResult`s, one at a time.
///
/// Every failure ends up in the returned result, so neither `search` nor
/// `search_multiple` can fail.
pub struct PodScraper<F> {
    fetcher: F,
    settings: SearchSettings,
}

impl PodScraper<ReqwestFetcher> {
    /// Scraper using the real HTTP client.
    pub fn from_config(
        client: &ClientConfig,
        settings: SearchSettings,
    ) -> Result<Self, ClientBuildError> {
        Ok(Self::new(ReqwestFetcher::new(client)?, settings))
    }
}

impl<F: Fetcher> PodScraper<F> {
    pub fn new(fetcher: F, settings: SearchSettings) -> Self {
        Self { fetcher, settings }
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// Wait `delay`, fetch the result page for `query` and extract its pods.
    pub async fn search(&self, query: &str, delay: Duration) -> SearchResult {
        let url = match build_query_url(&self.settings.endpoint, &self.settings.query_param, query)
        {
            Ok(url) => url,
            Err(err) => {
                scrape_warn!("Cannot build request url for {:?}: {}", query, err);
                return SearchResult::pending(query, "").failed(format!("Error: {err}"));
            }
        };
        let pending = SearchResult::pending(query, url.as_str());

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        scrape_info!("Searching: {}", query);
        scrape_info!("URL: {}", url);

        let output = match self.fetcher.fetch(&url).await {
            Ok(output) => output,
            Err(err) => {
                scrape_warn!("Fetch failed for {:?}: {}", query, err);
                return pending.failed(format!("Network error: {err}"));
            }
        };

        let body = decode_body(&output.bytes, output.metadata.content_type.as_deref());
        if body.lossy {
            scrape_warn!(
                "Page for {:?} has bytes that are not valid {}; they were replaced",
                query,
                body.encoding
            );
        }

        let extraction = extract_from_html(&body.text, &self.settings.extraction);
        let result = pending.with_pods(extraction.pods);
        scrape_info!(
            "Query {:?} finished with status {} ({} pod(s))",
            query,
            result.status,
            result.results.len()
        );
        result
    }

    /// Run `search` for each query in order, waiting `delay` before each one.
    pub async fn search_multiple<S: AsRef<str>>(
        &self,
        queries: &[S],
        delay: Duration,
    ) -> Vec<SearchResult> {
        let total = queries.len();
        let mut results = Vec::with_capacity(total);
        for (i, query) in queries.iter().enumerate() {
            scrape_info!("[{}/{}] Processing: {}", i + 1, total, query.as_ref());
            results.push(self.search(query.as_ref(), delay).await);
        }
        results
    }
}
