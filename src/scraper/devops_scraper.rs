use crate::error::{Result, ScrapeError};
use crate::models::{Endpoint, ScrapeResult, Toc, TocNode};
use crate::scraper::definitions::ModelAggregator;
use crate::scraper::endpoint::parse_endpoint;
use crate::scraper::toc::collect_leaves;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const DEFAULT_BASE_URL: &str = "https://learn.microsoft.com/en-us/rest/api/azure/devops/";
pub const DEFAULT_API_VERSION: &str = "7.1";

/// Attempts per page: the first try plus one retry.
const ATTEMPTS: usize = 2;

#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Documentation root; page links in the ToC are relative to it.
    pub base_url: String,
    pub api_version: String,
    /// Upper bound of a random pause after each page. Off by default; the
    /// crawl covers roughly a thousand pages and the host may throttle.
    pub delay: Option<Duration>,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            delay: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrapeReport {
    pub total: usize,
    pub failed: usize,
}

pub struct DevopsScraper {
    config: ScraperConfig,
    client: reqwest::Client,
}

impl DevopsScraper {
    pub fn new(config: ScraperConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn view(&self) -> String {
        format!("azure-devops-rest-{}", self.config.api_version)
    }

    async fn get_text(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.config.base_url, path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("view", self.view())])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }

    pub async fn fetch_toc(&self) -> Result<Toc> {
        let body = self.get_text("toc.json").await?;
        let toc: Toc = serde_json::from_str(&body)?;
        info!("Fetched ToC with {} top-level entries", toc.items.len());
        Ok(toc)
    }

    /// Fetches and parses a single reference page.
    pub async fn scrape_endpoint(
        &self,
        leaf: &TocNode,
        models: &mut ModelAggregator,
    ) -> Result<Endpoint> {
        let link = leaf
            .link
            .as_deref()
            .ok_or_else(|| ScrapeError::MissingLink(leaf.title.clone()))?;
        let html_content = self.get_text(link).await?;
        parse_endpoint(&html_content, models)
    }

    async fn scrape_with_retry(
        &self,
        leaf: &TocNode,
        models: &mut ModelAggregator,
    ) -> Option<Endpoint> {
        for attempt in 1..=ATTEMPTS {
            match self.scrape_endpoint(leaf, models).await {
                Ok(endpoint) => return Some(endpoint),
                Err(e) if attempt < ATTEMPTS => {
                    debug!("Attempt {} for '{}' failed: {}", attempt, leaf.title, e);
                }
                Err(e) => {
                    warn!(
                        "Failed to get '{}' ({}): {}",
                        leaf.title,
                        leaf.link.as_deref().unwrap_or("-"),
                        e
                    );
                }
            }
        }
        None
    }

    /// Crawls every documented endpoint in ToC order. A page that fails twice
    /// is dropped and counted; it never aborts the crawl.
    pub async fn scrape_all(&self) -> Result<(ScrapeResult, ScrapeReport)> {
        let toc = self.fetch_toc().await?;
        let leaves = collect_leaves(&toc.items);
        let total = leaves.len();
        info!("Found {} endpoint pages", total);

        let pb = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("Processing [{elapsed_precise}] {bar:40} {pos}/{len} ({eta})")
        {
            pb.set_style(style.progress_chars("=> "));
        }

        let mut models = ModelAggregator::new();
        let mut endpoints = Vec::with_capacity(total);
        let mut failed = 0usize;

        for (index, leaf) in leaves.into_iter().enumerate() {
            match self.scrape_with_retry(leaf, &mut models).await {
                Some(endpoint) => endpoints.push(endpoint),
                None => {
                    failed += 1;
                    pb.println(format!("Failed to get {}", leaf.title));
                }
            }

            pb.inc(1);
            if index + 1 < total {
                self.pause().await;
            }
        }
        pb.finish_and_clear();

        info!(
            "Scraped {} endpoints and {} models ({} failed)",
            endpoints.len(),
            models.len(),
            failed
        );

        let result = ScrapeResult {
            endpoints,
            models: models.into_models(),
        };
        Ok((result, ScrapeReport { total, failed }))
    }

    async fn pause(&self) {
        let Some(max) = self.config.delay else {
            return;
        };
        let max_ms = max.as_millis() as u64;
        if max_ms == 0 {
            return;
        }
        let wait = rand::thread_rng().gen_range(0..max_ms);
        tokio::time::sleep(Duration::from_millis(wait)).await;
    }
}

/// Writes the scrape result as JSON, replacing any previous file.
pub fn write_result(path: &Path, result: &ScrapeResult) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, serde_json::to_string_pretty(result)?)?;
    Ok(())
}
