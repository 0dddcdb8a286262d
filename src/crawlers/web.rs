use crate::config::FetchConfig;
use crate::error::ReportError;
use crate::results::Page;
use crate::sources::PageSource;
use fantoccini::{Client, ClientBuilder};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::{Duration, timeout};

/// Queue of (position in input, URL) pairs shared by the workers
type UrlQueue = Arc<Mutex<VecDeque<(usize, String)>>>;

/// Pages fetched by one worker, tagged with their position in the input
type WorkerPages = Vec<(usize, Page)>;

/// Pages rendered live through a WebDriver server
#[derive(Debug, Clone)]
pub struct WebDriverSource {
    config: FetchConfig,
}

impl WebDriverSource {
    pub fn new(config: FetchConfig) -> Self {
        Self { config }
    }
}

impl PageSource for WebDriverSource {
    async fn pages(&self) -> Result<Vec<Page>, ReportError> {
        fetch_pages(&self.config).await
    }
}

/// Loads every configured URL through WebDriver and returns the rendered pages.
///
/// Pages that fail to load are logged and left out, and so are workers that
/// cannot reach the driver. It is an error only when no worker got a session.
/// The result keeps the order of `config.urls`.
///
/// # Arguments
///
/// * `config` - Fetch configuration (URLs, WebDriver endpoint, concurrency)
pub async fn fetch_pages(config: &FetchConfig) -> Result<Vec<Page>, ReportError> {
    if config.urls.is_empty() {
        return Ok(Vec::new());
    }

    let webdriver_url = resolve_webdriver_url(&config.webdriver_url);
    let num_workers = worker_count(config.max_concurrency, config.urls.len());
    ::log::info!(
        "Fetching {} URLs with {} workers via {}",
        config.urls.len(),
        num_workers,
        webdriver_url
    );

    let queue: UrlQueue = Arc::new(Mutex::new(
        config.urls.iter().cloned().enumerate().collect(),
    ));
    let page_timeout = Duration::from_secs(config.page_timeout_secs);

    let mut handles = Vec::with_capacity(num_workers);
    for worker_id in 0..num_workers {
        handles.push(tokio::spawn(worker_loop(
            worker_id,
            webdriver_url.clone(),
            Arc::clone(&queue),
            page_timeout,
        )));
    }

    // Await every worker so each one gets to close its session
    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        results.push(handle.await.map_err(ReportError::from).and_then(|r| r));
    }

    let pages = merge_worker_results(results)?;
    ::log::info!("Fetched {} of {} pages", pages.len(), config.urls.len());
    Ok(pages)
}

/// Combine worker outputs into input order, logging the workers that failed
fn merge_worker_results(
    results: Vec<Result<WorkerPages, ReportError>>,
) -> Result<Vec<Page>, ReportError> {
    let worker_total = results.len();
    let mut fetched = Vec::new();
    let mut failures = Vec::new();

    for (worker_id, result) in results.into_iter().enumerate() {
        match result {
            Ok(pages) => fetched.extend(pages),
            Err(e) => {
                ::log::warn!("Worker {} failed: {}", worker_id, e);
                failures.push(e.to_string());
            }
        }
    }

    if worker_total > 0 && failures.len() == worker_total {
        return Err(ReportError::WebDriver(format!(
            "all {} workers failed: {}",
            worker_total,
            failures.join("; ")
        )));
    }

    fetched.sort_by_key(|(index, _)| *index);
    Ok(fetched.into_iter().map(|(_, page)| page).collect())
}

/// The WEBDRIVER_URL environment variable wins over the configured endpoint
fn resolve_webdriver_url(configured: &str) -> String {
    match std::env::var("WEBDRIVER_URL") {
        Ok(url) if !url.is_empty() => url,
        _ => configured.to_string(),
    }
}

/// Never start more sessions than there are URLs
fn worker_count(max_concurrency: usize, url_count: usize) -> usize {
    max_concurrency.max(1).min(url_count.max(1))
}

/// Runs one WebDriver session until the queue is drained
async fn worker_loop(
    worker_id: usize,
    webdriver_url: String,
    queue: UrlQueue,
    page_timeout: Duration,
) -> Result<WorkerPages, ReportError> {
    ::log::trace!("Spawning worker {}", worker_id);

    let client = ClientBuilder::native()
        .connect(&webdriver_url)
        .await
        .map_err(|e| {
            ::log::error!(
                "Worker {} failed to connect to WebDriver at {}: {}",
                worker_id,
                webdriver_url,
                e
            );
            ReportError::WebDriver(e.to_string())
        })?;
    ::log::debug!("Worker {} connected to WebDriver at {}", worker_id, webdriver_url);

    let mut pages = Vec::new();
    loop {
        let next = queue.lock().await.pop_front();
        let Some((index, url)) = next else {
            break;
        };

        match timeout(page_timeout, scrape(&client, &url)).await {
            Ok(Ok(html)) => pages.push((index, Page::new(url, html))),
            Ok(Err(e)) => ::log::error!("Worker {} failed to load {}: {}", worker_id, url, e),
            Err(_) => ::log::error!("Timeout loading: {}", url),
        }
    }

    if let Err(e) = client.close().await {
        ::log::warn!("Worker {} failed to close its session: {}", worker_id, e);
    }
    ::log::debug!("Worker {} finished with {} pages", worker_id, pages.len());
    Ok(pages)
}

/// Navigates to a URL and returns the rendered page source
async fn scrape(client: &Client, url: &str) -> Result<String, fantoccini::error::CmdError> {
    ::log::debug!("SCRAPE: {}", url);
    client.goto(url).await?;
    client.source().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_count() {
        assert_eq!(worker_count(4, 10), 4);
        assert_eq!(worker_count(4, 2), 2);
        assert_eq!(worker_count(0, 3), 1);
        assert_eq!(worker_count(4, 0), 1);
    }

    #[tokio::test]
    async fn test_no_urls_needs_no_driver() {
        let config = FetchConfig::default();
        let pages = fetch_pages(&config).await.unwrap();
        assert!(pages.is_empty());

        let pages = WebDriverSource::new(config).pages().await.unwrap();
        assert!(pages.is_empty());
    }

    fn fetched(index: usize) -> (usize, Page) {
        (index, Page::new(format!("https://example.com/{}", index), "<html></html>"))
    }

    #[test]
    fn test_failed_worker_keeps_other_pages() {
        let results = vec![
            Err(ReportError::WebDriver("connection refused".to_string())),
            Ok(vec![fetched(2), fetched(0)]),
            Ok(vec![fetched(1)]),
        ];
        let pages = merge_worker_results(results).unwrap();
        let urls: Vec<&str> = pages.iter().filter_map(|p| p.url()).collect();
        assert_eq!(
            urls,
            vec![
                "https://example.com/0",
                "https://example.com/1",
                "https://example.com/2"
            ]
        );
    }

    #[test]
    fn test_all_workers_failing_is_an_error() {
        let results = vec![
            Err(ReportError::WebDriver("connection refused".to_string())),
            Err(ReportError::WebDriver("connection refused".to_string())),
        ];
        let err = merge_worker_results(results).unwrap_err();
        assert!(matches!(err, ReportError::WebDriver(_)));
    }
}
