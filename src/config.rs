use crate::error::ReportError;
use crate::export::ExportFormat;
use crate::filter::ViewConfig;
use crate::parsers::ScannerType;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings for fetching pages through a WebDriver server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// URLs to load, in report order
    #[serde(default)]
    pub urls: Vec<String>,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Maximum number of concurrent WebDriver sessions
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,

    /// Seconds to wait for a single page before giving up on it
    #[serde(default = "default_page_timeout")]
    pub page_timeout_secs: u64,
}

/// Full configuration for a report run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// JSON file holding a batch of crawled pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,

    /// Pages to fetch live
    #[serde(flatten)]
    pub fetch: FetchConfig,

    /// How JSON-LD blocks are located in raw HTML
    #[serde(default)]
    pub scanner: ScannerType,

    /// Filter and sort applied before export
    #[serde(default)]
    pub view: ViewConfig,

    #[serde(default)]
    pub format: ExportFormat,

    /// Directory for the report file (if None, the report goes to stdout)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
}

/// Default value for max_concurrency
fn default_max_concurrency() -> usize {
    4
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

/// Default per-page timeout
fn default_page_timeout() -> u64 {
    45
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            urls: Vec::new(),
            webdriver_url: default_webdriver_url(),
            max_concurrency: default_max_concurrency(),
            page_timeout_secs: default_page_timeout(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: None,
            fetch: FetchConfig::default(),
            scanner: ScannerType::default(),
            view: ViewConfig::default(),
            format: ExportFormat::default(),
            output_dir: None,
        }
    }
}

impl ReportConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ReportError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no run could use
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.fetch.max_concurrency == 0 {
            return Err(ReportError::Config(
                "max_concurrency must be at least 1".to_string(),
            ));
        }
        if self.fetch.page_timeout_secs == 0 {
            return Err(ReportError::Config(
                "page_timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// True when there is at least one source of pages
    pub fn has_sources(&self) -> bool {
        self.input.is_some() || !self.fetch.urls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{SortKey, SortOrder, StatusFilter};

    #[test]
    fn test_defaults_from_empty_object() {
        let config = ReportConfig::from_json("{}").unwrap();
        assert!(config.input.is_none());
        assert!(config.fetch.urls.is_empty());
        assert_eq!(config.fetch.webdriver_url, "http://localhost:4444");
        assert_eq!(config.fetch.max_concurrency, 4);
        assert_eq!(config.fetch.page_timeout_secs, 45);
        assert_eq!(config.scanner, ScannerType::Pattern);
        assert_eq!(config.view, ViewConfig::default());
        assert_eq!(config.format, ExportFormat::Json);
        assert!(config.output_dir.is_none());
        assert!(!config.has_sources());
    }

    #[test]
    fn test_full_config() {
        let json = r#"{
            "input": "pages.json",
            "urls": ["https://example.com/"],
            "max_concurrency": 2,
            "scanner": "dom",
            "view": {"status": "valid", "search": "blog", "sort": "url", "order": "desc"},
            "format": "csv",
            "output_dir": "out"
        }"#;
        let config = ReportConfig::from_json(json).unwrap();
        assert_eq!(config.input.as_deref(), Some("pages.json"));
        assert_eq!(config.fetch.urls, vec!["https://example.com/"]);
        assert_eq!(config.fetch.max_concurrency, 2);
        assert_eq!(config.scanner, ScannerType::Dom);
        assert_eq!(config.view.status, StatusFilter::Valid);
        assert_eq!(config.view.search.as_deref(), Some("blog"));
        assert_eq!(config.view.sort, Some(SortKey::Url));
        assert_eq!(config.view.order, SortOrder::Desc);
        assert_eq!(config.format, ExportFormat::Csv);
        assert_eq!(config.output_dir.as_deref(), Some("out"));
        assert!(config.has_sources());
    }

    #[test]
    fn test_rejects_zero_concurrency() {
        let err = ReportConfig::from_json(r#"{"max_concurrency": 0}"#).unwrap_err();
        assert!(matches!(err, ReportError::Config(_)));
    }

    #[test]
    fn test_rejects_unknown_format() {
        let err = ReportConfig::from_json(r#"{"format": "xml"}"#).unwrap_err();
        assert!(matches!(err, ReportError::Json(_)));
    }
}
