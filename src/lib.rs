pub mod config;
pub mod crawlers;
pub mod error;
pub mod export;
pub mod extract;
pub mod filter;
pub mod parsers;
pub mod report;
pub mod results;
pub mod rules;
pub mod sources;
pub mod utils;
pub mod validate;

// Re-export commonly used types for convenience
pub use error::ReportError;
pub use export::ExportFormat;
pub use extract::{extract, extract_with_scanner};
pub use filter::{ReportView, SortKey, SortOrder, StatusFilter, ViewConfig};
pub use parsers::ScannerType;
pub use report::ReportSummary;
pub use results::{Page, SchemaReportEntry, StructuredDataItem};
pub use validate::validate;

use config::ReportConfig;
use crawlers::web::WebDriverSource;
use sources::{FileSource, PageSource};
use std::path::{Path, PathBuf};

/// Result of a report run
#[derive(Debug, Clone)]
pub struct ReportOutput {
    /// Every extracted entry, in encounter order
    pub entries: Vec<SchemaReportEntry>,
    /// Entries left after the view's filter and sort
    pub visible: Vec<SchemaReportEntry>,
    /// Counts over all entries
    pub summary: ReportSummary,
}

impl ReportOutput {
    /// Render the visible entries in the given format
    pub fn render(&self, format: ExportFormat) -> Result<String, ReportError> {
        format.render(&self.visible)
    }

    /// Write the visible entries to `schema-report.<ext>` inside `dir`
    pub fn write_to(
        &self,
        format: ExportFormat,
        dir: impl AsRef<Path>,
    ) -> Result<PathBuf, ReportError> {
        export::write_report(&self.visible, format, dir)
    }
}

/// Builder that gathers pages, extracts their structured data and applies a view
#[derive(Debug, Clone, Default)]
pub struct Report {
    config: ReportConfig,
}

impl Report {
    /// Create a builder with default settings and no page sources
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: ReportConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a file
    pub fn with_config_file(self, path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let config = ReportConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a string
    pub fn with_config_str(self, config_str: &str) -> Result<Self, ReportError> {
        let config = ReportConfig::from_json(config_str)?;
        Ok(self.with_config(config))
    }

    /// Read pages from a JSON batch file
    pub fn with_input(mut self, path: impl Into<String>) -> Self {
        self.config.input = Some(path.into());
        self
    }

    /// Fetch these URLs through WebDriver (added to any already configured)
    pub fn with_urls<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.fetch.urls.extend(urls.into_iter().map(Into::into));
        self
    }

    /// Set the maximum number of concurrent WebDriver sessions
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.config.fetch.max_concurrency = max_concurrency;
        self
    }

    pub fn with_scanner(mut self, scanner: ScannerType) -> Self {
        self.config.scanner = scanner;
        self
    }

    pub fn with_view(mut self, view: ViewConfig) -> Self {
        self.config.view = view;
        self
    }

    pub fn with_format(mut self, format: ExportFormat) -> Self {
        self.config.format = format;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<String>) -> Self {
        self.config.output_dir = Some(dir.into());
        self
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Gather pages from the batch file first, then from live fetches
    pub async fn collect_pages(&self) -> Result<Vec<Page>, ReportError> {
        if !self.config.has_sources() {
            return Err(ReportError::Config(
                "no page source: set an input file or at least one URL".to_string(),
            ));
        }

        let mut pages = Vec::new();
        if let Some(path) = &self.config.input {
            pages.extend(FileSource::new(path).pages().await?);
        }
        if !self.config.fetch.urls.is_empty() {
            let source = WebDriverSource::new(self.config.fetch.clone());
            pages.extend(source.pages().await?);
        }
        Ok(pages)
    }

    /// Extract, validate and apply the view to an already gathered batch
    pub fn build(&self, pages: &[Page]) -> ReportOutput {
        let entries = extract_with_scanner(pages, self.config.scanner);
        let visible = ReportView::with_config(&entries, self.config.view.clone()).entries();
        let summary = ReportSummary::from_entries(&entries);
        ::log::info!(
            "Report has {} entries ({} valid), {} shown",
            summary.total,
            summary.valid,
            visible.len()
        );

        ReportOutput {
            entries,
            visible,
            summary,
        }
    }

    /// Gather pages and build the report
    pub async fn generate(&self) -> Result<ReportOutput, ReportError> {
        self.config.validate()?;
        let pages = self.collect_pages().await?;
        Ok(self.build(&pages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_applies_view() {
        let pages = vec![
            Page::with_json(
                "https://example.com/a",
                json!([
                    {"@context": "https://schema.org", "@type": "Person", "name": "A"},
                    {"@type": "Article"}
                ]),
            ),
            Page::new(
                "https://example.com/b",
                r#"<script type="application/ld+json">{"@context":"https://schema.org","@type":"WebPage","name":"B"}</script>"#,
            ),
        ];

        let report = Report::new().with_view(ViewConfig {
            status: StatusFilter::Valid,
            sort: Some(SortKey::Type),
            order: SortOrder::Desc,
            ..ViewConfig::default()
        });
        let output = report.build(&pages);

        assert_eq!(output.entries.len(), 3);
        assert_eq!(output.summary.valid, 2);
        let types: Vec<&str> = output.visible.iter().map(|e| e.type_label.as_str()).collect();
        assert_eq!(types, vec!["WebPage", "Person"]);
    }

    #[tokio::test]
    async fn test_generate_without_sources_fails() {
        let err = Report::new().generate().await.unwrap_err();
        assert!(matches!(err, ReportError::Config(_)));
    }

    #[tokio::test]
    async fn test_generate_from_input_file() {
        let path = std::env::temp_dir().join(format!("schema-report-input-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"[
                {"url": "https://example.com/a", "content": 7, "json_data": {"@type": "Person", "name": "A"}},
                {"url": "https://example.com/b", "json_data": {"@context": "https://schema.org", "@type": "Person", "name": "B"}}
            ]"#,
        )
        .unwrap();

        let output = Report::new()
            .with_input(path.to_string_lossy())
            .generate()
            .await
            .unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(output.entries.len(), 2);
        assert_eq!(output.summary.valid, 1);
        assert_eq!(output.entries[0].url, "https://example.com/a");
    }

    #[test]
    fn test_builder_overrides() {
        let report = Report::new()
            .with_config_str(r#"{"urls": ["https://example.com/"], "format": "csv"}"#)
            .unwrap()
            .with_urls(["https://example.com/about"])
            .with_format(ExportFormat::Markdown)
            .with_max_concurrency(2);

        assert_eq!(report.config().fetch.urls.len(), 2);
        assert_eq!(report.config().format, ExportFormat::Markdown);
        assert_eq!(report.config().fetch.max_concurrency, 2);
    }
}
