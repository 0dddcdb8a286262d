use crate::error::ReportError;
use crate::results::Page;
use serde_json::Value;
use std::future::Future;
use std::path::PathBuf;

/// Anything that can hand over a batch of crawled pages
pub trait PageSource {
    fn pages(&self) -> impl Future<Output = Result<Vec<Page>, ReportError>> + Send;
}

/// Parse a page batch from JSON text
///
/// A batch is either a list of pages or a single page object. Each page is
/// read on its own, so one odd entry does not take the rest of the batch down.
pub fn parse_pages(json: &str) -> Result<Vec<Page>, ReportError> {
    let values = match serde_json::from_str::<Value>(json)? {
        Value::Array(values) => values,
        other => vec![other],
    };

    let mut pages = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<Page>(value) {
            Ok(page) => pages.push(page),
            Err(e) => ::log::warn!("Skipping batch entry {}: {}", index, e),
        }
    }
    Ok(pages)
}

/// Pages stored in a JSON file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PageSource for FileSource {
    async fn pages(&self) -> Result<Vec<Page>, ReportError> {
        let contents = tokio::fs::read_to_string(&self.path).await?;
        let pages = parse_pages(&contents)?;
        ::log::info!("Loaded {} pages from {}", pages.len(), self.path.display());
        Ok(pages)
    }
}
