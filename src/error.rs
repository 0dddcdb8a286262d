use thiserror::Error;

/// Errors raised by the surrounding plumbing (loading, fetching, exporting).
///
/// Extraction and validation never fail; findings on a page are reported as
/// warnings on its entries instead.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Reading a page batch or writing an export failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A page batch, config or export could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration is missing something the run needs
    #[error("config error: {0}")]
    Config(String),

    /// The WebDriver session could not be opened or driven
    #[error("WebDriver error: {0}")]
    WebDriver(String),

    /// A fetch worker panicked or was cancelled
    #[error("task error: {0}")]
    Task(#[from] tokio::task::JoinError),
}
