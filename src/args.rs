use clap::{Parser, ValueEnum};
use schema_report::{ExportFormat, ScannerType, SortKey, StatusFilter};

#[derive(Parser, Debug)]
#[command(name = "schema-report")]
#[command(about = "Extracts and validates JSON-LD structured data from crawled pages")]
#[command(version)]
pub struct Args {
    /// JSON file with a batch of crawled pages
    #[arg(short, long)]
    pub input: Option<String>,

    /// URL to fetch through WebDriver (repeatable)
    #[arg(short, long = "url")]
    pub urls: Vec<String>,

    /// Path to JSON configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// How JSON-LD script blocks are located
    #[arg(long, value_enum)]
    pub scanner: Option<ScannerArg>,

    /// Show only valid entries or only entries with warnings
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,

    /// Case-insensitive filter on URL or type
    #[arg(long)]
    pub search: Option<String>,

    /// Column to sort by
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,

    /// Sort in descending order
    #[arg(long)]
    pub desc: bool,

    /// Export format
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Directory to write schema-report.<ext> into (stdout if omitted)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Number of concurrent WebDriver sessions
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Print each schema type with its required fields and exit
    #[arg(long)]
    pub list_types: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ScannerArg {
    Pattern,
    Dom,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    All,
    Valid,
    Warnings,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Url,
    Type,
    Warnings,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Csv,
    Markdown,
}

impl From<ScannerArg> for ScannerType {
    fn from(arg: ScannerArg) -> Self {
        match arg {
            ScannerArg::Pattern => ScannerType::Pattern,
            ScannerArg::Dom => ScannerType::Dom,
        }
    }
}

impl From<StatusArg> for StatusFilter {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::All => StatusFilter::All,
            StatusArg::Valid => StatusFilter::Valid,
            StatusArg::Warnings => StatusFilter::Warnings,
        }
    }
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Url => SortKey::Url,
            SortArg::Type => SortKey::Type,
            SortArg::Warnings => SortKey::Warnings,
        }
    }
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Markdown => ExportFormat::Markdown,
        }
    }
}
