use crate::error::ReportError;
use crate::results::SchemaReportEntry;
use crate::utils::{csv_field, display_path, markdown_cell};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Base name of every exported report file
pub const REPORT_FILE_STEM: &str = "schema-report";

/// Supported export formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Full entries as a JSON array
    #[default]
    Json,
    /// `URL,Type,Valid,Warnings` rows
    Csv,
    /// Markdown table with path, type, status and warning count
    Markdown,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Markdown => "md",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}", REPORT_FILE_STEM, self.extension())
    }

    /// Render the entries into the complete file body
    pub fn render(&self, entries: &[SchemaReportEntry]) -> Result<String, ReportError> {
        match self {
            ExportFormat::Json => to_json(entries),
            ExportFormat::Csv => Ok(to_csv(entries)),
            ExportFormat::Markdown => Ok(to_markdown(entries)),
        }
    }
}

pub fn to_json(entries: &[SchemaReportEntry]) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(entries)?)
}

pub fn to_csv(entries: &[SchemaReportEntry]) -> String {
    let mut out = String::from("URL,Type,Valid,Warnings\n");
    for entry in entries {
        let row = [
            csv_field(&entry.url),
            csv_field(&entry.type_label),
            csv_field(if entry.valid { "true" } else { "false" }),
            csv_field(&entry.warnings.join("; ")),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

pub fn to_markdown(entries: &[SchemaReportEntry]) -> String {
    let mut out = String::from("| URL | Type | Status | Warnings |\n|-----|------|--------|----------|\n");
    for entry in entries {
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            markdown_cell(&display_path(&entry.url)),
            markdown_cell(&entry.type_label),
            if entry.valid { "Valid" } else { "Issues" },
            entry.warnings.len()
        ));
    }
    out
}

/// Render the entries and write them to `schema-report.<ext>` inside `dir`
pub fn write_report(
    entries: &[SchemaReportEntry],
    format: ExportFormat,
    dir: impl AsRef<Path>,
) -> Result<PathBuf, ReportError> {
    let body = format.render(entries)?;

    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let path = dir.join(format.file_name());
    fs::write(&path, body)?;

    ::log::info!("Wrote {} entries to {}", entries.len(), path.display());
    Ok(path)
}
