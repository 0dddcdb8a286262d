use crate::results::SchemaReportEntry;
use serde::Serialize;
use std::fmt;

/// Aggregate counts over a list of report entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub valid: usize,
    pub with_warnings: usize,
    pub warning_count: usize,
    /// Entry count per type label, in order of first appearance
    pub types: Vec<(String, usize)>,
}

impl ReportSummary {
    pub fn from_entries(entries: &[SchemaReportEntry]) -> Self {
        let mut summary = Self {
            total: entries.len(),
            ..Self::default()
        };

        for entry in entries {
            if entry.warnings.is_empty() {
                summary.valid += 1;
            } else {
                summary.with_warnings += 1;
            }
            summary.warning_count += entry.warnings.len();

            match summary
                .types
                .iter()
                .position(|(label, _)| *label == entry.type_label)
            {
                Some(i) => summary.types[i].1 += 1,
                None => summary.types.push((entry.type_label.clone(), 1)),
            }
        }

        summary
    }
}

impl fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} items: {} valid, {} with warnings ({} warnings total)",
            self.total, self.valid, self.with_warnings, self.warning_count
        )?;
        for (label, count) in &self.types {
            writeln!(f, "  {}: {}", label, count)?;
        }
        Ok(())
    }
}
