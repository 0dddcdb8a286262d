use crate::results::SchemaReportEntry;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Which entries to show, by validation outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    /// Entries without warnings
    Valid,
    /// Entries with at least one warning
    Warnings,
}

impl StatusFilter {
    pub fn matches(&self, entry: &SchemaReportEntry) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Valid => entry.warnings.is_empty(),
            StatusFilter::Warnings => !entry.warnings.is_empty(),
        }
    }
}

/// Column to sort the report by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Url,
    Type,
    /// Number of warnings
    Warnings,
}

impl SortKey {
    fn compare(&self, a: &SchemaReportEntry, b: &SchemaReportEntry) -> Ordering {
        match self {
            SortKey::Url => a.url.cmp(&b.url),
            SortKey::Type => a.type_label.cmp(&b.type_label),
            SortKey::Warnings => a.warnings.len().cmp(&b.warnings.len()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Filter, search and sort settings for a report view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Validation status to keep
    #[serde(default)]
    pub status: StatusFilter,

    /// Case-insensitive substring matched against URL and type label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// Sort column (if None, encounter order is kept)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortKey>,

    #[serde(default)]
    pub order: SortOrder,
}

/// A filtered and sorted view over the extracted entries
#[derive(Debug)]
pub struct ReportView<'a> {
    entries: &'a [SchemaReportEntry],
    config: ViewConfig,
}

impl<'a> ReportView<'a> {
    /// Create a view that shows every entry in encounter order
    pub fn new(entries: &'a [SchemaReportEntry]) -> Self {
        Self::with_config(entries, ViewConfig::default())
    }

    pub fn with_config(entries: &'a [SchemaReportEntry], config: ViewConfig) -> Self {
        Self { entries, config }
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.config.status = status;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.config.search = Some(search.into());
        self
    }

    pub fn with_sort(mut self, key: SortKey, order: SortOrder) -> Self {
        self.config.sort = Some(key);
        self.config.order = order;
        self
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Check whether an entry passes the status filter and search term
    pub fn matches(&self, entry: &SchemaReportEntry) -> bool {
        if !self.config.status.matches(entry) {
            return false;
        }

        match &self.config.search {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                entry.url.to_lowercase().contains(&term)
                    || entry.type_label.to_lowercase().contains(&term)
            }
            _ => true,
        }
    }

    /// The entries that pass the filter, in sorted order
    pub fn entries(&self) -> Vec<SchemaReportEntry> {
        let mut visible: Vec<SchemaReportEntry> = self
            .entries
            .iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect();

        if let Some(key) = self.config.sort {
            // sort_by is stable, so equal keys keep encounter order either way
            match self.config.order {
                SortOrder::Asc => visible.sort_by(|a, b| key.compare(a, b)),
                SortOrder::Desc => visible.sort_by(|a, b| key.compare(b, a)),
            }
        }

        ::log::debug!(
            "View shows {} of {} entries",
            visible.len(),
            self.entries.len()
        );
        visible
    }
}
