pub mod html;
pub mod pattern;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// MIME type marking a script block as JSON-LD
pub const JSON_LD_MIME: &str = "application/ld+json";

/// Strategy used to locate JSON-LD script blocks in raw HTML
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScannerType {
    /// Regex scan over the raw markup
    #[default]
    Pattern,
    /// Full HTML parse and a `script` selector
    Dom,
}

/// Result of scanning a document for JSON-LD
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Parsed JSON-LD values, with top-level arrays already splatted
    pub items: Vec<Value>,
    /// Number of blocks skipped because their body was not valid JSON
    pub malformed: usize,
}

impl ScanResult {
    /// Parse one script body and fold it into the result
    pub(crate) fn push_block(&mut self, body: &str) {
        match serde_json::from_str::<Value>(body.trim()) {
            Ok(Value::Array(values)) => self.items.extend(values),
            Ok(value) => self.items.push(value),
            Err(e) => {
                ::log::debug!("Skipping malformed JSON-LD block: {}", e);
                self.malformed += 1;
            }
        }
    }
}

/// Entry point that dispatches to the selected scanner
pub struct Scanner;

impl Scanner {
    /// Extract every JSON-LD value embedded in `html`
    pub fn scan(html: &str, scanner_type: ScannerType) -> ScanResult {
        let result = match scanner_type {
            ScannerType::Pattern => pattern::scan(html),
            ScannerType::Dom => html::scan(html),
        };

        ::log::debug!(
            "{:?} scanner found {} JSON-LD values ({} malformed blocks skipped)",
            scanner_type,
            result.items.len(),
            result.malformed
        );
        result
    }
}
