use crate::parsers::{Scanner, ScannerType};
use crate::results::{Page, SchemaReportEntry, StructuredDataItem};
use crate::validate::{is_truthy, type_label, validate};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Extract and validate structured data from a batch of pages using the default scanner
pub fn extract(pages: &[Page]) -> Vec<SchemaReportEntry> {
    extract_with_scanner(pages, ScannerType::default())
}

/// Extract and validate structured data from a batch of pages
///
/// Items are deduplicated per page only; identical items on different pages
/// each get their own entry. Pages without a URL are skipped.
pub fn extract_with_scanner(pages: &[Page], scanner: ScannerType) -> Vec<SchemaReportEntry> {
    ::log::info!("Extracting structured data from {} pages", pages.len());

    let mut entries = Vec::new();
    for page in pages {
        let Some(url) = page.url() else {
            ::log::debug!("Skipping page without URL");
            continue;
        };

        let items = page_items(page, scanner);
        ::log::debug!("Page {} has {} distinct items", url, items.len());

        for item in items {
            let warnings = validate(&item);
            entries.push(SchemaReportEntry::new(
                url.to_string(),
                type_label(&item),
                item,
                warnings,
            ));
        }
    }

    ::log::info!("Extracted {} structured-data entries", entries.len());
    entries
}

/// Collect, flatten and deduplicate the items of a single page
pub fn page_items(page: &Page, scanner: ScannerType) -> Vec<StructuredDataItem> {
    let mut candidates: Vec<Value> = match &page.json_data {
        Some(Value::Array(values)) => values.clone(),
        Some(Value::Null) | None => Vec::new(),
        Some(value) => vec![value.clone()],
    };

    if let Some(content) = &page.content {
        candidates.extend(Scanner::scan(content, scanner).items);
    }

    let mut flattened = Vec::new();
    for candidate in candidates {
        match candidate {
            Value::Object(item) => flatten_graph(item, &mut flattened),
            other => ::log::debug!("Discarding non-object JSON-LD value: {}", other),
        }
    }

    dedup_items(flattened)
}

/// Replace an `@graph` wrapper with its members, passing the wrapper's `@context` down
pub fn flatten_graph(mut item: StructuredDataItem, out: &mut Vec<StructuredDataItem>) {
    if !matches!(item.get("@graph"), Some(Value::Array(_))) {
        out.push(item);
        return;
    }

    let members = match item.remove("@graph") {
        Some(Value::Array(members)) => members,
        _ => Vec::new(),
    };
    let context = item
        .get("@context")
        .filter(|c| is_truthy(Some(*c)))
        .cloned();

    for member in members {
        let Value::Object(member) = member else {
            ::log::debug!("Discarding non-object @graph member");
            continue;
        };

        match &context {
            Some(context) if !is_truthy(member.get("@context")) => {
                let mut inherited = Map::with_capacity(member.len() + 1);
                inherited.insert("@context".to_string(), context.clone());
                // Inherited @context goes first; a falsy one on the member is dropped
                inherited.extend(member.into_iter().filter(|(k, _)| k != "@context"));
                out.push(inherited);
            }
            _ => out.push(member),
        }
    }
}

/// Keep the first occurrence of each distinct serialization, in encounter order
pub fn dedup_items(items: Vec<StructuredDataItem>) -> Vec<StructuredDataItem> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| match serde_json::to_string(item) {
            Ok(key) => seen.insert(key),
            Err(_) => true,
        })
        .collect()
}
