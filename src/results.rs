use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A single JSON-LD object as found on a page
pub type StructuredDataItem = Map<String, Value>;

/// A crawled page as delivered by the fetch collaborator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    /// URL of the page; pages without one are skipped
    #[serde(default, deserialize_with = "string_or_none")]
    pub url: Option<String>,

    /// Raw HTML of the page
    #[serde(
        default,
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub content: Option<String>,

    /// Structured data already parsed by the crawler (object or array of objects)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_data: Option<Value>,
}

/// Accept any JSON value, keeping it only when it is a string
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

impl Page {
    /// Create a page from its URL and raw HTML
    pub fn new(url: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            content: Some(content.into()),
            json_data: None,
        }
    }

    /// Create a page whose structured data was parsed upstream
    pub fn with_json(url: impl Into<String>, json_data: Value) -> Self {
        Self {
            url: Some(url.into()),
            content: None,
            json_data: Some(json_data),
        }
    }

    /// The page URL, if present and non-empty
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty())
    }
}

/// One row of the structured-data report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaReportEntry {
    /// URL of the page the item was found on
    pub url: String,

    /// Display label of the item's `@type`
    #[serde(rename = "type")]
    pub type_label: String,

    /// The flattened item itself
    pub data: StructuredDataItem,

    /// Validation warnings, in check order
    pub warnings: Vec<String>,

    /// True when there are no warnings
    pub valid: bool,
}

impl SchemaReportEntry {
    pub fn new(
        url: String,
        type_label: String,
        data: StructuredDataItem,
        warnings: Vec<String>,
    ) -> Self {
        let valid = warnings.is_empty();
        Self {
            url,
            type_label,
            data,
            warnings,
            valid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_deserializes_with_missing_fields() {
        let page: Page = serde_json::from_str(r#"{"content": "<html></html>"}"#).unwrap();
        assert!(page.url().is_none());
        assert_eq!(page.content.as_deref(), Some("<html></html>"));
        assert!(page.json_data.is_none());

        let page: Page = serde_json::from_str(r#"{"url": ""}"#).unwrap();
        assert!(page.url().is_none(), "empty URL should count as missing");
    }

    #[test]
    fn test_non_string_fields_read_as_missing() {
        let page: Page = serde_json::from_str(
            r#"{"url": 42, "content": ["<html></html>"], "json_data": {"@type": "Person"}}"#,
        )
        .unwrap();
        assert!(page.url.is_none());
        assert!(page.content.is_none());
        assert_eq!(page.json_data.unwrap()["@type"], "Person");
    }

    #[test]
    fn test_entry_validity_follows_warnings() {
        let data = json!({"@type": "Person"}).as_object().cloned().unwrap();
        let entry = SchemaReportEntry::new(
            "https://example.com".to_string(),
            "Person".to_string(),
            data.clone(),
            vec![],
        );
        assert!(entry.valid);

        let entry = SchemaReportEntry::new(
            "https://example.com".to_string(),
            "Person".to_string(),
            data,
            vec!["Missing @context".to_string()],
        );
        assert!(!entry.valid);
    }

    #[test]
    fn test_entry_serializes_type_field() {
        let entry = SchemaReportEntry::new(
            "https://example.com".to_string(),
            "Product".to_string(),
            Map::new(),
            vec![],
        );
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["type"], "Product");
        assert_eq!(value["valid"], true);
    }
}
