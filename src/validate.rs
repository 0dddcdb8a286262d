use crate::results::StructuredDataItem;
use crate::rules;
use serde_json::Value;

/// Loose truthiness used for the reserved `@` keys: null, false, zero and "" are falsy
pub(crate) fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// A required field is missing when absent, null or "". Zero and false still count as set.
fn is_missing_field(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        _ => false,
    }
}

/// Display label for an item's `@type`
///
/// Arrays are joined with `", "`; anything absent or empty becomes `"Unknown"`.
pub fn type_label(item: &StructuredDataItem) -> String {
    let label = match item.get("@type") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(types)) => types
            .iter()
            .map(|t| match t {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        Some(other) if is_truthy(Some(other)) => other.to_string(),
        _ => String::new(),
    };

    if label.is_empty() {
        "Unknown".to_string()
    } else {
        label
    }
}

/// Validate a single flattened item, returning warnings in check order
pub fn validate(item: &StructuredDataItem) -> Vec<String> {
    let mut warnings = Vec::new();

    if !is_truthy(item.get("@type")) {
        warnings.push("Missing @type property".to_string());
    }

    if !is_truthy(item.get("@context")) && !is_truthy(item.get("@id")) {
        warnings.push("Missing @context".to_string());
    }

    // Only a plain string @type can key into the table
    if let Some(Value::String(type_name)) = item.get("@type") {
        if let Some(fields) = rules::required_fields(type_name) {
            for field in fields {
                if is_missing_field(item.get(*field)) {
                    warnings.push(format!("Missing recommended field: {}", field));
                }
            }
        }
    }

    for (key, value) in item {
        if key == "@context" {
            continue;
        }
        if let Value::String(s) = value {
            if is_blank(s) {
                warnings.push(format!("Empty value for: {}", key));
            }
        }
    }

    ::log::trace!("Validated {} with {} warnings", type_label(item), warnings.len());
    warnings
}

/// Whitespace-only, counting the byte order mark as whitespace
fn is_blank(s: &str) -> bool {
    s.chars().all(|c| c.is_whitespace() || c == '\u{FEFF}')
}
