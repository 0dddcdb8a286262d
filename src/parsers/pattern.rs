use crate::parsers::ScanResult;
use regex::Regex;
use std::sync::LazyLock;

/// Matches `<script ... type="application/ld+json" ...>body</script>`, quotes either way.
/// `type` must start a new attribute, so `data-type` does not count.
static JSON_LD_SCRIPT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?is)<script\b[^>]*\stype\s*=\s*(?:"application/ld\+json"|'application/ld\+json')[^>]*>(.*?)</script\s*>"#,
    )
    .expect("JSON-LD script pattern should be valid")
});

/// Scans raw markup for JSON-LD script blocks without building a DOM
pub fn scan(html: &str) -> ScanResult {
    let mut result = ScanResult::default();

    for cap in JSON_LD_SCRIPT.captures_iter(html) {
        if let Some(body) = cap.get(1) {
            result.push_block(body.as_str());
        }
    }

    result
}
