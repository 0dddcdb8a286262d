use crate::parsers::{JSON_LD_MIME, ScanResult};
use scraper::{Html, Selector};

/// Parses the document and collects the bodies of JSON-LD script elements
pub fn scan(html: &str) -> ScanResult {
    let doc = Html::parse_document(html);
    let script_selector = Selector::parse("script").unwrap();
    let mut result = ScanResult::default();

    // Attribute values are matched case-insensitively, like the pattern scanner
    let scripts = doc.select(&script_selector).filter(|e| {
        e.value()
            .attr("type")
            .is_some_and(|t| t.eq_ignore_ascii_case(JSON_LD_MIME))
    });

    for script in scripts {
        let body = script.text().collect::<String>();
        result.push_block(&body);
    }

    result
}
