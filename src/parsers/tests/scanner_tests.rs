use crate::parsers::{Scanner, ScannerType};
use serde_json::json;

#[cfg(test)]
mod tests {
    use super::*;

    const BOTH: [ScannerType; 2] = [ScannerType::Pattern, ScannerType::Dom];

    #[test]
    fn test_finds_every_block() {
        let html = r#"<html><head>
            <script type="application/ld+json">{"@type": "Organization", "name": "Acme"}</script>
            <script type="text/javascript">var x = {"@type": "Nope"};</script>
        </head><body>
            <script type='application/ld+json'>
                [{"@type": "Product", "name": "A"}, {"@type": "Product", "name": "B"}]
            </script>
        </body></html>"#;

        for scanner in BOTH {
            let result = Scanner::scan(html, scanner);
            assert_eq!(result.items.len(), 3, "{:?} scanner", scanner);
            assert_eq!(result.items[0]["@type"], "Organization");
            assert_eq!(result.items[1]["name"], "A");
            assert_eq!(result.items[2]["name"], "B");
            assert_eq!(result.malformed, 0);
        }
    }

    #[test]
    fn test_type_attribute_is_case_insensitive() {
        let html = r#"<SCRIPT TYPE="Application/LD+JSON">{"@type": "Person", "name": "Ada"}</SCRIPT>"#;
        for scanner in BOTH {
            let result = Scanner::scan(html, scanner);
            assert_eq!(result.items, vec![json!({"@type": "Person", "name": "Ada"})]);
        }
    }

    #[test]
    fn test_other_attributes_and_multiline_bodies() {
        let html = "<script id=\"ld\" type=\"application/ld+json\" nonce=\"abc\">\n{\n  \"@type\": \"Event\",\n  \"name\": \"Launch\"\n}\n</script>";
        for scanner in BOTH {
            let result = Scanner::scan(html, scanner);
            assert_eq!(result.items.len(), 1, "{:?} scanner", scanner);
            assert_eq!(result.items[0]["name"], "Launch");
        }
    }

    #[test]
    fn test_prefixed_type_attribute_is_not_a_match() {
        let html = r#"
            <script data-type="application/ld+json">{"@type": "Person", "name": "Hidden"}</script>
            <script data-type="text/plain" type="application/ld+json">{"@type": "Person", "name": "Shown"}</script>
        "#;
        for scanner in BOTH {
            let result = Scanner::scan(html, scanner);
            assert_eq!(result.items.len(), 1, "{:?} scanner", scanner);
            assert_eq!(result.items[0]["name"], "Shown");
        }
    }

    #[test]
    fn test_malformed_blocks_are_skipped() {
        let html = r#"
            <script type="application/ld+json">{"@type": "Product", "name": </script>
            <script type="application/ld+json">{"@type": "Product", "name": "Ok"}</script>
            <script type="application/ld+json"></script>
        "#;
        for scanner in BOTH {
            let result = Scanner::scan(html, scanner);
            assert_eq!(result.items.len(), 1, "{:?} scanner", scanner);
            assert_eq!(result.items[0]["name"], "Ok");
            assert_eq!(result.malformed, 2);
        }
    }

    #[test]
    fn test_no_scripts() {
        for scanner in BOTH {
            let result = Scanner::scan("<html><body><p>Nothing here</p></body></html>", scanner);
            assert!(result.items.is_empty());
            assert_eq!(result.malformed, 0);
        }
    }
}
