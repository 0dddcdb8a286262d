/// Fields each schema type is expected to carry, keyed by exact `@type` name
pub const REQUIRED_FIELDS: &[(&str, &[&str])] = &[
    ("Article", &["headline", "author", "datePublished", "image"]),
    ("NewsArticle", &["headline", "author", "datePublished", "image"]),
    ("BlogPosting", &["headline", "author", "datePublished", "image"]),
    ("Product", &["name", "image", "offers"]),
    ("Offer", &["price", "priceCurrency", "availability"]),
    ("Organization", &["name", "url", "logo"]),
    ("LocalBusiness", &["name", "address", "telephone"]),
    ("Restaurant", &["name", "address", "servesCuisine"]),
    ("Person", &["name"]),
    ("Event", &["name", "startDate", "location"]),
    (
        "Recipe",
        &["name", "image", "recipeIngredient", "recipeInstructions"],
    ),
    ("FAQPage", &["mainEntity"]),
    ("HowTo", &["name", "step"]),
    (
        "JobPosting",
        &[
            "title",
            "description",
            "datePosted",
            "hiringOrganization",
            "jobLocation",
        ],
    ),
    ("BreadcrumbList", &["itemListElement"]),
    ("WebSite", &["name", "url"]),
    ("WebPage", &["name"]),
    ("Review", &["itemReviewed", "author", "reviewRating"]),
    (
        "VideoObject",
        &["name", "description", "thumbnailUrl", "uploadDate"],
    ),
    ("Course", &["name", "description", "provider"]),
    (
        "SoftwareApplication",
        &["name", "operatingSystem", "applicationCategory"],
    ),
];

/// Look up the required fields for a schema type name
pub fn required_fields(type_name: &str) -> Option<&'static [&'static str]> {
    REQUIRED_FIELDS
        .iter()
        .find(|(name, _)| *name == type_name)
        .map(|(_, fields)| *fields)
}

/// All schema types that have required-field rules
pub fn known_types() -> impl Iterator<Item = &'static str> {
    REQUIRED_FIELDS.iter().map(|(name, _)| *name)
}

/// One `Type: field, field` line per known type, in table order
pub fn rules_listing() -> String {
    known_types()
        .filter_map(|name| required_fields(name).map(|fields| (name, fields)))
        .map(|(name, fields)| format!("{}: {}\n", name, fields.join(", ")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_size_and_uniqueness() {
        let names: HashSet<_> = known_types().collect();
        assert_eq!(REQUIRED_FIELDS.len(), 21);
        assert_eq!(names.len(), REQUIRED_FIELDS.len(), "duplicate type in table");
    }

    #[test]
    fn test_lookup() {
        assert_eq!(
            required_fields("Article"),
            Some(&["headline", "author", "datePublished", "image"][..])
        );
        assert!(required_fields("article").is_none(), "lookup is case-sensitive");
        assert!(required_fields("Product, Offer").is_none());
        assert!(required_fields("Thing").is_none());
    }

    #[test]
    fn test_rules_listing() {
        let listing = rules_listing();
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 21);
        assert_eq!(lines[0], "Article: headline, author, datePublished, image");
        assert!(lines.contains(&"Product: name, image, offers"));
    }
}
