use once_cell::sync::Lazy;
use regex::Regex;

/// Recognized template heading prefixes, in catalog order.
///
/// The single consolidated list; only section boundary detection depends
/// on it. Requested templates are deliberately not validated against it,
/// so a caller may ask for any fragment of a heading.
pub const TEMPLATE_HEADINGS: &[&str] = &[
    "Interactive Matching",
    "True / False",
    "MCQ with",
    "Drag and Drop",
    "Sorting",
    "Interactive matching",
    "Timeline",
    "Audio Options plus Images",
];

/// Anchored, case-insensitive pattern matching any catalog heading at the
/// start of a line
static HEADING_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    let alternation = TEMPLATE_HEADINGS
        .iter()
        .map(|heading| regex::escape(heading))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i)^({})", alternation)).unwrap()
});

/// True if the trimmed line starts a new template section.
pub fn is_heading_boundary(line: &str) -> bool {
    HEADING_BOUNDARY.is_match(line.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_any_catalog_heading() {
        for heading in TEMPLATE_HEADINGS {
            assert!(is_heading_boundary(heading), "missed heading: {}", heading);
        }
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert!(is_heading_boundary("sorting"));
        assert!(is_heading_boundary("TRUE / FALSE"));
        assert!(is_heading_boundary("interactive matching"));
    }

    #[test]
    fn test_match_is_anchored_but_prefix_only() {
        // Heading text mid-line is not a boundary
        assert!(!is_heading_boundary("Questions about Sorting"));
        // Extra trailing text after a heading prefix still is
        assert!(is_heading_boundary("MCQ with options and images"));
        assert!(is_heading_boundary("Sorting activity for grade 2"));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert!(is_heading_boundary("   Drag and Drop  "));
        assert!(!is_heading_boundary(""));
        assert!(!is_heading_boundary("   "));
    }
}
