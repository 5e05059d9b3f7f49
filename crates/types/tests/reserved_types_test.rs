//! Integration tests for the reserved section and block type predicates.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::HashSet;

use otl_cms_types::{
    ReservedBlockType, ReservedSchemaType, ReservedSectionType, is_reserved_block_type,
    is_reserved_schema_type, is_reserved_section_type,
};

const SECTION_TYPES: [&str; 9] = [
    "hero-banner",
    "content-blocks",
    "feature-grid",
    "testimonial-carousel",
    "cta-banner",
    "team-grid",
    "faq-accordion",
    "stats-showcase",
    "logo-cloud",
];

const BLOCK_TYPES: [&str; 13] = [
    "markdown",
    "html",
    "image",
    "quote",
    "gallery",
    "embed",
    "cta",
    "divider",
    "code",
    "about-the-authors",
    "more-from-the-authors",
    "recommended-posts",
    "related-posts",
];

#[test]
fn every_section_identifier_is_reserved() {
    for name in SECTION_TYPES {
        assert!(is_reserved_section_type(name), "{name} should be a reserved section");
        assert!(is_reserved_schema_type(name), "{name} should be a reserved schema type");
        assert!(!is_reserved_block_type(name), "{name} should not be a reserved block");
    }
}

#[test]
fn every_block_identifier_is_reserved() {
    for name in BLOCK_TYPES {
        assert!(is_reserved_block_type(name), "{name} should be a reserved block");
        assert!(is_reserved_schema_type(name), "{name} should be a reserved schema type");
        assert!(!is_reserved_section_type(name), "{name} should not be a reserved section");
    }
}

#[test]
fn enum_sets_match_the_identifier_lists() {
    let sections: Vec<&str> = ReservedSectionType::ALL.iter().map(|t| t.as_str()).collect();
    assert_eq!(sections, SECTION_TYPES);

    let blocks: Vec<&str> = ReservedBlockType::ALL.iter().map(|t| t.as_str()).collect();
    assert_eq!(blocks, BLOCK_TYPES);
}

#[test]
fn section_and_block_sets_are_disjoint() {
    let sections: HashSet<&str> = SECTION_TYPES.into_iter().collect();
    let blocks: HashSet<&str> = BLOCK_TYPES.into_iter().collect();
    assert!(sections.is_disjoint(&blocks));
}

#[test]
fn unknown_names_are_not_reserved() {
    for name in ["custom-testimonials", "acme-pricing", "hero", "markdowns", "-", ""] {
        assert!(!is_reserved_section_type(name), "{name:?}");
        assert!(!is_reserved_block_type(name), "{name:?}");
        assert!(!is_reserved_schema_type(name), "{name:?}");
    }
}

#[test]
fn matching_is_case_sensitive_and_untrimmed() {
    for name in ["Hero-Banner", "FAQ-Accordion", "Markdown", "IMAGE", " markdown", "cta\n"] {
        assert!(!is_reserved_schema_type(name), "{name:?} should not match");
    }
}

#[test]
fn schema_predicate_is_the_union() {
    let probes = SECTION_TYPES
        .iter()
        .chain(BLOCK_TYPES.iter())
        .copied()
        .chain(["custom-testimonials", "Hero-Banner", ""]);
    for name in probes {
        assert_eq!(
            is_reserved_schema_type(name),
            is_reserved_section_type(name) || is_reserved_block_type(name),
            "{name:?}"
        );
    }
}

#[test]
fn repeated_calls_are_stable() {
    for _ in 0..3 {
        assert!(is_reserved_section_type("faq-accordion"));
        assert!(is_reserved_block_type("related-posts"));
        assert!(!is_reserved_schema_type("custom-testimonials"));
    }
}

#[test]
fn classify_names_the_set() {
    assert_eq!(
        ReservedSchemaType::classify("cta-banner"),
        Some(ReservedSchemaType::Section(ReservedSectionType::CtaBanner))
    );
    assert_eq!(
        ReservedSchemaType::classify("cta"),
        Some(ReservedSchemaType::Block(ReservedBlockType::Cta))
    );
    assert_eq!(ReservedSchemaType::classify("CTA"), None);
}

#[test]
fn typed_names_parse_and_display() {
    let parsed: ReservedBlockType = "about-the-authors".parse().unwrap();
    assert_eq!(parsed, ReservedBlockType::AboutTheAuthors);
    assert_eq!(parsed.to_string(), "about-the-authors");
    assert!("hero-banner".parse::<ReservedBlockType>().is_err());
    assert!("hero-banner".parse::<ReservedSectionType>().is_ok());
}
