// Host-side tests for overlay link classification.
// The web crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod links {
    include!("../src/links.rs");
}

use links::*;

const ORIGIN: &str = "https://example.org";

#[test]
fn same_origin_links_are_internal() {
    assert!(is_internal_link(Some("/about"), None, Some(ORIGIN), ORIGIN));
    assert!(is_internal_link(
        Some("https://example.org/plans"),
        Some("_self"),
        Some(ORIGIN),
        ORIGIN
    ));
}

#[test]
fn blank_href_resolves_to_the_page() {
    assert_eq!(
        classify_link(Some("   "), None, Some(ORIGIN), ORIGIN),
        LinkKind::Internal
    );
    assert!(is_internal_link(Some(" \t"), Some("_self"), Some(ORIGIN), ORIGIN));
}

#[test]
fn skipped_link_kinds() {
    let cases = [
        (None, None, Some(ORIGIN), LinkKind::Missing),
        (Some(""), None, Some(ORIGIN), LinkKind::Missing),
        (Some("/about"), Some("_blank"), Some(ORIGIN), LinkKind::NewTab),
        (Some("#faq"), None, Some(ORIGIN), LinkKind::Fragment),
        (Some("mailto:hi@example.org"), None, None, LinkKind::Handler),
        (Some("tel:+100"), None, None, LinkKind::Handler),
        (Some("https://other.net/"), None, Some("https://other.net"), LinkKind::External),
        (Some("http://[broken"), None, None, LinkKind::External),
    ];
    for (href, target, resolved, expected) in cases {
        assert_eq!(classify_link(href, target, resolved, ORIGIN), expected, "{href:?}");
        assert!(!is_internal_link(href, target, resolved, ORIGIN));
    }
}

#[test]
fn new_tab_wins_over_fragment() {
    assert_eq!(
        classify_link(Some("#top"), Some("_blank"), Some(ORIGIN), ORIGIN),
        LinkKind::NewTab
    );
}
