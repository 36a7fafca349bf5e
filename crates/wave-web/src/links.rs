// Link classification for the page-transition overlay. Pure string logic so
// it can be tested off-browser; the caller resolves the link origin.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    /// No `href` attribute, or an empty one.
    Missing,
    /// Opens in a new tab or window.
    NewTab,
    /// In-page anchor (`#...`).
    Fragment,
    /// `mailto:` / `tel:` handlers.
    Handler,
    /// Resolves to a different origin, or could not be resolved.
    External,
    /// Same-origin navigation; gets the overlay transition.
    Internal,
}

/// Classify an anchor from its raw `href` attribute, its `target`, the
/// origin its resolved URL has (if it parsed) and the page origin.
pub fn classify_link(
    href_attr: Option<&str>,
    target: Option<&str>,
    resolved_origin: Option<&str>,
    page_origin: &str,
) -> LinkKind {
    // Only an absent or empty attribute is missing; blank hrefs resolve to the page.
    let href = match href_attr {
        Some(h) if !h.is_empty() => h,
        _ => return LinkKind::Missing,
    };
    if target == Some("_blank") {
        return LinkKind::NewTab;
    }
    if href.starts_with('#') {
        return LinkKind::Fragment;
    }
    if href.starts_with("mailto:") || href.starts_with("tel:") {
        return LinkKind::Handler;
    }
    match resolved_origin {
        Some(origin) if origin == page_origin => LinkKind::Internal,
        _ => LinkKind::External,
    }
}

#[inline]
pub fn is_internal_link(
    href_attr: Option<&str>,
    target: Option<&str>,
    resolved_origin: Option<&str>,
    page_origin: &str,
) -> bool {
    classify_link(href_attr, target, resolved_origin, page_origin) == LinkKind::Internal
}
