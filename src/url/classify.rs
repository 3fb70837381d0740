use regex::Regex;
use std::sync::LazyLock;

// Classification deliberately looks at the raw href attribute text, not the
// resolved or normalized URL: internal vs external detection depends on the
// original relative/absolute form as authored in the page.
static INTERNAL_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/[a-z]").expect("Failed to compile internal link regex"));

static EXTERNAL_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://").expect("Failed to compile external link regex"));

/// How a raw href classifies under the crawl follow policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Site-relative path (`/` followed by a lowercase letter); followed
    /// without consuming the external-depth budget
    Internal,

    /// Absolute http/https URL; following it consumes one unit of budget
    External,

    /// Neither internally nor externally followable
    Other,
}

/// Classifies a raw (unresolved) href attribute value
///
/// # Examples
///
/// ```
/// use termspider::url::{classify_href, LinkKind};
///
/// assert_eq!(classify_href("/catalog"), LinkKind::Internal);
/// assert_eq!(classify_href("https://other.example"), LinkKind::External);
/// assert_eq!(classify_href("#top"), LinkKind::Other);
/// ```
pub fn classify_href(raw_href: &str) -> LinkKind {
    if INTERNAL_LINK.is_match(raw_href) {
        LinkKind::Internal
    } else if EXTERNAL_LINK.is_match(raw_href) {
        LinkKind::External
    } else {
        LinkKind::Other
    }
}
