//! Extraction strategies: the predicate/consumer pair the crawl engine
//! applies to every non-link page element
//!
//! A strategy is supplied when an engine is constructed, so an engine without
//! one is unrepresentable. The term counter is the reference implementation.

mod terms;

pub use terms::TermCounter;

use crate::crawler::PageElement;

/// Decides which page elements are interesting and what to do with them
pub trait ExtractStrategy {
    /// Cheap pre-filter: should `consume` be invoked for this element?
    fn matches(&self, element: &PageElement) -> bool;

    /// Applies the extraction side effect to an element of the page at `url`
    fn consume(&mut self, url: &str, element: &PageElement);
}
