use crate::crawler::PageElement;
use crate::extract::ExtractStrategy;
use crate::ConfigError;
use regex::{Regex, RegexBuilder};
use std::collections::BTreeMap;

/// A configured search term with its compiled whole-word matcher
#[derive(Debug, Clone)]
struct TermPattern {
    term: String,
    pattern: Regex,
}

/// Reference extraction strategy: counts whole-word, case-insensitive term
/// occurrences in element text
///
/// Results accumulate in a map keyed `"[url] term"`, one entry per (page,
/// term) pair with at least one match. The map is ordered by key so output is
/// deterministic. Counting is additive across elements, pages, and repeated
/// crawl passes until [`TermCounter::reset`] is called.
#[derive(Debug, Clone)]
pub struct TermCounter {
    terms: Vec<TermPattern>,
    results: BTreeMap<String, u64>,
}

impl TermCounter {
    /// Creates a term counter for the given terms
    ///
    /// Each term compiles to a case-insensitive `\bterm\b` pattern. A term
    /// that fails to compile is a fatal configuration error: the extraction
    /// contract cannot be honored, so no crawl may start.
    pub fn new<S: AsRef<str>>(terms: &[S]) -> Result<Self, ConfigError> {
        let mut compiled = Vec::with_capacity(terms.len());

        for term in terms {
            let term = term.as_ref();
            let pattern = RegexBuilder::new(&format!(r"\b{}\b", term))
                .case_insensitive(true)
                .build()
                .map_err(|source| ConfigError::InvalidTerm {
                    term: term.to_string(),
                    source,
                })?;

            compiled.push(TermPattern {
                term: term.to_string(),
                pattern,
            });
        }

        Ok(Self {
            terms: compiled,
            results: BTreeMap::new(),
        })
    }

    /// The configured terms, in configuration order
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| t.term.as_str())
    }

    /// The accumulated result map, ordered by key
    pub fn results(&self) -> &BTreeMap<String, u64> {
        &self.results
    }

    /// Consumes the counter, yielding the accumulated result map
    pub fn into_results(self) -> BTreeMap<String, u64> {
        self.results
    }

    /// Clears the result map; the configured terms are kept
    pub fn reset(&mut self) {
        self.results = BTreeMap::new();
    }
}

impl ExtractStrategy for TermCounter {
    /// True iff the element's own text, lower-cased, contains any configured
    /// term as a substring
    ///
    /// Intentionally looser than the whole-word matcher used for counting;
    /// this only gates whether counting runs at all.
    fn matches(&self, element: &PageElement) -> bool {
        let text = element.own_text.to_lowercase();
        self.terms.iter().any(|t| text.contains(&t.term))
    }

    /// Counts whole-word matches of every term against the element's own
    /// text and adds them to the `"[url] term"` entries
    fn consume(&mut self, url: &str, element: &PageElement) {
        for term in &self.terms {
            let count = term.pattern.find_iter(&element.own_text).count() as u64;

            if count > 0 {
                let key = format!("[{}] {}", url, term.term);
                *self.results.entry(key).or_insert(0) += count;
            }
        }
    }
}
