//! Crawl engine: depth-first traversal with link classification and
//! visited/dead bookkeeping
//!
//! One engine owns one crawl tree. Traversal is strictly sequential within an
//! engine; all concurrency lives at the orchestrator layer. The depth-first
//! walk runs on an explicit heap-allocated work stack rather than call-stack
//! recursion, so deeply linked internal sites cannot overflow the stack.

use crate::crawler::fetcher::fetch_page;
use crate::extract::ExtractStrategy;
use crate::url::{classify_href, normalize_url, LinkKind};
use reqwest::Client;
use std::collections::HashSet;

/// Per-engine crawl policy
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// External-link budget for the whole crawl tree; each hop to an
    /// absolute http/https link consumes one unit
    pub external_depth: u32,

    /// Rewrite plain-http links to https during normalization; disabled only
    /// for tests against plain-http mock servers
    pub force_https: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            external_depth: 0,
            force_https: true,
        }
    }
}

/// A pending traversal step: visit `url`, following links per `follow` with
/// `depth` external-budget units remaining
#[derive(Debug, Clone)]
struct Frame {
    url: String,
    follow: bool,
    depth: u32,
}

/// Depth-first crawler for one seed URL
///
/// Owns the visited set, the dead set and the extraction strategy. The two
/// sets are disjoint by construction: a URL joins exactly one of them, and
/// never twice. Results accumulate inside the strategy and are read after the
/// crawl completes.
pub struct CrawlEngine<S> {
    base_url: String,
    options: EngineOptions,
    client: Client,
    visited: HashSet<String>,
    dead: HashSet<String>,
    strategy: S,
}

impl<S: ExtractStrategy> CrawlEngine<S> {
    /// Creates an engine for one seed URL
    ///
    /// The strategy is required here rather than installed later, so a crawl
    /// without one cannot be expressed.
    pub fn new(base_url: impl Into<String>, client: Client, strategy: S) -> Self {
        Self::with_options(base_url, client, strategy, EngineOptions::default())
    }

    /// Creates an engine with an explicit crawl policy
    pub fn with_options(
        base_url: impl Into<String>,
        client: Client,
        strategy: S,
        options: EngineOptions,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            options,
            client,
            visited: HashSet::new(),
            dead: HashSet::new(),
            strategy,
        }
    }

    /// The seed URL this engine crawls from
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Normalized URLs fetched successfully so far
    pub fn visited(&self) -> &HashSet<String> {
        &self.visited
    }

    /// Normalized URLs whose fetch failed; never retried
    pub fn dead(&self) -> &HashSet<String> {
        &self.dead
    }

    /// The installed extraction strategy
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Consumes the engine, yielding the strategy with its accumulated
    /// results
    pub fn into_strategy(self) -> S {
        self.strategy
    }

    /// Clears the visited and dead sets so the same instance can re-crawl
    /// from scratch
    ///
    /// Results held by the strategy are untouched; reset those on the
    /// strategy itself.
    pub fn reset(&mut self) {
        self.visited = HashSet::new();
        self.dead = HashSet::new();
    }

    /// Crawls the full tree from the seed URL
    pub async fn crawl(&mut self) {
        self.crawl_from(self.base_url.clone(), true, self.options.external_depth)
            .await;
    }

    /// Crawls from an arbitrary starting point
    ///
    /// # Arguments
    ///
    /// * `url` - The page to start from
    /// * `follow` - Whether links on visited pages are followed at all
    /// * `depth` - Remaining external-link budget
    pub async fn crawl_from(&mut self, url: String, follow: bool, depth: u32) {
        let mut stack = vec![Frame { url, follow, depth }];

        while let Some(frame) = stack.pop() {
            // Re-check at pop time: a sibling branch may have visited this
            // URL since the frame was pushed. This reproduces the check the
            // recursive formulation performs on entry.
            if self.visited.contains(&frame.url) || self.dead.contains(&frame.url) {
                continue;
            }

            let page = match fetch_page(&self.client, &frame.url).await {
                Ok(page) => page,
                Err(error) => {
                    tracing::error!("Fetch failed for {}: {}", frame.url, error);
                    self.dead.insert(frame.url);
                    continue;
                }
            };

            tracing::debug!("Visited {}", frame.url);
            self.visited.insert(frame.url.clone());

            let mut discovered = Vec::new();

            for element in &page.elements {
                if frame.follow && element.is_anchor_with_href() {
                    // Anchors whose href cannot be resolved are dropped.
                    let Some(resolved) = element.href.as_deref() else {
                        continue;
                    };
                    let link = normalize_url(resolved, self.options.force_https);

                    if self.visited.contains(&link) || self.dead.contains(&link) {
                        continue;
                    }

                    // Classification runs on the raw href text as authored,
                    // never the resolved link.
                    let raw = element.attr("href").unwrap_or_default();
                    match classify_href(raw) {
                        LinkKind::Internal => {
                            // Internal hops never consume the budget and
                            // preserve the current follow flag.
                            discovered.push(Frame {
                                url: link,
                                follow: frame.follow,
                                depth: frame.depth,
                            });
                        }
                        LinkKind::External if frame.depth > 0 => {
                            // Crossing hosts costs one unit; follow goes
                            // false exactly when this hop exhausts the
                            // budget.
                            discovered.push(Frame {
                                url: link,
                                follow: frame.depth > 1,
                                depth: frame.depth - 1,
                            });
                        }
                        _ => {}
                    }
                } else if self.strategy.matches(element) {
                    self.strategy.consume(&frame.url, element);
                }
            }

            // Reverse push so the first link in document order is explored
            // first, matching recursive depth-first order.
            for frame in discovered.into_iter().rev() {
                stack.push(frame);
            }
        }
    }
}
