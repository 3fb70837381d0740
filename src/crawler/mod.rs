//! Crawler module: fetch-and-parse primitive, crawl engine and task
//! orchestrator
//!
//! The engine performs the depth-first traversal for one seed; the
//! orchestrator fans seeds out over a fixed-size worker pool and collects
//! their reports.

mod engine;
mod fetcher;
mod orchestrator;
mod page;

pub use engine::{CrawlEngine, EngineOptions};
pub use fetcher::{build_http_client, fetch_page};
pub use orchestrator::{run_crawl, SeedReport};
pub use page::{parse_page, PageElement, ParsedPage};
