//! Task orchestrator: one crawl engine per seed URL, run on a fixed-size
//! worker pool
//!
//! Engines are built up front so configuration errors abort before any fetch,
//! then each engine runs as its own tokio task gated by a pool-size
//! semaphore. Seeds never share state; reports come back in seed order.

use crate::config::Config;
use crate::crawler::engine::{CrawlEngine, EngineOptions};
use crate::crawler::fetcher::build_http_client;
use crate::extract::TermCounter;
use crate::{Result, SpiderError};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// The outcome of one seed's crawl
#[derive(Debug, Clone)]
pub struct SeedReport {
    /// The seed URL this report belongs to
    pub seed: String,

    /// Accumulated `"[url] term"` -> count entries, ordered by key
    pub results: BTreeMap<String, u64>,

    /// Number of pages fetched successfully
    pub visited: usize,

    /// Number of URLs whose fetch failed
    pub dead: usize,
}

/// Crawls every configured seed and returns per-seed reports in seed order
///
/// Each seed gets its own [`CrawlEngine`] with a private [`TermCounter`]
/// configured with the full term set. Up to `pool_size` engines run
/// concurrently; the call blocks until every one completes.
///
/// # Errors
///
/// Returns before any fetch when a term pattern fails to compile or the HTTP
/// client cannot be built; returns after the join when a crawl task panics.
pub async fn run_crawl(config: &Config) -> Result<Vec<SeedReport>> {
    let client = build_http_client()?;

    let options = EngineOptions {
        external_depth: config.crawler.external_depth,
        force_https: config.crawler.force_https,
    };

    // Compile every engine's term patterns before spawning anything: an
    // invalid term is fatal and must abort with zero pages fetched.
    let mut engines = Vec::with_capacity(config.search.seeds.len());
    for seed in &config.search.seeds {
        let counter = TermCounter::new(&config.search.terms).map_err(SpiderError::Config)?;
        engines.push(CrawlEngine::with_options(
            seed.clone(),
            client.clone(),
            counter,
            options.clone(),
        ));
    }

    let semaphore = Arc::new(Semaphore::new(config.crawler.pool_size as usize));
    let mut handles = Vec::with_capacity(engines.len());

    for mut engine in engines {
        let semaphore = Arc::clone(&semaphore);
        handles.push(tokio::spawn(async move {
            // The semaphore is never closed while handles are live.
            let _permit = semaphore.acquire_owned().await;
            tracing::info!("Crawling seed {}", engine.base_url());
            engine.crawl().await;
            engine
        }));
    }

    let mut reports = Vec::with_capacity(handles.len());
    for handle in handles {
        let engine = handle.await?;
        tracing::info!(
            "Seed {} done: {} visited, {} dead",
            engine.base_url(),
            engine.visited().len(),
            engine.dead().len()
        );
        reports.push(SeedReport {
            seed: engine.base_url().to_string(),
            visited: engine.visited().len(),
            dead: engine.dead().len(),
            results: engine.into_strategy().into_results(),
        });
    }

    Ok(reports)
}
