use serde::Deserialize;

/// Main configuration structure for termspider
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub search: SearchConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Number of seed crawls run concurrently
    #[serde(rename = "pool-size")]
    pub pool_size: u32,

    /// External-link budget per crawl tree; 0 keeps every crawl on
    /// site-relative links only
    #[serde(rename = "external-depth", default)]
    pub external_depth: u32,

    /// Rewrite plain-http links to https during normalization
    #[serde(rename = "force-https", default = "default_force_https")]
    pub force_https: bool,
}

fn default_force_https() -> bool {
    true
}

/// Seed URLs and search terms
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Starting pages; each is the root of one independent crawl tree
    pub seeds: Vec<String>,

    /// Terms to count, matched whole-word and case-insensitively
    pub terms: Vec<String>,
}
