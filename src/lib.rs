//! Termspider: a concurrent term-counting web crawler
//!
//! This crate crawls a set of seed pages, recursively discovers linked pages
//! under an internal/external link policy, and applies a pluggable extraction
//! strategy to every non-link element. The reference strategy counts
//! whole-word, case-insensitive term occurrences per page.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for termspider operations
#[derive(Debug, Error)]
pub enum SpiderError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Crawl task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
///
/// All of these are fatal: a crawl never starts from an invalid configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid term pattern {term:?}: {source}")]
    InvalidTerm { term: String, source: regex::Error },
}

/// Errors raised by the fetch-and-parse primitive
///
/// These are never fatal to a crawl: the failing URL is recorded as dead and
/// that traversal branch stops.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request to {url} failed: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },
}

/// Result type alias for termspider operations
pub type Result<T> = std::result::Result<T, SpiderError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{run_crawl, CrawlEngine, SeedReport};
pub use extract::{ExtractStrategy, TermCounter};
pub use url::{classify_href, normalize_url, LinkKind};
