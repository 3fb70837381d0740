//! Configuration loading and validation
//!
//! Configuration is a TOML file naming the seed URLs, the search terms and
//! the worker-pool size. All configuration errors are fatal: the crawl never
//! starts from an invalid config.

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{Config, CrawlerConfig, SearchConfig};
pub use validation::validate;
