use crate::config::types::Config;
use crate::ConfigError;

/// Validates a parsed configuration
///
/// Rejects configurations that cannot possibly produce a useful crawl:
/// an empty pool, no seeds, no terms, blank entries, or seeds that are not
/// absolute http/https URLs. Term pattern compilation is checked separately
/// when the term counter is built.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.crawler.pool_size == 0 {
        return Err(ConfigError::Validation(
            "pool-size must be at least 1".to_string(),
        ));
    }

    if config.search.seeds.is_empty() {
        return Err(ConfigError::Validation(
            "at least one seed URL is required".to_string(),
        ));
    }

    for seed in &config.search.seeds {
        if !seed.starts_with("http://") && !seed.starts_with("https://") {
            return Err(ConfigError::Validation(format!(
                "seed must be an absolute http(s) URL: {}",
                seed
            )));
        }
    }

    if config.search.terms.is_empty() {
        return Err(ConfigError::Validation(
            "at least one search term is required".to_string(),
        ));
    }

    if config.search.terms.iter().any(|t| t.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "search terms must not be blank".to_string(),
        ));
    }

    Ok(())
}
