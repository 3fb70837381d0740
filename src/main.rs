//! Termspider main entry point
//!
//! Command-line interface for the term-counting web crawler.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use termspider::config::load_config;
use termspider::crawler::run_crawl;
use termspider::output::render_report;
use tracing_subscriber::EnvFilter;

/// Termspider: a concurrent term-counting web crawler
///
/// Crawls each configured seed URL in parallel, follows site-relative links
/// freely and external links up to the configured budget, and prints
/// per-page whole-word term counts.
#[derive(Parser, Debug)]
#[command(name = "termspider")]
#[command(version = "1.0.0")]
#[command(about = "A concurrent term-counting web crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = load_config(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    tracing::info!(
        "Crawling {} seeds with pool size {}",
        config.search.seeds.len(),
        config.crawler.pool_size
    );

    let reports = run_crawl(&config).await?;

    for report in &reports {
        print!("{}", render_report(report));
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("termspider=info,warn"),
            1 => EnvFilter::new("termspider=debug,info"),
            2 => EnvFilter::new("termspider=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would run
fn handle_dry_run(config: &termspider::config::Config) {
    println!("=== Termspider Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Pool size: {}", config.crawler.pool_size);
    println!("  External depth: {}", config.crawler.external_depth);
    println!("  Force HTTPS: {}", config.crawler.force_https);

    println!("\nSeeds ({}):", config.search.seeds.len());
    for seed in &config.search.seeds {
        println!("  - {}", seed);
    }

    println!("\nTerms ({}):", config.search.terms.len());
    for term in &config.search.terms {
        println!("  - {}", term);
    }

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would crawl {} seed URLs for {} terms",
        config.search.seeds.len(),
        config.search.terms.len()
    );
}
