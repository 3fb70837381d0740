//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and exercise the
//! full crawl cycle end-to-end: traversal, link classification, dead-link
//! bookkeeping and term extraction.

use termspider::config::{Config, CrawlerConfig, SearchConfig};
use termspider::crawler::{build_http_client, run_crawl, CrawlEngine, EngineOptions};
use termspider::extract::TermCounter;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Engine options suitable for plain-http mock servers
fn test_options(external_depth: u32) -> EngineOptions {
    EngineOptions {
        external_depth,
        force_https: false,
    }
}

/// Builds an engine crawling `seed` for `terms`
fn test_engine(seed: &str, terms: &[&str], external_depth: u32) -> CrawlEngine<TermCounter> {
    let client = build_http_client().expect("Failed to build client");
    let counter = TermCounter::new(terms).expect("Failed to compile terms");
    CrawlEngine::with_options(seed.to_string(), client, counter, test_options(external_depth))
}

/// Mounts an HTML page at `page_path`
async fn mount_page(server: &MockServer, page_path: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body.to_string())
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_single_page_term_counts() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        "<html><body>great furniture experts</body></html>",
    )
    .await;

    let seed = server.uri();
    let mut engine = test_engine(&seed, &["furniture", "experts", "data"], 0);
    engine.crawl().await;

    let results = engine.strategy().results();
    assert_eq!(results.get(&format!("[{}] furniture", seed)), Some(&1));
    assert_eq!(results.get(&format!("[{}] experts", seed)), Some(&1));
    assert_eq!(results.get(&format!("[{}] data", seed)), None);
    assert_eq!(results.len(), 2);
}

#[tokio::test]
async fn test_internal_followed_external_not_at_depth_zero() {
    let server = MockServer::start().await;
    let external = MockServer::start().await;

    mount_page(
        &server,
        "/",
        &format!(
            r#"<html><body>
            <a href="/catalog">Catalog</a>
            <a href="{}/out">Elsewhere</a>
            </body></html>"#,
            external.uri()
        ),
    )
    .await;

    mount_page(&server, "/catalog", "<html><body>fine furniture</body></html>").await;

    // The external host must never be contacted when depth is 0.
    Mock::given(method("GET"))
        .and(path("/out"))
        .respond_with(ResponseTemplate::new(200).set_body_string("furniture"))
        .expect(0)
        .mount(&external)
        .await;

    let seed = server.uri();
    let mut engine = test_engine(&seed, &["furniture"], 0);
    engine.crawl().await;

    assert!(engine.visited().contains(&format!("{}/catalog", seed)));
    assert_eq!(
        engine
            .strategy()
            .results()
            .get(&format!("[{}/catalog] furniture", seed)),
        Some(&1)
    );
}

#[tokio::test]
async fn test_external_followed_with_budget_then_follow_stops() {
    let server = MockServer::start().await;
    let external = MockServer::start().await;

    mount_page(
        &server,
        "/",
        &format!(
            r#"<html><body><a href="{}/landing">Partner</a></body></html>"#,
            external.uri()
        ),
    )
    .await;

    // The external page counts terms but its internal link must not be
    // followed: the hop that reached it spent the last budget unit, which
    // also turned link following off for the whole subtree.
    mount_page(
        &external,
        "/landing",
        r#"<html><body>remote experts<a href="/deeper">Deeper</a></body></html>"#,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/deeper"))
        .respond_with(ResponseTemplate::new(200).set_body_string("experts"))
        .expect(0)
        .mount(&external)
        .await;

    let seed = server.uri();
    let mut engine = test_engine(&seed, &["experts"], 1);
    engine.crawl().await;

    let landing = format!("{}/landing", external.uri());
    assert!(engine.visited().contains(&landing));
    assert_eq!(
        engine
            .strategy()
            .results()
            .get(&format!("[{}] experts", landing)),
        Some(&1)
    );
}

#[tokio::test]
async fn test_dead_seed_recorded_results_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let seed = server.uri();
    let mut engine = test_engine(&seed, &["furniture"], 0);
    engine.crawl().await;

    assert!(engine.dead().contains(&seed));
    assert!(engine.visited().is_empty());
    assert!(engine.strategy().results().is_empty());
}

#[tokio::test]
async fn test_dead_internal_link_not_refetched() {
    let server = MockServer::start().await;

    // /missing is linked from both crawled pages; it must be fetched exactly
    // once and stay in the dead set afterwards.
    mount_page(
        &server,
        "/",
        r#"<html><body>
        <a href="/missing">Gone</a>
        <a href="/about">About</a>
        </body></html>"#,
    )
    .await;

    mount_page(
        &server,
        "/about",
        r#"<html><body><a href="/missing">Still gone</a>furniture</body></html>"#,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let seed = server.uri();
    let mut engine = test_engine(&seed, &["furniture"], 0);
    engine.crawl().await;

    let missing = format!("{}/missing", seed);
    assert!(engine.dead().contains(&missing));
    assert!(!engine.visited().contains(&missing));

    // Visited and dead sets stay disjoint.
    assert!(engine.visited().is_disjoint(engine.dead()));
}

#[tokio::test]
async fn test_duplicate_links_fetched_once() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<html><body>
        <a href="/catalog">Catalog</a>
        <a href="/catalog">Catalog again</a>
        <a href="/catalog/">Catalog with slash</a>
        </body></html>"#,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/catalog"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body>furniture</body></html>")
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let seed = server.uri();
    let mut engine = test_engine(&seed, &["furniture"], 0);
    engine.crawl().await;

    assert_eq!(engine.visited().len(), 2);
    assert_eq!(
        engine
            .strategy()
            .results()
            .get(&format!("[{}/catalog] furniture", seed)),
        Some(&1)
    );
}

#[tokio::test]
async fn test_counts_accumulate_across_pages_per_page_keys() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<html><body>furniture<a href="/more">More</a></body></html>"#,
    )
    .await;

    mount_page(&server, "/more", "<html><body>furniture furniture</body></html>").await;

    let seed = server.uri();
    let mut engine = test_engine(&seed, &["furniture"], 0);
    engine.crawl().await;

    let results = engine.strategy().results();
    assert_eq!(results.get(&format!("[{}] furniture", seed)), Some(&1));
    assert_eq!(results.get(&format!("[{}/more] furniture", seed)), Some(&2));
}

#[tokio::test]
async fn test_orchestrator_independent_seeds() {
    let server_a = MockServer::start().await;
    let server_b = MockServer::start().await;

    mount_page(&server_a, "/", "<html><body>furniture here</body></html>").await;
    mount_page(&server_b, "/", "<html><body>experts there</body></html>").await;

    let config = Config {
        crawler: CrawlerConfig {
            pool_size: 2,
            external_depth: 0,
            force_https: false,
        },
        search: SearchConfig {
            seeds: vec![server_a.uri(), server_b.uri()],
            terms: vec!["furniture".to_string(), "experts".to_string()],
        },
    };

    let reports = run_crawl(&config).await.expect("Crawl failed");

    // Reports come back in seed order and never mix entries.
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].seed, server_a.uri());
    assert_eq!(reports[1].seed, server_b.uri());

    assert_eq!(
        reports[0]
            .results
            .get(&format!("[{}] furniture", server_a.uri())),
        Some(&1)
    );
    assert!(reports[0]
        .results
        .keys()
        .all(|k| k.contains(&server_a.uri())));
    assert_eq!(
        reports[1]
            .results
            .get(&format!("[{}] experts", server_b.uri())),
        Some(&1)
    );
    assert!(reports[1]
        .results
        .keys()
        .all(|k| k.contains(&server_b.uri())));
}

#[tokio::test]
async fn test_uppercase_and_partial_words() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        "<html><body>Furniture is here, but furnitures are not counted</body></html>",
    )
    .await;

    let seed = server.uri();
    let mut engine = test_engine(&seed, &["furniture"], 0);
    engine.crawl().await;

    assert_eq!(
        engine
            .strategy()
            .results()
            .get(&format!("[{}] furniture", seed)),
        Some(&1)
    );
}
