//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and run the full
//! fetch → extract → filter → categorize → output cycle end-to-end.

use link_sieve::classify::{Category, KeywordTable};
use link_sieve::config::Settings;
use link_sieve::crawler::{build_http_client, crawl, fetch_page, sieve, FetchError};
use link_sieve::output::{format_report, CrawlSummary, JsonRecord};
use link_sieve::state::ResultSet;
use link_sieve::url::Target;
use link_sieve::SieveError;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mounts an HTML page at `/` on the mock server
async fn mount_index(mock_server: &MockServer, body: String) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(mock_server)
        .await;
}

async fn run(target: &Target, settings: &Settings) -> ResultSet {
    crawl(target, settings, &KeywordTable::builtin())
        .await
        .expect("Crawl failed")
}

fn urls(results: &ResultSet, category: Category) -> Vec<String> {
    results.urls(category).map(String::from).collect()
}

#[tokio::test]
async fn test_full_crawl_single_page() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_index(
        &mock_server,
        r#"<html><head><title>Acme</title></head><body>
            <a href="/news/12345">Old</a>
            <a href="/news">News</a>
            <a href="/press">Press</a>
            <a href="https://other.org/x">X</a>
        </body></html>"#
            .to_string(),
    )
    .await;

    let target = Target::parse(&base_url).expect("Failed to parse target");
    let results = run(&target, &Settings::default()).await;

    assert_eq!(
        urls(&results, Category::News),
        vec![format!("{}/news", base_url)]
    );
    assert_eq!(
        urls(&results, Category::PressRelease),
        vec![format!("{}/press", base_url)]
    );
    assert!(urls(&results, Category::AnnualReport).is_empty());
}

#[tokio::test]
async fn test_full_crawl_writes_record() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_index(
        &mock_server,
        r#"<html><body>
            <a href="/investors/annual-report">वार्षिक रिपोर्ट</a>
            <a href="/hi/samachar">समाचार</a>
            <a href="/investors/annual-report">Annual Report</a>
            <a href="/downloads/annual-2023.pdf">Annual Report 2023</a>
        </body></html>"#
            .to_string(),
    )
    .await;

    let target = Target::parse(&base_url).expect("Failed to parse target");
    let results = run(&target, &Settings::default()).await;
    let summary = CrawlSummary::new(target, results);

    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = JsonRecord::new(dir.path())
        .save(&summary)
        .expect("Failed to save record");

    // Mock server listens on 127.0.0.1
    assert_eq!(path, dir.path().join("127.json"));

    let content = std::fs::read_to_string(&path).expect("Failed to read record");
    assert!(!content.contains("\\u"));

    let value: serde_json::Value = serde_json::from_str(&content).expect("Invalid JSON");
    assert_eq!(value["url"], base_url.as_str());
    assert_eq!(
        value["results"]["annual_report"],
        serde_json::json!([format!("{}/investors/annual-report", base_url)])
    );
    assert_eq!(
        value["results"]["news"],
        serde_json::json!([format!("{}/hi/samachar", base_url)])
    );
    assert_eq!(value["results"]["press_release"], serde_json::json!([]));
}

#[tokio::test]
async fn test_server_error_yields_empty_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500).set_body_string(
            r#"<html><body><a href="/news">News</a></body></html>"#,
        ))
        .mount(&mock_server)
        .await;

    let target = Target::parse(&mock_server.uri()).expect("Failed to parse target");
    let results = run(&target, &Settings::default()).await;
    assert!(results.is_empty());

    let summary = CrawlSummary::new(target, results);

    // Header and rule only
    let report = format_report(&summary);
    assert_eq!(
        report,
        format!("\nResults for: {}\n{}\n\n", mock_server.uri(), "=".repeat(50))
    );

    // The record is still written, with every category present
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = JsonRecord::new(dir.path())
        .save(&summary)
        .expect("Failed to save record");
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    for key in ["news", "press_release", "annual_report"] {
        assert_eq!(value["results"][key], serde_json::json!([]));
    }
}

#[tokio::test]
async fn test_unreachable_host_yields_empty_results() {
    // Reserve a port, then free it so nothing is listening
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let target = Target::parse(&format!("http://127.0.0.1:{}", port)).unwrap();
    let results = run(&target, &Settings::default()).await;
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_fetch_page_returns_body() {
    let mock_server = MockServer::start().await;
    mount_index(&mock_server, "<html>hello</html>".to_string()).await;

    let client = build_http_client(&Settings::default().fetch).unwrap();
    let body = fetch_page(&client, &format!("{}/", mock_server.uri()))
        .await
        .expect("Fetch failed");
    assert_eq!(body, "<html>hello</html>");
}

#[tokio::test]
async fn test_fetch_page_classifies_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = build_http_client(&Settings::default().fetch).unwrap();
    let result = fetch_page(&client, &format!("{}/missing", mock_server.uri())).await;
    assert!(matches!(result, Err(FetchError::Status { status: 404, .. })));
}

#[tokio::test]
async fn test_fetch_page_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let mut settings = Settings::default();
    settings.fetch.timeout_secs = 1;
    let client = build_http_client(&settings.fetch).unwrap();

    let result = fetch_page(&client, &format!("{}/slow", mock_server.uri())).await;
    assert!(matches!(result, Err(FetchError::Timeout { .. })));
}

#[tokio::test]
async fn test_sends_configured_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "Mozilla/5.0"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"<a href="/media">Media</a>"#)
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let target = Target::parse(&mock_server.uri()).unwrap();
    let results = run(&target, &Settings::default()).await;
    assert_eq!(results.count(Category::News), 1);
}

#[tokio::test]
async fn test_same_input_same_results() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_index(
        &mock_server,
        format!(
            r#"<a href="/press/z">Z</a>
               <a href="{base}/press/a">A</a>
               <a href="/announcements/">Announcements</a>
               <a href="/press/a">A again</a>"#,
            base = base_url
        ),
    )
    .await;

    let target = Target::parse(&base_url).unwrap();
    let first = run(&target, &Settings::default()).await;
    let second = run(&target, &Settings::default()).await;

    assert_eq!(first, second);
    assert_eq!(
        urls(&first, Category::PressRelease),
        vec![format!("{}/press/a", base_url), format!("{}/press/z", base_url)]
    );
    assert_eq!(
        urls(&first, Category::News),
        vec![format!("{}/announcements/", base_url)]
    );
}

#[tokio::test]
async fn test_sieve_parses_seed_and_crawls() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_index(&mock_server, r#"<a href="/annual">Annual</a>"#.to_string()).await;

    let summary = sieve(&base_url, &Settings::default(), &KeywordTable::builtin())
        .await
        .expect("Sieve failed");

    assert_eq!(summary.target.as_str(), base_url);
    assert_eq!(
        urls(&summary.results, Category::AnnualReport),
        vec![format!("{}/annual", base_url)]
    );
}

#[tokio::test]
async fn test_sieve_rejects_unusable_seed() {
    let result = sieve("https://", &Settings::default(), &KeywordTable::builtin()).await;
    assert!(matches!(result, Err(SieveError::UrlError(_))));
}
