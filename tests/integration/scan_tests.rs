//! End-to-end scan tests
//!
//! These tests run the full pipeline against wiremock: sitemap discovery,
//! page extraction, auditing through the HTTP runner, persistence, and the
//! resume-by-skipping behavior on a second run.

use pharos::audit::HttpAuditRunner;
use pharos::config::ScannerConfig;
use pharos::sitemap::{build_http_client, resolve_page_urls, resolve_sitemap};
use pharos::store::{ResultStore, ScanResult};
use pharos::Scanner;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config() -> ScannerConfig {
    ScannerConfig {
        pause_seconds: 0,
        audit_timeout_seconds: 30,
    }
}

fn report_body(score: f64) -> String {
    format!(
        r#"{{
            "categories": {{
                "performance": {{"score": {score}}},
                "accessibility": {{"score": {score}}},
                "best-practices": {{"score": {score}}},
                "seo": {{"score": {score}}}
            }},
            "audits": {{}}
        }}"#
    )
}

/// Mounts a sitemap with the given page paths on the mock site
async fn mount_sitemap(server: &MockServer, pages: &[&str]) {
    let base = server.uri();
    let entries: String = pages
        .iter()
        .map(|p| format!("  <url><loc>{}{}</loc></url>\n", base, p))
        .collect();
    let sitemap = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset>\n{}</urlset>",
        entries
    );

    Mock::given(method("HEAD"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sitemap))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_scan_persists_every_page() {
    let site = MockServer::start().await;
    let audit = MockServer::start().await;
    mount_sitemap(&site, &["/", "/about"]).await;

    Mock::given(method("GET"))
        .and(path("/run"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(report_body(0.9))
                .insert_header("content-type", "application/json"),
        )
        .expect(2)
        .mount(&audit)
        .await;

    let dir = TempDir::new().unwrap();
    let results_path = dir.path().join("results.json");

    let client = build_http_client().expect("Failed to build client");
    let sitemap_url = resolve_sitemap(&client, &site.uri())
        .await
        .expect("Failed to resolve sitemap");
    let urls = resolve_page_urls(&client, &sitemap_url)
        .await
        .expect("Failed to parse sitemap");
    assert_eq!(urls.len(), 2);

    let runner = HttpAuditRunner::new(client.clone(), format!("{}/run", audit.uri()));
    let mut scanner = Scanner::new(ResultStore::load(&results_path), &runner, &test_config());
    let summary = scanner.run(&urls).await.expect("Scan failed");

    assert_eq!(summary.processed, 2);
    assert_eq!(summary.skipped, 0);
    assert_eq!(summary.failed, 0);

    let reloaded = ResultStore::load(&results_path);
    assert_eq!(reloaded.len(), 2);
    for url in &urls {
        assert!(reloaded.contains(url), "missing result for {url}");
    }
}

#[tokio::test]
async fn test_second_run_skips_everything() {
    let site = MockServer::start().await;
    let audit = MockServer::start().await;
    mount_sitemap(&site, &["/", "/about"]).await;

    // The audit endpoint only answers during the first run.
    Mock::given(method("GET"))
        .and(path("/run"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(report_body(0.8))
                .insert_header("content-type", "application/json"),
        )
        .expect(2)
        .mount(&audit)
        .await;

    let dir = TempDir::new().unwrap();
    let results_path = dir.path().join("results.json");

    let client = build_http_client().expect("Failed to build client");
    let sitemap_url = resolve_sitemap(&client, &site.uri())
        .await
        .expect("Failed to resolve sitemap");
    let urls = resolve_page_urls(&client, &sitemap_url)
        .await
        .expect("Failed to parse sitemap");

    let runner = HttpAuditRunner::new(client.clone(), format!("{}/run", audit.uri()));

    let mut first = Scanner::new(ResultStore::load(&results_path), &runner, &test_config());
    let summary = first.run(&urls).await.expect("First scan failed");
    assert_eq!(summary.processed, 2);

    // Same URL list, fresh store loaded from disk: everything is skipped
    // and the audit endpoint sees no further traffic (expect(2) above).
    let mut second = Scanner::new(ResultStore::load(&results_path), &runner, &test_config());
    let summary = second.run(&urls).await.expect("Second scan failed");

    assert_eq!(summary.processed, 0);
    assert_eq!(summary.skipped, 2);
}

#[tokio::test]
async fn test_failing_page_is_recorded_and_others_still_audited() {
    let site = MockServer::start().await;
    let audit = MockServer::start().await;
    mount_sitemap(&site, &["/broken", "/fine"]).await;

    let broken_url = format!("{}/broken", site.uri());
    let fine_url = format!("{}/fine", site.uri());

    Mock::given(method("GET"))
        .and(path("/run"))
        .and(query_param("url", broken_url.as_str()))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&audit)
        .await;

    Mock::given(method("GET"))
        .and(path("/run"))
        .and(query_param("url", fine_url.as_str()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(report_body(0.7))
                .insert_header("content-type", "application/json"),
        )
        .expect(1)
        .mount(&audit)
        .await;

    let dir = TempDir::new().unwrap();
    let results_path = dir.path().join("results.json");

    let client = build_http_client().expect("Failed to build client");
    let sitemap_url = resolve_sitemap(&client, &site.uri())
        .await
        .expect("Failed to resolve sitemap");
    let urls = resolve_page_urls(&client, &sitemap_url)
        .await
        .expect("Failed to parse sitemap");

    let runner = HttpAuditRunner::new(client.clone(), format!("{}/run", audit.uri()));
    let mut scanner = Scanner::new(ResultStore::load(&results_path), &runner, &test_config());
    let summary = scanner.run(&urls).await.expect("Scan failed");

    assert_eq!(summary.processed, 2);
    assert_eq!(summary.failed, 1);

    let reloaded = ResultStore::load(&results_path);
    match &reloaded.results()[0] {
        ScanResult::Failure { url, error } => {
            assert_eq!(url, &broken_url);
            assert!(error.contains("500"), "unexpected error: {error}");
        }
        other => panic!("expected a failure record, got {other:?}"),
    }
    match &reloaded.results()[1] {
        ScanResult::Success { url, seo, .. } => {
            assert_eq!(url, &fine_url);
            assert_eq!(*seo, 0.7);
        }
        other => panic!("expected a success record, got {other:?}"),
    }

    // A re-run retries nothing: the failure is a recorded outcome, not an
    // open item, until the operator deletes it from the results file.
    let mut second = Scanner::new(ResultStore::load(&results_path), &runner, &test_config());
    let summary = second.run(&urls).await.expect("Second scan failed");
    assert_eq!(summary.skipped, 2);
}

#[tokio::test]
async fn test_batched_run_covers_the_site_across_runs() {
    let site = MockServer::start().await;
    let audit = MockServer::start().await;
    mount_sitemap(&site, &["/a", "/b", "/c"]).await;

    Mock::given(method("GET"))
        .and(path("/run"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(report_body(1.0))
                .insert_header("content-type", "application/json"),
        )
        .mount(&audit)
        .await;

    let dir = TempDir::new().unwrap();
    let results_path = dir.path().join("results.json");

    let client = build_http_client().expect("Failed to build client");
    let sitemap_url = resolve_sitemap(&client, &site.uri())
        .await
        .expect("Failed to resolve sitemap");
    let urls = resolve_page_urls(&client, &sitemap_url)
        .await
        .expect("Failed to parse sitemap");

    let runner = HttpAuditRunner::new(client.clone(), format!("{}/run", audit.uri()));

    let mut first = Scanner::new(ResultStore::load(&results_path), &runner, &test_config())
        .with_page_limit(2);
    let summary = first.run(&urls).await.expect("First batch failed");
    assert_eq!(summary.processed, 2);

    let mut second = Scanner::new(ResultStore::load(&results_path), &runner, &test_config())
        .with_page_limit(2);
    let summary = second.run(&urls).await.expect("Second batch failed");
    assert_eq!(summary.skipped, 2);
    assert_eq!(summary.processed, 1);

    let reloaded = ResultStore::load(&results_path);
    assert_eq!(reloaded.len(), 3);
}
