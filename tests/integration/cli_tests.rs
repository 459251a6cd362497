//! Command-line tests for the sitemap-scrape binary
//!
//! These run the built binary against a wiremock server and inspect its
//! stdout, stderr, exit status and files.

use std::process::Output;
use tempfile::TempDir;
use tokio::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TWO_ENTRY_SITEMAP: &str = r#"<html><body>
    <div class="sitemap"><ul class="mapTree">
        <li><a href="/a">1.Alpha</a></li>
        <li><a href="/b">2.Beta</a></li>
    </ul></div>
</body></html>"#;

async fn start_sitemap_server(status: u16, body: &str) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sitemap"))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_string(body)
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(&mock_server)
        .await;

    mock_server
}

/// Runs the binary without blocking the runtime that drives the mock server
async fn run_binary(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sitemap-scrape"))
        .args(args)
        .env_remove("RUST_BACKTRACE")
        .env_remove("RUST_LIB_BACKTRACE")
        .output()
        .await
        .expect("Failed to run sitemap-scrape")
}

#[tokio::test]
async fn test_stdout_output_contains_only_csv() {
    let mock_server = start_sitemap_server(200, TWO_ENTRY_SITEMAP).await;
    let base_url = mock_server.uri();
    let source_url = format!("{}/sitemap", base_url);

    let output = run_binary(&["--url", &source_url, "-o", "-"]).await;
    assert!(output.status.success(), "exit status: {:?}", output.status);

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        format!("title,url\nAlpha,{0}/a\nBeta,{0}/b\n", base_url)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Found 2 entries in sitemap"), "stderr: {}", stderr);
}

#[tokio::test]
async fn test_logfile_records_debug_output_when_quiet() {
    let mock_server = start_sitemap_server(200, TWO_ENTRY_SITEMAP).await;
    let source_url = format!("{}/sitemap", mock_server.uri());

    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("site.csv");
    let log_path = dir.path().join("run.log");

    let output = run_binary(&[
        "-q",
        "--url",
        &source_url,
        "-o",
        csv_path.to_str().unwrap(),
        "--logfile",
        log_path.to_str().unwrap(),
    ])
    .await;
    assert!(output.status.success(), "exit status: {:?}", output.status);
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());

    let log = std::fs::read_to_string(&log_path).expect("log file missing");
    assert!(log.contains("Extracted 2 entries from navigation tree"), "log: {}", log);
    assert!(log.contains("Wrote 2 of 2 entries"), "log: {}", log);
    assert!(!log.contains('\u{1b}'), "log file contains ANSI escapes");

    let rows = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(rows.lines().count(), 3);
}

#[tokio::test]
async fn test_failed_fetch_reports_once_and_exits_non_zero() {
    let mock_server = start_sitemap_server(500, "boom").await;
    let source_url = format!("{}/sitemap", mock_server.uri());

    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("site.csv");
    std::fs::write(&csv_path, "title,url\nOld,https://old/\n").unwrap();

    let output = run_binary(&["--url", &source_url, "-o", csv_path.to_str().unwrap()]).await;
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("HTTP 500").count(), 1, "stderr: {}", stderr);

    assert_eq!(
        std::fs::read_to_string(&csv_path).unwrap(),
        "title,url\nOld,https://old/\n"
    );
}

#[tokio::test]
async fn test_invalid_url_flag_exits_before_fetching() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("site.csv");

    let output = run_binary(&[
        "--url",
        "ftp://example.gov/sitemap",
        "-o",
        csv_path.to_str().unwrap(),
    ])
    .await;
    assert!(!output.status.success());
    assert!(!csv_path.exists());
}
