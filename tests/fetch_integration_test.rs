use httpmock::prelude::*;
use tempfile::TempDir;
use webllm_kit::{FallbackFetcher, FetchConfig, FetchOutcome, LocalStorage};

fn config_for(urls: Vec<String>, output_dir: &str) -> FetchConfig {
    FetchConfig {
        urls,
        output_dir: output_dir.to_string(),
        file_name: "web-llm.js".to_string(),
        timeout_seconds: 5,
        verbose: false,
    }
}

#[tokio::test]
async fn test_end_to_end_fallback_download() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("lib");

    let server = MockServer::start();
    let dead_mirror = server.mock(|when, then| {
        when.method(GET).path("/dead/index.js");
        then.status(503);
    });
    let live_mirror = server.mock(|when, then| {
        when.method(GET).path("/live/index.js");
        then.status(200)
            .header("Content-Type", "application/javascript")
            .body("export const webllm = true;");
    });

    let config = config_for(
        vec![server.url("/dead/index.js"), server.url("/live/index.js")],
        output_dir.to_str().unwrap(),
    );
    let storage = LocalStorage::new(config.output_dir.clone());
    let fetcher = FallbackFetcher::new(storage, config).unwrap();

    let outcome = fetcher.run().await.unwrap();

    dead_mirror.assert();
    live_mirror.assert();
    assert!(outcome.is_success());

    let written = std::fs::read_to_string(output_dir.join("web-llm.js")).unwrap();
    assert_eq!(written, "export const webllm = true;");
}

#[tokio::test]
async fn test_all_mirrors_down_creates_directory_but_no_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("lib");

    let server = MockServer::start();
    let first = server.mock(|when, then| {
        when.method(GET).path("/a/index.js");
        then.status(500);
    });
    let second = server.mock(|when, then| {
        when.method(GET).path("/b/index.js");
        then.status(502);
    });

    let config = config_for(
        vec![server.url("/a/index.js"), server.url("/b/index.js")],
        output_dir.to_str().unwrap(),
    );
    let storage = LocalStorage::new(config.output_dir.clone());
    let fetcher = FallbackFetcher::new(storage, config).unwrap();

    let outcome = fetcher.run().await.unwrap();

    first.assert();
    second.assert();

    match outcome {
        FetchOutcome::AllFailed { attempts } => {
            assert_eq!(attempts.len(), 2);
            assert!(attempts.iter().all(|a| !a.reason.is_empty()));
        }
        other => panic!("expected all-failed outcome, got {:?}", other),
    }

    assert!(output_dir.is_dir());
    assert!(!output_dir.join("web-llm.js").exists());
}

#[tokio::test]
async fn test_existing_output_directory_is_reused() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("lib");
    std::fs::create_dir_all(&output_dir).unwrap();

    let server = MockServer::start();
    let mirror = server.mock(|when, then| {
        when.method(GET).path("/index.js");
        then.status(200).body("X");
    });

    let config = config_for(vec![server.url("/index.js")], output_dir.to_str().unwrap());
    let storage = LocalStorage::new(config.output_dir.clone());
    let fetcher = FallbackFetcher::new(storage, config).unwrap();

    let outcome = fetcher.run().await.unwrap();

    mirror.assert();
    assert!(outcome.is_success());
    assert_eq!(
        std::fs::read_to_string(output_dir.join("web-llm.js")).unwrap(),
        "X"
    );
}

#[tokio::test]
async fn test_downloaded_copy_overwrites_previous_one() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("lib");
    std::fs::create_dir_all(&output_dir).unwrap();
    std::fs::write(output_dir.join("web-llm.js"), "old bundle").unwrap();

    let server = MockServer::start();
    let mirror = server.mock(|when, then| {
        when.method(GET).path("/index.js");
        then.status(200).body("new bundle");
    });

    let config = config_for(vec![server.url("/index.js")], output_dir.to_str().unwrap());
    let storage = LocalStorage::new(config.output_dir.clone());
    let fetcher = FallbackFetcher::new(storage, config).unwrap();

    let outcome = fetcher.run().await.unwrap();

    mirror.assert();
    assert!(outcome.is_success());
    assert_eq!(
        std::fs::read_to_string(output_dir.join("web-llm.js")).unwrap(),
        "new bundle"
    );
}
