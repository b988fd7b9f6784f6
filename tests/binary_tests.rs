//! Runs the compiled binary with an isolated config directory.

use std::process::Output;
use tempfile::{TempDir, tempdir};
use tokio::process::Command;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

async fn run_binary(config_home: &TempDir, data_url: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nfl_weekly_stats"))
        .env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env("NFL_STATS_DATA_URL", data_url)
        .env_remove("NFL_STATS_LOG_FILE")
        .env_remove("NFL_STATS_HTTP_TIMEOUT")
        .env_remove("RUST_LOG")
        .output()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_binary_success_prints_three_lines() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/player_stats_2024.csv"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("player,week,season,yards\nA,1,2024,80\n"),
        )
        .mount(&mock_server)
        .await;

    let config_home = tempdir().unwrap();
    let output = run_binary(&config_home, &mock_server.uri()).await;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "---JSON_START---\n[{\"player\":\"A\",\"week\":1,\"season\":2024,\"yards\":80}]\n---JSON_END---\n"
    );
    assert!(output.stderr.is_empty());
}

#[tokio::test]
async fn test_binary_failure_still_exits_zero() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let config_home = tempdir().unwrap();
    let output = run_binary(&config_home, &format!("http://127.0.0.1:{port}")).await;

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 1);
    assert!(stderr.starts_with("An error occurred in the Python script: "));
}

#[tokio::test]
async fn test_binary_invalid_config_is_reported_not_raised() {
    let config_home = tempdir().unwrap();
    let output = run_binary(&config_home, "not-a-url").await;

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(
        stderr,
        "An error occurred in the Python script: Configuration error: Data URL must start with http:// or https://: not-a-url\n"
    );
}
