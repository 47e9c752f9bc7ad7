//! Process-level tests for the automap binary
//!
//! Each test runs the binary inside a fresh temporary directory so that no
//! stray `automap.toml` is picked up.

use std::path::Path;
use std::process::Output;

use serde_json::json;
use tokio::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY_ENV: &str = "OPENROUTESERVICE_API_KEY";

fn automap(dir: &Path) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_automap"));
    command
        .current_dir(dir)
        .env_remove("AUTOMAP_CONFIG")
        .env_remove("RUST_LOG")
        .env("AUTOMAP_ORIGIN__ADDRESS", "Bundesplatz 3, 3005 Bern")
        .env("AUTOMAP_PROCESSING__PAUSE_BETWEEN_ROWS_MS", "0");
    command
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

async fn mock_ors() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [7.4446, 46.9466] },
                "properties": {}
            }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v2/directions/driving-car"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "routes": [{ "summary": { "distance": 2_500.0, "duration": 420.0 } }]
        })))
        .mount(&server)
        .await;

    server
}

fn write_csv(dir: &Path) {
    std::fs::write(
        dir.join("addresses.csv"),
        "Address,PostalCode,City\nMarktgasse 1,3011,Bern\n,,\n",
    )
    .unwrap();
}

#[tokio::test]
async fn missing_input_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();

    let output = automap(dir.path())
        .env(API_KEY_ENV, "test-api-key")
        .args(["--input", "missing.xlsx", "--output", "out.xlsx"])
        .output()
        .await
        .unwrap();

    assert!(!output.status.success());
    assert!(stdout(&output).contains("missing.xlsx"));
    assert!(!dir.path().join("out.xlsx").exists());
}

#[tokio::test]
async fn unset_api_key_fails_before_any_request() {
    let server = mock_ors().await;
    let dir = tempfile::tempdir().unwrap();
    write_csv(dir.path());

    let output = automap(dir.path())
        .env_remove(API_KEY_ENV)
        .env("AUTOMAP_OPENROUTESERVICE__BASE_URL", server.uri())
        .args(["-i", "addresses.csv", "-o", "out.csv"])
        .output()
        .await
        .unwrap();

    assert!(!output.status.success());
    assert!(stdout(&output).contains(API_KEY_ENV));
    assert!(server.received_requests().await.unwrap().is_empty());
    assert!(!dir.path().join("out.csv").exists());
}

#[tokio::test]
async fn missing_origin_fails() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(dir.path());

    let output = automap(dir.path())
        .env_remove("AUTOMAP_ORIGIN__ADDRESS")
        .env(API_KEY_ENV, "test-api-key")
        .args(["-i", "addresses.csv", "-o", "out.csv"])
        .output()
        .await
        .unwrap();

    assert!(!output.status.success());
    assert!(stdout(&output).contains("origin.address"));
}

#[tokio::test]
async fn successful_run_writes_report() {
    let server = mock_ors().await;
    let dir = tempfile::tempdir().unwrap();
    write_csv(dir.path());

    let output = automap(dir.path())
        .env(API_KEY_ENV, "test-api-key")
        .env("AUTOMAP_OPENROUTESERVICE__BASE_URL", server.uri())
        .args(["-i", "addresses.csv", "-o", "out.csv"])
        .output()
        .await
        .unwrap();

    assert!(output.status.success(), "stdout: {}", stdout(&output));
    assert!(stdout(&output).contains("✅ Processed 2 rows: 1 routed, 1 without address, 0 failed"));

    let report = std::fs::read_to_string(dir.path().join("out.csv")).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Address,PostalCode,City,Distance_km,Duration_minutes,Error",
            "Marktgasse 1,3011,Bern,2.5,7,",
            ",,,NO_ADDRESS,NO_ADDRESS,",
        ]
    );
}

#[tokio::test]
async fn config_file_is_read() {
    let server = mock_ors().await;
    let dir = tempfile::tempdir().unwrap();
    write_csv(dir.path());
    std::fs::write(
        dir.path().join("batch.toml"),
        format!(
            "[input]\npath = \"addresses.csv\"\n\n[output]\npath = \"result.csv\"\ninclude_error_column = false\n\n[openrouteservice]\nbase_url = \"{}\"\n",
            server.uri()
        ),
    )
    .unwrap();

    let output = automap(dir.path())
        .env(API_KEY_ENV, "test-api-key")
        .args(["--config", "batch.toml"])
        .output()
        .await
        .unwrap();

    assert!(output.status.success(), "stdout: {}", stdout(&output));
    let report = std::fs::read_to_string(dir.path().join("result.csv")).unwrap();
    assert!(report.starts_with("Address,PostalCode,City,Distance_km,Duration_minutes\n"));
}
