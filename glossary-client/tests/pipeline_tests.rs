mod common;

use common::{item, mock_config_with_csv, mount_schema, mount_token, SEARCH_PATH, TOKEN_PATH};
use glossary_client::model::{GlossaryCsvReader, Row};
use glossary_client::{
    export_glossary, update_from_csv, ClientError, GlossaryConfig, GlossaryEvent, GovernanceClient,
    MemorySink,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::path::PathBuf;
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn read_rows(path: &std::path::Path) -> Vec<Row> {
    GlossaryCsvReader::open(path)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap()
}

// ── Export ──────────────────────────────────────────────────────

#[tokio::test]
async fn export_writes_uniform_rows() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("export.csv");

    mount_token(&server).await;
    mount_schema(&server, &["entitlementOwner_givenName", "classification", "riskLevel"]).await;

    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": [
                item("42", json!({"classification": "high", "entitlementOwner": {"givenName": "Amy"}})),
                item("43", json!({"isSensitive": true})),
                {"id": "44"}
            ],
            "totalCount": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = GlossaryConfig {
        attributes: vec!["isSensitive".to_string(), "classification".to_string()],
        ..mock_config_with_csv(&server, &csv)
    };
    let client = GovernanceClient::new(config).unwrap();
    let sink = MemorySink::new();
    let summary = export_glossary(&client, &sink).await.unwrap();

    assert_eq!(summary.rows, 3);
    assert_eq!(summary.columns, 4);
    assert_eq!(summary.path, csv);

    let text = std::fs::read_to_string(&csv).unwrap();
    assert_eq!(
        text.lines().next(),
        Some(r#""id","isSensitive","classification","entitlementOwner_givenName","riskLevel""#)
    );

    let rows = read_rows(&csv);
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.len() == 5));
    assert_eq!(rows[0]["id"], "42");
    assert_eq!(rows[0]["classification"], "high");
    assert_eq!(rows[0]["entitlementOwner_givenName"], "Amy");
    assert_eq!(rows[0]["isSensitive"], "");
    assert_eq!(rows[1]["isSensitive"], "true");
    assert_eq!(rows[2]["classification"], "");

    let events = sink.events();
    assert_eq!(events.first(), Some(&GlossaryEvent::Authenticated));
    assert!(events.contains(&GlossaryEvent::SchemaResolved { attributes: 4 }));
    assert_eq!(
        events.last(),
        Some(&GlossaryEvent::ExportWritten { path: csv.clone(), rows: 3 })
    );
}

#[tokio::test]
async fn export_of_zero_results_writes_header_only() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("empty.csv");

    mount_token(&server).await;
    mount_schema(&server, &[]).await;

    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": [],
            "totalCount": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GovernanceClient::new(mock_config_with_csv(&server, &csv)).unwrap();
    let summary = export_glossary(&client, &MemorySink::new()).await.unwrap();

    assert_eq!(summary.rows, 0);
    assert!(read_rows(&csv).is_empty());
    assert_eq!(std::fs::read_to_string(&csv).unwrap().lines().count(), 1);
}

#[tokio::test]
async fn export_aborts_on_auth_failure() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("never.csv");

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = GovernanceClient::new(mock_config_with_csv(&server, &csv)).unwrap();
    let err = export_glossary(&client, &MemorySink::new()).await.unwrap_err();
    assert!(matches!(err, ClientError::Auth(_)));
    assert!(!csv.exists());
}

#[tokio::test]
async fn export_to_unwritable_path_is_file_error() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("no-such-dir").join("out.csv");

    mount_token(&server).await;
    mount_schema(&server, &[]).await;
    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": [],
            "totalCount": 0
        })))
        .mount(&server)
        .await;

    let client = GovernanceClient::new(mock_config_with_csv(&server, &csv)).unwrap();
    let err = export_glossary(&client, &MemorySink::new()).await.unwrap_err();
    assert!(matches!(err, ClientError::File(_)));
}

// ── Update ──────────────────────────────────────────────────────

#[tokio::test]
async fn update_reads_csv_and_pushes_rows() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("edited.csv");
    std::fs::write(
        &csv,
        "\"id\",\"isSensitive\",\"classification\",\"description\"\n\
         \"1\",\"  \",\"\",\"\"\n\
         \"2\",\"TRUE\",\"high\",\"Admin access\"\n",
    )
    .unwrap();

    mount_token(&server).await;

    Mock::given(method("PUT"))
        .and(path("/iga/governance/resource/2/glossary"))
        .and(body_partial_json(json!({
            "isSensitive": "true",
            "classification": "high",
            "description": "Admin access"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path_regex("^/iga/governance/resource/1/glossary$"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = GovernanceClient::new(mock_config_with_csv(&server, &csv)).unwrap();
    let report = update_from_csv(&client, &MemorySink::new()).await.unwrap();

    assert_eq!(report.skipped, vec!["1"]);
    assert_eq!(report.updated, vec!["2"]);
    assert!(report.is_clean());
}

#[tokio::test]
async fn update_with_missing_file_makes_no_requests() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = GlossaryConfig {
        csv_path: PathBuf::from("/definitely/not/here.csv"),
        ..common::mock_config(&server)
    };
    let client = GovernanceClient::new(config).unwrap();
    let err = update_from_csv(&client, &MemorySink::new()).await.unwrap_err();
    assert!(matches!(err, ClientError::File(_)));
}

#[tokio::test]
async fn export_then_update_round_trip() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("roundtrip.csv");

    mount_token(&server).await;
    mount_schema(&server, &[]).await;

    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": [
                item("a", json!({"classification": "low", "requestable": true})),
                item("b", json!({}))
            ],
            "totalCount": 2
        })))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/iga/governance/resource/a/glossary"))
        .and(body_partial_json(json!({"classification": "low", "requestable": "true"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = GovernanceClient::new(mock_config_with_csv(&server, &csv)).unwrap();
    export_glossary(&client, &MemorySink::new()).await.unwrap();
    let report = update_from_csv(&client, &MemorySink::new()).await.unwrap();

    assert_eq!(report.updated, vec!["a"]);
    assert_eq!(report.skipped, vec!["b"]);
}
