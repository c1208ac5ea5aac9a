#![allow(dead_code)]

use glossary_client::GlossaryConfig;
use serde_json::{json, Value};
use std::path::Path;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "test_token";
pub const TOKEN_PATH: &str = "/am/oauth2/alpha/access_token";
pub const SEARCH_PATH: &str = "/iga/governance/resource/search";
pub const SCHEMA_PATH: &str = "/iga/commons/glossary/schema/search";

pub fn mock_config(server: &MockServer) -> GlossaryConfig {
    GlossaryConfig {
        base_url: server.uri(),
        client_id: "test_client".to_string(),
        client_secret: "test_secret".to_string(),
        search_string: "SNOW".to_string(),
        page_size: 10,
        ..Default::default()
    }
}

pub fn mock_config_with_csv(server: &MockServer, csv: &Path) -> GlossaryConfig {
    GlossaryConfig {
        csv_path: csv.to_path_buf(),
        ..mock_config(server)
    }
}

/// A search result item carrying an entitlement glossary.
pub fn item(id: &str, glossary: Value) -> Value {
    json!({
        "id": id,
        "glossary": {"idx": {"/entitlement": glossary}}
    })
}

pub async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": TOKEN,
            "token_type": "Bearer",
            "expires_in": 3599
        })))
        .mount(server)
        .await;
}

pub async fn mount_schema(server: &MockServer, names: &[&str]) {
    let result: Vec<Value> = names
        .iter()
        .map(|n| json!({"name": n, "type": "string"}))
        .collect();

    Mock::given(method("POST"))
        .and(path(SCHEMA_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": result })))
        .mount(server)
        .await;
}

/// Mounts `total` results split into pages of `page_size`, each page
/// expected exactly once.
pub async fn mount_pages(server: &MockServer, total: u64, page_size: u64) {
    let pages = total.div_ceil(page_size).max(1);
    for page in 0..pages {
        let start = page * page_size;
        let end = (start + page_size).min(total);
        let result: Vec<Value> = (start..end)
            .map(|i| item(&format!("ent-{i}"), json!({"classification": "low"})))
            .collect();

        Mock::given(method("POST"))
            .and(path(SEARCH_PATH))
            .and(query_param("pageNumber", page.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": result,
                "totalCount": total
            })))
            .expect(1)
            .mount(server)
            .await;
    }
}
