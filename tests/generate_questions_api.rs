//! Integration tests for the question-generation REST API.
//!
//! Each test spins up an Axum server on a random port and exercises the
//! real HTTP contract with a plain REST client.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::time::timeout;
use tower_http::cors::{Any, CorsLayer};

use question_gen::questions::{AppState, Catalog, question_routes};

/// Maximum time any test is allowed to run before we consider it hung.
const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Unconditional catalog ids, in declaration order.
const UNCONDITIONAL_IDS: [&str; 11] = [
    "product_category",
    "origin_country",
    "materials",
    "manufacturer_name",
    "manufacturing_process",
    "certifications",
    "supplier_contact",
    "production_date",
    "annual_volume",
    "supply_chain_doc",
    "packaging_materials",
];

/// Start an Axum server on a random port, return its port.
async fn start_server() -> u16 {
    let state = AppState {
        catalog: Arc::new(Catalog::standard()),
    };
    let app = question_routes(state).layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give the server a moment to start accepting connections.
    tokio::time::sleep(Duration::from_millis(50)).await;

    port
}

/// Helper: POST a body to /generate-questions and return (status, json).
async fn post_generate(port: u16, body: Value) -> (reqwest::StatusCode, Value) {
    let res = reqwest::Client::new()
        .post(format!("http://127.0.0.1:{port}/generate-questions"))
        .json(&body)
        .send()
        .await
        .expect("request failed");
    let status = res.status();
    let json = res.json::<Value>().await.unwrap_or(Value::Null);
    (status, json)
}

fn question_ids(response: &Value) -> Vec<&str> {
    response["nextQuestions"]
        .as_array()
        .expect("nextQuestions should be an array")
        .iter()
        .map(|q| q["id"].as_str().unwrap())
        .collect()
}

// ── Happy Path ──────────────────────────────────────────────────────────

#[tokio::test]
async fn empty_answers_return_full_catalog() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server().await;

        let (status, body) = post_generate(
            port,
            json!({"name": "Example Product", "metadata": {}, "answers": {}}),
        )
        .await;

        assert_eq!(status, 200);
        assert_eq!(question_ids(&body), UNCONDITIONAL_IDS);
        assert_eq!(body["progress"], 0.0);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn omitted_and_null_fields_default_to_empty() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server().await;

        let (status, body) = post_generate(port, json!({"name": "Example Product"})).await;
        assert_eq!(status, 200);
        assert_eq!(question_ids(&body).len(), 11);

        let (status, body) = post_generate(
            port,
            json!({"name": "Example Product", "metadata": null, "answers": null}),
        )
        .await;
        assert_eq!(status, 200);
        assert_eq!(question_ids(&body).len(), 11);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn answered_questions_are_excluded() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server().await;

        let (status, body) = post_generate(
            port,
            json!({
                "name": "Shirt",
                "answers": {"origin_country": "Portugal", "materials": "organic cotton"}
            }),
        )
        .await;

        assert_eq!(status, 200);
        let ids = question_ids(&body);
        assert!(!ids.contains(&"origin_country"));
        assert!(!ids.contains(&"materials"));
        assert_eq!(body["progress"], 2.0 / 15.0);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn category_followup_surfaces_over_http() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server().await;

        let mut answers = serde_json::Map::new();
        for id in UNCONDITIONAL_IDS {
            let value = if id == "product_category" {
                json!("electronics")
            } else {
                json!("answered")
            };
            answers.insert(id.to_string(), value);
        }

        let (status, body) =
            post_generate(port, json!({"name": "Router", "answers": answers})).await;

        assert_eq!(status, 200);
        let ids = question_ids(&body);
        assert!(ids.contains(&"energy_efficiency"));
        assert!(!ids.contains(&"fabric_composition"));
        assert!(!ids.contains(&"ingredients_source"));
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn fully_answered_flow_returns_completion() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server().await;

        let mut answers = serde_json::Map::new();
        for id in UNCONDITIONAL_IDS {
            let value = if id == "product_category" {
                json!("other")
            } else {
                json!("answered")
            };
            answers.insert(id.to_string(), value);
        }
        answers.insert("additional_notes".to_string(), json!("nothing further"));

        let (status, body) =
            post_generate(port, json!({"name": "Widget", "answers": answers})).await;

        assert_eq!(status, 200);
        assert_eq!(question_ids(&body), ["completion"]);
        assert_eq!(body["progress"], 1.0);
        assert_eq!(body["nextQuestions"][0]["required"], false);
    })
    .await
    .expect("test timed out");
}

// ── Wire Contract ───────────────────────────────────────────────────────

#[tokio::test]
async fn response_uses_camel_case_envelope_and_omits_absent_fields() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server().await;

        let (status, body) = post_generate(port, json!({"name": "Example Product"})).await;
        assert_eq!(status, 200);

        let obj = body.as_object().unwrap();
        assert!(obj.contains_key("nextQuestions"));
        assert!(obj.contains_key("progress"));
        assert!(!obj.contains_key("next_questions"));

        let questions = body["nextQuestions"].as_array().unwrap();
        // product_category is a dropdown and carries options.
        let category = &questions[0];
        assert_eq!(category["type"], "dropdown");
        assert!(category["options"].is_array());
        // origin_country is plain text: no options, and unset optional
        // fields are omitted entirely.
        let origin = &questions[1];
        assert_eq!(origin["type"], "text");
        let origin_obj = origin.as_object().unwrap();
        assert!(!origin_obj.contains_key("options"));
        assert!(!origin_obj.contains_key("help_text"));
        assert!(!origin_obj.contains_key("validation"));
        assert_eq!(origin["placeholder"], "e.g. Portugal");
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn malformed_bodies_are_rejected() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server().await;

        // Missing required `name`.
        let (status, _) = post_generate(port, json!({"answers": {}})).await;
        assert!(status.is_client_error());

        // `answers` must decode as an object.
        let (status, _) =
            post_generate(port, json!({"name": "Shirt", "answers": "not an object"})).await;
        assert!(status.is_client_error());

        // `metadata` must decode as an object.
        let (status, _) = post_generate(port, json!({"name": "Shirt", "metadata": 7})).await;
        assert!(status.is_client_error());
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn free_form_metadata_is_accepted_and_ignored() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server().await;

        let (status, body) = post_generate(
            port,
            json!({
                "name": "Shirt",
                "metadata": {"brand": "Acme", "tags": ["eco", "new"], "batch": 42},
                "answers": {}
            }),
        )
        .await;

        assert_eq!(status, 200);
        assert_eq!(question_ids(&body).len(), 11);
    })
    .await
    .expect("test timed out");
}

// ── Transport ───────────────────────────────────────────────────────────

#[tokio::test]
async fn health_endpoint_reports_ok() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server().await;

        let res = reqwest::get(format!("http://127.0.0.1:{port}/health"))
            .await
            .unwrap();
        assert_eq!(res.status(), 200);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["status"], "ok");
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn cors_preflight_allows_any_origin() {
    timeout(TEST_TIMEOUT, async {
        let port = start_server().await;

        let res = reqwest::Client::new()
            .request(
                reqwest::Method::OPTIONS,
                format!("http://127.0.0.1:{port}/generate-questions"),
            )
            .header("Origin", "http://localhost:5173")
            .header("Access-Control-Request-Method", "POST")
            .header("Access-Control-Request-Headers", "content-type")
            .send()
            .await
            .unwrap();

        assert!(res.status().is_success());
        let headers = res.headers();
        assert_eq!(headers["access-control-allow-origin"], "*");
    })
    .await
    .expect("test timed out");
}
