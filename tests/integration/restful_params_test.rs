//! Integration tests for route-parameter validation and option resolution.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health_endpoint() {
    let app = TestApp::new();
    let resp = app.get("/api/health").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["status"], "ok");
}

#[tokio::test]
async fn test_numeric_param_parsed_and_merged_after_baseline() {
    let app = TestApp::new();
    let resp = app.get("/api/users/42").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        resp.body["params"],
        json!([{ "field": "id", "op": "eq", "value": 42 }])
    );

    // baseline filter first, request-derived second
    let filter = resp.body["options"]["filter"].as_array().unwrap();
    assert_eq!(filter.len(), 2);
    assert_eq!(filter[0], json!({ "field": "deleted", "op": "eq", "value": false }));
    assert_eq!(filter[1], json!({ "field": "id", "op": "eq", "value": 42 }));

    // remaining baseline options carried through untouched
    assert_eq!(resp.body["options"]["limit"], 25);
    assert_eq!(resp.body["options"]["max_limit"], 100);
    assert_eq!(resp.body["options"]["cache_seconds"], 60);
    assert_eq!(
        resp.body["options"]["sort"],
        json!([{ "field": "created_at", "direction": "desc" }])
    );
}

#[tokio::test]
async fn test_numeric_param_truncates_decimal_string() {
    let app = TestApp::new();
    let resp = app.get("/api/users/3.9").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["params"][0]["value"], 3);
}

#[tokio::test]
async fn test_non_numeric_param_rejected_with_400() {
    let app = TestApp::new();
    let resp = app.get("/api/users/abc").await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.body["error"], "VALIDATION_ERROR");
    assert_eq!(
        resp.body["message"],
        "Validation failed. Param 'id': numeric string is expected"
    );
    // handler output is absent entirely
    assert!(resp.body.get("params").is_none());
}

#[tokio::test]
async fn test_uuid_param_passes_through_unchanged() {
    let app = TestApp::new();
    let id = "550e8400-e29b-41d4-a716-446655440000";
    let resp = app.get(&format!("/api/companies/{id}/users/7")).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        resp.body["params"],
        json!([
            { "field": "company_id", "op": "eq", "value": id },
            { "field": "user_id", "op": "eq", "value": 7 },
        ])
    );

    // empty baseline: resolved filter is exactly the parsed params
    assert_eq!(resp.body["options"]["filter"], resp.body["params"]);
    assert!(resp.body["options"].get("limit").is_none());
}

#[tokio::test]
async fn test_uuid_param_accepts_uppercase() {
    let app = TestApp::new();
    let id = uuid::Uuid::new_v4().to_string().to_uppercase();
    let resp = app.get(&format!("/api/companies/{id}/users/1")).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["params"][0]["value"], id);
}

#[tokio::test]
async fn test_malformed_uuid_rejected_with_400() {
    let app = TestApp::new();
    let resp = app.get("/api/companies/not-a-uuid/users/7").await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.body["message"],
        "Validation failed. Param 'company_id': UUID string is expected"
    );
}

#[tokio::test]
async fn test_text_param_skips_validation() {
    let app = TestApp::new();
    let resp = app.get("/api/posts/hello-world").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        resp.body["params"],
        json!([{ "field": "slug", "op": "eq", "value": "hello-world" }])
    );
    // no baseline options configured for this route
    assert_eq!(resp.body["options"]["filter"], resp.body["params"]);
}

#[tokio::test]
async fn test_same_request_twice_yields_identical_output() {
    let app = TestApp::new();
    let first = app.get("/api/users/42").await;
    let second = app.get("/api/users/42").await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body, second.body);
}
