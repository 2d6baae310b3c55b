//! Integration tests for nbi-web API endpoints
//!
//! Tests cover:
//! - Health endpoint
//! - Idea generation (scoring, business-type filter, input validation)
//! - Saving favorites and the saved-ideas lifecycle
//! - UI serving

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot` method

use nbi_web::{build_router, AppState};

/// Test helper: Create app with fresh in-memory state
fn setup_app() -> axum::Router {
    build_router(AppState::new())
}

/// Test helper: Create a GET/DELETE request with empty body
fn test_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Test helper: Create a JSON POST request
fn json_request(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Test helper: Extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

/// Test helper: A representative user profile
fn sample_profile() -> Value {
    json!({
        "location": { "city": "Austin", "state": "TX" },
        "interests": ["marketing", "technology"],
        "budget": "MEDIUM",
        "hoursPerWeek": 20,
        "businessType": "SERVICE",
        "riskTolerance": "MEDIUM"
    })
}

/// Test helper: Generate ideas and return the response body
async fn generate(app: &axum::Router, profile: &Value) -> Value {
    let response = app
        .clone()
        .oneshot(json_request("/api/ideas/generate", profile))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    extract_json(response.into_body()).await
}

// =============================================================================
// Health Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_app();

    let response = app.oneshot(test_request("GET", "/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "nbi-web");
    assert!(body["version"].is_string());
}

// =============================================================================
// Idea Generation Tests
// =============================================================================

#[tokio::test]
async fn test_generate_returns_scored_ideas() {
    let app = setup_app();
    let body = generate(&app, &sample_profile()).await;

    assert_eq!(body["success"], true);
    let ideas = body["ideas"].as_array().unwrap();
    assert!(!ideas.is_empty());
    assert!(ideas.len() <= 10);

    for idea in ideas {
        assert!(idea["id"].is_string());
        assert!(idea["title"].is_string());
        assert!(idea["createdAt"].is_string());

        let score = &idea["score"];
        assert_eq!(score["ideaId"], idea["id"]);
        for field in [
            "demandScore",
            "competitionScore",
            "feasibilityScore",
            "profitabilityScore",
            "overallScore",
        ] {
            let value = score[field].as_u64().unwrap();
            assert!(value <= 100, "{field} out of range: {value}");
        }
        assert_eq!(score["reasons"].as_array().unwrap().len(), 3);
    }
}

#[tokio::test]
async fn test_generate_filters_by_business_type() {
    let app = setup_app();
    let mut profile = sample_profile();
    profile["businessType"] = json!("DIGITAL");

    let body = generate(&app, &profile).await;

    for idea in body["ideas"].as_array().unwrap() {
        let tags = idea["tags"].as_array().unwrap();
        assert!(tags
            .iter()
            .any(|t| t.as_str().unwrap().contains("digital")));
    }
}

#[tokio::test]
async fn test_generate_localizes_viability_notes() {
    let app = setup_app();
    let mut profile = sample_profile();
    profile["location"]["city"] = json!("Boise");

    let body = generate(&app, &profile).await;

    for idea in body["ideas"].as_array().unwrap() {
        let notes = idea["localViabilityNotes"].as_str().unwrap();
        assert!(notes.contains("Localized for Boise"));
    }
}

#[tokio::test]
async fn test_generate_rejects_impossible_hours() {
    let app = setup_app();
    let mut profile = sample_profile();
    profile["hoursPerWeek"] = json!(200);

    let response = app
        .oneshot(json_request("/api/ideas/generate", &profile))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert!(body["error"].as_str().unwrap().contains("hoursPerWeek"));
}

#[tokio::test]
async fn test_generate_rejects_malformed_body() {
    let app = setup_app();
    let response = app
        .oneshot(json_request("/api/ideas/generate", &json!({"budget": "LOW"})))
        .await
        .unwrap();

    // Missing required fields fail JSON extraction
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// =============================================================================
// Save / Saved Lifecycle Tests
// =============================================================================

/// Pull one generated idea apart into the save payload `{ idea, score }`
fn save_payload(generated: &Value) -> Value {
    let mut idea = generated.clone();
    let score = idea.as_object_mut().unwrap().remove("score").unwrap();
    json!({ "idea": idea, "score": score })
}

#[tokio::test]
async fn test_save_and_list_roundtrip() {
    let app = setup_app();
    let body = generate(&app, &sample_profile()).await;
    let first = &body["ideas"][0];

    let response = app
        .clone()
        .oneshot(json_request("/api/ideas/save", &save_payload(first)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let save_body = extract_json(response.into_body()).await;
    assert_eq!(save_body["success"], true);
    assert_eq!(save_body["idea"]["id"], first["id"]);

    let response = app
        .oneshot(test_request("GET", "/api/ideas/saved"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let list = extract_json(response.into_body()).await;
    let ideas = list["ideas"].as_array().unwrap();
    assert_eq!(ideas.len(), 1);
    assert_eq!(ideas[0]["id"], first["id"]);
    assert_eq!(ideas[0]["score"]["reasons"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_save_twice_does_not_duplicate() {
    let app = setup_app();
    let body = generate(&app, &sample_profile()).await;
    let payload = save_payload(&body["ideas"][0]);

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(json_request("/api/ideas/save", &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .oneshot(test_request("GET", "/api/ideas/saved"))
        .await
        .unwrap();
    let list = extract_json(response.into_body()).await;
    assert_eq!(list["ideas"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_save_rejects_mismatched_score() {
    let app = setup_app();
    let body = generate(&app, &sample_profile()).await;
    let mut payload = save_payload(&body["ideas"][0]);
    payload["score"]["ideaId"] = json!("00000000-0000-0000-0000-000000000000");

    let response = app
        .oneshot(json_request("/api/ideas/save", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("does not belong"));
}

#[tokio::test]
async fn test_save_rejects_out_of_range_score() {
    let app = setup_app();
    let body = generate(&app, &sample_profile()).await;
    let mut payload = save_payload(&body["ideas"][0]);
    payload["score"]["demandScore"] = json!(150);

    let response = app
        .oneshot(json_request("/api/ideas/save", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_saved_idea_by_id() {
    let app = setup_app();
    let body = generate(&app, &sample_profile()).await;
    let first = &body["ideas"][0];
    let id = first["id"].as_str().unwrap();

    app.clone()
        .oneshot(json_request("/api/ideas/save", &save_payload(first)))
        .await
        .unwrap();

    let response = app
        .oneshot(test_request("GET", &format!("/api/ideas/saved/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["idea"]["id"], *first.get("id").unwrap());
}

#[tokio::test]
async fn test_get_saved_idea_unknown_id_is_404() {
    let app = setup_app();

    let response = app
        .oneshot(test_request(
            "GET",
            "/api/ideas/saved/11111111-2222-3333-4444-555555555555",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_saved_idea_invalid_id_is_400() {
    let app = setup_app();

    let response = app
        .oneshot(test_request("GET", "/api/ideas/saved/not-a-uuid"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert!(body["error"].as_str().unwrap().contains("Invalid idea id"));
}

#[tokio::test]
async fn test_delete_saved_idea() {
    let app = setup_app();
    let body = generate(&app, &sample_profile()).await;
    let first = &body["ideas"][0];
    let id = first["id"].as_str().unwrap();

    app.clone()
        .oneshot(json_request("/api/ideas/save", &save_payload(first)))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(test_request("DELETE", &format!("/api/ideas/saved/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Second delete finds nothing
    let response = app
        .oneshot(test_request("DELETE", &format!("/api/ideas/saved/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_saved_list_empty_initially() {
    let app = setup_app();

    let response = app
        .oneshot(test_request("GET", "/api/ideas/saved"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["ideas"].as_array().unwrap().len(), 0);
}

// =============================================================================
// UI Serving Tests
// =============================================================================

#[tokio::test]
async fn test_index_page_serves_html() {
    let app = setup_app();

    let response = app.oneshot(test_request("GET", "/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Next Business Idea"));
    assert!(html.contains("Generate Ideas"));
    assert!(html.contains("Load Saved Ideas"));
}

#[tokio::test]
async fn test_app_js_content_type() {
    let app = setup_app();

    let response = app
        .oneshot(test_request("GET", "/static/app.js"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/javascript"
    );
}
