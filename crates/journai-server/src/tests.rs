//! Server API tests

use super::*;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{Duration as ChronoDuration, Utc};
use http_body_util::BodyExt;
use journai_core::ai::MockBackend;
use journai_core::db::Database;
use journai_core::models::NewJournal;
use journai_core::test_utils::MockGeminiServer;
use tower::ServiceExt;

fn test_config() -> ServerConfig {
    ServerConfig {
        require_auth: false,
        allowed_origins: vec![],
        ..Default::default()
    }
}

fn setup_test_app() -> Router {
    let db = Database::in_memory().unwrap();
    create_router_with_options(db, None, test_config(), Some(AIClient::mock()))
}

fn setup_test_app_with_db(db: Database) -> Router {
    create_router_with_options(db, None, test_config(), Some(AIClient::mock()))
}

async fn get_body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body();
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("x-user-id", "user_1")
        .body(Body::empty())
        .unwrap()
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header("x-user-id", "user_1")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .header("x-user-id", "user_1")
        .body(Body::empty())
        .unwrap()
}

fn entry(user: &str, text: &str, mood: &str, days_ago: i64) -> NewJournal {
    NewJournal {
        user_id: user.to_string(),
        text: text.to_string(),
        mood: mood.to_string(),
        summary: "summary".to_string(),
        reason: "reason".to_string(),
        title: None,
        created_at: Some(Utc::now() - ChronoDuration::days(days_ago)),
    }
}

// ========== Health / Auth ==========

#[tokio::test]
async fn test_health() {
    let app = setup_test_app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );

    let json = get_body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["aiConfigured"], true);
}

#[tokio::test]
async fn test_health_does_not_require_auth() {
    let db = Database::in_memory().unwrap();
    let config = ServerConfig::default();
    let app = create_router_with_options(db, None, config, None);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_auth_required() {
    let db = Database::in_memory().unwrap();
    let app = create_router_with_options(db, None, ServerConfig::default(), None);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/me")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = get_body_json(response).await;
    assert_eq!(json["error"], "Authentication required");
}

#[tokio::test]
async fn test_auth_ignores_user_header_when_required() {
    let db = Database::in_memory().unwrap();
    let config = ServerConfig {
        jwt: JwtConfig {
            issuer: Some("https://issuer.example.com".to_string()),
            jwks_url: Some("http://127.0.0.1:1/jwks".to_string()),
            audience: None,
        },
        ..Default::default()
    };
    let app = create_router_with_options(db, None, config, None);

    // The dev header is not an identity when auth is on
    let response = app.clone().oneshot(get("/api/me")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // A malformed token is rejected before any key fetch
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/me")
                .header("authorization", "Bearer not-a-jwt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_header() {
    let app = setup_test_app();

    let response = app.oneshot(get("/api/me")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["user"], "user_1");
    assert_eq!(json["authMethod"], "header");
}

#[tokio::test]
async fn test_me_defaults_to_local_dev() {
    let app = setup_test_app();

    let response = app
        .oneshot(Request::builder().uri("/api/me").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let json = get_body_json(response).await;
    assert_eq!(json["user"], LOCAL_DEV_USER);
    assert_eq!(json["authMethod"], "none");
}

#[tokio::test]
async fn test_user_journals_provisions_user() {
    let db = Database::in_memory().unwrap();
    db.ensure_user("user_1").unwrap();
    let older = db.insert_journal(&entry("user_1", "first", "happy", 2)).unwrap();
    let newer = db.insert_journal(&entry("user_1", "second", "sad", 1)).unwrap();
    let app = setup_test_app_with_db(db.clone());

    let response = app.oneshot(get("/api/user-journals")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["id"], "user_1");
    assert_eq!(json["journalIds"], serde_json::json!([newer, older]));

    // A brand new caller gets a user row on first access
    let app = setup_test_app_with_db(db.clone());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/user-journals")
                .header("x-user-id", "newcomer")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["journalIds"], serde_json::json!([]));
    assert!(db.get_user("newcomer").unwrap().is_some());
}

// ========== Analysis ==========

#[tokio::test]
async fn test_analyze_journal() {
    let app = setup_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/analyze-journal",
            serde_json::json!({ "text": "We celebrated my sister's graduation today" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["mood"], "happy");
    assert!(!json["summary"].as_str().unwrap().is_empty());
    assert!(!json["reason"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_analyze_journal_validation() {
    let app = setup_test_app();

    for body in [
        serde_json::json!({ "text": "" }),
        serde_json::json!({ "text": "too short" }),
        serde_json::json!({}),
        serde_json::json!({ "text": "hello <script>alert(1)</script> there" }),
        serde_json::json!({ "text": "x".repeat(10_001) }),
    ] {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/analyze-journal", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = get_body_json(response).await;
        assert!(json["error"].is_string());
    }
}

#[tokio::test]
async fn test_analyze_journal_malformed_json() {
    let app = setup_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/analyze-journal")
                .header("content-type", "application/json")
                .header("x-user-id", "user_1")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_analyze_journal_rate_limited() {
    let db = Database::in_memory().unwrap();
    let config = ServerConfig {
        analysis_max_requests: 2,
        ..test_config()
    };
    let app = create_router_with_options(db, None, config, Some(AIClient::mock()));
    let body = serde_json::json!({ "text": "A quiet and ordinary afternoon" });

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/analyze-journal", body.clone()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/analyze-journal", body.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(response.headers().contains_key("retry-after"));

    // Limits are per user
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/analyze-journal")
                .header("content-type", "application/json")
                .header("x-user-id", "user_2")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_analyze_journal_without_backend() {
    let db = Database::in_memory().unwrap();
    let app = create_router_with_options(db, None, test_config(), None);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/analyze-journal",
            serde_json::json!({ "text": "A quiet and ordinary afternoon" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_analyze_journal_backend_failure_returns_fallback() {
    let db = Database::in_memory().unwrap();
    let ai = AIClient::Mock(MockBackend::failing());
    let app = create_router_with_options(db, None, test_config(), Some(ai));

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/analyze-journal",
            serde_json::json!({ "text": "A quiet and ordinary afternoon" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["mood"], "neutral");
    assert_eq!(
        json["summary"],
        journai_core::MoodAnalysis::fallback().summary
    );
}

#[tokio::test]
async fn test_analyze_journal_with_gemini() {
    let server = MockGeminiServer::start().await;
    let db = Database::in_memory().unwrap();
    let ai = AIClient::gemini(&server.url(), "gemini-test", "AIzaTestKey123");
    let app = create_router_with_options(db, None, test_config(), Some(ai));

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/analyze-journal",
            serde_json::json!({ "text": "Completely exhausted after the night shift" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["mood"], "tired");
}

#[tokio::test]
async fn test_analyze_journal_with_failing_gemini() {
    let server = MockGeminiServer::start_failing().await;
    let db = Database::in_memory().unwrap();
    let ai = AIClient::gemini(&server.url(), "gemini-test", "AIzaTestKey123");
    let app = create_router_with_options(db, None, test_config(), Some(ai));

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/analyze-journal",
            serde_json::json!({ "text": "We celebrated my sister's graduation" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["mood"], "neutral");
}

// ========== Journal CRUD ==========

#[tokio::test]
async fn test_save_and_get_journal() {
    let db = Database::in_memory().unwrap();
    let app = setup_test_app_with_db(db.clone());

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/save-journal",
            serde_json::json!({
                "text": "  Went for a long walk by the river and felt calm  ",
                "mood": "Peaceful",
                "summary": "A calm walk",
                "reason": "Nature and quiet"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    let id = json["id"].as_i64().unwrap();
    assert_eq!(json["title"], "Went for a long walk by the river");
    assert_eq!(json["mood"], "peaceful");
    assert!(json["createdAt"].is_string());

    let response = app
        .oneshot(get(&format!("/api/journal/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(
        json["content"],
        "Went for a long walk by the river and felt calm"
    );
    assert_eq!(json["wordCount"], 11);
    assert_eq!(json["summary"], "A calm walk");

    // Saving provisions the user and is audited
    assert!(db.get_user("user_1").unwrap().is_some());
    let audit = db.list_audit_log(Some("user_1"), 10).unwrap();
    assert!(audit
        .iter()
        .any(|e| e.action == "create" && e.entity_id == Some(id)));
}

#[tokio::test]
async fn test_save_journal_with_title() {
    let app = setup_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/save-journal",
            serde_json::json!({
                "text": "Today was fine",
                "mood": "content",
                "summary": "Fine",
                "reason": "Nothing happened",
                "title": "  Sunday  "
            }),
        ))
        .await
        .unwrap();

    let json = get_body_json(response).await;
    assert_eq!(json["title"], "Sunday");
}

#[tokio::test]
async fn test_save_journal_validation() {
    let app = setup_test_app();

    for body in [
        serde_json::json!({ "text": "   ", "mood": "happy", "summary": "s", "reason": "r" }),
        serde_json::json!({ "mood": "happy", "summary": "s", "reason": "r" }),
        serde_json::json!({ "text": "Some text", "summary": "s", "reason": "r" }),
        serde_json::json!({ "text": "Some text", "mood": "happy", "summary": "", "reason": "r" }),
    ] {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/save-journal", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_get_journal_not_found() {
    let db = Database::in_memory().unwrap();
    db.ensure_user("someone_else").unwrap();
    let other = db
        .insert_journal(&entry("someone_else", "private", "sad", 0))
        .unwrap();
    let app = setup_test_app_with_db(db);

    let response = app.clone().oneshot(get("/api/journal/99999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Another user's entry is indistinguishable from a missing one
    let response = app
        .oneshot(get(&format!("/api/journal/{}", other)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_journal() {
    let db = Database::in_memory().unwrap();
    db.ensure_user("user_1").unwrap();
    let id = db
        .insert_journal(&entry("user_1", "original text", "sad", 0))
        .unwrap();
    let app = setup_test_app_with_db(db);

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/update-journal/{}", id),
            serde_json::json!({
                "text": "Rewritten with a much happier ending",
                "mood": "happy",
                "summary": "Better",
                "reason": "Things improved"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["title"], "Rewritten with a much happier ending");
    assert_eq!(json["mood"], "happy");
    assert_eq!(json["wordCount"], 6);

    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/update-journal/99999",
            serde_json::json!({
                "text": "x",
                "mood": "happy",
                "summary": "s",
                "reason": "r"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_journal_requires_fields() {
    let db = Database::in_memory().unwrap();
    db.ensure_user("user_1").unwrap();
    let id = db
        .insert_journal(&entry("user_1", "original text", "sad", 0))
        .unwrap();
    let app = setup_test_app_with_db(db);

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/update-journal/{}", id),
            serde_json::json!({ "text": "new text", "mood": "happy" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_journal() {
    let db = Database::in_memory().unwrap();
    db.ensure_user("user_1").unwrap();
    let id = db
        .insert_journal(&entry("user_1", "to be removed", "sad", 0))
        .unwrap();
    let app = setup_test_app_with_db(db);

    let response = app
        .clone()
        .oneshot(delete(&format!("/api/delete-journal/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["success"], true);

    let response = app
        .oneshot(delete(&format!("/api/delete-journal/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_journals() {
    let db = Database::in_memory().unwrap();
    db.ensure_user("user_1").unwrap();
    for i in 0..5 {
        db.insert_journal(&entry("user_1", &format!("entry {}", i), "happy", i))
            .unwrap();
    }
    let app = setup_test_app_with_db(db);

    let response = app
        .clone()
        .oneshot(get("/api/get-user-journal"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    let journals = json.as_array().unwrap();
    assert_eq!(journals.len(), 5);
    assert_eq!(journals[0]["content"], "entry 0");

    let response = app
        .oneshot(get("/api/get-user-journal?limit=2&offset=1"))
        .await
        .unwrap();
    let json = get_body_json(response).await;
    let journals = json.as_array().unwrap();
    assert_eq!(journals.len(), 2);
    assert_eq!(journals[0]["content"], "entry 1");
}

#[tokio::test]
async fn test_list_journals_by_month() {
    let db = Database::in_memory().unwrap();
    db.ensure_user("user_1").unwrap();
    let march = chrono::TimeZone::with_ymd_and_hms(&Utc, 2024, 3, 15, 12, 0, 0).unwrap();
    let april = chrono::TimeZone::with_ymd_and_hms(&Utc, 2024, 4, 1, 0, 0, 0).unwrap();
    for (text, at) in [("in march", march), ("in april", april)] {
        db.insert_journal(&NewJournal {
            created_at: Some(at),
            ..entry("user_1", text, "happy", 0)
        })
        .unwrap();
    }
    let app = setup_test_app_with_db(db);

    let response = app
        .clone()
        .oneshot(get("/api/get-user-journal?month=2024-03"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    let journals = json.as_array().unwrap();
    assert_eq!(journals.len(), 1);
    assert_eq!(journals[0]["content"], "in march");

    let response = app
        .oneshot(get("/api/get-user-journal?month=2024-13"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ========== Insights ==========

#[tokio::test]
async fn test_insights_empty() {
    let app = setup_test_app();

    let response = app.oneshot(get("/api/journals/insights")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["totalEntries"], 0);
    assert_eq!(json["averageWordsPerEntry"], 0);
    assert_eq!(json["moodDistribution"], serde_json::json!([]));
    assert_eq!(json["wordCountTrend"], serde_json::json!([]));
    assert_eq!(json["weeklyActivity"].as_array().unwrap().len(), 7);
    assert_eq!(json["currentStreak"], 0);
    assert_eq!(json["longestStreak"], 0);
}

#[tokio::test]
async fn test_insights_with_entries() {
    let db = Database::in_memory().unwrap();
    db.ensure_user("user_1").unwrap();
    db.ensure_user("user_2").unwrap();
    db.insert_journal(&entry("user_1", "one two three four", "happy", 0))
        .unwrap();
    db.insert_journal(&entry("user_1", "one two", "happy", 1))
        .unwrap();
    db.insert_journal(&entry("user_1", "one two three four five six", "sad", 2))
        .unwrap();
    // Outside the week window
    db.insert_journal(&entry("user_1", "old", "sad", 20)).unwrap();
    // Another user's entries never leak in
    db.insert_journal(&entry("user_2", "not mine", "angry", 0))
        .unwrap();
    let app = setup_test_app_with_db(db);

    let response = app
        .clone()
        .oneshot(get("/api/journals/insights?range=week"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["totalEntries"], 3);
    assert_eq!(json["averageWordsPerEntry"], 4);
    assert_eq!(json["moodDistribution"][0]["mood"], "happy");
    assert_eq!(json["moodDistribution"][0]["count"], 2);
    assert_eq!(json["moodDistribution"][0]["percentage"], 67);
    assert_eq!(json["moodDistribution"][1]["mood"], "sad");
    assert_eq!(json["currentStreak"], 3);

    let response = app
        .clone()
        .oneshot(get("/api/journals/insights?range=month&mood=Sad"))
        .await
        .unwrap();
    let json = get_body_json(response).await;
    assert_eq!(json["totalEntries"], 2);
    assert_eq!(json["moodDistribution"][0]["percentage"], 100);

    // Unknown ranges fall back to a month
    let response = app
        .oneshot(get("/api/journals/insights?range=decade"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["totalEntries"], 4);
}

#[tokio::test]
async fn test_insights_store_failure_returns_sanitized_500() {
    let db = Database::in_memory().unwrap();
    db.ensure_user("user_1").unwrap();
    db.insert_journal(&entry("user_1", "written before the failure", "happy", 0))
        .unwrap();
    db.conn()
        .unwrap()
        .execute_batch("DROP TABLE journals;")
        .unwrap();
    let app = setup_test_app_with_db(db.clone());

    let response = app.oneshot(get("/api/journals/insights")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = get_body_json(response).await;
    assert_eq!(json, serde_json::json!({ "error": "An internal error occurred" }));
    assert!(json.get("totalEntries").is_none());

    // A failed view is not audited
    let audit = db.list_audit_log(Some("user_1"), 10).unwrap();
    assert!(audit.iter().all(|e| e.entity_type.as_deref() != Some("insights")));
}

// ========== Audit ==========

#[tokio::test]
async fn test_audit_log_lists_caller_entries() {
    let db = Database::in_memory().unwrap();
    db.log_audit("user_2", "view", Some("journal"), Some(1), None)
        .unwrap();
    let app = setup_test_app_with_db(db);

    let response = app
        .clone()
        .oneshot(get("/api/journals/insights"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/api/audit?limit=50")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    let entries = json.as_array().unwrap();
    assert!(!entries.is_empty());
    assert!(entries.iter().all(|e| e["userId"] == "user_1"));
    assert!(entries
        .iter()
        .any(|e| e["entityType"] == "insights" && e["action"] == "view"));
}

// ========== Helpers ==========

#[test]
fn test_parse_allowed_origins() {
    assert_eq!(
        parse_allowed_origins("http://localhost:3000/, https://journai.app ,,"),
        vec!["http://localhost:3000", "https://journai.app"]
    );
    assert!(parse_allowed_origins("").is_empty());
}

#[test]
fn test_core_errors_map_to_status() {
    let err = AppError::from_core(journai_core::Error::Validation("bad".into()));
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);

    let err = AppError::from_core(journai_core::Error::NotFound("gone".into()));
    assert_eq!(err.status(), StatusCode::NOT_FOUND);

    let err = AppError::from_core(journai_core::Error::InvalidData("oops".into()));
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
