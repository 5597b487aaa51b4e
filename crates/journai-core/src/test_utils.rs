//! Test utilities for journai-core
//!
//! Provides a mock Gemini server for development and integration tests.

use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use tokio::sync::oneshot;

/// Mock Gemini server for testing and development
pub struct MockGeminiServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockGeminiServer {
    /// Start the mock server on an available port
    pub async fn start() -> Self {
        Self::start_with(false).await
    }

    /// Start a mock server that answers every request with a 500
    pub async fn start_failing() -> Self {
        Self::start_with(true).await
    }

    async fn start_with(failing: bool) -> Self {
        let app = Router::new()
            .route(
                "/v1beta/models/:model",
                get(handle_model).post(handle_generate),
            )
            .with_state(failing);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .unwrap();
        });

        Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Get the base URL for this mock server
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stop the mock server
    pub fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockGeminiServer {
    fn drop(&mut self) {
        self.stop();
    }
}

fn server_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": { "code": 500, "message": "mock failure" } })),
    )
        .into_response()
}

/// Model metadata endpoint (health check)
async fn handle_model(State(failing): State<bool>, Path(model): Path<String>) -> Response {
    if failing {
        return server_error();
    }
    Json(json!({ "name": format!("models/{}", model) })).into_response()
}

#[derive(Debug, Deserialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: String,
}

/// `generateContent` endpoint
async fn handle_generate(
    State(failing): State<bool>,
    Path(model): Path<String>,
    Json(request): Json<GenerateRequest>,
) -> Response {
    if failing {
        return server_error();
    }
    if !model.ends_with(":generateContent") {
        return StatusCode::NOT_FOUND.into_response();
    }

    let prompt: String = request
        .contents
        .iter()
        .flat_map(|c| c.parts.iter().map(|p| p.text.as_str()))
        .collect();

    let answer = json!({
        "mood": mock_mood(&prompt),
        "summary": "The writer reflects on how their day went.",
        "reason": "Based on the words used in the entry.",
    });

    // Real responses usually arrive wrapped in a markdown fence
    let text = format!("```json\n{}\n```", answer);

    Json(json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    }))
    .into_response()
}

fn mock_mood(prompt: &str) -> &'static str {
    let lower = prompt.to_lowercase();
    if lower.contains("celebrated") || lower.contains("wonderful") {
        "happy"
    } else if lower.contains("exhausted") {
        "tired"
    } else if lower.contains("deadline") {
        "Anxious about work"
    } else {
        "neutral"
    }
}
