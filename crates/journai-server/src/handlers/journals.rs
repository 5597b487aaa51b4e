//! Journal handlers: analysis, save, list, view, update and delete

use std::sync::Arc;

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{current_user, read_json, AppError, AppState, SuccessResponse};
use journai_core::ai::MoodAnalysis;
use journai_core::db::DEFAULT_JOURNAL_LIMIT;
use journai_core::journal::validate_analysis_text;
use journai_core::models::{JournalUpdate, JournalView, Mood, NewJournal};

/// Request body for mood analysis
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// Request body for saving a journal entry
#[derive(Debug, Deserialize)]
pub struct SaveJournalRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// Response for a saved journal entry
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveJournalResponse {
    pub id: i64,
    pub title: String,
    pub mood: Mood,
    pub created_at: DateTime<Utc>,
}

/// Query parameters for listing journals
#[derive(Debug, Deserialize)]
pub struct JournalListQuery {
    /// Calendar month, `YYYY-MM`
    pub month: Option<String>,
    #[serde(default = "default_journal_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_journal_limit() -> i64 {
    DEFAULT_JOURNAL_LIMIT
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Validate a save/update body into (text, mood, summary, reason)
fn require_entry_fields(
    text: Option<String>,
    mood: Option<String>,
    summary: Option<String>,
    reason: Option<String>,
) -> Result<(String, String, String, String), AppError> {
    let text =
        non_empty(text).ok_or_else(|| AppError::bad_request("Please provide valid journal text"))?;

    match (non_empty(mood), non_empty(summary), non_empty(reason)) {
        (Some(mood), Some(summary), Some(reason)) => Ok((text, mood, summary, reason)),
        _ => Err(AppError::bad_request("Missing required analysis fields")),
    }
}

/// POST /api/analyze-journal - Classify the mood of journal text
///
/// Rate limited per user. A failing analyzer yields the neutral fallback
/// rather than an error.
pub async fn analyze_journal(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Response, AppError> {
    let user = current_user(&request)?;

    if let Err(retry_after) = state.analysis_limiter.check(&user.id) {
        warn!(user = %user.id, "Analysis rate limit exceeded");
        let mut response = AppError::too_many_requests(
            "Too many analysis requests, please try again later",
        )
        .into_response();
        if let Ok(value) = HeaderValue::from_str(&retry_after.as_secs().max(1).to_string()) {
            response.headers_mut().insert(header::RETRY_AFTER, value);
        }
        return Ok(response);
    }

    let req: AnalyzeRequest = read_json(request).await?;
    let text = req.text.unwrap_or_default();
    let text = validate_analysis_text(&text).map_err(AppError::from_core)?;

    let Some(ai) = state.ai.as_ref() else {
        return Err(AppError::service_unavailable(
            "AI analysis service is currently unavailable",
        ));
    };

    info!(user = %user.id, text_length = text.len(), "Journal analysis request received");
    let analysis: MoodAnalysis = ai.analyze_or_fallback(text).await;

    state.db.log_audit(
        &user.id,
        "analyze",
        Some("journal"),
        None,
        Some(&format!("chars={}, mood={}", text.chars().count(), analysis.mood)),
    )?;

    Ok(Json(analysis).into_response())
}

/// POST /api/save-journal - Save a journal entry with its analysis
pub async fn save_journal(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<SaveJournalResponse>, AppError> {
    let user = current_user(&request)?;
    let req: SaveJournalRequest = read_json(request).await?;
    let (text, mood, summary, reason) =
        require_entry_fields(req.text, req.mood, req.summary, req.reason)?;

    state.db.ensure_user(&user.id)?;
    let id = state.db.insert_journal(&NewJournal {
        user_id: user.id.clone(),
        text,
        mood,
        summary,
        reason,
        title: req.title,
        created_at: None,
    })?;

    let journal = state
        .db
        .get_journal(id, &user.id)?
        .ok_or_else(|| AppError::internal("Journal not found after creation"))?;

    state.db.log_audit(
        &user.id,
        "create",
        Some("journal"),
        Some(id),
        Some(&format!(
            "mood={}, words={}",
            journal.mood, journal.word_count
        )),
    )?;

    Ok(Json(SaveJournalResponse {
        id: journal.id,
        title: journal.title,
        mood: journal.mood,
        created_at: journal.created_at,
    }))
}

/// GET /api/get-user-journal - List the caller's journals, newest first
pub async fn list_user_journals(
    State(state): State<Arc<AppState>>,
    Query(params): Query<JournalListQuery>,
    request: Request,
) -> Result<Json<Vec<JournalView>>, AppError> {
    let user = current_user(&request)?;
    let month = params.month.as_deref().map(str::trim).filter(|m| !m.is_empty());

    let journals = state
        .db
        .list_user_journals(&user.id, month, params.limit, params.offset)
        .map_err(AppError::from_core)?;

    state.db.log_audit(
        &user.id,
        "list",
        Some("journal"),
        None,
        Some(&format!(
            "month={}, limit={}, offset={}, count={}",
            month.unwrap_or("all"),
            params.limit,
            params.offset,
            journals.len()
        )),
    )?;

    Ok(Json(journals))
}

/// GET /api/journal/:id - Get one of the caller's journals
pub async fn get_journal(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    request: Request,
) -> Result<Json<JournalView>, AppError> {
    let user = current_user(&request)?;

    let journal = state
        .db
        .get_journal(id, &user.id)?
        .ok_or_else(|| AppError::not_found("Journal not found"))?;

    state
        .db
        .log_audit(&user.id, "view", Some("journal"), Some(id), None)?;

    Ok(Json(journal))
}

/// PUT /api/update-journal/:id - Replace a journal's text and analysis
pub async fn update_journal(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    request: Request,
) -> Result<Json<JournalView>, AppError> {
    let user = current_user(&request)?;
    let req: SaveJournalRequest = read_json(request).await?;
    let (text, mood, summary, reason) =
        require_entry_fields(req.text, req.mood, req.summary, req.reason)?;

    let journal = state
        .db
        .update_journal(
            id,
            &user.id,
            &JournalUpdate {
                text,
                mood,
                summary,
                reason,
            },
        )?
        .ok_or_else(|| AppError::not_found("Journal not found"))?;

    state.db.log_audit(
        &user.id,
        "update",
        Some("journal"),
        Some(id),
        Some(&format!("mood={}, words={}", journal.mood, journal.word_count)),
    )?;

    Ok(Json(journal))
}

/// DELETE /api/delete-journal/:id - Delete one of the caller's journals
pub async fn delete_journal(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    request: Request,
) -> Result<Json<SuccessResponse>, AppError> {
    let user = current_user(&request)?;

    if !state.db.delete_journal(id, &user.id)? {
        return Err(AppError::not_found("Journal not found"));
    }

    state
        .db
        .log_audit(&user.id, "delete", Some("journal"), Some(id), None)?;

    Ok(Json(SuccessResponse { success: true }))
}
