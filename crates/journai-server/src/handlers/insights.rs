//! Journal insight handlers

use std::sync::Arc;

use axum::{
    extract::{Query, Request, State},
    Json,
};
use serde::Deserialize;

use crate::{current_user, AppError, AppState};
use journai_core::insights::{InsightResult, InsightsEngine, TimeRange};

/// Query parameters for insights
#[derive(Debug, Deserialize)]
pub struct InsightQuery {
    /// week, month, quarter or year (default month)
    pub range: Option<String>,
    /// Only count entries with this mood
    pub mood: Option<String>,
}

/// GET /api/journals/insights - Mood, length and streak metrics for the caller
///
/// Unknown ranges fall back to a month. Store failures surface as a generic 500.
pub async fn get_journal_insights(
    State(state): State<Arc<AppState>>,
    Query(params): Query<InsightQuery>,
    request: Request,
) -> Result<Json<InsightResult>, AppError> {
    let user = current_user(&request)?;
    let range = TimeRange::parse_or_default(params.range.as_deref());
    let mood = params
        .mood
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty());

    let insights = InsightsEngine::new(&state.db).compute(&user.id, range, mood)?;

    state.db.log_audit(
        &user.id,
        "view",
        Some("insights"),
        None,
        Some(&format!(
            "range={}, mood={}, entries={}",
            range,
            mood.unwrap_or("all"),
            insights.total_entries
        )),
    )?;

    Ok(Json(insights))
}
