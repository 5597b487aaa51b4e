//! Authentication and user handlers

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    Json,
};
use serde::Serialize;

use crate::{current_user, AppError, AppState, AuthMethod};
use journai_core::models::UserSummary;

/// Response for the /api/me endpoint
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    /// The authenticated user's identifier
    pub user: String,
    /// How the user was authenticated
    pub auth_method: AuthMethod,
}

/// GET /api/me - Get the currently authenticated user
pub async fn get_me(request: Request) -> Result<Json<MeResponse>, AppError> {
    let user = current_user(&request)?;

    Ok(Json(MeResponse {
        user: user.id,
        auth_method: user.method,
    }))
}

/// GET /api/user-journals - The caller's profile and journal ids
///
/// Provisions the user record on first access.
pub async fn get_user_journals(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<UserSummary>, AppError> {
    let user = current_user(&request)?;

    state.db.ensure_user(&user.id)?;
    let summary = state
        .db
        .get_user_summary(&user.id)?
        .ok_or_else(|| AppError::internal("User not found after provisioning"))?;

    state.db.log_audit(
        &user.id,
        "view",
        Some("user"),
        None,
        Some(&format!("journals={}", summary.journal_ids.len())),
    )?;

    Ok(Json(summary))
}
