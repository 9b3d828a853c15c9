use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::suggestion::SuggestionRow;
use crate::routes::extract::{ApiJson, ApiQuery};
use crate::routes::UserIdQuery;
use crate::state::AppState;
use crate::suggestions::store::{list_open_suggestions, mark_applied};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplySuggestionRequest {
    pub user_id: Uuid,
}

/// GET /api/v1/suggestions?userId=
pub async fn handle_list_suggestions(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<UserIdQuery>,
) -> Result<Json<Vec<SuggestionRow>>, AppError> {
    Ok(Json(list_open_suggestions(&state.db, params.user_id).await?))
}

/// POST /api/v1/suggestions/:id/apply
pub async fn handle_apply_suggestion(
    State(state): State<AppState>,
    Path(suggestion_id): Path<Uuid>,
    ApiJson(req): ApiJson<ApplySuggestionRequest>,
) -> Result<Json<SuggestionRow>, AppError> {
    Ok(Json(mark_applied(&state.db, suggestion_id, req.user_id).await?))
}
