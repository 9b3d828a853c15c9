use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::ensure_owner;
use crate::models::suggestion::SuggestionRow;

/// Kind recorded for suggestions produced by resume upload.
pub const RESUME_IMPROVEMENT: &str = "resume_improvement";

pub async fn insert_suggestion(
    pool: &PgPool,
    user_id: Uuid,
    kind: &str,
    suggestion: &str,
) -> Result<SuggestionRow, sqlx::Error> {
    sqlx::query_as::<_, SuggestionRow>(
        r#"
        INSERT INTO ai_suggestions (user_id, kind, suggestion)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(kind)
    .bind(suggestion)
    .fetch_one(pool)
    .await
}

/// Suggestions the user has not applied yet, newest first.
pub async fn list_open_suggestions(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<SuggestionRow>, sqlx::Error> {
    sqlx::query_as::<_, SuggestionRow>(
        r#"
        SELECT * FROM ai_suggestions
        WHERE user_id = $1 AND applied = false
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Marks a suggestion as applied after checking ownership.
pub async fn mark_applied(
    pool: &PgPool,
    suggestion_id: Uuid,
    user_id: Uuid,
) -> Result<SuggestionRow, AppError> {
    let existing = sqlx::query_as::<_, SuggestionRow>("SELECT * FROM ai_suggestions WHERE id = $1")
        .bind(suggestion_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Suggestion {suggestion_id} not found")))?;

    ensure_owner(existing.user_id, user_id)?;

    let updated = sqlx::query_as::<_, SuggestionRow>(
        "UPDATE ai_suggestions SET applied = true WHERE id = $1 RETURNING *",
    )
    .bind(suggestion_id)
    .fetch_one(pool)
    .await?;

    Ok(updated)
}
