use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRow {
    pub id: Uuid,
    pub user_id: Uuid,
    /// e.g. `resume_improvement`
    #[serde(rename = "type")]
    pub kind: String,
    pub suggestion: String,
    pub applied: bool,
    pub created_at: DateTime<Utc>,
}
