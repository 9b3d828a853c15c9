use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Extracted plain text; this is what the assistant workflows read.
    pub original_content: String,
    pub file_name: Option<String>,
    /// Industry the resume targets (Technology, Healthcare, ...).
    pub field: Option<String>,
    pub created_at: DateTime<Utc>,
}
