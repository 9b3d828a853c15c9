use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub job_id: Option<Uuid>,
    pub resume_id: Option<Uuid>,
    /// applied | interview | rejected | offer
    pub status: String,
    /// ATS match percentage, 0 – 100
    pub match_score: Option<i32>,
    pub tailored_resume_content: Option<String>,
    pub cover_letter: Option<String>,
    pub notes: Option<String>,
    pub applied_at: DateTime<Utc>,
    pub follow_up_date: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}
