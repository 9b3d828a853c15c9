use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::ensure_owner;
use crate::models::resume::ResumeRow;

pub struct NewResume<'a> {
    pub user_id: Uuid,
    pub original_content: &'a str,
    pub file_name: Option<&'a str>,
    pub field: &'a str,
}

pub async fn insert_resume(pool: &PgPool, resume: NewResume<'_>) -> Result<ResumeRow, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>(
        r#"
        INSERT INTO resumes (user_id, original_content, file_name, field)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(resume.user_id)
    .bind(resume.original_content)
    .bind(resume.file_name)
    .bind(resume.field)
    .fetch_one(pool)
    .await
}

/// All resumes of a user, newest first.
pub async fn list_resumes(pool: &PgPool, user_id: Uuid) -> Result<Vec<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>(
        "SELECT * FROM resumes WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Loads a resume and checks it belongs to `user_id`.
pub async fn get_owned_resume(
    pool: &PgPool,
    resume_id: Uuid,
    user_id: Uuid,
) -> Result<ResumeRow, AppError> {
    let resume = sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1")
        .bind(resume_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;

    ensure_owner(resume.user_id, user_id)?;
    Ok(resume)
}
