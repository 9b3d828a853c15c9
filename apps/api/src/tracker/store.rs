use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::application::ApplicationRow;
use crate::models::ensure_owner;
use crate::models::job::JobRow;
use crate::tracker::status::ApplicationStatus;

// ────────────────────────────────────────────────────────────────────────────
// Jobs
// ────────────────────────────────────────────────────────────────────────────

pub struct NewJob<'a> {
    pub user_id: Uuid,
    pub title: &'a str,
    pub company: &'a str,
    pub description: &'a str,
    pub url: Option<&'a str>,
}

pub async fn insert_job(pool: &PgPool, job: NewJob<'_>) -> Result<JobRow, sqlx::Error> {
    sqlx::query_as::<_, JobRow>(
        r#"
        INSERT INTO jobs (user_id, title, company, description, url)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(job.user_id)
    .bind(job.title)
    .bind(job.company)
    .bind(job.description)
    .bind(job.url)
    .fetch_one(pool)
    .await
}

pub async fn list_jobs(pool: &PgPool, user_id: Uuid) -> Result<Vec<JobRow>, sqlx::Error> {
    sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE user_id = $1 ORDER BY created_at DESC")
        .bind(user_id)
        .fetch_all(pool)
        .await
}

pub async fn get_owned_job(pool: &PgPool, job_id: Uuid, user_id: Uuid) -> Result<JobRow, AppError> {
    let job = sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
        .bind(job_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

    ensure_owner(job.user_id, user_id)?;
    Ok(job)
}

// ────────────────────────────────────────────────────────────────────────────
// Applications
// ────────────────────────────────────────────────────────────────────────────

pub struct NewApplication<'a> {
    pub user_id: Uuid,
    pub job_id: Option<Uuid>,
    pub resume_id: Option<Uuid>,
    pub status: ApplicationStatus,
    pub match_score: Option<i32>,
    pub tailored_resume_content: Option<&'a str>,
    pub cover_letter: Option<&'a str>,
    pub notes: Option<&'a str>,
    pub follow_up_date: Option<DateTime<Utc>>,
}

pub async fn insert_application(
    pool: &PgPool,
    application: NewApplication<'_>,
) -> Result<ApplicationRow, sqlx::Error> {
    sqlx::query_as::<_, ApplicationRow>(
        r#"
        INSERT INTO applications
            (user_id, job_id, resume_id, status, match_score,
             tailored_resume_content, cover_letter, notes, follow_up_date)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(application.user_id)
    .bind(application.job_id)
    .bind(application.resume_id)
    .bind(application.status.as_str())
    .bind(application.match_score)
    .bind(application.tailored_resume_content)
    .bind(application.cover_letter)
    .bind(application.notes)
    .bind(application.follow_up_date)
    .fetch_one(pool)
    .await
}

/// All applications of a user, most recently applied first.
pub async fn list_applications(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<ApplicationRow>, sqlx::Error> {
    sqlx::query_as::<_, ApplicationRow>(
        "SELECT * FROM applications WHERE user_id = $1 ORDER BY applied_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn get_owned_application(
    pool: &PgPool,
    application_id: Uuid,
    user_id: Uuid,
) -> Result<ApplicationRow, AppError> {
    let application =
        sqlx::query_as::<_, ApplicationRow>("SELECT * FROM applications WHERE id = $1")
            .bind(application_id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Application {application_id} not found"))
            })?;

    ensure_owner(application.user_id, user_id)?;
    Ok(application)
}

pub async fn update_status(
    pool: &PgPool,
    application_id: Uuid,
    status: ApplicationStatus,
) -> Result<ApplicationRow, sqlx::Error> {
    sqlx::query_as::<_, ApplicationRow>(
        r#"
        UPDATE applications SET status = $1, updated_at = now()
        WHERE id = $2
        RETURNING *
        "#,
    )
    .bind(status.as_str())
    .bind(application_id)
    .fetch_one(pool)
    .await
}

/// An assistant result stored onto an application.
pub enum AssistantOutput<'a> {
    MatchScore(u8),
    TailoredResume(&'a str),
    CoverLetter(&'a str),
}

/// Fails with `NotFound` when the application disappeared after its ownership check.
pub async fn record_output(
    pool: &PgPool,
    application_id: Uuid,
    output: AssistantOutput<'_>,
) -> Result<(), AppError> {
    let query = match output {
        AssistantOutput::MatchScore(score) => sqlx::query(
            "UPDATE applications SET match_score = $1, updated_at = now() WHERE id = $2",
        )
        .bind(i32::from(score)),
        AssistantOutput::TailoredResume(content) => sqlx::query(
            "UPDATE applications SET tailored_resume_content = $1, updated_at = now() WHERE id = $2",
        )
        .bind(content),
        AssistantOutput::CoverLetter(letter) => sqlx::query(
            "UPDATE applications SET cover_letter = $1, updated_at = now() WHERE id = $2",
        )
        .bind(letter),
    };

    let result = query.bind(application_id).execute(pool).await?;
    ensure_updated(result.rows_affected(), application_id)
}

fn ensure_updated(rows_affected: u64, application_id: Uuid) -> Result<(), AppError> {
    if rows_affected == 0 {
        return Err(AppError::NotFound(format!(
            "Application {application_id} not found"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_for_vanished_application_is_not_found() {
        let id = Uuid::new_v4();
        assert!(matches!(
            ensure_updated(0, id),
            Err(AppError::NotFound(ref m)) if m.contains(&id.to_string())
        ));
        assert!(ensure_updated(1, id).is_ok());
    }
}
