//! Axum route handlers for job and application tracking.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::application::ApplicationRow;
use crate::models::job::JobRow;
use crate::resumes::store::get_owned_resume;
use crate::routes::extract::{ApiJson, ApiQuery};
use crate::routes::UserIdQuery;
use crate::state::AppState;
use crate::tracker::status::ApplicationStatus;
use crate::tracker::store::{
    get_owned_application, get_owned_job, insert_application, insert_job, list_applications,
    list_jobs, update_status, NewApplication, NewJob,
};

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub description: String,
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationRequest {
    pub user_id: Uuid,
    pub job_id: Option<Uuid>,
    pub resume_id: Option<Uuid>,
    pub status: Option<String>,
    pub match_score: Option<i32>,
    pub tailored_resume_content: Option<String>,
    pub cover_letter: Option<String>,
    pub notes: Option<String>,
    pub follow_up_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub status: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateJobRequest>,
) -> Result<Json<JobRow>, AppError> {
    require_field("title", &req.title)?;
    require_field("company", &req.company)?;
    require_field("description", &req.description)?;

    let job = insert_job(
        &state.db,
        NewJob {
            user_id: req.user_id,
            title: req.title.trim(),
            company: req.company.trim(),
            description: &req.description,
            url: req.url.as_deref().map(str::trim).filter(|u| !u.is_empty()),
        },
    )
    .await?;

    Ok(Json(job))
}

/// GET /api/v1/jobs?userId=
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<UserIdQuery>,
) -> Result<Json<Vec<JobRow>>, AppError> {
    Ok(Json(list_jobs(&state.db, params.user_id).await?))
}

/// POST /api/v1/applications
pub async fn handle_create_application(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateApplicationRequest>,
) -> Result<Json<ApplicationRow>, AppError> {
    let status = parse_status(req.status.as_deref())?;
    validate_match_score(req.match_score)?;

    if let Some(job_id) = req.job_id {
        get_owned_job(&state.db, job_id, req.user_id).await?;
    }
    if let Some(resume_id) = req.resume_id {
        get_owned_resume(&state.db, resume_id, req.user_id).await?;
    }

    let application = insert_application(
        &state.db,
        NewApplication {
            user_id: req.user_id,
            job_id: req.job_id,
            resume_id: req.resume_id,
            status,
            match_score: req.match_score,
            tailored_resume_content: req.tailored_resume_content.as_deref(),
            cover_letter: req.cover_letter.as_deref(),
            notes: req.notes.as_deref(),
            follow_up_date: req.follow_up_date,
        },
    )
    .await?;

    info!(
        "Tracked application {} ({}) for user {}",
        application.id, status, req.user_id
    );
    Ok(Json(application))
}

/// GET /api/v1/applications?userId=
pub async fn handle_list_applications(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<UserIdQuery>,
) -> Result<Json<Vec<ApplicationRow>>, AppError> {
    Ok(Json(list_applications(&state.db, params.user_id).await?))
}

/// PATCH /api/v1/applications/:id/status
pub async fn handle_update_status(
    State(state): State<AppState>,
    Path(application_id): Path<Uuid>,
    ApiJson(req): ApiJson<UpdateStatusRequest>,
) -> Result<Json<ApplicationRow>, AppError> {
    if req.status.trim().is_empty() {
        return Err(AppError::Validation("Status is required".to_string()));
    }
    let status = parse_status(Some(&req.status))?;

    get_owned_application(&state.db, application_id, req.user_id).await?;
    let updated = update_status(&state.db, application_id, status).await?;

    info!("Application {application_id} moved to {status}");
    Ok(Json(updated))
}

// ────────────────────────────────────────────────────────────────────────────
// Validation helpers
// ────────────────────────────────────────────────────────────────────────────

fn require_field(name: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{name} is required")));
    }
    Ok(())
}

/// Absent or blank status means a fresh application.
fn parse_status(raw: Option<&str>) -> Result<ApplicationStatus, AppError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => s.parse().map_err(AppError::Validation),
        None => Ok(ApplicationStatus::default()),
    }
}

fn validate_match_score(score: Option<i32>) -> Result<(), AppError> {
    match score {
        Some(s) if !(0..=100).contains(&s) => Err(AppError::Validation(format!(
            "matchScore must be between 0 and 100, got {s}"
        ))),
        _ => Ok(()),
    }
}
