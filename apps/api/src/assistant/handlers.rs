//! Axum route handlers for the assistant endpoints.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::assistant::orchestrator::CoverLetterInput;
use crate::assistant::parsers::MatchAnalysis;
use crate::errors::AppError;
use crate::resumes::store::get_owned_resume;
use crate::routes::extract::ApiJson;
use crate::state::AppState;
use crate::tracker::store::{get_owned_application, record_output, AssistantOutput};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Where the resume comes from: inline text, or a stored resume owned by `userId`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSource {
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub resume_id: Option<Uuid>,
    #[serde(default)]
    pub resume_text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeMatchRequest {
    #[serde(flatten)]
    pub resume: ResumeSource,
    #[serde(default, alias = "jobDescription")]
    pub job_text: String,
    #[serde(default)]
    pub application_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailorResumeRequest {
    #[serde(flatten)]
    pub resume: ResumeSource,
    #[serde(default, alias = "jobDescription")]
    pub job_text: String,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub application_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TailorResumeResponse {
    pub tailored_content: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterRequest {
    #[serde(flatten)]
    pub resume: ResumeSource,
    #[serde(default, alias = "jobDescription")]
    pub job_text: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub hiring_manager: Option<String>,
    #[serde(default)]
    pub application_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterResponse {
    pub cover_letter: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSuggestionsRequest {
    #[serde(flatten)]
    pub resume: ResumeSource,
    #[serde(default)]
    pub field: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}

/// Resume text ready for a workflow, plus the field it was stored under.
struct ResolvedResume {
    text: String,
    stored_field: Option<String>,
}

impl ResumeSource {
    /// Inline text wins over a reference. Blank inline text with no reference is
    /// passed through so the workflow reports it as invalid input.
    async fn resolve(self, db: &PgPool) -> Result<ResolvedResume, AppError> {
        let inline = self.resume_text.filter(|t| !t.trim().is_empty() || self.resume_id.is_none());
        if let Some(text) = inline {
            return Ok(ResolvedResume {
                text,
                stored_field: None,
            });
        }

        let resume_id = self
            .resume_id
            .ok_or_else(|| AppError::Validation("resumeText or resumeId is required".to_string()))?;
        let user_id = require_user_id(self.user_id, "resumeId")?;
        let resume = get_owned_resume(db, resume_id, user_id).await?;

        Ok(ResolvedResume {
            text: resume.original_content,
            stored_field: resume.field,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze-match
pub async fn handle_analyze_match(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<AnalyzeMatchRequest>,
) -> Result<Json<MatchAnalysis>, AppError> {
    let target = owned_application(&state.db, req.application_id, req.resume.user_id).await?;
    let resume = req.resume.resolve(&state.db).await?;

    let analysis = state
        .assistant
        .analyze_match(&resume.text, &req.job_text)
        .await?;

    if let Some(application_id) = target {
        record_output(
            &state.db,
            application_id,
            AssistantOutput::MatchScore(analysis.match_score),
        )
        .await?;
    }
    Ok(Json(analysis))
}

/// POST /api/v1/tailor-resume
pub async fn handle_tailor_resume(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<TailorResumeRequest>,
) -> Result<Json<TailorResumeResponse>, AppError> {
    let target = owned_application(&state.db, req.application_id, req.resume.user_id).await?;
    let resume = req.resume.resolve(&state.db).await?;
    let field = non_blank(req.field.as_deref()).or(resume.stored_field.as_deref());

    let tailored_content = state
        .assistant
        .tailor_resume(&resume.text, &req.job_text, field)
        .await?;

    if let Some(application_id) = target {
        record_output(
            &state.db,
            application_id,
            AssistantOutput::TailoredResume(&tailored_content),
        )
        .await?;
    }
    Ok(Json(TailorResumeResponse { tailored_content }))
}

/// POST /api/v1/generate-cover-letter
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CoverLetterRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    let target = owned_application(&state.db, req.application_id, req.resume.user_id).await?;
    let resume = req.resume.resolve(&state.db).await?;

    let cover_letter = state
        .assistant
        .generate_cover_letter(CoverLetterInput {
            resume_text: &resume.text,
            job_text: &req.job_text,
            company_name: &req.company_name,
            tone: req.tone.as_deref(),
            hiring_manager: req.hiring_manager.as_deref(),
        })
        .await?;

    if let Some(application_id) = target {
        record_output(
            &state.db,
            application_id,
            AssistantOutput::CoverLetter(&cover_letter),
        )
        .await?;
    }
    Ok(Json(CoverLetterResponse { cover_letter }))
}

/// POST /api/v1/suggestions/generate
///
/// Provider trouble yields an empty list, never an error.
pub async fn handle_generate_suggestions(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<GenerateSuggestionsRequest>,
) -> Result<Json<SuggestionsResponse>, AppError> {
    let resume = req.resume.resolve(&state.db).await?;
    let field = non_blank(req.field.as_deref()).or(resume.stored_field.as_deref());

    let suggestions = state
        .assistant
        .generate_suggestions(&resume.text, field)
        .await;
    Ok(Json(SuggestionsResponse { suggestions }))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// Checks the target application before any completion is requested.
async fn owned_application(
    db: &PgPool,
    application_id: Option<Uuid>,
    user_id: Option<Uuid>,
) -> Result<Option<Uuid>, AppError> {
    let Some(application_id) = application_id else {
        return Ok(None);
    };
    let user_id = require_user_id(user_id, "applicationId")?;
    get_owned_application(db, application_id, user_id).await?;
    Ok(Some(application_id))
}

fn require_user_id(user_id: Option<Uuid>, needed_by: &str) -> Result<Uuid, AppError> {
    user_id.ok_or_else(|| AppError::Validation(format!("userId is required with {needed_by}")))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
