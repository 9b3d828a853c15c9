//! Axum route handlers for the Resume API.

use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::assistant::orchestrator::DEFAULT_FIELD;
use crate::errors::AppError;
use crate::models::resume::ResumeRow;
use crate::resumes::extract::{check_upload, extract_text};
use crate::resumes::store::{get_owned_resume, insert_resume, list_resumes, NewResume};
use crate::routes::extract::ApiQuery;
use crate::routes::UserIdQuery;
use crate::state::AppState;
use crate::suggestions::store::{insert_suggestion, RESUME_IMPROVEMENT};

struct UploadedFile {
    file_name: Option<String>,
    content_type: String,
    bytes: Bytes,
}

/// Everything the upload form can carry, before validation.
#[derive(Default)]
struct UploadForm {
    user_id: Option<String>,
    content: Option<String>,
    field: Option<String>,
    file: Option<UploadedFile>,
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(err.body_text())
        } else {
            AppError::Validation(format!("Invalid multipart body: {}", err.body_text()))
        }
    }
}

/// POST /api/v1/resumes
///
/// Multipart form: `userId`, and either a `resume` file or a `content` text field,
/// plus an optional `field`. Suggestions are generated after the resume is stored;
/// their failure never fails the upload.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeRow>, AppError> {
    let mut form = UploadForm::default();

    while let Some(part) = multipart.next_field().await? {
        let name = part.name().unwrap_or_default().to_string();
        match name.as_str() {
            "userId" => form.user_id = Some(part.text().await?),
            "content" => form.content = Some(part.text().await?),
            "field" => form.field = Some(part.text().await?),
            "resume" => {
                let file_name = part.file_name().map(str::to_string);
                let content_type = part
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = part.bytes().await?;
                form.file = Some(UploadedFile {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            _ => {}
        }
    }

    let user_id = parse_user_id(form.user_id.as_deref())?;
    let field = form
        .field
        .as_deref()
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .unwrap_or(DEFAULT_FIELD)
        .to_string();

    let (text, file_name) = match form.file {
        Some(file) => {
            let kind = check_upload(&file.content_type, file.bytes.len())?;
            let bytes = file.bytes;
            let text = tokio::task::spawn_blocking(move || extract_text(kind, &bytes))
                .await
                .map_err(|e| {
                    AppError::UnprocessableEntity(format!("Resume text extraction aborted: {e}"))
                })??;
            (text, file.file_name)
        }
        None => match form.content {
            Some(content) if !content.trim().is_empty() => (content, None),
            _ => {
                return Err(AppError::Validation(
                    "Resume file or content is required".to_string(),
                ))
            }
        },
    };

    let resume = insert_resume(
        &state.db,
        NewResume {
            user_id,
            original_content: &text,
            file_name: file_name.as_deref(),
            field: &field,
        },
    )
    .await?;
    info!("Stored resume {} for user {}", resume.id, user_id);

    let suggestions = state
        .assistant
        .generate_suggestions(&text, Some(&field))
        .await;
    let stored = store_suggestions(&state.db, user_id, resume.id, &suggestions).await;
    info!("Stored {stored}/{} suggestions for resume {}", suggestions.len(), resume.id);

    Ok(Json(resume))
}

/// Best-effort: a failed insert is logged and skipped. Returns how many were stored.
async fn store_suggestions(
    db: &PgPool,
    user_id: Uuid,
    resume_id: Uuid,
    suggestions: &[String],
) -> usize {
    let mut stored = 0usize;
    for suggestion in suggestions {
        match insert_suggestion(db, user_id, RESUME_IMPROVEMENT, suggestion).await {
            Ok(_) => stored += 1,
            Err(e) => warn!("Could not store suggestion for resume {resume_id}: {e}"),
        }
    }
    stored
}

/// GET /api/v1/resumes?userId=
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<UserIdQuery>,
) -> Result<Json<Vec<ResumeRow>>, AppError> {
    Ok(Json(list_resumes(&state.db, params.user_id).await?))
}

/// GET /api/v1/resumes/:id?userId=
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
    ApiQuery(params): ApiQuery<UserIdQuery>,
) -> Result<Json<ResumeRow>, AppError> {
    Ok(Json(
        get_owned_resume(&state.db, resume_id, params.user_id).await?,
    ))
}

fn parse_user_id(raw: Option<&str>) -> Result<Uuid, AppError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation("userId is required".to_string()))?;
    Uuid::parse_str(raw).map_err(|_| AppError::Validation(format!("userId '{raw}' is not a UUID")))
}
