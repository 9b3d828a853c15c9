//! Resume file intake: type filtering, size limit and plain-text extraction.
//!
//! Word documents are decoded lossily rather than parsed.

use thiserror::Error;
use tracing::warn;

use crate::errors::AppError;

/// Largest accepted resume file (5 MiB).
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFileKind {
    Pdf,
    Word,
    PlainText,
}

impl ResumeFileKind {
    /// Maps a MIME type (parameters such as `charset` ignored) to a supported kind.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        match essence.to_ascii_lowercase().as_str() {
            "application/pdf" => Some(ResumeFileKind::Pdf),
            "application/msword"
            | "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Some(ResumeFileKind::Word)
            }
            "text/plain" => Some(ResumeFileKind::PlainText),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Invalid file type '{0}'. Only PDF, DOC, DOCX, and TXT files are allowed.")]
    UnsupportedType(String),

    #[error("File is {0} bytes; the limit is {max} bytes", max = MAX_UPLOAD_BYTES)]
    TooLarge(usize),

    #[error("Could not read PDF: {0}")]
    Pdf(String),

    #[error("No text could be extracted from the uploaded file")]
    NoText,
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::UnsupportedType(_) => AppError::UnsupportedMediaType(err.to_string()),
            ExtractError::TooLarge(_) => AppError::PayloadTooLarge(err.to_string()),
            ExtractError::Pdf(_) | ExtractError::NoText => {
                AppError::UnprocessableEntity(err.to_string())
            }
        }
    }
}

/// Checks type and size before any decoding work happens.
pub fn check_upload(mime: &str, size: usize) -> Result<ResumeFileKind, ExtractError> {
    let kind = ResumeFileKind::from_mime(mime)
        .ok_or_else(|| ExtractError::UnsupportedType(mime.to_string()))?;
    if size > MAX_UPLOAD_BYTES {
        return Err(ExtractError::TooLarge(size));
    }
    Ok(kind)
}

/// Extracts plain text from an accepted upload. CPU bound for PDFs; callers on
/// the async runtime should run it via `spawn_blocking`.
pub fn extract_text(kind: ResumeFileKind, bytes: &[u8]) -> Result<String, ExtractError> {
    let text = match kind {
        ResumeFileKind::PlainText => String::from_utf8_lossy(bytes).into_owned(),
        ResumeFileKind::Pdf => {
            pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))?
        }
        ResumeFileKind::Word => {
            warn!("Word upload stored as lossily decoded bytes; text quality may be poor");
            String::from_utf8_lossy(bytes).into_owned()
        }
    };

    if text.trim().is_empty() {
        return Err(ExtractError::NoText);
    }
    Ok(text)
}
