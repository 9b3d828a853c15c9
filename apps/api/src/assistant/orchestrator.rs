//! Workflow orchestrator: the four assistant operations.
//!
//! Each call runs Validating → Prompting → Completing → Parsing → Done.
//! A failed precondition ends the call before the provider is contacted.
//! Calls share nothing but the injected completion service.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::assistant::parsers::{
    parse_cover_letter, parse_match_analysis, parse_suggestions, parse_tailored_resume,
    MatchAnalysis,
};
use crate::assistant::prompts::{
    build_cover_letter_prompt, build_match_analysis_prompt, build_suggestions_prompt,
    build_tailor_prompt,
};
use crate::assistant::tone::ToneSetting;
use crate::llm_client::{CompletionService, ResponseFormat};

/// Industry used when the caller does not name one.
pub const DEFAULT_FIELD: &str = "General";

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("completion failed: {0}")]
    CompletionFailed(String),

    #[error("could not interpret completion: {0}")]
    ParseFailed(String),
}

/// Inputs for cover-letter generation.
#[derive(Debug, Clone, Default)]
pub struct CoverLetterInput<'a> {
    pub resume_text: &'a str,
    pub job_text: &'a str,
    pub company_name: &'a str,
    /// Raw tone from the client; unknown or missing values mean professional.
    pub tone: Option<&'a str>,
    pub hiring_manager: Option<&'a str>,
}

/// Composes prompt builders, the completion service and result parsers.
/// Cheap to clone; constructed once in `main` and shared through `AppState`.
#[derive(Clone)]
pub struct Orchestrator {
    completion: Arc<dyn CompletionService>,
    max_input_chars: usize,
}

impl Orchestrator {
    pub fn new(completion: Arc<dyn CompletionService>, max_input_chars: usize) -> Self {
        Self {
            completion,
            max_input_chars,
        }
    }

    /// Scores a resume against a job description. Provider and parse failures propagate.
    pub async fn analyze_match(
        &self,
        resume_text: &str,
        job_text: &str,
    ) -> Result<MatchAnalysis, WorkflowError> {
        self.require_text("resume text", resume_text)?;
        self.require_text("job description", job_text)?;

        let prompt = build_match_analysis_prompt(resume_text, job_text);
        let content = self.complete(&prompt, ResponseFormat::Json).await?;

        let analysis = parse_match_analysis(content.as_deref())
            .map_err(|e| WorkflowError::ParseFailed(e.to_string()))?;

        info!(
            "Match analysis complete: score={}, missing={}, strong={}",
            analysis.match_score,
            analysis.missing_keywords.len(),
            analysis.strong_matches.len()
        );
        Ok(analysis)
    }

    /// Rewrites a resume for a job. Never returns empty text for a non-empty resume.
    pub async fn tailor_resume(
        &self,
        resume_text: &str,
        job_text: &str,
        field: Option<&str>,
    ) -> Result<String, WorkflowError> {
        self.require_text("resume text", resume_text)?;
        self.require_text("job description", job_text)?;
        let field = field_or_default(field);

        let prompt = build_tailor_prompt(resume_text, job_text, field);
        let content = self.complete(&prompt, ResponseFormat::Text).await?;

        if content.as_deref().map_or(true, |c| c.trim().is_empty()) {
            warn!("Tailoring returned no content; falling back to the original resume");
        }
        Ok(parse_tailored_resume(content, resume_text))
    }

    pub async fn generate_cover_letter(
        &self,
        input: CoverLetterInput<'_>,
    ) -> Result<String, WorkflowError> {
        self.require_text("resume text", input.resume_text)?;
        self.require_text("job description", input.job_text)?;
        require_present("company name", input.company_name)?;
        let tone = ToneSetting::from_input(input.tone);

        let prompt = build_cover_letter_prompt(
            input.resume_text,
            input.job_text,
            input.company_name.trim(),
            tone,
            input.hiring_manager,
        );
        let content = self.complete(&prompt, ResponseFormat::Text).await?;

        debug!(
            "Cover letter generated for {} ({})",
            input.company_name.trim(),
            tone.as_str()
        );
        Ok(parse_cover_letter(content))
    }

    /// Best-effort improvement suggestions. Never fails: any problem is logged
    /// and yields an empty list so the calling flow can continue.
    pub async fn generate_suggestions(&self, resume_text: &str, field: Option<&str>) -> Vec<String> {
        if let Err(e) = self.require_text("resume text", resume_text) {
            warn!("Skipping suggestion generation: {e}");
            return Vec::new();
        }
        let field = field_or_default(field);

        let prompt = build_suggestions_prompt(resume_text, field);
        let content = match self.complete(&prompt, ResponseFormat::Json).await {
            Ok(content) => content,
            Err(e) => {
                warn!("Suggestion generation failed: {e}");
                return Vec::new();
            }
        };

        match parse_suggestions(content.as_deref()) {
            Ok(suggestions) => {
                debug!("Generated {} suggestions", suggestions.len());
                suggestions
            }
            Err(e) => {
                warn!("Suggestion output could not be parsed: {e}");
                Vec::new()
            }
        }
    }

    async fn complete(
        &self,
        prompt: &str,
        format: ResponseFormat,
    ) -> Result<Option<String>, WorkflowError> {
        self.completion
            .complete(prompt, format)
            .await
            .map_err(|e| WorkflowError::CompletionFailed(e.to_string()))
    }

    fn require_text(&self, name: &str, value: &str) -> Result<(), WorkflowError> {
        require_present(name, value)?;
        let chars = value.chars().count();
        if chars > self.max_input_chars {
            return Err(WorkflowError::InvalidInput(format!(
                "{name} is too long ({chars} characters, limit {})",
                self.max_input_chars
            )));
        }
        Ok(())
    }
}

fn require_present(name: &str, value: &str) -> Result<(), WorkflowError> {
    if value.trim().is_empty() {
        return Err(WorkflowError::InvalidInput(format!("{name} is required")));
    }
    Ok(())
}

fn field_or_default(field: Option<&str>) -> &str {
    field
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .unwrap_or(DEFAULT_FIELD)
}
