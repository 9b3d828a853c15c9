// Prompt templates and builders for the assistant workflows.
// Builders are pure: same inputs, same text. Resume and job text are embedded
// verbatim, never truncated or escaped.

use crate::assistant::tone::ToneSetting;
use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, TRUTHFULNESS_INSTRUCTION};

/// Greeting used when no hiring manager is named.
pub const DEFAULT_GREETING: &str = "Dear Hiring Manager,";

/// Match analysis template. Placeholders: {resume_text}, {job_text}, {json_only}
pub const MATCH_ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the compatibility between this resume and job description for ATS (Applicant Tracking System) scoring.

Resume:
{resume_text}

Job Description:
{job_text}

Return a JSON object with exactly these four fields and nothing else:
1. matchScore: an integer from 0 to 100 indicating how well the resume matches the job
2. missingKeywords: array of important keywords/skills from the job description that are missing from the resume
3. strongMatches: array of keywords/skills that match well between the resume and the job
4. suggestions: array of specific, actionable suggestions to improve the match

Example shape:
{"matchScore": 72, "missingKeywords": ["Kubernetes"], "strongMatches": ["Python"], "suggestions": ["Quantify the impact of your backend work"]}

{json_only}"#;

/// Tailoring template. Placeholders: {field}, {resume_text}, {job_text}, {truthfulness}
pub const TAILOR_PROMPT_TEMPLATE: &str = r#"You are an expert resume coach specializing in {field}. Tailor this resume to match the job description while maintaining authenticity and professional formatting.

Original Resume:
{resume_text}

Job Description:
{job_text}

Instructions:
1. Optimize keywords to match the job description
2. Emphasize relevant experience and skills
3. Align job descriptions with the target role without changing actual titles, employers or dates
4. Surface skills named in the job description only where the original resume already demonstrates them
5. Maintain the original structure and formatting
6. Do NOT fabricate experience, projects or qualifications
7. Focus on {field}-specific terminology and requirements

{truthfulness}

Return the tailored resume content maintaining professional formatting."#;

/// Cover-letter template.
/// Placeholders: {resume_text}, {job_text}, {company_name}, {tone_instruction}, {greeting}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Write a compelling cover letter based on this resume and job description.

Resume:
{resume_text}

Job Description:
{job_text}

Company: {company_name}
Tone: {tone_instruction}

Instructions:
1. Start with "{greeting}"
2. Create 3-4 paragraphs that highlight relevant experience
3. Show enthusiasm for the specific role and company
4. Include specific examples from the resume that match job requirements
5. End with a professional closing
6. Keep it concise (under 400 words)
7. Make it ATS-friendly with relevant keywords
8. Avoid generic phrases and make it specific to this job

Return only the cover letter content."#;

/// Suggestions template. Placeholders: {field}, {resume_text}, {json_only}
pub const SUGGESTIONS_PROMPT_TEMPLATE: &str = r#"Analyze this {field} resume and provide 3-5 specific, actionable improvement suggestions.

Resume:
{resume_text}

Return the suggestions as a JSON array of strings under the key "suggestions", for example:
{"suggestions": ["Add metrics to your most recent role"]}

Focus on:
1. Missing skills relevant to {field}
2. Ways to quantify achievements better
3. Keyword optimization for ATS
4. Structure and formatting improvements
5. Industry-specific recommendations

{json_only}"#;

pub fn build_match_analysis_prompt(resume_text: &str, job_text: &str) -> String {
    fill(
        MATCH_ANALYSIS_PROMPT_TEMPLATE,
        &[
            ("resume_text", resume_text),
            ("job_text", job_text),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    )
}

pub fn build_tailor_prompt(resume_text: &str, job_text: &str, field: &str) -> String {
    fill(
        TAILOR_PROMPT_TEMPLATE,
        &[
            ("field", field),
            ("resume_text", resume_text),
            ("job_text", job_text),
            ("truthfulness", TRUTHFULNESS_INSTRUCTION),
        ],
    )
}

pub fn build_cover_letter_prompt(
    resume_text: &str,
    job_text: &str,
    company_name: &str,
    tone: ToneSetting,
    hiring_manager: Option<&str>,
) -> String {
    let greeting = greeting_line(hiring_manager);
    fill(
        COVER_LETTER_PROMPT_TEMPLATE,
        &[
            ("resume_text", resume_text),
            ("job_text", job_text),
            ("company_name", company_name),
            ("tone_instruction", tone.instruction()),
            ("greeting", &greeting),
        ],
    )
}

pub fn build_suggestions_prompt(resume_text: &str, field: &str) -> String {
    fill(
        SUGGESTIONS_PROMPT_TEMPLATE,
        &[
            ("field", field),
            ("resume_text", resume_text),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    )
}

/// `Dear {name},` for a named, non-blank hiring manager, otherwise the default greeting.
pub fn greeting_line(hiring_manager: Option<&str>) -> String {
    match hiring_manager.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => format!("Dear {name},"),
        None => DEFAULT_GREETING.to_string(),
    }
}

/// Single-pass placeholder substitution. Substituted values are never rescanned,
/// so user text containing `{job_text}` or JSON braces is embedded as-is.
fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let extra: usize = vars.iter().map(|(_, value)| value.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let hit = vars
            .iter()
            .find(|(key, _)| tail.starts_with(key) && tail[key.len()..].starts_with('}'));
        match hit {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}
