// Shared prompt fragments.
// Each workflow that needs completions defines its own templates alongside it;
// this file only holds cross-cutting instructions.

/// Appended to every prompt that runs in JSON mode.
pub const JSON_ONLY_INSTRUCTION: &str = "Respond with valid JSON only.";

/// Guard against invented experience in generated resume and letter text.
pub const TRUTHFULNESS_INSTRUCTION: &str = "\
    Keep all information truthful and based on the original content. \
    Never invent employers, job titles, dates, degrees, certifications or achievements \
    that the resume does not support.";
