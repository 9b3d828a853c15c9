// Resume/job assistant: match analysis, tailoring, cover letters, suggestions.
// All completion calls go through llm_client; nothing here talks to the provider directly.

pub mod handlers;
pub mod orchestrator;
pub mod parsers;
pub mod prompts;
pub mod tone;
