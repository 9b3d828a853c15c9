// Job and application tracking: saved job descriptions and per-application
// status, scores and generated documents.

pub mod handlers;
pub mod status;
pub mod store;
