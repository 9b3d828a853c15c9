// Resume intake and retrieval. Upload extracts text, stores the resume, then
// runs best-effort suggestion generation.

pub mod extract;
pub mod handlers;
pub mod store;
