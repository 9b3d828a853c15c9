// Suggestion inbox: stored improvement tips the user can mark as applied.

pub mod handlers;
pub mod store;
