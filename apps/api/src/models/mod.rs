use uuid::Uuid;

use crate::errors::AppError;

pub mod application;
pub mod job;
pub mod resume;
pub mod suggestion;

/// Every row belongs to one user; touching someone else's row is forbidden.
pub fn ensure_owner(owner_id: Uuid, user_id: Uuid) -> Result<(), AppError> {
    if owner_id == user_id {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}
