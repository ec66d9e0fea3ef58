//! Moderation service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModerationServiceError {
    #[error("store or offer not found")]
    NotFound,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ModerationServiceError {
    fn from(error: Error) -> Self {
        match error {
            Error::RowNotFound => Self::NotFound,
            error => Self::Sql(error),
        }
    }
}
