//! Subscriptions service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::payments::PaymentError;

#[derive(Debug, Error)]
pub enum SubscriptionsServiceError {
    #[error("subscription not found")]
    NotFound,

    #[error("related resource not found")]
    InvalidReference,

    #[error("invalid data")]
    InvalidData,

    #[error("payment verification failed")]
    PaymentVerificationFailed,

    #[error("payment provider error")]
    Payment(#[source] PaymentError),

    #[error("subscription period overflows the calendar")]
    PeriodOverflow(#[source] jiff::Error),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for SubscriptionsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

impl From<PaymentError> for SubscriptionsServiceError {
    fn from(error: PaymentError) -> Self {
        match error {
            PaymentError::InvalidSignature => Self::PaymentVerificationFailed,
            PaymentError::Http(_) | PaymentError::UnexpectedResponse(_) => Self::Payment(error),
        }
    }
}
