//! Review Errors

use salvo::http::StatusError;
use tracing::error;

use offora_app::domain::reviews::ReviewsServiceError;

pub(crate) fn into_status_error(error: ReviewsServiceError) -> StatusError {
    match error {
        ReviewsServiceError::AlreadyReviewed => {
            StatusError::bad_request().brief("You have already reviewed this")
        }
        ReviewsServiceError::NotFound => StatusError::not_found().brief("Review target not found"),
        ReviewsServiceError::MissingRequiredData | ReviewsServiceError::InvalidData => {
            StatusError::bad_request().brief("Rating must be between 1 and 5")
        }
        ReviewsServiceError::Sql(source) => {
            error!("review storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
