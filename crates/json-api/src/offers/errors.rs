//! Offer Errors

use salvo::http::StatusError;
use tracing::error;

use offora_app::domain::offers::OffersServiceError;

pub(crate) fn into_status_error(error: OffersServiceError) -> StatusError {
    match error {
        OffersServiceError::AlreadyExists => StatusError::conflict().brief("Offer already exists"),
        OffersServiceError::NotFound => StatusError::not_found().brief("Offer not found"),
        OffersServiceError::InvalidOffer(reason) => StatusError::bad_request()
            .brief("Invalid offer payload")
            .detail(reason.to_string()),
        OffersServiceError::InvalidReference
        | OffersServiceError::MissingRequiredData
        | OffersServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid offer payload")
        }
        OffersServiceError::Screening(source) => {
            error!("offer screening failed: {source}");

            StatusError::internal_server_error()
        }
        OffersServiceError::Sql(source) => {
            error!("offer storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
