//! Subscription Errors

use salvo::http::StatusError;
use tracing::error;

use offora_app::domain::subscriptions::SubscriptionsServiceError;

pub(crate) fn into_status_error(error: SubscriptionsServiceError) -> StatusError {
    match error {
        SubscriptionsServiceError::PaymentVerificationFailed => {
            StatusError::bad_request().brief("Payment verification failed")
        }
        SubscriptionsServiceError::NotFound => {
            StatusError::not_found().brief("Subscription not found")
        }
        SubscriptionsServiceError::InvalidReference | SubscriptionsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid subscription payload")
        }
        SubscriptionsServiceError::Payment(source) => {
            error!("payment provider error: {source}");

            StatusError::bad_gateway().brief("Payment provider unavailable")
        }
        SubscriptionsServiceError::PeriodOverflow(source) => {
            error!("subscription period overflow: {source}");

            StatusError::internal_server_error()
        }
        SubscriptionsServiceError::Sql(source) => {
            error!("subscription storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
