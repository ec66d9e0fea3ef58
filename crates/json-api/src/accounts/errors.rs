//! Account Errors

use salvo::http::StatusError;
use tracing::error;

use offora_app::domain::accounts::AccountsServiceError;

pub(crate) fn into_status_error(error: AccountsServiceError) -> StatusError {
    match error {
        AccountsServiceError::AlreadyExists => StatusError::conflict()
            .brief("Username, email or phone number already registered"),
        AccountsServiceError::InvalidReference
        | AccountsServiceError::MissingRequiredData
        | AccountsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid registration payload")
        }
        AccountsServiceError::NotFound => StatusError::not_found(),
        AccountsServiceError::NotVendor => {
            StatusError::forbidden().brief("Vendor account required")
        }
        AccountsServiceError::Sql(source) => {
            error!("failed to register account: {source}");

            StatusError::internal_server_error()
        }
    }
}
