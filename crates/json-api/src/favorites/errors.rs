//! Favorite Errors

use salvo::http::StatusError;
use tracing::error;

use offora_app::domain::favorites::FavoritesServiceError;

pub(crate) fn into_status_error(error: FavoritesServiceError) -> StatusError {
    match error {
        FavoritesServiceError::NotFound => StatusError::not_found().brief("Not found"),
        FavoritesServiceError::Sql(source) => {
            error!("favorite storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
