//! Favorite Responses

use salvo::{http::StatusCode, oapi::ToSchema};
use serde::{Deserialize, Serialize};

use offora_app::domain::favorites::FavoriteToggle;

/// Outcome of a favorite toggle: `favorited` or `unfavorited`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct FavoriteStatusResponse {
    pub status: String,
}

impl From<FavoriteToggle> for FavoriteStatusResponse {
    fn from(toggle: FavoriteToggle) -> Self {
        let status = if toggle.is_favorited() {
            "favorited"
        } else {
            "unfavorited"
        };

        FavoriteStatusResponse {
            status: status.to_string(),
        }
    }
}

/// Adding a favorite creates it; removing one does not.
pub(crate) fn toggle_status_code(toggle: FavoriteToggle) -> StatusCode {
    if toggle.is_favorited() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    }
}
