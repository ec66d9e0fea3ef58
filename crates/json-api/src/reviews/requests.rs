//! Review Requests

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use offora_app::domain::reviews::data::{NewReview, ReviewUpdate};

/// Review Request, for both creating and editing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReviewRequest {
    /// 1 to 5 stars
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
}

impl From<ReviewRequest> for NewReview {
    fn from(request: ReviewRequest) -> Self {
        NewReview {
            rating: request.rating,
            comment: request.comment,
        }
    }
}

impl From<ReviewRequest> for ReviewUpdate {
    fn from(request: ReviewRequest) -> Self {
        ReviewUpdate {
            rating: request.rating,
            comment: request.comment,
        }
    }
}
