//! Offer Requests

use jiff::Timestamp;
use salvo::{http::StatusError, oapi::ToSchema};
use serde::{Deserialize, Serialize};

use offora_app::domain::offers::{
    data::{NewOffer, OfferUpdate},
    records::OfferUuid,
};

use crate::extensions::*;

/// Offer payload shared by create and update.
///
/// Approval is not accepted here; unknown fields such as `is_approved` are ignored.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OfferRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub original_price: Option<u64>,
    #[serde(default)]
    pub discounted_price: Option<u64>,
    #[serde(default)]
    pub discount_percentage: Option<u8>,
    #[serde(default)]
    pub image_url: Option<String>,

    /// RFC 3339 timestamp
    pub start_time: String,

    /// RFC 3339 timestamp, after `start_time`
    pub end_time: String,

    /// Only read on update. Defaults to active.
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl OfferRequest {
    fn window(&self) -> Result<(Timestamp, Timestamp), StatusError> {
        let start_time = self
            .start_time
            .parse::<Timestamp>()
            .or_400("could not parse \"start_time\"")?;

        let end_time = self
            .end_time
            .parse::<Timestamp>()
            .or_400("could not parse \"end_time\"")?;

        Ok((start_time, end_time))
    }

    pub(crate) fn into_new_offer(self) -> Result<NewOffer, StatusError> {
        let (start_time, end_time) = self.window()?;

        Ok(NewOffer {
            uuid: OfferUuid::new(),
            title: self.title,
            description: self.description,
            original_price: self.original_price,
            discounted_price: self.discounted_price,
            discount_percentage: self.discount_percentage,
            image_url: self.image_url,
            start_time,
            end_time,
        })
    }

    pub(crate) fn into_update(self) -> Result<OfferUpdate, StatusError> {
        let (start_time, end_time) = self.window()?;

        Ok(OfferUpdate {
            title: self.title,
            description: self.description,
            original_price: self.original_price,
            discounted_price: self.discounted_price,
            discount_percentage: self.discount_percentage,
            image_url: self.image_url,
            start_time,
            end_time,
            is_active: self.is_active.unwrap_or(true),
        })
    }
}
