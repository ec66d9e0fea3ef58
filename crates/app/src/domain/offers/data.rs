//! Offers Data

use jiff::Timestamp;
use thiserror::Error;

use crate::{
    domain::{offers::records::OfferUuid, stores::records::{StoreCategory, StoreUuid}},
    geo::LocationFilter,
};

/// Why an offer payload was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidOffer {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("end time must be after start time")]
    EndsBeforeStart,

    #[error("discount percentage must be between 0 and 100")]
    DiscountOutOfRange,
}

/// New Offer Data. Approval is decided by the subscription gate, never supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOffer {
    pub uuid: OfferUuid,
    pub title: String,
    pub description: String,
    pub original_price: Option<u64>,
    pub discounted_price: Option<u64>,
    pub discount_percentage: Option<u8>,
    pub image_url: Option<String>,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
}

impl NewOffer {
    /// Check the payload before anything is written.
    ///
    /// # Errors
    ///
    /// Returns the first rule the payload breaks.
    pub fn validate(&self) -> Result<(), InvalidOffer> {
        validate_offer(
            &self.title,
            self.start_time,
            self.end_time,
            self.discount_percentage,
        )
    }
}

/// Offer Update Data
#[derive(Debug, Clone, PartialEq)]
pub struct OfferUpdate {
    pub title: String,
    pub description: String,
    pub original_price: Option<u64>,
    pub discounted_price: Option<u64>,
    pub discount_percentage: Option<u8>,
    pub image_url: Option<String>,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub is_active: bool,
}

impl OfferUpdate {
    /// Check the payload before anything is written.
    ///
    /// # Errors
    ///
    /// Returns the first rule the payload breaks.
    pub fn validate(&self) -> Result<(), InvalidOffer> {
        validate_offer(
            &self.title,
            self.start_time,
            self.end_time,
            self.discount_percentage,
        )
    }
}

impl From<NewOffer> for OfferUpdate {
    fn from(offer: NewOffer) -> Self {
        Self {
            title: offer.title,
            description: offer.description,
            original_price: offer.original_price,
            discounted_price: offer.discounted_price,
            discount_percentage: offer.discount_percentage,
            image_url: offer.image_url,
            start_time: offer.start_time,
            end_time: offer.end_time,
            is_active: true,
        }
    }
}

fn validate_offer(
    title: &str,
    start_time: Timestamp,
    end_time: Timestamp,
    discount_percentage: Option<u8>,
) -> Result<(), InvalidOffer> {
    if title.trim().is_empty() {
        return Err(InvalidOffer::EmptyTitle);
    }

    if end_time <= start_time {
        return Err(InvalidOffer::EndsBeforeStart);
    }

    if discount_percentage.is_some_and(|percentage| percentage > 100) {
        return Err(InvalidOffer::DiscountOutOfRange);
    }

    Ok(())
}

/// Offer listing query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OfferQuery {
    /// Restrict to one store. Location is ignored when set.
    pub store: Option<StoreUuid>,
    pub location: LocationFilter,
    pub search: Option<String>,
    pub category: Option<StoreCategory>,
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;

    use super::*;

    fn offer() -> NewOffer {
        let start_time = Timestamp::UNIX_EPOCH;

        NewOffer {
            uuid: OfferUuid::new(),
            title: "Two for one".to_string(),
            description: String::new(),
            original_price: Some(50_000),
            discounted_price: Some(25_000),
            discount_percentage: Some(50),
            image_url: None,
            start_time,
            end_time: start_time + SignedDuration::from_hours(24),
        }
    }

    #[test]
    fn valid_offer_passes() {
        assert_eq!(offer().validate(), Ok(()));
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut offer = offer();
        offer.title = "   ".to_string();

        assert_eq!(offer.validate(), Err(InvalidOffer::EmptyTitle));
    }

    #[test]
    fn window_must_be_forward() {
        let mut offer = offer();
        offer.end_time = offer.start_time;

        assert_eq!(offer.validate(), Err(InvalidOffer::EndsBeforeStart));
    }

    #[test]
    fn discount_over_100_is_rejected() {
        let mut offer = offer();
        offer.discount_percentage = Some(101);

        assert_eq!(offer.validate(), Err(InvalidOffer::DiscountOutOfRange));
    }
}
