//! Store Records

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    domain::{
        accounts::records::UserUuid, offers::records::OfferRecord,
        subscriptions::records::SubscriptionRecord,
    },
    geo::{GeoPoint, Locatable},
    uuids::typed_uuid,
};

typed_uuid!(
    /// Store UUID
    StoreUuid
);

/// Kind of business a store runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoreCategory {
    Food,
    Grocery,
    Fashion,
    Salon,
    #[default]
    Other,
}

impl StoreCategory {
    pub const ALL: [Self; 5] = [
        Self::Food,
        Self::Grocery,
        Self::Fashion,
        Self::Salon,
        Self::Other,
    ];

    /// Stored representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Food => "FOOD",
            Self::Grocery => "GROCERY",
            Self::Fashion => "FASHION",
            Self::Salon => "SALON",
            Self::Other => "OTHER",
        }
    }

    /// Human readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Food => "Food & Dining",
            Self::Grocery => "Grocery",
            Self::Fashion => "Fashion & Apparel",
            Self::Salon => "Salon & Spa",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for StoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown store category: {0}")]
pub struct UnknownStoreCategory(pub String);

impl FromStr for StoreCategory {
    type Err = UnknownStoreCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownStoreCategory(value.to_string()))
    }
}

/// Store Record
#[derive(Debug, Clone)]
pub struct StoreRecord {
    pub uuid: StoreUuid,
    pub owner_uuid: UserUuid,
    pub name: String,
    pub category: StoreCategory,
    pub address: String,
    pub location: Option<GeoPoint>,
    pub phone_number: String,
    pub is_approved: bool,
    pub rating: f64,
    pub review_count: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A store as seen by a particular caller.
#[derive(Debug, Clone)]
pub struct StoreListing {
    pub store: StoreRecord,
    pub is_favorited: bool,
}

impl Locatable for StoreListing {
    fn location(&self) -> Option<GeoPoint> {
        self.store.location
    }
}

/// A vendor's own store with every offer it has posted and its subscription.
#[derive(Debug, Clone)]
pub struct VendorStore {
    pub store: StoreRecord,
    pub offers: Vec<OfferRecord>,
    pub subscription: Option<SubscriptionRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("salon".parse::<StoreCategory>().ok(), Some(StoreCategory::Salon));
        assert_eq!(" FOOD ".parse::<StoreCategory>().ok(), Some(StoreCategory::Food));
        assert!("bakery".parse::<StoreCategory>().is_err());
    }

    #[test]
    fn category_round_trips_through_storage_form() {
        for category in StoreCategory::ALL {
            assert_eq!(category.as_str().parse::<StoreCategory>().ok(), Some(category));
        }
    }
}
