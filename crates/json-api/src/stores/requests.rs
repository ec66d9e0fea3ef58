//! Store Requests

use salvo::{http::StatusError, oapi::ToSchema};
use serde::{Deserialize, Serialize};

use offora_app::{
    domain::stores::{
        data::{NewStoreProfile, StoreUpdate},
        records::{StoreCategory, StoreUuid},
    },
    geo::GeoPoint,
};

use crate::extensions::*;

/// Editable store profile. Approval and rating are never accepted from clients.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StoreProfileRequest {
    pub name: String,

    /// One of FOOD, GROCERY, FASHION, SALON, OTHER
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub address: String,

    /// Decimal degrees. Give both coordinates or neither.
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub phone_number: String,
}

impl StoreProfileRequest {
    fn category(&self) -> Result<StoreCategory, StatusError> {
        self.category
            .as_deref()
            .map_or(Ok(StoreCategory::default()), |value| value.parse::<StoreCategory>())
            .or_400("unknown store category")
    }

    fn location(&self) -> Result<Option<GeoPoint>, StatusError> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Ok(Some(GeoPoint::new(latitude, longitude))),
            (None, None) => Ok(None),
            _ => Err(StatusError::bad_request()
                .brief("latitude and longitude must be given together")),
        }
    }

    pub(crate) fn into_new_profile(self) -> Result<NewStoreProfile, StatusError> {
        let category = self.category()?;
        let location = self.location()?;

        Ok(NewStoreProfile {
            uuid: StoreUuid::new(),
            name: self.name,
            category,
            address: self.address,
            location,
            phone_number: self.phone_number,
        })
    }

    pub(crate) fn into_update(self) -> Result<StoreUpdate, StatusError> {
        let category = self.category()?;
        let location = self.location()?;

        Ok(StoreUpdate {
            name: self.name,
            category,
            address: self.address,
            location,
            phone_number: self.phone_number,
        })
    }
}
