//! Stores Data

use crate::{
    domain::stores::records::{StoreCategory, StoreUuid},
    geo::{GeoPoint, LocationFilter},
};

/// New Store Profile Data, supplied at vendor registration.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStoreProfile {
    pub uuid: StoreUuid,
    pub name: String,
    pub category: StoreCategory,
    pub address: String,
    pub location: Option<GeoPoint>,
    pub phone_number: String,
}

/// Store Update Data. Approval and rating are never part of an update.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreUpdate {
    pub name: String,
    pub category: StoreCategory,
    pub address: String,
    pub location: Option<GeoPoint>,
    pub phone_number: String,
}

/// Store listing query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreQuery {
    pub location: LocationFilter,
    pub search: Option<String>,
    pub category: Option<StoreCategory>,
}
