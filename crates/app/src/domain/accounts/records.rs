//! Account Records

use jiff::Timestamp;

use crate::{auth::IssuedApiToken, domain::stores::records::StoreRecord, uuids::typed_uuid};

typed_uuid!(
    /// User UUID
    UserUuid
);

/// User Record
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub uuid: UserUuid,
    pub username: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub is_vendor: bool,
    pub created_at: Timestamp,
}

/// A freshly registered user together with their first bearer token.
#[derive(Debug, Clone)]
pub struct Registration {
    pub user: UserRecord,
    pub token: IssuedApiToken,
}

/// A freshly registered vendor, their store, and their first bearer token.
#[derive(Debug, Clone)]
pub struct VendorRegistration {
    pub user: UserRecord,
    pub store: StoreRecord,
    pub token: IssuedApiToken,
}
