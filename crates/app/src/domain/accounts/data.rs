//! Accounts Data

use crate::domain::{accounts::records::UserUuid, stores::data::NewStoreProfile};

/// New Customer Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub uuid: UserUuid,
    pub username: String,
    pub email: String,
    pub phone_number: Option<String>,
}

/// New Vendor Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewVendor {
    pub user: NewCustomer,
    pub store: NewStoreProfile,
}
