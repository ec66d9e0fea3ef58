//! Register Vendor Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use offora_app::domain::accounts::{
    data::{NewCustomer, NewVendor},
    records::{UserUuid, VendorRegistration},
};

use crate::{
    accounts::{errors::into_status_error, handlers::register::RegisteredResponse},
    extensions::*,
    state::State,
    stores::{StoreProfileRequest, StoreResponse},
};

/// Register Vendor Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RegisterVendorRequest {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    pub store: StoreProfileRequest,
}

impl RegisterVendorRequest {
    fn into_new_vendor(self) -> Result<NewVendor, StatusError> {
        Ok(NewVendor {
            user: NewCustomer {
                uuid: UserUuid::new(),
                username: self.username,
                email: self.email,
                phone_number: self.phone_number,
            },
            store: self.store.into_new_profile()?,
        })
    }
}

/// Registered Vendor Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RegisteredVendorResponse {
    pub account: RegisteredResponse,

    /// Awaiting approval until an operator or a subscription approves it
    pub store: StoreResponse,
}

impl From<VendorRegistration> for RegisteredVendorResponse {
    fn from(registration: VendorRegistration) -> Self {
        RegisteredVendorResponse {
            account: RegisteredResponse {
                uuid: registration.user.uuid.into(),
                username: registration.user.username,
                email: registration.user.email,
                is_vendor: registration.user.is_vendor,
                token: registration.token.token,
            },
            store: registration.store.into(),
        }
    }
}

/// Register Vendor Handler
///
/// Creates the user, their shop owner profile and their store in one step.
#[endpoint(
    tags("accounts"),
    summary = "Register Vendor",
    responses(
        (status_code = StatusCode::CREATED, description = "Vendor registered"),
        (status_code = StatusCode::CONFLICT, description = "Username, email or phone number taken"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<RegisterVendorRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<RegisteredVendorResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let vendor = json.into_inner().into_new_vendor()?;

    let registration = state
        .app
        .accounts
        .register_vendor(vendor)
        .await
        .map_err(into_status_error)?;

    tracing::info!(
        user_uuid = %registration.user.uuid,
        store_uuid = %registration.store.uuid,
        "registered vendor"
    );

    res.status_code(StatusCode::CREATED);

    Ok(Json(registration.into()))
}
