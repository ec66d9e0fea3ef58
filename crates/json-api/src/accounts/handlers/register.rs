//! Register Customer Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use offora_app::domain::accounts::{
    data::NewCustomer,
    records::{Registration, UserUuid},
};

use crate::{accounts::errors::into_status_error, extensions::*, state::State};

/// Register Customer Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RegisterRequest {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
}

impl From<RegisterRequest> for NewCustomer {
    fn from(request: RegisterRequest) -> Self {
        NewCustomer {
            uuid: UserUuid::new(),
            username: request.username,
            email: request.email,
            phone_number: request.phone_number,
        }
    }
}

/// Registered Account Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RegisteredResponse {
    pub uuid: Uuid,
    pub username: String,
    pub email: String,
    pub is_vendor: bool,

    /// Bearer token for the `Authorization` header. Only ever returned here.
    pub token: String,
}

impl From<Registration> for RegisteredResponse {
    fn from(registration: Registration) -> Self {
        RegisteredResponse {
            uuid: registration.user.uuid.into(),
            username: registration.user.username,
            email: registration.user.email,
            is_vendor: registration.user.is_vendor,
            token: registration.token.token,
        }
    }
}

/// Register Customer Handler
#[endpoint(
    tags("accounts"),
    summary = "Register Customer",
    responses(
        (status_code = StatusCode::CREATED, description = "Customer registered"),
        (status_code = StatusCode::CONFLICT, description = "Username, email or phone number taken"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<RegisterRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<RegisteredResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let registration = state
        .app
        .accounts
        .register_customer(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(user_uuid = %registration.user.uuid, "registered customer");

    res.status_code(StatusCode::CREATED);

    Ok(Json(registration.into()))
}
