//! Bearer token middleware.

use std::sync::Arc;

use offora_app::{auth::AuthServiceError, domain::accounts::identity::Caller};
use salvo::{http::header::AUTHORIZATION, prelude::*};
use tracing::error;

use crate::{extensions::*, state::State};

/// Resolve `Authorization: Bearer <token>` to the calling user, or answer 401.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let outcome = authenticate(bearer_token(req), depot).await;

    match outcome {
        Ok(caller) => {
            tracing::Span::current().record("user_uuid", tracing::field::display(caller.user));

            depot.insert_caller(caller);
            ctrl.call_next(req, depot, res).await;
        }
        Err(rejection) => {
            res.render(rejection);
            ctrl.skip_rest();
        }
    }
}

async fn authenticate(token: Option<&str>, depot: &Depot) -> Result<Caller, StatusError> {
    let token = token.ok_or_else(|| {
        StatusError::unauthorized().brief("Missing or invalid Authorization header")
    })?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .auth
        .authenticate_bearer(token)
        .await
        .map_err(|rejected| match rejected {
            AuthServiceError::NotFound => StatusError::unauthorized().brief("Invalid API token"),
            AuthServiceError::Sql(source) => {
                error!("failed to validate api token: {source}");

                StatusError::internal_server_error()
            }
        })
}

/// The token of a `Bearer` credential; the scheme name is case-insensitive.
fn bearer_token(req: &Request) -> Option<&str> {
    let (scheme, token) = req
        .headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .split_once(' ')?;

    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
