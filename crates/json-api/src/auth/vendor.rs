//! Vendor-only route guard.

use std::sync::Arc;

use offora_app::domain::accounts::{AccountsServiceError, identity::Vendor};
use salvo::prelude::*;
use tracing::error;

use crate::{extensions::*, state::State};

/// Resolve the authenticated caller to their vendor identity, or answer 403.
///
/// Must run after the bearer token middleware.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let outcome = vendor_of_caller(depot).await;

    match outcome {
        Ok(vendor) => {
            depot.insert_vendor(vendor);
            ctrl.call_next(req, depot, res).await;
        }
        Err(rejection) => {
            res.render(rejection);
            ctrl.skip_rest();
        }
    }
}

async fn vendor_of_caller(depot: &Depot) -> Result<Vendor, StatusError> {
    let caller = depot.caller_or_401()?;

    if !caller.is_vendor {
        return Err(vendor_required());
    }

    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .accounts
        .resolve_vendor(caller)
        .await
        .map_err(|failed| match failed {
            AccountsServiceError::NotVendor | AccountsServiceError::NotFound => vendor_required(),
            source => {
                error!(user_uuid = %caller.user, "failed to resolve vendor: {source}");

                StatusError::internal_server_error()
            }
        })
}

fn vendor_required() -> StatusError {
    StatusError::forbidden().brief("Vendor account required")
}

#[cfg(test)]
mod tests {
    use offora_app::domain::accounts::{
        MockAccountsService,
        identity::{Caller, Vendor},
    };
    use salvo::{
        affix_state::inject,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use crate::test_helpers::{Mocks, TEST_CUSTOMER, TEST_VENDOR, storage_error};

    use super::*;

    #[salvo::handler]
    async fn echo_store(depot: &mut Depot, res: &mut Response) {
        let store = depot
            .vendor_or_403()
            .map_or_else(|_missing| "missing".to_string(), |vendor: Vendor| {
                vendor.store.to_string()
            });

        res.render(store);
    }

    fn make_service(accounts: MockAccountsService, caller: Option<Caller>) -> Service {
        let state = Mocks {
            accounts,
            ..Mocks::default()
        }
        .into_state();

        let mut router = Router::new().hoop(inject(state));

        if let Some(caller) = caller {
            router = router.hoop(inject(caller));
        }

        Service::new(router.hoop(handler).push(Router::new().get(echo_store)))
    }

    #[tokio::test]
    async fn test_unauthenticated_request_returns_401() {
        let mut accounts = MockAccountsService::new();

        accounts.expect_resolve_vendor().never();

        let res = TestClient::get("http://example.com")
            .send(&make_service(accounts, None))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
    }

    #[tokio::test]
    async fn test_customer_returns_403() {
        let mut accounts = MockAccountsService::new();

        accounts.expect_resolve_vendor().never();

        let res = TestClient::get("http://example.com")
            .send(&make_service(accounts, Some(TEST_CUSTOMER)))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));
    }

    #[tokio::test]
    async fn test_vendor_without_store_returns_403() {
        let mut accounts = MockAccountsService::new();

        accounts
            .expect_resolve_vendor()
            .once()
            .return_once(|_| Err(AccountsServiceError::NotFound));

        let res = TestClient::get("http://example.com")
            .send(&make_service(accounts, Some(TEST_VENDOR.as_caller())))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));
    }

    #[tokio::test]
    async fn test_storage_error_returns_500() {
        let mut accounts = MockAccountsService::new();

        accounts
            .expect_resolve_vendor()
            .once()
            .return_once(|_| Err(AccountsServiceError::Sql(storage_error())));

        let res = TestClient::get("http://example.com")
            .send(&make_service(accounts, Some(TEST_VENDOR.as_caller())))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[tokio::test]
    async fn test_vendor_is_injected() -> TestResult {
        let mut accounts = MockAccountsService::new();

        accounts
            .expect_resolve_vendor()
            .once()
            .withf(|caller| *caller == TEST_VENDOR.as_caller())
            .return_once(|_| Ok(TEST_VENDOR));

        let mut res = TestClient::get("http://example.com")
            .send(&make_service(accounts, Some(TEST_VENDOR.as_caller())))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, TEST_VENDOR.store.to_string());

        Ok(())
    }
}
