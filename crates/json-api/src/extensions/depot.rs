//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

use offora_app::domain::accounts::identity::{Caller, Vendor};

/// Typed access to what the middleware chain stores in the depot.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_caller(&mut self, caller: Caller);

    /// The authenticated caller. Only missing if a route skipped the auth middleware.
    fn caller_or_401(&self) -> Result<Caller, StatusError>;

    fn insert_vendor(&mut self, vendor: Vendor);

    /// The resolved vendor. Only missing if a route skipped the vendor middleware.
    fn vendor_or_403(&self) -> Result<Vendor, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_missing| StatusError::internal_server_error())
    }

    fn insert_caller(&mut self, caller: Caller) {
        self.inject(caller);
    }

    fn caller_or_401(&self) -> Result<Caller, StatusError> {
        self.obtain::<Caller>()
            .copied()
            .map_err(|_missing| StatusError::unauthorized())
    }

    fn insert_vendor(&mut self, vendor: Vendor) {
        self.inject(vendor);
    }

    fn vendor_or_403(&self) -> Result<Vendor, StatusError> {
        self.obtain::<Vendor>()
            .copied()
            .map_err(|_missing| StatusError::forbidden())
    }
}
