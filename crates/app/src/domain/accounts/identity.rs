//! Request identities passed explicitly into services.

use crate::domain::{accounts::records::UserUuid, stores::records::StoreUuid};

/// The authenticated user behind a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub user: UserUuid,
    pub is_vendor: bool,
}

/// An authenticated vendor, resolved to the one store they own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vendor {
    pub user: UserUuid,
    pub store: StoreUuid,
}

impl Vendor {
    /// The vendor seen as an ordinary caller, e.g. for favorite flags on listings.
    #[must_use]
    pub const fn as_caller(self) -> Caller {
        Caller {
            user: self.user,
            is_vendor: true,
        }
    }
}
