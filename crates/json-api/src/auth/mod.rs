//! Authentication and vendor authorization middleware.

pub(crate) mod middleware;
pub(crate) mod vendor;
