//! Offers

mod errors;
mod handlers;
mod requests;
mod responses;

pub(crate) use handlers::*;
pub(crate) use responses::*;
