//! Stores

mod errors;
mod handlers;
mod requests;
mod responses;

pub(crate) use handlers::*;
pub(crate) use requests::*;
pub(crate) use responses::*;
