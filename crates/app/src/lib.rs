//! Offora marketplace domain, persistence and collaborator modules.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;
pub mod geo;
pub mod payments;
pub mod uuids;

#[cfg(test)]
mod test;
