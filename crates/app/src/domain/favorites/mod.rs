//! Customer favorites for offers and stores.

pub mod errors;
pub mod records;
pub(crate) mod repository;
pub mod service;

pub use errors::FavoritesServiceError;
pub use records::FavoriteToggle;
pub use service::*;
