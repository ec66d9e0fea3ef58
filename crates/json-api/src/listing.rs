//! Query parameters shared by the offer and store listings.

use salvo::http::StatusError;

use offora_app::{domain::stores::records::StoreCategory, geo::LocationFilter};

use crate::extensions::*;

/// Browse filters as read from `lat`, `lon`, `search` and `category`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ListingFilters {
    pub(crate) location: LocationFilter,
    pub(crate) search: Option<String>,
    pub(crate) category: Option<StoreCategory>,
}

impl ListingFilters {
    /// A malformed location is not an error: it narrows the listing to nothing.
    /// An unknown category is rejected.
    pub(crate) fn parse(
        lat: Option<String>,
        lon: Option<String>,
        search: Option<String>,
        category: Option<String>,
    ) -> Result<Self, StatusError> {
        let category = category
            .filter(|value| !value.trim().is_empty())
            .map(|value| value.parse::<StoreCategory>())
            .transpose()
            .or_400("unknown \"category\" query parameter")?;

        Ok(Self {
            location: LocationFilter::from_query(lat.as_deref(), lon.as_deref()),
            search: search.filter(|value| !value.trim().is_empty()),
            category,
        })
    }
}
