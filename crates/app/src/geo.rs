//! Geo-proximity helpers shared by the offer and store listings.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Customers only see stores within this distance of the location they search from.
pub const NEARBY_RADIUS_KM: f64 = 10.0;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build a point from two nullable columns; both must be present.
    #[must_use]
    pub fn from_columns(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        Some(Self::new(latitude?, longitude?))
    }

    /// Great-circle (haversine) distance to `other` in kilometres.
    #[must_use]
    pub fn distance_km(self, other: Self) -> f64 {
        let lat_a = self.latitude.to_radians();
        let lat_b = other.latitude.to_radians();
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

        2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
    }
}

/// Something that may sit at a known location.
pub trait Locatable {
    fn location(&self) -> Option<GeoPoint>;
}

/// Location narrowing requested by a listing query.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LocationFilter {
    /// No location given; nothing is narrowed.
    #[default]
    Anywhere,

    /// Keep only entries within [`NEARBY_RADIUS_KM`] of this point.
    Near(GeoPoint),

    /// A location was given but could not be read; nothing matches.
    Unresolvable,
}

impl LocationFilter {
    /// Interpret raw `lat`/`lon` query values.
    ///
    /// Both values must be present and non-empty to request narrowing. If either one
    /// is not a number the filter becomes [`LocationFilter::Unresolvable`].
    #[must_use]
    pub fn from_query(lat: Option<&str>, lon: Option<&str>) -> Self {
        let (Some(lat), Some(lon)) = (lat.filter(|v| !v.is_empty()), lon.filter(|v| !v.is_empty()))
        else {
            return Self::Anywhere;
        };

        match (lat.trim().parse::<f64>(), lon.trim().parse::<f64>()) {
            (Ok(latitude), Ok(longitude)) => Self::Near(GeoPoint::new(latitude, longitude)),
            _ => Self::Unresolvable,
        }
    }

    /// Whether an entry at `location` passes this filter.
    #[must_use]
    pub fn admits(&self, location: Option<GeoPoint>) -> bool {
        match self {
            Self::Anywhere => true,
            Self::Near(origin) => {
                location.is_some_and(|point| origin.distance_km(point) <= NEARBY_RADIUS_KM)
            }
            Self::Unresolvable => false,
        }
    }

    /// Drop every entry this filter does not admit.
    #[must_use]
    pub fn retain<T: Locatable>(&self, mut entries: Vec<T>) -> Vec<T> {
        match self {
            Self::Anywhere => entries,
            Self::Unresolvable => Vec::new(),
            Self::Near(_) => {
                entries.retain(|entry| self.admits(entry.location()));

                entries
            }
        }
    }
}
