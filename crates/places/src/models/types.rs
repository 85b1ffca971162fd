//! Core data types for the place catalog.

use geo::Point;

use crate::identifiers::PlaceName;

// ============================================================================
// Data Structures
// ============================================================================

/// A named point on the map.
///
/// `location` follows the `geo` convention: x is longitude, y is latitude.
#[derive(Clone, Debug, PartialEq)]
pub struct Place {
    pub name: PlaceName,
    pub location: Point,
}

impl Place {
    pub fn new(name: impl Into<PlaceName>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            location: Point::new(longitude, latitude),
        }
    }

    pub fn latitude(&self) -> f64 {
        self.location.y()
    }

    pub fn longitude(&self) -> f64 {
        self.location.x()
    }

    /// Checks the invariants a catalog entry must hold.
    pub fn validate(&self) -> Result<()> {
        if self.name.as_str().trim().is_empty() {
            return Err(PlacesError::InvalidData("place name is empty".into()));
        }

        let (lat, lon) = (self.latitude(), self.longitude());
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(PlacesError::InvalidData(format!(
                "latitude {} of {} is out of range",
                lat, self.name
            )));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(PlacesError::InvalidData(format!(
                "longitude {} of {} is out of range",
                lon, self.name
            )));
        }

        Ok(())
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PlacesError {
    #[error("Duplicate place name: {0}")]
    DuplicateName(PlaceName),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PlacesError>;
