//! Load a catalog from a CSV table.
//!
//! Expected header: `name,latitude,longitude` (`city` is accepted for `name`).
//! Extra columns are ignored.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::models::types::{Place, Result};
use crate::provider::static_provider::StaticCatalog;

#[derive(Debug, Deserialize)]
struct PlaceRow {
    #[serde(alias = "city")]
    name: String,
    latitude: f64,
    longitude: f64,
}

impl From<PlaceRow> for Place {
    fn from(row: PlaceRow) -> Self {
        Place::new(row.name.trim(), row.latitude, row.longitude)
    }
}

/// Parse a catalog from any reader.
pub fn from_reader(reader: impl Read) -> Result<StaticCatalog> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let places = reader
        .deserialize::<PlaceRow>()
        .map(|row| row.map(Place::from))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    StaticCatalog::from_places(places)
}

/// Parse a catalog from a file on disk.
pub fn from_path(path: impl AsRef<Path>) -> Result<StaticCatalog> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let catalog = from_reader(file)?;

    tracing::info!(path = %path.display(), places = catalog.places().len(), "loaded place catalog");

    Ok(catalog)
}
