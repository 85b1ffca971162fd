//! In-memory place catalog.
//!
//! Stores every place behind an `Arc` with a name index for exact lookups.

use std::collections::HashMap;
use std::sync::Arc;

use rand::seq::IndexedRandom;
use rand::RngCore;

use crate::identifiers::PlaceName;
use crate::models::{collation::NameCollation, traits::LocationCatalog, types::*};

/// In-memory catalog with a name index
///
/// This type is cheap to clone since all data is stored in `Arc`s.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    // Core data, in load order
    places: Vec<Arc<Place>>,

    // Lookup map
    by_name: HashMap<PlaceName, Arc<Place>>,
}

impl StaticCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from raw places.
    ///
    /// Fails on the first invalid place or repeated name.
    pub fn from_places(places: impl IntoIterator<Item = Place>) -> Result<Self> {
        let mut catalog = Self::new();

        for place in places {
            place.validate()?;

            if catalog.by_name.contains_key(place.name.as_str()) {
                return Err(PlacesError::DuplicateName(place.name));
            }

            let place = Arc::new(place);
            catalog.by_name.insert(place.name.clone(), place.clone());
            catalog.places.push(place);
        }

        tracing::debug!(places = catalog.places.len(), "built static catalog");

        Ok(catalog)
    }

    pub fn places(&self) -> &[Arc<Place>] {
        &self.places
    }
}

impl LocationCatalog for StaticCatalog {
    fn lookup(&self, name: &str) -> Option<Arc<Place>> {
        self.by_name.get(name).cloned()
    }

    fn sample_one(&self, rng: &mut dyn RngCore) -> Option<Arc<Place>> {
        self.places.choose(rng).cloned()
    }

    fn all_names(&self, collation: &dyn NameCollation) -> Vec<PlaceName> {
        let mut names: Vec<PlaceName> = self.places.iter().map(|p| p.name.clone()).collect();
        names.sort_by(|a, b| collation.compare(a.as_str(), b.as_str()));
        names
    }

    fn len(&self) -> usize {
        self.places.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::collation::AccentFolding;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn shore() -> StaticCatalog {
        StaticCatalog::from_places(vec![
            Place::new("Siófok", 46.9041, 18.0580),
            Place::new("Keszthely", 46.7681, 17.2432),
            Place::new("Ábrahámhegy", 46.8153, 17.5656),
            Place::new("Tihany", 46.9136, 17.8894),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = StaticCatalog::new();
        assert_eq!(catalog.len(), 0);
        assert!(catalog.is_empty());
        assert!(catalog.sample_one(&mut StdRng::seed_from_u64(1)).is_none());
    }

    #[test]
    fn test_catalog_lookups() {
        let catalog = shore();

        let tihany = catalog.lookup("Tihany").unwrap();
        assert_eq!(tihany.latitude(), 46.9136);
        assert!(catalog.contains("Keszthely"));
        assert!(catalog.lookup("tihany").is_none());
        assert!(catalog.lookup("Budapest").is_none());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = StaticCatalog::from_places(vec![
            Place::new("Tihany", 46.9136, 17.8894),
            Place::new("Tihany", 46.9, 17.9),
        ]);

        assert!(matches!(result, Err(PlacesError::DuplicateName(name)) if name == "Tihany"));
    }

    #[test]
    fn test_invalid_place_rejected() {
        let result = StaticCatalog::from_places(vec![Place::new("", 46.9, 17.9)]);
        assert!(matches!(result, Err(PlacesError::InvalidData(_))));
    }

    #[test]
    fn test_all_names_uses_collation() {
        let names = shore().all_names(&AccentFolding);
        let names: Vec<&str> = names.iter().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["Ábrahámhegy", "Keszthely", "Siófok", "Tihany"]);
    }

    #[test]
    fn test_sampling_covers_every_place() {
        let catalog = shore();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            let place = catalog.sample_one(&mut rng).unwrap();
            seen.insert(place.name.clone());
        }

        assert_eq!(seen.len(), catalog.len());
    }
}
