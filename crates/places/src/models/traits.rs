//! Core trait for place catalogs.
//!
//! The game only ever reads from a catalog. Implementations can be in-memory,
//! database-backed, or remote.

use std::sync::Arc;

use rand::RngCore;

use crate::identifiers::PlaceName;
use crate::models::collation::NameCollation;
use crate::models::types::Place;

// ============================================================================
// Catalog Trait
// ============================================================================

/// Read-only mapping from a place name to its coordinates
pub trait LocationCatalog: Send + Sync {
    /// Exact, case-sensitive lookup by name
    fn lookup(&self, name: &str) -> Option<Arc<Place>>;

    /// Pick one place uniformly at random. `None` only for an empty catalog.
    fn sample_one(&self, rng: &mut dyn RngCore) -> Option<Arc<Place>>;

    /// Every place name, ordered by `collation`
    fn all_names(&self, collation: &dyn NameCollation) -> Vec<PlaceName>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }
}
