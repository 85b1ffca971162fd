//! # balaton-places
//!
//! Read-only catalog of named places used as targets and guesses.
//!
//! ## Features
//!
//! - **Exact lookup**: places are keyed by their display name
//! - **Uniform sampling**: pick a target with any `rand` generator
//! - **Pluggable ordering**: sort names for a selection list with a `NameCollation`
//! - **CSV loading**: build a catalog from a `name,latitude,longitude` table
//!
//! ## Example
//!
//! ```
//! use balaton_places::prelude::*;
//!
//! let catalog = StaticCatalog::from_places(vec![
//!     Place::new("Siófok", 46.9041, 18.0580),
//!     Place::new("Tihany", 46.9136, 17.8894),
//! ])
//! .unwrap();
//!
//! let tihany = catalog.lookup("Tihany").unwrap();
//! let siofok = catalog.lookup("Siófok").unwrap();
//!
//! // Siófok to Tihany is roughly 13km as the crow flies
//! let km = haversine_distance_km(siofok.location, tihany.location);
//! assert!((km - 12.85).abs() < 0.1);
//!
//! let names = catalog.all_names(&AccentFolding);
//! assert_eq!(names[0].as_str(), "Siófok");
//! ```

pub mod identifiers;
pub mod models;
pub mod provider;
pub mod spatial;

// Re-exports for convenience
pub mod prelude {
    pub use crate::identifiers::*;
    pub use crate::models::{collation::*, traits::*, types::*};
    pub use crate::provider::{csv_source, static_provider::StaticCatalog};
    pub use crate::spatial::haversine_distance_km;
}

pub use prelude::*;
