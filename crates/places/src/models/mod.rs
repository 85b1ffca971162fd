//! Place data models, types, and traits.

pub mod collation;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use collation::{AccentFolding, NameCollation};
pub use traits::LocationCatalog;
pub use types::{Place, PlacesError, Result};
