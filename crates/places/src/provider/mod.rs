//! Place catalog providers.

pub mod csv_source;
pub mod static_provider;

pub use static_provider::StaticCatalog;
