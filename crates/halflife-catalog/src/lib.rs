//! # halflife-catalog: Isotope catalog with pluggable persistence.
//!
//! Keeps the set of isotopes a user can simulate, enforces that at least one
//! entry always exists, and writes every change through an injected
//! [`CatalogPersistence`](halflife_core::traits::CatalogPersistence).
//!
//! # Modules
//!
//! - [`catalog`]: `IsotopeCatalog`, the in-memory mapping and its rules
//! - [`defaults`]: built-in reference isotopes
//! - [`persistence`]: JSON file and in-memory stores
//! - [`store`]: `CatalogStore`, catalog + persistence with non-fatal save warnings

pub mod catalog;
pub mod defaults;
pub mod persistence;
pub mod store;

pub use catalog::IsotopeCatalog;
pub use defaults::default_isotopes;
pub use persistence::{JsonFileStore, MemoryStore};
pub use store::{CatalogStore, SaveOutcome, SharedCatalogStore};
