//! # palate-storage
//!
//! Storage collaborator for the Palate engine: a SQLite-backed catalog
//! store, an in-memory store for tests, and the seeded reference dataset.
//!
//! ## Modules
//!
//! - `catalog` — `SqliteCatalog` implementing `CatalogStore`
//! - `schema` — table DDL
//! - `queries` — per-entity query functions
//! - `memory` — `InMemoryCatalog` for tests and examples
//! - `seed` — the 10-dish / 10-question reference catalog

pub mod catalog;
pub mod memory;
pub mod queries;
pub mod schema;
pub mod seed;

pub use catalog::SqliteCatalog;
pub use memory::InMemoryCatalog;

use palate_core::PalateError;

/// Map a storage-layer failure into the workspace error type.
pub(crate) fn to_storage_err(reason: String) -> PalateError {
    PalateError::Storage { reason }
}
