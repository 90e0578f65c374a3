//! Catalog wiring.
//!
//! This module wraps the equipment and item payloads so the rest of the crate
//! sees one validated snapshot with consistent identifiers. Types here mirror
//! the payload fields; callers use `CatalogStore` for lookups and the filtered
//! view.

pub mod identity;
pub mod model;
pub mod store;

pub use identity::{Brand, Category, EntryId, ItemState};
pub use model::{CatalogEntry, load_entries_from_path};
pub use store::{CatalogStore, FacetSummary};

/// Default source payloads, in the order they are concatenated.
pub const DEFAULT_CATALOG_PATHS: &[&str] = &["catalogs/equipments.json", "catalogs/items.json"];
