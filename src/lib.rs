//! Shared library for the vitrine storefront engine.
//!
//! The crate holds the catalog snapshot, the filter and selection values the
//! storefront screen is built from, and the inquiry composer used for the
//! WhatsApp handoff. Everything past loading is a pure function of its
//! inputs; the `vitrine` binary wires it to files, the clock and stdout.

pub mod catalog;
pub mod config;
pub mod filter;
pub mod handoff;
pub mod inquiry;
pub mod listing;
pub mod selection;
pub mod storefront;

mod schema_loader;

pub use catalog::{
    Brand, CatalogEntry, CatalogStore, Category, EntryId, FacetSummary, ItemState,
    load_entries_from_path,
};
pub use config::StorefrontConfig;
pub use filter::{Facet, FacetValue, FilterState};
pub use handoff::whatsapp_link;
pub use inquiry::{Greeting, compose_inquiry, request_label};
pub use listing::{render_facets, render_listing};
pub use selection::SelectionSet;
pub use storefront::{Action, StorefrontState};

/// Split comma- or whitespace-delimited configuration lists into tokens.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .replace(',', " ")
        .split_whitespace()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
