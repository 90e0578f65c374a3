//! Screen state for the storefront, updated through a single reducer.
//!
//! The screen owns no mutable globals: each user action produces a fresh
//! `StorefrontState` which the next render reads. Panel visibility flags stay
//! with the presentation layer and are not modelled here.

use crate::catalog::{CatalogEntry, CatalogStore};
use crate::filter::{FacetValue, FilterState};
use crate::inquiry::compose_inquiry;
use crate::selection::SelectionSet;
use chrono::Timelike;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StorefrontState {
    pub filter: FilterState,
    pub selection: SelectionSet,
}

/// User intents the storefront reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    SetQuery(String),
    ToggleFacet(FacetValue),
    AcceptFacet(FacetValue),
    ClearFacets,
    ToggleEntry(CatalogEntry),
    ClearSelection,
}

impl StorefrontState {
    pub fn reduce(&self, action: Action) -> Self {
        match action {
            Action::SetQuery(query) => Self {
                filter: self.filter.with_query(query),
                selection: self.selection.clone(),
            },
            Action::ToggleFacet(value) => Self {
                filter: self.filter.toggle_facet(value),
                selection: self.selection.clone(),
            },
            Action::AcceptFacet(value) => Self {
                filter: self.filter.accept_facet(value),
                selection: self.selection.clone(),
            },
            Action::ClearFacets => Self {
                filter: self.filter.clear_facets(),
                selection: self.selection.clone(),
            },
            Action::ToggleEntry(entry) => Self {
                filter: self.filter.clone(),
                selection: self.selection.toggle(&entry),
            },
            Action::ClearSelection => Self {
                filter: self.filter.clone(),
                selection: self.selection.clear(),
            },
        }
    }

    /// Apply a batch of actions in order.
    pub fn reduce_all<I>(&self, actions: I) -> Self
    where
        I: IntoIterator<Item = Action>,
    {
        actions
            .into_iter()
            .fold(self.clone(), |state, action| state.reduce(action))
    }

    /// Entries currently shown, in store order.
    pub fn visible<'a>(&self, store: &'a CatalogStore) -> Vec<&'a CatalogEntry> {
        self.filter.apply(store.entries())
    }

    /// The inquiry to send, or `None` while nothing is selected.
    pub fn inquiry<T: Timelike>(&self, now: &T) -> Option<String> {
        if self.selection.is_empty() {
            return None;
        }
        Some(compose_inquiry(&self.selection, now))
    }
}
