//! Facet and text filtering over catalog entries.
//!
//! A `FilterState` is a plain value: every edit returns a new state so the
//! storefront reducer can swap it wholesale. Within a facet the accepted
//! values are OR-ed; across facets and the text query they are AND-ed. An
//! empty facet places no restriction.

use crate::catalog::{Brand, CatalogEntry, Category, ItemState};
use anyhow::{Result, bail};
use std::collections::BTreeSet;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub categories: BTreeSet<Category>,
    pub brands: BTreeSet<Brand>,
    pub states: BTreeSet<ItemState>,
    pub query: String,
}

/// Filter dimension names, as used on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facet {
    Category,
    Brand,
    State,
}

/// A single accepted value for one facet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FacetValue {
    Category(Category),
    Brand(Brand),
    State(ItemState),
}

impl Facet {
    pub fn as_str(&self) -> &'static str {
        match self {
            Facet::Category => "category",
            Facet::Brand => "brand",
            Facet::State => "state",
        }
    }

    /// Build a value for this facet from its display label.
    pub fn value(self, label: &str) -> Result<FacetValue> {
        let label = label.trim();
        if label.is_empty() {
            bail!("empty {} filter value", self.as_str());
        }
        Ok(match self {
            Facet::Category => FacetValue::Category(Category::from_label(label)),
            Facet::Brand => FacetValue::Brand(Brand(label.to_string())),
            Facet::State => FacetValue::State(ItemState::from_label(label)),
        })
    }
}

impl TryFrom<&str> for Facet {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self> {
        match value {
            "category" | "categories" => Ok(Facet::Category),
            "brand" | "brands" => Ok(Facet::Brand),
            "state" | "states" => Ok(Facet::State),
            other => bail!("Unknown facet: {other}"),
        }
    }
}

impl FacetValue {
    /// Parse a `name=label` pair such as `state=Semi-novo`.
    pub fn parse(raw: &str) -> Result<Self> {
        let Some((name, label)) = raw.split_once('=') else {
            bail!("expected NAME=LABEL, got '{raw}'");
        };
        Facet::try_from(name.trim())?.value(label)
    }
}

impl FilterState {
    /// True when `entry` passes the query and every facet.
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        self.matches_query(&entry.name)
            && accepts(&self.categories, Some(&entry.category))
            && accepts(&self.brands, entry.brand.as_ref())
            && accepts(&self.states, entry.state.as_ref())
    }

    fn matches_query(&self, name: &str) -> bool {
        self.query.is_empty() || name.to_lowercase().contains(&self.query.to_lowercase())
    }

    /// True when any facet is restricted. The text query does not count.
    pub fn is_filtering(&self) -> bool {
        !self.categories.is_empty() || !self.brands.is_empty() || !self.states.is_empty()
    }

    /// Add the value to its facet, or remove it when already accepted.
    pub fn toggle_facet(&self, value: FacetValue) -> Self {
        let mut next = self.clone();
        match value {
            FacetValue::Category(category) => toggle(&mut next.categories, category),
            FacetValue::Brand(brand) => toggle(&mut next.brands, brand),
            FacetValue::State(state) => toggle(&mut next.states, state),
        }
        next
    }

    /// Add the value to its facet; accepting an active value is a no-op.
    pub fn accept_facet(&self, value: FacetValue) -> Self {
        let mut next = self.clone();
        match value {
            FacetValue::Category(category) => {
                next.categories.insert(category);
            }
            FacetValue::Brand(brand) => {
                next.brands.insert(brand);
            }
            FacetValue::State(state) => {
                next.states.insert(state);
            }
        }
        next
    }

    pub fn with_query(&self, query: impl Into<String>) -> Self {
        FilterState {
            query: query.into(),
            ..self.clone()
        }
    }

    /// Drop every facet restriction; the query is kept.
    pub fn clear_facets(&self) -> Self {
        FilterState {
            query: self.query.clone(),
            ..FilterState::default()
        }
    }

    /// Whether a given facet value is currently accepted.
    pub fn is_active(&self, value: &FacetValue) -> bool {
        match value {
            FacetValue::Category(category) => self.categories.contains(category),
            FacetValue::Brand(brand) => self.brands.contains(brand),
            FacetValue::State(state) => self.states.contains(state),
        }
    }

    /// The filtered view, preserving input order.
    pub fn apply<'a>(&self, entries: &'a [CatalogEntry]) -> Vec<&'a CatalogEntry> {
        entries.iter().filter(|entry| self.matches(entry)).collect()
    }
}

fn accepts<T: Ord>(accepted: &BTreeSet<T>, value: Option<&T>) -> bool {
    if accepted.is_empty() {
        return true;
    }
    value.is_some_and(|value| accepted.contains(value))
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}
