//! In-memory snapshot of every browsable entry.
//!
//! The store is built once from the fetched sources and never mutated. It is
//! strict about ids: an empty or duplicated id across sources fails the whole
//! snapshot, since selection membership is keyed by id.

use crate::catalog::{CatalogEntry, EntryId, load_entries_from_path};
use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Default, Clone)]
/// Ordered catalog entries plus an index keyed by id.
pub struct CatalogStore {
    entries: Vec<CatalogEntry>,
    by_id: BTreeMap<EntryId, usize>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
/// Number of entries carrying each facet value.
pub struct FacetSummary {
    pub categories: BTreeMap<String, usize>,
    pub brands: BTreeMap<String, usize>,
    pub states: BTreeMap<String, usize>,
}

impl CatalogStore {
    /// Build a snapshot by concatenating sources in the given order.
    pub fn from_sources<I>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = Vec<CatalogEntry>>,
    {
        let mut store = CatalogStore::default();
        for source in sources {
            for entry in source {
                store.insert(entry)?;
            }
        }
        Ok(store)
    }

    /// Load each payload file and concatenate them into one snapshot.
    pub fn load(paths: &[PathBuf]) -> Result<Self> {
        if paths.is_empty() {
            bail!("no catalog sources given");
        }
        let mut sources = Vec::with_capacity(paths.len());
        for path in paths {
            let entries = load_entries_from_path(path)?;
            debug!(path = %path.display(), entries = entries.len(), "loaded catalog source");
            sources.push(entries);
        }
        let store = Self::from_sources(sources).context("building catalog snapshot")?;
        info!(
            sources = paths.len(),
            entries = store.len(),
            "catalog snapshot ready"
        );
        Ok(store)
    }

    fn insert(&mut self, entry: CatalogEntry) -> Result<()> {
        if entry.id.0.trim().is_empty() {
            bail!("encountered entry '{}' with no id", entry.name);
        }
        if entry.name.trim().is_empty() {
            bail!("entry {} has an empty name", entry.id);
        }
        if self.by_id.contains_key(&entry.id) {
            bail!("duplicate entry id {}", entry.id);
        }
        self.by_id.insert(entry.id.clone(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    /// Resolve an entry by id.
    pub fn entry(&self, id: &EntryId) -> Option<&CatalogEntry> {
        self.by_id.get(id).map(|&idx| &self.entries[idx])
    }

    /// Entries in fetch order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count entries per category, brand and state value.
    pub fn facet_summary(&self) -> FacetSummary {
        let mut summary = FacetSummary::default();
        for entry in &self.entries {
            bump(&mut summary.categories, entry.category.as_str());
            if let Some(brand) = &entry.brand {
                bump(&mut summary.brands, brand.as_str());
            }
            if let Some(state) = &entry.state {
                bump(&mut summary.states, state.as_str());
            }
        }
        summary
    }
}

fn bump(map: &mut BTreeMap<String, usize>, key: &str) {
    *map.entry(key.to_string()).or_insert(0) += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, ItemState};

    fn equipments() -> Vec<CatalogEntry> {
        vec![
            CatalogEntry::new("1", "Furadeira", Category::Equipment)
                .with_brand("Bosch")
                .with_state(ItemState::New),
            CatalogEntry::new("2", "Serra", Category::Equipment)
                .with_brand("Makita")
                .with_state(ItemState::SemiNew),
        ]
    }

    fn items() -> Vec<CatalogEntry> {
        vec![
            CatalogEntry::new("item-1", "Escova", Category::Part).with_state(ItemState::New),
            CatalogEntry::new("item-2", "Óleo", Category::Product),
        ]
    }

    #[test]
    fn concatenates_sources_in_order() -> Result<()> {
        let store = CatalogStore::from_sources([equipments(), items()])?;
        let ids: Vec<&str> = store.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "item-1", "item-2"]);
        assert_eq!(
            store.entry(&EntryId::from("item-1")).map(|e| e.name.as_str()),
            Some("Escova")
        );
        assert!(store.entry(&EntryId::from("missing")).is_none());
        Ok(())
    }

    #[test]
    fn rejects_duplicate_ids_across_sources() {
        let clash = vec![CatalogEntry::new("2", "Outra Serra", Category::Equipment)];
        let err = CatalogStore::from_sources([equipments(), clash]).expect_err("duplicate id");
        assert!(err.to_string().contains("duplicate entry id 2"));
    }

    #[test]
    fn rejects_blank_ids_and_names() {
        let blank_id = vec![CatalogEntry::new(" ", "Serra", Category::Equipment)];
        assert!(CatalogStore::from_sources([blank_id]).is_err());
        let blank_name = vec![CatalogEntry::new("9", "", Category::Equipment)];
        assert!(CatalogStore::from_sources([blank_name]).is_err());
    }

    #[test]
    fn facet_summary_counts_present_values() -> Result<()> {
        let store = CatalogStore::from_sources([equipments(), items()])?;
        let summary = store.facet_summary();
        assert_eq!(summary.categories.get("Equipamento"), Some(&2));
        assert_eq!(summary.categories.get("Peça"), Some(&1));
        assert_eq!(summary.brands.len(), 2);
        assert_eq!(summary.states.get("Novo"), Some(&2));
        assert_eq!(summary.states.get("Semi-novo"), Some(&1));
        assert_eq!(summary.brands.get("Bosch"), Some(&1));
        Ok(())
    }

    #[test]
    fn load_requires_at_least_one_source() {
        assert!(CatalogStore::load(&[]).is_err());
    }
}
