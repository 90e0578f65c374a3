//! Plain-text rendering of the storefront for terminals and pipelines.
//!
//! Renderers write into any `fmt::Write` so the CLI can print the result and
//! tests can inspect it as a `String`.

use crate::catalog::{CatalogEntry, CatalogStore, Category, FacetSummary, ItemState};
use crate::storefront::StorefrontState;
use std::collections::BTreeMap;
use std::fmt;

const MAX_DETAIL_CHARS: usize = 60;

/// Header plus one line per visible entry.
pub fn render_listing(
    store: &CatalogStore,
    state: &StorefrontState,
    writer: &mut impl fmt::Write,
) -> fmt::Result {
    let visible = state.visible(store);
    writeln!(writer, "vitrine")?;
    writeln!(writer, "=======")?;
    writeln!(writer, "entries  : {}", store.len())?;
    writeln!(writer, "visible  : {}", visible.len())?;
    writeln!(
        writer,
        "filters  : {}",
        if state.filter.is_filtering() {
            "active"
        } else {
            "none"
        }
    )?;
    if !state.filter.query.is_empty() {
        writeln!(writer, "query    : {}", state.filter.query)?;
    }
    writeln!(writer, "selected : {}", state.selection.len())?;
    writeln!(writer)?;

    if visible.is_empty() {
        writeln!(writer, "(no entries match)")?;
        return Ok(());
    }
    for entry in visible {
        let marker = if state.selection.contains(&entry.id) {
            "[x]"
        } else {
            "[ ]"
        };
        render_entry(marker, entry, writer)?;
    }
    Ok(())
}

fn render_entry(marker: &str, entry: &CatalogEntry, writer: &mut impl fmt::Write) -> fmt::Result {
    writeln!(writer, "{} {:<8} {}", marker, entry.id, entry.name)?;
    let mut facets = vec![entry.category.as_str()];
    if let Some(brand) = &entry.brand {
        facets.push(brand.as_str());
    }
    if let Some(state) = &entry.state {
        facets.push(state.as_str());
    }
    writeln!(writer, "    {}", facets.join(" | "))?;
    if let Some(detail) = entry.detail.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
        writeln!(writer, "    {}", truncate(detail))?;
    }
    Ok(())
}

/// Facet counts, listing the panel's known values even when absent.
pub fn render_facets(summary: &FacetSummary, writer: &mut impl fmt::Write) -> fmt::Result {
    let categories = with_known(
        &summary.categories,
        Category::known().iter().map(Category::as_str),
    );
    let states = with_known(&summary.states, ItemState::known().iter().map(ItemState::as_str));

    writeln!(writer, "category : {}", format_counts(&categories, "none"))?;
    writeln!(writer, "brand    : {}", format_counts(&summary.brands, "none"))?;
    writeln!(writer, "state    : {}", format_counts(&states, "none"))?;
    Ok(())
}

fn with_known<'a>(
    counts: &BTreeMap<String, usize>,
    known: impl Iterator<Item = &'a str>,
) -> BTreeMap<String, usize> {
    let mut merged = counts.clone();
    for label in known {
        merged.entry(label.to_string()).or_insert(0);
    }
    merged
}

fn format_counts(map: &BTreeMap<String, usize>, empty_label: &str) -> String {
    if map.is_empty() {
        return empty_label.to_string();
    }
    map.iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join(", ")
}

fn truncate(line: &str) -> String {
    if line.chars().count() <= MAX_DETAIL_CHARS {
        return line.to_string();
    }
    let mut shortened: String = line.chars().take(MAX_DETAIL_CHARS - 1).collect();
    shortened.push('…');
    shortened
}
