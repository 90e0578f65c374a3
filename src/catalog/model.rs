//! Catalog entries as delivered by the equipment and item services.
//!
//! The payload shapes differ slightly between sources (equipments carry a
//! `model`, items a `description`; ids may be integers or strings). They are
//! normalized into a single `CatalogEntry` so the filter and selection code
//! never has to care which service an entry came from.

use crate::catalog::identity::{Brand, Category, EntryId, ItemState};
use crate::schema_loader::EntrySchema;
use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawEntry")]
/// One browsable equipment or item.
pub struct CatalogEntry {
    pub id: EntryId,
    pub name: String,
    pub category: Category,
    pub brand: Option<Brand>,
    pub state: Option<ItemState>,
    /// Image URL; opaque to the engine.
    pub image_url: Option<String>,
    /// Secondary display line: the equipment model or the item description.
    pub detail: Option<String>,
}

#[derive(Deserialize)]
struct RawEntry {
    id: EntryId,
    name: String,
    category: Category,
    #[serde(default)]
    brand: Option<Brand>,
    #[serde(default)]
    state: Option<ItemState>,
    #[serde(default)]
    image: Option<RawImage>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    detail: Option<String>,
}

#[derive(Deserialize)]
struct RawImage {
    #[serde(default)]
    url: Option<String>,
}

impl From<RawEntry> for CatalogEntry {
    fn from(raw: RawEntry) -> Self {
        let detail = non_empty(raw.model)
            .or_else(|| non_empty(raw.description))
            .or_else(|| non_empty(raw.detail));
        let image_url = raw.image.and_then(|image| image.url).or(raw.image_url);
        CatalogEntry {
            id: raw.id,
            name: raw.name,
            category: raw.category,
            brand: raw.brand,
            state: raw.state,
            image_url,
            detail,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

impl CatalogEntry {
    /// Minimal entry, mostly useful for tests and fixtures.
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: Category) -> Self {
        CatalogEntry {
            id: EntryId(id.into()),
            name: name.into(),
            category,
            brand: None,
            state: None,
            image_url: None,
            detail: None,
        }
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(Brand(brand.into()));
        self
    }

    pub fn with_state(mut self, state: ItemState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Read one source payload from disk.
///
/// Accepts a JSON array of entries, a single entry object, or NDJSON. Every
/// record is checked against the bundled entry schema first; all violations
/// in the file are reported together.
pub fn load_entries_from_path(path: &Path) -> Result<Vec<CatalogEntry>> {
    let data =
        fs::read_to_string(path).with_context(|| format!("reading catalog {}", path.display()))?;
    let records =
        split_records(&data).with_context(|| format!("parsing catalog {}", path.display()))?;

    let schema = EntrySchema::bundled()?;
    let mut problems = Vec::new();
    for (idx, record) in records.iter().enumerate() {
        for violation in schema.violations(record) {
            problems.push(format!("entry #{}: {violation}", idx + 1));
        }
    }
    if !problems.is_empty() {
        bail!(
            "catalog {} failed schema validation:\n{}",
            path.display(),
            problems.join("\n")
        );
    }

    records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| {
            serde_json::from_value(record)
                .with_context(|| format!("decoding entry #{} of {}", idx + 1, path.display()))
        })
        .collect()
}

fn split_records(input: &str) -> Result<Vec<Value>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return match value {
            Value::Array(items) => Ok(items),
            Value::Object(_) => Ok(vec![value]),
            _ => bail!("unsupported JSON input; expected object or array"),
        };
    }

    let mut records = Vec::new();
    for (idx, line) in trimmed.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(line)
            .map_err(|err| anyhow!("line {}: {err}", idx + 1))?;
        records.push(value);
    }
    Ok(records)
}
