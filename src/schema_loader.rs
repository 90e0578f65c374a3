//! Bundled JSON Schema for catalog entry payloads.
//!
//! Both fetch sources (equipments and items) are checked against the same
//! entry schema before deserialization so malformed records are reported with
//! their position instead of surfacing as a single serde error.

use anyhow::{Result, anyhow};
use jsonschema::JSONSchema;
use serde_json::Value;

/// Path of the bundled schema, relative to the crate root.
const ENTRY_SCHEMA_PATH: &str = "schema/catalog_entry.schema.json";

const ENTRY_SCHEMA_SOURCE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/schema/catalog_entry.schema.json"
));

/// Compiled validator for a single catalog entry object.
pub(crate) struct EntrySchema {
    compiled: JSONSchema,
}

impl EntrySchema {
    /// Compile the bundled schema.
    pub(crate) fn bundled() -> Result<Self> {
        let raw: Value = serde_json::from_str(ENTRY_SCHEMA_SOURCE)
            .map_err(|err| anyhow!("parsing {ENTRY_SCHEMA_PATH}: {err}"))?;
        let compiled = JSONSchema::compile(&raw)
            .map_err(|err| anyhow!("compiling {ENTRY_SCHEMA_PATH}: {err}"))?;
        Ok(Self { compiled })
    }

    /// Validate one entry, returning every violation as `path: message`.
    pub(crate) fn violations(&self, entry: &Value) -> Vec<String> {
        match self.compiled.validate(entry) {
            Ok(()) => Vec::new(),
            Err(errors) => errors
                .map(|err| {
                    let path = err.instance_path.to_string();
                    if path.is_empty() {
                        err.to_string()
                    } else {
                        format!("{path}: {err}")
                    }
                })
                .collect(),
        }
    }
}
