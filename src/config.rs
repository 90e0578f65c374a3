//! Environment-driven settings shared by the binaries.
//!
//! Centralizes the variable names and defaults so the CLI flags only need to
//! override what the environment already provides.

use crate::catalog::DEFAULT_CATALOG_PATHS;
use crate::split_list;
use std::env;
use std::path::PathBuf;

/// Destination phone used for stock inquiries.
pub const DEFAULT_PHONE: &str = "+5547992531701";

pub const ENV_PHONE: &str = "VITRINE_PHONE";
pub const ENV_CATALOGS: &str = "VITRINE_CATALOGS";
pub const ENV_LOG: &str = "VITRINE_LOG";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub phone: String,
    pub catalog_paths: Vec<PathBuf>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            phone: DEFAULT_PHONE.to_string(),
            catalog_paths: DEFAULT_CATALOG_PATHS.iter().map(PathBuf::from).collect(),
        }
    }
}

impl StorefrontConfig {
    /// Read `VITRINE_PHONE` and `VITRINE_CATALOGS`, falling back to defaults
    /// for unset or blank values.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(phone) = lookup(ENV_PHONE).filter(|v| !v.trim().is_empty()) {
            config.phone = phone.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_CATALOGS) {
            let paths = split_list(&raw);
            if !paths.is_empty() {
                config.catalog_paths = paths.into_iter().map(PathBuf::from).collect();
            }
        }
        config
    }

    /// Replace the configured values with explicit overrides, when given.
    pub fn with_overrides(mut self, phone: Option<String>, catalogs: Vec<PathBuf>) -> Self {
        if let Some(phone) = phone.filter(|p| !p.trim().is_empty()) {
            self.phone = phone;
        }
        if !catalogs.is_empty() {
            self.catalog_paths = catalogs;
        }
        self
    }
}
