//! Locale catalogs and the per-locale format registry.
//!
//! A [`LocaleCatalog`] is a read-only mapping from category name to an
//! ordered table of candidate strings, loaded once at construction and
//! shared by every generator that needs human-readable categorical values.
//! Draws are driven by the engine's [`RandomSource`], so seeded runs pick
//! deterministically.
//!
//! Locale-specific formats (national identifiers, postal codes) live in a
//! registry keyed by locale rather than appearing and disappearing from the
//! method surface: requesting a format the active locale does not support
//! is a clear error, not a missing method.

pub mod en_gb;
pub mod en_us;

use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// The default locale, used as the fallback for unknown requests.
pub const DEFAULT_LOCALE: &str = "en_US";

/// Category names used by the built-in catalogs.
pub mod categories {
    pub const FIRST_NAME: &str = "first_name";
    pub const LAST_NAME: &str = "last_name";
    pub const CITY: &str = "city";
    pub const STATE: &str = "state";
    pub const COUNTRY: &str = "country";
    pub const STREET_SUFFIX: &str = "street_suffix";
    pub const COMPANY_SUFFIX: &str = "company_suffix";
    pub const WORD: &str = "word";
    pub const FREE_EMAIL_DOMAIN: &str = "free_email_domain";
}

/// Error type for catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Error reading a catalog file
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// A locale-specific format generator.
pub type FormatFn = fn(&mut RandomSource) -> String;

/// Read-only locale data tables, keyed by category name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocaleCatalog {
    /// Locale name, e.g. `en_US`
    pub locale: String,

    /// Tables keyed by category name
    tables: HashMap<String, Vec<String>>,
}

impl LocaleCatalog {
    /// Create a catalog from explicit tables.
    pub fn new(locale: impl Into<String>, tables: HashMap<String, Vec<String>>) -> Self {
        Self {
            locale: locale.into(),
            tables,
        }
    }

    /// Built-in catalog for a supported locale, if any.
    pub fn builtin(locale: &str) -> Option<Self> {
        match locale {
            "en_US" => Some(Self::new("en_US", en_us::tables())),
            "en_GB" => Some(Self::new("en_GB", en_gb::tables())),
            _ => None,
        }
    }

    /// Load a catalog from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a catalog from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// The table for a category, if present.
    pub fn table(&self, category: &str) -> Option<&[String]> {
        self.tables.get(category).map(|t| t.as_slice())
    }

    /// All category names in this catalog.
    pub fn category_names(&self) -> Vec<&str> {
        self.tables.keys().map(|k| k.as_str()).collect()
    }

    /// Pick a uniformly random entry from a category's table.
    ///
    /// Returns `None` when the category is absent or its table is empty.
    pub fn pick<'a>(&'a self, category: &str, rng: &mut RandomSource) -> Option<&'a str> {
        let table = self.tables.get(category)?;
        rng.pick(table).map(|s| s.as_str())
    }
}

/// The locales with built-in catalogs and format registries.
pub fn supported_locales() -> &'static [&'static str] {
    &["en_US", "en_GB"]
}

/// Format registry entries for a locale.
///
/// Unknown locales have no formats; the caller decides whether that is an
/// error (the facade reports `UnsupportedForLocale`).
pub fn formats_for(locale: &str) -> &'static [(&'static str, FormatFn)] {
    match locale {
        "en_US" => en_us::FORMATS,
        "en_GB" => en_gb::FORMATS,
        _ => &[],
    }
}
