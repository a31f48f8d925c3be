//! Faker construction configuration.

use crate::locale::DEFAULT_LOCALE;
use serde::{Deserialize, Serialize};

/// Options recognized at [`Faker`](crate::Faker) construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FakerConfig {
    /// Locale selecting the built-in data catalog and format registry.
    ///
    /// Unknown locales fall back to `en_US` (non-fatal).
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Seed for reproducible output. Absent means entropy-seeded.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for FakerConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            seed: None,
        }
    }
}

impl FakerConfig {
    /// Config for a seeded faker in the default locale.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Config for a specific locale, entropy-seeded.
    pub fn for_locale(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            seed: None,
        }
    }
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}
