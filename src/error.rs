//! Error type for the generation engine.
//!
//! Malformed *bounds* never error - they are swapped or defaulted inside
//! the generators. The failures below are configuration-shape problems
//! (bad pattern, bad options document, bad catalog file) or a request the
//! active locale cannot serve.

use crate::locale::CatalogError;
use fakegen_core::OptionsError;

/// Error type for generation operations.
#[derive(Debug, thiserror::Error)]
pub enum FakerError {
    /// Pattern option failed to compile as a regex
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Locale-specific format not registered for the active locale
    #[error("Format '{format}' is not supported for locale '{locale}'")]
    UnsupportedForLocale {
        /// Requested format name
        format: String,
        /// Active locale
        locale: String,
    },

    /// Category missing from the locale catalog
    #[error("Category not found in locale catalog: {0}")]
    UnknownCategory(String),

    /// Catalog loading failed
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Options parsing failed
    #[error("Options error: {0}")]
    Options(#[from] OptionsError),
}
