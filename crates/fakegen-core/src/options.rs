//! Per-call generation options.
//!
//! Every generator accepts a [`GenerationOptions`] and reads only the subset
//! of fields relevant to it. Absent fields resolve to documented per-kind
//! defaults inside the engine; the engine never fails on malformed *bounds*
//! (out-of-order ranges are swapped, not rejected). The only failure mode at
//! this layer is an invalid configuration *shape* - a non-numeric value
//! where a bound is expected - which surfaces as an [`OptionsError`] from
//! the JSON/YAML parse boundary.

use serde::{Deserialize, Serialize};

/// Error type for options parsing.
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    /// Error parsing JSON options
    #[error("Failed to parse JSON options: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error parsing YAML options
    #[error("Failed to parse YAML options: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Identifier flavor selected by the `type` option of the id generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdKind {
    /// Random integer in a wide range
    Numeric,

    /// Random alphanumeric string, length 8..=16
    String,

    /// UUID v4
    Uuid,

    /// ULID
    Ulid,

    /// Random alphanumeric string of fixed length (the default)
    Alphanumeric,
}

impl Default for IdKind {
    fn default() -> Self {
        Self::Alphanumeric
    }
}

/// Constraint set for a single generation call.
///
/// All fields are optional; each generator interprets only the fields it
/// recognizes and fills the rest from its documented defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Minimum value (inclusive) for numeric generators
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,

    /// Maximum value (inclusive) for numeric generators
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,

    /// Minimum length for string/byte generators
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    /// Maximum length for string/byte generators
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Pattern constraint, tested against the string form of candidates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Legacy digit count for integer generation (`size=3` means 100..=999)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,

    /// Identifier flavor for the id generator
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub id_type: Option<IdKind>,

    /// Exact length, pinning both length bounds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
}

impl GenerationOptions {
    /// Options constraining a numeric generator to `[min, max]`.
    pub fn range(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..Self::default()
        }
    }

    /// Options constraining a length-driven generator to `[min, max]`.
    pub fn length_range(min: usize, max: usize) -> Self {
        Self {
            min_length: Some(min),
            max_length: Some(max),
            ..Self::default()
        }
    }

    /// Options pinning a length-driven generator to an exact length.
    pub fn exact_length(length: usize) -> Self {
        Self {
            length: Some(length),
            ..Self::default()
        }
    }

    /// Options constraining output to match `pattern`.
    pub fn matching(pattern: impl Into<String>) -> Self {
        Self {
            pattern: Some(pattern.into()),
            ..Self::default()
        }
    }

    /// Parse options from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse options from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, OptionsError> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}
