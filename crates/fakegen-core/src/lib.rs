//! Core types for the fakegen data generation library.
//!
//! This crate provides the foundational types shared by the generation
//! engine and by downstream consumers:
//!
//! - [`FakeValue`] - Raw generated values before any rendering
//! - [`FakeKind`] - Category tag selecting a generator
//! - [`GenerationOptions`] - Per-call constraint set
//!
//! # Architecture
//!
//! The fakegen-core crate sits at the foundation of the library:
//!
//! ```text
//! fakegen-core (this crate)
//!    │
//!    └─── fakegen  (engine + facade, depends on fakegen-core for types)
//! ```
//!
//! # Example
//!
//! ```rust
//! use fakegen_core::{FakeValue, GenerationOptions};
//!
//! let options = GenerationOptions::range(1, 100);
//! assert_eq!(options.min, Some(1));
//!
//! let value = FakeValue::Int(42);
//! assert_eq!(value.as_i64(), Some(42));
//! ```

pub mod kind;
pub mod options;
pub mod values;

// Re-exports for convenience
pub use kind::FakeKind;
pub use options::{GenerationOptions, IdKind, OptionsError};
pub use values::FakeValue;
