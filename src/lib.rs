//! Seeded fake-data generation for test fixtures, database bootstrapping,
//! and anonymization.
//!
//! The engine produces pseudo-random values for a requested category
//! (name, email, integer, string, date, network address, identifier, ...)
//! under optional constraints, reproducibly when a seed is given. All
//! entropy flows through one instance-owned [`RandomSource`]; there is no
//! process-wide generator state.
//!
//! # Architecture
//!
//! ```text
//! FakerConfig { locale, seed }
//!        │
//!        ▼
//! ┌──────────────────┐
//! │      Faker       │
//! │                  │
//! │  - rng           │──▶ composite generators (uuid, dates, network,
//! │  - catalog       │    passwords, identifiers, ...)
//! │  - formats       │──▶ pattern constraints (rejection sampling)
//! └──────────────────┘──▶ bounded primitives (int, string, bool)
//! ```
//!
//! # Example
//!
//! ```rust
//! use fakegen::{Faker, GenerationOptions};
//!
//! let mut faker = Faker::seeded(42);
//!
//! let age = faker.integer(&GenerationOptions::range(18, 80)).unwrap();
//! assert!((18..=80).contains(&age));
//!
//! let email = faker.email(&GenerationOptions::default()).unwrap();
//! assert!(email.contains('@'));
//!
//! // Same seed, same sequence
//! let mut replay = Faker::seeded(42);
//! assert_eq!(replay.integer(&GenerationOptions::range(18, 80)).unwrap(), age);
//! ```
//!
//! # Generators
//!
//! - `boolean`, `integer`, `float`, `string` - bounded primitives
//! - `uuid`, `ulid`, `id` - identifiers
//! - `date`, `date_time`, `date_time_between`, `timestamp` - instants
//! - `ipv4`, `ipv6`, `hostname`, `uri`, `url` - network shapes
//! - `byte`, `binary` - blobs
//! - `password` - all four character classes guaranteed
//! - `email`, names and places - locale-backed values
//! - locale formats (`ssn`, `zip_code`, `postcode`, ...) via a per-locale
//!   registry
//!
//! Pattern options are honored by rejection sampling with a bounded retry
//! budget; see [`generators::pattern`] for the exact contract.

pub mod config;
pub mod error;
pub mod faker;
pub mod generators;
pub mod locale;
pub mod rng;

// Re-exports for convenience
pub use config::FakerConfig;
pub use error::FakerError;
pub use faker::{FakeValueIterator, Faker};
pub use locale::{CatalogError, LocaleCatalog};
pub use rng::RandomSource;

// Core types live in fakegen-core; re-exported so callers need one import.
pub use fakegen_core::{FakeKind, FakeValue, GenerationOptions, IdKind, OptionsError};
