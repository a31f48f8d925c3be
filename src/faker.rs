//! The public faker facade.
//!
//! A [`Faker`] owns its random source, locale catalog, and format
//! registry. All draws go through the instance's [`RandomSource`], so two
//! fakers constructed with the same seed and driven through the same call
//! sequence produce identical output sequences.

use crate::config::FakerConfig;
use crate::error::FakerError;
use crate::generators::pattern::compile_anchored;
use crate::generators::uuid as uuid_gen;
use crate::generators::{self, datetime, email, identifier, network, password, primitives};
use crate::locale::{self, categories, FormatFn, LocaleCatalog, DEFAULT_LOCALE};
use crate::rng::RandomSource;
use chrono::{DateTime, Utc};
use fakegen_core::{FakeKind, FakeValue, GenerationOptions};
use std::collections::HashMap;
use ulid::Ulid;
use uuid::Uuid;

/// Fake-data generator with instance-owned seed state.
///
/// Draws mutate the internal PRNG, so concurrent use of one instance
/// requires external synchronization (or one instance per thread); the
/// `&mut self` receivers make this explicit.
pub struct Faker {
    rng: RandomSource,
    catalog: LocaleCatalog,
    formats: HashMap<&'static str, FormatFn>,
}

impl Faker {
    /// Construct a faker from configuration.
    ///
    /// An unknown locale falls back to `en_US` with a warning; absent seed
    /// means entropy-seeded.
    pub fn new(config: FakerConfig) -> Self {
        let catalog = LocaleCatalog::builtin(&config.locale).unwrap_or_else(|| {
            tracing::warn!(
                locale = %config.locale,
                "unknown locale, falling back to {DEFAULT_LOCALE}"
            );
            LocaleCatalog::builtin(DEFAULT_LOCALE).unwrap_or_default()
        });

        let rng = match config.seed {
            Some(seed) => RandomSource::from_seed(seed),
            None => RandomSource::from_entropy(),
        };

        Self::from_parts(rng, catalog)
    }

    /// Construct a seeded faker in the default locale.
    pub fn seeded(seed: u64) -> Self {
        Self::new(FakerConfig::seeded(seed))
    }

    /// Replace the locale catalog with a caller-supplied one.
    ///
    /// The format registry follows the new catalog's locale; locales
    /// without registered formats simply have none.
    pub fn with_catalog(mut self, catalog: LocaleCatalog) -> Self {
        let formats = locale::formats_for(&catalog.locale).iter().copied().collect();
        self.catalog = catalog;
        self.formats = formats;
        self
    }

    fn from_parts(rng: RandomSource, catalog: LocaleCatalog) -> Self {
        let formats = locale::formats_for(&catalog.locale).iter().copied().collect();
        Self {
            rng,
            catalog,
            formats,
        }
    }

    /// The active locale name.
    pub fn locale(&self) -> &str {
        &self.catalog.locale
    }

    /// Reset the seed state. Subsequent draws restart the sequence.
    pub fn reseed(&mut self, seed: u64) {
        self.rng.reseed(seed);
    }

    // ------------------------------------------------------------------
    // Kind dispatch
    // ------------------------------------------------------------------

    /// Generate a value of `kind` under `options`.
    pub fn generate(
        &mut self,
        kind: FakeKind,
        options: &GenerationOptions,
    ) -> Result<FakeValue, FakerError> {
        generators::generate_value(&mut self.rng, &self.catalog, kind, options)
    }

    /// Lazily generate `count` values of `kind`.
    ///
    /// The pattern option is validated up front; the iterator itself ends
    /// early if a draw fails.
    pub fn values(
        &mut self,
        kind: FakeKind,
        options: GenerationOptions,
        count: u64,
    ) -> Result<FakeValueIterator<'_>, FakerError> {
        if let Some(pattern) = &options.pattern {
            compile_anchored(pattern)?;
        }

        Ok(FakeValueIterator {
            faker: self,
            kind,
            options,
            remaining: count,
        })
    }

    // ------------------------------------------------------------------
    // Primitives
    // ------------------------------------------------------------------

    /// Uniform true/false.
    pub fn boolean(&mut self) -> bool {
        primitives::boolean(&mut self.rng)
    }

    /// Bounded integer; honors `min`/`max`/`size` and the `pattern` option.
    pub fn integer(&mut self, options: &GenerationOptions) -> Result<i64, FakerError> {
        self.generate(FakeKind::Integer, options)
            .map(|v| v.as_i64().unwrap_or_default())
    }

    /// Bounded float; default interval `[0, 1]`.
    pub fn float(&mut self, options: &GenerationOptions) -> f64 {
        primitives::float(&mut self.rng, options)
    }

    /// Bounded-length lowercase string; honors length and `pattern` options.
    pub fn string(&mut self, options: &GenerationOptions) -> Result<String, FakerError> {
        self.generate(FakeKind::String, options)
            .map(|v| v.render())
    }

    // ------------------------------------------------------------------
    // Composites
    // ------------------------------------------------------------------

    /// RFC-4122 UUID v4.
    pub fn uuid(&mut self) -> Uuid {
        uuid_gen::generate_uuid_v4(&mut self.rng)
    }

    /// ULID with engine-drawn timestamp and randomness.
    pub fn ulid(&mut self) -> Ulid {
        uuid_gen::generate_ulid(&mut self.rng)
    }

    /// URI with a scheme from {http, https, ftp, file, data}.
    pub fn uri(&mut self) -> String {
        network::generate_uri(&mut self.rng)
    }

    /// URL with a scheme from {http, https}.
    pub fn url(&mut self) -> String {
        network::generate_url(&mut self.rng)
    }

    /// Dotted-quad IPv4 address.
    pub fn ipv4(&mut self) -> String {
        network::generate_ipv4(&mut self.rng)
    }

    /// Colon-hex IPv6 address.
    pub fn ipv6(&mut self) -> String {
        network::generate_ipv6(&mut self.rng)
    }

    /// Two-label hostname.
    pub fn hostname(&mut self) -> String {
        network::generate_hostname(&mut self.rng)
    }

    /// Calendar date, `YYYY-MM-DD`.
    pub fn date(&mut self) -> String {
        datetime::generate_date(&mut self.rng)
    }

    /// RFC 3339 style date-time with a fixed-set offset.
    pub fn date_time(&mut self) -> String {
        datetime::generate_date_time(&mut self.rng)
    }

    /// Random instant between two timestamps (RFC 3339 or `YYYY-MM-DD`).
    pub fn date_time_between(&mut self, start: &str, end: &str) -> DateTime<Utc> {
        datetime::date_time_between(&mut self.rng, start, end)
    }

    /// Unix epoch seconds, bounded by `min`/`max`.
    pub fn timestamp(&mut self, options: &GenerationOptions) -> i64 {
        datetime::generate_timestamp(&mut self.rng, options)
    }

    /// Base64-encoded random bytes.
    pub fn byte(&mut self, options: &GenerationOptions) -> String {
        generators::bytes::generate_byte_string(&mut self.rng, options)
    }

    /// Raw byte blob.
    pub fn binary(&mut self, options: &GenerationOptions) -> Vec<u8> {
        generators::bytes::generate_binary(&mut self.rng, options)
    }

    /// Password containing all four character classes.
    pub fn password(&mut self, options: &GenerationOptions) -> String {
        password::generate_password(&mut self.rng, options)
    }

    /// Identifier; the `type` option selects the flavor.
    pub fn id(&mut self, options: &GenerationOptions) -> FakeValue {
        identifier::generate_id(&mut self.rng, options)
    }

    /// Email address; honors the `pattern` option.
    pub fn email(&mut self, options: &GenerationOptions) -> Result<String, FakerError> {
        Ok(email::generate_email(&mut self.rng, &self.catalog, options)?)
    }

    // ------------------------------------------------------------------
    // Locale-backed generators
    // ------------------------------------------------------------------

    /// Locale-drawn first name.
    pub fn first_name(&mut self) -> Result<String, FakerError> {
        self.pick(categories::FIRST_NAME)
    }

    /// Locale-drawn last name.
    pub fn last_name(&mut self) -> Result<String, FakerError> {
        self.pick(categories::LAST_NAME)
    }

    /// Locale-drawn `first last` pair.
    pub fn full_name(&mut self) -> Result<String, FakerError> {
        self.generate(FakeKind::FullName, &GenerationOptions::default())
            .map(|v| v.render())
    }

    /// Locale-drawn city.
    pub fn city(&mut self) -> Result<String, FakerError> {
        self.pick(categories::CITY)
    }

    /// Locale-drawn state or region.
    pub fn state(&mut self) -> Result<String, FakerError> {
        self.pick(categories::STATE)
    }

    /// Locale-drawn country.
    pub fn country(&mut self) -> Result<String, FakerError> {
        self.pick(categories::COUNTRY)
    }

    /// Synthesized street address.
    pub fn street_address(&mut self) -> Result<String, FakerError> {
        self.generate(FakeKind::StreetAddress, &GenerationOptions::default())
            .map(|v| v.render())
    }

    /// Synthesized company name.
    pub fn company(&mut self) -> Result<String, FakerError> {
        self.generate(FakeKind::Company, &GenerationOptions::default())
            .map(|v| v.render())
    }

    /// Locale-drawn word.
    pub fn word(&mut self) -> Result<String, FakerError> {
        self.pick(categories::WORD)
    }

    /// Sentence of 4-10 locale-drawn words, capitalized and terminated.
    pub fn sentence(&mut self) -> Result<String, FakerError> {
        let count = self.rng.len_in_range(4, 10);
        let mut words = Vec::with_capacity(count);
        for _ in 0..count {
            words.push(self.pick(categories::WORD)?);
        }

        let mut sentence = words.join(" ");
        if let Some(first) = sentence.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        sentence.push('.');
        Ok(sentence)
    }

    /// Uniform pick from a caller-supplied pool. `None` on an empty slice.
    pub fn one_of<'a, T>(&mut self, values: &'a [T]) -> Option<&'a T> {
        self.rng.pick(values)
    }

    /// Run a locale-specific format (e.g. `ssn` for `en_US`, `postcode`
    /// for `en_GB`).
    ///
    /// Formats not registered for the active locale are an error rather
    /// than a missing method.
    pub fn format(&mut self, name: &str) -> Result<String, FakerError> {
        match self.formats.get(name) {
            Some(format) => Ok(format(&mut self.rng)),
            None => Err(FakerError::UnsupportedForLocale {
                format: name.to_string(),
                locale: self.catalog.locale.clone(),
            }),
        }
    }

    fn pick(&mut self, category: &str) -> Result<String, FakerError> {
        self.catalog
            .pick(category, &mut self.rng)
            .map(|s| s.to_string())
            .ok_or_else(|| FakerError::UnknownCategory(category.to_string()))
    }

    // ------------------------------------------------------------------
    // Legacy surface
    // ------------------------------------------------------------------

    /// Length-only string generator, kept for pre-existing call sites.
    #[deprecated(since = "0.1.0", note = "Use string() with a length option instead")]
    pub fn string_of(&mut self, length: usize) -> String {
        primitives::string_from_alphabet(&mut self.rng, length, length, primitives::LOWERCASE)
    }

    /// Digit-count-only integer generator, kept for pre-existing call
    /// sites. `size=3` yields 100..=999.
    #[deprecated(since = "0.1.0", note = "Use integer() with the size option instead")]
    pub fn integer_of_size(&mut self, size: u32) -> i64 {
        let options = GenerationOptions {
            size: Some(size),
            ..GenerationOptions::default()
        };
        primitives::integer(&mut self.rng, &options)
    }
}

impl Default for Faker {
    fn default() -> Self {
        Self::new(FakerConfig::default())
    }
}

/// Iterator that lazily generates values.
pub struct FakeValueIterator<'a> {
    faker: &'a mut Faker,
    kind: FakeKind,
    options: GenerationOptions,
    remaining: u64,
}

impl Iterator for FakeValueIterator<'_> {
    type Item = FakeValue;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;

        // The pattern was validated up front, so this only fails on a
        // catalog gap; the iterator simply ends there.
        self.faker.generate(self.kind, &self.options).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}
