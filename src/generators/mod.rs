//! Individual value generators and the kind dispatch.
//!
//! Each submodule holds the generation logic for one family of values;
//! [`generate_value`] routes a [`FakeKind`] to the right generator.

pub mod bytes;
pub mod datetime;
pub mod email;
pub mod identifier;
pub mod network;
pub mod password;
pub mod pattern;
pub mod primitives;
pub mod uuid;

use crate::error::FakerError;
use crate::generators::pattern::{compile_anchored, sample_matching};
use crate::locale::{categories, LocaleCatalog};
use crate::rng::RandomSource;
use fakegen_core::{FakeKind, FakeValue, GenerationOptions};

/// Generate a value of the given kind.
///
/// Locale-backed kinds draw from `catalog`; the rest are locale-free.
pub fn generate_value(
    rng: &mut RandomSource,
    catalog: &LocaleCatalog,
    kind: FakeKind,
    options: &GenerationOptions,
) -> Result<FakeValue, FakerError> {
    match kind {
        FakeKind::Boolean => Ok(FakeValue::Bool(primitives::boolean(rng))),

        FakeKind::Integer => integer_value(rng, options),

        FakeKind::Float => Ok(FakeValue::Float(primitives::float(rng, options))),

        FakeKind::String => string_value(rng, options),

        FakeKind::Uuid => Ok(FakeValue::Uuid(uuid::generate_uuid_v4(rng))),

        FakeKind::Uri => Ok(network::generate_uri(rng).into()),

        FakeKind::Url => Ok(network::generate_url(rng).into()),

        FakeKind::Date => Ok(datetime::generate_date(rng).into()),

        FakeKind::DateTime => Ok(datetime::generate_date_time(rng).into()),

        FakeKind::Timestamp => Ok(FakeValue::Int(datetime::generate_timestamp(rng, options))),

        FakeKind::Ipv4 => Ok(network::generate_ipv4(rng).into()),

        FakeKind::Ipv6 => Ok(network::generate_ipv6(rng).into()),

        FakeKind::Hostname => Ok(network::generate_hostname(rng).into()),

        FakeKind::Byte => Ok(bytes::generate_byte_string(rng, options).into()),

        FakeKind::Binary => Ok(FakeValue::Bytes(bytes::generate_binary(rng, options))),

        FakeKind::Password => Ok(password::generate_password(rng, options).into()),

        FakeKind::Id => Ok(identifier::generate_id(rng, options)),

        FakeKind::Email => Ok(email::generate_email(rng, catalog, options)?.into()),

        FakeKind::FirstName => pick_value(rng, catalog, categories::FIRST_NAME),

        FakeKind::LastName => pick_value(rng, catalog, categories::LAST_NAME),

        FakeKind::FullName => {
            let first = pick(rng, catalog, categories::FIRST_NAME)?;
            let last = pick(rng, catalog, categories::LAST_NAME)?;
            Ok(format!("{first} {last}").into())
        }

        FakeKind::City => pick_value(rng, catalog, categories::CITY),

        FakeKind::State => pick_value(rng, catalog, categories::STATE),

        FakeKind::Country => pick_value(rng, catalog, categories::COUNTRY),

        FakeKind::StreetAddress => {
            let number = rng.int_in_range(1, 9999);
            let name = capitalize(pick(rng, catalog, categories::WORD)?);
            let suffix = pick(rng, catalog, categories::STREET_SUFFIX)?;
            Ok(format!("{number} {name} {suffix}").into())
        }

        FakeKind::Company => {
            let name = pick(rng, catalog, categories::LAST_NAME)?;
            let suffix = pick(rng, catalog, categories::COMPANY_SUFFIX)?;
            Ok(format!("{name} {suffix}").into())
        }

        FakeKind::Word => pick_value(rng, catalog, categories::WORD),
    }
}

fn integer_value(
    rng: &mut RandomSource,
    options: &GenerationOptions,
) -> Result<FakeValue, FakerError> {
    let value = match &options.pattern {
        Some(pattern) => {
            let regex = compile_anchored(pattern)?;
            sample_matching(
                &regex,
                || primitives::integer(rng, options),
                |v| v.to_string(),
            )
        }
        None => primitives::integer(rng, options),
    };
    Ok(FakeValue::Int(value))
}

fn string_value(
    rng: &mut RandomSource,
    options: &GenerationOptions,
) -> Result<FakeValue, FakerError> {
    let value = match &options.pattern {
        Some(pattern) => {
            let regex = compile_anchored(pattern)?;
            sample_matching(&regex, || primitives::string(rng, options), |s| s.clone())
        }
        None => primitives::string(rng, options),
    };
    Ok(FakeValue::String(value))
}

fn pick<'a>(
    rng: &mut RandomSource,
    catalog: &'a LocaleCatalog,
    category: &str,
) -> Result<&'a str, FakerError> {
    catalog
        .pick(category, rng)
        .ok_or_else(|| FakerError::UnknownCategory(category.to_string()))
}

fn pick_value(
    rng: &mut RandomSource,
    catalog: &LocaleCatalog,
    category: &str,
) -> Result<FakeValue, FakerError> {
    pick(rng, catalog, category).map(FakeValue::from)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (RandomSource, LocaleCatalog) {
        (
            RandomSource::from_seed(42),
            LocaleCatalog::builtin("en_US").unwrap(),
        )
    }

    #[test]
    fn test_dispatch_covers_locale_kinds() {
        let (mut rng, catalog) = setup();

        for kind in [
            FakeKind::FirstName,
            FakeKind::LastName,
            FakeKind::FullName,
            FakeKind::City,
            FakeKind::State,
            FakeKind::Country,
            FakeKind::StreetAddress,
            FakeKind::Company,
            FakeKind::Word,
        ] {
            let value =
                generate_value(&mut rng, &catalog, kind, &GenerationOptions::default()).unwrap();
            assert!(!value.as_str().unwrap().is_empty(), "empty value for {kind}");
        }
    }

    #[test]
    fn test_full_name_has_two_parts() {
        let (mut rng, catalog) = setup();

        let value = generate_value(
            &mut rng,
            &catalog,
            FakeKind::FullName,
            &GenerationOptions::default(),
        )
        .unwrap();
        assert_eq!(value.as_str().unwrap().split(' ').count(), 2);
    }

    #[test]
    fn test_street_address_shape() {
        let (mut rng, catalog) = setup();

        let value = generate_value(
            &mut rng,
            &catalog,
            FakeKind::StreetAddress,
            &GenerationOptions::default(),
        )
        .unwrap();
        let address = value.as_str().unwrap().to_string();
        let number: i64 = address.split(' ').next().unwrap().parse().unwrap();
        assert!((1..=9999).contains(&number));
    }

    #[test]
    fn test_missing_category_is_an_error() {
        let mut rng = RandomSource::from_seed(42);
        let catalog = LocaleCatalog::new("empty", Default::default());

        let result = generate_value(
            &mut rng,
            &catalog,
            FakeKind::City,
            &GenerationOptions::default(),
        );
        assert!(matches!(result, Err(FakerError::UnknownCategory(_))));
    }

    #[test]
    fn test_string_with_pattern() {
        let (mut rng, catalog) = setup();
        let options = GenerationOptions {
            pattern: Some("[a-m]+".to_string()),
            ..GenerationOptions::length_range(1, 2)
        };

        let value = generate_value(&mut rng, &catalog, FakeKind::String, &options).unwrap();
        let s = value.as_str().unwrap();
        assert!(s.bytes().all(|b| (b'a'..=b'm').contains(&b)));
    }

    #[test]
    fn test_invalid_pattern_surfaces() {
        let (mut rng, catalog) = setup();
        let options = GenerationOptions::matching("[unclosed");

        let result = generate_value(&mut rng, &catalog, FakeKind::String, &options);
        assert!(matches!(result, Err(FakerError::InvalidPattern(_))));
    }

    #[test]
    fn test_deterministic_dispatch() {
        let catalog = LocaleCatalog::builtin("en_US").unwrap();
        let mut a = RandomSource::from_seed(42);
        let mut b = RandomSource::from_seed(42);
        let options = GenerationOptions::default();

        for kind in [FakeKind::Uuid, FakeKind::Email, FakeKind::StreetAddress] {
            assert_eq!(
                generate_value(&mut a, &catalog, kind, &options).unwrap(),
                generate_value(&mut b, &catalog, kind, &options).unwrap()
            );
        }
    }
}
