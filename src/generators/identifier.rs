//! Identifier generator.

use crate::generators::primitives::{self, ALPHANUMERIC};
use crate::generators::uuid::{generate_ulid, generate_uuid_v4};
use crate::rng::RandomSource;
use fakegen_core::{FakeValue, GenerationOptions, IdKind};

/// Default length for alphanumeric identifiers.
const ALPHANUMERIC_ID_LENGTH: usize = 10;

/// Generate an identifier.
///
/// The `type` option selects the flavor:
/// - `numeric` - bounded integer, default wide range
/// - `string` - alphanumeric string of length 8..=16
/// - `uuid` - UUID v4
/// - `ulid` - ULID
/// - default (`alphanumeric`) - alphanumeric string of fixed length 10, or
///   the caller-given `length`
pub fn generate_id(rng: &mut RandomSource, options: &GenerationOptions) -> FakeValue {
    match options.id_type.unwrap_or_default() {
        IdKind::Numeric => FakeValue::Int(primitives::integer(rng, options)),
        IdKind::String => {
            FakeValue::String(primitives::string_from_alphabet(rng, 8, 16, ALPHANUMERIC))
        }
        IdKind::Uuid => FakeValue::Uuid(generate_uuid_v4(rng)),
        IdKind::Ulid => FakeValue::String(generate_ulid(rng).to_string()),
        IdKind::Alphanumeric => {
            let length = options.length.unwrap_or(ALPHANUMERIC_ID_LENGTH);
            FakeValue::String(primitives::string_from_alphabet(
                rng,
                length,
                length,
                ALPHANUMERIC,
            ))
        }
    }
}
