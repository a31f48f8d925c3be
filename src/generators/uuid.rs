//! UUID and ULID generators.
//!
//! Both are built from engine-drawn bytes rather than the crates' own
//! entropy paths, so seeded runs stay reproducible.

use crate::rng::RandomSource;
use ulid::Ulid;
use uuid::Uuid;

/// Generate a random RFC-4122 UUID v4 from the engine's random source.
pub fn generate_uuid_v4(rng: &mut RandomSource) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);

    // Set version (4) and variant (RFC 4122) bits
    bytes[6] = (bytes[6] & 0x0f) | 0x40; // Version 4
    bytes[8] = (bytes[8] & 0x3f) | 0x80; // Variant RFC 4122

    Uuid::from_bytes(bytes)
}

/// Generate a ULID with engine-drawn timestamp and randomness.
///
/// The timestamp component is drawn from the same non-negative epoch window
/// the timestamp generator uses, so seeded runs are reproducible and the
/// lexicographic ordering property still reflects the drawn instant.
pub fn generate_ulid(rng: &mut RandomSource) -> Ulid {
    let millis = rng.int_in_range(0, i32::MAX as i64) as u64 * 1000;

    let mut random_bytes = [0u8; 10];
    rng.fill_bytes(&mut random_bytes);
    let mut random: u128 = 0;
    for byte in random_bytes {
        random = (random << 8) | byte as u128;
    }

    Ulid::from_parts(millis, random)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_version_and_variant() {
        let mut rng = RandomSource::from_seed(42);
        let uuid = generate_uuid_v4(&mut rng);

        assert_eq!(uuid.get_version_num(), 4);
        let variant_nibble = uuid.as_bytes()[8] >> 4;
        assert!((0x8..=0xb).contains(&variant_nibble));
    }

    #[test]
    fn test_uuid_string_shape() {
        let mut rng = RandomSource::from_seed(42);
        let rendered = generate_uuid_v4(&mut rng).to_string();

        assert_eq!(rendered.len(), 36);
        assert_eq!(rendered.matches('-').count(), 4);
        assert_eq!(rendered.as_bytes()[14], b'4');
    }

    #[test]
    fn test_uuid_uniqueness() {
        let mut rng = RandomSource::from_seed(42);
        let first = generate_uuid_v4(&mut rng);
        let second = generate_uuid_v4(&mut rng);
        assert_ne!(first, second);
    }

    #[test]
    fn test_uuid_deterministic() {
        let mut a = RandomSource::from_seed(42);
        let mut b = RandomSource::from_seed(42);

        assert_eq!(generate_uuid_v4(&mut a), generate_uuid_v4(&mut b));
    }

    #[test]
    fn test_ulid_deterministic() {
        let mut a = RandomSource::from_seed(42);
        let mut b = RandomSource::from_seed(42);

        assert_eq!(generate_ulid(&mut a), generate_ulid(&mut b));
    }

    #[test]
    fn test_ulid_string_length() {
        let mut rng = RandomSource::from_seed(42);
        assert_eq!(generate_ulid(&mut rng).to_string().len(), 26);
    }
}
