//! Byte-blob generators: raw binary and base64-encoded strings.

use crate::generators::primitives;
use crate::rng::RandomSource;
use base64::{engine::general_purpose::STANDARD, Engine};
use fakegen_core::GenerationOptions;

/// Default raw length interval for the base64 byte generator.
const BYTE_DEFAULT_MIN: usize = 16;
const BYTE_DEFAULT_MAX: usize = 32;

/// Default length interval for the binary generator.
const BINARY_DEFAULT_MIN: usize = 100;
const BINARY_DEFAULT_MAX: usize = 1000;

/// Generate a raw byte blob with length in `[min_length, max_length]`,
/// default 100..=1000.
pub fn generate_binary(rng: &mut RandomSource, options: &GenerationOptions) -> Vec<u8> {
    let (min, max) = primitives::length_bounds(options, BINARY_DEFAULT_MIN, BINARY_DEFAULT_MAX);
    let length = rng.len_in_range(min, max);

    let mut bytes = vec![0u8; length];
    rng.fill_bytes(&mut bytes);
    bytes
}

/// Generate a base64-encoded byte string.
///
/// The raw run length is drawn from `[min_length, max_length]` (default
/// 16..=32) before encoding, so the returned string is roughly 4/3 longer.
pub fn generate_byte_string(rng: &mut RandomSource, options: &GenerationOptions) -> String {
    let (min, max) = primitives::length_bounds(options, BYTE_DEFAULT_MIN, BYTE_DEFAULT_MAX);
    let length = rng.len_in_range(min, max);

    let mut bytes = vec![0u8; length];
    rng.fill_bytes(&mut bytes);
    STANDARD.encode(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_default_length() {
        let mut rng = RandomSource::from_seed(42);

        for _ in 0..20 {
            let blob = generate_binary(&mut rng, &GenerationOptions::default());
            assert!((100..=1000).contains(&blob.len()));
        }
    }

    #[test]
    fn test_binary_exact_length() {
        let mut rng = RandomSource::from_seed(42);
        let options = GenerationOptions::length_range(50, 50);

        let blob = generate_binary(&mut rng, &options);
        assert_eq!(blob.len(), 50);
    }

    #[test]
    fn test_byte_string_decodes_to_default_lengths() {
        let mut rng = RandomSource::from_seed(42);

        for _ in 0..20 {
            let encoded = generate_byte_string(&mut rng, &GenerationOptions::default());
            let decoded = STANDARD.decode(&encoded).unwrap();
            assert!((16..=32).contains(&decoded.len()));
        }
    }

    #[test]
    fn test_byte_string_respects_bounds() {
        let mut rng = RandomSource::from_seed(42);
        let options = GenerationOptions::length_range(8, 8);

        let encoded = generate_byte_string(&mut rng, &options);
        let decoded = STANDARD.decode(&encoded).unwrap();
        assert_eq!(decoded.len(), 8);
    }

    #[test]
    fn test_deterministic_generation() {
        let mut a = RandomSource::from_seed(42);
        let mut b = RandomSource::from_seed(42);
        let options = GenerationOptions::default();

        assert_eq!(
            generate_binary(&mut a, &options),
            generate_binary(&mut b, &options)
        );
        assert_eq!(
            generate_byte_string(&mut a, &options),
            generate_byte_string(&mut b, &options)
        );
    }
}
