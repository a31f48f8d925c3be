//! Bounded primitive generators: integers, strings, booleans, floats.
//!
//! These are the building blocks every composite generator is assembled
//! from. All bound handling is non-failing: inverted ranges are swapped and
//! absent options resolve to the documented defaults.

use crate::rng::RandomSource;
use fakegen_core::GenerationOptions;

/// Lowercase ASCII letters, the default string alphabet.
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Uppercase ASCII letters.
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// ASCII digits.
pub const DIGITS: &[u8] = b"0123456789";

/// Lowercase, uppercase, and digits.
pub const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Lowercase hex digits.
pub const HEX_LOWER: &[u8] = b"0123456789abcdef";

/// Default integer range when no bounds are supplied.
const DEFAULT_INT_MIN: i64 = 0;
const DEFAULT_INT_MAX: i64 = i32::MAX as i64;

/// Widest digit count representable in an i64 via `10^size - 1`.
const MAX_SIZE_DIGITS: u32 = 18;

/// Resolve the effective `[min, max]` interval for integer generation.
///
/// Resolution order:
/// - `size` (digit count) wins: `size=3` means `100..=999`. Counts are
///   clamped to `1..=18` so the upper bound stays inside `i64`.
/// - only `min` given: `max = min + 100`
/// - only `max` given: `min = 1`
/// - neither: `0..=i32::MAX`
pub fn integer_bounds(options: &GenerationOptions) -> (i64, i64) {
    if let Some(size) = options.size {
        let digits = size.clamp(1, MAX_SIZE_DIGITS);
        let lo = 10_i64.pow(digits - 1);
        let hi = 10_i64.pow(digits) - 1;
        // size=1 covers single digits including zero
        return if digits == 1 { (0, 9) } else { (lo, hi) };
    }

    match (options.min, options.max) {
        (Some(min), Some(max)) => (min, max),
        (Some(min), None) => (min, min.saturating_add(100)),
        (None, Some(max)) => (1, max),
        (None, None) => (DEFAULT_INT_MIN, DEFAULT_INT_MAX),
    }
}

/// Generate a bounded integer per [`integer_bounds`].
pub fn integer(rng: &mut RandomSource, options: &GenerationOptions) -> i64 {
    let (min, max) = integer_bounds(options);
    rng.int_in_range(min, max)
}

/// Generate a bounded float.
///
/// `min`/`max` options are reused as float bounds; the default interval is
/// `[0, 1]`.
pub fn float(rng: &mut RandomSource, options: &GenerationOptions) -> f64 {
    let (min, max) = match (options.min, options.max) {
        (None, None) => (0.0, 1.0),
        (min, max) => (
            min.unwrap_or(0) as f64,
            max.unwrap_or_else(|| min.unwrap_or(0).saturating_add(100)) as f64,
        ),
    };
    rng.float_in_range(min, max)
}

/// Resolve the effective `[min, max]` length interval.
///
/// `length` pins both ends. A lone `min_length` keeps the default upper
/// bound unless it exceeds it (then the length is exact); symmetrically for
/// a lone `max_length`. Out-of-order pairs are swapped.
pub fn length_bounds(
    options: &GenerationOptions,
    default_min: usize,
    default_max: usize,
) -> (usize, usize) {
    if let Some(length) = options.length {
        return (length, length);
    }

    match (options.min_length, options.max_length) {
        (Some(min), Some(max)) if min <= max => (min, max),
        (Some(min), Some(max)) => (max, min),
        (Some(min), None) => (min, min.max(default_max)),
        (None, Some(max)) => (default_min.min(max), max),
        (None, None) => (default_min, default_max),
    }
}

/// Generate a string of bounded length over `alphabet`.
///
/// Length is uniform in the resolved interval; each character is drawn
/// independently and uniformly. An empty alphabet yields an empty string.
pub fn string_from_alphabet(
    rng: &mut RandomSource,
    min_length: usize,
    max_length: usize,
    alphabet: &[u8],
) -> String {
    if alphabet.is_empty() {
        return String::new();
    }

    let length = rng.len_in_range(min_length, max_length);
    let mut out = String::with_capacity(length);
    for _ in 0..length {
        let byte = *rng.pick(alphabet).unwrap_or(&b'a');
        out.push(byte as char);
    }
    out
}

/// Generate a lowercase string with the default length interval `[10, 10]`.
pub fn string(rng: &mut RandomSource, options: &GenerationOptions) -> String {
    let (min_length, max_length) = length_bounds(options, 10, 10);
    string_from_alphabet(rng, min_length, max_length, LOWERCASE)
}

/// Approximately uniform true/false.
pub fn boolean(rng: &mut RandomSource) -> bool {
    rng.boolean()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_bounds_defaults() {
        let options = GenerationOptions::default();
        assert_eq!(integer_bounds(&options), (0, i32::MAX as i64));
    }

    #[test]
    fn test_integer_bounds_min_only() {
        let options = GenerationOptions {
            min: Some(50),
            ..GenerationOptions::default()
        };
        assert_eq!(integer_bounds(&options), (50, 150));
    }

    #[test]
    fn test_integer_bounds_max_only() {
        let options = GenerationOptions {
            max: Some(9),
            ..GenerationOptions::default()
        };
        assert_eq!(integer_bounds(&options), (1, 9));
    }

    #[test]
    fn test_integer_bounds_size() {
        let options = GenerationOptions {
            size: Some(3),
            ..GenerationOptions::default()
        };
        assert_eq!(integer_bounds(&options), (100, 999));
    }

    #[test]
    fn test_integer_bounds_size_one() {
        let options = GenerationOptions {
            size: Some(1),
            ..GenerationOptions::default()
        };
        assert_eq!(integer_bounds(&options), (0, 9));
    }

    #[test]
    fn test_integer_bounds_size_clamped() {
        let options = GenerationOptions {
            size: Some(40),
            ..GenerationOptions::default()
        };
        let (lo, hi) = integer_bounds(&options);
        assert_eq!(lo, 10_i64.pow(17));
        assert_eq!(hi, 10_i64.pow(18) - 1);
    }

    #[test]
    fn test_integer_in_range() {
        let mut rng = RandomSource::from_seed(42);
        let options = GenerationOptions::range(10, 20);

        for _ in 0..100 {
            let v = integer(&mut rng, &options);
            assert!((10..=20).contains(&v));
        }
    }

    #[test]
    fn test_integer_size_digits() {
        let mut rng = RandomSource::from_seed(42);
        let options = GenerationOptions {
            size: Some(4),
            ..GenerationOptions::default()
        };

        for _ in 0..100 {
            let v = integer(&mut rng, &options);
            assert!((1000..=9999).contains(&v));
        }
    }

    #[test]
    fn test_integer_inverted_bounds_swapped() {
        let mut rng = RandomSource::from_seed(42);
        let options = GenerationOptions::range(20, 10);

        for _ in 0..100 {
            let v = integer(&mut rng, &options);
            assert!((10..=20).contains(&v));
        }
    }

    #[test]
    fn test_length_bounds_defaults() {
        let options = GenerationOptions::default();
        assert_eq!(length_bounds(&options, 8, 16), (8, 16));
    }

    #[test]
    fn test_length_bounds_length_pins_both() {
        let options = GenerationOptions::exact_length(5);
        assert_eq!(length_bounds(&options, 8, 16), (5, 5));
    }

    #[test]
    fn test_length_bounds_one_sided() {
        let min_only = GenerationOptions {
            min_length: Some(12),
            ..GenerationOptions::default()
        };
        assert_eq!(length_bounds(&min_only, 8, 16), (12, 16));

        let min_above_default = GenerationOptions {
            min_length: Some(20),
            ..GenerationOptions::default()
        };
        assert_eq!(length_bounds(&min_above_default, 8, 16), (20, 20));

        let max_only = GenerationOptions {
            max_length: Some(4),
            ..GenerationOptions::default()
        };
        assert_eq!(length_bounds(&max_only, 8, 16), (4, 4));
    }

    #[test]
    fn test_length_bounds_inverted_pair_swapped() {
        let options = GenerationOptions::length_range(9, 3);
        assert_eq!(length_bounds(&options, 8, 16), (3, 9));
    }

    #[test]
    fn test_string_default_length() {
        let mut rng = RandomSource::from_seed(42);
        let s = string(&mut rng, &GenerationOptions::default());

        assert_eq!(s.len(), 10);
        assert!(s.bytes().all(|b| b.is_ascii_lowercase()));
    }

    #[test]
    fn test_string_length_in_bounds() {
        let mut rng = RandomSource::from_seed(42);
        let options = GenerationOptions::length_range(3, 7);

        for _ in 0..100 {
            let s = string(&mut rng, &options);
            assert!((3..=7).contains(&s.len()));
        }
    }

    #[test]
    fn test_string_exact_length() {
        let mut rng = RandomSource::from_seed(42);
        let options = GenerationOptions::length_range(6, 6);
        assert_eq!(string(&mut rng, &options).len(), 6);
    }

    #[test]
    fn test_string_empty_alphabet() {
        let mut rng = RandomSource::from_seed(42);
        assert_eq!(string_from_alphabet(&mut rng, 3, 7, &[]), "");
    }

    #[test]
    fn test_boolean_both_values_occur() {
        let mut rng = RandomSource::from_seed(42);
        let mut saw_true = false;
        let mut saw_false = false;

        for _ in 0..100 {
            if boolean(&mut rng) {
                saw_true = true;
            } else {
                saw_false = true;
            }
        }

        assert!(saw_true && saw_false);
    }

    #[test]
    fn test_float_default_unit_interval() {
        let mut rng = RandomSource::from_seed(42);
        for _ in 0..100 {
            let f = float(&mut rng, &GenerationOptions::default());
            assert!((0.0..=1.0).contains(&f));
        }
    }

    #[test]
    fn test_float_bounded() {
        let mut rng = RandomSource::from_seed(42);
        let options = GenerationOptions::range(-5, 5);
        for _ in 0..100 {
            let f = float(&mut rng, &options);
            assert!((-5.0..=5.0).contains(&f));
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let mut a = RandomSource::from_seed(42);
        let mut b = RandomSource::from_seed(42);
        let options = GenerationOptions::length_range(5, 15);

        assert_eq!(string(&mut a, &options), string(&mut b, &options));
        assert_eq!(
            integer(&mut a, &GenerationOptions::default()),
            integer(&mut b, &GenerationOptions::default())
        );
    }
}
