//! Password generator with guaranteed character-class coverage.

use crate::generators::primitives::{self, DIGITS, LOWERCASE, UPPERCASE};
use crate::rng::RandomSource;
use fakegen_core::GenerationOptions;

/// Symbols eligible for password output.
pub const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{};:,.<>?";

/// Default password length interval.
const PASSWORD_DEFAULT_MIN: usize = 8;
const PASSWORD_DEFAULT_MAX: usize = 16;

/// Generate a password of length in `[min_length, max_length]` (default
/// 8..=16) containing at least one lowercase letter, one uppercase letter,
/// one digit, and one symbol.
///
/// One character is seeded from each class, the remainder is filled from
/// the union alphabet, and the whole sequence is shuffled so class
/// positions are not predictable. Lengths under four are raised to four so
/// every class fits.
pub fn generate_password(rng: &mut RandomSource, options: &GenerationOptions) -> String {
    let (min, max) =
        primitives::length_bounds(options, PASSWORD_DEFAULT_MIN, PASSWORD_DEFAULT_MAX);
    let length = rng.len_in_range(min, max).max(4);

    let union: Vec<u8> = [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS].concat();

    let mut chars: Vec<u8> = vec![
        *rng.pick(LOWERCASE).unwrap_or(&b'a'),
        *rng.pick(UPPERCASE).unwrap_or(&b'A'),
        *rng.pick(DIGITS).unwrap_or(&b'0'),
        *rng.pick(SYMBOLS).unwrap_or(&b'!'),
    ];
    for _ in 4..length {
        chars.push(*rng.pick(&union).unwrap_or(&b'a'));
    }

    rng.shuffle(&mut chars);
    chars.into_iter().map(|b| b as char).collect()
}
