//! Pattern-constrained generation via rejection sampling.
//!
//! A candidate is drawn from a base generator and tested against an
//! anchored regex; failures trigger regeneration up to a fixed attempt
//! ceiling. When the budget is exhausted the last candidate is returned
//! unmodified: the contract is "attempts to honor the pattern, does not
//! guarantee it". Callers needing hard guarantees must supply patterns
//! with non-trivial satisfying density.

use regex::Regex;

/// Retry ceiling for rejection sampling.
pub const MAX_ATTEMPTS: usize = 100;

/// Compile a caller-supplied pattern as a whole-string match test.
///
/// The pattern is wrapped in `^(?:...)$`; redundant caller anchors are
/// harmless.
pub fn compile_anchored(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{pattern})$"))
}

/// Draw candidates from `generate` until `render` of one matches `pattern`,
/// up to [`MAX_ATTEMPTS`] draws.
///
/// On exhaustion the last candidate is returned as-is and a debug event is
/// emitted.
pub fn sample_matching<T, G, S>(pattern: &Regex, mut generate: G, render: S) -> T
where
    G: FnMut() -> T,
    S: Fn(&T) -> String,
{
    let mut candidate = generate();
    let mut attempts = 1;

    while attempts < MAX_ATTEMPTS && !pattern.is_match(&render(&candidate)) {
        candidate = generate();
        attempts += 1;
    }

    if !pattern.is_match(&render(&candidate)) {
        tracing::debug!(
            pattern = %pattern,
            attempts,
            "pattern budget exhausted, returning last candidate"
        );
    }

    candidate
}
