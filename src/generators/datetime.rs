//! Date, date-time, and timestamp generators.

use crate::generators::primitives;
use crate::rng::RandomSource;
use chrono::{DateTime, Utc};
use fakegen_core::GenerationOptions;

/// Year window for synthesized calendar dates.
const YEAR_MIN: i64 = 1970;
const YEAR_MAX: i64 = 2024;

/// UTC offset hours used by the date-time generator.
const OFFSET_HOURS: [i64; 8] = [-8, -5, -3, 0, 1, 2, 5, 9];

/// Generate a calendar date as `YYYY-MM-DD`.
///
/// The day field is drawn from 1..=31 with no month-length correction, so
/// dates like `2021-02-30` can occur. Use [`date_time_between`] when
/// calendar-valid instants are required.
pub fn generate_date(rng: &mut RandomSource) -> String {
    let year = rng.int_in_range(YEAR_MIN, YEAR_MAX);
    let month = rng.int_in_range(1, 12);
    let day = rng.int_in_range(1, 31);
    format!("{year:04}-{month:02}-{day:02}")
}

/// Generate an RFC 3339 style date-time with a signed whole-hour offset.
pub fn generate_date_time(rng: &mut RandomSource) -> String {
    let date = generate_date(rng);
    let hour = rng.int_in_range(0, 23);
    let minute = rng.int_in_range(0, 59);
    let second = rng.int_in_range(0, 59);
    let offset = *rng.pick(&OFFSET_HOURS).unwrap_or(&0);

    let sign = if offset < 0 { '-' } else { '+' };
    format!(
        "{date}T{hour:02}:{minute:02}:{second:02}{sign}{:02}:00",
        offset.abs()
    )
}

/// Generate a Unix epoch timestamp in seconds.
///
/// Bounded by `min`/`max` options; the default range is `0..=i32::MAX`.
pub fn generate_timestamp(rng: &mut RandomSource, options: &GenerationOptions) -> i64 {
    let (min, max) = match (options.min, options.max) {
        (None, None) => (0, i32::MAX as i64),
        _ => primitives::integer_bounds(options),
    };
    rng.int_in_range(min, max)
}

/// Generate a random instant between two timestamps.
///
/// The bounds should be RFC 3339 timestamps or `YYYY-MM-DD` dates. An
/// inverted or collapsed range yields the start instant; if neither bound
/// parses, the Unix epoch is returned.
pub fn date_time_between(rng: &mut RandomSource, start: &str, end: &str) -> DateTime<Utc> {
    let start_dt = parse_timestamp(start);
    let end_dt = parse_timestamp(end);

    match (start_dt, end_dt) {
        (Some(start), Some(end)) => {
            let start_ts = start.timestamp();
            let end_ts = end.timestamp();

            if start_ts >= end_ts {
                start
            } else {
                let random_ts = rng.int_in_range(start_ts, end_ts);
                DateTime::from_timestamp(random_ts, 0).unwrap_or(start)
            }
        }
        (Some(dt), None) | (None, Some(dt)) => dt,
        (None, None) => DateTime::UNIX_EPOCH,
    }
}

/// Parse a timestamp string in the accepted formats.
fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    // Try RFC 3339 / ISO 8601
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    // Try common date-only format
    if let Ok(date) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}
