//! Built-in `en_GB` locale data and formats.

use super::{categories, FormatFn};
use crate::generators::primitives::{self, UPPERCASE};
use crate::rng::RandomSource;
use std::collections::HashMap;

/// Locale-specific formats registered for `en_GB`.
pub const FORMATS: &[(&str, FormatFn)] = &[("postcode", postcode)];

/// UK-style postcode, e.g. `AB1 2CD`.
fn postcode(rng: &mut RandomSource) -> String {
    let area = primitives::string_from_alphabet(rng, 2, 2, UPPERCASE);
    let inward = primitives::string_from_alphabet(rng, 2, 2, UPPERCASE);
    format!(
        "{area}{} {}{inward}",
        rng.int_in_range(1, 9),
        rng.int_in_range(1, 9)
    )
}

fn table(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|s| s.to_string()).collect()
}

/// Data tables for `en_GB`.
pub fn tables() -> HashMap<String, Vec<String>> {
    HashMap::from([
        (
            categories::FIRST_NAME.to_string(),
            table(&[
                "Oliver", "Amelia", "George", "Isla", "Harry", "Ava", "Jack", "Emily", "Charlie",
                "Sophia", "Thomas", "Grace", "Oscar", "Lily", "Alfie", "Freya",
            ]),
        ),
        (
            categories::LAST_NAME.to_string(),
            table(&[
                "Smith", "Jones", "Taylor", "Brown", "Williams", "Wilson", "Johnson", "Davies",
                "Patel", "Robinson", "Wright", "Thompson", "Evans", "Walker", "White", "Hughes",
            ]),
        ),
        (
            categories::CITY.to_string(),
            table(&[
                "London",
                "Manchester",
                "Birmingham",
                "Leeds",
                "Glasgow",
                "Liverpool",
                "Bristol",
                "Sheffield",
                "Edinburgh",
                "Cardiff",
            ]),
        ),
        (
            categories::STATE.to_string(),
            table(&[
                "Greater London",
                "West Midlands",
                "Merseyside",
                "South Yorkshire",
                "Kent",
                "Essex",
                "Devon",
                "Hampshire",
            ]),
        ),
        (
            categories::COUNTRY.to_string(),
            table(&[
                "United Kingdom",
                "Ireland",
                "France",
                "Germany",
                "Spain",
                "Italy",
                "Netherlands",
                "Norway",
            ]),
        ),
        (
            categories::STREET_SUFFIX.to_string(),
            table(&["Street", "Road", "Lane", "Close", "Gardens", "Way", "Crescent"]),
        ),
        (
            categories::COMPANY_SUFFIX.to_string(),
            table(&["Ltd", "PLC", "Group", "Holdings", "Partners"]),
        ),
        (
            categories::WORD.to_string(),
            table(&[
                "time", "year", "people", "way", "day", "thing", "world", "life", "hand", "part",
                "place", "work", "week", "case", "point", "government", "number", "house",
                "water", "room",
            ]),
        ),
        (
            categories::FREE_EMAIL_DOMAIN.to_string(),
            table(&["gmail.com", "yahoo.co.uk", "hotmail.co.uk", "outlook.com"]),
        ),
    ])
}
