//! Built-in `en_US` locale data and formats.

use super::{categories, FormatFn};
use crate::rng::RandomSource;
use std::collections::HashMap;

/// Locale-specific formats registered for `en_US`.
pub const FORMATS: &[(&str, FormatFn)] = &[
    ("ssn", ssn),
    ("zip_code", zip_code),
    ("phone_number", phone_number),
];

/// Social security number, `AAA-GG-SSSS`.
fn ssn(rng: &mut RandomSource) -> String {
    format!(
        "{:03}-{:02}-{:04}",
        rng.int_in_range(100, 899),
        rng.int_in_range(1, 99),
        rng.int_in_range(1, 9999)
    )
}

/// Five-digit ZIP code.
fn zip_code(rng: &mut RandomSource) -> String {
    format!("{:05}", rng.int_in_range(0, 99999))
}

/// North American style phone number, `(AAA) EEE-NNNN`.
fn phone_number(rng: &mut RandomSource) -> String {
    format!(
        "({:03}) {:03}-{:04}",
        rng.int_in_range(200, 999),
        rng.int_in_range(200, 999),
        rng.int_in_range(0, 9999)
    )
}

fn table(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|s| s.to_string()).collect()
}

/// Data tables for `en_US`.
pub fn tables() -> HashMap<String, Vec<String>> {
    HashMap::from([
        (
            categories::FIRST_NAME.to_string(),
            table(&[
                "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda",
                "David", "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph",
                "Jessica", "Thomas", "Sarah", "Charles", "Karen",
            ]),
        ),
        (
            categories::LAST_NAME.to_string(),
            table(&[
                "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
                "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
                "Thomas", "Taylor", "Moore", "Jackson", "Martin",
            ]),
        ),
        (
            categories::CITY.to_string(),
            table(&[
                "New York",
                "Los Angeles",
                "Chicago",
                "Houston",
                "Phoenix",
                "Philadelphia",
                "San Antonio",
                "San Diego",
                "Dallas",
                "Austin",
                "Seattle",
                "Denver",
                "Boston",
                "Portland",
                "Atlanta",
            ]),
        ),
        (
            categories::STATE.to_string(),
            table(&[
                "Alabama",
                "California",
                "Colorado",
                "Florida",
                "Georgia",
                "Illinois",
                "Massachusetts",
                "New York",
                "Oregon",
                "Pennsylvania",
                "Texas",
                "Washington",
            ]),
        ),
        (
            categories::COUNTRY.to_string(),
            table(&[
                "United States",
                "Canada",
                "Mexico",
                "United Kingdom",
                "Germany",
                "France",
                "Japan",
                "Australia",
                "Brazil",
                "India",
            ]),
        ),
        (
            categories::STREET_SUFFIX.to_string(),
            table(&[
                "Street", "Avenue", "Boulevard", "Drive", "Lane", "Road", "Court", "Place",
            ]),
        ),
        (
            categories::COMPANY_SUFFIX.to_string(),
            table(&["Inc", "LLC", "Group", "Corp", "Industries", "Labs"]),
        ),
        (
            categories::WORD.to_string(),
            table(&[
                "time", "year", "people", "way", "day", "thing", "world", "life", "hand", "part",
                "place", "work", "week", "case", "point", "company", "number", "house", "water",
                "room",
            ]),
        ),
        (
            categories::FREE_EMAIL_DOMAIN.to_string(),
            table(&["gmail.com", "yahoo.com", "hotmail.com", "outlook.com"]),
        ),
    ])
}
