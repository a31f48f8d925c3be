//! Network-shaped generators: IP addresses, hostnames, URIs.

use crate::generators::primitives::{self, HEX_LOWER, LOWERCASE};
use crate::rng::RandomSource;

/// Schemes used by the uri generator.
const URI_SCHEMES: [&str; 5] = ["http", "https", "ftp", "file", "data"];

/// Schemes used by the url generator.
const URL_SCHEMES: [&str; 2] = ["http", "https"];

/// Fixed authority for uri/url output.
const URI_HOST: &str = "example.com";

/// Generate a dotted-quad IPv4 address with octets in 0..=255.
pub fn generate_ipv4(rng: &mut RandomSource) -> String {
    format!(
        "{}.{}.{}.{}",
        rng.int_in_range(0, 255),
        rng.int_in_range(0, 255),
        rng.int_in_range(0, 255),
        rng.int_in_range(0, 255)
    )
}

/// Generate a colon-separated IPv6 address of eight groups, each 1-4
/// lowercase hex digits.
pub fn generate_ipv6(rng: &mut RandomSource) -> String {
    let groups: Vec<String> = (0..8)
        .map(|_| primitives::string_from_alphabet(rng, 1, 4, HEX_LOWER))
        .collect();
    groups.join(":")
}

/// Generate a two-label hostname, lowercase labels of 3-10 characters.
pub fn generate_hostname(rng: &mut RandomSource) -> String {
    let first = primitives::string_from_alphabet(rng, 3, 10, LOWERCASE);
    let second = primitives::string_from_alphabet(rng, 3, 10, LOWERCASE);
    format!("{first}.{second}")
}

/// Generate a URI with a scheme from {http, https, ftp, file, data}, the
/// fixed host `example.com`, and one random path segment.
pub fn generate_uri(rng: &mut RandomSource) -> String {
    let scheme = rng.pick(&URI_SCHEMES).unwrap_or(&"http");
    build_uri(rng, scheme)
}

/// Generate a URL; same shape as [`generate_uri`] but restricted to
/// {http, https}.
pub fn generate_url(rng: &mut RandomSource) -> String {
    let scheme = rng.pick(&URL_SCHEMES).unwrap_or(&"http");
    build_uri(rng, scheme)
}

fn build_uri(rng: &mut RandomSource, scheme: &str) -> String {
    let path = primitives::string_from_alphabet(rng, 3, 10, LOWERCASE);
    format!("{scheme}://{URI_HOST}/{path}")
}
