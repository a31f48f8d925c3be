//! Email address generator.

use crate::generators::pattern::{compile_anchored, sample_matching};
use crate::locale::{categories, LocaleCatalog};
use crate::rng::RandomSource;
use fakegen_core::GenerationOptions;

/// Reserved documentation domains, always part of the domain pool.
const EXAMPLE_DOMAINS: [&str; 3] = ["example.com", "example.org", "example.net"];

/// Generate an email address.
///
/// The local part is a locale-drawn `first.last` pair; the domain comes
/// from the locale's free-mail table plus the reserved example domains.
/// When a `pattern` option is present the full address goes through
/// rejection sampling against it.
pub fn generate_email(
    rng: &mut RandomSource,
    catalog: &LocaleCatalog,
    options: &GenerationOptions,
) -> Result<String, regex::Error> {
    match &options.pattern {
        Some(pattern) => {
            let regex = compile_anchored(pattern)?;
            Ok(sample_matching(
                &regex,
                || build_email(rng, catalog),
                |s| s.clone(),
            ))
        }
        None => Ok(build_email(rng, catalog)),
    }
}

fn build_email(rng: &mut RandomSource, catalog: &LocaleCatalog) -> String {
    let first = catalog
        .pick(categories::FIRST_NAME, rng)
        .unwrap_or("alex")
        .to_lowercase();
    let last = catalog
        .pick(categories::LAST_NAME, rng)
        .unwrap_or("doe")
        .to_lowercase();

    let free_mail = catalog.table(categories::FREE_EMAIL_DOMAIN).unwrap_or(&[]);
    let pool_len = free_mail.len() + EXAMPLE_DOMAINS.len();
    let index = rng.len_in_range(0, pool_len - 1);
    let domain = free_mail
        .get(index)
        .map(|s| s.as_str())
        .unwrap_or_else(|| EXAMPLE_DOMAINS[index - free_mail.len()]);

    format!("{first}.{last}@{domain}")
}
