//! Canonical VAT country codes and the alias tables that resolve to them.
//!
//! The canonical codes are the keys of the VAT rule table. They are mostly
//! ISO 3166-1 alpha-2, with two deliberate duplicates: Greece is reachable
//! as both `GR` (ISO) and `EL` (the prefix used on Greek VAT numbers), and
//! the United Kingdom as both `GB` (ISO) and `UK`.

/// Canonical country codes that have a VAT format rule (29 entries).
/// Sorted for binary search.
pub static VAT_COUNTRY_CODES: &[&str] = &[
    "AT", "BE", "BG", "CY", "CZ", "DE", "DK", "EE", "EL", "ES", "FI", "FR", "GB", "GR", "HU", "IE",
    "IT", "LT", "LU", "LV", "MT", "NL", "PL", "PT", "RO", "SE", "SI", "SK", "UK",
];

/// ISO 3166-1 alpha-3 code to canonical code. Sorted by alpha-3 code.
static ISO3_ALIASES: &[(&str, &str)] = &[
    ("AUT", "AT"),
    ("BEL", "BE"),
    ("BGR", "BG"),
    ("CYP", "CY"),
    ("CZE", "CZ"),
    ("DEU", "DE"),
    ("DNK", "DK"),
    ("ESP", "ES"),
    ("EST", "EE"),
    ("FIN", "FI"),
    ("FRA", "FR"),
    ("GBR", "UK"),
    ("GRC", "GR"),
    ("HUN", "HU"),
    ("IRL", "IE"),
    ("ITA", "IT"),
    ("LTU", "LT"),
    ("LUX", "LU"),
    ("LVA", "LV"),
    ("MLT", "MT"),
    ("NLD", "NL"),
    ("POL", "PL"),
    ("PRT", "PT"),
    ("ROU", "RO"),
    ("SVK", "SK"),
    ("SVN", "SI"),
    ("SWE", "SE"),
];

/// Lowercase English country or region name to canonical code.
/// Sorted by name.
static NAME_ALIASES: &[(&str, &str)] = &[
    ("austria", "AT"),
    ("belgium", "BE"),
    ("bulgaria", "BG"),
    ("cyprus", "CY"),
    ("czech republic", "CZ"),
    ("denmark", "DK"),
    ("england", "UK"),
    ("estonia", "EE"),
    ("finland", "FI"),
    ("france", "FR"),
    ("germany", "DE"),
    ("great britain", "GB"),
    ("greece", "GR"),
    ("hungary", "HU"),
    ("ireland", "IE"),
    ("italy", "IT"),
    ("latvia", "LV"),
    ("lithuania", "LT"),
    ("luxembourg", "LU"),
    ("malta", "MT"),
    ("netherlands", "NL"),
    ("northern ireland", "UK"),
    ("poland", "PL"),
    ("portugal", "PT"),
    ("romania", "RO"),
    ("scotland", "UK"),
    ("slovakia", "SK"),
    ("slovenia", "SI"),
    ("spain", "ES"),
    ("sweden", "SE"),
    ("united kingdom", "UK"),
    ("wales", "UK"),
];

/// Check whether `code` is a canonical VAT country code.
///
/// The comparison is exact: `"de"` is not a canonical code, `"DE"` is.
pub fn is_vat_country(code: &str) -> bool {
    canonical_code(code).is_some()
}

/// Resolve a country identifier to its canonical VAT country code.
///
/// Tried in order:
/// 1. a 2-character input whose uppercase form is a canonical code,
/// 2. a 3-character input whose uppercase form is a known ISO alpha-3 code,
/// 3. any input whose lowercase form is a known country or region name.
///
/// Returns `None` when nothing matches, including for the empty string.
///
/// ```rust
/// use vatcheck::resolve_country;
///
/// assert_eq!(resolve_country("de"), Some("DE"));
/// assert_eq!(resolve_country("DEU"), Some("DE"));
/// assert_eq!(resolve_country("Scotland"), Some("UK"));
/// assert_eq!(resolve_country("Atlantis"), None);
/// ```
pub fn resolve_country(input: &str) -> Option<&'static str> {
    if input.len() == 2 {
        if let Some(code) = canonical_code(&input.to_ascii_uppercase()) {
            return Some(code);
        }
    }

    if input.len() == 3 {
        if let Some(code) = lookup(ISO3_ALIASES, &input.to_ascii_uppercase()) {
            return Some(code);
        }
    }

    let resolved = lookup(NAME_ALIASES, &input.to_ascii_lowercase());
    if resolved.is_none() {
        tracing::trace!(input, "country did not resolve to a VAT country code");
    }
    resolved
}

/// Guess the issuing country from the first two characters of a VAT number.
///
/// Inputs shorter than two characters never resolve.
pub fn infer_country(vat: &str) -> Option<&'static str> {
    let prefix: String = vat.chars().take(2).collect();
    let inferred = canonical_code(&prefix.to_ascii_uppercase());
    tracing::trace!(vat, ?inferred, "inferred country from VAT prefix");
    inferred
}

fn canonical_code(code: &str) -> Option<&'static str> {
    VAT_COUNTRY_CODES
        .binary_search(&code)
        .ok()
        .map(|idx| VAT_COUNTRY_CODES[idx])
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .binary_search_by(|(alias, _)| (*alias).cmp(key))
        .ok()
        .map(|idx| table[idx].1)
}
