//! Per-country VAT number format rules.
//!
//! Every rule accepts the national number with an optional, redundant
//! country prefix (`"ATU12345678"` and `"U12345678"` are both valid for
//! `AT`). Matching is case-insensitive and always covers the whole input.

use std::sync::LazyLock;

use regex::Regex;

// Greek numbers carry the EL prefix under both keys.
const GREECE: &str = r"(EL)?[0-9]{9}";

// Standard 9 and 12 digit forms, government departments (GD000-GD499)
// and health authorities (HA500-HA999).
const UNITED_KINGDOM: &str = concat!(
    r"(GB)?[1-9][0-9]{2} ?[0-9]{4} ?[0-9]{2}",
    r"|(GB)?[1-9][0-9]{2} ?[0-9]{4} ?[0-9]{2} ?[0-9]{3}",
    r"|(GB)?GD[0-4][0-9]{2}",
    r"|(GB)?HA[5-9][0-9]{2}",
);

/// Format rule per canonical code. Sorted by code, same keys as
/// [`crate::core::VAT_COUNTRY_CODES`].
static PATTERNS: &[(&str, &str)] = &[
    ("AT", r"(AT)?U[0-9]{8}"),
    ("BE", r"(BE)?[01][0-9]{9}"),
    ("BG", r"(BG)?[0-9]{9,10}"),
    ("CY", r"(CY)?[0-9]{8}[A-Z]"),
    ("CZ", r"(CZ)?[0-9]{8,10}"),
    ("DE", r"(DE)?[0-9]{9}"),
    ("DK", r"(DK)?([0-9]{2} ?){3}[0-9]{2}"),
    ("EE", r"(EE)?[0-9]{9}"),
    ("EL", GREECE),
    ("ES", r"(ES)?[0-9A-Z][0-9]{7}[0-9A-Z]"),
    ("FI", r"(FI)?[0-9]{8}"),
    ("FR", r"(FR)?[0-9A-Z]{2} ?[0-9]{9}"),
    ("GB", UNITED_KINGDOM),
    ("GR", GREECE),
    ("HU", r"(HU)?[0-9]{8}"),
    ("IE", r"(IE)?[0-9][0-9A-Z+*][0-9]{5}[A-Z]|(IE)?[0-9]{7}[A-Z]{1,2}"),
    ("IT", r"(IT)?[0-9]{11}"),
    ("LT", r"(LT)?([0-9]{9}|[0-9]{12})"),
    ("LU", r"(LU)?[0-9]{8}"),
    ("LV", r"(LV)?[0-9]{11}"),
    ("MT", r"(MT)?[0-9]{8}"),
    ("NL", r"(NL)?[0-9]{9}B[0-9]{2}"),
    ("PL", r"(PL)?[0-9]{10}"),
    ("PT", r"(PT)?[0-9]{9}"),
    ("RO", r"(RO)?[0-9]{2,10}"),
    ("SE", r"(SE)?[0-9]{10}01"),
    ("SI", r"(SI)?[0-9]{8}"),
    ("SK", r"(SK)?[0-9]{10}"),
    ("UK", UNITED_KINGDOM),
];

static RULES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    PATTERNS
        .iter()
        .map(|&(code, body)| {
            let regex = Regex::new(&format!("(?i-u)^(?:{body})$"))
                .unwrap_or_else(|e| panic!("VAT rule for {code} does not compile: {e}"));
            (code, regex)
        })
        .collect()
});

/// The compiled format rule for a canonical country code.
pub fn pattern_for(code: &str) -> Option<&'static Regex> {
    let rules: &'static [(&'static str, Regex)] = &RULES;
    rules
        .binary_search_by(|(key, _)| (*key).cmp(code))
        .ok()
        .map(|idx| &rules[idx].1)
}

/// Check `vat` against the format rule of canonical country `code`.
///
/// Returns `false` if `code` has no rule.
pub fn matches_format(code: &str, vat: &str) -> bool {
    pattern_for(code).is_some_and(|regex| regex.is_match(vat))
}
