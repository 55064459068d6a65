//! Property-based tests for country resolution and VAT validation.
//!
//! Run with: `cargo test --features all --test proptest_tests`

#![cfg(feature = "vat")]

use proptest::prelude::*;
use vatcheck::core::{VAT_COUNTRY_CODES, infer_country, is_vat_country, resolve_country};
use vatcheck::vat::*;

// ── Proptest Strategies ─────────────────────────────────────────────────────

/// Any canonical VAT country code.
fn arb_code() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(VAT_COUNTRY_CODES)
}

/// Arbitrary text, biased toward the characters VAT numbers are made of.
fn arb_input() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z0-9 +*]{0,20}",
        any::<String>(),
    ]
}

/// A structurally valid German VAT number, with or without prefix.
fn arb_de_vat() -> impl Strategy<Value = String> {
    (any::<bool>(), "[0-9]{9}").prop_map(|(prefixed, digits)| {
        if prefixed {
            format!("DE{digits}")
        } else {
            digits
        }
    })
}

// ── Properties ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn code_resolves_regardless_of_case(code in arb_code()) {
        prop_assert_eq!(resolve_country(code), Some(code));
        prop_assert_eq!(resolve_country(&code.to_lowercase()), Some(code));
    }

    #[test]
    fn resolution_is_total(input in arb_input()) {
        if let Some(code) = resolve_country(&input) {
            prop_assert!(is_vat_country(code));
        }
    }

    #[test]
    fn inference_is_total(vat in arb_input()) {
        if let Some(code) = infer_country(&vat) {
            prop_assert!(is_vat_country(code));
            prop_assert!(vat.to_ascii_uppercase().starts_with(code));
        }
    }

    #[test]
    fn validate_matches_validator(vat in arb_input(), country in arb_input()) {
        let validator = VatValidator::with_country(vat.as_str(), &country);
        prop_assert_eq!(validate(&vat, &country), validator.is_valid());
        prop_assert_eq!(validator.is_valid(), validator.check().is_ok());
        prop_assert_eq!(validator.report().valid, validator.is_valid());
    }

    #[test]
    fn prefix_round_trip(code in arb_code(), rest in "[0-9]{0,12}") {
        let validator = VatValidator::new(format!("{code}{rest}"));
        prop_assert_eq!(validator.country(), Some(code));
    }

    #[test]
    fn set_country_idempotent(vat in arb_input(), country in arb_input()) {
        let mut once = VatValidator::new(vat.as_str());
        once.set_country(&country);
        let mut twice = once.clone();
        twice.set_country(&country);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn german_numbers_validate(vat in arb_de_vat()) {
        prop_assert!(validate(&vat, "DE"));
        prop_assert!(validate(&vat.to_lowercase(), "Germany"));
        let padded = format!("{vat}0");
        prop_assert!(!validate(&padded, "DE"));
    }

    #[test]
    fn duplicate_keys_agree(vat in arb_input()) {
        prop_assert_eq!(validate(&vat, "GB"), validate(&vat, "UK"));
        prop_assert_eq!(validate(&vat, "GR"), validate(&vat, "EL"));
    }

    #[test]
    fn surrounding_whitespace_rejected(code in arb_code(), vat in arb_input()) {
        let padded = format!(" {vat} ");
        prop_assert!(!validate(&padded, code));
    }
}
