#![no_main]

use libfuzzer_sys::fuzz_target;
use vatcheck::vat::{VatValidator, validate};

fuzz_target!(|input: (&str, &str)| {
    let (vat, country) = input;
    // Must not panic, and both entry points must agree.
    let validator = VatValidator::with_country(vat, country);
    assert_eq!(validate(vat, country), validator.is_valid());
    assert_eq!(validator.is_valid(), validator.check().is_ok());
});
