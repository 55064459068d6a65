#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Some(code) = vatcheck::resolve_country(s) {
            assert!(vatcheck::is_vat_country(code));
        }
        let _ = vatcheck::infer_country(s);
    }
});
