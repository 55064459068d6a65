use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vatcheck::vat::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=vatcheck=debug shows why numbers are rejected
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("vatcheck=info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Explicit Country ===\n");

    let checks = [
        ("LU12345678", "LU"),
        ("ATU12345678", "AT"),
        ("AT123456789", "AT"),      // missing U
        ("BE1234567890", "Belgium"),
        ("EL123456789", "GR"),
        ("GBGD001", "GB"),
        ("GBGD500", "GB"),          // government range is 000-499
        ("GBHA500", "Great Britain"),
        ("DE123456789", "Narnia"),  // unknown country
    ];

    for (vat, country) in checks {
        let verdict = if validate(vat, country) { "valid" } else { "INVALID" };
        println!("  {vat:<16} {country:<14} => {verdict}");
    }

    println!("\n=== Inferred Country ===\n");

    for vat in ["SE123456789001", "nl123456789b12", "CHE123456789", "asd"] {
        let validator = VatValidator::new(vat);
        match validator.check() {
            Ok(country) => println!("  {vat:<16} => valid ({country})"),
            Err(e) => println!("  {vat:<16} => INVALID: {e}"),
        }
    }

    println!("\n=== Chained Updates ===\n");

    let mut validator = VatValidator::new("");
    validator
        .set_country("Denmark")
        .set_vat_number("DK12 34 56 78", false);
    println!("  {:?}", validator.report());

    validator.set_vat_number("FRAB 123456789", true);
    println!("  {:?}", validator.report());

    Ok(())
}
