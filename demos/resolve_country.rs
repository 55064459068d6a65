use vatcheck::{VAT_COUNTRY_CODES, infer_country, resolve_country};

fn main() {
    println!("=== Country Resolution ===\n");

    let inputs = ["de", "DEU", "Germany", "GBR", "Scotland", "Great Britain", "EL", "AU", ""];
    for input in inputs {
        let resolved = resolve_country(input).unwrap_or("—");
        println!("  {input:<16} => {resolved}");
    }

    println!("\n=== Inference from VAT Prefix ===\n");

    for vat in ["ATU12345678", "el123456789", "XI123456789", "D"] {
        let inferred = infer_country(vat).unwrap_or("—");
        println!("  {vat:<16} => {inferred}");
    }

    println!("\n  Known codes: {}", VAT_COUNTRY_CODES.join(", "));
}
