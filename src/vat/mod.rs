//! VAT number format rules and validation.
//!
//! Checks a VAT number against the syntax rule of its issuing country.
//! No check digits are computed and no registry is queried.
//!
//! # Example
//!
//! ```rust
//! use vatcheck::vat::*;
//!
//! // Country given as code, alpha-3 code, or name
//! assert!(validate("DE123456789", "DE"));
//! assert!(validate("DE123456789", "DEU"));
//! assert!(validate("DE123456789", "germany"));
//!
//! // Country inferred from the VAT prefix
//! let validator = VatValidator::new("SE123456789001");
//! assert_eq!(validator.country(), Some("SE"));
//! assert!(validator.is_valid());
//!
//! // Diagnostics
//! let err = VatValidator::new("AT123456789").check().unwrap_err();
//! assert_eq!(err.kind(), "pattern_mismatch");
//! ```

mod rules;
mod validator;

pub use rules::{matches_format, pattern_for};
pub use validator::{ValidationReport, VatValidator, validate};
