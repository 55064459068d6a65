//! # vatcheck
//!
//! Format validation for European VAT identification numbers.
//!
//! A VAT number is checked against the syntax rule of its issuing country.
//! The country can be given as an ISO 3166-1 alpha-2 code, an alpha-3 code,
//! or an English country name; when it is omitted it is inferred from the
//! first two characters of the VAT number itself.
//!
//! This is a purely syntactic check: no check digits are verified and no
//! registry (VIES) is contacted.
//!
//! ## Quick Start
//!
//! ```rust
//! use vatcheck::vat::{VatValidator, validate};
//!
//! assert!(validate("ATU12345678", "AT"));
//! assert!(validate("BE1234567890", "Belgium"));
//! assert!(!validate("GBGD500", "GB"));
//!
//! let validator = VatValidator::new("LU12345678");
//! assert_eq!(validator.country(), Some("LU"));
//! assert!(validator.is_valid());
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Country resolution from ISO2/ISO3 codes and names |
//! | `vat` (default) | Per-country format rules and [`vat::VatValidator`] |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "vat")]
pub mod vat;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
