use thiserror::Error;

/// Why a VAT number failed validation.
///
/// Only the diagnostic APIs return this; the boolean ones
/// collapse every variant to `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VatCheckError {
    /// The country identifier matched no code, alpha-3 code, or name,
    /// or no country was given and the VAT prefix is not a known code.
    #[error("no VAT country could be determined for '{vat}'")]
    UnresolvedCountry {
        /// The VAT number being checked.
        vat: String,
    },

    /// The VAT number does not follow the format rule of its country.
    #[error("VAT number '{vat}' does not match the format for {country}")]
    PatternMismatch {
        /// The VAT number being checked.
        vat: String,
        /// Canonical code whose rule was applied.
        country: &'static str,
    },
}

impl VatCheckError {
    /// Short machine-readable name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnresolvedCountry { .. } => "unresolved_country",
            Self::PatternMismatch { .. } => "pattern_mismatch",
        }
    }
}
