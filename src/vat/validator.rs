//! Stateful VAT number validator.

use serde::Serialize;

use super::rules::matches_format;
use crate::core::{VatCheckError, infer_country, is_vat_country, resolve_country};

/// A VAT number paired with the country whose rule it is checked against.
///
/// The country is stored already resolved: it is either a canonical code
/// or `None` when no country could be determined. Validation never fails
/// loudly; an unresolved country or a malformed number is simply invalid.
///
/// ```rust
/// use vatcheck::vat::VatValidator;
///
/// let mut validator = VatValidator::with_country("EL123456789", "Greece");
/// assert_eq!(validator.country(), Some("GR"));
/// assert!(validator.is_valid());
///
/// validator.set_vat_number("DE123456789", true);
/// assert_eq!(validator.country(), Some("DE"));
/// assert!(validator.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VatValidator {
    vat: String,
    country: Option<&'static str>,
}

/// Serializable outcome of a validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// The VAT number as supplied.
    pub vat: String,
    /// Canonical country code the number was checked against.
    pub country: Option<&'static str>,
    /// Whether the number matched its country's format.
    pub valid: bool,
    /// If not valid, the reason why.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl VatValidator {
    /// Create a validator that infers the country from the VAT prefix.
    pub fn new(vat: impl Into<String>) -> Self {
        let mut validator = Self {
            vat: String::new(),
            country: None,
        };
        validator.set_vat_number(vat, true);
        validator
    }

    /// Create a validator for an explicit country.
    ///
    /// `country` may be a 2-letter code, an ISO alpha-3 code, or a country
    /// name. An empty `country` behaves like [`VatValidator::new`].
    pub fn with_country(vat: impl Into<String>, country: &str) -> Self {
        if country.is_empty() {
            return Self::new(vat);
        }
        Self {
            vat: vat.into(),
            country: resolve_country(country),
        }
    }

    /// Re-resolve the country, replacing the stored one.
    pub fn set_country(&mut self, country: &str) -> &mut Self {
        self.country = resolve_country(country);
        self
    }

    /// Replace the VAT number. With `update_country`, the country is
    /// re-inferred from the new number's prefix.
    pub fn set_vat_number(&mut self, vat: impl Into<String>, update_country: bool) -> &mut Self {
        self.vat = vat.into();
        if update_country {
            self.country = infer_country(&self.vat);
        }
        self
    }

    /// The stored VAT number, exactly as supplied.
    pub fn vat(&self) -> &str {
        &self.vat
    }

    /// The resolved country code, or `None` if unresolved.
    pub fn country(&self) -> Option<&'static str> {
        self.country
    }

    /// Whether the VAT number matches the format of its country.
    pub fn is_valid(&self) -> bool {
        self.check().is_ok()
    }

    /// Like [`is_valid`](Self::is_valid) but says why a number is invalid.
    ///
    /// Returns the canonical country code on success.
    ///
    /// # Errors
    ///
    /// [`VatCheckError::UnresolvedCountry`] if there is no country to check
    /// against, [`VatCheckError::PatternMismatch`] if the number does not
    /// follow the country's format.
    pub fn check(&self) -> Result<&'static str, VatCheckError> {
        let country = self
            .country
            .filter(|code| is_vat_country(code))
            .ok_or_else(|| VatCheckError::UnresolvedCountry {
                vat: self.vat.clone(),
            })?;

        if !matches_format(country, &self.vat) {
            tracing::debug!(vat = %self.vat, country, "VAT number does not match country format");
            return Err(VatCheckError::PatternMismatch {
                vat: self.vat.clone(),
                country,
            });
        }

        Ok(country)
    }

    /// Validate and package the outcome for serialization.
    pub fn report(&self) -> ValidationReport {
        let result = self.check();
        ValidationReport {
            vat: self.vat.clone(),
            country: self.country,
            valid: result.is_ok(),
            reason: result.err().map(|e| e.to_string()),
        }
    }
}

/// Check `vat` against the format rule of `country`.
///
/// Equivalent to `VatValidator::with_country(vat, country).is_valid()`.
pub fn validate(vat: &str, country: &str) -> bool {
    VatValidator::with_country(vat, country).is_valid()
}
