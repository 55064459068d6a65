//! Country resolution and error types.
//!
//! Turns the many ways a caller can name a country (`"de"`, `"DEU"`,
//! `"Germany"`) into the canonical code used to index the VAT rule table.

mod countries;
mod error;

pub use countries::*;
pub use error::*;
