//! Coupon payment frequency.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error for an unrecognized payment frequency label.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown payment frequency: {0}")]
pub struct UnknownFrequencyError(pub String);

/// Enumerated cadence of coupon payments.
///
/// This is a closed enumeration: decoding matches labels case-sensitively and
/// an unrecognized label is an error, never a silent default. Adding a cadence
/// (e.g. semiannual, quarterly) means adding a variant here and letting the
/// compiler point at every match that needs updating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentFrequency {
    /// One coupon payment per year.
    Annual,
}

impl PaymentFrequency {
    /// Returns the canonical label for this frequency.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Annual => "Annual",
        }
    }

    /// Returns the number of coupon payments per year.
    #[must_use]
    pub const fn periods_per_year(&self) -> u32 {
        match self {
            Self::Annual => 1,
        }
    }
}

impl std::fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PaymentFrequency {
    type Err = UnknownFrequencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Annual" => Ok(Self::Annual),
            _ => Err(UnknownFrequencyError(s.to_string())),
        }
    }
}
