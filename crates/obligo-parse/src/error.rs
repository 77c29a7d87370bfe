//! Parse failure taxonomy.

use std::path::PathBuf;

use obligo_types::CalendarDateError;
use thiserror::Error;

/// The numeric fields of a bond record line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    /// Nominal (face) amount, third field.
    NominalAmount,
    /// Coupon rate, fifth field.
    CouponRate,
    /// Market price, seventh field.
    MarketPrice,
}

impl NumericField {
    /// Returns the field name as it appears in the source header.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NominalAmount => "nominal amount",
            Self::CouponRate => "coupon rate",
            Self::MarketPrice => "market price",
        }
    }
}

impl std::fmt::Display for NumericField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that can occur while parsing a bond record source.
///
/// Line numbers are 1-based physical line numbers, counting the header as
/// line 1.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The source could not be opened or read.
    #[error("Cannot read source '{}': {source}", path.display())]
    UnreadableSource {
        /// The source locator.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A line did not split into the expected number of fields.
    #[error("Line {line}: expected 7 comma-separated fields, found {found}")]
    MalformedRecord {
        /// Line number of the offending line.
        line: usize,
        /// Number of fields actually found.
        found: usize,
    },

    /// A numeric field failed to parse or violated its value constraints.
    #[error("Line {line}: invalid {field} '{value}'")]
    MalformedNumber {
        /// Which numeric field was malformed.
        field: NumericField,
        /// Line number of the offending line.
        line: usize,
        /// The raw token.
        value: String,
    },

    /// The maturity date token was too short or contained non-numeric parts.
    #[error("Line {line}: invalid maturity date '{value}'")]
    MalformedDate {
        /// Line number of the offending line.
        line: usize,
        /// The raw token.
        value: String,
        /// The underlying decode error.
        #[source]
        source: CalendarDateError,
    },

    /// The payment frequency label is not a recognized variant.
    #[error("Line {line}: unknown payment frequency '{value}'")]
    UnknownPaymentFrequency {
        /// Line number of the offending line.
        line: usize,
        /// The raw label.
        value: String,
    },
}

impl ParseError {
    /// Returns the offending line number, if this error is tied to a line.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::UnreadableSource { .. } => None,
            Self::MalformedRecord { line, .. }
            | Self::MalformedNumber { line, .. }
            | Self::MalformedDate { line, .. }
            | Self::UnknownPaymentFrequency { line, .. } => Some(*line),
        }
    }
}
