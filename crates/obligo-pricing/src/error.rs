//! Pricing failure taxonomy.

use obligo_types::CalendarDate;
use thiserror::Error;

/// Errors that can occur during pricing and yield computations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// An input value is non-finite or otherwise out of domain.
    #[error("Invalid {name}: {value}")]
    InvalidInput {
        /// Name of the offending input.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// The rate curve has fewer quoted years than the bond's maturity.
    #[error("Maturity of {required} years exceeds the {available} quoted years on the curve")]
    CurveTooShort {
        /// Years required by the bond.
        required: usize,
        /// Years quoted on the curve.
        available: usize,
    },

    /// The maturity is structurally valid but not a real calendar date.
    #[error("Maturity {0} is not a valid calendar date")]
    InvalidMaturity(CalendarDate),

    /// The yield solver failed to converge.
    #[error("Yield solver did not converge after {iterations} iterations")]
    NoConvergence {
        /// Iterations performed before giving up.
        iterations: usize,
    },
}
