//! Bond record representation.

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, PaymentFrequency};

/// A single decoded bond entry.
///
/// Records are immutable values: every field is populated from a successfully
/// decoded input line and never mutated afterwards. Partial records do not
/// exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondRecord {
    /// Unique security identifier (ISIN-like code).
    pub isin: String,
    /// Human-readable instrument name.
    pub name: String,
    /// Nominal (face) amount, finite and non-negative.
    pub nominal_amount: f64,
    /// Maturity date.
    pub maturity: CalendarDate,
    /// Coupon rate, stored as supplied (decimal or percentage convention).
    pub coupon_rate: f64,
    /// Coupon payment cadence.
    pub payment_frequency: PaymentFrequency,
    /// Observed market price, finite and non-negative.
    pub market_price: f64,
}

impl BondRecord {
    /// Creates a new bond record.
    #[must_use]
    pub const fn new(
        isin: String,
        name: String,
        nominal_amount: f64,
        maturity: CalendarDate,
        coupon_rate: f64,
        payment_frequency: PaymentFrequency,
        market_price: f64,
    ) -> Self {
        Self {
            isin,
            name,
            nominal_amount,
            maturity,
            coupon_rate,
            payment_frequency,
            market_price,
        }
    }

    /// Returns the total coupon amount paid per year (nominal x rate).
    #[must_use]
    pub fn annual_coupon(&self) -> f64 {
        self.nominal_amount * self.coupon_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record() -> BondRecord {
        BondRecord::new(
            "US1234567890".to_string(),
            "Acme Corp Bond".to_string(),
            1_000_000.0,
            CalendarDate::new(2028, 1, 1).unwrap(),
            0.045,
            PaymentFrequency::Annual,
            98.5,
        )
    }

    #[test]
    fn test_annual_coupon() {
        let record = create_test_record();
        assert!((record.annual_coupon() - 45_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_serde_round_trip() {
        let record = create_test_record();
        let json = serde_json::to_string(&record).unwrap();
        let back: BondRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
