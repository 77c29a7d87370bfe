//! Per-year zero rate curve with linear interpolation.

use crate::price::{discount_factor, validate_cash_flow_inputs, validate_rate};
use crate::{PricingError, price_fixed_rate};

/// A zero rate curve quoted at whole-year tenors.
///
/// `rates[i]` is the annual rate applying to a cash flow `i + 1` years out.
#[derive(Debug, Clone, PartialEq)]
pub struct RateCurve {
    rates: Vec<f64>,
}

impl RateCurve {
    /// Creates a curve from per-year rates, year 1 first.
    ///
    /// # Errors
    ///
    /// Returns an error if any rate is non-finite or at or below -100%.
    pub fn new(rates: Vec<f64>) -> Result<Self, PricingError> {
        for &rate in &rates {
            validate_rate(rate)?;
        }
        Ok(Self { rates })
    }

    /// Returns the number of quoted years.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the curve has no quoted rates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Returns the quoted rate for a whole-year tenor (year 1 is the first).
    #[must_use]
    pub fn rate_for_year(&self, year: usize) -> Option<f64> {
        if year == 0 {
            return None;
        }
        self.rates.get(year - 1).copied()
    }

    /// Prices a bond by discounting each year's cash flow at that year's
    /// quoted rate.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve has fewer quoted years than the bond's
    /// maturity, or the cash flow inputs are invalid.
    pub fn price(
        &self,
        nominal: f64,
        coupon_rate: f64,
        maturity_years: usize,
    ) -> Result<f64, PricingError> {
        validate_cash_flow_inputs(nominal, coupon_rate)?;
        if maturity_years > self.rates.len() {
            return Err(PricingError::CurveTooShort {
                required: maturity_years,
                available: self.rates.len(),
            });
        }

        let coupon = nominal * coupon_rate;
        let mut price = 0.0;
        for year in 1..=maturity_years {
            let cash_flow = if year == maturity_years {
                coupon + nominal
            } else {
                coupon
            };
            price += cash_flow * discount_factor(self.rates[year - 1], year as f64);
        }
        Ok(price)
    }

    /// Returns the rate at an arbitrary tenor by linear interpolation between
    /// the quoted years, with flat extrapolation beyond the ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve is empty or the tenor is non-finite.
    pub fn rate_at(&self, tenor_years: f64) -> Result<f64, PricingError> {
        if !tenor_years.is_finite() {
            return Err(PricingError::InvalidInput {
                name: "tenor",
                value: tenor_years,
            });
        }
        let Some((&first, &last)) = self.rates.first().zip(self.rates.last()) else {
            return Err(PricingError::CurveTooShort {
                required: 1,
                available: 0,
            });
        };

        // Quoted tenors are 1, 2, ..., n years.
        if tenor_years <= 1.0 {
            return Ok(first);
        }
        if tenor_years >= self.rates.len() as f64 {
            return Ok(last);
        }

        let lower = tenor_years.floor() as usize;
        let fraction = tenor_years - lower as f64;
        let below = self.rates[lower - 1];
        let above = self.rates[lower];
        Ok(below + fraction * (above - below))
    }

    /// Prices a bond maturing at a non-quoted tenor: the rate is interpolated
    /// at `tenor_years` and applied flat over the truncated whole-year coupon
    /// schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if interpolation fails or the cash flow inputs are
    /// invalid.
    pub fn price_interpolated(
        &self,
        nominal: f64,
        coupon_rate: f64,
        tenor_years: f64,
    ) -> Result<f64, PricingError> {
        let rate = self.rate_at(tenor_years)?;
        price_fixed_rate(nominal, coupon_rate, tenor_years as usize, rate)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn create_test_curve() -> RateCurve {
        RateCurve::new(vec![0.02, 0.025, 0.03, 0.035, 0.04]).unwrap()
    }

    #[test]
    fn test_rejects_invalid_rate() {
        assert!(RateCurve::new(vec![0.02, f64::NAN]).is_err());
    }

    #[test]
    fn test_rate_for_year() {
        let curve = create_test_curve();
        assert_eq!(curve.rate_for_year(0), None);
        assert_eq!(curve.rate_for_year(1), Some(0.02));
        assert_eq!(curve.rate_for_year(5), Some(0.04));
        assert_eq!(curve.rate_for_year(6), None);
    }

    #[test]
    fn test_price_with_curve() {
        let curve = create_test_curve();
        let coupon = 100.0 * 0.04;
        let expected = coupon * discount_factor(0.02, 1.0)
            + coupon * discount_factor(0.025, 2.0)
            + (coupon + 100.0) * discount_factor(0.03, 3.0);

        let price = curve.price(100.0, 0.04, 3).unwrap();
        assert_relative_eq!(price, expected, epsilon = 1e-10);
    }

    #[test]
    fn test_price_curve_too_short() {
        let curve = create_test_curve();
        assert!(matches!(
            curve.price(100.0, 0.04, 6),
            Err(PricingError::CurveTooShort {
                required: 6,
                available: 5,
            })
        ));
    }

    #[test]
    fn test_rate_at_quoted_tenors() {
        let curve = create_test_curve();
        assert_relative_eq!(curve.rate_at(1.0).unwrap(), 0.02, epsilon = 1e-12);
        assert_relative_eq!(curve.rate_at(3.0).unwrap(), 0.03, epsilon = 1e-12);
    }

    #[test]
    fn test_rate_at_interpolates() {
        let curve = create_test_curve();
        assert_relative_eq!(curve.rate_at(2.5).unwrap(), 0.0275, epsilon = 1e-12);
    }

    #[test]
    fn test_rate_at_extrapolates_flat() {
        let curve = create_test_curve();
        assert_relative_eq!(curve.rate_at(0.5).unwrap(), 0.02, epsilon = 1e-12);
        assert_relative_eq!(curve.rate_at(10.0).unwrap(), 0.04, epsilon = 1e-12);
    }

    #[test]
    fn test_rate_at_empty_curve() {
        let curve = RateCurve::new(Vec::new()).unwrap();
        assert!(curve.is_empty());
        assert!(curve.rate_at(1.0).is_err());
    }

    #[test]
    fn test_price_interpolated_matches_flat_price() {
        let curve = create_test_curve();
        let price = curve.price_interpolated(100.0, 0.04, 2.5).unwrap();
        let expected = price_fixed_rate(100.0, 0.04, 2, 0.0275).unwrap();
        assert_relative_eq!(price, expected, epsilon = 1e-10);
    }
}
