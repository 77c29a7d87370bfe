//! Discounted cash flow pricing and coupon accrual.

use chrono::NaiveDate;

use crate::PricingError;

/// Day-count denominator used throughout (360-day year convention).
pub const DAYS_PER_YEAR: f64 = 360.0;

/// Returns the discount factor `1 / (1 + rate)^periods`.
#[must_use]
pub fn discount_factor(rate: f64, periods: f64) -> f64 {
    (1.0 + rate).powf(periods).recip()
}

/// Prices a bond under a single flat rate.
///
/// The bond pays an annual coupon of `nominal * coupon_rate` for
/// `maturity_years` years, with the nominal redeemed alongside the final
/// coupon. Each cash flow is discounted at `rate`.
///
/// # Errors
///
/// Returns an error if any input is non-finite or the rate is at or below
/// -100% (the discounting base would be non-positive).
pub fn price_fixed_rate(
    nominal: f64,
    coupon_rate: f64,
    maturity_years: usize,
    rate: f64,
) -> Result<f64, PricingError> {
    validate_cash_flow_inputs(nominal, coupon_rate)?;
    validate_rate(rate)?;

    let coupon = nominal * coupon_rate;
    let mut price = 0.0;
    for year in 1..=maturity_years {
        let cash_flow = if year == maturity_years {
            coupon + nominal
        } else {
            coupon
        };
        price += cash_flow * discount_factor(rate, year as f64);
    }
    Ok(price)
}

/// Computes the coupon interest accrued between the last coupon date and
/// `asof` on the 360-day basis.
///
/// The dirty price of a bond is its clean price plus this accrual.
///
/// # Errors
///
/// Returns an error if the inputs are non-finite or `asof` precedes the last
/// coupon date.
pub fn accrued_interest(
    nominal: f64,
    coupon_rate: f64,
    last_coupon: NaiveDate,
    asof: NaiveDate,
) -> Result<f64, PricingError> {
    validate_cash_flow_inputs(nominal, coupon_rate)?;

    let days_elapsed = (asof - last_coupon).num_days();
    if days_elapsed < 0 {
        return Err(PricingError::InvalidInput {
            name: "days elapsed",
            value: days_elapsed as f64,
        });
    }

    Ok(nominal * coupon_rate * days_elapsed as f64 / DAYS_PER_YEAR)
}

pub(crate) fn validate_cash_flow_inputs(
    nominal: f64,
    coupon_rate: f64,
) -> Result<(), PricingError> {
    if !nominal.is_finite() || nominal < 0.0 {
        return Err(PricingError::InvalidInput {
            name: "nominal",
            value: nominal,
        });
    }
    if !coupon_rate.is_finite() {
        return Err(PricingError::InvalidInput {
            name: "coupon rate",
            value: coupon_rate,
        });
    }
    Ok(())
}

pub(crate) fn validate_rate(rate: f64) -> Result<(), PricingError> {
    if !rate.is_finite() || rate <= -1.0 {
        return Err(PricingError::InvalidInput {
            name: "rate",
            value: rate,
        });
    }
    Ok(())
}
