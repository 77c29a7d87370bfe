//! Yield to maturity solving.

use chrono::NaiveDate;
use obligo_types::CalendarDate;

use crate::price::{DAYS_PER_YEAR, validate_cash_flow_inputs};
use crate::{PricingError, price_fixed_rate};

/// Initial yield guess for the Newton iteration.
const INITIAL_GUESS: f64 = 0.05;

/// Maximum Newton iterations before giving up.
const MAX_ITERATIONS: usize = 100;

/// Convergence tolerance on the pricing residual.
const TOLERANCE: f64 = 1e-10;

/// Returns the tenor of a maturity date in years from `asof`, on the 360-day
/// basis.
///
/// # Errors
///
/// Returns an error if the maturity is not a real calendar date.
pub fn years_to_maturity(asof: NaiveDate, maturity: CalendarDate) -> Result<f64, PricingError> {
    let maturity_date = maturity
        .to_naive_date()
        .ok_or(PricingError::InvalidMaturity(maturity))?;

    Ok((maturity_date - asof).num_days() as f64 / DAYS_PER_YEAR)
}

/// Solves for the flat annual rate at which the bond's discounted cash flows
/// equal its market price, using Newton's method.
///
/// # Errors
///
/// Returns an error if the inputs are invalid, the maturity is zero years,
/// or the iteration fails to converge.
pub fn yield_to_maturity(
    nominal: f64,
    coupon_rate: f64,
    maturity_years: usize,
    market_price: f64,
) -> Result<f64, PricingError> {
    validate_cash_flow_inputs(nominal, coupon_rate)?;
    if !market_price.is_finite() || market_price <= 0.0 {
        return Err(PricingError::InvalidInput {
            name: "market price",
            value: market_price,
        });
    }
    if maturity_years == 0 {
        return Err(PricingError::InvalidInput {
            name: "maturity years",
            value: 0.0,
        });
    }

    let mut rate = INITIAL_GUESS;
    for _ in 0..MAX_ITERATIONS {
        let residual = price_fixed_rate(nominal, coupon_rate, maturity_years, rate)? - market_price;
        if residual.abs() < TOLERANCE {
            return Ok(rate);
        }

        let slope = price_derivative(nominal, coupon_rate, maturity_years, rate);
        if slope.abs() < f64::EPSILON {
            break;
        }

        rate -= residual / slope;
        // Keep the iterate inside the domain of the discounting base.
        if rate <= -1.0 {
            rate = -1.0 + 1e-6;
        }
    }

    Err(PricingError::NoConvergence {
        iterations: MAX_ITERATIONS,
    })
}

/// Derivative of the flat-rate bond price with respect to the rate.
fn price_derivative(nominal: f64, coupon_rate: f64, maturity_years: usize, rate: f64) -> f64 {
    let coupon = nominal * coupon_rate;
    let base = 1.0 + rate;

    let mut slope = 0.0;
    for year in 1..=maturity_years {
        let cash_flow = if year == maturity_years {
            coupon + nominal
        } else {
            coupon
        };
        let t = year as f64;
        slope -= t * cash_flow / base.powf(t + 1.0);
    }
    slope
}
