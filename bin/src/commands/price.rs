//! Price command implementation.
//!
//! Prices a bond from its cash flow terms under a flat rate or a per-year
//! rate curve.

use anyhow::{Context, Result, bail};
use obligo_lib::prelude::*;

/// Price a bond under the requested rate assumption.
pub(crate) fn price(
    nominal: f64,
    coupon: f64,
    years: usize,
    rate: Option<f64>,
    curve: Option<&str>,
    tenor: Option<f64>,
) -> Result<()> {
    let value = match (rate, curve) {
        (Some(rate), None) => {
            let value = price_fixed_rate(nominal, coupon, years, rate)?;
            println!("Flat rate:  {:.4}%", rate * 100.0);
            value
        }
        (None, Some(curve)) => {
            let curve = parse_curve(curve)?;
            match tenor {
                Some(tenor) => {
                    let interpolated = curve.rate_at(tenor)?;
                    println!("Interpolated rate at {tenor}y: {:.4}%", interpolated * 100.0);
                    curve.price_interpolated(nominal, coupon, tenor)?
                }
                None => curve.price(nominal, coupon, years)?,
            }
        }
        (None, None) => bail!("Provide either --rate or --curve"),
        (Some(_), Some(_)) => unreachable!("clap rejects --rate with --curve"),
    };

    println!("Nominal:    {nominal:.2}");
    println!("Coupon:     {:.4}%", coupon * 100.0);
    println!("Maturity:   {years}y");
    println!("Price:      {value:.6}");
    Ok(())
}

/// Parse a comma-separated list of per-year rates into a curve.
fn parse_curve(curve: &str) -> Result<RateCurve> {
    let rates = curve
        .split(',')
        .map(|token| {
            token
                .trim()
                .parse::<f64>()
                .with_context(|| format!("Invalid curve rate '{token}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    RateCurve::new(rates).context("Invalid rate curve")
}
