//! Yields command implementation.
//!
//! Solves the yield to maturity of every bond in a list against a valuation
//! date, on the 360-day convention.

use std::path::Path;

use anyhow::Result;
use obligo_lib::prelude::*;

use crate::display::parse_asof;

/// Parse the bond list and print the solved yield of every bond.
pub(crate) fn yields(file: &Path, asof: Option<&str>) -> Result<()> {
    let asof = parse_asof(asof)?;
    let records = CsvBondParser::new().parse(file)?;

    println!(
        "{:<14} {:<24} {:<12} {:>8} {:>10}",
        "ISIN", "NAME", "MATURITY", "TENOR", "YTM"
    );
    println!("{}", "-".repeat(72));

    for record in &records {
        let tenor = years_to_maturity(asof, record.maturity)?;
        let maturity_years = tenor as usize;

        if maturity_years == 0 {
            println!(
                "{:<14} {:<24} {:<12} {:>7.2}y {:>10}",
                record.isin,
                record.name,
                record.maturity.to_string(),
                tenor,
                "-"
            );
            continue;
        }

        let ytm = yield_to_maturity(
            record.nominal_amount,
            record.coupon_rate,
            maturity_years,
            record.market_price,
        )?;

        println!(
            "{:<14} {:<24} {:<12} {:>7.2}y {:>9.4}%",
            record.isin,
            record.name,
            record.maturity.to_string(),
            tenor,
            ytm * 100.0
        );
    }

    println!("\nValuation date: {asof}");
    Ok(())
}
