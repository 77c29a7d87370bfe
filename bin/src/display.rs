//! Display utilities and output formatting for the obligo CLI.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::ValueEnum;
use obligo_lib::prelude::*;

/// Output format for parsed records.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Table,
    Json,
}

/// Print records as an aligned table.
pub(crate) fn print_record_table(records: &[BondRecord]) {
    println!(
        "{:<14} {:<24} {:>14} {:<12} {:>8} {:<10} {:>10}",
        "ISIN", "NAME", "NOMINAL", "MATURITY", "COUPON", "FREQUENCY", "PRICE"
    );
    println!("{}", "-".repeat(98));

    for record in records {
        println!(
            "{:<14} {:<24} {:>14.2} {:<12} {:>7.3}% {:<10} {:>10.3}",
            record.isin,
            record.name,
            record.nominal_amount,
            record.maturity.to_string(),
            record.coupon_rate * 100.0,
            record.payment_frequency,
            record.market_price
        );
    }

    println!("\nTotal: {} bonds", records.len());
}

/// Print records as a JSON array.
pub(crate) fn print_record_json(records: &[BondRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    println!("{json}");
    Ok(())
}

/// Parse a `YYYY-MM-DD` valuation date, defaulting to today.
pub(crate) fn parse_asof(asof: Option<&str>) -> Result<NaiveDate> {
    asof.map_or_else(
        || Ok(chrono::Utc::now().date_naive()),
        |s| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .with_context(|| format!("Invalid valuation date '{s}' (expected YYYY-MM-DD)"))
        },
    )
}
