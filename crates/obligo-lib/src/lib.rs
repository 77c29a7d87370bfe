//! Bond list parsing and pricing toolkit.
//!
//! This is a facade crate that re-exports functionality from the obligo
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```no_run
//! use obligo_lib::prelude::*;
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let parser = CsvBondParser::new();
//!     let records = parser.parse(Path::new("bonds.csv"))?;
//!
//!     for record in &records {
//!         println!("{}: {} maturing {}", record.isin, record.name, record.maturity);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/obligo-rs/obligo/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use obligo_types::*;

// Re-export parsers
#[cfg(feature = "parse")]
pub use obligo_parse::{BondParser, CsvBondParser, LossyParse, NumericField, ParseError};

// Re-export pricing analytics
#[cfg(feature = "pricing")]
pub use obligo_pricing::{
    PricingError, RateCurve, accrued_interest, discount_factor, price_fixed_rate,
    yield_to_maturity, years_to_maturity,
};

/// Prelude module for convenient imports.
///
/// ```
/// use obligo_lib::prelude::*;
/// ```
pub mod prelude {
    pub use obligo_types::{BondRecord, CalendarDate, CalendarDateError, PaymentFrequency};

    #[cfg(feature = "parse")]
    pub use obligo_parse::{BondParser, CsvBondParser, LossyParse, ParseError};

    #[cfg(feature = "pricing")]
    pub use obligo_pricing::{
        PricingError, RateCurve, accrued_interest, price_fixed_rate, yield_to_maturity,
        years_to_maturity,
    };
}
