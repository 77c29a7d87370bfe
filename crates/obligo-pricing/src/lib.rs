//! Bond pricing and yield analytics for the obligo bond toolkit.
//!
//! This crate consumes the validated records produced by `obligo-parse` and
//! provides:
//!
//! - [`price_fixed_rate`] - discounted cash flow price under one flat rate
//! - [`RateCurve`] - per-year zero rates with linear interpolation
//! - [`accrued_interest`] - coupon accrual on the 360-day basis
//! - [`yield_to_maturity`] - Newton's method yield solver

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/obligo-rs/obligo/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod curve;
mod error;
mod price;
mod ytm;

pub use curve::RateCurve;
pub use error::PricingError;
pub use price::{DAYS_PER_YEAR, accrued_interest, discount_factor, price_fixed_rate};
pub use ytm::{yield_to_maturity, years_to_maturity};
