//! Core types for the obligo bond toolkit.
//!
//! This crate provides the fundamental data structures used throughout obligo:
//!
//! - [`BondRecord`] - One decoded bond entry (identifier, amounts, maturity, rate)
//! - [`CalendarDate`] - Year/month/day triplet decoded from a compact `YYYYMMDD` token
//! - [`PaymentFrequency`] - Enumerated coupon payment cadence

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/obligo-rs/obligo/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod date;
mod frequency;
mod record;

pub use date::{CalendarDate, CalendarDateError};
pub use frequency::{PaymentFrequency, UnknownFrequencyError};
pub use record::BondRecord;
