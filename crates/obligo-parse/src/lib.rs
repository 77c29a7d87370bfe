//! Record parsers for the obligo bond toolkit.
//!
//! This crate turns a delimited text source into an ordered sequence of fully
//! populated [`obligo_types::BondRecord`] values:
//!
//! - [`BondParser`] - format-polymorphic parsing capability
//! - [`CsvBondParser`] - the comma-delimited implementation
//! - [`ParseError`] - the decode failure taxonomy
//!
//! Parsing is fail-fast by default: the first malformed line aborts the whole
//! call and no partial results are returned. [`CsvBondParser::parse_lossy`]
//! is the explicit lenient alternative.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/obligo-rs/obligo/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod error;
mod parser;

pub use crate::csv::{CsvBondParser, LossyParse};
pub use error::{NumericField, ParseError};
pub use parser::BondParser;
