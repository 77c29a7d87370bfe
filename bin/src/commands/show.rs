//! Show command implementation.
//!
//! Parses a bond list and prints its records as a table or JSON.

use std::path::Path;

use anyhow::Result;
use obligo_lib::prelude::*;

use crate::display::{Format, print_record_json, print_record_table};

/// Parse the bond list and print every record.
pub(crate) fn show(file: &Path, format: Format, skip_bad: bool) -> Result<()> {
    let parser = CsvBondParser::new();

    let records = if skip_bad {
        let result = parser.parse_lossy(file)?;
        for error in &result.errors {
            eprintln!("warning: skipped {error}");
        }
        result.records
    } else {
        parser.parse(file)?
    };

    match format {
        Format::Table => print_record_table(&records),
        Format::Json => print_record_json(&records)?,
    }

    Ok(())
}
