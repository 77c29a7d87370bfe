//! Comma-delimited bond list parser.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use obligo_types::{BondRecord, CalendarDate, PaymentFrequency, UnknownFrequencyError};

use crate::{BondParser, NumericField, ParseError};

/// Number of comma-separated fields in one record line.
const FIELD_COUNT: usize = 7;

/// Parser for plain comma-delimited bond lists.
///
/// Expected line layout, one record per line after a single header line:
///
/// ```text
/// isin,name,nominal_amount,maturity,coupon_rate,payment_frequency,market_price
/// US1234567890,Acme Corp Bond,1000000,20280101,0.045,Annual,98.5
/// ```
///
/// The maturity field is a fixed-width `YYYYMMDD` token. No quoting or
/// escaping of embedded delimiters is supported; identifier and name are
/// taken verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvBondParser;

/// Result of a lenient parse: decoded records plus the errors of skipped lines.
#[derive(Debug)]
pub struct LossyParse {
    /// Records from lines that decoded successfully, in input order.
    pub records: Vec<BondRecord>,
    /// One error per skipped line, in input order.
    pub errors: Vec<ParseError>,
}

impl CsvBondParser {
    /// Creates a new CSV bond parser.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parses the source leniently: malformed lines are skipped and their
    /// errors collected instead of aborting the call.
    ///
    /// This is the explicit alternative to the fail-fast [`BondParser::parse`]
    /// contract. Line order is preserved in both the records and the errors.
    ///
    /// # Errors
    ///
    /// Returns an error only if the source itself cannot be opened or read.
    pub fn parse_lossy(&self, path: &Path) -> Result<LossyParse, ParseError> {
        let mut records = Vec::new();
        let mut errors = Vec::new();

        for_each_line(path, |line, line_no| {
            match decode_line(line, line_no) {
                Ok(record) => records.push(record),
                Err(e) => errors.push(e),
            }
            Ok(())
        })?;

        Ok(LossyParse { records, errors })
    }
}

impl BondParser for CsvBondParser {
    fn parse(&self, path: &Path) -> Result<Vec<BondRecord>, ParseError> {
        let mut records = Vec::new();

        for_each_line(path, |line, line_no| {
            records.push(decode_line(line, line_no)?);
            Ok(())
        })?;

        Ok(records)
    }
}

/// Opens the source and invokes `f` for every data line with its 1-based
/// physical line number (the header is line 1 and is discarded unread).
///
/// The file handle is scoped to this function, so it is released on every
/// exit path, including early return on a decode error.
fn for_each_line<F>(path: &Path, mut f: F) -> Result<(), ParseError>
where
    F: FnMut(&str, usize) -> Result<(), ParseError>,
{
    let file = File::open(path).map_err(|source| ParseError::UnreadableSource {
        path: path.to_path_buf(),
        source,
    })?;

    let mut lines = BufReader::new(file).lines().enumerate();

    // Discard the header. A source with no lines at all is an empty sequence,
    // not an error.
    match lines.next() {
        None => return Ok(()),
        Some((_, Err(source))) => {
            return Err(ParseError::UnreadableSource {
                path: path.to_path_buf(),
                source,
            });
        }
        Some((_, Ok(_))) => {}
    }

    for (idx, line) in lines {
        let line_no = idx + 1;
        let line = line.map_err(|source| ParseError::UnreadableSource {
            path: path.to_path_buf(),
            source,
        })?;
        f(&line, line_no)?;
    }

    Ok(())
}

/// Decodes one data line into a fully populated record.
fn decode_line(line: &str, line_no: usize) -> Result<BondRecord, ParseError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != FIELD_COUNT {
        return Err(ParseError::MalformedRecord {
            line: line_no,
            found: fields.len(),
        });
    }

    let isin = fields[0].to_string();
    let name = fields[1].to_string();
    let nominal_amount = decode_amount(fields[2], NumericField::NominalAmount, line_no)?;
    let maturity =
        CalendarDate::from_compact(fields[3]).map_err(|source| ParseError::MalformedDate {
            line: line_no,
            value: fields[3].to_string(),
            source,
        })?;
    let coupon_rate = decode_number(fields[4], NumericField::CouponRate, line_no)?;
    let payment_frequency = PaymentFrequency::from_str(fields[5]).map_err(
        |UnknownFrequencyError(value)| ParseError::UnknownPaymentFrequency {
            line: line_no,
            value,
        },
    )?;
    let market_price = decode_amount(fields[6], NumericField::MarketPrice, line_no)?;

    Ok(BondRecord::new(
        isin,
        name,
        nominal_amount,
        maturity,
        coupon_rate,
        payment_frequency,
        market_price,
    ))
}

/// Parses a numeric token that only needs to be a finite number.
fn decode_number(token: &str, field: NumericField, line_no: usize) -> Result<f64, ParseError> {
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseError::MalformedNumber {
            field,
            line: line_no,
            value: token.to_string(),
        })
}

/// Parses a numeric token that must additionally be non-negative (amounts and
/// prices).
fn decode_amount(token: &str, field: NumericField, line_no: usize) -> Result<f64, ParseError> {
    let value = decode_number(token, field, line_no)?;
    if value < 0.0 {
        return Err(ParseError::MalformedNumber {
            field,
            line: line_no,
            value: token.to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    const HEADER: &str =
        "isin,name,nominal_amount,maturity,coupon_rate,payment_frequency,market_price";

    fn write_source(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_round_trip_single_record() {
        let file = write_source(&[
            HEADER,
            "US1234567890,Acme Corp Bond,1000000,20280101,0.045,Annual,98.5",
        ]);

        let records = CsvBondParser::new().parse(file.path()).unwrap();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.isin, "US1234567890");
        assert_eq!(record.name, "Acme Corp Bond");
        assert!((record.nominal_amount - 1_000_000.0).abs() < 1e-9);
        assert_eq!(record.maturity, CalendarDate::new(2028, 1, 1).unwrap());
        assert!((record.coupon_rate - 0.045).abs() < 1e-12);
        assert_eq!(record.payment_frequency, PaymentFrequency::Annual);
        assert!((record.market_price - 98.5).abs() < 1e-12);
    }

    #[test]
    fn test_preserves_input_order() {
        let file = write_source(&[
            HEADER,
            "FR0000000001,First,100,20260101,0.01,Annual,99.1",
            "FR0000000002,Second,100,20270101,0.02,Annual,98.2",
            "FR0000000003,Third,100,20280101,0.03,Annual,97.3",
        ]);

        let records = CsvBondParser::new().parse(file.path()).unwrap();
        let isins: Vec<_> = records.iter().map(|r| r.isin.as_str()).collect();
        assert_eq!(
            isins,
            ["FR0000000001", "FR0000000002", "FR0000000003"]
        );
    }

    #[test]
    fn test_header_only_is_empty() {
        let file = write_source(&[HEADER]);
        let records = CsvBondParser::new().parse(file.path()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_empty_source_is_empty() {
        let file = write_source(&[]);
        let records = CsvBondParser::new().parse(file.path()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_missing_source() {
        let result = CsvBondParser::new().parse(Path::new("/nonexistent/bonds.csv"));
        assert!(matches!(result, Err(ParseError::UnreadableSource { .. })));
    }

    #[test]
    fn test_malformed_record_field_count() {
        let file = write_source(&[HEADER, "US1234567890,Acme Corp Bond,1000000"]);

        let err = CsvBondParser::new().parse(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MalformedRecord { line: 2, found: 3 }
        ));
    }

    #[test]
    fn test_extra_fields_are_rejected() {
        // Without quoting there is no way to tell an extra field from an
        // embedded comma, so surplus fields are malformed rather than ignored.
        let file = write_source(&[
            HEADER,
            "US1234567890,Acme Corp Bond,1000000,20280101,0.045,Annual,98.5,extra",
        ]);

        let err = CsvBondParser::new().parse(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MalformedRecord { line: 2, found: 8 }
        ));
    }

    #[test]
    fn test_malformed_nominal_amount() {
        let file = write_source(&[
            HEADER,
            "US1234567890,Acme Corp Bond,abc,20280101,0.045,Annual,98.5",
        ]);

        let err = CsvBondParser::new().parse(file.path()).unwrap_err();
        match err {
            ParseError::MalformedNumber { field, line, value } => {
                assert_eq!(field, NumericField::NominalAmount);
                assert_eq!(line, 2);
                assert_eq!(value, "abc");
            }
            other => panic!("expected MalformedNumber, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_market_price_rejected() {
        let file = write_source(&[
            HEADER,
            "US1234567890,Acme Corp Bond,1000000,20280101,0.045,Annual,-98.5",
        ]);

        let err = CsvBondParser::new().parse(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MalformedNumber {
                field: NumericField::MarketPrice,
                line: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_non_finite_nominal_rejected() {
        let file = write_source(&[
            HEADER,
            "US1234567890,Acme Corp Bond,inf,20280101,0.045,Annual,98.5",
        ]);

        let err = CsvBondParser::new().parse(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MalformedNumber {
                field: NumericField::NominalAmount,
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_date_too_short() {
        let file = write_source(&[
            HEADER,
            "US1234567890,Acme Corp Bond,1000000,2031,0.045,Annual,98.5",
        ]);

        let err = CsvBondParser::new().parse(file.path()).unwrap_err();
        match err {
            ParseError::MalformedDate { line, value, .. } => {
                assert_eq!(line, 2);
                assert_eq!(value, "2031");
            }
            other => panic!("expected MalformedDate, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_payment_frequency() {
        let file = write_source(&[
            HEADER,
            "US1234567890,Acme Corp Bond,1000000,20280101,0.045,Semiannual,98.5",
        ]);

        let err = CsvBondParser::new().parse(file.path()).unwrap_err();
        match err {
            ParseError::UnknownPaymentFrequency { line, value } => {
                assert_eq!(line, 2);
                assert_eq!(value, "Semiannual");
            }
            other => panic!("expected UnknownPaymentFrequency, got {other:?}"),
        }
    }

    #[test]
    fn test_fail_fast_reports_first_bad_line() {
        let file = write_source(&[
            HEADER,
            "FR0000000001,First,100,20260101,0.01,Annual,99.1",
            "FR0000000002,Second,bad,20270101,0.02,Annual,98.2",
            "FR0000000003,Third,also-bad,20280101,0.03,Annual,97.3",
        ]);

        let err = CsvBondParser::new().parse(file.path()).unwrap_err();
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_fields_taken_verbatim() {
        // No trimming: surrounding whitespace stays part of the value.
        let file = write_source(&[
            HEADER,
            " US1234567890, Acme Corp Bond ,1000000,20280101,0.045,Annual,98.5",
        ]);

        let records = CsvBondParser::new().parse(file.path()).unwrap();
        assert_eq!(records[0].isin, " US1234567890");
        assert_eq!(records[0].name, " Acme Corp Bond ");
    }

    #[test]
    fn test_lossy_collects_and_continues() {
        let file = write_source(&[
            HEADER,
            "FR0000000001,First,100,20260101,0.01,Annual,99.1",
            "FR0000000002,Second,bad,20270101,0.02,Annual,98.2",
            "FR0000000003,Third,100,20280101,0.03,Quarterly,97.3",
            "FR0000000004,Fourth,100,20290101,0.04,Annual,96.4",
        ]);

        let result = CsvBondParser::new().parse_lossy(file.path()).unwrap();
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.records[0].isin, "FR0000000001");
        assert_eq!(result.records[1].isin, "FR0000000004");

        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.errors[0].line(), Some(3));
        assert_eq!(result.errors[1].line(), Some(4));
    }

    #[test]
    fn test_lossy_missing_source_still_fails() {
        let result = CsvBondParser::new().parse_lossy(Path::new("/nonexistent/bonds.csv"));
        assert!(matches!(result, Err(ParseError::UnreadableSource { .. })));
    }
}
