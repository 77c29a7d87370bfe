//! Format-polymorphic parsing capability.

use std::path::Path;

use obligo_types::BondRecord;

use crate::ParseError;

/// Trait for bond record parsers.
///
/// Each implementation covers one source format. Callers depend on this trait
/// only, so sibling formats (fixed-width, quoted CSV, structured
/// serialization) can be added without touching call sites.
pub trait BondParser {
    /// Parses the source into an ordered sequence of bond records.
    ///
    /// The source is opened at the start of the call and released on every
    /// exit path. Parsing is fail-fast: the first malformed line aborts the
    /// call and no partial results are returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or any line fails to
    /// decode.
    fn parse(&self, path: &Path) -> Result<Vec<BondRecord>, ParseError>;
}
