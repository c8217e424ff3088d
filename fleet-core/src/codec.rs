//! Flat-record line codec.
//!
//! Lines are delimiter-joined positional fields. There is no trimming,
//! quoting, or escaping; delimiter characters inside field data are not
//! supported. For any record without embedded delimiters,
//! `decode(encode(record))` is the identity.

use crate::types::FlatRecord;

/// Field delimiter for flat-record lines.
pub const FIELD_DELIMITER: char = '|';

const FIELD_DELIMITER_STR: &str = "|";

/// Parses a flat-record line into its positional fields.
pub fn decode(line: &str) -> FlatRecord {
    FlatRecord::new(line.split(FIELD_DELIMITER).map(str::to_string).collect())
}

/// Serializes a record back into a delimiter-joined line.
pub fn encode(record: &FlatRecord) -> String {
    record.fields().join(FIELD_DELIMITER_STR)
}
