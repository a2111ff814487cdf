//! Core types for student-sync

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Number of comma-separated fields on a roster line
pub const FIELD_COUNT: usize = 5;

/// Field separator used by the roster endpoint
pub const FIELD_SEPARATOR: char = ',';

/// One student as served by the roster endpoint
///
/// Fields are kept as the raw strings from the roster line; nothing is
/// trimmed, validated or normalized. The JSON representation uses exactly
/// the field names below.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Student identifier (position 0)
    pub id: String,
    /// Given name (position 1), the sort key
    pub first_name: String,
    /// Family name (position 2)
    pub last_name: String,
    /// Email address (position 3)
    pub email: String,
    /// Last known IP address (position 4)
    pub ip_address: String,
}

impl StudentRecord {
    /// Build a record from already-split fields, by position
    ///
    /// Fails with [`ParseError::WrongFieldCount`] unless exactly
    /// [`FIELD_COUNT`] fields are given.
    ///
    /// # Examples
    ///
    /// ```
    /// use student_sync::StudentRecord;
    ///
    /// let record =
    ///     StudentRecord::try_from_fields(&["1", "Ann", "Lee", "ann@x.com", "1.1.1.1"]).unwrap();
    /// assert_eq!(record.first_name, "Ann");
    ///
    /// assert!(StudentRecord::try_from_fields(&["1", "Ann"]).is_err());
    /// ```
    pub fn try_from_fields(fields: &[&str]) -> Result<Self, ParseError> {
        match fields {
            [id, first_name, last_name, email, ip_address] => Ok(Self {
                id: (*id).to_string(),
                first_name: (*first_name).to_string(),
                last_name: (*last_name).to_string(),
                email: (*email).to_string(),
                ip_address: (*ip_address).to_string(),
            }),
            _ => Err(ParseError::WrongFieldCount {
                expected: FIELD_COUNT,
                found: fields.len(),
            }),
        }
    }

    /// Split a single roster line on commas and build a record from it
    ///
    /// This is a plain split: there is no quoting or escaping, so a value
    /// containing a comma shifts every later field.
    pub fn parse_line(line: &str) -> Result<Self, ParseError> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        Self::try_from_fields(&fields)
    }
}

impl std::str::FromStr for StudentRecord {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_line(s)
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_map_to_record_by_position() {
        let fields = ["42", "Ann", "Lee", "ann@x.com", "10.0.0.1"];
        let record = StudentRecord::try_from_fields(&fields).unwrap();

        assert_eq!(record.id, fields[0]);
        assert_eq!(record.first_name, fields[1]);
        assert_eq!(record.last_name, fields[2]);
        assert_eq!(record.email, fields[3]);
        assert_eq!(record.ip_address, fields[4]);
    }

    #[test]
    fn too_few_fields_is_rejected() {
        let err = StudentRecord::try_from_fields(&["1", "Ann", "Lee"]).unwrap_err();
        assert_eq!(
            err,
            ParseError::WrongFieldCount {
                expected: 5,
                found: 3
            }
        );
    }

    #[test]
    fn too_many_fields_is_rejected() {
        let err = StudentRecord::parse_line("1,Ann,Lee,ann@x.com,1.1.1.1,extra").unwrap_err();
        assert_eq!(
            err,
            ParseError::WrongFieldCount {
                expected: 5,
                found: 6
            }
        );
    }

    #[test]
    fn parse_line_keeps_raw_values() {
        // Whitespace and empty values pass through untouched
        let record = StudentRecord::parse_line(" 7,,Roe , bob@x.com,").unwrap();

        assert_eq!(record.id, " 7");
        assert_eq!(record.first_name, "");
        assert_eq!(record.last_name, "Roe ");
        assert_eq!(record.email, " bob@x.com");
        assert_eq!(record.ip_address, "");
    }

    #[test]
    fn from_str_matches_parse_line() {
        let line = "2,Bob,Roe,bob@x.com,2.2.2.2";
        let parsed: StudentRecord = line.parse().unwrap();
        assert_eq!(parsed, StudentRecord::parse_line(line).unwrap());
    }

    #[test]
    fn json_uses_snake_case_keys() {
        let record = StudentRecord::parse_line("1,Ann,Lee,ann@x.com,1.1.1.1").unwrap();
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "id": "1",
                "first_name": "Ann",
                "last_name": "Lee",
                "email": "ann@x.com",
                "ip_address": "1.1.1.1",
            })
        );
    }

    #[test]
    fn json_array_deserializes_back_to_records() {
        let records = vec![
            StudentRecord::parse_line("1,Ann,Lee,ann@x.com,1.1.1.1").unwrap(),
            StudentRecord::parse_line("2,Bob,Roe,bob@x.com,2.2.2.2").unwrap(),
        ];

        let json = serde_json::to_string(&records).unwrap();
        let decoded: Vec<StudentRecord> = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, records);
    }
}
