//! Turning a roster response body into a sorted list of students
//!
//! The endpoint serves one student per line with five comma-separated
//! fields. [`parse_students`] walks the body, builds a [`StudentRecord`] per
//! line according to [`ParseOptions`], then orders the result with
//! [`sort_by_first_name`].

use crate::config::{Config, MalformedLinePolicy};
use crate::error::FetchError;
use crate::types::StudentRecord;

/// Knobs that affect how a roster body is parsed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// What to do with a line that does not have exactly five fields
    pub malformed_lines: MalformedLinePolicy,
    /// Drop the first line of the body before parsing
    pub skip_header: bool,
}

impl From<&Config> for ParseOptions {
    fn from(config: &Config) -> Self {
        Self {
            malformed_lines: config.malformed_lines,
            skip_header: config.skip_header,
        }
    }
}

/// Parse a roster body into records sorted by first name
///
/// Blank lines are ignored. Line numbers in errors and log fields are
/// 1-based and count every line of the body, including a skipped header.
pub fn parse_students(
    body: &str,
    options: ParseOptions,
) -> Result<Vec<StudentRecord>, FetchError> {
    let mut students = Vec::new();
    let start = usize::from(options.skip_header);

    for (index, line) in body.lines().enumerate().skip(start) {
        if line.trim().is_empty() {
            continue;
        }

        match StudentRecord::parse_line(line) {
            Ok(student) => students.push(student),
            Err(source) => match options.malformed_lines {
                MalformedLinePolicy::Skip => {
                    tracing::warn!(
                        line = index + 1,
                        error = %source,
                        "skipping malformed student record"
                    );
                }
                MalformedLinePolicy::Fail => {
                    return Err(FetchError::MalformedRecord {
                        line: index + 1,
                        source,
                    });
                }
            },
        }
    }

    sort_by_first_name(&mut students);
    Ok(students)
}

/// Stable ascending sort by `first_name`, comparing bytes
///
/// Byte order on UTF-8 is Unicode code point order. It is not UTF-16
/// code unit order: U+FF5E sorts before U+1F600 here, the reverse of a
/// UTF-16 comparison. Students sharing a first name stay in the order they
/// were served.
pub fn sort_by_first_name(students: &mut [StudentRecord]) {
    students.sort_by(|a, b| a.first_name.cmp(&b.first_name));
}
