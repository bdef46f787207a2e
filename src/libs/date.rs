use crate::libs::error::TaskError;
use chrono::NaiveDate;

/// Wire format for every user-visible date.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Parses a due date in strict `dd.mm.yyyy` form.
///
/// chrono alone accepts single-digit days and months, so the shape is
/// checked first: two digits, a dot, two digits, a dot, four digits.
pub fn parse(input: &str) -> Result<NaiveDate, TaskError> {
    if !has_wire_shape(input) {
        return Err(TaskError::InvalidDate(input.to_string()));
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| TaskError::InvalidDate(input.to_string()))
}

pub fn format(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn has_wire_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes[2] == b'.'
        && bytes[5] == b'.'
        && bytes.iter().enumerate().all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit())
}
