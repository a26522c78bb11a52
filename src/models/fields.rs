//! Field-level parsers for travel attributes
//!
//! Each parser takes the raw text of one `;`-separated field and either
//! returns the typed value or the error the interpreter reports for that
//! field. They have no side effects.

use chrono::NaiveDate;

use crate::error::CommandError;

/// Date layout used in the data file, in tables and in commands
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse a `dd/MM/yyyy` date
///
/// Day and month must be two digits each and the year four digits; the
/// result must be a real calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate, CommandError> {
    let bytes = s.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[2] == b'/'
        && bytes[5] == b'/'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());

    if !shape_ok {
        return Err(CommandError::WrongDate);
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| CommandError::WrongDate)
}

/// Format a date as `dd/MM/yyyy`
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a day count, which must be a positive integer
pub fn parse_days(s: &str) -> Result<u32, CommandError> {
    let days: i64 = s.parse().map_err(|_| CommandError::WrongDayCount)?;
    if s.starts_with('+') || days <= 0 {
        return Err(CommandError::WrongDayCount);
    }
    u32::try_from(days).map_err(|_| CommandError::WrongDayCount)
}

/// Normalize a city name
///
/// Words are separated by whitespace or hyphens. Empty words are dropped and
/// each remaining word is capitalized, e.g. `"new  york"` becomes
/// `"New York"` and `"baden-baden"` becomes `"Baden Baden"`.
pub fn format_city(s: &str) -> String {
    s.split(|c: char| c.is_whitespace() || c == '-')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Serde adapter writing dates as `dd/MM/yyyy`
pub mod date_format {
    use chrono::NaiveDate;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(super::DATE_FORMAT))
    }
}
