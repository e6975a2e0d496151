use chrono::format::ParseError;
use chrono::{Datelike, NaiveDate};

use crate::converters::Converter;

/// Format written by the export: day, month and a two digit year.
pub const EXPORT_DATE_FORMAT: &str = "%d.%m.%y";
/// Same layout with a four digit year, accepted when reading.
pub const LONG_YEAR_DATE_FORMAT: &str = "%d.%m.%Y";

/// Parses calendar dates (no time of day, no time zone).
///
/// The primary format is used for output and tried first when parsing, the
/// fallbacks are tried in order afterwards. A two digit year (`%y`) always
/// lands in 2000-2099: `01.03.70` is 1 March 2070, not 1970 as `chrono` alone
/// would read it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DateConverter {
    primary: String,
    fallbacks: Vec<String>
}

impl DateConverter {
    /// A converter that accepts exactly one `chrono` format string.
    pub fn with_format(format: impl Into<String>) -> Self {
        Self {
            primary: format.into(),
            fallbacks: Vec::new()
        }
    }

    /// Adds a fallback format tried after the ones already configured.
    pub fn or_format(mut self, format: impl Into<String>) -> Self {
        self.fallbacks.push(format.into());
        self
    }

    /// The format used when writing dates.
    pub fn format(&self) -> &str {
        &self.primary
    }
}

impl Default for DateConverter {
    fn default() -> Self {
        DateConverter::with_format(EXPORT_DATE_FORMAT).or_format(LONG_YEAR_DATE_FORMAT)
    }
}

impl Converter for DateConverter {
    type Value = NaiveDate;
    type Error = ParseError;

    fn from_cell(&self, text: &str) -> Result<NaiveDate, ParseError> {
        let text = text.trim();

        self.fallbacks.iter().fold(parse_in_century(text, &self.primary), |result, format| {
            result.or_else(|_| parse_in_century(text, format))
        })
    }

    fn to_cell(&self, value: &NaiveDate) -> String {
        value.format(&self.primary).to_string()
    }

    fn describe(&self) -> String {
        let mut formats = vec![self.primary.as_str()];
        formats.extend(self.fallbacks.iter().map(String::as_str));

        format!("a date formatted as {}", formats.join(" or "))
    }
}

fn parse_in_century(text: &str, format: &str) -> Result<NaiveDate, ParseError> {
    let date = NaiveDate::parse_from_str(text, format)?;

    if format.contains("%y") && date.year() < 2000 {
        return Ok(date.with_year(date.year() + 100).unwrap_or(date));
    }

    Ok(date)
}
