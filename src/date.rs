//! Flexible date values for deadlines and events.
//!
//! Input is tried as a full date-time, then as a date, and otherwise kept as
//! the text the user typed. Rendering always uses the canonical display
//! pattern, so two values are the same when they render the same.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer};

use crate::error::ValidationError;

// Each chrono pattern is paired with the exact shape it may match; `9` stands
// for one digit. chrono alone also takes unpadded or signed fields.
const DATE_TIME_INPUTS: [(&str, &str); 3] = [
    ("9999-99-99T99:99:99", "%Y-%m-%dT%H:%M:%S%.f"),
    ("9999-99-99T99:99", "%Y-%m-%dT%H:%M"),
    ("9999-99-99 99:99", "%Y-%m-%d %H:%M"),
];
const DATE_INPUT: (&str, &str) = ("9999-99-99", "%Y-%m-%d");

const DATE_TIME_DISPLAY: &str = "%b %-d %Y, %-I:%M %p";
const DATE_DISPLAY: &str = "%b %-d %Y";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateValue {
    DateTime(NaiveDateTime),
    Date(NaiveDate),
    Text(String),
}

impl DateValue {
    /// Parses `input`, naming `field` in the error when it is blank.
    pub fn parse(input: &str, field: &'static str) -> Result<Self, ValidationError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ValidationError::EmptyDate { field });
        }

        if let Some(dt) = DATE_TIME_INPUTS
            .iter()
            .filter(|(shape, _)| has_shape(input, shape))
            .find_map(|(_, fmt)| NaiveDateTime::parse_from_str(input, fmt).ok())
        {
            return Ok(Self::DateTime(dt));
        }

        let (shape, fmt) = DATE_INPUT;
        if has_shape(input, shape) {
            if let Ok(date) = NaiveDate::parse_from_str(input, fmt) {
                return Ok(Self::Date(date));
            }
        }

        Ok(Self::Text(input.to_string()))
    }
}

/// True when `input` is `shape` with every `9` a digit. A shape ending in
/// seconds may be followed by `.` and a non-empty run of digits.
fn has_shape(input: &str, shape: &str) -> bool {
    let (head, fraction) = match input.split_once('.') {
        Some((head, fraction)) if shape.len() == 19 => (head, Some(fraction)),
        Some(_) => return false,
        None => (input, None),
    };
    let digits_ok = fraction.map_or(true, |f| !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()));
    digits_ok
        && head.len() == shape.len()
        && head.bytes().zip(shape.bytes()).all(|(c, s)| match s {
            b'9' => c.is_ascii_digit(),
            _ => c == s,
        })
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DateTime(dt) => write!(f, "{}", dt.format(DATE_TIME_DISPLAY)),
            Self::Date(date) => write!(f, "{}", date.format(DATE_DISPLAY)),
            Self::Text(text) => f.write_str(text),
        }
    }
}

// Exported as the canonical rendering, same as the data file.
impl Serialize for DateValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_date_renders_canonically() {
        let value = DateValue::parse("2019-06-06", "deadline").unwrap();
        assert!(matches!(value, DateValue::Date(_)));
        assert_eq!(value.to_string(), "Jun 6 2019");
    }

    #[test]
    fn date_time_forms() {
        let iso = DateValue::parse("2019-12-02T18:00", "deadline").unwrap();
        assert_eq!(iso.to_string(), "Dec 2 2019, 6:00 PM");

        let with_seconds = DateValue::parse("2019-12-02T09:05:30", "deadline").unwrap();
        assert_eq!(with_seconds.to_string(), "Dec 2 2019, 9:05 AM");

        let spaced = DateValue::parse("2024-12-01 14:00", "event start").unwrap();
        assert!(matches!(spaced, DateValue::DateTime(_)));
        assert_eq!(spaced.to_string(), "Dec 1 2024, 2:00 PM");
    }

    #[test]
    fn unparseable_text_is_kept_verbatim() {
        let value = DateValue::parse("  Sunday 4pm ", "deadline").unwrap();
        assert_eq!(value, DateValue::Text("Sunday 4pm".into()));
        assert_eq!(value.to_string(), "Sunday 4pm");
    }

    #[test]
    fn invalid_calendar_date_falls_back_to_text() {
        let value = DateValue::parse("2019-02-30", "deadline").unwrap();
        assert_eq!(value.to_string(), "2019-02-30");
    }

    #[test]
    fn canonical_rendering_is_stable_when_reparsed() {
        let first = DateValue::parse("2019-06-06T18:00", "deadline").unwrap();
        let again = DateValue::parse(&first.to_string(), "deadline").unwrap();
        assert_eq!(first.to_string(), again.to_string());
    }

    #[test]
    fn loose_numeric_forms_stay_text() {
        for input in ["2019-6-6", "+2019-06-06", "2019-06-06T1:5", "2019-06-06 9:00", "2019-06-06T18:00:00."] {
            let value = DateValue::parse(input, "deadline").unwrap();
            assert_eq!(value, DateValue::Text(input.into()), "{input}");
            assert_eq!(value.to_string(), input);
        }
    }

    #[test]
    fn fractional_seconds_are_accepted() {
        let value = DateValue::parse("2019-12-02T09:05:30.250", "deadline").unwrap();
        assert!(matches!(value, DateValue::DateTime(_)));
        assert_eq!(value.to_string(), "Dec 2 2019, 9:05 AM");
    }

    #[test]
    fn blank_input_is_rejected() {
        assert_eq!(
            DateValue::parse("   ", "deadline"),
            Err(ValidationError::EmptyDate { field: "deadline" })
        );
    }
}
