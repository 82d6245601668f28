//! Fixed-format UTC timestamps (`YYYYMMDDTHHMMSSZ`) and their display forms.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDateTime, Utc};
use thiserror::Error;

use crate::constants::{DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT};
use crate::error::{PawsError, PawsResult};

const TIMESTAMP_LEN: usize = 16;

/// A timestamp that does not have the `YYYYMMDDTHHMMSSZ` shape, or names
/// an instant that does not exist.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{token}' is not a UTC timestamp of the form YYYYMMDDTHHMMSSZ")]
pub struct DateParseError {
    pub token: String,
}

impl DateParseError {
    fn new(token: &str) -> Self {
        DateParseError {
            token: token.to_string(),
        }
    }
}

/// Parse a `YYYYMMDDTHHMMSSZ` token as a UTC instant.
///
/// Parsing is strict: length, digit positions, the `T` separator and the
/// trailing `Z` must all match exactly.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use paws_core::datetime::parse_utc_timestamp;
///
/// let dt = parse_utc_timestamp("20120616T210000Z").unwrap();
/// assert_eq!(dt, Utc.with_ymd_and_hms(2012, 6, 16, 21, 0, 0).unwrap());
/// assert!(parse_utc_timestamp("20120616T210000").is_err());
/// ```
pub fn parse_utc_timestamp(token: &str) -> Result<DateTime<Utc>, DateParseError> {
    let bytes = token.as_bytes();
    let well_formed = bytes.len() == TIMESTAMP_LEN
        && bytes.iter().enumerate().all(|(i, b)| match i {
            8 => *b == b'T',
            15 => *b == b'Z',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(DateParseError::new(token));
    }

    NaiveDateTime::parse_from_str(&token[..TIMESTAMP_LEN - 1], "%Y%m%dT%H%M%S")
        .map(|naive| naive.and_utc())
        .map_err(|_| DateParseError::new(token))
}

/// How dates and times are shown in rendered output (chrono strftime patterns).
///
/// Patterns are checked on construction, so rendering never meets one chrono
/// cannot format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFormat {
    date: String,
    time: String,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        DisplayFormat {
            date: DEFAULT_DATE_FORMAT.to_string(),
            time: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl DisplayFormat {
    pub fn new(date: impl Into<String>, time: impl Into<String>) -> PawsResult<Self> {
        let format = DisplayFormat {
            date: date.into(),
            time: time.into(),
        };
        for pattern in [&format.date, &format.time] {
            if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
                return Err(PawsError::Config(format!(
                    "Invalid date/time format '{pattern}'"
                )));
            }
        }
        Ok(format)
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    /// Render a UTC instant as a `(date, time)` pair.
    pub fn render(&self, instant: &DateTime<Utc>) -> (String, String) {
        (
            instant.format(&self.date).to_string(),
            instant.format(&self.time).to_string(),
        )
    }

    /// Parse a raw token and render it in one step.
    pub fn render_token(&self, token: &str) -> Result<(String, String), DateParseError> {
        parse_utc_timestamp(token).map(|instant| self.render(&instant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_valid_timestamp() {
        let dt = parse_utc_timestamp("20120616T210000Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2012, 6, 16, 21, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rejects_wrong_shapes() {
        for token in [
            "",
            "20120616",
            "20120616T210000",
            "20120616T210000z",
            "20120616 210000Z",
            "2012061T2100000Z",
            "20120616T210000ZZ",
            "+0120616T210000Z",
            "２0120616T210000Z",
            "20120616T21:000Z",
        ] {
            let err = parse_utc_timestamp(token).unwrap_err();
            assert_eq!(err.token, token);
        }
    }

    #[test]
    fn test_parse_rejects_impossible_instants() {
        assert!(parse_utc_timestamp("20121316T210000Z").is_err());
        assert!(parse_utc_timestamp("20120230T100000Z").is_err());
        assert!(parse_utc_timestamp("20120616T250000Z").is_err());
    }

    #[test]
    fn test_parse_leap_day() {
        let dt = parse_utc_timestamp("20240229T000000Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_render_default_format_stays_in_utc() {
        let (date, time) = DisplayFormat::default()
            .render_token("20120616T210000Z")
            .unwrap();
        assert_eq!(date, "6/16/2012");
        assert_eq!(time, "9:00 PM");
    }

    #[test]
    fn test_render_custom_format() {
        let format = DisplayFormat::new("%Y-%m-%d", "%H:%M").unwrap();
        let (date, time) = format.render_token("20120616T090500Z").unwrap();
        assert_eq!(date, "2012-06-16");
        assert_eq!(time, "09:05");
    }

    #[test]
    fn test_new_rejects_unknown_specifier() {
        assert!(DisplayFormat::new(DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT).is_ok());

        let err = DisplayFormat::new("%Y-%Q", "%H:%M").unwrap_err();
        assert!(matches!(err, PawsError::Config(_)));
        assert!(DisplayFormat::new("%Y-%m-%d", "%Q").is_err());
    }

    #[test]
    fn test_error_message_names_token() {
        let err = parse_utc_timestamp("tomorrow").unwrap_err();
        assert_eq!(
            err.to_string(),
            "'tomorrow' is not a UTC timestamp of the form YYYYMMDDTHHMMSSZ"
        );
    }
}
