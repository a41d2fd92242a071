use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

use crate::result::ValidationResult;
use crate::validator::{Presence, Validator};
use crate::value::{Value, format_date};

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Validates dates, coercing strings and epoch milliseconds.
///
/// Bounds are exclusive: a value equal to a `before` or `after` bound fails.
#[derive(Debug, Clone, Default)]
pub struct DateValidator {
    presence: Presence,
    before: Option<DateTime<Utc>>,
    after: Option<DateTime<Utc>>,
}

impl DateValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the date to be strictly earlier than `date`.
    pub fn before(mut self, date: DateTime<Utc>) -> Self {
        self.before = Some(date);
        self
    }

    /// Require the date to be strictly later than `date`.
    pub fn after(mut self, date: DateTime<Utc>) -> Self {
        self.after = Some(date);
        self
    }
}

enum Coerced {
    Date(DateTime<Utc>),
    Unparseable,
    WrongKind,
}

fn coerce(value: &Value) -> Coerced {
    let parsed = match value {
        Value::Date(date) => Some(*date),
        Value::String(text) => parse_date_str(text),
        Value::Number(millis) => from_epoch_millis(*millis),
        _ => return Coerced::WrongKind,
    };
    parsed.map_or(Coerced::Unparseable, Coerced::Date)
}

/// Parse an ISO-8601 style date string. Values without an offset are UTC.
///
/// Accepts `YYYY`, `YYYY-MM`, `YYYY-MM-DD` (midnight on the first day of any
/// missing unit), and date-times with `T` or a space before the time, minutes
/// or seconds precision, and an optional `Z` or `±HH:MM` suffix.
pub(crate) fn parse_date_str(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(text) {
        return Some(date.with_timezone(&Utc));
    }
    if let Some(date) = parse_calendar_date(text) {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }

    let (local, offset) = split_offset(text)?;
    let local = match local.split_once(' ') {
        Some((date, time)) => format!("{date}T{time}"),
        None => local.to_string(),
    };
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&local, format).ok())
        .and_then(|naive| naive.and_local_timezone(offset).single())
        .map(|date| date.with_timezone(&Utc))
}

fn parse_calendar_date(text: &str) -> Option<NaiveDate> {
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    match text.len() {
        4 if all_digits(text) => NaiveDate::parse_from_str(&format!("{text}-01-01"), "%Y-%m-%d").ok(),
        7 => NaiveDate::parse_from_str(&format!("{text}-01"), "%Y-%m-%d").ok(),
        _ => NaiveDate::parse_from_str(text, "%Y-%m-%d").ok(),
    }
}

/// Split a trailing `Z` or `±HH:MM` designator off `text`; UTC when absent.
fn split_offset(text: &str) -> Option<(&str, FixedOffset)> {
    if let Some(local) = text.strip_suffix('Z') {
        return Some((local, FixedOffset::east_opt(0)?));
    }
    let Some(split) = text.len().checked_sub(6).filter(|at| text.is_char_boundary(*at)) else {
        return Some((text, FixedOffset::east_opt(0)?));
    };
    let (local, suffix) = text.split_at(split);
    let bytes = suffix.as_bytes();
    let is_offset = matches!(bytes[0], b'+' | b'-')
        && bytes[3] == b':'
        && [1, 2, 4, 5].iter().all(|&i| bytes[i].is_ascii_digit());
    if !is_offset {
        return Some((text, FixedOffset::east_opt(0)?));
    }
    let hours: i32 = suffix[1..3].parse().ok()?;
    let minutes: i32 = suffix[4..6].parse().ok()?;
    let seconds = hours * 3600 + minutes * 60;
    let offset = if bytes[0] == b'-' {
        FixedOffset::west_opt(seconds)?
    } else {
        FixedOffset::east_opt(seconds)?
    };
    Some((local, offset))
}

fn from_epoch_millis(millis: f64) -> Option<DateTime<Utc>> {
    if !millis.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(millis.trunc() as i64)
}

impl Validator for DateValidator {
    type Output = DateTime<Utc>;

    fn validate_at(&self, value: Option<&Value>, path: &str) -> ValidationResult<DateTime<Utc>> {
        let value = match self.presence.require(value, path) {
            Ok(value) => value,
            Err(result) => return result,
        };

        let date = match coerce(value) {
            Coerced::Date(date) => date,
            Coerced::Unparseable => return self.presence.reject("Invalid date", Some(value), path),
            Coerced::WrongKind => {
                return self
                    .presence
                    .reject("Expected Date, string, or number", Some(value), path);
            }
        };

        let mut errors = Vec::new();

        if let Some(before) = self.before {
            if date >= before {
                errors.push(self.presence.error(
                    format!("Date must be before {}", format_date(&before)),
                    Some(value),
                    path,
                ));
            }
        }

        if let Some(after) = self.after {
            if date <= after {
                errors.push(self.presence.error(
                    format!("Date must be after {}", format_date(&after)),
                    Some(value),
                    path,
                ));
            }
        }

        ValidationResult::from_parts(date, errors)
    }

    fn presence(&self) -> &Presence {
        &self.presence
    }

    fn presence_mut(&mut self) -> &mut Presence {
        &mut self.presence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_supported_string_forms() {
        let midnight = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_date_str("2023-01-01"), Some(midnight));
        assert_eq!(parse_date_str("2023-01-01T00:00:00Z"), Some(midnight));
        assert_eq!(parse_date_str("2023-01-01T02:00:00+02:00"), Some(midnight));
        assert_eq!(parse_date_str("2023-01-01T00:00"), Some(midnight));
        assert_eq!(parse_date_str("2023-01-01T00:00:00.000"), Some(midnight));
        assert_eq!(parse_date_str("invalid date"), None);
        assert_eq!(parse_date_str("2023-02-30"), None);
    }

    #[test]
    fn parses_partial_and_offset_forms() {
        let cases = [
            ("2023", Some(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap())),
            ("2023-06", Some(Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap())),
            ("2023-06-01T10:00Z", Some(Utc.with_ymd_and_hms(2023, 6, 1, 10, 0, 0).unwrap())),
            ("2023-06-01T10:00+02:00", Some(Utc.with_ymd_and_hms(2023, 6, 1, 8, 0, 0).unwrap())),
            ("2023-06-01T10:00-01:30", Some(Utc.with_ymd_and_hms(2023, 6, 1, 11, 30, 0).unwrap())),
            ("2023-06-01 10:00", Some(Utc.with_ymd_and_hms(2023, 6, 1, 10, 0, 0).unwrap())),
            ("2023-06-01 10:00:30Z", Some(Utc.with_ymd_and_hms(2023, 6, 1, 10, 0, 30).unwrap())),
            ("2023-13", None),
            ("20235", None),
            ("2023-06-01T25:00Z", None),
        ];
        for (input, expected) in cases {
            assert_eq!(parse_date_str(input), expected, "{input}");
        }
    }

    #[test]
    fn partial_forms_validate_as_dates() {
        for input in ["2023", "2023-06", "2023-06-01T10:00Z", "2023-06-01T10:00+02:00", "2023-06-01 10:00"] {
            let result = DateValidator::new().validate(&Value::from(input));
            assert!(result.success, "{input}: {:?}", result.errors);
        }
    }

    #[test]
    fn numbers_are_epoch_milliseconds() {
        let result = DateValidator::new().validate(&Value::Number(86_400_000.0));
        assert_eq!(
            result.data,
            Some(Utc.with_ymd_and_hms(1970, 1, 2, 0, 0, 0).unwrap())
        );
        let invalid = DateValidator::new().validate(&Value::Number(f64::INFINITY));
        assert_eq!(invalid.errors[0].message, "Invalid date");
    }

    #[test]
    fn before_bound_is_exclusive() {
        let bound = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let result = DateValidator::new().before(bound).validate(&Value::Date(bound));
        assert_eq!(
            result.errors[0].message,
            "Date must be before 2023-01-01T00:00:00.000Z"
        );
    }
}
