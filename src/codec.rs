use chrono::{NaiveDate, NaiveTime};
use std::fmt;

pub const DATE_PATTERN: &str = "dd.MM.yy";
const DATE_FORMAT: &str = "%d.%m.%y";
const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Date,
    Time,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Date => write!(f, "date"),
            FieldKind::Time => write!(f, "time"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} '{value}', expected {}", expected_pattern(.kind))]
pub struct FormatError {
    pub kind: FieldKind,
    pub value: String,
}

impl FormatError {
    fn new(kind: FieldKind, value: &str) -> Self {
        FormatError {
            kind,
            value: value.to_string(),
        }
    }
}

fn expected_pattern(kind: &FieldKind) -> String {
    match kind {
        FieldKind::Date => DATE_PATTERN.to_string(),
        FieldKind::Time => TIME_PATTERNS
            .iter()
            .map(|p| p.name)
            .collect::<Vec<_>>()
            .join(" or "),
    }
}

/// One accepted layout for a time of day.
struct TimePattern {
    name: &'static str,
    min_hour_digits: usize,
    format: &'static str,
}

impl TimePattern {
    fn parse(&self, text: &str) -> Option<NaiveTime> {
        let (hours, minutes) = text.split_once(':')?;
        let hours_ok = (self.min_hour_digits..=2).contains(&hours.len()) && all_digits(hours);
        if !hours_ok || minutes.len() != 2 || !all_digits(minutes) {
            return None;
        }
        // end of day reads as midnight
        if hours == "24" && minutes == "00" {
            return NaiveTime::from_hms_opt(0, 0, 0);
        }
        NaiveTime::parse_from_str(text, self.format).ok()
    }
}

// Tried in order, first match wins.
const TIME_PATTERNS: [TimePattern; 2] = [
    TimePattern {
        name: "HH:mm",
        min_hour_digits: 2,
        format: "%H:%M",
    },
    TimePattern {
        name: "H:mm",
        min_hour_digits: 1,
        format: "%-H:%M",
    },
];

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a `dd.MM.yy` date. Two-digit years land in 2000..=2099.
/// A day past the end of its month (`30.02.18`) resolves to the month's last day.
pub fn parse_date(text: &str) -> Result<NaiveDate, FormatError> {
    let err = || FormatError::new(FieldKind::Date, text);

    let parts = text.split('.').collect::<Vec<_>>();
    if parts.len() != 3 || parts.iter().any(|p| p.len() != 2 || !all_digits(p)) {
        return Err(err());
    }
    let [day, month, year] = [parts[0], parts[1], parts[2]].map(|p| p.parse::<u32>().unwrap_or(0));
    if !(1..=31).contains(&day) {
        return Err(err());
    }

    let year = 2000 + year as i32;
    (day.saturating_sub(3)..=day)
        .rev()
        .find_map(|d| NaiveDate::from_ymd_opt(year, month, d))
        .ok_or_else(err)
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a time of day as `HH:mm`, falling back to `H:mm`.
pub fn parse_time(text: &str) -> Result<NaiveTime, FormatError> {
    TIME_PATTERNS
        .iter()
        .find_map(|pattern| pattern.parse(text))
        .ok_or_else(|| FormatError::new(FieldKind::Time, text))
}

/// Always zero-padded, whichever layout the value was read from.
pub fn format_time(time: &NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}
