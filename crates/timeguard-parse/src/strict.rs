//! Built-in strict parsers for the fixed textual pattern set.
//!
//! Recognized forms:
//! - date: `YYYY-MM-DD`
//! - time: `HH:MM` or `HH:MM:SS`
//! - datetime: date + (`T` or space) + time, optionally suffixed `Z` or
//!   `+HH:MM`/`-HH:MM`
//!
//! Anything outside these forms is rejected by returning `None`; the caller
//! collapses all rejection into a single invalid outcome, so no error type
//! is carried here.

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

/// Parses a `YYYY-MM-DD` date string.
///
/// Calendar validation (month 13, day 32, Feb 30) is delegated to the
/// chrono constructor after the shape check.
#[must_use]
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let b = s.as_bytes();
    if b.len() != 10 || b[4] != b'-' || b[7] != b'-' {
        return None;
    }
    if !(all_digits(&s[0..4]) && all_digits(&s[5..7]) && all_digits(&s[8..10])) {
        return None;
    }

    let year = s[0..4].parse::<u16>().ok()?;
    let month = s[5..7].parse::<u8>().ok()?;
    let day = s[8..10].parse::<u8>().ok()?;

    NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))
}

/// Parses an `HH:MM` or `HH:MM:SS` time string.
#[must_use]
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    let b = s.as_bytes();
    let second = match b.len() {
        5 => 0,
        8 => {
            if b[5] != b':' || !all_digits(&s[6..8]) {
                return None;
            }
            s[6..8].parse::<u8>().ok()?
        }
        _ => return None,
    };

    if b[2] != b':' || !(all_digits(&s[0..2]) && all_digits(&s[3..5])) {
        return None;
    }

    let hour = s[0..2].parse::<u8>().ok()?;
    let minute = s[3..5].parse::<u8>().ok()?;

    NaiveTime::from_hms_opt(u32::from(hour), u32::from(minute), u32::from(second))
}

/// Parses a combined datetime string.
///
/// Returns the local datetime and, when the string carried one, the
/// explicit UTC offset. Resolving an offset-less datetime against the
/// configured zone is the evaluator's concern.
#[must_use]
pub fn parse_datetime(s: &str) -> Option<(NaiveDateTime, Option<FixedOffset>)> {
    let b = s.as_bytes();
    if b.len() < 16 || (b[10] != b'T' && b[10] != b' ') {
        return None;
    }

    let date = parse_date(&s[..10])?;
    let rest = &s[11..];

    let (time_str, offset) = split_offset(rest)?;
    let time = parse_time(time_str)?;

    Some((date.and_time(time), offset))
}

/// Parses a `+HH:MM` / `-HH:MM` UTC offset suffix.
#[must_use]
pub fn parse_offset(s: &str) -> Option<FixedOffset> {
    let b = s.as_bytes();
    if b.len() != 6 || b[3] != b':' {
        return None;
    }

    let sign = match b[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };

    if !(all_digits(&s[1..3]) && all_digits(&s[4..6])) {
        return None;
    }

    let hours = s[1..3].parse::<i32>().ok()?;
    let minutes = s[4..6].parse::<i32>().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Splits an optional `Z` or `+HH:MM`/`-HH:MM` suffix off a time string.
fn split_offset(s: &str) -> Option<(&str, Option<FixedOffset>)> {
    if let Some(stripped) = s.strip_suffix('Z') {
        return Some((stripped, FixedOffset::east_opt(0)));
    }

    let b = s.as_bytes();
    if b.len() >= 11 && (b[b.len() - 6] == b'+' || b[b.len() - 6] == b'-') {
        let offset = parse_offset(&s[b.len() - 6..])?;
        return Some((&s[..b.len() - 6], Some(offset)));
    }

    Some((s, None))
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
