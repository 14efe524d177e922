//! Normalized temporal values, raw inputs, and evaluation outcomes.
//!
//! These types are designed for:
//! - Unambiguous signaling: absence, a typed value, and invalidity are
//!   distinct variants, never an error path
//! - Instant-based equality: zone-aware values compare by the instant they
//!   name, not by their rendering

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::kind::TemporalKind;

/// A normalized value of one temporal kind.
///
/// `Time` values are anchored onto a fixed date (see [`crate::constants`])
/// in UTC so that equal times-of-day compare equal regardless of the date
/// components they were supplied with. `DateTime` values carry the zone
/// they were resolved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalValue {
    Date(NaiveDate),
    Time(DateTime<Utc>),
    DateTime(DateTime<Tz>),
}

impl TemporalValue {
    #[must_use]
    pub const fn kind(&self) -> TemporalKind {
        match self {
            Self::Date(_) => TemporalKind::Date,
            Self::Time(_) => TemporalKind::Time,
            Self::DateTime(_) => TemporalKind::DateTime,
        }
    }

    #[must_use]
    pub const fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_time(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Time(t) => Some(*t),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_datetime(&self) -> Option<DateTime<Tz>> {
        match self {
            Self::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }
}

/// The raw value supplied by a caller before any type cast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// No value supplied (null, or an empty string at the host boundary).
    Absent,
    /// A text value to be parsed.
    Text(String),
    /// A value already of a native temporal type.
    Value(TemporalValue),
}

impl From<&str> for RawInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<TemporalValue> for RawInput {
    fn from(value: TemporalValue) -> Self {
        Self::Value(value)
    }
}

impl<T: Into<RawInput>> From<Option<T>> for RawInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// Outcome of evaluating a raw input against a temporal kind.
///
/// Invalid input is data, not a fault: there is no error variant and no
/// panic path. Finer-grained diagnostics are deliberately not part of this
/// contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// A normalized value of the requested kind.
    Value(TemporalValue),
    /// No value was supplied; absence is not an error.
    Absent,
    /// The input could not be interpreted as the requested kind.
    Invalid,
}

impl Evaluation {
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid)
    }

    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns the normalized value, if one was produced.
    #[must_use]
    pub const fn value(&self) -> Option<TemporalValue> {
        match self {
            Self::Value(v) => Some(*v),
            _ => None,
        }
    }
}
