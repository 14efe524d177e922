//! Validation faults keyed by canonical field name.
//!
//! Message rendering and localization belong to the host; the keys here are
//! stable identifiers the host maps to its own messages.

use timeguard_core::TemporalKind;

/// A single validation fault on one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFault {
    /// The assigned raw value could not be interpreted as a date.
    InvalidDate,
    /// The assigned raw value could not be interpreted as a time.
    InvalidTime,
    /// The assigned raw value could not be interpreted as a datetime.
    InvalidDateTime,
    /// A required field has no value.
    Blank,
}

impl ValidationFault {
    /// The fault raised when an assignment of the given kind was invalid.
    #[must_use]
    pub const fn invalid(kind: TemporalKind) -> Self {
        match kind {
            TemporalKind::Date => Self::InvalidDate,
            TemporalKind::Time => Self::InvalidTime,
            TemporalKind::DateTime => Self::InvalidDateTime,
        }
    }

    /// Stable identifier for host-side message lookup.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::InvalidDate => "invalid_date",
            Self::InvalidTime => "invalid_time",
            Self::InvalidDateTime => "invalid_datetime",
            Self::Blank => "blank",
        }
    }
}

/// Validation faults collected across a record's registered fields, in
/// registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: Vec<(String, ValidationFault)>,
}

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, fault: ValidationFault) {
        self.entries.push((field.to_string(), fault));
    }

    /// True when no fault was recorded.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The faults recorded for one field.
    pub fn on<'a>(&'a self, field: &'a str) -> impl Iterator<Item = ValidationFault> + 'a {
        self.entries
            .iter()
            .filter(move |(name, _)| name == field)
            .map(|(_, fault)| *fault)
    }

    /// All `(field, fault)` entries in registration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, ValidationFault)> {
        self.entries
            .iter()
            .map(|(name, fault)| (name.as_str(), *fault))
    }
}
