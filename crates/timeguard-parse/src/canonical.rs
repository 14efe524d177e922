//! Canonical string rendering of temporal values.

use timeguard_core::TemporalValue;

/// ## Summary
/// Renders a value to its canonical ISO-8601 form.
///
/// Dates render as `YYYY-MM-DD`, times as `HH:MM:SS`, datetimes as
/// `YYYY-MM-DDTHH:MM:SS±HH:MM`. Re-parsing the canonical form yields an
/// equivalent value; equivalence is temporal equality, not string equality,
/// since the canonical form may differ from the input format.
#[must_use]
pub fn canonical_string(value: &TemporalValue) -> String {
    match value {
        TemporalValue::Date(date) => date.format("%Y-%m-%d").to_string(),
        TemporalValue::Time(time) => time.format("%H:%M:%S").to_string(),
        TemporalValue::DateTime(dt) => dt.format("%Y-%m-%dT%H:%M:%S%:z").to_string(),
    }
}
