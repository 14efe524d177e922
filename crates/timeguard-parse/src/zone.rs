//! Timezone identifier resolution.
//!
//! Uses ICU4X for Windows timezone ID to IANA mapping and timezone
//! canonicalization, so host configuration can name a zone the way the host
//! platform does (`US/Eastern`, `AUS Eastern Standard Time`) and still land
//! on a single IANA zone.

use std::str::FromStr;

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use icu::time::zone::WindowsParser;
use icu::time::zone::iana::IanaParserExtended;

/// Error resolving a configured timezone identifier.
///
/// An unresolvable identifier is a configuration fault, surfaced when the
/// evaluator is constructed, never during evaluation.
#[derive(Debug, thiserror::Error)]
pub enum ZoneError {
    /// Unknown or invalid timezone identifier.
    #[error("Unknown timezone identifier: {0}")]
    UnknownIdentifier(String),
}

/// ## Summary
/// Resolves a configured timezone identifier to a `chrono_tz::Tz`.
///
/// Accepts the `utc` shortcut, IANA names and their aliases
/// (`Europe/Kiev` resolves to `Europe/Kyiv`), and Windows zone names
/// (`AUS Eastern Standard Time` resolves to `Australia/Sydney`).
///
/// ## Errors
/// Returns `ZoneError::UnknownIdentifier` if the identifier cannot be
/// resolved to an IANA timezone.
pub fn resolve_zone(identifier: &str) -> Result<Tz, ZoneError> {
    if identifier.eq_ignore_ascii_case("utc") {
        return Ok(Tz::UTC);
    }

    let normalized = normalize_identifier(identifier);
    let tz = Tz::from_str(&normalized)
        .map_err(|_e| ZoneError::UnknownIdentifier(identifier.to_string()))?;

    tracing::debug!(identifier, zone = %tz, "Resolved timezone identifier");
    Ok(tz)
}

/// Normalizes a timezone identifier to a canonical IANA name.
///
/// Windows zone names are mapped through ICU's Windows parser; anything else
/// goes through IANA canonicalization, which also folds aliases onto their
/// canonical spelling. Unrecognized identifiers pass through unchanged so
/// the caller reports them verbatim.
fn normalize_identifier(identifier: &str) -> String {
    // Windows zone names first ("Eastern Standard Time")
    let windows_parser = WindowsParser::new();
    if let Some(zone) = windows_parser.parse(identifier, None) {
        let iana_parser = IanaParserExtended::new();
        if let Some(entry) = iana_parser.iter().find(|entry| entry.time_zone == zone) {
            return entry.canonical.to_string();
        }
    }

    // IANA canonicalization (handles aliases like Europe/Kiev -> Europe/Kyiv)
    let iana_parser = IanaParserExtended::new();
    let parsed = iana_parser.parse(identifier);
    if parsed.time_zone != icu::time::TimeZone::UNKNOWN {
        return parsed.canonical.to_string();
    }

    identifier.to_string()
}

/// ## Summary
/// Resolves a local datetime in a zone to the instant it names.
///
/// A local time inside a DST fold occurs twice; the earlier instant wins.
/// A local time inside a DST gap names no instant at all and resolves to
/// `None`.
#[must_use]
pub fn zoned_local(local: NaiveDateTime, tz: Tz) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earlier, _later) => Some(earlier),
        LocalResult::None => None,
    }
}
