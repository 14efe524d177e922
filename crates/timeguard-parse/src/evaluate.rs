//! Raw-input evaluation against a temporal kind.
//!
//! [`Evaluator`] is the single entry point hosts call per assignment. Each
//! call is a pure function of the raw input, the target kind, and the
//! configured zone: no caching, no mutation of caller-owned state.

use std::sync::Arc;

use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use timeguard_core::constants::anchor_date;
use timeguard_core::{Evaluation, RawInput, Settings, TemporalKind, TemporalValue};

use crate::strategy::{PluginParser, Strategy};
use crate::strict;
use crate::zone::{self, ZoneError};

/// Error constructing an evaluator.
///
/// Construction is the only fallible step; evaluation itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum EvaluatorError {
    /// The configured timezone identifier could not be resolved.
    #[error(transparent)]
    Zone(#[from] ZoneError),

    /// The plugin strategy was selected but no plugin parser was supplied.
    #[error("Plugin parser strategy selected but no plugin parser supplied")]
    MissingPluginParser,
}

/// Evaluates raw attribute inputs into normalized temporal values.
///
/// Stateless and synchronous; safe to share across threads without
/// coordination.
#[derive(Debug, Clone)]
pub struct Evaluator {
    strategy: Strategy,
    zone: Tz,
}

impl Evaluator {
    #[must_use]
    pub fn new(strategy: Strategy, zone: Tz) -> Self {
        tracing::debug!(strategy = strategy.name(), zone = %zone, "Evaluator constructed");
        Self { strategy, zone }
    }

    /// ## Summary
    /// Builds an evaluator from loaded settings, resolving the configured
    /// timezone identifier and selecting the parsing strategy.
    ///
    /// The plugin parser is only consulted when `parser.use_plugin_parser`
    /// is set; hosts running the built-in parser pass `None`.
    ///
    /// ## Errors
    /// Returns an error if the timezone identifier cannot be resolved, or
    /// if the plugin strategy is selected without a parser to delegate to.
    pub fn from_settings(
        settings: &Settings,
        plugin: Option<Arc<dyn PluginParser>>,
    ) -> Result<Self, EvaluatorError> {
        let zone = zone::resolve_zone(&settings.timezone.default)?;
        let strategy = if settings.parser.use_plugin_parser {
            Strategy::Plugin(plugin.ok_or(EvaluatorError::MissingPluginParser)?)
        } else {
            Strategy::Strict
        };
        Ok(Self::new(strategy, zone))
    }

    /// The zone values without explicit offset information resolve in.
    #[must_use]
    pub const fn zone(&self) -> Tz {
        self.zone
    }

    /// ## Summary
    /// Evaluates a raw input against a temporal kind.
    ///
    /// Absence (null, or an empty/whitespace-only string) is not an error
    /// and produces [`Evaluation::Absent`]. An already-typed value of the
    /// matching kind passes through unchanged. Strings are dispatched to
    /// the configured strategy. Everything unparseable collapses to
    /// [`Evaluation::Invalid`]; this method never panics and never returns
    /// an error type.
    #[must_use]
    pub fn evaluate(&self, raw: &RawInput, kind: TemporalKind) -> Evaluation {
        match raw {
            RawInput::Absent => Evaluation::Absent,
            RawInput::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    Evaluation::Absent
                } else {
                    self.evaluate_text(trimmed, kind)
                }
            }
            RawInput::Value(value) => self.coerce(*value, kind),
        }
    }

    fn evaluate_text(&self, text: &str, kind: TemporalKind) -> Evaluation {
        let parsed = match &self.strategy {
            Strategy::Strict => self.parse_strict(text, kind),
            Strategy::Plugin(parser) => parser.parse(text, kind),
        };

        parsed.map_or_else(
            || {
                // Raw text is user data; keep it out of logs above trace
                tracing::trace!(kind = %kind, raw = text, "Rejected temporal text");
                Evaluation::Invalid
            },
            Evaluation::Value,
        )
    }

    /// Parses a string with the built-in fixed-pattern parser and
    /// normalizes the result for its kind.
    fn parse_strict(&self, text: &str, kind: TemporalKind) -> Option<TemporalValue> {
        match kind {
            TemporalKind::Date => strict::parse_date(text).map(TemporalValue::Date),
            TemporalKind::Time => strict::parse_time(text).map(|t| TemporalValue::Time(anchored(t))),
            TemporalKind::DateTime => {
                let (local, offset) = strict::parse_datetime(text)?;
                let zoned = match offset {
                    // Explicit offset: convert the instant into the configured zone
                    Some(offset) => offset
                        .from_local_datetime(&local)
                        .single()?
                        .with_timezone(&self.zone),
                    // No offset: the configured zone's offset on that local date applies
                    None => zone::zoned_local(local, self.zone)?,
                };
                Some(TemporalValue::DateTime(zoned))
            }
        }
    }

    /// Passes a matching value through unchanged, or coerces across kinds
    /// where a coercion exists.
    fn coerce(&self, value: TemporalValue, kind: TemporalKind) -> Evaluation {
        if value.kind() == kind {
            return Evaluation::Value(value);
        }

        match (value, kind) {
            (TemporalValue::Date(date), TemporalKind::DateTime) => {
                zone::zoned_local(date.and_time(NaiveTime::MIN), self.zone).map_or(
                    Evaluation::Invalid,
                    |dt| Evaluation::Value(TemporalValue::DateTime(dt)),
                )
            }
            (TemporalValue::DateTime(dt), TemporalKind::Date) => Evaluation::Value(
                TemporalValue::Date(dt.with_timezone(&self.zone).date_naive()),
            ),
            (TemporalValue::DateTime(dt), TemporalKind::Time) => Evaluation::Value(
                TemporalValue::Time(anchored(dt.with_timezone(&self.zone).time())),
            ),
            _ => Evaluation::Invalid,
        }
    }
}

/// Normalizes a time-of-day onto the anchor date in UTC, so that equal
/// times-of-day compare equal regardless of the date components supplied.
fn anchored(time: NaiveTime) -> DateTime<Utc> {
    Utc.from_utc_datetime(&anchor_date().and_time(time))
}
