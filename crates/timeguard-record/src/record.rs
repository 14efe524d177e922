//! Per-record assignment state.
//!
//! The record keeps, per registered field, the typed value and the raw
//! before-type-cast slot. The contract the host relies on: the raw slot is
//! set on assignment, read through [`TemporalRecord::before_type_cast`], and
//! cleared by [`TemporalRecord::reload`]; typed values survive a reload the
//! way a refreshed record's persisted attributes would.

use std::collections::HashMap;
use std::sync::Arc;

use timeguard_core::{Evaluation, RawInput, TemporalValue};
use timeguard_parse::Evaluator;

use crate::schema::TemporalSchema;
use crate::validate::{ValidationErrors, ValidationFault};

/// Host programming errors on record operations.
///
/// Distinct from invalid input: an unparseable value is data and surfaces
/// through validation, while touching a field no registration covers is a
/// bug in the host's wiring.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("Unknown temporal field: {0}")]
    UnknownField(String),
}

#[derive(Debug, Clone, Default)]
struct FieldState {
    typed: Option<TemporalValue>,
    raw: Option<RawInput>,
    invalid: bool,
}

/// In-memory temporal state for one record instance.
///
/// The schema and evaluator are shared across instances of the same record
/// type; each record owns only its field states.
#[derive(Debug, Clone)]
pub struct TemporalRecord {
    schema: Arc<TemporalSchema>,
    evaluator: Arc<Evaluator>,
    fields: HashMap<String, FieldState>,
}

impl TemporalRecord {
    #[must_use]
    pub fn new(schema: Arc<TemporalSchema>, evaluator: Arc<Evaluator>) -> Self {
        Self {
            schema,
            evaluator,
            fields: HashMap::new(),
        }
    }

    #[must_use]
    pub fn schema(&self) -> &TemporalSchema {
        &self.schema
    }

    /// ## Summary
    /// Assigns a raw value to a registered field.
    ///
    /// The raw input is evaluated exactly once against the field's
    /// registered kind and cached in the before-type-cast slot. A valid
    /// outcome stores the typed value; an absent or invalid outcome clears
    /// it, with invalidity remembered for validation.
    ///
    /// ## Errors
    /// Returns `RecordError::UnknownField` if no registration covers the
    /// field or alias.
    pub fn assign(&mut self, field: &str, raw: impl Into<RawInput>) -> Result<(), RecordError> {
        let Some(kind) = self.schema.kind_of(field) else {
            return Err(RecordError::UnknownField(field.to_string()));
        };
        // kind_of succeeded, so the canonical name exists
        let canonical = self
            .schema
            .canonical_name(field)
            .unwrap_or(field)
            .to_string();

        let raw = raw.into();
        let outcome = self.evaluator.evaluate(&raw, kind);
        tracing::debug!(field = %canonical, kind = %kind, outcome = ?outcome, "Assigned temporal attribute");

        let state = self.fields.entry(canonical).or_default();
        state.raw = Some(raw);
        match outcome {
            Evaluation::Value(value) => {
                state.typed = Some(value);
                state.invalid = false;
            }
            Evaluation::Absent => {
                state.typed = None;
                state.invalid = false;
            }
            Evaluation::Invalid => {
                state.typed = None;
                state.invalid = true;
            }
        }
        Ok(())
    }

    /// The current typed value of a field (or alias), if any.
    #[must_use]
    pub fn value(&self, field: &str) -> Option<TemporalValue> {
        let name = self.schema.canonical_name(field)?;
        self.fields.get(name).and_then(|state| state.typed)
    }

    /// The original raw value of the last assignment to a field, before any
    /// type cast. `None` until the field is first assigned, and again after
    /// a reload.
    #[must_use]
    pub fn before_type_cast(&self, field: &str) -> Option<&RawInput> {
        let name = self.schema.canonical_name(field)?;
        self.fields.get(name).and_then(|state| state.raw.as_ref())
    }

    /// ## Summary
    /// Mirrors a record refreshed from its store: clears every cached raw
    /// value and pending invalidity while keeping typed values.
    pub fn reload(&mut self) {
        for state in self.fields.values_mut() {
            state.raw = None;
            state.invalid = false;
        }
        tracing::debug!("Record reloaded; raw value cache cleared");
    }

    /// ## Summary
    /// Checks validity across all registered fields.
    ///
    /// An invalid assignment yields a fault of the field's kind; a required
    /// field without a value yields a blank fault. Faults are keyed by
    /// canonical field name, in registration order.
    #[must_use]
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for (name, kind, options) in self.schema.fields() {
            let state = self.fields.get(name);
            if state.is_some_and(|state| state.invalid) {
                errors.add(name, ValidationFault::invalid(kind));
            } else if options.required && state.and_then(|state| state.typed).is_none() {
                errors.add(name, ValidationFault::Blank);
            }
        }
        errors
    }
}
