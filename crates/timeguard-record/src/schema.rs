//! Per-field temporal registrations.
//!
//! Registration replaces class-level macro wiring: a host record type
//! registers each temporal field as a `(field name, kind, options)` triple,
//! and validity checking iterates these registrations. A field may carry
//! aliases that resolve to its canonical registration.

use std::collections::HashMap;

use timeguard_core::TemporalKind;

/// Per-field validation options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldOptions {
    /// When set, an absent value is a validation fault. Off by default:
    /// absence is "no opinion" unless the host layers a presence rule on.
    pub required: bool,
}

impl FieldOptions {
    #[must_use]
    pub const fn required() -> Self {
        Self { required: true }
    }
}

#[derive(Debug, Clone)]
struct Registration {
    kind: TemporalKind,
    options: FieldOptions,
}

/// The set of registered temporal fields for one record type.
///
/// Built once per record type and shared across its record instances.
#[derive(Debug, Clone, Default)]
pub struct TemporalSchema {
    fields: HashMap<String, Registration>,
    aliases: HashMap<String, String>,
    /// Registration order, for stable validation output.
    order: Vec<String>,
}

impl TemporalSchema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a field of the given kind. Re-registering a name replaces
    /// its previous registration.
    pub fn register(&mut self, name: &str, kind: TemporalKind, options: FieldOptions) {
        if self
            .fields
            .insert(name.to_string(), Registration { kind, options })
            .is_none()
        {
            self.order.push(name.to_string());
        }
    }

    pub fn register_date(&mut self, name: &str, options: FieldOptions) {
        self.register(name, TemporalKind::Date, options);
    }

    pub fn register_time(&mut self, name: &str, options: FieldOptions) {
        self.register(name, TemporalKind::Time, options);
    }

    pub fn register_datetime(&mut self, name: &str, options: FieldOptions) {
        self.register(name, TemporalKind::DateTime, options);
    }

    /// Registers an alias for a field. Lookups through the alias resolve to
    /// the canonical registration; the canonical name does not need to be
    /// registered yet at alias time.
    pub fn alias(&mut self, alias: &str, canonical: &str) {
        self.aliases
            .insert(alias.to_string(), canonical.to_string());
    }

    /// Resolves a field or alias to its canonical registered name.
    #[must_use]
    pub fn canonical_name<'a>(&'a self, field: &'a str) -> Option<&'a str> {
        let resolved = self.aliases.get(field).map_or(field, String::as_str);
        self.fields.contains_key(resolved).then_some(resolved)
    }

    /// The kind a field (or alias) was registered with.
    #[must_use]
    pub fn kind_of(&self, field: &str) -> Option<TemporalKind> {
        self.registration_of(field).map(|(_, reg)| reg.kind)
    }

    /// The options a field (or alias) was registered with.
    #[must_use]
    pub fn options_of(&self, field: &str) -> Option<FieldOptions> {
        self.registration_of(field).map(|(_, reg)| reg.options)
    }

    fn registration_of<'a>(&'a self, field: &'a str) -> Option<(&'a str, &'a Registration)> {
        let name = self.canonical_name(field)?;
        self.fields.get(name).map(|reg| (name, reg))
    }

    /// Iterates registrations in registration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, TemporalKind, FieldOptions)> {
        self.order.iter().filter_map(|name| {
            self.fields
                .get(name)
                .map(|reg| (name.as_str(), reg.kind, reg.options))
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
