#![allow(dead_code, clippy::expect_used)]
//! Test helpers for integration tests.
//!
//! Provides:
//! - Shared schema fixtures mirroring a host record type with one field of
//!   each temporal kind
//! - Evaluator and record constructors for the built-in and plugin
//!   strategies
//! - A counting plugin parser that records every call it receives

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono_tz::Tz;
use timeguard_test::component::{
    Evaluator, FieldOptions, PluginParser, Strategy, TemporalKind, TemporalRecord, TemporalSchema,
    TemporalValue,
};

/// A record type with one field of each temporal kind.
pub fn article_schema() -> Arc<TemporalSchema> {
    let mut schema = TemporalSchema::new();
    schema.register_date("publish_date", FieldOptions::default());
    schema.register_time("publish_time", FieldOptions::default());
    schema.register_datetime("publish_datetime", FieldOptions::default());
    Arc::new(schema)
}

/// The article schema with short aliases for every field.
pub fn aliased_article_schema() -> Arc<TemporalSchema> {
    let mut schema = TemporalSchema::new();
    schema.register_date("publish_date", FieldOptions::default());
    schema.register_time("publish_time", FieldOptions::default());
    schema.register_datetime("publish_datetime", FieldOptions::default());
    schema.alias("pd", "publish_date");
    schema.alias("pt", "publish_time");
    schema.alias("pdt", "publish_datetime");
    Arc::new(schema)
}

pub fn strict_evaluator(zone: Tz) -> Arc<Evaluator> {
    Arc::new(Evaluator::new(Strategy::Strict, zone))
}

/// An article record using the built-in strict parser in the given zone.
pub fn strict_record(zone: Tz) -> TemporalRecord {
    TemporalRecord::new(article_schema(), strict_evaluator(zone))
}

/// An article record delegating string parsing to the given plugin.
pub fn plugin_record(parser: Arc<CountingParser>, zone: Tz) -> TemporalRecord {
    let evaluator = Arc::new(Evaluator::new(
        Strategy::Plugin(parser as Arc<dyn PluginParser>),
        zone,
    ));
    TemporalRecord::new(article_schema(), evaluator)
}

/// A plugin parser that returns a fixed result and records every call.
pub struct CountingParser {
    calls: AtomicUsize,
    seen: Mutex<Vec<(String, TemporalKind)>>,
    result: Option<TemporalValue>,
}

impl CountingParser {
    pub fn returning(result: Option<TemporalValue>) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
            result,
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The `(raw, kind)` arguments of every call received, in order.
    pub fn seen(&self) -> Vec<(String, TemporalKind)> {
        self.seen.lock().expect("parser call log poisoned").clone()
    }
}

impl PluginParser for CountingParser {
    fn parse(&self, raw: &str, kind: TemporalKind) -> Option<TemporalValue> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen
            .lock()
            .expect("parser call log poisoned")
            .push((raw.to_string(), kind));
        self.result
    }
}
